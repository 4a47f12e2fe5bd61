//! # guardian-runtime
//!
//! `GuardianRuntime` owns the configuration, the record store, and every
//! engine. Construct one at service start and share it by handle.

pub mod runtime;
pub mod tracing_setup;

pub use runtime::{GuardianRuntime, RuntimeOptions};
