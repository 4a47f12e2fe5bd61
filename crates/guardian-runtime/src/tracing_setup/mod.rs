//! `tracing` with `EnvFilter`, per-crate log levels.

pub mod setup;
pub mod spans;

pub use setup::{init_from_config, init_tracing, init_tracing_json};
