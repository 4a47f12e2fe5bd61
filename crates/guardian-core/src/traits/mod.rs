pub mod store;

pub use store::{IPatternStore, IQValueStore, IVerificationStore, QValueRow};
