//! JSON-file dataset backing for the engine's store traits.
//!
//! Lets the scorer run against an exported dataset -- local evaluation,
//! demos, and integration tests -- without any live platform connection.

pub mod dataset;

pub use dataset::{Dataset, DatasetStore, StoreLoadError};
