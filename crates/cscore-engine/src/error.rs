use thiserror::Error;
use uuid::Uuid;

use crate::stores::StoreError;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested profile does not exist. This is the only input problem
    /// surfaced as an error; everything downstream degrades to defaults.
    #[error("profile not found: {0}")]
    ProfileNotFound(Uuid),

    #[error(transparent)]
    Store(#[from] StoreError),
}
