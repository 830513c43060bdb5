use thiserror::Error;

use crate::modules::schedule::adapters::outbound::store::StoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("domain rejected: {0}")]
    Domain(String),
}
