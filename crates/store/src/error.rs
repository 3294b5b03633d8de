//! Arena store errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("User id must not be empty")]
    MissingUserId,

    #[error("Username must not be empty")]
    MissingUsername,
}
