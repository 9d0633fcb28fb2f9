//! errors.rs
//! Errores del núcleo de mensajería.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HubError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Message not found: {0}")]
    NotFound(String),
}

pub type HubResult<T> = Result<T, HubError>;
