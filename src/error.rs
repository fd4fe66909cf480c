//! Error types
use std::result;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Hostname or IP must be provided")]
    InvalidAddress,
    #[error("Error connecting to the device: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Could not parse the response received from the device: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Action '{0}' is not defined")]
    UnknownAction(String),
}

pub type Result<T> = result::Result<T, Error>;
