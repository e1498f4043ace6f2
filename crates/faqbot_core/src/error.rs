use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid knowledge base: {0}")]
    InvalidFormat(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, KbError>;
