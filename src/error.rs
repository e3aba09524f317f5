// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassforgeError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Word list file '{}' could not be read: {source}", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot pick {requested} distinct words from a list of {available}")]
    SamplingError { requested: usize, available: usize },

    #[error("IO error: {0}")]
    IoFailure(#[from] io::Error),

    #[error("No word list configured. Pass --word-list or set PASSFORGE_WORD_LIST")]
    MissingWordList,
}

pub type Result<T> = std::result::Result<T, PassforgeError>;
