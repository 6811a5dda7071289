use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BingoError {
    #[error("Word is empty")]
    EmptyWord,
    #[error("Word is already in the list")]
    DuplicateWord,
    #[error("Not enough words to deal, have {have} but need {need}")]
    NotEnoughWords { have: usize, need: CellCount },
    #[error("Invalid cell index {0}")]
    InvalidIndex(usize),
    #[error("No game is being played")]
    NotPlaying,
    #[error("A game is already being played")]
    AlreadyPlaying,
}

pub type Result<T> = core::result::Result<T, BingoError>;

/// Failure reported by a [`Storage`](crate::Storage) backend when writing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Storage write failed for key {key:?}: {reason}")]
pub struct StorageError {
    pub key: alloc::string::String,
    pub reason: alloc::string::String,
}
