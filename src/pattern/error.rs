// Mon Feb 02 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Empty pattern")]
    Empty,
    #[error("Invalid pattern token: {0}")]
    InvalidToken(String),
}
