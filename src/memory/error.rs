// Mon Feb 02 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("Empty memory region")]
    EmptyRegion,
    #[error("Out of bounds: {0:#x}+{1:#x} outside region")]
    OutOfBounds(u64, usize),
    #[error("Invalid address: {0:#x}")]
    InvalidAddress(u64),
}
