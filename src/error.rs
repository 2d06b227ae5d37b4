use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChunkError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// A backing buffer could not be grown to hold `requested` elements
    #[error("out of memory growing buffer to {requested} elements")]
    OutOfMemory { requested: usize },
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("unknown opcode {byte} at offset {offset}")]
    UnknownOpCode { byte: u8, offset: usize },
}

impl ChunkError {
    pub fn out_of_range<T>(index: usize, len: usize) -> Result<T> {
        Err(ChunkError::IndexOutOfRange { index, len })
    }
}
