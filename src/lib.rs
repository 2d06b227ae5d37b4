//#![warn(clippy::pedantic)]

pub mod chunk;
pub mod error;
pub mod memory;
pub mod op_code;
pub mod value;

pub use chunk::Chunk;
pub use error::{ChunkError, Result};
pub use op_code::OpCode;
pub use value::{Value, ValueArray};
