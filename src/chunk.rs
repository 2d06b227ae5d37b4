use std::fmt::{self, Debug, Formatter};

use crate::{
    error::{ChunkError, Result},
    memory::{free_array, grow_array, grow_capacity},
    op_code::OpCode,
    value::{Value, ValueArray},
};

/// A sequence of bytecode along with the source line of every byte and the
/// constants the bytecode refers to.
pub struct Chunk {
    code: Vec<u8>,
    /// Parallel to `code`: `lines[i]` is the line that produced `code[i]`
    lines: Vec<u32>,
    /// Allocated slots shared by `code` and `lines`
    capacity: usize,
    constants: ValueArray,
}

impl Chunk {
    /// An empty chunk. Nothing is allocated until the first write.
    pub fn new() -> Chunk {
        Chunk {
            code: vec![],
            lines: vec![],
            capacity: 0,
            constants: ValueArray::new(),
        }
    }

    /// Append a byte and the line it came from.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::OutOfMemory`] if the chunk is full and can't grow.
    /// The chunk is unchanged in that case.
    pub fn write(&mut self, byte: u8, line: u32) -> Result<()> {
        if self.code.len() == self.capacity {
            let new_capacity = grow_capacity(self.capacity)?;
            self.grow(new_capacity)?;
        }
        self.code.push(byte);
        self.lines.push(line);
        debug_assert_eq!(self.code.len(), self.lines.len());
        Ok(())
    }

    /// Write the given op code to the chunk
    pub fn write_op(&mut self, opcode: OpCode, line: u32) -> Result<()> {
        self.write(opcode.into(), line)
    }

    /// Add `value` to the constant pool and return its index.
    /// Equal values are not merged: every call gets a fresh slot.
    pub fn add_constant(&mut self, value: Value) -> Result<usize> {
        self.constants.write(value)?;
        Ok(self.constants.len() - 1)
    }

    /// Release all storage. The chunk is left empty and ready for reuse.
    pub fn free(&mut self) {
        free_array(&mut self.code);
        free_array(&mut self.lines);
        self.capacity = 0;
        self.constants.free();
    }

    // Both buffers are reserved before `capacity` moves, so a failure part way
    // leaves at most spare room behind and never a visible change.
    fn grow(&mut self, new_capacity: usize) -> Result<()> {
        grow_array(&mut self.code, new_capacity)?;
        grow_array(&mut self.lines, new_capacity)?;
        self.capacity = new_capacity;
        Ok(())
    }

    pub fn code(&self) -> &[u8] {
        &self.code
    }

    pub fn lines(&self) -> &[u32] {
        &self.lines
    }

    pub fn constants(&self) -> &ValueArray {
        &self.constants
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn byte_at(&self, offset: usize) -> Result<u8> {
        match self.code.get(offset) {
            Some(byte) => Ok(*byte),
            None => ChunkError::out_of_range(offset, self.code.len()),
        }
    }

    pub fn line_at(&self, offset: usize) -> Result<u32> {
        match self.lines.get(offset) {
            Some(line) => Ok(*line),
            None => ChunkError::out_of_range(offset, self.lines.len()),
        }
    }

    /// Decode the byte at `offset` as an opcode. Only meaningful at
    /// instruction boundaries; operand bytes may decode to anything.
    pub fn op_code_at(&self, offset: usize) -> Result<OpCode> {
        let byte = self.byte_at(offset)?;
        OpCode::try_from(byte).map_err(|_| ChunkError::UnknownOpCode { byte, offset })
    }

    pub fn constant(&self, index: usize) -> Result<Value> {
        self.constants.get(index)
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Chunk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chunk")
            .field("code", &self.code)
            .field("lines", &self.lines)
            .field("capacity", &self.capacity)
            .field("constants", &self.constants)
            .finish()
    }
}
