use std::{
    fmt,
    fmt::{Debug, Display, Formatter},
};

use crate::{
    error::{ChunkError, Result},
    memory::{free_array, grow_array, grow_capacity},
};

#[derive(Clone, Copy)]
pub enum Value {
    Bool(bool),
    Nil,
    Number(f64),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(x) => Display::fmt(&x, f),
            Value::Nil => f.write_str("nil"),
            Value::Number(x) => Display::fmt(&x, f),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Nil
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Append-only pool of values. Indices handed out by [`ValueArray::write`]
/// never change.
#[derive(Default)]
pub struct ValueArray {
    values: Vec<Value>,
    capacity: usize,
}

impl ValueArray {
    pub fn new() -> ValueArray {
        ValueArray {
            values: vec![],
            capacity: 0,
        }
    }

    /// Append `value`, growing the pool first if it is full.
    /// On error the pool is unchanged.
    pub fn write(&mut self, value: Value) -> Result<()> {
        if self.values.len() == self.capacity {
            let new_capacity = grow_capacity(self.capacity)?;
            grow_array(&mut self.values, new_capacity)?;
            self.capacity = new_capacity;
        }
        self.values.push(value);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<Value> {
        match self.values.get(index) {
            Some(value) => Ok(*value),
            None => ChunkError::out_of_range(index, self.values.len()),
        }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Release the storage and return to the empty state. The pool can be reused.
    pub fn free(&mut self) {
        free_array(&mut self.values);
        self.capacity = 0;
    }
}

impl Debug for ValueArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}
