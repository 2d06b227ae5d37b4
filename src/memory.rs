use crate::error::{ChunkError, Result};

/// Capacity of a buffer after its first growth
pub const MIN_CAPACITY: usize = 8;

/// The capacity a full buffer of `capacity` elements grows to.
/// Doubles once past [`MIN_CAPACITY`] so appends stay amortized O(1).
pub fn grow_capacity(capacity: usize) -> Result<usize> {
    if capacity < MIN_CAPACITY {
        return Ok(MIN_CAPACITY);
    }

    #[cfg(not(feature = "debug_stress_memory"))]
    let grown = capacity.checked_mul(2);
    // Reallocate on every append to shake out bugs in growth
    #[cfg(feature = "debug_stress_memory")]
    let grown = capacity.checked_add(1);

    grown.ok_or(ChunkError::OutOfMemory {
        requested: usize::MAX,
    })
}

/// Reallocate `buffer` so it holds `new_capacity` elements without allocating again.
/// Existing elements are moved over. On failure `buffer` is left untouched.
pub fn grow_array<T>(buffer: &mut Vec<T>, new_capacity: usize) -> Result<()> {
    let additional = new_capacity.saturating_sub(buffer.len());
    buffer
        .try_reserve_exact(additional)
        .map_err(|_| ChunkError::OutOfMemory {
            requested: new_capacity,
        })?;

    #[cfg(feature = "debug_log_memory")]
    log::trace!(
        "{:?} grow {} to {} elements",
        buffer.as_ptr(),
        std::any::type_name::<T>(),
        new_capacity
    );

    Ok(())
}

/// Release the storage behind `buffer`, leaving it empty and unallocated
pub fn free_array<T>(buffer: &mut Vec<T>) {
    #[cfg(feature = "debug_log_memory")]
    log::trace!(
        "{:?} free {} {}",
        buffer.as_ptr(),
        buffer.capacity(),
        std::any::type_name::<T>()
    );

    *buffer = Vec::new();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_growth_goes_to_minimum() {
        assert_eq!(grow_capacity(0), Ok(MIN_CAPACITY));
        assert_eq!(grow_capacity(MIN_CAPACITY - 1), Ok(MIN_CAPACITY));
    }

    #[cfg(not(feature = "debug_stress_memory"))]
    #[test]
    fn growth_doubles() {
        let mut capacity = 0;
        let mut seen = vec![];
        for _ in 0..5 {
            capacity = grow_capacity(capacity).unwrap();
            seen.push(capacity);
        }
        assert_eq!(seen, vec![8, 16, 32, 64, 128]);
    }

    #[test]
    fn growth_overflow_is_out_of_memory() {
        assert!(matches!(
            grow_capacity(usize::MAX),
            Err(ChunkError::OutOfMemory { .. })
        ));
    }

    #[test]
    fn grow_array_keeps_contents() {
        let mut buffer: Vec<u32> = vec![];
        for i in 0..20 {
            if buffer.len() == buffer.capacity() {
                let new_capacity = grow_capacity(buffer.capacity()).unwrap();
                grow_array(&mut buffer, new_capacity).unwrap();
                assert!(buffer.capacity() >= new_capacity);
            }
            buffer.push(i);
        }
        assert_eq!(buffer, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn failed_grow_leaves_buffer_untouched() {
        let mut buffer: Vec<u32> = vec![1, 2, 3];
        let capacity = buffer.capacity();
        let result = grow_array(&mut buffer, usize::MAX);
        assert_eq!(
            result,
            Err(ChunkError::OutOfMemory {
                requested: usize::MAX
            })
        );
        assert_eq!(buffer, vec![1, 2, 3]);
        assert_eq!(buffer.capacity(), capacity);
    }

    #[test]
    fn free_array_releases_storage() {
        let mut buffer: Vec<u8> = vec![0; 32];
        free_array(&mut buffer);
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 0);

        // Freeing twice is fine
        free_array(&mut buffer);
        assert_eq!(buffer.capacity(), 0);
    }
}
