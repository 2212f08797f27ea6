/// A fixed-capacity set of boolean flags packed into a contiguous buffer
/// of bytes, tracking which vertices have left the priority queue.
///
/// Each bit can be individually set or queried.
///
/// # Examples
///
/// ```
/// use spantree::traversal::FinishedSet;
///
/// let mut finished = FinishedSet::new(10);
/// assert!(!finished.get(3));
///
/// finished.set(3);
/// assert!(finished.get(3));
/// ```
pub struct FinishedSet {
    buffer: Box<[u8]>,
    capacity: usize,
}

impl FinishedSet {
    /// Constructs a new [`FinishedSet`] with space for `capacity` bits,
    /// all initialized to zero.
    pub fn new(capacity: usize) -> Self {
        let bytes_needed: usize = capacity.div_ceil(8);
        FinishedSet {
            buffer: vec![0u8; bytes_needed].into_boxed_slice(),
            capacity,
        }
    }

    /// Sets the bit at the given `index` to `1`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn set(&mut self, index: usize) {
        assert!(index < self.capacity);

        let byte_index = index / 8;
        let bit_index = index % 8;

        self.buffer[byte_index] |= 1u8 << bit_index
    }

    /// Returns `true` if the bit at `index` is set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.capacity);

        let byte_index = index / 8;
        let bit_index = index % 8;

        self.buffer[byte_index] & (1u8 << bit_index) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_zero_capacity_constructs() {
        // Just ensure it doesn't panic.
        let _finished = FinishedSet::new(0);
    }

    #[test]
    fn all_bits_start_cleared() {
        for cap in [1usize, 7, 8, 9, 16, 31, 32, 33] {
            let finished = FinishedSet::new(cap);
            for i in 0..cap {
                assert!(!finished.get(i), "bit {} should start cleared for cap {}", i, cap);
            }
        }
    }

    #[test]
    fn set_and_get_across_byte_boundaries() {
        let cap = 40; // >= 5 bytes
        let mut finished = FinishedSet::new(cap);

        let to_set = [0usize, 1, 7, 8, 15, 16, 31, 32, 39];
        for &i in &to_set {
            finished.set(i);
        }
        for i in 0..cap {
            assert_eq!(finished.get(i), to_set.contains(&i));
        }
    }

    #[test]
    fn set_is_idempotent() {
        let mut finished = FinishedSet::new(8);
        finished.set(5);
        finished.set(5);
        assert!(finished.get(5));
        assert!(!finished.get(4));
    }

    #[test]
    #[should_panic]
    fn set_out_of_range_panics() {
        let mut finished = FinishedSet::new(8);
        finished.set(8);
    }

    #[test]
    #[should_panic]
    fn get_out_of_range_panics() {
        let finished = FinishedSet::new(8);
        finished.get(8);
    }
}
