use super::{Fifo, FifoError, check_capacity};

/// Shifts every element one slot toward the front and writes the new value
/// into the last slot. No allocation after warm-up, but each overflowing
/// offer is `O(cap)`.
pub struct ShiftFifo<T> {
    buf: Vec<T>,
    cap: usize,
}

impl<T> ShiftFifo<T> {
    pub fn new(capacity: usize) -> Result<Self, FifoError> {
        check_capacity("shift", capacity)?;
        Ok(Self {
            buf: Vec::with_capacity(capacity),
            cap: capacity,
        })
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }
}

impl<T> Fifo<T> for ShiftFifo<T> {
    fn offer(&mut self, value: T) {
        if self.buf.len() < self.cap {
            self.buf.push(value);
            return;
        }

        // the old front lands in the last slot and is dropped by the write
        self.buf.rotate_left(1);
        self.buf[self.cap - 1] = value;
    }

    #[inline]
    fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.cap
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.buf.clone()
    }
}
