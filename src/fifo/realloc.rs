use super::{Fifo, FifoError, check_capacity};

/// Drops the front by copying the tail into a fresh allocation on every
/// overflowing offer. Seen in the wild; wastes memory.
pub struct ReallocFifo<T> {
    buf: Vec<T>,
    cap: usize,
}

impl<T> ReallocFifo<T> {
    pub fn new(capacity: usize) -> Result<Self, FifoError> {
        check_capacity("realloc", capacity)?;
        Ok(Self {
            buf: Vec::with_capacity(capacity),
            cap: capacity,
        })
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }
}

impl<T> Fifo<T> for ReallocFifo<T> {
    fn offer(&mut self, value: T) {
        if self.buf.len() < self.cap {
            self.buf.push(value);
            return;
        }

        let mut next = Vec::with_capacity(self.cap);
        next.extend(self.buf.drain(1..));
        next.push(value);
        self.buf = next;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fifo::testing::offer_all;

    #[test]
    fn test_fills_before_evicting() {
        let mut fifo = ReallocFifo::new(4).unwrap();
        fifo.offer(1);
        fifo.offer(2);
        assert_eq!(fifo.len(), 2);
        assert!(!fifo.is_full());
        assert_eq!(fifo.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_evicts_oldest() {
        let fifo = ReallocFifo::new(3).unwrap();
        assert_eq!(offer_all(fifo, &[1, 2, 3, 4, 5]), vec![3, 4, 5]);
    }

    #[test]
    fn test_overflow_replaces_allocation() {
        let mut fifo = ReallocFifo::new(2).unwrap();
        fifo.offer(1);
        fifo.offer(2);
        let before = fifo.as_slice().as_ptr();
        fifo.offer(3);
        assert_ne!(before, fifo.as_slice().as_ptr());
        assert_eq!(fifo.as_slice(), &[2, 3]);
    }

    #[test]
    fn test_non_copy_values() {
        let mut fifo = ReallocFifo::new(2).unwrap();
        for word in ["a", "b", "c"] {
            fifo.offer(word.to_string());
        }
        assert_eq!(fifo.to_vec(), vec!["b".to_string(), "c".to_string()]);
    }
}
