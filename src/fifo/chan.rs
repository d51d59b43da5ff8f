use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};

use super::{Fifo, FifoError, check_capacity};

/// A bounded channel used as a ring buffer.
///
/// `offer` tries a non-blocking send; when the channel is full it receives
/// one value and sends again. The receive-then-send pair is not atomic: with
/// several concurrent callers two evictions can interleave, ordering across
/// callers is not guaranteed, and the final send may block until another
/// caller frees a slot. Single-threaded use meets the full FIFO contract.
pub struct ChanFifo<T> {
    tx: Sender<T>,
    rx: Receiver<T>,
    cap: usize,
}

impl<T> ChanFifo<T> {
    pub fn new(capacity: usize) -> Result<Self, FifoError> {
        check_capacity("chan", capacity)?;
        let (tx, rx) = bounded(capacity);
        Ok(Self {
            tx,
            rx,
            cap: capacity,
        })
    }

    /// Shared-reference offer, usable from several threads at once.
    pub fn offer(&self, value: T) {
        let value = match self.tx.try_send(value) {
            Ok(()) => return,
            Err(TrySendError::Full(value)) | Err(TrySendError::Disconnected(value)) => value,
        };

        let _ = self.rx.try_recv();
        // both ends are owned here, so send can only block, never disconnect
        let _ = self.tx.send(value);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Drains the retained values, oldest first.
    pub fn drain(&self) -> Vec<T> {
        self.rx.try_iter().collect()
    }
}

impl<T> Fifo<T> for ChanFifo<T> {
    #[inline]
    fn offer(&mut self, value: T) {
        ChanFifo::offer(self, value);
    }

    #[inline]
    fn len(&self) -> usize {
        ChanFifo::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.cap
    }

    /// Drains and refills the channel; only meaningful without concurrent
    /// offers in flight.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let values = self.drain();
        for v in &values {
            let _ = self.tx.try_send(v.clone());
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fifo::testing::offer_all;

    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_evicts_oldest() {
        let fifo = ChanFifo::new(3).unwrap();
        assert_eq!(offer_all(fifo, &[1, 2, 3, 4, 5]), vec![3, 4, 5]);
    }

    #[test]
    fn test_capacity_one() {
        let fifo = ChanFifo::new(1).unwrap();
        assert_eq!(offer_all(fifo, &[7, 8, 9]), vec![9]);
    }

    #[test]
    fn test_to_vec_preserves_contents() {
        let mut fifo = ChanFifo::new(4).unwrap();
        for v in 0..6 {
            Fifo::offer(&mut fifo, v);
        }
        assert_eq!(fifo.to_vec(), vec![2, 3, 4, 5]);
        assert_eq!(fifo.to_vec(), vec![2, 3, 4, 5]);
        assert_eq!(fifo.drain(), vec![2, 3, 4, 5]);
        assert!(Fifo::is_empty(&fifo));
    }

    #[test]
    fn test_concurrent_offers_stay_bounded() {
        let fifo = Arc::new(ChanFifo::new(8).unwrap());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let fifo = Arc::clone(&fifo);
                thread::spawn(move || {
                    for i in 0..1000 {
                        fifo.offer(t * 1000 + i);
                        assert!(fifo.len() <= 8);
                    }
                })
            })
            .collect();

        // a racing send may park until another caller frees a slot; keep
        // draining so a producer left blocked on its last send can finish
        while !handles.iter().all(|h| h.is_finished()) {
            let _ = fifo.drain();
            thread::yield_now();
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(fifo.len() <= 8);
    }
}
