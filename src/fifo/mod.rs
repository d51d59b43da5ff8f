//! Fixed-capacity first-in-first-out buffers.
//!
//! Every variant obeys the same contract: `offer` appends at the back, and
//! once the buffer holds `capacity` values it evicts the oldest one first.
//! After any run of offers the retained contents are the last
//! `min(offered, capacity)` values, oldest first. The variants differ only
//! in storage strategy and allocation profile.

pub mod chan;
pub mod intlist;
pub mod list;
pub mod realloc;
pub mod shift;

pub use chan::ChanFifo;
pub use intlist::{IntList, IntListFifo};
pub use list::ListFifo;
pub use realloc::ReallocFifo;
pub use shift::ShiftFifo;

use thiserror::Error;

/// Capability shared by all FIFO variants.
pub trait Fifo<T> {
    /// Appends `value`, evicting the oldest retained value first when full.
    fn offer(&mut self, value: T);

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Retained contents, oldest first.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FifoError {
    #[error("fifo capacity must be greater than zero")]
    ZeroCapacity,
}

pub(crate) fn check_capacity(variant: &'static str, capacity: usize) -> Result<(), FifoError> {
    if capacity == 0 {
        return Err(FifoError::ZeroCapacity);
    }
    tracing::debug!(variant, capacity, "fifo created");
    Ok(())
}
