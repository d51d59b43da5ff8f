use std::collections::LinkedList;

use super::{Fifo, FifoError, check_capacity};

/// Backed by the general-purpose `LinkedList`. Allocates nodes only during
/// warm-up: on overflow the front node is detached, overwritten and relinked
/// at the back.
pub struct ListFifo<T> {
    list: LinkedList<T>,
    cap: usize,
}

impl<T> ListFifo<T> {
    pub fn new(capacity: usize) -> Result<Self, FifoError> {
        check_capacity("list", capacity)?;
        Ok(Self {
            list: LinkedList::new(),
            cap: capacity,
        })
    }

    pub fn iter(&self) -> std::collections::linked_list::Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Fifo<T> for ListFifo<T> {
    fn offer(&mut self, value: T) {
        if self.list.len() < self.cap {
            self.list.push_back(value);
            return;
        }

        // split_off(1) walks from the front, so detaching is O(1)
        let mut rest = self.list.split_off(1);
        if let Some(front) = self.list.front_mut() {
            *front = value;
        }
        rest.append(&mut self.list);
        self.list = rest;
    }

    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.cap
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.iter().cloned().collect()
    }
}
