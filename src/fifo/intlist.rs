use core::fmt;

use super::{Fifo, FifoError, check_capacity};

type SlotIndex = usize;

struct Slot<T> {
    val: T,
    next: Option<SlotIndex>,
}

/// Singly linked list specialised for FIFO rotation.
///
/// Nodes live in an arena and link forward by index; only the two ends are
/// ever touched, so no back-references are kept.
pub struct IntList<T> {
    slots: Vec<Slot<T>>,
    front: Option<SlotIndex>,
    back: Option<SlotIndex>,
}

impl<T> IntList<T> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            front: None,
            back: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            front: None,
            back: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn push_back(&mut self, val: T) {
        let index = self.slots.len();
        self.slots.push(Slot { val, next: None });
        match self.back {
            Some(back) => self.slots[back].next = Some(index),
            None => self.front = Some(index),
        }
        self.back = Some(index);
    }

    /// Relinks the front node behind the back node.
    ///
    /// No-op when the list holds a single node, since front is already back.
    pub fn move_front_to_back(&mut self) {
        let (Some(front), Some(back)) = (self.front, self.back) else {
            return;
        };
        let Some(second) = self.slots[front].next else {
            return;
        };

        self.front = Some(second);
        self.slots[back].next = Some(front);
        self.slots[front].next = None;
        self.back = Some(front);
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.front.map(|i| &mut self.slots[i].val)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.front,
        }
    }
}

impl<T> Default for IntList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for IntList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[IntList len={}", self.len())?;
        for val in self.iter() {
            write!(f, " {val}")?;
        }
        write!(f, "]")
    }
}

pub struct Iter<'a, T> {
    list: &'a IntList<T>,
    cursor: Option<SlotIndex>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        let slot = &list.slots[self.cursor?];
        self.cursor = slot.next;
        Some(&slot.val)
    }
}

/// FIFO over [`IntList`]: the same allocation profile as the std list
/// variant without the generic list overhead.
pub struct IntListFifo<T> {
    list: IntList<T>,
    cap: usize,
}

impl<T> IntListFifo<T> {
    pub fn new(capacity: usize) -> Result<Self, FifoError> {
        check_capacity("intlist", capacity)?;
        Ok(Self {
            list: IntList::with_capacity(capacity),
            cap: capacity,
        })
    }

    pub fn list(&self) -> &IntList<T> {
        &self.list
    }
}

impl<T> Fifo<T> for IntListFifo<T> {
    fn offer(&mut self, value: T) {
        if self.list.len() < self.cap {
            self.list.push_back(value);
            return;
        }

        if let Some(front) = self.list.front_mut() {
            *front = value;
        }
        self.list.move_front_to_back();
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
