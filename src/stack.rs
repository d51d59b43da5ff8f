/// Growable LIFO work list.
///
/// Backs the tree generator's pending-node list and the iterative
/// traversal. Unlike a fixed-capacity stack it never overflows, since tree
/// size is only known at runtime.
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn push(&mut self, item: T) {
        self.data.push(item);
    }

    /// Pops the most recently pushed item, returning `None` if empty
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Returns a reference to the top item without removing it, returning `None` if empty
    pub fn peek(&self) -> Option<&T> {
        self.data.last()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack() {
        let stack = Stack::<i32>::new();
        assert_eq!(stack.len(), 0);
        assert!(stack.is_empty());
        assert!(stack.peek().is_none());
    }

    #[test]
    fn test_push_pop() {
        let mut stack = Stack::with_capacity(8);
        stack.push(42);
        assert_eq!(stack.len(), 1);
        assert!(!stack.is_empty());

        assert_eq!(stack.pop(), Some(42));
        assert_eq!(stack.len(), 0);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_lifo_order() {
        let mut stack = Stack::new();
        stack.extend(0..5);

        for i in (0..5).rev() {
            assert_eq!(stack.pop(), Some(i));
        }
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_peek() {
        let mut stack = Stack::new();
        assert!(stack.peek().is_none());
        stack.push(42);
        assert_eq!(stack.peek(), Some(&42));
        assert_eq!(stack.len(), 1);

        stack.push(84);
        assert_eq!(stack.peek(), Some(&84));
    }

    #[test]
    fn test_clear() {
        let mut stack = Stack::new();
        stack.extend(0..5);
        assert_eq!(stack.len(), 5);
        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_grows_past_initial_capacity() {
        let mut stack = Stack::with_capacity(2);
        stack.extend(0..1000);
        assert_eq!(stack.len(), 1000);
        assert_eq!(stack.pop(), Some(999));
    }
}
