//! Fixed-capacity stack of integers.

use alloc::boxed::Box;
use alloc::vec;
use core::fmt;

use super::StackError;

/// A LIFO stack of `i32` with a capacity fixed at construction.
///
/// The backing storage is allocated once and never grows. `index` is the next
/// free slot, so `0 <= index <= capacity` always holds.
///
/// # Examples
///
/// ```
/// use linear_ds::stack::ArrayStack;
///
/// let mut stack = ArrayStack::new(3);
/// for i in 1..=3 {
///     stack.push(i)?;
/// }
/// assert!(stack.is_full());
///
/// assert_eq!(stack.pop()?, 3);
/// assert_eq!(stack.pop()?, 2);
/// assert_eq!(stack.pop()?, 1);
/// assert!(stack.is_empty());
/// # Ok::<(), linear_ds::stack::StackError>(())
/// ```
pub struct ArrayStack {
    items: Box<[i32]>,
    index: usize,
}

impl ArrayStack {
    /// Creates an empty stack that can hold up to `capacity` items.
    ///
    /// A capacity of zero is allowed; such a stack is both empty and full.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            items: vec![0; capacity].into_boxed_slice(),
            index: 0,
        }
    }

    /// Pushes `item` on top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Full`] if the stack is at capacity. The stack is
    /// left unchanged.
    pub fn push(&mut self, item: i32) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Full {
                capacity: self.capacity(),
            }
            .logged("push"));
        }
        self.items[self.index] = item;
        self.index += 1;
        log::trace!("stack: pushed {item}, len={}", self.index);
        Ok(())
    }

    /// Removes and returns the top item.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] if the stack is empty.
    pub fn pop(&mut self) -> Result<i32, StackError> {
        if self.is_empty() {
            return Err(StackError::Empty.logged("pop"));
        }
        self.index -= 1;
        log::trace!("stack: popped, len={}", self.index);
        Ok(self.items[self.index])
    }

    /// Returns the top item without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] if the stack is empty.
    pub fn peek(&self) -> Result<i32, StackError> {
        self.index
            .checked_sub(1)
            .map(|top| self.items[top])
            .ok_or_else(|| StackError::Empty.logged("peek"))
    }

    /// Returns `true` if the stack holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index == 0
    }

    /// Returns `true` if the stack is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.index == self.items.len()
    }

    /// Returns the number of items on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index
    }

    /// Returns the fixed capacity of the stack.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Empties the stack. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.index = 0;
    }
}

impl fmt::Debug for ArrayStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field("items", &&self.items[..self.index])
            .field("capacity", &self.capacity())
            .finish()
    }
}
