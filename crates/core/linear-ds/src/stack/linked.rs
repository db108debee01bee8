//! Stack of linked nodes.

use alloc::boxed::Box;
use core::fmt;

use super::StackError;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    item: T,
    next: Link<T>,
}

/// A dynamically sized LIFO stack.
///
/// Each push allocates one node above the current top. The stack places no
/// restriction on the items it holds.
///
/// # Examples
///
/// ```
/// use linear_ds::stack::LinkedStack;
///
/// let mut stack = LinkedStack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert!(stack.is_empty());
/// ```
pub struct LinkedStack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedStack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Pushes `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        let next = self.top.take();
        self.top = Some(Box::new(Node { item, next }));
        self.len += 1;
        log::trace!("stack: pushed, len={}", self.len);
    }

    /// Removes and returns the top item.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, StackError> {
        let node = self.top.take().ok_or_else(|| StackError::Empty.logged("pop"))?;
        let Node { item, next } = *node;
        self.top = next;
        self.len -= 1;
        log::trace!("stack: popped, len={}", self.len);
        Ok(item)
    }

    /// Returns a reference to the top item without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.top
            .as_deref()
            .map(|node| &node.item)
            .ok_or_else(|| StackError::Empty.logged("peek"))
    }

    /// Returns `true` if the stack holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Returns the number of items on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Drops every item on the stack.
    pub fn clear(&mut self) {
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    /// Lists the items from top to bottom.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut link = self.top.as_deref();
        while let Some(node) = link {
            list.entry(&node.item);
            link = node.next.as_deref();
        }
        list.finish()
    }
}
