//! LIFO stacks.
//!
//! Two variants share the same error type:
//!
//! - [`LinkedStack`] - a dynamically sized stack of linked nodes
//! - [`ArrayStack`] - a fixed-capacity stack of `i32` backed by a boxed slice
//!
//! Popping or peeking an empty stack, or pushing onto a full [`ArrayStack`],
//! is a precondition violation. Instead of reading or writing out of bounds,
//! both stacks report it as a [`StackError`] and leave their contents untouched.
//!
//! # Examples
//!
//! ```
//! use linear_ds::stack::{ArrayStack, LinkedStack, StackError};
//!
//! let mut linked = LinkedStack::new();
//! linked.push("x");
//! linked.push("y");
//! assert_eq!(linked.pop(), Ok("y"));
//!
//! let mut array = ArrayStack::new(1);
//! array.push(10)?;
//! assert_eq!(array.push(20), Err(StackError::Full { capacity: 1 }));
//! assert_eq!(array.pop(), Ok(10));
//! assert_eq!(array.pop(), Err(StackError::Empty));
//! # Ok::<(), StackError>(())
//! ```

mod array;
mod linked;

pub use array::ArrayStack;
pub use linked::LinkedStack;

use core::fmt;

/// Precondition violations reported by the stacks in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// `pop` or `peek` was called on an empty stack.
    Empty,
    /// `push` was called on an [`ArrayStack`] that is already full.
    Full {
        /// The fixed capacity of the stack.
        capacity: usize,
    },
}

impl StackError {
    fn logged(self, op: &str) -> Self {
        log::debug!("stack: {op} rejected: {self}");
        self
    }
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("stack is empty"),
            Self::Full { capacity } => write!(f, "stack is full (capacity {capacity})"),
        }
    }
}

impl core::error::Error for StackError {}
