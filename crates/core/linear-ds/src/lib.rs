//! Linear data structures built from owned, singly linked nodes and fixed
//! arrays.
//!
//! # Overview
//!
//! The crate includes the following containers:
//!
//! - [`list::LinkedList`] - a singly linked sequence with positional insert,
//!   remove, get and search
//! - [`stack::LinkedStack`] - a dynamically sized LIFO stack of linked nodes
//! - [`stack::ArrayStack`] - a fixed-capacity LIFO stack of `i32`
//!
//! The containers are independent of each other. None of them synchronizes
//! internally; share one between threads behind a mutex.
//!
//! # Errors
//!
//! Every fallible operation returns a [`Result`]. A failed call leaves the
//! container exactly as it was.
//!
//! - [`ListError`] - absent elements and out-of-range indices
//! - [`StackError`] - popping an empty stack or pushing onto a full one
//!
//! # Logging
//!
//! Structural changes are reported through the [`log`] facade at `trace`
//! level and rejected operations at `debug` level. No logger is installed by
//! this crate.
//!
//! # Examples
//!
//! ```
//! use linear_ds::{LinkedList, LinkedStack};
//!
//! let mut list = LinkedList::<&str>::new();
//! list.add("A")?;
//! list.add("B")?;
//! list.insert(1, "C")?;
//! assert_eq!(list.to_string(), "[A, C, B]");
//!
//! let mut stack = LinkedStack::new();
//! while let Ok(Some(element)) = list.remove(0) {
//!     stack.push(element);
//! }
//! assert_eq!(stack.pop(), Ok("B"));
//! # Ok::<(), linear_ds::ListError>(())
//! ```
//!
//! # Features
//!
//! - `std` (default): Builds the in-crate unit tests against `std`

#![no_std]

extern crate alloc;

pub mod list;
pub mod stack;

pub use list::{LinkedList, ListError};
pub use stack::{ArrayStack, LinkedStack, StackError};
