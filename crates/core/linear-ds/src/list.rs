//! Singly linked list with positional access.
//!
//! This module provides [`LinkedList`], a head-referenced chain of heap
//! allocated nodes. Every node owns the next one, so the list owns the whole
//! chain and no node is ever shared.
//!
//! # Absent elements
//!
//! Operations that take an element accept anything convertible into
//! `Option<T>`. A plain value is treated as present; passing `None` models an
//! absent element and is rejected with [`ListError::NullArgument`].
//!
//! # Performance
//!
//! - Append, insert, get, search, remove: O(n)
//! - Length and emptiness: O(1)
//!
//! # Examples
//!
//! ```
//! use linear_ds::list::LinkedList;
//!
//! let mut list = LinkedList::<&str>::new();
//! list.add("A")?;
//! list.add("B")?;
//! list.insert(1, "C")?;
//!
//! assert_eq!(list.to_string(), "[A, C, B]");
//! assert_eq!(list.get(1), Ok(&"C"));
//! # Ok::<(), linear_ds::list::ListError>(())
//! ```

use alloc::boxed::Box;
use core::fmt;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    element: T,
    next: Link<T>,
}

/// A singly linked, dynamically sized sequence of present elements.
///
/// `len` is maintained incrementally and always equals the number of nodes
/// reachable from the head.
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

/// Errors that can occur when operating on a [`LinkedList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// An absent (`None`) element was passed to an operation that forbids it.
    NullArgument,
    /// A positional index fell outside the currently valid range.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
}

impl ListError {
    fn logged(self, op: &str) -> Self {
        log::debug!("list: {op} rejected: {self}");
        self
    }
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullArgument => f.write_str("the list does not permit absent elements"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl core::error::Error for ListError {}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_ds::list::LinkedList;
    ///
    /// let list = LinkedList::<u8>::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.len(), 0);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Appends `element` to the end of the list.
    ///
    /// Always returns `Ok(true)` on success, signalling that the list changed.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NullArgument`] if `element` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_ds::list::{LinkedList, ListError};
    ///
    /// let mut list = LinkedList::<i32>::new();
    /// assert_eq!(list.add(7), Ok(true));
    /// assert_eq!(list.add(None), Err(ListError::NullArgument));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn add(&mut self, element: impl Into<Option<T>>) -> Result<bool, ListError> {
        let element = element
            .into()
            .ok_or_else(|| ListError::NullArgument.logged("add"))?;
        let tail = self.link_mut(self.len);
        *tail = Some(Box::new(Node {
            element,
            next: None,
        }));
        self.len += 1;
        log::trace!("list: appended, len={}", self.len);
        Ok(true)
    }

    /// Inserts `element` before the element currently at `index`, shifting it
    /// and every later element one position to the right.
    ///
    /// The valid range is `index < len`. Inserting at `index == len` is not
    /// accepted, which also means nothing can be inserted into an empty list
    /// through this method; use [`add`](Self::add) to append.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NullArgument`] if `element` is `None` (checked
    /// first), or [`ListError::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_ds::list::{LinkedList, ListError};
    ///
    /// let mut list = LinkedList::<char>::new();
    /// assert_eq!(
    ///     list.insert(0, 'x'),
    ///     Err(ListError::IndexOutOfRange { index: 0, len: 0 })
    /// );
    ///
    /// list.add('b')?;
    /// list.insert(0, 'a')?;
    /// assert_eq!(list.to_string(), "[a, b]");
    /// # Ok::<(), ListError>(())
    /// ```
    pub fn insert(
        &mut self,
        index: usize,
        element: impl Into<Option<T>>,
    ) -> Result<bool, ListError> {
        let element = element
            .into()
            .ok_or_else(|| ListError::NullArgument.logged("insert"))?;
        self.check_index(index, "insert")?;
        let slot = self.link_mut(index);
        let next = slot.take();
        *slot = Some(Box::new(Node { element, next }));
        self.len += 1;
        log::trace!("list: inserted at {index}, len={}", self.len);
        Ok(true)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.check_index(index, "get")?;
        self.iter()
            .nth(index)
            .ok_or_else(|| ListError::IndexOutOfRange { index, len: self.len }.logged("get"))
    }

    /// Removes and returns the element at `index`, shifting every later
    /// element one position to the left.
    ///
    /// Removing from an empty list is a no-op that returns `Ok(None)` for any
    /// index.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if the list is not empty and
    /// `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_ds::list::LinkedList;
    ///
    /// let mut list = LinkedList::<&str>::new();
    /// assert_eq!(list.remove(0), Ok(None));
    ///
    /// list.add("a")?;
    /// list.add("b")?;
    /// assert_eq!(list.remove(0), Ok(Some("a")));
    /// assert_eq!(list.len(), 1);
    /// # Ok::<(), linear_ds::list::ListError>(())
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<Option<T>, ListError> {
        if self.is_empty() {
            return Ok(None);
        }
        self.check_index(index, "remove")?;
        Ok(self.unlink(index))
    }

    /// Returns `true` if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes every element. The list is empty afterwards.
    pub fn clear(&mut self) {
        // Unlink node by node so long chains do not recurse in `Box::drop`.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        if self.len > 0 {
            log::trace!("list: cleared {} elements", self.len);
        }
        self.len = 0;
    }

    /// Returns an iterator over the elements from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    fn check_index(&self, index: usize, op: &str) -> Result<(), ListError> {
        if index < self.len {
            Ok(())
        } else {
            Err(ListError::IndexOutOfRange { index, len: self.len }.logged(op))
        }
    }

    /// Returns the link that holds the node at `index`, or the trailing empty
    /// link when `index == len`.
    fn link_mut(&mut self, index: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }

    fn unlink(&mut self, index: usize) -> Option<T> {
        let slot = self.link_mut(index);
        let removed = slot.take().map(|mut node| {
            *slot = node.next.take();
            node.element
        });
        if removed.is_some() {
            self.len -= 1;
            log::trace!("list: unlinked at {index}, len={}", self.len);
        }
        removed
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns `true` if some element is equal to `element`.
    ///
    /// Every node is compared, the tail included. Comparison uses
    /// [`PartialEq`], the same relation [`remove_item`](Self::remove_item)
    /// uses.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NullArgument`] if `element` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_ds::list::LinkedList;
    ///
    /// let mut list = LinkedList::<i32>::new();
    /// assert_eq!(list.contains(&1), Ok(false));
    /// list.add(1)?;
    /// list.add(2)?;
    /// assert_eq!(list.contains(&2), Ok(true));
    /// # Ok::<(), linear_ds::list::ListError>(())
    /// ```
    pub fn contains<'a>(&self, element: impl Into<Option<&'a T>>) -> Result<bool, ListError>
    where
        T: 'a,
    {
        let element = element
            .into()
            .ok_or_else(|| ListError::NullArgument.logged("contains"))?;
        Ok(self.iter().any(|e| e == element))
    }

    /// Removes the first element equal to `element`.
    ///
    /// Returns `Ok(true)` if an element was removed and `Ok(false)` if none
    /// matched, in which case the list is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NullArgument`] if `element` is `None`.
    pub fn remove_item<'a>(
        &mut self,
        element: impl Into<Option<&'a T>>,
    ) -> Result<bool, ListError>
    where
        T: 'a,
    {
        let element = element
            .into()
            .ok_or_else(|| ListError::NullArgument.logged("remove_item"))?;
        let Some(index) = self.iter().position(|e| e == element) else {
            return Ok(false);
        };
        Ok(self.unlink(index).is_some())
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a [`LinkedList`], head to tail.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.element
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
