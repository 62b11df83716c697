//! Owned singly-linked list.
//!
//! [`Chain`] is a cons-style list in which every node uniquely owns the
//! node after it. There is no structural sharing: cloning walks the whole
//! chain and allocates a fresh node for every element, so a clone can be
//! mutated without affecting the original.
//!
//! - O(1) prepend and first-element access
//! - O(n) append, last-element access, and positional operations
//!
//! # Ownership
//!
//! ```text
//! head -> [5 | next] -> [7 | next] -> [10 | None]
//! ```
//!
//! Dropping a node drops everything reachable from it. The chain unlinks
//! nodes one at a time on drop, so destroying a long chain does not recurse.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::storage::Chain;
//!
//! let mut chain = Chain::new();
//! chain.append(10);
//! chain.prepend(5);
//! chain.insert_at(7, 1).unwrap();
//! assert_eq!(chain.len(), 3);
//! assert_eq!(chain.get(1), Ok(&7));
//!
//! let tail = chain.sub_list(1, 2).unwrap();
//! assert_eq!(tail, Chain::from_slice(&[7, 10]));
//! assert_eq!(chain.len(), 3);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::IndexOutOfRange;

/// The slot a node hangs from: either the chain's head or a node's `next`.
type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    element: T,
    next: Link<T>,
}

impl<T> Node<T> {
    #[inline]
    fn boxed(element: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { element, next })
    }
}

/// An owned singly-linked list with a cached length.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `prepend`      | O(1)       |
/// | `first`        | O(1)       |
/// | `remove_first` | O(1)       |
/// | `len`          | O(1)       |
/// | `append`       | O(n)       |
/// | `last`         | O(n)       |
/// | `remove_last`  | O(n)       |
/// | `get`          | O(index)   |
/// | `insert_at`    | O(index)   |
/// | `remove_at`    | O(index)   |
/// | `sub_list`     | O(end)     |
/// | `concat`       | O(n + m)   |
/// | `clone`        | O(n)       |
pub struct Chain<T> {
    head: Link<T>,
    length: usize,
}

impl<T> Chain<T> {
    /// Creates a new empty chain.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Returns the number of nodes in the chain.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the chain contains no nodes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds `element` at the front of the chain.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn prepend(&mut self, element: T) {
        let next = self.head.take();
        self.head = Some(Node::boxed(element, next));
        self.length += 1;
    }

    /// Adds `element` at the back of the chain.
    ///
    /// # Complexity
    ///
    /// O(n): walks to the terminal node.
    pub fn append(&mut self, element: T) {
        let tail = self.link_mut(self.length);
        *tail = Some(Node::boxed(element, None));
        self.length += 1;
    }

    /// Inserts `element` so that it ends up at position `index`.
    ///
    /// `index == 0` prepends and `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] when `index > self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::storage::Chain;
    ///
    /// let mut chain = Chain::from_slice(&[1, 3]);
    /// chain.insert_at(2, 1).unwrap();
    /// assert_eq!(chain, Chain::from_slice(&[1, 2, 3]));
    /// assert!(chain.insert_at(9, 4).is_err());
    /// ```
    pub fn insert_at(&mut self, element: T, index: usize) -> Result<(), IndexOutOfRange> {
        if index > self.length {
            return Err(IndexOutOfRange::reported(index, self.length));
        }
        if index == 0 {
            self.prepend(element);
        } else if index == self.length {
            self.append(element);
        } else {
            let link = self.link_mut(index);
            let next = link.take();
            *link = Some(Node::boxed(element, next));
            self.length += 1;
        }
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] when `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.node(index)
            .map(|node| &node.element)
            .ok_or_else(|| IndexOutOfRange::reported(index, self.length))
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] when the chain is empty.
    pub fn first(&self) -> Result<&T, IndexOutOfRange> {
        self.head
            .as_deref()
            .map(|node| &node.element)
            .ok_or_else(|| IndexOutOfRange::reported(0, 0))
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] when the chain is empty.
    pub fn last(&self) -> Result<&T, IndexOutOfRange> {
        match self.length.checked_sub(1) {
            Some(index) => self.get(index),
            None => Err(IndexOutOfRange::reported(0, 0)),
        }
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] when the chain is empty.
    pub fn remove_first(&mut self) -> Result<T, IndexOutOfRange> {
        let node = self
            .head
            .take()
            .ok_or_else(|| IndexOutOfRange::reported(0, 0))?;
        let Node { element, next } = *node;
        self.head = next;
        self.length -= 1;
        Ok(element)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] when the chain is empty.
    pub fn remove_last(&mut self) -> Result<T, IndexOutOfRange> {
        match self.length {
            0 => Err(IndexOutOfRange::reported(0, 0)),
            1 => self.remove_first(),
            length => self.unlink(length - 1),
        }
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] when `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::storage::Chain;
    ///
    /// let mut chain = Chain::from_slice(&['a', 'b', 'c']);
    /// assert_eq!(chain.remove_at(1), Ok('b'));
    /// assert_eq!(chain, Chain::from_slice(&['a', 'c']));
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        if index >= self.length {
            return Err(IndexOutOfRange::reported(index, self.length));
        }
        if index == 0 {
            return self.remove_first();
        }
        self.unlink(index)
    }

    /// Detaches the node at `index` (which must exist) and relinks its
    /// predecessor to its successor.
    fn unlink(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        let length = self.length;
        let link = self.link_mut(index);
        let node = link
            .take()
            .ok_or_else(|| IndexOutOfRange::reported(index, length))?;
        let Node { element, next } = *node;
        *link = next;
        self.length -= 1;
        Ok(element)
    }

    fn node(&self, index: usize) -> Option<&Node<T>> {
        let mut current = self.head.as_deref();
        for _ in 0..index {
            current = current?.next.as_deref();
        }
        current
    }

    /// Returns the link holding position `position`: the head for 0, the
    /// `next` of node `position - 1` otherwise. `position` may equal `len()`,
    /// which yields the terminal `None` link.
    fn link_mut(&mut self, position: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..position {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        std::iter::successors(self.head.as_deref(), |node| node.next.as_deref())
            .map(|node| &node.element)
    }
}

impl<T: Clone> Chain<T> {
    /// Creates a chain holding a copy of every element of `items`, in order.
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        let mut chain = Self::new();
        chain.extend_cloned(items);
        chain
    }

    /// Returns a new chain with copies of the elements in `start..=end`.
    ///
    /// The receiver is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] when `start > end` (reported against
    /// `start`) or `end >= self.len()` (reported against `end`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::storage::Chain;
    ///
    /// let chain = Chain::from_slice(&[5, 7, 10]);
    /// assert_eq!(chain.sub_list(1, 2).unwrap(), Chain::from_slice(&[7, 10]));
    /// assert!(chain.sub_list(2, 1).is_err());
    /// assert!(chain.sub_list(0, 3).is_err());
    /// ```
    pub fn sub_list(&self, start: usize, end: usize) -> Result<Self, IndexOutOfRange> {
        if start > end {
            return Err(IndexOutOfRange::reported(start, self.length));
        }
        if end >= self.length {
            return Err(IndexOutOfRange::reported(end, self.length));
        }

        let mut result = Self::new();
        result.extend_cloned(self.elements().skip(start).take(end - start + 1));
        Ok(result)
    }

    /// Returns a new chain holding copies of this chain's elements followed
    /// by copies of `other`'s. Neither input is modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::storage::Chain;
    ///
    /// let left = Chain::from_slice(&[1, 2]);
    /// let right = Chain::from_slice(&[3]);
    /// assert_eq!(left.concat(&right), Chain::from_slice(&[1, 2, 3]));
    /// assert_eq!(left.len(), 2);
    /// ```
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.extend_cloned(other.elements());
        result
    }

    /// Appends clones of `elements` behind the terminal node in one walk.
    fn extend_cloned<'a, I>(&mut self, elements: I)
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut appended = 0;
        let mut tail = self.link_mut(self.length);
        for element in elements {
            let node = tail.insert(Node::boxed(element.clone(), None));
            tail = &mut node.next;
            appended += 1;
        }
        self.length += appended;
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Chain<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self {
        tracing::trace!(length = self.length, "chain deep copy");
        let mut copy = Self::new();
        copy.extend_cloned(self.elements());
        copy
    }

    /// Builds the full copy first and only then swaps it in, so the receiver
    /// is either an independent copy of `source` or untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        std::mem::swap(self, &mut fresh);
    }
}

impl<T: PartialEq> PartialEq for Chain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.elements().eq(other.elements())
    }
}

impl<T: Eq> Eq for Chain<T> {}

impl<T: Hash> Hash for Chain<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self.elements() {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Chain<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self.elements() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Tests
// =============================================================================
