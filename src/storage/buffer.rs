//! Fixed-capacity-until-resized contiguous storage.
//!
//! [`Buffer`] owns exactly one block of `size()` initialized elements.
//! Unlike `Vec`, it has no spare capacity: growing is an explicit
//! [`resize`](Buffer::resize) or a one-slot [`insert`](Buffer::insert).
//!
//! # Examples
//!
//! ```rust
//! use seqkit::storage::Buffer;
//!
//! let mut buffer: Buffer<i32> = Buffer::new(3);
//! buffer.set(0, 10).unwrap();
//! buffer.set(1, 20).unwrap();
//! buffer.set(2, 30).unwrap();
//! assert_eq!(buffer.get(1), Ok(&20));
//!
//! buffer.resize(5);
//! assert_eq!(buffer.size(), 5);
//! assert_eq!(buffer.as_slice(), &[10, 20, 30, 0, 0]);
//! ```

use std::fmt;

use crate::error::IndexOutOfRange;

/// A contiguous block of elements with an explicit size.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `get`     | O(1)       |
/// | `set`     | O(1)       |
/// | `size`    | O(1)       |
/// | `resize`  | O(n)       |
/// | `insert`  | O(n)       |
/// | `clone`   | O(n)       |
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Buffer<T> {
    storage: Box<[T]>,
}

impl<T> Buffer<T> {
    /// Creates an empty buffer.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            storage: Box::default(),
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] when `index >= self.size()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.storage
            .get(index)
            .ok_or_else(|| IndexOutOfRange::reported(index, self.storage.len()))
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] when `index >= self.size()`; the buffer is
    /// left unchanged.
    pub fn set(&mut self, index: usize, element: T) -> Result<(), IndexOutOfRange> {
        let size = self.storage.len();
        let slot = self
            .storage
            .get_mut(index)
            .ok_or_else(|| IndexOutOfRange::reported(index, size))?;
        *slot = element;
        Ok(())
    }

    /// Returns the number of slots in the buffer.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the buffer has no slots.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the elements as a slice, in index order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Inserts `element` at `index`, growing the buffer by exactly one slot.
    ///
    /// Elements at `index` and after shift one position to the right.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] when `index > self.size()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::storage::Buffer;
    ///
    /// let mut buffer = Buffer::from_slice(&[5, 10]);
    /// buffer.insert(1, 7).unwrap();
    /// assert_eq!(buffer.as_slice(), &[5, 7, 10]);
    /// assert!(buffer.insert(4, 0).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), IndexOutOfRange> {
        let size = self.storage.len();
        if index > size {
            return Err(IndexOutOfRange::reported(index, size));
        }
        self.grow_at(index, element);
        Ok(())
    }

    /// Grows the block by one slot at `index`, which must be `<= size()`.
    pub(crate) fn grow_at(&mut self, index: usize, element: T) {
        let size = self.storage.len();
        tracing::trace!(old_size = size, new_size = size + 1, index, "buffer insert");

        let mut elements = std::mem::take(&mut self.storage).into_vec();
        elements.insert(index, element);
        self.storage = elements.into_boxed_slice();
    }
}

impl<T: Default> Buffer<T> {
    /// Creates a buffer of `size` default-valued slots. `size` may be 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::storage::Buffer;
    ///
    /// let buffer: Buffer<i32> = Buffer::new(3);
    /// assert_eq!(buffer.as_slice(), &[0, 0, 0]);
    /// ```
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            storage: std::iter::repeat_with(T::default).take(size).collect(),
        }
    }

    /// Resizes the buffer to `new_size` slots.
    ///
    /// The first `min(size, new_size)` elements keep their indices. Shrinking
    /// drops the tail; growing fills the new slots with `T::default()`.
    ///
    /// # Complexity
    ///
    /// O(`new_size`)
    pub fn resize(&mut self, new_size: usize) {
        let old_size = self.storage.len();
        tracing::trace!(old_size, new_size, "buffer resize");

        let mut elements = std::mem::take(&mut self.storage).into_vec();
        elements.resize_with(new_size, T::default);
        self.storage = elements.into_boxed_slice();
    }
}

impl<T: Clone> Buffer<T> {
    /// Creates a buffer holding a copy of every element of `items`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::storage::Buffer;
    ///
    /// let source = [1, 2, 3, 4];
    /// let buffer = Buffer::from_slice(&source[..2]);
    /// assert_eq!(buffer.size(), 2);
    /// assert_eq!(buffer.get(1), Ok(&2));
    /// ```
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        Self {
            storage: items.into(),
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Buffer<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for Buffer<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            storage: elements.into_boxed_slice(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Buffer<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.storage.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Buffer<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (position, element) in self.storage.iter().enumerate() {
            if position > 0 {
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
