//! Array-backed sequence.

use std::fmt;

use super::Sequence;
use crate::error::IndexOutOfRange;
use crate::storage::Buffer;

/// A [`Sequence`] that owns a [`Buffer`].
///
/// The buffer is kept exactly as long as the sequence: every mutable edit
/// grows it by one slot. With no spare capacity, each `append_mut`
/// reallocates, so appends are O(n) rather than amortized O(1).
///
/// # Time Complexity
///
/// | Operation       | Complexity |
/// |-----------------|------------|
/// | `get`           | O(1)       |
/// | `first`/`last`  | O(1)       |
/// | `append_mut`    | O(n)       |
/// | `prepend_mut`   | O(n)       |
/// | `insert_at_mut` | O(n)       |
/// | persistent ops  | O(n)       |
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::{ArraySequence, Sequence};
///
/// let sequence = ArraySequence::from_slice(&[5, 7, 10]);
/// let extended = sequence.append(20);
/// assert_eq!(extended.len(), 4);
/// assert_eq!(extended.last(), Ok(&20));
/// assert_eq!(sequence.len(), 3);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ArraySequence<T> {
    buffer: Buffer<T>,
}

impl<T> ArraySequence<T> {
    /// Creates an empty sequence.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: Buffer::empty(),
        }
    }

    /// Returns the backing buffer.
    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &Buffer<T> {
        &self.buffer
    }

    /// Consumes the sequence and returns its backing buffer.
    #[inline]
    #[must_use]
    pub fn into_buffer(self) -> Buffer<T> {
        self.buffer
    }
}

impl<T: Clone> ArraySequence<T> {
    /// Creates a sequence holding a copy of every element of `items`.
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        Self {
            buffer: Buffer::from_slice(items),
        }
    }
}

impl<T> Default for ArraySequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Buffer<T>> for ArraySequence<T> {
    fn from(buffer: Buffer<T>) -> Self {
        Self { buffer }
    }
}

impl<T: Clone> Sequence<T> for ArraySequence<T> {
    #[inline]
    fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.buffer.get(index)
    }

    #[inline]
    fn len(&self) -> usize {
        self.buffer.size()
    }

    fn append_mut(&mut self, element: T) {
        let end = self.buffer.size();
        self.buffer.grow_at(end, element);
    }

    fn prepend_mut(&mut self, element: T) {
        self.buffer.grow_at(0, element);
    }

    fn insert_at_mut(&mut self, element: T, index: usize) -> Result<(), IndexOutOfRange> {
        self.buffer.insert(index, element)
    }

    /// Builds the result in a single block sized `self.len() + other.len()`.
    fn concat<S>(&self, other: &S) -> Result<Self, IndexOutOfRange>
    where
        S: Sequence<T> + ?Sized,
    {
        tracing::trace!(
            length = self.len(),
            other_length = other.len(),
            "persistent concat"
        );
        let mut elements = Vec::with_capacity(self.len() + other.len());
        elements.extend_from_slice(self.buffer.as_slice());
        for index in 0..other.len() {
            elements.push(other.get(index)?.clone());
        }
        Ok(Self::from(Buffer::from(elements)))
    }
}

impl<T: fmt::Debug> fmt::Debug for ArraySequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("ArraySequence")
            .field(&self.buffer)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArraySequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.buffer)
    }
}
