//! Chain-backed sequence.

use std::fmt;

use super::Sequence;
use crate::error::IndexOutOfRange;
use crate::storage::Chain;

/// A [`Sequence`] that owns a [`Chain`].
///
/// # Time Complexity
///
/// | Operation       | Complexity |
/// |-----------------|------------|
/// | `first`         | O(1)       |
/// | `prepend_mut`   | O(1)       |
/// | `get`           | O(index)   |
/// | `last`          | O(n)       |
/// | `append_mut`    | O(n)       |
/// | `insert_at_mut` | O(index)   |
/// | persistent ops  | O(n)       |
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::{ListSequence, Sequence};
///
/// let mut sequence = ListSequence::new();
/// sequence.append_mut(10);
/// sequence.prepend_mut(5);
/// sequence.insert_at_mut(7, 1).unwrap();
///
/// let doubled = sequence.concat(&sequence.append(20)).unwrap();
/// assert_eq!(doubled.len(), 7);
/// assert_eq!(sequence.len(), 3);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ListSequence<T> {
    chain: Chain<T>,
}

impl<T> ListSequence<T> {
    /// Creates an empty sequence.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Returns the backing chain.
    #[inline]
    #[must_use]
    pub const fn chain(&self) -> &Chain<T> {
        &self.chain
    }

    /// Consumes the sequence and returns its backing chain.
    #[inline]
    #[must_use]
    pub fn into_chain(self) -> Chain<T> {
        self.chain
    }
}

impl<T: Clone> ListSequence<T> {
    /// Creates a sequence holding a copy of every element of `items`.
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        Self {
            chain: Chain::from_slice(items),
        }
    }
}

impl<T> Default for ListSequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Chain<T>> for ListSequence<T> {
    fn from(chain: Chain<T>) -> Self {
        Self { chain }
    }
}

impl<T: Clone> Sequence<T> for ListSequence<T> {
    #[inline]
    fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.chain.get(index)
    }

    #[inline]
    fn len(&self) -> usize {
        self.chain.len()
    }

    #[inline]
    fn first(&self) -> Result<&T, IndexOutOfRange> {
        self.chain.first()
    }

    fn append_mut(&mut self, element: T) {
        self.chain.append(element);
    }

    fn prepend_mut(&mut self, element: T) {
        self.chain.prepend(element);
    }

    fn insert_at_mut(&mut self, element: T, index: usize) -> Result<(), IndexOutOfRange> {
        self.chain.insert_at(element, index)
    }
}

impl<T: fmt::Debug> fmt::Debug for ListSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("ListSequence")
            .field(&self.chain)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for ListSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn five_seven_ten() -> ListSequence<i32> {
        let mut sequence = ListSequence::new();
        sequence.append_mut(10);
        sequence.prepend_mut(5);
        sequence.insert_at_mut(7, 1).unwrap();
        sequence
    }

    #[rstest]
    fn test_mutable_edits() {
        let sequence = five_seven_ten();
        assert_eq!(sequence.chain(), &Chain::from_slice(&[5, 7, 10]));
        assert_eq!(sequence.get(1), Ok(&7));
        assert_eq!(sequence.len(), 3);
    }

    #[rstest]
    fn test_concat_with_own_extension() {
        let sequence = five_seven_ten();
        let concatenated = sequence.concat(&sequence.append(20)).unwrap();
        assert_eq!(concatenated.len(), 7);
        assert_eq!(
            concatenated,
            ListSequence::from_slice(&[5, 7, 10, 5, 7, 10, 20])
        );
        assert_eq!(sequence.len(), 3);
    }

    #[rstest]
    fn test_persistent_edits_leave_receiver() {
        let sequence = five_seven_ten();
        let prepended = sequence.prepend(1);
        let inserted = sequence.insert_at(8, 3).unwrap();
        assert_eq!(prepended.first(), Ok(&1));
        assert_eq!(inserted.last(), Ok(&8));
        assert_eq!(sequence, five_seven_ten());
    }

    #[rstest]
    fn test_insert_out_of_range() {
        let mut sequence = five_seven_ten();
        assert_eq!(sequence.insert_at(1, 4), Err(IndexOutOfRange::new(4, 3)));
        assert_eq!(
            sequence.insert_at_mut(1, 4),
            Err(IndexOutOfRange::new(4, 3))
        );
        assert_eq!(sequence.len(), 3);
    }

    #[rstest]
    fn test_first_last_on_empty() {
        let sequence: ListSequence<i32> = ListSequence::new();
        assert_eq!(sequence.first(), Err(IndexOutOfRange::new(0, 0)));
        assert_eq!(sequence.last(), Err(IndexOutOfRange::new(0, 0)));
    }

    #[rstest]
    fn test_display_and_debug() {
        let sequence = five_seven_ten();
        assert_eq!(format!("{sequence}"), "[5, 7, 10]");
        assert_eq!(format!("{sequence:?}"), "ListSequence([5, 7, 10])");
    }
}
