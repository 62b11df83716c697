//! A uniform sequence abstraction over [`Buffer`](crate::storage::Buffer)
//! and [`Chain`](crate::storage::Chain).
//!
//! - [`ArraySequence`]: backed by a `Buffer`, O(1) positional reads
//! - [`ListSequence`]: backed by a `Chain`, O(1) prepend
//!
//! Every edit comes in two flavors:
//!
//! - **mutable** (`append_mut`, `prepend_mut`, `insert_at_mut`) changes the
//!   receiver in place with the backing store's native complexity;
//! - **persistent** (`append`, `prepend`, `insert_at`, `concat`) deep-copies
//!   the receiver's store, applies the edit to the copy and returns it as a
//!   new sequence of the same kind. The receiver is never modified, and the
//!   result shares no storage with it. These are always O(n).
//!
//! # Examples
//!
//! ```rust
//! use seqkit::sequence::{ArraySequence, ListSequence, Sequence};
//!
//! let mut array = ArraySequence::new();
//! array.append_mut(10);
//! array.prepend_mut(5);
//! array.insert_at_mut(7, 1).unwrap();
//!
//! let list = ListSequence::from_slice(&[1, 2]);
//!
//! // Concat reads the other sequence only through `len` and `get`,
//! // so either variant can be appended to either variant.
//! let joined = array.concat(&list).unwrap();
//! assert_eq!(joined.len(), 5);
//! assert_eq!(joined.get(3), Ok(&1));
//! assert_eq!(array.len(), 3);
//! ```

mod array;
mod list;

pub use array::ArraySequence;
pub use list::ListSequence;

use crate::error::IndexOutOfRange;

/// Positional reads plus mutable and persistent edge edits.
///
/// Reads and mutable edits are available on `dyn Sequence<T>`; persistent
/// edits return `Self` and therefore need a concrete, clonable receiver.
///
/// # Laws
///
/// For every sequence `s` and persistent edit `e`:
///
/// ```text
/// let before = s.clone();
/// let after = s.e(..);
/// s == before                               // receiver unchanged
/// a.concat(b)?.len() == a.len() + b.len()
/// a.concat(b)?.get(i) == a.get(i)            // i <  a.len()
/// a.concat(b)?.get(i) == b.get(i - a.len())  // i >= a.len()
/// ```
pub trait Sequence<T: Clone> {
    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] when `index >= self.len()`.
    fn get(&self, index: usize) -> Result<&T, IndexOutOfRange>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] when the sequence is empty.
    fn first(&self) -> Result<&T, IndexOutOfRange> {
        if self.is_empty() {
            return Err(IndexOutOfRange::reported(0, 0));
        }
        self.get(0)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] when the sequence is empty.
    fn last(&self) -> Result<&T, IndexOutOfRange> {
        match self.len().checked_sub(1) {
            Some(index) => self.get(index),
            None => Err(IndexOutOfRange::reported(0, 0)),
        }
    }

    /// Adds `element` at the end of this sequence.
    fn append_mut(&mut self, element: T);

    /// Adds `element` at the front of this sequence.
    fn prepend_mut(&mut self, element: T);

    /// Inserts `element` so that it ends up at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] when `index > self.len()`; the sequence is
    /// left unchanged.
    fn insert_at_mut(&mut self, element: T, index: usize) -> Result<(), IndexOutOfRange>;

    /// Returns a copy of this sequence with `element` appended.
    #[must_use]
    fn append(&self, element: T) -> Self
    where
        Self: Sized + Clone,
    {
        tracing::trace!(length = self.len(), "persistent append");
        let mut copy = self.clone();
        copy.append_mut(element);
        copy
    }

    /// Returns a copy of this sequence with `element` prepended.
    #[must_use]
    fn prepend(&self, element: T) -> Self
    where
        Self: Sized + Clone,
    {
        tracing::trace!(length = self.len(), "persistent prepend");
        let mut copy = self.clone();
        copy.prepend_mut(element);
        copy
    }

    /// Returns a copy of this sequence with `element` inserted at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] when `index > self.len()`.
    fn insert_at(&self, element: T, index: usize) -> Result<Self, IndexOutOfRange>
    where
        Self: Sized + Clone,
    {
        tracing::trace!(length = self.len(), index, "persistent insert");
        let mut copy = self.clone();
        copy.insert_at_mut(element, index)?;
        Ok(copy)
    }

    /// Returns a copy of this sequence followed by copies of every element
    /// of `other`, in order. `other` may be any sequence variant.
    ///
    /// # Errors
    ///
    /// Returns the first [`IndexOutOfRange`] reported by `other.get` for an
    /// index below `other.len()`; no partial result is returned.
    fn concat<S>(&self, other: &S) -> Result<Self, IndexOutOfRange>
    where
        Self: Sized + Clone,
        S: Sequence<T> + ?Sized,
    {
        tracing::trace!(
            length = self.len(),
            other_length = other.len(),
            "persistent concat"
        );
        let mut copy = self.clone();
        for index in 0..other.len() {
            copy.append_mut(other.get(index)?.clone());
        }
        Ok(copy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn describe(sequence: &dyn Sequence<i32>) -> (usize, Option<i32>, Option<i32>) {
        (
            sequence.len(),
            sequence.first().ok().copied(),
            sequence.last().ok().copied(),
        )
    }

    #[rstest]
    fn test_reads_through_trait_object() {
        let array = ArraySequence::from_slice(&[1, 2, 3]);
        let list = ListSequence::from_slice(&[4, 5]);
        assert_eq!(describe(&array), (3, Some(1), Some(3)));
        assert_eq!(describe(&list), (2, Some(4), Some(5)));
    }

    #[rstest]
    fn test_empty_reads_through_trait_object() {
        let array: ArraySequence<i32> = ArraySequence::new();
        let list: ListSequence<i32> = ListSequence::new();
        assert_eq!(describe(&array), (0, None, None));
        assert_eq!(describe(&list), (0, None, None));
    }

    #[rstest]
    fn test_mutable_edits_through_trait_object() {
        let mut sequences: Vec<Box<dyn Sequence<i32>>> = vec![
            Box::new(ArraySequence::new()),
            Box::new(ListSequence::new()),
        ];
        for sequence in &mut sequences {
            sequence.append_mut(10);
            sequence.prepend_mut(5);
            sequence.insert_at_mut(7, 1).unwrap();
            assert_eq!(sequence.len(), 3);
            assert_eq!(sequence.get(1), Ok(&7));
        }
    }

    /// Reports `length` elements but can only read those in `elements`.
    struct Truncated {
        elements: Vec<i32>,
        length: usize,
    }

    impl Sequence<i32> for Truncated {
        fn get(&self, index: usize) -> Result<&i32, IndexOutOfRange> {
            self.elements
                .get(index)
                .ok_or_else(|| IndexOutOfRange::new(index, self.length))
        }

        fn len(&self) -> usize {
            self.length
        }

        fn append_mut(&mut self, element: i32) {
            self.elements.push(element);
            self.length += 1;
        }

        fn prepend_mut(&mut self, element: i32) {
            self.elements.insert(0, element);
            self.length += 1;
        }

        fn insert_at_mut(&mut self, element: i32, index: usize) -> Result<(), IndexOutOfRange> {
            if index > self.elements.len() {
                return Err(IndexOutOfRange::new(index, self.length));
            }
            self.elements.insert(index, element);
            self.length += 1;
            Ok(())
        }
    }

    #[rstest]
    fn test_concat_propagates_read_failure_from_other() {
        let other = Truncated {
            elements: vec![1],
            length: 3,
        };
        let array = ArraySequence::from_slice(&[0]);
        assert_eq!(array.concat(&other).unwrap_err(), IndexOutOfRange::new(1, 3));
        assert_eq!(array.len(), 1);

        let list = ListSequence::from_slice(&[0]);
        assert_eq!(list.concat(&other).unwrap_err(), IndexOutOfRange::new(1, 3));
        assert_eq!(list.len(), 1);
    }

    #[rstest]
    fn test_concat_accepts_trait_object() {
        let list = ListSequence::from_slice(&[3, 4]);
        let other: &dyn Sequence<i32> = &list;
        let joined = ArraySequence::from_slice(&[1, 2]).concat(other).unwrap();
        assert_eq!(joined, ArraySequence::from_slice(&[1, 2, 3, 4]));
    }
}
