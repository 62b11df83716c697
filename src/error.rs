//! The error reported by every positional operation in this crate.

use thiserror::Error;

/// A positional argument fell outside the operation's valid range.
///
/// Access and removal accept indices in `0..length`; insertion accepts
/// `0..=length`. Anything else is reported with this error, carrying the
/// rejected index and the container length at the time of the call.
///
/// # Examples
///
/// ```rust
/// use seqkit::storage::Buffer;
/// use seqkit::IndexOutOfRange;
///
/// let buffer: Buffer<i32> = Buffer::new(0);
/// assert_eq!(buffer.get(0), Err(IndexOutOfRange::new(0, 0)));
/// assert_eq!(
///     IndexOutOfRange::new(3, 2).to_string(),
///     "index 3 out of range for length 2"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("index {index} out of range for length {length}")]
pub struct IndexOutOfRange {
    /// The index that was rejected.
    pub index: usize,
    /// The length of the container when the index was rejected.
    pub length: usize,
}

impl IndexOutOfRange {
    /// Creates a new `IndexOutOfRange` for `index` against `length`.
    #[inline]
    #[must_use]
    pub const fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }

    /// Logs the violation and returns it, for use in `ok_or_else` chains.
    #[must_use]
    pub(crate) fn reported(index: usize, length: usize) -> Self {
        tracing::debug!(index, length, "index out of range");
        Self::new(index, length)
    }
}
