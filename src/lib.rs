//! # seqkit
//!
//! Two low-level storage primitives and a uniform sequence abstraction
//! built on top of them.
//!
//! ## Overview
//!
//! - **Storage**: [`Buffer`](storage::Buffer), a contiguous block resized
//!   explicitly, and [`Chain`](storage::Chain), a singly-linked list whose
//!   nodes each own the rest of the chain.
//! - **Sequences**: the [`Sequence`](sequence::Sequence) trait with an
//!   array-backed and a chain-backed implementation. Every edit exists in a
//!   mutable flavor (changes the receiver) and a persistent flavor (returns
//!   an independent copy, leaves the receiver untouched).
//! - **Errors**: a single [`IndexOutOfRange`] error for every positional
//!   argument outside its valid range.
//!
//! No storage is ever shared between two instances: cloning, persistent
//! edits, sub-list extraction, and concatenation all allocate fresh storage.
//!
//! ## Example
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let mut sequence = ArraySequence::new();
//! sequence.append_mut(10);
//! sequence.prepend_mut(5);
//! sequence.insert_at_mut(7, 1).unwrap();
//!
//! let extended = sequence.append(20);
//! assert_eq!(extended.len(), 4);
//! assert_eq!(sequence.len(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use seqkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::IndexOutOfRange;
    pub use crate::sequence::*;
    pub use crate::storage::*;
}

pub mod error;
pub mod sequence;
pub mod storage;

pub use error::IndexOutOfRange;
