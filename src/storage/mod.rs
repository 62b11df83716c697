//! Owned storage primitives.
//!
//! - [`Buffer`]: contiguous block of elements, resized explicitly
//! - [`Chain`]: singly-linked list where each node owns the rest of the chain
//!
//! Both are value types: `clone` allocates independent storage and copies
//! every element, so two instances never observe each other's mutations.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::storage::{Buffer, Chain};
//!
//! let mut buffer = Buffer::from_slice(&[10, 20, 30]);
//! buffer.resize(5);
//! assert_eq!(buffer.size(), 5);
//! assert_eq!(buffer.get(4), Ok(&0));
//!
//! let mut chain = Chain::new();
//! chain.append(10);
//! chain.prepend(5);
//! chain.insert_at(7, 1).unwrap();
//! assert_eq!(chain.sub_list(1, 2).unwrap(), Chain::from_slice(&[7, 10]));
//! ```

mod buffer;
mod chain;

pub use buffer::Buffer;
pub use chain::Chain;
