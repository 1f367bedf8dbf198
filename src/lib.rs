//! Fixed capacity bit sets, keyed by strongly-typed keys.
//!
//! #   Organization
//!
//! This crate is composed of multiple top modules:
//!
//! -   The `api` top module contains the vocabulary traits: the `BitKey` capability, and the `BitSet` abstraction.
//! -   The `collections` module contains the `TypedBitSet` and its iterator.
//! -   The `utils` module contains the low-level types upon which the collections are built: words, the packed store,
//!     and errors.
//!
//!
//! #   Key type
//!
//! A `TypedBitSet<K>` is keyed by `K`, which maps to and from a bit index via `BitKey`. The key only exists at the
//! type level, hence a set of node IDs and a set of edge IDs share the same representation, yet cannot be mixed.
//!
//! The bit index is expressed as a `u64`, rather than a `usize`: a `usize` is only sufficient to index every _byte_ in
//! a program, not necessarily every _bit_, and a platform-dependent index type would make the serialized form
//! platform-dependent too.
//!
//!
//! #   Capacity
//!
//! Each set has a length, in bits, which is its capacity. Accessing a key whose index is at, or beyond, the capacity is
//! a programming error: the infallible methods panic, and the `try_` methods return a `CapacityError`. The capacity
//! only changes through `grow`, and never shrinks.
//!
//!
//! #   Example
//!
//! ```
//! use typed_bitset::{BitKey, TypedBitSet};
//!
//! #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
//! struct NodeId(u32);
//!
//! impl BitKey for NodeId {
//!     fn from_index(index: u64) -> Self {
//!         NodeId(u32::from_index(index))
//!     }
//!
//!     fn into_index(self) -> u64 {
//!         self.0.into()
//!     }
//! }
//!
//! let mut visited = TypedBitSet::with_capacity(200);
//!
//! assert!(!visited.put(NodeId(42)));
//! assert!(visited.put(NodeId(42)));
//!
//! assert!(visited.contains(NodeId(42)));
//! assert!(!visited[NodeId(43)]);
//! assert_eq!(vec![NodeId(42)], visited.iter().collect::<Vec<_>>());
//! ```

#![cfg_attr(not(test), no_std)]
//  Lints
#![deny(missing_docs)]
//  This author prefers to keep its test modules close to what they are testing.
#![allow(clippy::items_after_test_module)]

extern crate alloc;

pub mod api;
pub mod collections;
pub mod utils;

pub use api::{BitKey, BitSet};
pub use collections::{Iter, TypedBitSet};
pub use utils::{BitStore, CapacityError, DecodeError};
