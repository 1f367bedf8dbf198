//! Low-level types upon which the typed bit sets are built.

mod bit_store;
mod error;
mod word;
mod word_iter;

pub use bit_store::{BitStore, Ones};
pub use error::{CapacityError, DecodeError};
pub use word::{BitWord, IndexInWord, IndexOfWord};
pub use word_iter::BitInWordIter;
