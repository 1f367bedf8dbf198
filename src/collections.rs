//! Implementations of typed bit sets.

//  Design considerations
//
//  #   Why inherent?
//
//  The methods are doubly implemented (as inherent methods, and BitSet methods) so they can be called without
//  importing the trait.

pub mod iter;
pub mod typed_bit_set;

pub use iter::Iter;
pub use typed_bit_set::TypedBitSet;
