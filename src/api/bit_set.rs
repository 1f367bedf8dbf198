//! A generic bit-keyed set.

use crate::{api::BitKey, utils::CapacityError};

/// A generic, fixed capacity, bit-keyed set.
///
/// All operations taking an element are fallible: an element whose index is not strictly less than the length of the
/// set cannot be represented, and is reported as a `CapacityError`.
pub trait BitSet {
    /// Type of the elements of the set.
    type Element: BitKey;

    /// Returns the number of bits of the set, that is its capacity.
    fn len(&self) -> u64;

    /// Returns whether no element is in the set.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the set.
    fn count(&self) -> usize;

    /// Returns whether the set contains the element, or not.
    fn try_contains(&self, element: Self::Element) -> Result<bool, CapacityError>;

    /// Clears the set, removing all elements.
    fn clear(&mut self);

    /// Inserts an element in the set.
    ///
    /// Returns whether the element is newly inserted, or not.
    fn try_insert(&mut self, element: Self::Element) -> Result<bool, CapacityError>;

    /// Removes an element from the set.
    ///
    /// Returns whether the element was present, or not.
    fn try_remove(&mut self, element: Self::Element) -> Result<bool, CapacityError>;
}
