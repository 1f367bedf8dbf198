//! The key capability of typed bit sets.

use core::hash::Hash;

/// A bit key is a value which can be mapped to, and back from, a bit index.
///
/// The most obvious type is `usize`, however the point of typed bit sets is to be keyed by strongly-typed wrappers over
/// an integer, or by enums, so that a set of node IDs cannot be confused with a set of edge IDs.
///
/// #   Contract
///
/// -   Deterministic: `into_index` always maps a given key to the same index.
/// -   Injective: distinct keys map to distinct indexes.
/// -   Reversible: `K::from_index(key.into_index()) == key`, for every key.
///
/// #   Examples
///
/// ```
/// use typed_bitset::BitKey;
///
/// #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// struct NodeId(u32);
///
/// impl BitKey for NodeId {
///     fn from_index(index: u64) -> Self {
///         NodeId(u32::from_index(index))
///     }
///
///     fn into_index(self) -> u64 {
///         self.0.into()
///     }
/// }
///
/// assert_eq!(NodeId(7), NodeId::from_index(NodeId(7).into_index()));
/// ```
pub trait BitKey: Copy + Eq + Hash + Ord {
    /// Returns the key associated to the index.
    ///
    /// It is up to the caller to guarantee that the index is sensible, such as being the result of a prior
    /// `into_index` call. For non-sensible values, this function may panic, or return a non-sensible result.
    fn from_index(index: u64) -> Self;

    /// Returns the index associated to the key.
    fn into_index(self) -> u64;
}

macro_rules! narrow_bit_key {
    ($($t:ty),*) => {
        $(
            impl BitKey for $t {
                #[track_caller]
                fn from_index(index: u64) -> Self {
                    #[cold]
                    #[track_caller]
                    fn panic(index: u64) -> ! {
                        panic!("Cannot convert {index} to {}", stringify!($t));
                    }

                    index.try_into().unwrap_or_else(|_| panic(index))
                }

                #[inline]
                fn into_index(self) -> u64 {
                    self.into()
                }
            }
        )*
    };
}

narrow_bit_key!(u8, u16, u32);

impl BitKey for u64 {
    #[inline]
    fn from_index(index: u64) -> Self {
        index
    }

    #[inline]
    fn into_index(self) -> u64 {
        self
    }
}

impl BitKey for usize {
    #[track_caller]
    fn from_index(index: u64) -> Self {
        #[cold]
        #[track_caller]
        fn panic(index: u64) -> ! {
            panic!("Cannot convert {index} to usize");
        }

        index.try_into().unwrap_or_else(|_| panic(index))
    }

    #[track_caller]
    fn into_index(self) -> u64 {
        #[cold]
        #[track_caller]
        fn panic(index: usize) -> ! {
            panic!("Cannot convert {index} to u64");
        }

        self.try_into().unwrap_or_else(|_| panic(self))
    }
}

// mod tests
