//! Fixed capacity bit set, keyed by a `BitKey`.

use alloc::vec::Vec;
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::Index,
};

use crate::{
    api::{BitKey, BitSet},
    collections::Iter,
    utils::{BitStore, BitWord, CapacityError, DecodeError},
};

/// A fixed capacity set of keys, each key being represented by a single bit.
///
/// The set has a length, in bits, which is its capacity: only keys whose index is strictly less than the length can be
/// stored. The capacity only changes on demand, with `grow`, and never shrinks.
///
/// The key type only exists at the type level: a `TypedBitSet<NodeId>` and a `TypedBitSet<EdgeId>` share the same
/// representation, yet cannot be mixed.
///
/// #   Panics
///
/// All methods taking a key panic if the index of the key is out of bounds; the `try_` methods report a
/// `CapacityError` instead.
///
/// #   Examples
///
/// ```
/// use typed_bitset::TypedBitSet;
///
/// let mut visited = TypedBitSet::<u32>::with_capacity(200);
///
/// visited.insert(3);
/// visited.insert(150);
///
/// assert!(visited.contains(3));
/// assert!(!visited[4]);
/// assert_eq!(vec![3, 150], visited.iter().collect::<Vec<_>>());
/// ```
pub struct TypedBitSet<K> {
    store: BitStore,
    _key: PhantomData<fn() -> K>,
}

//
//  Creation
//

impl<K> TypedBitSet<K> {
    /// Creates a new set, with a capacity of 0.
    pub const fn new() -> Self {
        Self::from_store(BitStore::new())
    }

    /// Creates a new set with a capacity of `bits`, all initially cleared.
    #[track_caller]
    pub fn with_capacity(bits: u64) -> Self {
        Self::from_store(BitStore::with_capacity(bits))
    }

    /// Creates a new set over an existing store.
    pub const fn from_store(store: BitStore) -> Self {
        Self {
            store,
            _key: PhantomData,
        }
    }

    /// Creates a set of `bits` capacity from its words.
    ///
    /// See `BitStore::from_words`.
    pub fn from_words(bits: u64, words: Vec<BitWord>) -> Result<Self, DecodeError> {
        BitStore::from_words(bits, words).map(Self::from_store)
    }

    /// Decodes a set from its little-endian byte form.
    ///
    /// See `BitStore::from_le_bytes`.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        BitStore::from_le_bytes(bytes).map(Self::from_store)
    }
}

//
//  Capacity & whole set operations.
//

impl<K> TypedBitSet<K> {
    /// Grows the capacity to `bits`, all new bits being cleared.
    ///
    /// Does nothing if `bits` is less than, or equal to, the current capacity.
    #[track_caller]
    pub fn grow(&mut self, bits: u64) {
        self.store.grow(bits);
    }

    /// Returns the capacity of the set, in bits.
    #[inline]
    pub fn len(&self) -> u64 {
        self.store.len()
    }

    /// Returns whether no key is in the set, regardless of its capacity.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the number of keys in the set.
    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// Removes all keys.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Inserts all keys, up to the capacity.
    pub fn fill(&mut self) {
        self.store.fill();
    }

    /// Inserts all absent keys, and removes all present ones.
    pub fn toggle_all(&mut self) {
        self.store.toggle_all();
    }

    /// Returns the underlying store.
    pub fn as_store(&self) -> &BitStore {
        &self.store
    }

    /// Returns the underlying store.
    pub fn into_store(self) -> BitStore {
        self.store
    }

    /// Returns the underlying words.
    pub fn words(&self) -> &[BitWord] {
        self.store.words()
    }

    /// Returns the little-endian byte form of the set.
    ///
    /// See `BitStore::to_le_bytes`.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.store.to_le_bytes()
    }
}

//
//  Set algebra.
//

impl<K> TypedBitSet<K> {
    /// Inserts all keys of `other`, growing to the capacity of `other` if necessary.
    #[track_caller]
    pub fn union_with(&mut self, other: &Self) {
        self.store.union_with(&other.store);
    }

    /// Removes all keys not in `other`.
    pub fn intersect_with(&mut self, other: &Self) {
        self.store.intersect_with(&other.store);
    }

    /// Removes all keys in `other`.
    pub fn difference_with(&mut self, other: &Self) {
        self.store.difference_with(&other.store);
    }

    /// Toggles all keys in `other`, growing to the capacity of `other` if necessary.
    #[track_caller]
    pub fn symmetric_difference_with(&mut self, other: &Self) {
        self.store.symmetric_difference_with(&other.store);
    }

    /// Returns whether all keys of `self` are in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.store.is_subset(&other.store)
    }

    /// Returns whether all keys of `other` are in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        self.store.is_superset(&other.store)
    }

    /// Returns whether `self` and `other` have no key in common.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.store.is_disjoint(&other.store)
    }
}

//
//  Key operations.
//

impl<K> TypedBitSet<K>
where
    K: BitKey,
{
    /// Returns whether the key is in the set.
    ///
    /// Also available with index syntax: `set[key]`.
    ///
    /// #   Panics
    ///
    /// If the key is out of bounds.
    #[inline]
    #[track_caller]
    pub fn contains(&self, key: K) -> bool {
        checked(self.try_contains(key))
    }

    /// Returns whether the key is in the set, or an error if it is out of bounds.
    #[inline]
    pub fn try_contains(&self, key: K) -> Result<bool, CapacityError> {
        self.store.get(key.into_index())
    }

    /// Inserts the key.
    ///
    /// #   Panics
    ///
    /// If the key is out of bounds.
    #[inline]
    #[track_caller]
    pub fn insert(&mut self, key: K) {
        checked(self.try_put(key));
    }

    /// Inserts the key, returning whether it is newly inserted, or an error if it is out of bounds.
    #[inline]
    pub fn try_insert(&mut self, key: K) -> Result<bool, CapacityError> {
        self.try_put(key).map(|previous| !previous)
    }

    /// Inserts the key, returning whether it was previously present.
    ///
    /// #   Panics
    ///
    /// If the key is out of bounds.
    #[inline]
    #[track_caller]
    pub fn put(&mut self, key: K) -> bool {
        checked(self.try_put(key))
    }

    /// Inserts the key, returning whether it was previously present, or an error if it is out of bounds.
    #[inline]
    pub fn try_put(&mut self, key: K) -> Result<bool, CapacityError> {
        self.try_set(key, true)
    }

    /// Removes the key, returning whether it was previously present.
    ///
    /// #   Panics
    ///
    /// If the key is out of bounds.
    #[inline]
    #[track_caller]
    pub fn remove(&mut self, key: K) -> bool {
        checked(self.try_set(key, false))
    }

    /// Inserts, or removes, the key depending on `enabled`.
    ///
    /// #   Panics
    ///
    /// If the key is out of bounds.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, key: K, enabled: bool) {
        checked(self.try_set(key, enabled));
    }

    /// Inserts, or removes, the key depending on `enabled`, returning whether it was previously present, or an error
    /// if it is out of bounds.
    #[inline]
    pub fn try_set(&mut self, key: K, enabled: bool) -> Result<bool, CapacityError> {
        self.store.set(key.into_index(), enabled)
    }

    /// Returns an iterator over the keys in the set, in ascending index order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.store.ones())
    }
}

//
//  BitSet (trait)
//

impl<K> BitSet for TypedBitSet<K>
where
    K: BitKey,
{
    type Element = K;

    fn len(&self) -> u64 {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    fn count(&self) -> usize {
        self.count()
    }

    fn try_contains(&self, element: K) -> Result<bool, CapacityError> {
        self.try_contains(element)
    }

    fn clear(&mut self) {
        self.clear();
    }

    fn try_insert(&mut self, element: K) -> Result<bool, CapacityError> {
        self.try_insert(element)
    }

    fn try_remove(&mut self, element: K) -> Result<bool, CapacityError> {
        self.try_set(element, false)
    }
}

//
//  Common traits
//

impl<K> Clone for TypedBitSet<K> {
    fn clone(&self) -> Self {
        Self::from_store(self.store.clone())
    }
}

impl<K> fmt::Debug for TypedBitSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        struct Ones<'a>(&'a BitStore);

        impl fmt::Debug for Ones<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
                f.debug_list().entries(self.0.ones()).finish()
            }
        }

        f.debug_struct("TypedBitSet")
            .field("len", &self.store.len())
            .field("ones", &Ones(&self.store))
            .finish()
    }
}

impl<K> Default for TypedBitSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Eq for TypedBitSet<K> {}

impl<K> Hash for TypedBitSet<K> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.store.hash(state);
    }
}

impl<K> Ord for TypedBitSet<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.store.cmp(&other.store)
    }
}

impl<K> PartialEq for TypedBitSet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}

impl<K> PartialOrd for TypedBitSet<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Returns whether the key is in the set.
///
/// #   Panics
///
/// If the key is out of bounds, just like `contains`.
impl<K> Index<K> for TypedBitSet<K>
where
    K: BitKey,
{
    type Output = bool;

    #[track_caller]
    fn index(&self, key: K) -> &bool {
        if self.contains(key) { &true } else { &false }
    }
}

/// Inserts each key.
///
/// #   Panics
///
/// If any key is out of bounds: the capacity is never implicitly grown.
impl<K> Extend<K> for TypedBitSet<K>
where
    K: BitKey,
{
    #[track_caller]
    fn extend<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.insert(key);
        }
    }
}

/// Creates a set containing each key, with a capacity of one more than the greatest index.
impl<K> FromIterator<K> for TypedBitSet<K>
where
    K: BitKey,
{
    #[track_caller]
    fn from_iter<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut result = Self::new();

        for key in keys {
            result.grow(key.into_index().saturating_add(1));
            result.insert(key);
        }

        result
    }
}

impl<'a, K> IntoIterator for &'a TypedBitSet<K>
where
    K: BitKey,
{
    type Item = K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<K> serde::Serialize for TypedBitSet<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.store, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K> serde::Deserialize<'de> for TypedBitSet<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <BitStore as serde::Deserialize>::deserialize(deserializer).map(Self::from_store)
    }
}

//
//  Implementation details
//

#[inline]
#[track_caller]
fn checked<T>(result: Result<T, CapacityError>) -> T {
    #[cold]
    #[inline(never)]
    #[track_caller]
    fn panic(error: CapacityError) -> ! {
        panic!("{error}");
    }

    match result {
        Ok(value) => value,
        Err(error) => panic(error),
    }
}

// mod tests
