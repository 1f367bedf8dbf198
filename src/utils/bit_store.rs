//  See `BitStore`.

use alloc::{vec, vec::Vec};
use core::iter::FusedIterator;

use log::{debug, trace};

use super::{BitInWordIter, BitWord, CapacityError, DecodeError, IndexInWord, IndexOfWord};

/// Packed storage of a fixed, yet growable, number of bits.
///
/// Bit `i` of the store is bit `i % 64` of word `i / 64`.
///
/// #   Invariants
///
/// -   Sized: there are exactly as many words as required to hold `len` bits.
/// -   Clean padding: the bits of the last word at, or beyond, `len` are all zeros.
///
/// Equality, ordering and hashing operate on the `(len, words)` pair, and rely on the padding being clean.
//  Field order matters: the derived `Ord` compares `len` first, and `words` lexicographically second.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BitStore {
    len: u64,
    words: Vec<BitWord>,
}

//
//  Creation
//

impl BitStore {
    /// Creates a new store, with a length of 0.
    pub const fn new() -> Self {
        Self {
            len: 0,
            words: Vec::new(),
        }
    }

    /// Creates a new store of `len` bits, all cleared.
    ///
    /// #   Panics
    ///
    /// If the number of words required for `len` bits cannot be addressed on this platform.
    #[track_caller]
    pub fn with_capacity(len: u64) -> Self {
        let words = vec![BitWord::ALL_ZEROS; Self::words_for(len)];

        Self { len, words }
    }

    /// Creates a store of `len` bits from its words.
    ///
    /// Any bit of `words` at, or beyond, `len` is cleared.
    ///
    /// Returns an error if `words` does not contain exactly the number of words required for `len` bits.
    pub fn from_words(len: u64, words: Vec<BitWord>) -> Result<Self, DecodeError> {
        let expected = len.div_ceil(BitWord::BITS);
        let actual = words.len() as u64;

        if expected != actual {
            debug!("rejecting bit store of {len} bits with {actual} words, expected {expected}");

            return Err(DecodeError::LengthMismatch { len, expected, actual });
        }

        let mut result = Self { len, words };
        result.clean_padding();

        Ok(result)
    }

    /// Decodes a store from its little-endian byte form, see `to_le_bytes`.
    ///
    /// Any bit at, or beyond, the decoded length is cleared.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() < BLOCK || bytes.len() % BLOCK != 0 {
            debug!("rejecting bit store of {} bytes", bytes.len());

            return Err(DecodeError::InvalidByteLength { actual: bytes.len() });
        }

        let (len, words) = bytes.split_at(BLOCK);

        let len = read_block(len);
        let words = words.chunks_exact(BLOCK).map(|block| BitWord(read_block(block))).collect();

        Self::from_words(len, words)
    }
}

//
//  Accessors
//

impl BitStore {
    /// Returns the number of bits of the store.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Returns whether no bit is set, regardless of the length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|word| *word == BitWord::ALL_ZEROS)
    }

    /// Returns the number of bits set.
    pub fn count(&self) -> usize {
        self.words.iter().map(BitWord::count).sum()
    }

    /// Returns the words of the store.
    ///
    /// The padding bits of the last word, if any, are guaranteed to be cleared.
    #[inline]
    pub fn words(&self) -> &[BitWord] {
        &self.words
    }

    /// Returns the length and words of the store.
    pub fn into_parts(self) -> (u64, Vec<BitWord>) {
        (self.len, self.words)
    }

    /// Returns the little-endian byte form of the store.
    ///
    /// The length is encoded as 8 bytes, followed by each word encoded as 8 bytes.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(BLOCK * (1 + self.words.len()));

        bytes.extend_from_slice(&self.len.to_le_bytes());

        for word in &self.words {
            bytes.extend_from_slice(&word.0.to_le_bytes());
        }

        bytes
    }

    /// Returns an iterator over the indexes of the set bits, in ascending order.
    pub fn ones(&self) -> Ones<'_> {
        Ones::new(&self.words)
    }
}

//
//  Bit access
//

impl BitStore {
    /// Returns whether the bit at `index` is set.
    ///
    /// Returns an error if `index` is not strictly less than the length.
    #[inline]
    pub fn get(&self, index: u64) -> Result<bool, CapacityError> {
        let (of_word, in_word) = self.locate(index)?;

        Ok(self.words[of_word.0].is_set(in_word))
    }

    /// Sets, or resets, the bit at `index`, returning its previous value.
    ///
    /// Returns an error if `index` is not strictly less than the length, in which case the store is unchanged.
    #[inline]
    pub fn set(&mut self, index: u64, value: bool) -> Result<bool, CapacityError> {
        let (of_word, in_word) = self.locate(index)?;

        let word = &mut self.words[of_word.0];

        let previous = if value { word.set(in_word) } else { word.reset(in_word) };

        Ok(previous)
    }
}

// mod access_tests

//
//  Bulk operations
//

impl BitStore {
    /// Grows the store to `len` bits, the new bits being cleared.
    ///
    /// Does nothing if `len` is less than, or equal to, the current length.
    ///
    /// #   Panics
    ///
    /// If the number of words required for `len` bits cannot be addressed on this platform.
    #[track_caller]
    pub fn grow(&mut self, len: u64) {
        if len <= self.len {
            return;
        }

        trace!("growing bit store from {} to {len} bits", self.len);

        //  The padding bits of the former last word are clean, and thus already cleared.
        self.words.resize(Self::words_for(len), BitWord::ALL_ZEROS);
        self.len = len;
    }

    /// Clears all bits.
    pub fn clear(&mut self) {
        self.words.fill(BitWord::ALL_ZEROS);
    }

    /// Sets all bits.
    pub fn fill(&mut self) {
        self.words.fill(BitWord::ALL_ONES);
        self.clean_padding();
    }

    /// Flips all bits.
    pub fn toggle_all(&mut self) {
        self.words.iter_mut().for_each(|word| *word = !*word);
        self.clean_padding();
    }

    /// Sets all bits set in `other`, growing to the length of `other` if necessary.
    #[track_caller]
    pub fn union_with(&mut self, other: &BitStore) {
        self.grow(other.len);

        for (word, other) in self.words.iter_mut().zip(&other.words) {
            *word |= *other;
        }
    }

    /// Clears all bits not set in `other`.
    pub fn intersect_with(&mut self, other: &BitStore) {
        for (index, word) in self.words.iter_mut().enumerate() {
            *word &= other.word(IndexOfWord(index));
        }
    }

    /// Clears all bits set in `other`.
    pub fn difference_with(&mut self, other: &BitStore) {
        for (word, other) in self.words.iter_mut().zip(&other.words) {
            *word &= !*other;
        }
    }

    /// Flips all bits set in `other`, growing to the length of `other` if necessary.
    #[track_caller]
    pub fn symmetric_difference_with(&mut self, other: &BitStore) {
        self.grow(other.len);

        for (word, other) in self.words.iter_mut().zip(&other.words) {
            *word ^= *other;
        }
    }

    /// Returns whether all bits set in `self` are also set in `other`.
    pub fn is_subset(&self, other: &BitStore) -> bool {
        self.words
            .iter()
            .enumerate()
            .all(|(index, word)| *word & !other.word(IndexOfWord(index)) == BitWord::ALL_ZEROS)
    }

    /// Returns whether all bits set in `other` are also set in `self`.
    pub fn is_superset(&self, other: &BitStore) -> bool {
        other.is_subset(self)
    }

    /// Returns whether no bit is set in both `self` and `other`.
    pub fn is_disjoint(&self, other: &BitStore) -> bool {
        self.words
            .iter()
            .zip(&other.words)
            .all(|(word, other)| *word & *other == BitWord::ALL_ZEROS)
    }
}

// mod bulk_tests

// mod encoding_tests

//
//  Iteration
//

/// Iterator over the indexes of the set bits of a `BitStore`, in ascending order.
#[derive(Clone, Debug)]
pub struct Ones<'a> {
    //  Iterator over the current word, whose index is `next_of_word - 1`.
    current: BitInWordIter,
    next_of_word: usize,
    rest: &'a [BitWord],
}

impl<'a> Ones<'a> {
    fn new(words: &'a [BitWord]) -> Self {
        Self {
            current: BitInWordIter::empty(),
            next_of_word: 0,
            rest: words,
        }
    }
}

impl Iterator for Ones<'_> {
    type Item = u64;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.current.len() + self.rest.iter().map(BitWord::count).sum::<usize>();

        (count, Some(count))
    }

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(in_word) = self.current.next() {
                return BitWord::fuse(IndexOfWord(self.next_of_word - 1), in_word);
            }

            //  All-zeros words are skipped in a single iteration.
            let (word, rest) = self.rest.split_first()?;

            self.current = BitInWordIter::new(*word);
            self.next_of_word += 1;
            self.rest = rest;
        }
    }
}

impl FusedIterator for Ones<'_> {}

#[cfg(test)]
mod ones_tests {
    use super::{bulk_tests::with_bits, *};

    #[test]
    fn empty() {
        assert_eq!(None, BitStore::new().ones().next());
        assert_eq!(None, BitStore::with_capacity(300).ones().next());
    }

    #[test]
    fn ascending() {
        let store = with_bits(300, &[299, 2, 64, 5, 9, 128]);

        let ones: Vec<_> = store.ones().collect();

        assert_eq!(&[2, 5, 9, 64, 128, 299], &ones[..]);
    }

    #[test]
    fn size_hint() {
        let store = with_bits(300, &[2, 64, 299]);

        let mut ones = store.ones();

        assert_eq!((3, Some(3)), ones.size_hint());

        ones.next();

        assert_eq!((2, Some(2)), ones.size_hint());
    }

    #[test]
    fn fused() {
        let store = with_bits(10, &[9]);

        let mut ones = store.ones();

        assert_eq!(Some(9), ones.next());
        assert_eq!(None, ones.next());
        assert_eq!(None, ones.next());
    }
} // mod ones_tests

//
//  Serde
//

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

    use super::*;

    #[derive(Serialize)]
    #[serde(rename = "BitStore")]
    struct ReprRef<'a> {
        len: u64,
        words: &'a [BitWord],
    }

    #[derive(Deserialize)]
    #[serde(rename = "BitStore")]
    struct Repr {
        len: u64,
        words: Vec<BitWord>,
    }

    impl Serialize for BitStore {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let repr = ReprRef {
                len: self.len,
                words: &self.words,
            };

            repr.serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for BitStore {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let Repr { len, words } = Repr::deserialize(deserializer)?;

            BitStore::from_words(len, words).map_err(D::Error::custom)
        }
    }
} // mod serde_impl

#[cfg(all(feature = "serde", test))]
mod serde_tests {
    use super::{bulk_tests::with_bits, *};

    #[test]
    fn json_form() {
        let store = with_bits(65, &[0, 64]);

        let json = serde_json::to_string(&store).expect("serializable");

        assert_eq!(r#"{"len":65,"words":[1,1]}"#, json);
        assert_eq!(store, serde_json::from_str::<BitStore>(&json).expect("deserializable"));
    }

    #[test]
    fn json_garbage_padding() {
        let store: BitStore = serde_json::from_str(r#"{"len":2,"words":[255]}"#).expect("deserializable");

        assert_eq!(with_bits(2, &[0, 1]), store);
    }

    #[test]
    fn json_mismatch() {
        let error = serde_json::from_str::<BitStore>(r#"{"len":65,"words":[1]}"#).expect_err("mismatch");

        assert!(error.to_string().contains("length 65 requires 2 words"), "{error}");
    }
} // mod serde_tests

//
//  Implementation details
//

impl BitStore {
    //  Returns the location of the bit at `index`, if in bounds.
    #[inline]
    fn locate(&self, index: u64) -> Result<(IndexOfWord, IndexInWord), CapacityError> {
        let error = CapacityError { index, len: self.len };

        if index >= self.len {
            return Err(error);
        }

        //  Cannot fail: `index < len`, and the words for `len` bits are addressable.
        BitWord::split(index).ok_or(error)
    }

    //  Returns the word at `index`, or `ALL_ZEROS` if beyond the last.
    #[inline]
    fn word(&self, index: IndexOfWord) -> BitWord {
        self.words.get(index.0).copied().unwrap_or(BitWord::ALL_ZEROS)
    }

    //  Clears the padding bits of the last word, if any.
    fn clean_padding(&mut self) {
        if let Some(last) = self.words.last_mut() {
            *last &= BitWord::last_word_mask(self.len);
        }
    }

    //  Returns the number of words required for `len` bits.
    #[track_caller]
    fn words_for(len: u64) -> usize {
        #[cold]
        #[track_caller]
        fn panic(len: u64) -> ! {
            panic!("Cannot address {len} bits on this platform");
        }

        BitWord::words_for(len).unwrap_or_else(|| panic(len))
    }
}

const BLOCK: usize = 8;

//  Reads a little-endian `u64` from a block of exactly `BLOCK` bytes.
fn read_block(block: &[u8]) -> u64 {
    let mut bytes = [0; BLOCK];
    bytes.copy_from_slice(block);

    u64::from_le_bytes(bytes)
}
