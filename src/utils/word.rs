//  See `BitWord` type.
//
//  #   Why a dedicated type?
//
//  Bundling methods on an existing type is possible only by "extension" traits, which then require the user to have
//  these traits in scope to invoke them. A dedicated type lets the word-level primitives be inherent methods.
//
//
//  #   Why `u64`?
//
//  The width of a word is part of the serialized form, hence it cannot depend on the platform. `u64` is the largest
//  type natively supported by the bulk of platforms, which makes bulk operations (clear, union, ...) effective.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// A word of bits.
///
/// A `BitStore` is a sequence of such words, bit `i` of the store being bit `i % 64` of word `i / 64`, counting from
/// the least significant bit.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct BitWord(pub u64);

/// The index of a word, in a sequence of words.
///
/// #   Why `usize`?
///
/// The `IndexOfWord` is used nigh exclusively as an index in slices, which Rust indexes by `usize`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct IndexOfWord(pub usize);

/// The index of a bit in a word.
///
/// The index of a bit in a word is expected to always be strictly less than 64. No index created by `BitWord::split`
/// will ever violate this invariant.
///
/// #   Panics
///
/// In Debug, most operations taking an `IndexInWord` will panic if its value is strictly greater than 63.
///
/// In Release, any high bit will be ignored (masked away).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct IndexInWord(pub u32);

//
//  Constants.
//

impl BitWord {
    /// Number of bits in a word.
    pub const BITS: u64 = 64;

    /// An all-zeros word.
    pub const ALL_ZEROS: Self = Self(0);

    /// An all-ones word.
    pub const ALL_ONES: Self = Self(!0);
}

//
//  Static operations.
//

impl BitWord {
    /// Splits a bit index into an index-of-word/index-in-word pair.
    ///
    /// Returns None if the `index` is too large for the index-of-word part, which may only happen on platforms where
    /// `usize` is narrower than 64 bits.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use typed_bitset::utils::BitWord;
    /// let (of_word, in_word) = BitWord::split(133).expect("no overflow");
    ///
    /// assert_eq!(2, of_word.0);
    /// assert_eq!(5, in_word.0);
    /// ```
    #[inline]
    pub const fn split(index: u64) -> Option<(IndexOfWord, IndexInWord)> {
        //  Compute both / and % close together, so the optimizer fuses both in a single instruction.
        let of_word = index / Self::BITS;
        let in_word = index % Self::BITS;

        //  FIXME: convert to `.try_into()` when it is const.
        if of_word as usize as u64 != of_word {
            return None;
        }

        Some((IndexOfWord(of_word as _), IndexInWord(in_word as _)))
    }

    /// Fuses an index-of-word/index-in-word pair back into a bit index.
    ///
    /// Returns None if the result does not fit in a `u64`.
    ///
    /// #   Panics
    ///
    /// See `IndexInWord`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use typed_bitset::utils::{BitWord, IndexInWord, IndexOfWord};
    /// let index = BitWord::fuse(IndexOfWord(2), IndexInWord(5)).expect("no overflow");
    ///
    /// assert_eq!(133, index);
    /// ```
    #[inline]
    pub const fn fuse(of_word: IndexOfWord, in_word: IndexInWord) -> Option<u64> {
        debug_assert!(in_word.0 < Self::BITS as _);

        //  FIXME: convert to `.try_into()` when it is const.
        if of_word.0 as u64 as usize != of_word.0 {
            return None;
        }

        //  FIXME: convert to `?` when it is const.
        let Some(index) = (of_word.0 as u64).checked_mul(Self::BITS) else {
            return None;
        };

        //  Mask to ensure the addition doesn't overflow.
        Some(index + (in_word.0 as u64) % Self::BITS)
    }

    /// Returns the number of words required to hold `len` bits, if addressable.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use typed_bitset::utils::BitWord;
    /// assert_eq!(Some(0), BitWord::words_for(0));
    /// assert_eq!(Some(1), BitWord::words_for(64));
    /// assert_eq!(Some(2), BitWord::words_for(65));
    /// ```
    #[inline]
    pub const fn words_for(len: u64) -> Option<usize> {
        let words = len.div_ceil(Self::BITS);

        if words as usize as u64 != words {
            return None;
        }

        Some(words as _)
    }

    /// Returns the mask of the valid bits of the last word of a sequence of `len` bits.
    ///
    /// All other bits of the last word are padding, which must be kept clear.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use typed_bitset::utils::BitWord;
    /// assert_eq!(BitWord(0b111), BitWord::last_word_mask(3));
    /// assert_eq!(BitWord::ALL_ONES, BitWord::last_word_mask(64));
    /// ```
    #[inline]
    pub const fn last_word_mask(len: u64) -> Self {
        match len % Self::BITS {
            0 => Self::ALL_ONES,
            rest => Self((1 << rest) - 1),
        }
    }
}

#[cfg(test)]
mod static_tests {
    use super::*;

    #[test]
    fn split_brush() {
        assert_eq!(Some((0, 0)), compute_split(0));
        assert_eq!(Some((0, 63)), compute_split(63));
        assert_eq!(Some((1, 0)), compute_split(64));
        assert_eq!(Some((1, 63)), compute_split(127));
        assert_eq!(Some((2, 0)), compute_split(128));
    }

    #[test]
    fn fuse_brush() {
        assert_eq!(Some(0), compute_fuse(0, 0));
        assert_eq!(Some(63), compute_fuse(0, 63));
        assert_eq!(Some(64), compute_fuse(1, 0));
        assert_eq!(Some(127), compute_fuse(1, 63));
        assert_eq!(Some(128), compute_fuse(2, 0));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn fuse_overflow() {
        let highest_of_word = (u64::MAX / 64) as usize;

        assert_eq!(Some(u64::MAX), compute_fuse(highest_of_word, 63));
        assert_eq!(None, compute_fuse(highest_of_word + 1, 0));
    }

    #[test]
    fn words_for_brush() {
        assert_eq!(Some(0), BitWord::words_for(0));
        assert_eq!(Some(1), BitWord::words_for(1));
        assert_eq!(Some(1), BitWord::words_for(63));
        assert_eq!(Some(1), BitWord::words_for(64));
        assert_eq!(Some(2), BitWord::words_for(65));
        assert_eq!(Some(4), BitWord::words_for(200));
    }

    #[test]
    fn last_word_mask_brush() {
        assert_eq!(BitWord::ALL_ONES, BitWord::last_word_mask(0));
        assert_eq!(BitWord(0b1), BitWord::last_word_mask(1));
        assert_eq!(BitWord(!0 >> 1), BitWord::last_word_mask(63));
        assert_eq!(BitWord::ALL_ONES, BitWord::last_word_mask(128));
        assert_eq!(BitWord(0xFF), BitWord::last_word_mask(136));
    }

    fn compute_split(index: u64) -> Option<(usize, u32)> {
        BitWord::split(index).map(|(o, i)| (o.0, i.0))
    }

    fn compute_fuse(of_word: usize, in_word: u32) -> Option<u64> {
        BitWord::fuse(IndexOfWord(of_word), IndexInWord(in_word))
    }
} // mod static_tests

//
//  Bit operations.
//

impl BitWord {
    /// Returns the number of bits set.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use typed_bitset::utils::BitWord;
    /// assert_eq!(0, BitWord::ALL_ZEROS.count());
    /// assert_eq!(64, BitWord::ALL_ONES.count());
    /// ```
    #[inline]
    pub const fn count(&self) -> usize {
        self.0.count_ones() as _
    }

    /// Returns whether the given bit is set.
    ///
    /// #   Panics
    ///
    /// See `IndexInWord`.
    #[inline]
    pub const fn is_set(&self, bit: IndexInWord) -> bool {
        (self.0 & Self::bit_mask(bit)) != 0
    }

    /// Sets a bit.
    ///
    /// Returns whether the bit was previously set, or not.
    ///
    /// #   Panics
    ///
    /// See `IndexInWord`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use typed_bitset::utils::{BitWord, IndexInWord};
    /// let mut word = BitWord(0b1001);
    ///
    /// assert!(word.set(IndexInWord(0)));
    /// assert!(!word.set(IndexInWord(2)));
    ///
    /// assert_eq!(0b1101, word.0);
    /// ```
    #[inline]
    pub const fn set(&mut self, bit: IndexInWord) -> bool {
        let mask = Self::bit_mask(bit);

        let previous = (self.0 & mask) != 0;

        self.0 |= mask;

        previous
    }

    /// Resets a bit.
    ///
    /// Returns whether the bit was previously set, or not.
    ///
    /// #   Panics
    ///
    /// See `IndexInWord`.
    #[inline]
    pub const fn reset(&mut self, bit: IndexInWord) -> bool {
        let mask = Self::bit_mask(bit);

        let previous = (self.0 & mask) != 0;

        self.0 &= !mask;

        previous
    }
}

#[cfg(test)]
mod bit_tests {
    use super::*;

    const BITS: u32 = BitWord::BITS as u32;

    #[test]
    fn is_set_empty_full() {
        for i in 0..BITS {
            assert!(!BitWord::ALL_ZEROS.is_set(IndexInWord(i)), "{i}");
            assert!(BitWord::ALL_ONES.is_set(IndexInWord(i)), "{i}");
        }
    }

    #[test]
    fn set_empty() {
        for i in 0..BITS {
            let mut word = BitWord::ALL_ZEROS;

            assert!(!word.set(IndexInWord(i)), "{i}");
            assert!(word.is_set(IndexInWord(i)), "{i}");
            assert_eq!(1, word.count(), "{i}");
        }
    }

    #[test]
    fn set_full() {
        for i in 0..BITS {
            let mut word = BitWord::ALL_ONES;

            assert!(word.set(IndexInWord(i)), "{i}");
            assert_eq!(BitWord::ALL_ONES, word, "{i}");
        }
    }

    #[test]
    fn reset_empty() {
        for i in 0..BITS {
            let mut word = BitWord::ALL_ZEROS;

            assert!(!word.reset(IndexInWord(i)), "{i}");
            assert_eq!(BitWord::ALL_ZEROS, word, "{i}");
        }
    }

    #[test]
    fn reset_full() {
        for i in 0..BITS {
            let mut word = BitWord::ALL_ONES;

            assert!(word.reset(IndexInWord(i)), "{i}");
            assert!(!word.is_set(IndexInWord(i)), "{i}");
            assert_eq!(63, word.count(), "{i}");
        }
    }
} // mod bit_tests

//
//  Query operations.
//

impl BitWord {
    /// Returns the number of bits set that are at, or after, the given index.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use typed_bitset::utils::{BitWord, IndexInWord};
    /// assert_eq!(64, BitWord::ALL_ONES.count_after(IndexInWord(0)));
    /// assert_eq!(1, BitWord::ALL_ONES.count_after(IndexInWord(63)));
    /// ```
    #[inline]
    pub const fn count_after(&self, bit: IndexInWord) -> usize {
        (self.0 & Self::mask_after(bit)).count_ones() as _
    }

    /// Returns the index of the next set bit that is at, or after, the given index, if any.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use typed_bitset::utils::{BitWord, IndexInWord};
    /// assert_eq!(None, BitWord::ALL_ZEROS.next_after(IndexInWord(0)));
    ///
    /// assert_eq!(Some(IndexInWord(3)), BitWord(0b1001).next_after(IndexInWord(1)));
    /// ```
    #[inline]
    pub const fn next_after(&self, bit: IndexInWord) -> Option<IndexInWord> {
        let zeros = (self.0 & Self::mask_after(bit)).trailing_zeros();

        //  FIXME: convert to `.then_some` when it is const.
        if zeros < Self::BITS as _ {
            Some(IndexInWord(zeros))
        } else {
            None
        }
    }
}

// mod query_tests

//
//  Bitwise traits.
//

impl BitAndAssign for BitWord {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitAnd for BitWord {
    type Output = Self;

    #[inline]
    fn bitand(mut self, rhs: Self) -> Self::Output {
        self &= rhs;
        self
    }
}

impl BitOrAssign for BitWord {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitOr for BitWord {
    type Output = Self;

    #[inline]
    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl BitXorAssign for BitWord {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl BitXor for BitWord {
    type Output = Self;

    #[inline]
    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl Not for BitWord {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

#[cfg(test)]
mod bitwise_tests {
    use super::*;

    const LEFT: u64 = 0b1001;
    const RIGHT: u64 = 0b0001_1000;

    #[test]
    fn bit_and() {
        assert_eq!(0b1000, (BitWord(LEFT) & BitWord(RIGHT)).0);
    }

    #[test]
    fn bit_or() {
        assert_eq!(0b0001_1001, (BitWord(LEFT) | BitWord(RIGHT)).0);
    }

    #[test]
    fn bit_xor() {
        let mut word = BitWord(LEFT);

        word ^= BitWord(RIGHT);

        assert_eq!(0b0001_0001, word.0);
    }

    #[test]
    fn bit_not() {
        assert_eq!(BitWord::ALL_ONES, !BitWord::ALL_ZEROS);
        assert_eq!(!LEFT, (!BitWord(LEFT)).0);
    }
} // mod bitwise_tests

//
//  Implementation details
//

impl BitWord {
    //  Mask of the bit.
    #[inline]
    const fn bit_mask(bit: IndexInWord) -> u64 {
        debug_assert!(bit.0 < Self::BITS as _);

        //  Mask to ensure the shift doesn't overflow.
        1 << (bit.0 % Self::BITS as u32)
    }

    //  Mask including `bit` and all bits after.
    #[inline]
    const fn mask_after(bit: IndexInWord) -> u64 {
        !(Self::bit_mask(bit) - 1)
    }
}
