//  See structs.

use core::iter::FusedIterator;

use super::{BitWord, IndexInWord};

/// Forward iterator over the set bits of a `BitWord`.
#[derive(Clone, Debug)]
pub struct BitInWordIter {
    next: IndexInWord,
    word: BitWord,
}

impl BitInWordIter {
    /// Creates a new iterator.
    pub const fn new(word: BitWord) -> Self {
        let next = IndexInWord(0);

        Self { next, word }
    }

    /// Creates an exhausted iterator.
    pub const fn empty() -> Self {
        let next = IndexInWord(BITS_32);

        Self {
            next,
            word: BitWord::ALL_ZEROS,
        }
    }

    //  Gives the index, if still in range.
    fn index(index: IndexInWord) -> Option<IndexInWord> {
        (index.0 < BITS_32).then_some(index)
    }
}

impl Iterator for BitInWordIter {
    type Item = IndexInWord;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.clone().count();

        (count, Some(count))
    }

    fn count(self) -> usize {
        let Some(next) = Self::index(self.next) else {
            return 0;
        };

        self.word.count_after(next)
    }

    fn next(&mut self) -> Option<Self::Item> {
        let next = Self::index(self.next)?;

        let result = self.word.next_after(next);

        self.next.0 = result.map(|i| i.0 + 1).unwrap_or(BITS_32);

        result
    }
}

impl ExactSizeIterator for BitInWordIter {}

impl FusedIterator for BitInWordIter {}

const BITS_32: u32 = BitWord::BITS as _;

// mod tests
