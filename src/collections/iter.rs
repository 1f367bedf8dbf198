//! Iterator over the keys of a typed bit set.

use core::{fmt, iter::FusedIterator, marker::PhantomData};

use crate::{api::BitKey, utils::Ones};

/// An iterator producing the keys of a `TypedBitSet`, in ascending index order.
///
/// The iterator borrows the set, which therefore cannot be modified while iterating.
pub struct Iter<'a, K> {
    ones: Ones<'a>,
    _key: PhantomData<fn() -> K>,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(ones: Ones<'a>) -> Self {
        Self {
            ones,
            _key: PhantomData,
        }
    }
}

impl<K> Iterator for Iter<'_, K>
where
    K: BitKey,
{
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.ones.next().map(K::from_index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ones.size_hint()
    }
}

impl<K> FusedIterator for Iter<'_, K> where K: BitKey {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self::new(self.ones.clone())
    }
}

impl<K> fmt::Debug for Iter<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_tuple("Iter").field(&self.ones).finish()
    }
}
