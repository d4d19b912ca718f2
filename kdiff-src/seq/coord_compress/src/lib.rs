use std::ops::{Index, Range, RangeInclusive};

use bisect::Bisect;

/// Sorted distinct values; the rank of a value is its index here.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoordCompress<T> {
    sorted: Vec<T>,
}

impl<T: Ord> CoordCompress<T> {
    pub fn len(&self) -> usize { self.sorted.len() }
    pub fn is_empty(&self) -> bool { self.sorted.is_empty() }
    pub fn values(&self) -> &[T] { &self.sorted }

    /// The least rank whose value is not less than `x`.
    pub fn lower_bound(&self, x: &T) -> usize { self.sorted.bisect(|y| y < x) }

    /// The least rank whose value is greater than `x`.
    pub fn upper_bound(&self, x: &T) -> usize {
        self.sorted.bisect(|y| y <= x)
    }

    pub fn rank(&self, x: &T) -> Option<usize> {
        let i = self.lower_bound(x);
        (self.sorted.get(i) == Some(x)).then_some(i)
    }

    /// Ranks of the values within `lo..=hi`.
    pub fn rank_range(&self, range: RangeInclusive<T>) -> Range<usize> {
        let (lo, hi) = range.into_inner();
        let start = self.lower_bound(&lo);
        let end = self.upper_bound(&hi);
        start..end.max(start)
    }

    // order-preserving minimal perfect hashing
    pub fn encoder<B>(&self) -> B
    where
        T: Clone,
        B: FromIterator<(T, usize)>,
    {
        self.sorted.iter().cloned().zip(0..).collect()
    }
}

impl<T: Ord> FromIterator<T> for CoordCompress<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sorted: Vec<_> = iter.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();
        Self { sorted }
    }
}

impl<T: Ord + Clone> From<&[T]> for CoordCompress<T> {
    fn from(a: &[T]) -> Self { a.iter().cloned().collect() }
}

impl<T> Index<usize> for CoordCompress<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T { &self.sorted[i] }
}
