//! Longest subsequence whose consecutive elements differ by at most `k`.
//!
//! ```
//! use k_diff_subseq::KDiffSubseq;
//!
//! let a = [1_i32, 5, 3, 4, 2];
//! assert_eq!(a.k_diff_subseq_len(2), 4);
//!
//! let i = a.k_diff_subseq(2);
//! assert_eq!(i.len(), 4);
//! assert!(i
//!     .windows(2)
//!     .all(|w| w[0] < w[1] && a[w[0]].abs_diff(a[w[1]]) <= 2));
//! ```
//!
//! For each element `x`, the best length among earlier elements within
//! `x - k ..= x + k` is found by a max-fold over the ranks of that window,
//! and the result is written back at the rank of `x`. Both steps take
//! $O(\log n)$ time, hence $O(n \log n)$ overall.

use coord_compress::CoordCompress;
use op_max::OpMax;
use vec_segtree::VecSegtree;

pub trait KDiffSubseq {
    type Item;
    type Tolerance;

    /// Length of a longest k-difference subsequence; `0` for empty input.
    fn k_diff_subseq_len(&self, k: Self::Tolerance) -> usize;

    /// Indices of one longest k-difference subsequence, in increasing order.
    fn k_diff_subseq(&self, k: Self::Tolerance) -> Vec<usize>;
}

macro_rules! impl_k_diff_subseq {
    ( $( ($ty:ty, $uty:ty, $wty:ty), )* ) => { $(
        impl KDiffSubseq for [$ty] {
            type Item = $ty;
            type Tolerance = $uty;

            fn k_diff_subseq_len(&self, k: $uty) -> usize {
                if self.is_empty() {
                    return 0;
                }

                let enc: CoordCompress<$ty> = self.iter().copied().collect();
                let mut dp: VecSegtree<OpMax<usize>> =
                    vec![0; enc.len()].into();
                let mut res = 0;
                for &x in self {
                    let (lo, hi) = <$ty>::window(x as $wty, k as $wty);
                    let cur = dp.fold(enc.rank_range(lo..=hi)) + 1;
                    dp.update(rank_of(&enc, &x), &cur);
                    res = res.max(cur);
                }
                res
            }

            fn k_diff_subseq(&self, k: $uty) -> Vec<usize> {
                if self.is_empty() {
                    return vec![];
                }

                let n = self.len();
                let enc: CoordCompress<$ty> = self.iter().copied().collect();
                let mut dp: VecSegtree<OpMax<Option<(usize, usize)>>> =
                    vec![None; enc.len()].into();
                let mut prev = vec![None; n];
                for (i, &x) in self.iter().enumerate() {
                    let (lo, hi) = <$ty>::window(x as $wty, k as $wty);
                    let best = dp.fold(enc.rank_range(lo..=hi));
                    let len = best.map_or(0, |(len, _)| len);
                    prev[i] = best.map(|(_, j)| j);
                    dp.update(rank_of(&enc, &x), &Some((len + 1, i)));
                }

                let mut last = dp.fold(..).map(|(_, i)| i);
                let mut res = vec![];
                while let Some(i) = last {
                    res.push(i);
                    last = prev[i];
                }
                res.reverse();
                res
            }
        }

        impl Window<$wty> for $ty {
            fn window(x: $wty, k: $wty) -> ($ty, $ty) {
                let lo = (x - k).max(<$ty>::MIN as $wty);
                let hi = (x + k).min(<$ty>::MAX as $wty);
                (lo as $ty, hi as $ty)
            }
        }
    )* };
}

impl_k_diff_subseq! {
    (i8, u8, i16),
    (i16, u16, i32),
    (i32, u32, i64),
    (i64, u64, i128),
    (isize, usize, i128),
}

/// `x - k ..= x + k` computed in the wide type `W` and clamped to `Self`.
trait Window<W>: Sized {
    fn window(x: W, k: W) -> (Self, Self);
}

fn rank_of<T: Ord>(enc: &CoordCompress<T>, x: &T) -> usize {
    let i = enc.lower_bound(x);
    debug_assert!(
        enc.rank(x) == Some(i),
        "value missing from the compression"
    );
    i
}

#[cfg(test)]
mod tests {
    use k_diff_naive::k_diff_subseq_len_naive;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    use super::*;

    fn is_valid<T: Copy + Into<i128>>(a: &[T], k: u64, i: &[usize]) -> bool {
        i.windows(2).all(|w| {
            let (x, y): (i128, i128) = (a[w[0]].into(), a[w[1]].into());
            w[0] < w[1] && (x - y).unsigned_abs() <= k as u128
        })
    }

    #[test]
    fn sanity_check() {
        let cases: &[(&[i64], u64, usize)] = &[
            (&[1, 5, 3, 4, 2], 2, 4),
            (&[5, 5, 5, 5, 5], 0, 5),
            (&[1, 2, 3, 4, 5, 6], 1, 6),
            (&[1, 10, 20, 30, 40], 5, 1),
            (&[-10, -8, -5, -3, 0, 2, 5], 3, 7),
            (&[10, 1, 4, 7, 13, 6, 9, 11], 3, 6),
            (&[100, -100, 200, -200, 0], 1_000_000_000, 5),
            (&[9, 7, 5, 3, 1], 2, 5),
        ];
        for &(a, k, expected) in cases {
            assert_eq!(a.k_diff_subseq_len(k), expected, "{a:?} {k}");

            let i = a.k_diff_subseq(k);
            assert_eq!(i.len(), expected, "{a:?} {k}");
            assert!(is_valid(a, k, &i), "{a:?} {k} {i:?}");
        }
    }

    #[test]
    fn empty() {
        let empty: [i32; 0] = [];
        assert_eq!(empty.k_diff_subseq_len(3), 0);
        assert_eq!(empty.k_diff_subseq(3), []);
    }

    #[test]
    fn single() {
        assert_eq!([42_i32].k_diff_subseq_len(0), 1);
        assert_eq!([42_i32].k_diff_subseq(0), [0]);
    }

    #[test]
    fn zero_tolerance_counts_mode() {
        let a = [3_i32, 1, 3, 2, 1, 3, 2, 3];
        assert_eq!(a.k_diff_subseq_len(0), 4);
        assert_eq!(a.k_diff_subseq(0), [0, 2, 5, 7]);
    }

    #[test]
    fn order_matters() {
        // sorted by value, 1 4 6 7 9 10 11 13 would chain completely
        let a = [10_i64, 1, 4, 7, 13, 6, 9, 11];
        assert_eq!(a.k_diff_subseq_len(3), 6);
        let rev: Vec<_> = a.iter().rev().copied().collect();
        assert_eq!(rev.k_diff_subseq_len(3), 6);
    }

    #[test]
    fn extremes() {
        let a = [i64::MIN, i64::MAX, i64::MIN, 0, i64::MAX];
        assert_eq!(a.k_diff_subseq_len(0), 2);
        assert_eq!(a.k_diff_subseq_len(u64::MAX), 5);
        assert_eq!(a.k_diff_subseq_len(u64::MAX / 2), 3);
        assert_eq!(a.k_diff_subseq_len(u64::MAX / 2 + 1), 4);

        let a = [i8::MIN, i8::MAX, 0, i8::MIN];
        assert_eq!(a.k_diff_subseq_len(u8::MAX), 4);
        assert_eq!(a.k_diff_subseq_len(128), 3);
        assert_eq!(a.k_diff_subseq_len(127), 2);

        let a = [isize::MAX, isize::MIN];
        assert_eq!(a.k_diff_subseq_len(usize::MAX), 2);
        assert_eq!(a.k_diff_subseq_len(usize::MAX - 1), 1);
    }

    #[test]
    fn idempotent() {
        let a = [4_i16, -2, 9, 4, 3, 8, -1];
        let first = a.k_diff_subseq_len(5);
        assert_eq!(a.k_diff_subseq_len(5), first);
        assert_eq!(a.k_diff_subseq(5), a.k_diff_subseq(5));
    }

    #[test]
    fn against_naive() {
        let mut rng = ChaCha20Rng::from_seed([
            0x8B, 0x3A, 0x71, 0x0E, 0xC4, 0x59, 0x22, 0xD7, 0x6F, 0x10, 0xA8,
            0x93, 0x4C, 0xE1, 0x35, 0x7A, 0xBD, 0x02, 0x68, 0xF9, 0x1C, 0x47,
            0xD3, 0x8E, 0x55, 0xAA, 0x0B, 0x96, 0x3F, 0xC0, 0x7D, 0x24,
        ]);
        for _ in 0..300 {
            let n = rng.gen_range(0..=60);
            let spread = rng.gen_range(1..=40);
            let a: Vec<i64> =
                (0..n).map(|_| rng.gen_range(-spread..=spread)).collect();

            let mut last = 0;
            for k in 0..=2 * spread as u64 + 1 {
                let len = a.k_diff_subseq_len(k);
                assert_eq!(len, k_diff_subseq_len_naive(&a, k), "{a:?} {k}");
                assert!(len >= last);
                assert!(len <= n);
                assert!(n == 0 || len >= 1);
                last = len;

                let i = a.k_diff_subseq(k);
                assert_eq!(i.len(), len);
                assert!(is_valid(&a, k, &i), "{a:?} {k} {i:?}");
            }
            assert_eq!(last, n);
        }
    }

    #[test]
    fn large_values() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x6B64_6966);
        for _ in 0..50 {
            let n = rng.gen_range(1..=200);
            let a: Vec<i64> = (0..n)
                .map(|_| rng.gen_range(-1_000_000_000..=1_000_000_000))
                .collect();
            let k = rng.gen_range(1..=1_000_000_000_u64);
            assert_eq!(a.k_diff_subseq_len(k), k_diff_subseq_len_naive(&a, k));
        }
    }

    #[test]
    fn long_chain() {
        let a: Vec<i32> =
            (0..100_000).map(|i| if i % 2 == 0 { i } else { -i }).collect();
        assert_eq!(a.k_diff_subseq_len(0), 1);
        assert_eq!(a.k_diff_subseq_len(2), 50_001);
        let asc: Vec<i32> = (0..100_000).collect();
        assert_eq!(asc.k_diff_subseq_len(1), 100_000);
    }
}
