use std::ops::Range;

/// Boundary search for a predicate that holds on a prefix of the domain
/// and fails on the rest.
pub trait Bisect {
    type Input;
    type Output;
    fn bisect(&self, pred: impl FnMut(&Self::Input) -> bool) -> Self::Output;
}

macro_rules! impl_bisect_uint {
    ( $($ty:ty)* ) => { $(
        impl Bisect for Range<$ty> {
            type Input = $ty;
            type Output = $ty;
            fn bisect(&self, mut pred: impl FnMut(&$ty) -> bool) -> $ty {
                let Range { start: mut ok, end: mut bad } = *self;
                if ok >= bad || !pred(&ok) {
                    return ok;
                }
                while bad - ok > 1 {
                    let mid = ok + (bad - ok) / 2;
                    *(if pred(&mid) { &mut ok } else { &mut bad }) = mid;
                }
                bad
            }
        }
    )* }
}

impl_bisect_uint! { u8 u16 u32 u64 u128 usize }

/// The first index at which `pred` fails, or `self.len()`.
impl<T> Bisect for [T] {
    type Input = T;
    type Output = usize;
    fn bisect(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        (0..self.len()).bisect(|&i| pred(&self[i]))
    }
}

#[test]
fn sanity_check() {
    {
        let pred = |&x: &u64| x < 100;
        assert_eq!((0_u64..200).bisect(pred), 100);
        assert_eq!((0_u64..50).bisect(pred), 50);
        assert_eq!((150_u64..200).bisect(pred), 150);
        assert_eq!((7_u64..7).bisect(pred), 7);
    }
    {
        let pred = |&x: &usize| x * x < 200;
        assert_eq!((0_usize..100).bisect(pred), 15);
        assert_eq!((0_u32..100).bisect(|&x| x * x < 200), 15);
        assert_eq!((0_u8..u8::MAX).bisect(|&x| x < 200), 200);
        assert_eq!(
            (0..usize::MAX).bisect(|&x| x < usize::MAX / 3),
            usize::MAX / 3
        );
    }
    {
        let a = vec![0, 1, 4, 5, 5, 9];
        assert_eq!(a.bisect(|&x| x < 5), 3);
        assert_eq!(a.bisect(|&x| x <= 5), 5);
        assert_eq!(a.bisect(|&x| x < -1), 0);
        assert_eq!(a.bisect(|&x| x < 10), 6);
        assert_eq!(a[4..].bisect(|&x| x < 5), 0);
    }
    {
        let empty: [i64; 0] = [];
        assert_eq!(empty.bisect(|_| true), 0);
    }
}
