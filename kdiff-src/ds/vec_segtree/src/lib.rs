use std::ops::{Index, Range};

use monoid::Monoid;
use usize_bounds::UsizeBounds;

/// Bottom-up segment tree over a fixed number of slots.
///
/// Leaves live at `tree[n..2 * n]` and node `i` folds `2 * i` and
/// `2 * i + 1`, so no recursion is involved.
#[derive(Clone)]
pub struct VecSegtree<M: Monoid> {
    tree: Vec<M::Set>,
    monoid: M,
}

impl<M: Monoid> VecSegtree<M> {
    fn init(tree: &mut [M::Set], monoid: &M) {
        let n = tree.len() / 2;
        for i in (1..n).rev() {
            tree[i] = monoid.op(&tree[2 * i], &tree[2 * i + 1]);
        }
    }

    pub fn len(&self) -> usize { self.tree.len() / 2 }
    pub fn is_empty(&self) -> bool { self.tree.is_empty() }

    pub fn fold(&self, range: impl UsizeBounds) -> M::Set {
        let n = self.len();
        let Range { start, end } = range.to_range(n);
        self.fold_inner(start, end)
    }

    /// Folds the closed range `lo..=hi`, clamped to the slots.
    ///
    /// A reversed or entirely out-of-bounds range yields the identity.
    pub fn query(&self, lo: usize, hi: usize) -> M::Set {
        let Range { start, end } = (lo..=hi).clamped_to_range(self.len());
        self.fold_inner(start, end)
    }

    fn fold_inner(&self, start: usize, end: usize) -> M::Set {
        let n = self.len();
        let monoid = &self.monoid;
        let (mut il, mut ir) = (n + start, n + end);
        let (mut resl, mut resr) = (monoid.id(), monoid.id());
        while il < ir {
            if il & 1 != 0 {
                resl = monoid.op(&resl, &self.tree[il]);
                il += 1;
            }
            if ir & 1 != 0 {
                ir -= 1;
                resr = monoid.op(&self.tree[ir], &resr);
            }
            il >>= 1;
            ir >>= 1;
        }
        monoid.op(&resl, &resr)
    }

    /// Replaces slot `i` with `op(slot, x)`.
    ///
    /// Under a `max` monoid this raises the slot to `x` and never lowers it.
    pub fn update(&mut self, i: usize, x: &M::Set) {
        let n = self.len();
        assert!(
            i < n,
            "index out of bounds: the len is {n} but the index is {i}"
        );

        let Self { tree, monoid } = self;
        let mut i = n + i;
        tree[i] = monoid.op(&tree[i], x);
        while i > 1 {
            i >>= 1;
            tree[i] = monoid.op(&tree[2 * i], &tree[2 * i + 1]);
        }
    }
}

impl<M: Monoid + Default> From<Vec<M::Set>> for VecSegtree<M> {
    fn from(a: Vec<M::Set>) -> Self { (a, M::default()).into() }
}

impl<M: Monoid> From<(Vec<M::Set>, M)> for VecSegtree<M> {
    fn from((a, monoid): (Vec<M::Set>, M)) -> Self {
        let n = a.len();
        let mut tree: Vec<_> = (0..n).map(|_| monoid.id()).collect();
        tree.extend(a);
        Self::init(&mut tree, &monoid);
        Self { tree, monoid }
    }
}

impl<M: Monoid> Index<usize> for VecSegtree<M> {
    type Output = M::Set;
    fn index(&self, i: usize) -> &Self::Output {
        let n = self.len();
        assert!(
            i < n,
            "index out of bounds: the len is {n} but the index is {i}"
        );
        &self.tree[n + i]
    }
}

impl<M: Monoid> From<VecSegtree<M>> for Vec<M::Set> {
    fn from(mut self_: VecSegtree<M>) -> Vec<M::Set> {
        let n = self_.len();
        self_.tree.split_off(n)
    }
}

impl<M: Monoid + Default> FromIterator<M::Set> for VecSegtree<M> {
    fn from_iter<I: IntoIterator<Item = M::Set>>(iter: I) -> Self {
        let buf: Vec<_> = iter.into_iter().collect();
        buf.into()
    }
}
