//! Longest k-difference subsequence in $O(n \log n)$.
//!
//! - [`seq::k_diff_subseq`]: the scan itself, on slices of signed integers.
//! - [`seq::coord_compress`]: values to dense ranks.
//! - [`ds::vec_segtree`]: point update, range fold.
//! - [`ops`]: monoids and range normalisation.
//! - [`algo::bisect`]: binary search.
//! - [`naive`]: quadratic references.
//!
//! ```
//! use kdiff_doc::seq::KDiffSubseq;
//!
//! assert_eq!([10_i64, 1, 4, 7, 13, 6, 9, 11].k_diff_subseq_len(3), 6);
//! assert_eq!([5_i64, 5, 5, 5, 5].k_diff_subseq_len(0), 5);
//! ```

#[doc(inline)]
pub use {algo, ds, naive, ops, seq};
