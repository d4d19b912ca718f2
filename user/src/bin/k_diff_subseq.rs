//! Reads `n k a_1 ... a_n` (whitespace-separated; `k: u64`, `a_i: i64`)
//! from stdin and prints the length of a longest subsequence whose
//! consecutive elements differ by at most `k`.
//!
//! ```text
//! $ echo '8 3  10 1 4 7 13 6 9 11' | k_diff_subseq
//! 6
//! $ echo '0 3' | k_diff_subseq
//! 0
//! ```

use k_diff_subseq::KDiffSubseq;
use proconio::{fastout, input};

#[fastout]
fn main() {
    input! {
        n: usize,
        k: u64,
        a: [i64; n],
    }

    println!("{}", a.k_diff_subseq_len(k));
}
