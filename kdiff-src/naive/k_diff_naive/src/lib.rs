/// The quadratic DP over all earlier positions; a reference for
/// `k_diff_subseq`.
pub fn k_diff_subseq_len_naive(a: &[i64], k: u64) -> usize {
    let n = a.len();
    let mut dp = vec![1; n];
    for i in 0..n {
        for j in 0..i {
            let diff = (a[i] as i128 - a[j] as i128).unsigned_abs();
            if diff <= k as u128 {
                dp[i] = dp[i].max(dp[j] + 1);
            }
        }
    }
    dp.into_iter().max().unwrap_or(0)
}

#[test]
fn sanity_check() {
    assert_eq!(k_diff_subseq_len_naive(&[], 1), 0);
    assert_eq!(k_diff_subseq_len_naive(&[7], 0), 1);
    assert_eq!(k_diff_subseq_len_naive(&[1, 5, 3, 4, 2], 2), 4);
    assert_eq!(k_diff_subseq_len_naive(&[1, 10, 20, 30, 40], 5), 1);
    assert_eq!(k_diff_subseq_len_naive(&[i64::MIN, i64::MAX], u64::MAX), 2);
}
