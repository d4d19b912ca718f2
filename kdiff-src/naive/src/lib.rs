use inner::doc_inline_reexport;

doc_inline_reexport! {
    k_diff_naive,
}
