use inner::doc_inline_reexport;

doc_inline_reexport! {
    coord_compress,
    k_diff_subseq,
}
