use inner::doc_inline_reexport;

doc_inline_reexport! {
    vec_segtree,
}
