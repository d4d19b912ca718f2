use inner::doc_inline_reexport;

doc_inline_reexport! {
    monoid,
    op_max,
    usize_bounds,
}
