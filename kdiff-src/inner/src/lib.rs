/// Re-exports each listed crate both as a module and as a glob, inlined
/// into the documentation of the category crate.
#[macro_export]
macro_rules! doc_inline_reexport {
    ( $($lib:ident),* $(,)? ) => { $(
        #[doc(inline)]
        pub use $lib::{self, *};
    )* };
}
