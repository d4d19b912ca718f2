pub trait BinaryOp {
    type Set;
    fn op(&self, lhs: &Self::Set, rhs: &Self::Set) -> Self::Set;
}

pub trait Identity: BinaryOp {
    fn id(&self) -> Self::Set;
}

pub trait Associative {}

pub trait Commutative {}

pub trait Monoid: BinaryOp + Associative + Identity {}

impl<T: BinaryOp + Associative + Identity> Monoid for T {}

#[macro_export]
macro_rules! def_monoid_generics {
    (
        $(#[$attr:meta])*
        $vis:vis $name:ident[$($gen:tt)*] where [$($where:tt)*] =
            ($ty:ty, $op:expr, $id:expr $(,)?)
    ) => {
        $(#[$attr])*
        $vis struct $name<$($gen)*>(std::marker::PhantomData<fn() -> ($($gen)*)>)
        where $($where)*;
        impl<$($gen)*> $name<$($gen)*>
        where $($where)*
        {
            pub fn new() -> Self { Self(std::marker::PhantomData) }
        }
        impl<$($gen)*> $crate::BinaryOp for $name<$($gen)*>
        where $($where)*
        {
            type Set = $ty;
            fn op(&self, lhs: &Self::Set, rhs: &Self::Set) -> Self::Set {
                ($op)(lhs, rhs)
            }
        }
        impl<$($gen)*> $crate::Identity for $name<$($gen)*>
        where $($where)*
        {
            fn id(&self) -> Self::Set { ($id)() }
        }
        impl<$($gen)*> $crate::Associative for $name<$($gen)*>
        where $($where)*
        {}
        impl<$($gen)*> Default for $name<$($gen)*>
        where $($where)*
        {
            fn default() -> Self { Self::new() }
        }
    };
    (
        $(#[$attr:meta])*
        $vis:vis $name:ident[$($gen:tt)*] where [$($where:tt)*] =
            ($ty:ty, $op:expr, $id:expr, Commutative $(,)?)
    ) => {
        $crate::def_monoid_generics! {
            $(#[$attr])*
            $vis $name[$($gen)*] where [$($where)*] = ($ty, $op, $id)
        }
        impl<$($gen)*> $crate::Commutative for $name<$($gen)*> where $($where)* {}
    };
    (
        $(
            $(#[$attr:meta])*
            $vis:vis $name:ident[$($gen:tt)*] where [$($where:tt)*] = ($($impl:tt)*)
        ),*
    ) => { $(
        $crate::def_monoid_generics! {
            $(#[$attr])*
            $vis $name[$($gen)*] where [$($where)*] = ($($impl)*)
        }
    )* };
    (
        $(
            $(#[$attr:meta])*
            $vis:vis $name:ident[$($gen:tt)*] where [$($where:tt)*] = ($($impl:tt)*),
        )*
    ) => { $(
        $crate::def_monoid_generics! {
            $(#[$attr])*
            $vis $name[$($gen)*] where [$($where)*] = ($($impl)*)
        }
    )* };
}

#[macro_export]
macro_rules! def_monoid {
    ( $vis:vis $name:ident = ($ty:ty, $op:expr, $id:expr $(,)?) ) => {
        $crate::def_monoid_generics! { $vis $name[] where [] = ($ty, $op, $id) }
    };
    ( $vis:vis $name:ident = ($ty:ty, $op:expr, $id:expr, Commutative $(,)?) ) => {
        $crate::def_monoid_generics! {
            $vis $name[] where [] = ($ty, $op, $id, Commutative)
        }
    };
    ( $($vis:vis $name:ident = ($($impl:tt)*)),* ) => { $(
        $crate::def_monoid! { $vis $name = ($($impl)*) }
    )* };
    ( $($vis:vis $name:ident = ($($impl:tt)*),)* ) => { $(
        $crate::def_monoid! { $vis $name = ($($impl)*) }
    )* };
}
