use monoid::def_monoid_generics;

def_monoid_generics! {
    /// `max` with `T::default()` as the identity, which requires the default
    /// to be the least element (`usize`, `Option<_>`, tuples thereof, ...).
    pub OpMax[T] where [T: Ord + Clone + Default] = (
        T,
        |x: &T, y: &T| x.max(y).clone(),
        T::default,
        Commutative,
    ),
}
