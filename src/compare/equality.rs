//! Equality comparers for the hash-based set operators.
//!
//! An [`EqualityComparer`] decides when two values are "the same" for
//! `distinct`, `union`, `intersect` and `except`. It must be consistent: two
//! values that compare equal must hash identically.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Equality and hashing over values of type `T`.
///
/// # Laws
///
/// For all `a`, `b`:
///
/// ```text
/// equals(a, b) implies hash(a) == hash(b)
/// ```
pub trait EqualityComparer<T: ?Sized> {
    /// Returns `true` if the two values are equivalent.
    fn equals(&self, left: &T, right: &T) -> bool;

    /// Feeds the equivalence class of `value` into `state`.
    fn hash<H: Hasher>(&self, value: &T, state: &mut H);
}

/// Uses the `Eq` and `Hash` implementations of `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultEquality;

impl<T: Eq + Hash + ?Sized> EqualityComparer<T> for DefaultEquality {
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }

    #[inline]
    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        value.hash(state);
    }
}

/// Compares values through a projected key.
///
/// # Examples
///
/// ```rust
/// use seqops::compare::{EqualityComparer, KeyEquality};
///
/// let ignore_case = KeyEquality::new(|word: &&str| word.to_lowercase());
/// assert!(ignore_case.equals(&"Abc", &"aBC"));
/// assert!(!ignore_case.equals(&"Abc", &"Bca"));
/// ```
pub struct KeyEquality<F, K> {
    selector: F,
    key: PhantomData<fn() -> K>,
}

impl<F, K> KeyEquality<F, K> {
    /// Creates a comparer that treats values with equal keys as equivalent.
    pub const fn new(selector: F) -> Self {
        Self {
            selector,
            key: PhantomData,
        }
    }
}

impl<T, F, K> EqualityComparer<T> for KeyEquality<F, K>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    K: Eq + Hash,
{
    fn equals(&self, left: &T, right: &T) -> bool {
        (self.selector)(left) == (self.selector)(right)
    }

    fn hash<H: Hasher>(&self, value: &T, state: &mut H) {
        (self.selector)(value).hash(state);
    }
}

impl<F: Clone, K> Clone for KeyEquality<F, K> {
    fn clone(&self) -> Self {
        Self::new(self.selector.clone())
    }
}

impl<F, K> fmt::Debug for KeyEquality<F, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("KeyEquality").finish_non_exhaustive()
    }
}

/// A value paired with the comparer that defines its identity.
///
/// Lets a comparer-defined equivalence drive a standard `HashSet` or
/// `HashMap`.
pub(crate) struct Keyed<'c, T, E> {
    pub(crate) value: T,
    comparer: &'c E,
}

impl<'c, T, E> Keyed<'c, T, E> {
    pub(crate) const fn new(value: T, comparer: &'c E) -> Self {
        Self { value, comparer }
    }
}

impl<T, E: EqualityComparer<T>> PartialEq for Keyed<'_, T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.comparer.equals(&self.value, &other.value)
    }
}

impl<T, E: EqualityComparer<T>> Eq for Keyed<'_, T, E> {}

impl<T, E: EqualityComparer<T>> Hash for Keyed<'_, T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparer.hash(&self.value, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;
    use std::collections::hash_map::DefaultHasher;

    fn hash_with<T, E: EqualityComparer<T>>(comparer: &E, value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        comparer.hash(value, &mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn test_default_equality() {
        assert!(DefaultEquality.equals(&3, &3));
        assert!(!DefaultEquality.equals(&3, &4));
        assert_eq!(
            hash_with(&DefaultEquality, &3),
            hash_with(&DefaultEquality, &3)
        );
    }

    #[rstest]
    #[case("Abc", "abc", true)]
    #[case("BCA", "bca", true)]
    #[case("Abc", "Bca", false)]
    fn test_key_equality_ignoring_case(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: bool,
    ) {
        let comparer = KeyEquality::new(|word: &&str| word.to_lowercase());
        assert_eq!(comparer.equals(&left, &right), expected);
        if expected {
            assert_eq!(hash_with(&comparer, &left), hash_with(&comparer, &right));
        }
    }

    #[rstest]
    fn test_keyed_deduplicates_in_hash_set() {
        let comparer = KeyEquality::new(|value: &i32| value % 10);
        let mut seen = HashSet::new();
        assert!(seen.insert(Keyed::new(1, &comparer)));
        assert!(!seen.insert(Keyed::new(11, &comparer)));
        assert!(seen.insert(Keyed::new(2, &comparer)));
        assert_eq!(seen.len(), 2);
    }
}
