#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

#[cfg(feature = "std")]
pub(crate) type KeySet<'a, K> = HashSet<&'a K>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySet<'a, K> = BTreeSet<&'a K>;

/// Bound for item keys produced by the caller's `key` function.
///
/// With `std` this is `Hash + Eq`; without it, `Ord`.
#[cfg(feature = "std")]
pub trait ReorderKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> ReorderKey for K {}

#[cfg(not(feature = "std"))]
pub trait ReorderKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> ReorderKey for K {}

/// Returns `true` when every key in `keys` is distinct.
pub(crate) fn keys_are_unique<K: ReorderKey>(keys: &[K]) -> bool {
    let mut seen = KeySet::<K>::new();
    keys.iter().all(|k| seen.insert(k))
}
