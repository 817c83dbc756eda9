//! How a static map reads its elements
//!
//! A map does not store keys and values separately. Each element of the
//! parent view is read through a [`MapConfig`], which extracts the key and
//! the mapped value and decides when two keys are equal.

use crate::hash::KeyHash;
use std::fmt;
use std::marker::PhantomData;

/// Equality predicate over keys of type `K`
pub trait KeyEqual<K: ?Sized> {
    /// Returns `true` if the two keys are equal.
    fn key_eq(&self, a: &K, b: &K) -> bool;
}

impl<K: ?Sized, F: Fn(&K, &K) -> bool> KeyEqual<K> for F {
    #[inline(always)]
    fn key_eq(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

/// Key equality through [`PartialEq`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_structs)]
pub struct EqualTo;

impl<K: PartialEq + ?Sized> KeyEqual<K> for EqualTo {
    #[inline(always)]
    fn key_eq(&self, a: &K, b: &K) -> bool {
        a == b
    }
}

/// Key and mapped-value access for elements of type `T`
pub trait MapConfig<T> {
    /// Key extracted from an element
    type Key;
    /// Value returned by a successful lookup
    type Mapped;

    /// Extract the key of an element.
    fn key(&self, item: &T) -> Self::Key;

    /// Extract the mapped value of an element.
    fn mapped(&self, item: &T) -> Self::Mapped;

    /// Compare two keys.
    fn key_eq(&self, a: &Self::Key, b: &Self::Key) -> bool;
}

/// A [`MapConfig`] assembled from two accessor functions and a key
/// equality predicate
///
/// The accessors must be annotated with their argument type, since the
/// element type is only known once the map is built:
///
/// ```
/// use static_views::{raw, static_map, Config};
///
/// let grades = [(101_u32, 'A'), (102, 'B')];
/// let by_id = static_map::<4, 2>()
///     .build(
///         raw(&grades),
///         Config::new(|g: &&(u32, char)| g.0, |g: &&(u32, char)| g.1),
///     )
///     .unwrap();
/// assert_eq!(by_id.at(&102), Ok('B'));
/// ```
#[derive(Clone, Copy)]
pub struct Config<
    // Key type
    K,
    // Mapped type
    M,
    // Key accessor
    GK,
    // Mapped accessor
    GM,
    // Key equality predicate
    E = EqualTo,
> {
    /// Key accessor
    get_key: GK,
    /// Mapped accessor
    get_mapped: GM,
    /// Key equality predicate
    key_equal: E,
    /// Marker for the accessor result types
    types: PhantomData<fn() -> (K, M)>,
}

impl<K, M, GK, GM> Config<K, M, GK, GM, EqualTo> {
    /// Bundle two accessors, comparing keys with `==`.
    pub fn new<T>(get_key: GK, get_mapped: GM) -> Self
    where
        GK: Fn(&T) -> K,
        GM: Fn(&T) -> M,
    {
        Self {
            get_key,
            get_mapped,
            key_equal: EqualTo,
            types: PhantomData,
        }
    }
}

impl<K, M, GK, GM, E> Config<K, M, GK, GM, E> {
    /// Compare keys with `key_equal` instead.
    pub fn with_key_equal<F: KeyEqual<K>>(self, key_equal: F) -> Config<K, M, GK, GM, F> {
        Config {
            get_key: self.get_key,
            get_mapped: self.get_mapped,
            key_equal,
            types: PhantomData,
        }
    }
}

impl<K, M, GK, GM, E: fmt::Debug> fmt::Debug for Config<K, M, GK, GM, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("key_equal", &self.key_equal)
            .finish_non_exhaustive()
    }
}

impl<T, K, M, GK, GM, E> MapConfig<T> for Config<K, M, GK, GM, E>
where
    GK: Fn(&T) -> K,
    GM: Fn(&T) -> M,
    E: KeyEqual<K>,
{
    type Key = K;
    type Mapped = M;

    #[inline(always)]
    fn key(&self, item: &T) -> K {
        (self.get_key)(item)
    }

    #[inline(always)]
    fn mapped(&self, item: &T) -> M {
        (self.get_mapped)(item)
    }

    #[inline(always)]
    fn key_eq(&self, a: &K, b: &K) -> bool {
        self.key_equal.key_eq(a, b)
    }
}

/// A [`MapConfig`] for `(key, value)` pairs
///
/// Owned pairs yield a clone of the value. Borrowed pairs yield a reference
/// into the backing storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct PairConfig<E = EqualTo> {
    /// Key equality predicate
    key_equal: E,
}

impl PairConfig<EqualTo> {
    /// Pairs whose keys compare with `==`.
    pub fn new() -> Self {
        Self { key_equal: EqualTo }
    }
}

impl<E> PairConfig<E> {
    /// Compare keys with `key_equal` instead.
    pub fn with_key_equal<F>(self, key_equal: F) -> PairConfig<F> {
        PairConfig { key_equal }
    }
}

impl<K: Clone, M: Clone, E: KeyEqual<K>> MapConfig<(K, M)> for PairConfig<E> {
    type Key = K;
    type Mapped = M;

    #[inline(always)]
    fn key(&self, item: &(K, M)) -> K {
        item.0.clone()
    }

    #[inline(always)]
    fn mapped(&self, item: &(K, M)) -> M {
        item.1.clone()
    }

    #[inline(always)]
    fn key_eq(&self, a: &K, b: &K) -> bool {
        self.key_equal.key_eq(a, b)
    }
}

impl<'a, K: Clone, M, E: KeyEqual<K>> MapConfig<&'a (K, M)> for PairConfig<E> {
    type Key = K;
    type Mapped = &'a M;

    #[inline(always)]
    fn key(&self, item: &&'a (K, M)) -> K {
        item.0.clone()
    }

    #[inline(always)]
    fn mapped(&self, item: &&'a (K, M)) -> &'a M {
        let pair: &'a (K, M) = *item;
        &pair.1
    }

    #[inline(always)]
    fn key_eq(&self, a: &K, b: &K) -> bool {
        self.key_equal.key_eq(a, b)
    }
}

/// Element hash for a map: the key hash of the element's key
#[derive(Clone, Copy, Debug)]
pub struct KeyedHash<H, C> {
    /// Hash function over keys
    pub(crate) hasher: H,
    /// Key accessor
    pub(crate) config: C,
}

impl<T, H, C> KeyHash<T> for KeyedHash<H, C>
where
    C: MapConfig<T>,
    H: KeyHash<C::Key>,
{
    #[inline(always)]
    fn hash_key(&self, item: &T) -> usize {
        self.hasher.hash_key(&self.config.key(item))
    }
}
