//! Associative lookup over a hashed table
//!
//! A [`StaticMap`] is a [`Hashed`] table whose elements are placed by the
//! hash of their key, plus a [`MapConfig`] to read keys and values back
//! out. It adds no storage of its own. Lookups hash the probe key, scan the
//! one bucket it lands in, and return the first element whose key compares
//! equal; with duplicate keys, the element that came first in the parent
//! view wins.

mod config;

pub use config::{Config, EqualTo, KeyEqual, KeyedHash, MapConfig, PairConfig};

use crate::err::Error;
use crate::hash::{KeyHash, StaticHash};
use crate::hashed::{hashed, Hashed, SlotIndex};
use crate::view::{Iter, View};
use std::fmt;
use std::marker::PhantomData;

/// A read-only map over the elements of a view
///
/// Built once by [`static_map`] or the [`static_map!`](crate::static_map!)
/// macro. There is no insertion or removal; any number of readers may share
/// a built map.
#[derive(Clone)]
pub struct StaticMap<
    // Parent view type
    V,
    // Key and value accessors
    C,
    // Hash function over keys
    H,
    // Number of buckets
    const B: usize,
    // Number of slots in each bucket
    const S: usize,
    // Slot index type
    I = usize,
> {
    /// Elements grouped by key hash
    table: Hashed<V, KeyedHash<H, C>, B, S, I>,
}

impl<V, C, const B: usize, const S: usize> StaticMap<V, C, StaticHash, B, S, usize>
where
    V: View,
    C: MapConfig<V::Item>,
    StaticHash: KeyHash<C::Key>,
{
    /// Build a map over `parent` with the default hash function.
    pub fn new(parent: V, config: C) -> Result<Self, Error> {
        static_map::<B, S>().build(parent, config)
    }
}

impl<V, C, H, const B: usize, const S: usize, I> StaticMap<V, C, H, B, S, I>
where
    V: View,
    C: MapConfig<V::Item>,
    H: KeyHash<C::Key>,
    I: SlotIndex,
{
    /// The first element whose key equals `key`.
    pub fn find(&self, key: &C::Key) -> Option<V::Item> {
        let keyed = self.table.hash_function();
        let hash = keyed.hasher.hash_key(key);
        self.table
            .lookup(hash, |item| keyed.config.key_eq(key, &keyed.config.key(item)))
    }

    /// 1 if some element has this key, otherwise 0.
    pub fn count(&self, key: &C::Key) -> usize {
        usize::from(self.contains_key(key))
    }

    /// Returns `true` if some element has this key.
    pub fn contains_key(&self, key: &C::Key) -> bool {
        self.find(key).is_some()
    }

    /// The mapped value for `key`.
    ///
    /// This is the map's indexing operation. There is no `Index` impl, since
    /// the mapped value is computed by the config and may not be a reference
    /// into the map. Fails with [`Error::KeyNotFound`] if no element has
    /// this key.
    pub fn at(&self, key: &C::Key) -> Result<C::Mapped, Error> {
        let item = self.find(key).ok_or(Error::KeyNotFound)?;
        Ok(self.config().mapped(&item))
    }

    /// Compare two keys the way lookups do.
    pub fn key_equal(&self, a: &C::Key, b: &C::Key) -> bool {
        self.config().key_eq(a, b)
    }
}

impl<V, C, H, const B: usize, const S: usize, I> StaticMap<V, C, H, B, S, I>
where
    V: View,
{
    /// Number of elements, including any shadowed by an earlier equal key.
    pub fn size(&self) -> usize {
        self.table.parent().size()
    }

    /// Returns `true` if the map has no elements.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Iterate over the elements in parent order.
    pub fn iter(&self) -> Iter<&V> {
        self.table.parent().iter()
    }
}

impl<V, C, H, const B: usize, const S: usize, I> StaticMap<V, C, H, B, S, I> {
    /// Number of buckets.
    pub fn bucket_count(&self) -> usize {
        B
    }

    /// Number of slots in each bucket.
    pub fn bucket_size(&self) -> usize {
        S
    }

    /// Borrow the key and value accessors.
    pub fn config(&self) -> &C {
        &self.table.hash_function().config
    }

    /// Borrow the hash function over keys.
    pub fn hash_function(&self) -> &H {
        &self.table.hash_function().hasher
    }

    /// Borrow the underlying table.
    pub fn table(&self) -> &Hashed<V, KeyedHash<H, C>, B, S, I> {
        &self.table
    }
}

impl<V: fmt::Debug, C, H, const B: usize, const S: usize, I: fmt::Debug> fmt::Debug
    for StaticMap<V, C, H, B, S, I>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticMap")
            .field("table", &self.table)
            .finish()
    }
}

impl<'m, V, C, H, const B: usize, const S: usize, I> IntoIterator
    for &'m StaticMap<V, C, H, B, S, I>
where
    V: View,
{
    type Item = V::Item;
    type IntoIter = Iter<&'m V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builder for [`StaticMap`]
///
/// Fixes the table shape; the key hash defaults to [`StaticHash`] and the
/// slot index type to `usize`.
#[derive(Clone, Copy, Debug)]
pub struct StaticMapBuilder<
    // Hash function over keys
    H,
    // Number of buckets
    const B: usize,
    // Number of slots in each bucket
    const S: usize,
    // Slot index type
    I = usize,
> {
    /// Hash function over keys
    hasher: H,
    /// Marker for the slot index type
    index: PhantomData<fn() -> I>,
}

/// Start building a map of `B` buckets with `S` slots each.
///
/// Every key must land in a bucket with a free slot, so `B` and `S` have to
/// leave room for the worst collision among the keys. `B = 2 * len` and
/// `S = 2` is a reasonable first try; on [`Error::BucketFull`], grow one of
/// them and build again.
pub fn static_map<const B: usize, const S: usize>() -> StaticMapBuilder<StaticHash, B, S> {
    StaticMapBuilder::default()
}

impl<const B: usize, const S: usize> Default for StaticMapBuilder<StaticHash, B, S> {
    fn default() -> Self {
        Self {
            hasher: StaticHash,
            index: PhantomData,
        }
    }
}

impl<H, const B: usize, const S: usize, I> StaticMapBuilder<H, B, S, I> {
    /// Hash keys with a different function.
    pub fn hasher<G>(self, hasher: G) -> StaticMapBuilder<G, B, S, I> {
        StaticMapBuilder {
            hasher,
            index: PhantomData,
        }
    }

    /// Store slots as `J` instead.
    pub fn slot_type<J: SlotIndex>(self) -> StaticMapBuilder<H, B, S, J> {
        StaticMapBuilder {
            hasher: self.hasher,
            index: PhantomData,
        }
    }

    /// Build the map over `parent`, reading elements through `config`.
    pub fn build<V, C>(self, parent: V, config: C) -> Result<StaticMap<V, C, H, B, S, I>, Error>
    where
        V: View,
        C: MapConfig<V::Item>,
        H: KeyHash<C::Key>,
        I: SlotIndex,
    {
        let keyed = KeyedHash {
            hasher: self.hasher,
            config,
        };
        let table = hashed::<B, S>()
            .hasher(keyed)
            .slot_type::<I>()
            .build(parent)?;
        Ok(StaticMap { table })
    }
}

/// Build a [`StaticMap`] with the default table shape.
///
/// The table gets twice as many buckets as there are elements, with two
/// slots each, and keys are hashed by [`StaticHash`]. Evaluates to a
/// `Result`, since those defaults can still overflow a bucket.
///
/// From `key => value` pairs, which are stored in an owned array:
///
/// ```
/// let fruit = static_views::static_map! {
///     5 => "apple",
///     8 => "pear",
///     0 => "banana",
/// }
/// .unwrap();
/// assert_eq!(fruit.at(&5), Ok("apple"));
/// assert_eq!(fruit.find(&10), None);
/// ```
///
/// Or over an existing view, given its length as a constant expression and
/// a [`MapConfig`]:
///
/// ```
/// use static_views::{raw, static_map, PairConfig};
///
/// const PLANETS: [(&str, u32); 3] = [("mercury", 88), ("venus", 225), ("earth", 365)];
/// let years = static_map!(@view raw(&PLANETS), PLANETS.len(), PairConfig::new()).unwrap();
/// assert_eq!(years.at(&"venus"), Ok(&225));
/// assert_eq!(years.bucket_count(), 6);
/// ```
#[macro_export]
macro_rules! static_map {
    (@view $view:expr, $len:expr, $config:expr $(,)?) => {{
        const __LEN: usize = $len;
        $crate::static_map::<{ 2 * __LEN }, 2>().build($view, $config)
    }};
    ($($key:expr => $value:expr),+ $(,)?) => {{
        const __LEN: usize = [$(stringify!($key)),+].len();
        $crate::static_map::<{ 2 * __LEN }, 2>()
            .build($crate::raw([$(($key, $value)),+]), $crate::PairConfig::new())
    }};
}
