//! The hashed bucket table
//!
//! [`Hashed`] groups the items of a parent view by hash. It owns the parent
//! and a fixed [`SlotArray`] of `B` buckets with `S` slots each. Building
//! the table walks the parent once, in order, and appends each item's index
//! to the first empty slot of bucket `hash % B`. There is no probing into
//! neighbouring buckets and no resizing: if a bucket overflows, the build
//! fails with [`Error::BucketFull`] and the caller picks a larger shape.
//!
//! A bucket is exposed as a [`ThroughView`] of the parent, driven by the
//! bucket's occupied slots, so reading a bucket copies nothing.

pub(crate) mod slots;

use crate::adaptor::{TakeView, ThroughView, TransformView};
use crate::algorithm::find_first_i;
use crate::err::Error;
use crate::hash::{KeyHash, StaticHash};
use crate::pipe::Adaptor;
use crate::raw::{raw, RawView};
use crate::view::{Extent, Iter, View};
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace, warn};

use slots::SlotArray;
pub use slots::SlotIndex;

/// One bucket of a [`Hashed`] table
///
/// The parent items whose indices occupy the bucket, in insertion order.
pub type Bucket<'t, V, I, const S: usize> =
    ThroughView<&'t V, TransformView<TakeView<RawView<&'t [I; S]>>, fn(&'t I) -> usize>>;

/// Read a slot value as a parent index.
fn slot_to_index<I: SlotIndex>(slot: &I) -> usize {
    I::into_index(*slot)
}

/// A view grouped into fixed-capacity buckets by hash
///
/// Immutable once built; any number of readers may share it.
#[derive(Clone)]
pub struct Hashed<
    // Parent view type
    V,
    // Hash function type
    H,
    // Number of buckets
    const B: usize,
    // Number of slots in each bucket
    const S: usize,
    // Slot index type
    I = usize,
> {
    /// Wrapped view
    parent: V,
    /// Hash function used to place items
    hasher: H,
    /// Parent indices, grouped by bucket
    slots: SlotArray<I, B, S>,
}

impl<V, H, const B: usize, const S: usize> Hashed<V, H, B, S, usize>
where
    V: View,
    H: KeyHash<V::Item>,
{
    /// Build a table over `parent` with `usize` slots.
    ///
    /// Use [`hashed`] to pick a narrower slot index type.
    pub fn new(parent: V, hasher: H) -> Result<Self, Error> {
        hashed::<B, S>().hasher(hasher).build(parent)
    }
}

impl<V, H, const B: usize, const S: usize, I> Hashed<V, H, B, S, I>
where
    V: View,
    H: KeyHash<V::Item>,
    I: SlotIndex,
{
    /// Rejects empty and overflowing shapes when the table type is built.
    const SHAPE: () = {
        assert!(B > 0, "a hashed table needs at least one bucket");
        assert!(S > 0, "a hashed table needs at least one slot per bucket");
        assert!(
            B.checked_mul(S).is_some(),
            "bucket count times bucket size overflows usize"
        );
    };

    /// Place every item of `parent` into its bucket.
    fn build(parent: V, hasher: H) -> Result<Self, Error> {
        let () = Self::SHAPE;
        let marker = SlotArray::<I, B, S>::empty_marker();
        if !I::fits(marker) {
            return Err(Error::SlotOverflow {
                slots: marker,
                max: I::max_index(),
            });
        }

        let mut slots = SlotArray::<I, B, S>::new();
        for (index, item) in parent.iter().enumerate() {
            let hash = hasher.hash_key(&item);
            let bucket = hash % B;
            match slots.insert(bucket, index) {
                Ok(slot) => trace!(index, hash, bucket, slot, "placed item"),
                Err(()) => {
                    warn!(index, bucket, capacity = S, "hashed table bucket is full");
                    return Err(Error::BucketFull {
                        bucket,
                        capacity: S,
                    });
                }
            }
        }

        debug!(
            items = parent.size(),
            buckets = B,
            bucket_size = S,
            longest = (0..B).map(|b| slots.occupied(b)).max().unwrap_or(0),
            occupied = (0..B).map(|b| slots.occupied(b)).sum::<usize>(),
            "built hashed table"
        );
        Ok(Self {
            parent,
            hasher,
            slots,
        })
    }

    /// Hash of one item, as computed during the build.
    pub fn hash_of(&self, item: &V::Item) -> usize {
        self.hasher.hash_key(item)
    }

    /// Find the first item in the bucket for `hash` that satisfies `pred`.
    ///
    /// Items are tested in insertion order.
    pub fn lookup<P>(&self, hash: usize, pred: P) -> Option<V::Item>
    where
        P: FnMut(&V::Item) -> bool,
    {
        let bucket = self.bucket(hash);
        let i = find_first_i(&bucket, pred);
        bucket.get(i)
    }
}

impl<V, H, const B: usize, const S: usize, I> Hashed<V, H, B, S, I>
where
    V: View,
    I: SlotIndex,
{
    /// The bucket that items with this hash were placed in.
    ///
    /// Costs at most `S` probes to find the occupied length, regardless of
    /// the number of buckets.
    pub fn bucket<'t>(&'t self, hash: usize) -> Bucket<'t, V, I, S> {
        let b = hash % B;
        let occupied = TakeView::new(raw(self.slots.row(b)), self.slots.occupied(b));
        let proxy = TransformView::new(occupied, slot_to_index::<I> as fn(&'t I) -> usize);
        ThroughView::new(&self.parent, proxy)
    }

    /// Occupied length of every bucket.
    pub fn occupancy(&self) -> [usize; B] {
        std::array::from_fn(|b| self.slots.occupied(b))
    }
}

impl<V, H, const B: usize, const S: usize, I> Hashed<V, H, B, S, I> {
    /// Number of buckets.
    pub fn bucket_count(&self) -> usize {
        B
    }

    /// Number of slots in each bucket.
    pub fn bucket_size(&self) -> usize {
        S
    }

    /// Borrow the hash function.
    pub fn hash_function(&self) -> &H {
        &self.hasher
    }

    /// Borrow the wrapped view.
    pub fn parent(&self) -> &V {
        &self.parent
    }

    /// Unwrap, returning the wrapped view.
    pub fn into_parent(self) -> V {
        self.parent
    }
}

impl<V: fmt::Debug, H, const B: usize, const S: usize, I: fmt::Debug> fmt::Debug
    for Hashed<V, H, B, S, I>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hashed")
            .field("parent", &self.parent)
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

/// The table as a view of its buckets
impl<'t, V, H, const B: usize, const S: usize, I> View for &'t Hashed<V, H, B, S, I>
where
    V: View,
    I: SlotIndex,
{
    type Item = Bucket<'t, V, I, S>;
    const EXTENT: Extent = Extent::Static(B);

    #[inline(always)]
    fn size(&self) -> usize {
        B
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> Self::Item {
        let table: &'t Hashed<V, H, B, S, I> = *self;
        table.bucket(i)
    }
}

impl<'t, V, H, const B: usize, const S: usize, I> IntoIterator for &'t Hashed<V, H, B, S, I>
where
    V: View,
    I: SlotIndex,
{
    type Item = Bucket<'t, V, I, S>;
    type IntoIter = Iter<&'t Hashed<V, H, B, S, I>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

/// Builder for [`Hashed`] tables
///
/// Fixes the table shape; the hash function defaults to [`StaticHash`]
/// and the slot index type to `usize`. Also usable as a pipe stage:
/// `raw(&xs) | hashed::<8, 2>()`.
#[derive(Clone, Copy, Debug)]
pub struct HashedBuilder<
    // Hash function type
    H,
    // Number of buckets
    const B: usize,
    // Number of slots in each bucket
    const S: usize,
    // Slot index type
    I = usize,
> {
    /// Hash function for the table
    hasher: H,
    /// Marker for the slot index type
    index: PhantomData<fn() -> I>,
}

/// Start building a table of `B` buckets with `S` slots each.
pub fn hashed<const B: usize, const S: usize>() -> HashedBuilder<StaticHash, B, S> {
    HashedBuilder::default()
}

impl<const B: usize, const S: usize> Default for HashedBuilder<StaticHash, B, S> {
    fn default() -> Self {
        Self {
            hasher: StaticHash,
            index: PhantomData,
        }
    }
}

impl<H, const B: usize, const S: usize, I> HashedBuilder<H, B, S, I> {
    /// Use a different hash function.
    pub fn hasher<G>(self, hasher: G) -> HashedBuilder<G, B, S, I> {
        HashedBuilder {
            hasher,
            index: PhantomData,
        }
    }

    /// Store slots as `J` instead.
    ///
    /// The build fails with [`Error::SlotOverflow`] if `J` cannot hold
    /// `B * S`.
    pub fn slot_type<J: SlotIndex>(self) -> HashedBuilder<H, B, S, J> {
        HashedBuilder {
            hasher: self.hasher,
            index: PhantomData,
        }
    }

    /// Build the table over `parent`.
    pub fn build<V>(self, parent: V) -> Result<Hashed<V, H, B, S, I>, Error>
    where
        V: View,
        H: KeyHash<V::Item>,
        I: SlotIndex,
    {
        Hashed::build(parent, self.hasher)
    }
}

impl<V, H, const B: usize, const S: usize, I> Adaptor<V> for HashedBuilder<H, B, S, I>
where
    V: View,
    H: KeyHash<V::Item>,
    I: SlotIndex,
{
    type Output = Result<Hashed<V, H, B, S, I>, Error>;

    fn apply(self, view: V) -> Self::Output {
        self.build(view)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::init_test_logging;

    /// Hash a borrowed `u32` to itself.
    fn ident(x: &&u32) -> usize {
        **x as usize
    }

    #[test]
    fn places_first_fit() {
        init_test_logging();
        let xs = [1_u32, 5, 9, 2, 6];
        let t = hashed::<4, 3>().hasher(ident).build(raw(&xs)).unwrap();
        assert_eq!(t.occupancy(), [0, 3, 2, 0]);
        let b1: Vec<u32> = t.bucket(1).iter().copied().collect();
        assert_eq!(b1, vec![1, 5, 9]);
        let b2: Vec<u32> = t.bucket(6).iter().copied().collect();
        assert_eq!(b2, vec![2, 6]);
        assert!(t.bucket(0).is_empty());
    }

    #[test]
    fn bucket_full() {
        init_test_logging();
        let xs = [0_u32, 4, 8];
        let err = Hashed::<_, _, 4, 2>::new(raw(&xs), ident).unwrap_err();
        assert_eq!(
            err,
            Error::BucketFull {
                bucket: 0,
                capacity: 2
            }
        );
    }

    #[test]
    fn too_many_items() {
        let xs = [0_u32; 5];
        let err = hashed::<2, 2>().hasher(ident).build(raw(&xs)).unwrap_err();
        assert!(matches!(err, Error::BucketFull { .. }));
    }

    #[test]
    fn slot_overflow() {
        let xs = [0_u32];
        let err = hashed::<16, 16>()
            .hasher(ident)
            .slot_type::<u8>()
            .build(raw(&xs))
            .unwrap_err();
        assert_eq!(err, Error::SlotOverflow { slots: 256, max: 255 });
        assert!(hashed::<15, 17>()
            .hasher(ident)
            .slot_type::<u8>()
            .build(raw(&xs))
            .is_ok());
    }

    #[test]
    fn lookup_first_match() {
        let pairs = [(1_u32, 'a'), (5, 'b'), (1, 'c')];
        let t = hashed::<4, 3>()
            .hasher(|p: &&(u32, char)| p.0 as usize)
            .build(raw(&pairs))
            .unwrap();
        assert_eq!(t.lookup(1, |p| p.0 == 1), Some(&(1, 'a')));
        assert_eq!(t.lookup(5, |p| p.0 == 5), Some(&(5, 'b')));
        assert_eq!(t.lookup(1, |p| p.0 == 9), None);
    }

    #[test]
    fn view_of_buckets() {
        let xs = [3_u32, 7, 4];
        let t = hashed::<4, 2>().hasher(ident).build(raw(&xs)).unwrap();
        assert_eq!((&t).size(), 4);
        assert_eq!((&t).extent(), Extent::Static(4));
        assert_eq!(t.hash_of(&&7), 7);
        let sizes: Vec<usize> = (&t).into_iter().map(|b| b.size()).collect();
        assert_eq!(sizes, vec![1, 0, 0, 2]);
        assert_eq!(t.bucket_count(), 4);
        assert_eq!(t.bucket_size(), 2);
        assert_eq!(t.parent().size(), 3);
    }
}
