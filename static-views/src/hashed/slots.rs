//! Slot storage for the hashed bucket table
//!
//! The table keeps `B` buckets of `S` slots each in one fixed array. A slot
//! holds an index into the parent view, or the empty marker `B * S`, which
//! is one past every index a table of this shape can hold.
//!
//! The only write operation is [`SlotArray::insert`], which fills the first
//! empty slot of a bucket. Slots are never cleared, so the occupied slots of
//! each bucket always form a prefix of it, in insertion order. Lookups rely
//! on that: the occupied length of a bucket is the position of its first
//! empty slot.

// We need to allow this warning because we conditionally make some private
// functions public, but their documentation links to private types.
#![allow(rustdoc::private_intra_doc_links)]

use crate::algorithm::find_first_i;
use crate::raw::raw;
use num_traits::{Bounded, Unsigned};
use std::fmt::Debug;

/// Types that can be used as a slot index
///
/// The index type bounds the size of a table: it must be able to represent
/// `bucket_count * bucket_size`, the empty marker. Narrow types such as `u8`
/// or `u16` make small tables proportionally smaller.
pub trait SlotIndex:
    Copy + Eq + Debug + Unsigned + Bounded + TryFrom<usize> + TryInto<usize>
{
    /// Convert from a usize slot value, panic on overflow
    #[inline(always)]
    fn from_index(i: usize) -> Self {
        // Omit the original error type, to avoid propagating Debug bounds
        // for this trait.
        Self::try_from(i)
            .map_err(|_| ())
            .expect("slot index type is checked to hold the empty marker")
    }

    /// Convert this slot value back into a usize.
    #[inline(always)]
    fn into_index(self) -> usize {
        self.try_into()
            .map_err(|_| ())
            .expect("slot index type is never wider than the empty marker")
    }

    /// Check whether `n` is representable.
    #[inline(always)]
    fn fits(n: usize) -> bool {
        Self::try_from(n).is_ok()
    }

    /// Largest representable value, saturated to `usize`.
    fn max_index() -> usize {
        Self::max_value().try_into().unwrap_or(usize::MAX)
    }
}

impl<T: Copy + Eq + Debug + Unsigned + Bounded + TryFrom<usize> + TryInto<usize>> SlotIndex for T {}

/// Fixed slot storage: `B` buckets of `S` slots, each holding an `I`
#[cfg_attr(feature = "slot-array", visibility::make(pub))]
#[derive(Clone, Debug)]
pub(crate) struct SlotArray<
    // Slot index type
    I,
    // Number of buckets
    const B: usize,
    // Number of slots in each bucket
    const S: usize,
> {
    /// Slot contents, row per bucket
    slots: [[I; S]; B],
}

impl<I: SlotIndex, const B: usize, const S: usize> SlotArray<I, B, S> {
    /// Value of an empty slot, `B * S`.
    #[cfg_attr(feature = "slot-array", visibility::make(pub))]
    #[inline(always)]
    pub(crate) fn empty_marker() -> usize {
        B * S
    }

    /// A new array with every slot empty.
    ///
    /// Panics if `I` cannot represent the empty marker. Check with
    /// [`SlotIndex::fits`] first.
    #[cfg_attr(feature = "slot-array", visibility::make(pub))]
    pub(crate) fn new() -> Self {
        let empty = I::from_index(Self::empty_marker());
        Self {
            slots: [[empty; S]; B],
        }
    }

    /// Number of occupied slots in a bucket.
    ///
    /// Panics if the bucket index is out of range.
    #[cfg_attr(feature = "slot-array", visibility::make(pub))]
    #[inline(always)]
    pub(crate) fn occupied(&self, bucket: usize) -> usize {
        let empty = I::from_index(Self::empty_marker());
        find_first_i(&raw(&self.slots[bucket]), |slot| **slot == empty)
    }

    /// Borrow the slots of one bucket, occupied and empty.
    ///
    /// Panics if the bucket index is out of range.
    #[cfg_attr(feature = "slot-array", visibility::make(pub))]
    #[inline(always)]
    pub(crate) fn row(&self, bucket: usize) -> &[I; S] {
        &self.slots[bucket]
    }

    /// Store a parent index in the first empty slot of a bucket.
    ///
    /// Returns the slot position, or `Err(())` without changes if the
    /// bucket is full. Panics if `index` would be stored but is not below
    /// the empty marker.
    #[cfg_attr(
        feature = "slot-array",
        visibility::make(pub),
        allow(clippy::result_unit_err)
    )]
    pub(crate) fn insert(&mut self, bucket: usize, index: usize) -> Result<usize, ()> {
        let slot = self.occupied(bucket);
        if slot < S {
            assert!(index < Self::empty_marker());
            self.slots[bucket][slot] = I::from_index(index);
            Ok(slot)
        } else {
            Err(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn first_fit() {
        let mut s = SlotArray::<u8, 3, 2>::new();
        assert_eq!(SlotArray::<u8, 3, 2>::empty_marker(), 6);
        assert_eq!(s.occupied(1), 0);
        assert_eq!(s.insert(1, 4), Ok(0));
        assert_eq!(s.insert(1, 2), Ok(1));
        assert_eq!(s.insert(1, 0), Err(()));
        assert_eq!(s.occupied(1), 2);
        assert_eq!(s.row(1), &[4, 2]);
        assert_eq!(s.row(0), &[6, 6]);
    }

    #[test]
    fn index_type_limits() {
        assert!(u8::fits(255));
        assert!(!u8::fits(256));
        assert_eq!(u16::max_index(), 65535);
        assert_eq!(usize::max_index(), usize::MAX);
        assert_eq!(7_u16.into_index(), 7);
    }

    #[test]
    #[should_panic]
    fn marker_is_not_an_index() {
        let mut s = SlotArray::<usize, 2, 2>::new();
        let _ = s.insert(0, 4);
    }
}
