//! Views that wrap a [`Sequence`] directly

use crate::sequence::{Sequence, SequenceMut};
use crate::view::{Extent, View, ViewMut};

/// The root of every view chain: a [`Sequence`] exposed as a [`View`]
///
/// Borrowing or owning follows the wrapped sequence. `raw(&xs)` borrows the
/// array and yields references, `raw(xs)` moves the array in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RawView<S> {
    /// Backing storage
    seq: S,
}

/// Wrap a sequence into a [`RawView`].
#[inline(always)]
pub fn raw<S: Sequence>(seq: S) -> RawView<S> {
    RawView { seq }
}

impl<S> RawView<S> {
    /// Borrow the wrapped sequence.
    pub fn sequence(&self) -> &S {
        &self.seq
    }

    /// Unwrap, returning the sequence.
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Sequence> View for RawView<S> {
    type Item = S::Item;
    const EXTENT: Extent = S::EXTENT;

    #[inline(always)]
    fn size(&self) -> usize {
        self.seq.len()
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> S::Item {
        // SAFETY: `size()` is the sequence length.
        unsafe { self.seq.get_unchecked(i) }
    }
}

impl<S: SequenceMut> ViewMut for RawView<S> {
    type Element = S::Element;

    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut S::Element {
        // SAFETY: `size()` is the sequence length.
        unsafe { self.seq.get_unchecked_mut(i) }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn borrowed_yields_references() {
        let names = ["a", "b"];
        let v = raw(&names);
        assert_eq!(v.at(1), Ok(&"b"));
        assert_eq!(v.extent(), Extent::Static(2));
    }

    #[test]
    fn owned_yields_clones() {
        let v = raw([String::from("x"), String::from("y")]);
        assert_eq!(v.at(0).as_deref(), Ok("x"));
        assert_eq!(v.into_inner().len(), 2);
    }
}
