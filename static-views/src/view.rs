//! The [`View`] abstraction and the traits layered on top of it
//!
//! A view is a sized, indexable source of items that never copies the data
//! underneath it. Adaptors wrap a parent view by value and describe their
//! elements through an index mapping, so a chain like
//! `raw(&xs).drop(3).take(2)` is just a few scalars stacked on a reference.

use crate::adaptor::{
    ChunkView, DropView, FlattenView, SliceView, TakeView, ThroughView, TransformView,
};
use crate::err::Error;
use std::iter::FusedIterator;

/// Static upper bound on the size of a view
///
/// Known before any view of the type exists. [`Extent::Dynamic`] means no
/// such bound is available, and only [`View::size`] is meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_enums)]
pub enum Extent {
    /// Size never exceeds this value
    Static(usize),
    /// No bound is known before construction
    Dynamic,
}

impl Extent {
    /// The bound, if it is static.
    #[inline(always)]
    pub const fn bound(self) -> Option<usize> {
        match self {
            Extent::Static(n) => Some(n),
            Extent::Dynamic => None,
        }
    }

    /// Returns `true` for [`Extent::Dynamic`].
    #[inline(always)]
    pub const fn is_dynamic(self) -> bool {
        matches!(self, Extent::Dynamic)
    }

    /// Bound on the size of a view of views, given the inner bound.
    ///
    /// Dynamic if either side is dynamic or if the product overflows.
    pub const fn product(self, inner: Extent) -> Extent {
        match (self, inner) {
            (Extent::Static(a), Extent::Static(b)) => match a.checked_mul(b) {
                Some(n) => Extent::Static(n),
                None => Extent::Dynamic,
            },
            _ => Extent::Dynamic,
        }
    }
}

/// Indexed, non-copying access to a sequence of items
///
/// Implementors supply [`size`](View::size) and
/// [`get_unchecked`](View::get_unchecked); everything else is provided.
/// For every `i < size()`, `at(i)` and `get_unchecked(i)` produce the same
/// item. A view's size may change between calls when it depends on user
/// code, so adaptors compare against their parent's current size on every
/// access rather than a size cached at construction.
///
/// The combinator methods consume `self`. To keep using a view after
/// adapting it, adapt a reference to it instead: `&V` is a view too.
pub trait View {
    /// Type produced by element access
    type Item;

    /// Upper bound on [`size`](View::size), if known before construction.
    const EXTENT: Extent = Extent::Dynamic;

    /// Number of items in the view.
    fn size(&self) -> usize;

    /// Access one item without a bounds check.
    ///
    /// # Safety
    ///
    /// `i` must be less than the current [`size`](View::size).
    unsafe fn get_unchecked(&self, i: usize) -> Self::Item;

    /// Returns `true` if the view has no items.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The static extent of this view's type.
    #[inline(always)]
    fn extent(&self) -> Extent {
        Self::EXTENT
    }

    /// Bounds-checked access.
    ///
    /// Fails with [`Error::OutOfBound`] if `i` is not in `[0, size())`.
    #[inline]
    fn at(&self, i: usize) -> Result<Self::Item, Error> {
        let size = self.size();
        if i < size {
            // SAFETY: Checked against the size above.
            Ok(unsafe { self.get_unchecked(i) })
        } else {
            Err(Error::OutOfBound { index: i, size })
        }
    }

    /// Bounds-checked access, reporting failure as `None`.
    #[inline]
    fn get(&self, i: usize) -> Option<Self::Item> {
        self.at(i).ok()
    }

    /// Iterate over the items in order.
    #[inline]
    fn iter(&self) -> Iter<&Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }

    /// Skip the first `n` items, or all of them if there are fewer.
    fn drop(self, n: usize) -> DropView<Self>
    where
        Self: Sized,
    {
        DropView::new(self, n)
    }

    /// Skip exactly `n` items, failing if the view is shorter than that.
    fn drop_exactly(self, n: usize) -> Result<DropView<Self>, Error>
    where
        Self: Sized,
    {
        DropView::exactly(self, n)
    }

    /// Keep at most the first `n` items.
    fn take(self, n: usize) -> TakeView<Self>
    where
        Self: Sized,
    {
        TakeView::new(self, n)
    }

    /// Keep exactly the first `n` items, failing if the view is shorter.
    fn take_exactly(self, n: usize) -> Result<TakeView<Self>, Error>
    where
        Self: Sized,
    {
        TakeView::exactly(self, n)
    }

    /// Items `begin..end`, clamped to the size of the view.
    ///
    /// Empty if `begin >= end`.
    fn slice(self, begin: usize, end: usize) -> SliceView<Self>
    where
        Self: Sized,
    {
        SliceView::new(self, begin, end)
    }

    /// Apply `f` to every item on access.
    fn transform<F, U>(self, f: F) -> TransformView<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        TransformView::new(self, f)
    }

    /// Reorder, repeat or select items through a view of indices.
    ///
    /// Item `i` of the result is item `proxy[i]` of this view.
    fn through<P>(self, proxy: P) -> ThroughView<Self, P>
    where
        Self: Sized,
        P: View<Item = usize>,
    {
        ThroughView::new(self, proxy)
    }

    /// Split into consecutive windows of `k` items.
    ///
    /// `k` must be nonzero and divide the size of the view.
    fn chunk(self, k: usize) -> Result<ChunkView<Self>, Error>
    where
        Self: Sized + Clone,
    {
        ChunkView::new(self, k)
    }

    /// Concatenate a view of equally sized views.
    fn flatten(self) -> Result<FlattenView<Self>, Error>
    where
        Self: Sized,
        Self::Item: View,
    {
        FlattenView::new(self)
    }
}

/// A [`View`] whose elements can be written in place
pub trait ViewMut: View {
    /// Type of the stored elements
    type Element;

    /// Mutable access to one element without a bounds check.
    ///
    /// # Safety
    ///
    /// `i` must be less than the current [`size`](View::size).
    unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut Self::Element;

    /// Bounds-checked mutable access.
    fn at_mut(&mut self, i: usize) -> Result<&mut Self::Element, Error> {
        let size = self.size();
        if i < size {
            // SAFETY: Checked against the size above.
            Ok(unsafe { self.get_unchecked_mut(i) })
        } else {
            Err(Error::OutOfBound { index: i, size })
        }
    }
}

/// A [`View`] built by wrapping exactly one parent view
pub trait ViewAdaptor: View {
    /// Type of the wrapped view
    type Parent: View;

    /// Borrow the wrapped view.
    fn parent(&self) -> &Self::Parent;

    /// Unwrap, returning the wrapped view.
    fn into_parent(self) -> Self::Parent
    where
        Self: Sized;
}

/// A [`ViewAdaptor`] whose items are items of the parent at mapped positions
///
/// For every `i < size()`, item `i` equals `parent()` item `map(i)`, and
/// `map(i) < parent().size()`.
pub trait IndexMapping: ViewAdaptor {
    /// Position in the parent of item `i`.
    ///
    /// Only meaningful for `i < size()`. May panic otherwise.
    fn map(&self, i: usize) -> usize;
}

impl<V: View> View for &V {
    type Item = V::Item;
    const EXTENT: Extent = V::EXTENT;

    #[inline(always)]
    fn size(&self) -> usize {
        (**self).size()
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> V::Item {
        // SAFETY: Same contract as the referenced view.
        unsafe { (**self).get_unchecked(i) }
    }

    #[inline]
    fn at(&self, i: usize) -> Result<V::Item, Error> {
        (**self).at(i)
    }
}

impl<V: View> View for &mut V {
    type Item = V::Item;
    const EXTENT: Extent = V::EXTENT;

    #[inline(always)]
    fn size(&self) -> usize {
        (**self).size()
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> V::Item {
        // SAFETY: Same contract as the referenced view.
        unsafe { (**self).get_unchecked(i) }
    }

    #[inline]
    fn at(&self, i: usize) -> Result<V::Item, Error> {
        (**self).at(i)
    }
}

impl<V: ViewMut> ViewMut for &mut V {
    type Element = V::Element;

    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut V::Element {
        // SAFETY: Same contract as the referenced view.
        unsafe { (**self).get_unchecked_mut(i) }
    }
}

/// Iterator over the items of a view
///
/// Usually holds a reference to the view, from [`View::iter`], but iterating
/// an owned view by value works as well. Every step checks the index against
/// the view's current size, and the iterator ends early if the view has
/// shrunk.
#[derive(Clone, Debug)]
pub struct Iter<V> {
    /// View being iterated
    view: V,
    /// Index of the next item from the front
    front: usize,
    /// One past the index of the next item from the back
    back: usize,
}

impl<V: View> Iter<V> {
    /// Start iterating over every item of `view`.
    pub(crate) fn new(view: V) -> Self {
        let back = view.size();
        Self {
            view,
            front: 0,
            back,
        }
    }
}

impl<V: View> Iterator for Iter<V> {
    type Item = V::Item;

    #[inline]
    fn next(&mut self) -> Option<V::Item> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            if i < self.view.size() {
                // SAFETY: Checked against the current size above.
                return Some(unsafe { self.view.get_unchecked(i) });
            }
            self.front = self.back;
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<V: View> DoubleEndedIterator for Iter<V> {
    #[inline]
    fn next_back(&mut self) -> Option<V::Item> {
        if self.front < self.back {
            self.back -= 1;
            if self.back < self.view.size() {
                // SAFETY: Checked against the current size above.
                return Some(unsafe { self.view.get_unchecked(self.back) });
            }
            self.back = self.front;
        }
        None
    }
}

impl<V: View> ExactSizeIterator for Iter<V> {}

impl<V: View> FusedIterator for Iter<V> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::raw;

    #[test]
    fn extent_product() {
        assert_eq!(
            Extent::Static(3).product(Extent::Static(4)),
            Extent::Static(12)
        );
        assert_eq!(Extent::Static(3).product(Extent::Dynamic), Extent::Dynamic);
        assert_eq!(
            Extent::Static(usize::MAX).product(Extent::Static(2)),
            Extent::Dynamic
        );
        assert_eq!(Extent::Static(5).bound(), Some(5));
        assert!(Extent::Dynamic.is_dynamic());
    }

    #[test]
    fn checked_and_unchecked_agree() {
        let xs = [10_u32, 20, 30];
        let v = raw(&xs);
        for i in 0..v.size() {
            // SAFETY: i < size
            assert_eq!(v.at(i), Ok(unsafe { v.get_unchecked(i) }));
        }
        assert_eq!(v.at(3), Err(Error::OutOfBound { index: 3, size: 3 }));
        assert_eq!(v.get(7), None);
    }

    #[test]
    fn iter_both_ends() {
        let xs = [1, 2, 3, 4];
        let v = raw(&xs);
        let mut it = v.iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.len(), 2);
        assert_eq!(it.collect::<Vec<_>>(), vec![&2, &3]);
    }

    #[test]
    fn reference_views_forward() {
        let xs = [1, 2, 3];
        let v = raw(&xs);
        let r = &v;
        assert_eq!(r.size(), 3);
        assert_eq!(r.at(2), Ok(&3));
        assert_eq!(r.extent(), Extent::Static(3));
    }

    #[test]
    fn write_through_mut() {
        let mut xs = [0_u8; 4];
        let mut v = raw(&mut xs);
        *v.at_mut(2).unwrap() = 9;
        assert!(v.at_mut(4).is_err());
        assert_eq!(xs, [0, 0, 9, 0]);
    }
}
