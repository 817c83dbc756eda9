//! Keep a prefix of the parent view

use crate::err::Error;
use crate::view::{Extent, IndexMapping, View, ViewAdaptor, ViewMut};

/// The first `n` items of the parent
///
/// Never larger than the parent's current size, even if that shrinks after
/// construction. Created by [`View::take`] or [`View::take_exactly`].
#[derive(Clone, Copy, Debug)]
pub struct TakeView<V> {
    /// Wrapped view
    parent: V,
    /// Number of kept items
    len: usize,
}

impl<V: View> TakeView<V> {
    /// Keep up to `n` items.
    pub(crate) fn new(parent: V, n: usize) -> Self {
        let len = n.min(parent.size());
        Self { parent, len }
    }

    /// Keep exactly `n` items.
    pub(crate) fn exactly(parent: V, n: usize) -> Result<Self, Error> {
        let size = parent.size();
        if n > size {
            return Err(Error::InvalidRange {
                begin: 0,
                end: n,
                size,
            });
        }
        Ok(Self { parent, len: n })
    }
}

impl<V: View> View for TakeView<V> {
    type Item = V::Item;
    const EXTENT: Extent = V::EXTENT;

    #[inline(always)]
    fn size(&self) -> usize {
        self.len.min(self.parent.size())
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> V::Item {
        // SAFETY: `i < size() <= parent.size()`.
        unsafe { self.parent.get_unchecked(i) }
    }
}

impl<V: ViewMut> ViewMut for TakeView<V> {
    type Element = V::Element;

    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut V::Element {
        // SAFETY: `i < size() <= parent.size()`.
        unsafe { self.parent.get_unchecked_mut(i) }
    }
}

impl<V: View> ViewAdaptor for TakeView<V> {
    type Parent = V;

    fn parent(&self) -> &V {
        &self.parent
    }

    fn into_parent(self) -> V {
        self.parent
    }
}

impl<V: View> IndexMapping for TakeView<V> {
    #[inline(always)]
    fn map(&self, i: usize) -> usize {
        i
    }
}

#[cfg(test)]
mod test {
    use crate::{raw, Error, View};

    #[test]
    fn clamps_to_parent() {
        let xs = [1, 2, 3];
        assert_eq!(raw(&xs).take(2).size(), 2);
        assert_eq!(raw(&xs).take(10).size(), 3);
        assert_eq!(raw(&xs).take(2).at(2), Err(Error::OutOfBound { index: 2, size: 2 }));
    }

    #[test]
    fn exactly() {
        let xs = [1, 2, 3];
        assert!(raw(&xs).take_exactly(3).is_ok());
        assert_eq!(
            raw(&xs).take_exactly(5).map(|v| v.size()),
            Err(Error::InvalidRange {
                begin: 0,
                end: 5,
                size: 3
            })
        );
    }
}
