//! Skip a prefix of the parent view

use crate::err::Error;
use crate::view::{Extent, IndexMapping, View, ViewAdaptor, ViewMut};

/// Everything after the first `n` items of the parent
///
/// Created by [`View::drop`] or [`View::drop_exactly`].
#[derive(Clone, Copy, Debug)]
pub struct DropView<V> {
    /// Wrapped view
    parent: V,
    /// Number of skipped items
    offset: usize,
}

impl<V: View> DropView<V> {
    /// Skip `n` items. The size saturates at zero.
    pub(crate) fn new(parent: V, n: usize) -> Self {
        Self { parent, offset: n }
    }

    /// Skip exactly `n` items.
    pub(crate) fn exactly(parent: V, n: usize) -> Result<Self, Error> {
        let size = parent.size();
        if n > size {
            return Err(Error::InvalidRange {
                begin: 0,
                end: n,
                size,
            });
        }
        Ok(Self { parent, offset: n })
    }

    /// Number of items skipped.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<V: View> View for DropView<V> {
    type Item = V::Item;
    const EXTENT: Extent = V::EXTENT;

    #[inline(always)]
    fn size(&self) -> usize {
        self.parent.size().saturating_sub(self.offset)
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> V::Item {
        // SAFETY: `i < size()` so `offset + i < parent.size()`.
        unsafe { self.parent.get_unchecked(self.offset + i) }
    }
}

impl<V: ViewMut> ViewMut for DropView<V> {
    type Element = V::Element;

    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut V::Element {
        // SAFETY: `i < size()` so `offset + i < parent.size()`.
        unsafe { self.parent.get_unchecked_mut(self.offset + i) }
    }
}

impl<V: View> ViewAdaptor for DropView<V> {
    type Parent = V;

    fn parent(&self) -> &V {
        &self.parent
    }

    fn into_parent(self) -> V {
        self.parent
    }
}

impl<V: View> IndexMapping for DropView<V> {
    #[inline(always)]
    fn map(&self, i: usize) -> usize {
        self.offset + i
    }
}

#[cfg(test)]
mod test {
    use crate::{raw, Error, IndexMapping, View, ViewAdaptor, ViewMut};

    #[test]
    fn saturates() {
        let xs = [1, 2, 3, 4, 5];
        let v = raw(&xs).drop(2);
        assert_eq!(v.size(), 3);
        assert_eq!(v.at(0), Ok(&3));
        assert_eq!(v.map(2), 4);
        assert_eq!(raw(&xs).drop(9).size(), 0);
        assert_eq!(v.parent().size(), 5);
    }

    #[test]
    fn exactly() {
        let xs = [1, 2, 3];
        assert_eq!(raw(&xs).drop_exactly(3).map(|v| v.size()), Ok(0));
        assert_eq!(
            raw(&xs).drop_exactly(4).map(|v| v.size()),
            Err(Error::InvalidRange {
                begin: 0,
                end: 4,
                size: 3
            })
        );
    }

    #[test]
    fn writes_reach_parent() {
        let mut xs = [0_u8; 4];
        {
            let mut v = raw(&mut xs).drop(1);
            *v.at_mut(0).unwrap() = 7;
            assert_eq!(v.into_parent().size(), 4);
        }
        assert_eq!(xs, [0, 7, 0, 0]);
    }
}
