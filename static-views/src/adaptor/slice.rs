//! A contiguous window of the parent view

use crate::view::{Extent, IndexMapping, View, ViewAdaptor, ViewMut};

/// Items `begin..end` of the parent
///
/// Equivalent to a take of `end` followed by a drop of `begin`, collapsed
/// into one adaptor so that [`parent`](ViewAdaptor::parent) is the view the
/// slice was cut from. A window with `begin >= end` is empty. The size is
/// clamped against the parent's current size on every call.
/// Created by [`View::slice`].
#[derive(Clone, Copy, Debug)]
pub struct SliceView<V> {
    /// Wrapped view
    parent: V,
    /// First parent index in the window
    begin: usize,
    /// One past the last parent index in the window, never below `begin`
    end: usize,
}

impl<V: View> SliceView<V> {
    /// Cut `begin..end` out of `parent`, clamping both ends to its size.
    pub(crate) fn new(parent: V, begin: usize, end: usize) -> Self {
        let size = parent.size();
        let begin = begin.min(size);
        let end = end.min(size).max(begin);
        Self { parent, begin, end }
    }

    /// Parent index of the first item.
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// One past the parent index of the last item.
    pub fn end(&self) -> usize {
        self.begin + self.size()
    }
}

impl<V: View> View for SliceView<V> {
    type Item = V::Item;
    const EXTENT: Extent = V::EXTENT;

    #[inline(always)]
    fn size(&self) -> usize {
        self.end.min(self.parent.size()).saturating_sub(self.begin)
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> V::Item {
        // SAFETY: `i < size()` so `begin + i < parent.size()`.
        unsafe { self.parent.get_unchecked(self.begin + i) }
    }
}

impl<V: ViewMut> ViewMut for SliceView<V> {
    type Element = V::Element;

    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut V::Element {
        // SAFETY: `i < size()` so `begin + i < parent.size()`.
        unsafe { self.parent.get_unchecked_mut(self.begin + i) }
    }
}

impl<V: View> ViewAdaptor for SliceView<V> {
    type Parent = V;

    fn parent(&self) -> &V {
        &self.parent
    }

    fn into_parent(self) -> V {
        self.parent
    }
}

impl<V: View> IndexMapping for SliceView<V> {
    #[inline(always)]
    fn map(&self, i: usize) -> usize {
        self.begin + i
    }
}

#[cfg(test)]
mod test {
    use crate::{raw, IndexMapping, View};

    #[test]
    fn matches_take_then_drop() {
        let xs = [0, 1, 2, 3, 4, 5, 6, 7];
        for begin in 0..10 {
            for end in 0..12 {
                let s = raw(&xs).slice(begin, end);
                let td = raw(&xs).take(end).drop(begin);
                assert_eq!(s.size(), td.size(), "slice({begin}, {end})");
                for i in 0..s.size() {
                    assert_eq!(s.at(i), td.at(i));
                    assert_eq!(s.map(i), begin + i);
                }
            }
        }
    }

    #[test]
    fn reversed_range_is_empty() {
        let xs = [0, 1, 2, 3];
        let s = raw(&xs).slice(3, 1);
        assert_eq!(s.size(), 0);
        assert!(s.is_empty());
        assert_eq!(s.begin(), 3);
        assert_eq!(s.end(), 3);
        assert_eq!(s.iter().count(), 0);
    }
}
