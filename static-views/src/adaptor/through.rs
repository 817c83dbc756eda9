//! Indirect access through a view of indices

use crate::err::Error;
use crate::view::{Extent, IndexMapping, View, ViewAdaptor, ViewMut};

/// The parent's items in the order given by a proxy view of indices
///
/// Item `i` is parent item `proxy[i]`. The proxy may skip, repeat or reorder
/// parent items. Proxy indices are checked against the parent on every
/// access: the unchecked accessors panic on a bad proxy index, and
/// [`View::at`] reports it as [`Error::OutOfBound`].
///
/// Created by [`View::through`]. Buckets of a
/// [`Hashed`](crate::Hashed) table are through views.
#[derive(Clone, Copy, Debug)]
pub struct ThroughView<V, P> {
    /// Wrapped view
    parent: V,
    /// Parent index for each item
    proxy: P,
}

impl<V, P> ThroughView<V, P> {
    /// Wrap `parent`, indexing it through `proxy`.
    pub(crate) fn new(parent: V, proxy: P) -> Self {
        Self { parent, proxy }
    }

    /// Borrow the view of indices.
    pub fn proxy(&self) -> &P {
        &self.proxy
    }
}

impl<V: View, P: View<Item = usize>> ThroughView<V, P> {
    /// Look up and check the parent index for item `i`.
    ///
    /// `i` must be less than `proxy.size()`.
    #[inline(always)]
    unsafe fn parent_index(&self, i: usize) -> usize {
        // SAFETY: Caller guarantees `i < proxy.size()`.
        let j = unsafe { self.proxy.get_unchecked(i) };
        let size = self.parent.size();
        assert!(j < size, "proxy index {j} out of bounds for a view of size {size}");
        j
    }
}

impl<V: View, P: View<Item = usize>> View for ThroughView<V, P> {
    type Item = V::Item;
    const EXTENT: Extent = P::EXTENT;

    #[inline(always)]
    fn size(&self) -> usize {
        self.proxy.size()
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> V::Item {
        // SAFETY: `parent_index` checks its result against the parent size.
        unsafe { self.parent.get_unchecked(self.parent_index(i)) }
    }

    fn at(&self, i: usize) -> Result<V::Item, Error> {
        let j = self.proxy.at(i)?;
        self.parent.at(j)
    }
}

impl<V: ViewMut, P: View<Item = usize>> ViewMut for ThroughView<V, P> {
    type Element = V::Element;

    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut V::Element {
        // SAFETY: `parent_index` checks its result against the parent size.
        unsafe {
            let j = self.parent_index(i);
            self.parent.get_unchecked_mut(j)
        }
    }

    fn at_mut(&mut self, i: usize) -> Result<&mut V::Element, Error> {
        let j = self.proxy.at(i)?;
        self.parent.at_mut(j)
    }
}

impl<V: View, P: View<Item = usize>> ViewAdaptor for ThroughView<V, P> {
    type Parent = V;

    fn parent(&self) -> &V {
        &self.parent
    }

    fn into_parent(self) -> V {
        self.parent
    }
}

impl<V: View, P: View<Item = usize>> IndexMapping for ThroughView<V, P> {
    fn map(&self, i: usize) -> usize {
        assert!(i < self.size());
        // SAFETY: Checked against the proxy size above.
        unsafe { self.parent_index(i) }
    }
}

#[cfg(test)]
mod test {
    use crate::{raw, Error, IndexMapping, View};

    #[test]
    fn permutes() {
        let xs = ['a', 'b', 'c', 'd'];
        let order = [3_usize, 0, 0, 2];
        let v = raw(&xs).through(raw(order));
        assert_eq!(v.size(), 4);
        assert_eq!(v.iter().collect::<String>(), "daac");
        assert_eq!(v.map(0), 3);
    }

    #[test]
    fn bad_proxy_index_is_reported() {
        let xs = [1, 2];
        let v = raw(&xs).through(raw([0_usize, 5]));
        assert_eq!(v.at(0), Ok(&1));
        assert_eq!(v.at(1), Err(Error::OutOfBound { index: 5, size: 2 }));
        assert_eq!(v.at(2), Err(Error::OutOfBound { index: 2, size: 2 }));
    }

    #[test]
    #[should_panic]
    fn bad_proxy_index_panics_unchecked() {
        let xs = [1, 2];
        let v = raw(&xs).through(raw([7_usize]));
        let _ = v.iter().count();
    }
}
