//! Concatenate a view of views

use crate::err::Error;
use crate::view::{Extent, View, ViewAdaptor};

/// All items of the parent's inner views, in order
///
/// Every inner view must have the same size `m`. This is checked for the
/// whole parent when the adaptor is built, and again for each inner view on
/// access, since inner views may be computed afresh every time. Item `i` is
/// item `i % m` of inner view `i / m`. An inner view that has become too
/// short makes [`View::at`] fail with [`Error::OutOfBound`] and the
/// unchecked accessors panic. Created by [`View::flatten`].
#[derive(Clone, Copy, Debug)]
pub struct FlattenView<V> {
    /// Wrapped view of views
    parent: V,
    /// Size shared by every inner view
    inner: usize,
}

impl<V> FlattenView<V>
where
    V: View,
    V::Item: View,
{
    /// Flatten `parent`, checking that its inner views are uniform.
    pub(crate) fn new(parent: V) -> Result<Self, Error> {
        let mut inner = None;
        for (index, item) in parent.iter().enumerate() {
            let size = item.size();
            match inner {
                None => inner = Some(size),
                Some(expected) if expected != size => {
                    return Err(Error::NonUniform {
                        index,
                        size,
                        expected,
                    })
                }
                Some(_) => {}
            }
        }
        let inner = inner.unwrap_or(0);
        Ok(Self { parent, inner })
    }

    /// Size of each inner view.
    pub fn inner_size(&self) -> usize {
        self.inner
    }
}

impl<V> View for FlattenView<V>
where
    V: View,
    V::Item: View,
{
    type Item = <V::Item as View>::Item;
    const EXTENT: Extent = V::EXTENT.product(<V::Item as View>::EXTENT);

    #[inline(always)]
    fn size(&self) -> usize {
        self.parent.size().saturating_mul(self.inner)
    }

    #[inline]
    unsafe fn get_unchecked(&self, i: usize) -> Self::Item {
        // SAFETY: `i < size() <= parent.size() * inner`.
        let outer = unsafe { self.parent.get_unchecked(i / self.inner) };
        let j = i % self.inner;
        let size = outer.size();
        assert!(j < size, "inner index {j} out of bounds for a view of size {size}");
        // SAFETY: Checked against the inner view's size above.
        unsafe { outer.get_unchecked(j) }
    }

    fn at(&self, i: usize) -> Result<Self::Item, Error> {
        let size = self.size();
        if i >= size {
            return Err(Error::OutOfBound { index: i, size });
        }
        self.parent.at(i / self.inner)?.at(i % self.inner)
    }
}

impl<V> ViewAdaptor for FlattenView<V>
where
    V: View,
    V::Item: View,
{
    type Parent = V;

    fn parent(&self) -> &V {
        &self.parent
    }

    fn into_parent(self) -> V {
        self.parent
    }
}
