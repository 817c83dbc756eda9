//! Elementwise function application

use crate::view::{Extent, View, ViewAdaptor};
use std::fmt;

/// The parent's items with a function applied on every access
///
/// Items are computed values, so unlike the index-mapping adaptors this one
/// does not forward mutable access. Created by [`View::transform`].
#[derive(Clone, Copy)]
pub struct TransformView<V, F> {
    /// Wrapped view
    parent: V,
    /// Function applied to each item
    f: F,
}

impl<V, F> TransformView<V, F> {
    /// Wrap `parent`, applying `f` to its items.
    pub(crate) fn new(parent: V, f: F) -> Self {
        Self { parent, f }
    }

    /// Borrow the applied function.
    pub fn function(&self) -> &F {
        &self.f
    }
}

impl<V: fmt::Debug, F> fmt::Debug for TransformView<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformView")
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

impl<V, F, U> View for TransformView<V, F>
where
    V: View,
    F: Fn(V::Item) -> U,
{
    type Item = U;
    const EXTENT: Extent = V::EXTENT;

    #[inline(always)]
    fn size(&self) -> usize {
        self.parent.size()
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> U {
        // SAFETY: Same size as the parent.
        (self.f)(unsafe { self.parent.get_unchecked(i) })
    }
}

impl<V, F, U> ViewAdaptor for TransformView<V, F>
where
    V: View,
    F: Fn(V::Item) -> U,
{
    type Parent = V;

    fn parent(&self) -> &V {
        &self.parent
    }

    fn into_parent(self) -> V {
        self.parent
    }
}
