//! Split a view into equal windows

use crate::adaptor::{DropView, TakeView};
use crate::err::Error;
use crate::view::{Extent, View, ViewAdaptor};

/// Non-overlapping windows of `k` consecutive parent items
///
/// Each window is a take of a drop of the parent, and holds its own copy of
/// the parent view. Chunking a reference (`(&view).chunk(k)`) keeps those
/// copies down to a pointer. Created by [`View::chunk`].
#[derive(Clone, Copy, Debug)]
pub struct ChunkView<V> {
    /// Wrapped view
    parent: V,
    /// Items per window, nonzero and dividing the parent size
    chunk: usize,
}

impl<V: View> ChunkView<V> {
    /// Split `parent` into windows of `chunk` items.
    pub(crate) fn new(parent: V, chunk: usize) -> Result<Self, Error> {
        let size = parent.size();
        if chunk == 0 || size % chunk != 0 {
            return Err(Error::ChunkSize { chunk, size });
        }
        Ok(Self { parent, chunk })
    }

    /// Items per window.
    pub fn chunk_size(&self) -> usize {
        self.chunk
    }
}

impl<V: View + Clone> View for ChunkView<V> {
    type Item = TakeView<DropView<V>>;
    const EXTENT: Extent = V::EXTENT;

    #[inline(always)]
    fn size(&self) -> usize {
        self.parent.size() / self.chunk
    }

    #[inline]
    unsafe fn get_unchecked(&self, i: usize) -> Self::Item {
        TakeView::new(
            DropView::new(self.parent.clone(), i * self.chunk),
            self.chunk,
        )
    }
}

impl<V: View + Clone> ViewAdaptor for ChunkView<V> {
    type Parent = V;

    fn parent(&self) -> &V {
        &self.parent
    }

    fn into_parent(self) -> V {
        self.parent
    }
}
