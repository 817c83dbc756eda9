//! Left-to-right chaining with `|`
//!
//! Every view type implements [`BitOr`] for any [`Adaptor`], so a chain can
//! be written as a pipeline:
//!
//! ```
//! use static_views::{raw, View};
//! use static_views::pipe::{drop, take};
//!
//! let xs = [1, 2, 3, 4, 5, 6];
//! let v = raw(&xs) | drop(3) | take(2);
//! assert_eq!(v.iter().copied().collect::<Vec<_>>(), [4, 5]);
//! ```
//!
//! Stages that can fail produce a `Result`, which ends the pipeline until
//! it is unwrapped: `(raw(&xs) | chunk(2))? | flatten()`.
//!
//! The functions here shadow [`std::mem::drop`] and friends when glob
//! imported, which is why they live in their own module.

use crate::adaptor::{
    ChunkView, DropView, FlattenView, SliceView, TakeView, ThroughView, TransformView,
};
use crate::err::Error;
use crate::raw::RawView;
use crate::sequence::Sequence;
use crate::view::{Iter, View};
use std::ops::BitOr;

pub use crate::hashed::hashed;

/// A pending adaptor, applied to a view by `view | adaptor`
pub trait Adaptor<V> {
    /// Result of applying the adaptor
    type Output;

    /// Wrap `view`.
    fn apply(self, view: V) -> Self::Output;
}

/// Pending [`View::drop`]
#[derive(Clone, Copy, Debug)]
pub struct DropBy(usize);

/// Skip the first `n` items, saturating.
pub fn drop(n: usize) -> DropBy {
    DropBy(n)
}

impl<V: View> Adaptor<V> for DropBy {
    type Output = DropView<V>;

    fn apply(self, view: V) -> DropView<V> {
        DropView::new(view, self.0)
    }
}

/// Pending [`View::drop_exactly`]
#[derive(Clone, Copy, Debug)]
pub struct DropExactly(usize);

/// Skip exactly `n` items.
pub fn drop_exactly(n: usize) -> DropExactly {
    DropExactly(n)
}

impl<V: View> Adaptor<V> for DropExactly {
    type Output = Result<DropView<V>, Error>;

    fn apply(self, view: V) -> Self::Output {
        DropView::exactly(view, self.0)
    }
}

/// Pending [`View::take`]
#[derive(Clone, Copy, Debug)]
pub struct TakeBy(usize);

/// Keep at most the first `n` items.
pub fn take(n: usize) -> TakeBy {
    TakeBy(n)
}

impl<V: View> Adaptor<V> for TakeBy {
    type Output = TakeView<V>;

    fn apply(self, view: V) -> TakeView<V> {
        TakeView::new(view, self.0)
    }
}

/// Pending [`View::take_exactly`]
#[derive(Clone, Copy, Debug)]
pub struct TakeExactly(usize);

/// Keep exactly the first `n` items.
pub fn take_exactly(n: usize) -> TakeExactly {
    TakeExactly(n)
}

impl<V: View> Adaptor<V> for TakeExactly {
    type Output = Result<TakeView<V>, Error>;

    fn apply(self, view: V) -> Self::Output {
        TakeView::exactly(view, self.0)
    }
}

/// Pending [`View::slice`]
#[derive(Clone, Copy, Debug)]
pub struct Slicing {
    /// First index
    begin: usize,
    /// One past the last index
    end: usize,
}

/// Items `begin..end`.
pub fn slice(begin: usize, end: usize) -> Slicing {
    Slicing { begin, end }
}

impl<V: View> Adaptor<V> for Slicing {
    type Output = SliceView<V>;

    fn apply(self, view: V) -> Self::Output {
        SliceView::new(view, self.begin, self.end)
    }
}

/// Pending [`View::transform`]
#[derive(Clone, Copy, Debug)]
pub struct Transforming<F>(F);

/// Apply `f` to every item.
pub fn transform<F>(f: F) -> Transforming<F> {
    Transforming(f)
}

impl<V, F, U> Adaptor<V> for Transforming<F>
where
    V: View,
    F: Fn(V::Item) -> U,
{
    type Output = TransformView<V, F>;

    fn apply(self, view: V) -> TransformView<V, F> {
        TransformView::new(view, self.0)
    }
}

/// Pending [`View::through`]
#[derive(Clone, Copy, Debug)]
pub struct Through<P>(P);

/// Index through a view of positions.
pub fn through<P: View<Item = usize>>(proxy: P) -> Through<P> {
    Through(proxy)
}

impl<V: View, P: View<Item = usize>> Adaptor<V> for Through<P> {
    type Output = ThroughView<V, P>;

    fn apply(self, view: V) -> ThroughView<V, P> {
        ThroughView::new(view, self.0)
    }
}

/// Pending [`View::chunk`]
#[derive(Clone, Copy, Debug)]
pub struct Chunking(usize);

/// Split into windows of `k` items.
pub fn chunk(k: usize) -> Chunking {
    Chunking(k)
}

impl<V: View + Clone> Adaptor<V> for Chunking {
    type Output = Result<ChunkView<V>, Error>;

    fn apply(self, view: V) -> Self::Output {
        ChunkView::new(view, self.0)
    }
}

/// Pending [`View::flatten`]
#[derive(Clone, Copy, Debug)]
#[allow(clippy::exhaustive_structs)]
pub struct Flattening;

/// Concatenate a view of equally sized views.
pub fn flatten() -> Flattening {
    Flattening
}

impl<V> Adaptor<V> for Flattening
where
    V: View,
    V::Item: View,
{
    type Output = Result<FlattenView<V>, Error>;

    fn apply(self, view: V) -> Self::Output {
        FlattenView::new(view)
    }
}

/// Implement `|` and by-value and by-reference iteration for a view type.
macro_rules! pipe_ops {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*, A: Adaptor<Self>> BitOr<A> for $ty
        where
            $ty: View,
        {
            type Output = A::Output;

            #[inline(always)]
            fn bitor(self, adaptor: A) -> A::Output {
                adaptor.apply(self)
            }
        }

        impl<'v, $($gen)*, A: Adaptor<Self>> BitOr<A> for &'v $ty
        where
            $ty: View,
        {
            type Output = A::Output;

            #[inline(always)]
            fn bitor(self, adaptor: A) -> A::Output {
                adaptor.apply(self)
            }
        }

        impl<$($gen)*> IntoIterator for $ty
        where
            $ty: View,
        {
            type Item = <$ty as View>::Item;
            type IntoIter = Iter<$ty>;

            fn into_iter(self) -> Self::IntoIter {
                Iter::new(self)
            }
        }

        impl<'v, $($gen)*> IntoIterator for &'v $ty
        where
            $ty: View,
        {
            type Item = <$ty as View>::Item;
            type IntoIter = Iter<&'v $ty>;

            fn into_iter(self) -> Self::IntoIter {
                Iter::new(self)
            }
        }
    };
}

pipe_ops!([S: Sequence] RawView<S>);
pipe_ops!([V] DropView<V>);
pipe_ops!([V] TakeView<V>);
pipe_ops!([V] SliceView<V>);
pipe_ops!([V, F] TransformView<V, F>);
pipe_ops!([V, P] ThroughView<V, P>);
pipe_ops!([V] ChunkView<V>);
pipe_ops!([V] FlattenView<V>);

#[cfg(test)]
mod test {
    use super::*;
    use crate::raw;

    #[test]
    fn drop_then_take_is_repeatable() {
        let xs = [1, 2, 3, 4, 5, 6];
        let v = raw(&xs);
        let first: Vec<i32> = (&v | drop(3) | take(2)).into_iter().copied().collect();
        for _ in 0..3 {
            let again: Vec<i32> = (&v | drop(3) | take(2)).into_iter().copied().collect();
            assert_eq!(again, first);
        }
        assert_eq!(first, vec![4, 5]);
    }

    #[test]
    fn fallible_stages() {
        let xs = [1, 2, 3, 4];
        let v = raw(&xs);
        let flat = ((&v | chunk(2)).unwrap() | flatten()).unwrap();
        assert_eq!(flat.size(), 4);
        assert!((&v | drop_exactly(5)).is_err());
        assert!((&v | take_exactly(4)).is_ok());
        assert_eq!((&v | slice(1, 3)).at(0), Ok(&2));
        assert!((&v | slice(3, 1)).is_empty());
    }

    #[test]
    fn transform_and_through() {
        let xs = [10, 20, 30];
        let v = raw(&xs) | through(raw([2_usize, 0])) | transform(|x: &i32| x / 10);
        let got: Vec<i32> = v.into_iter().collect();
        assert_eq!(got, vec![3, 1]);
    }

    #[test]
    fn hashed_stage() {
        let xs = [1_u32, 2, 3];
        let t = (raw(&xs) | hashed::<4, 1>()).unwrap();
        assert_eq!(t.occupancy(), [0, 1, 1, 1]);
    }
}
