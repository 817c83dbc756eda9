//! Backing storage adapters
//!
//! A [`Sequence`] is the lowest layer: something with a length and indexed
//! access, optionally with a size bound known at compile time. Views never
//! reach into storage directly, they go through this trait.
//!
//! Whether a view borrows or owns its data is decided here, by the type the
//! sequence is implemented for. Shared references (`&[T; N]`, `&[T]`,
//! `&ArrayVec`, `&(T, T, ..)`) yield `&T` items that live as long as the
//! borrow. Owned arrays, owned [`ArrayVec`]s and mutable references yield
//! clones, and additionally implement [`SequenceMut`].

use crate::view::Extent;
use arrayvec::ArrayVec;

/// Indexed storage that a [`RawView`](crate::RawView) can wrap
pub trait Sequence {
    /// Type produced by element access
    type Item;

    /// Upper bound on [`len`](Sequence::len), if known before construction.
    const EXTENT: Extent = Extent::Dynamic;

    /// Number of elements currently stored.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Access one element without a bounds check.
    ///
    /// # Safety
    ///
    /// `i` must be less than [`len`](Sequence::len).
    unsafe fn get_unchecked(&self, i: usize) -> Self::Item;

    /// Bounds-checked element access.
    fn get(&self, i: usize) -> Option<Self::Item> {
        if i < self.len() {
            // SAFETY: Checked against the length above.
            Some(unsafe { self.get_unchecked(i) })
        } else {
            None
        }
    }
}

/// A [`Sequence`] that allows writing to its elements in place
pub trait SequenceMut: Sequence {
    /// Type of the stored elements
    type Element;

    /// Mutable access to one element without a bounds check.
    ///
    /// # Safety
    ///
    /// `i` must be less than [`len`](Sequence::len).
    unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut Self::Element;
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Item = &'a T;
    const EXTENT: Extent = Extent::Static(N);

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> &'a T {
        let this: &'a [T; N] = *self;
        // SAFETY: Caller guarantees `i < N`.
        unsafe { <[T]>::get_unchecked(this, i) }
    }
}

impl<'a, T> Sequence for &'a [T] {
    type Item = &'a T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> &'a T {
        let this: &'a [T] = *self;
        // SAFETY: Caller guarantees `i < self.len()`.
        unsafe { <[T]>::get_unchecked(this, i) }
    }
}

impl<'a, T, const CAP: usize> Sequence for &'a ArrayVec<T, CAP> {
    type Item = &'a T;
    const EXTENT: Extent = Extent::Static(CAP);

    #[inline(always)]
    fn len(&self) -> usize {
        ArrayVec::len(self)
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> &'a T {
        let this: &'a ArrayVec<T, CAP> = *self;
        // SAFETY: Caller guarantees `i < self.len()`.
        unsafe { <[T]>::get_unchecked(this.as_slice(), i) }
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;
    const EXTENT: Extent = Extent::Static(N);

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> T {
        // SAFETY: Caller guarantees `i < N`.
        unsafe { <[T]>::get_unchecked(self, i) }.clone()
    }
}

impl<T: Clone, const N: usize> SequenceMut for [T; N] {
    type Element = T;

    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        // SAFETY: Caller guarantees `i < N`.
        unsafe { <[T]>::get_unchecked_mut(self, i) }
    }
}

impl<T: Clone, const CAP: usize> Sequence for ArrayVec<T, CAP> {
    type Item = T;
    const EXTENT: Extent = Extent::Static(CAP);

    #[inline(always)]
    fn len(&self) -> usize {
        ArrayVec::len(self)
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> T {
        // SAFETY: Caller guarantees `i < self.len()`.
        unsafe { <[T]>::get_unchecked(self.as_slice(), i) }.clone()
    }
}

impl<T: Clone, const CAP: usize> SequenceMut for ArrayVec<T, CAP> {
    type Element = T;

    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        // SAFETY: Caller guarantees `i < self.len()`.
        unsafe { <[T]>::get_unchecked_mut(self.as_mut_slice(), i) }
    }
}

impl<'a, T: Clone, const N: usize> Sequence for &'a mut [T; N] {
    type Item = T;
    const EXTENT: Extent = Extent::Static(N);

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> T {
        // SAFETY: Caller guarantees `i < N`.
        unsafe { <[T]>::get_unchecked(&**self, i) }.clone()
    }
}

impl<'a, T: Clone, const N: usize> SequenceMut for &'a mut [T; N] {
    type Element = T;

    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        // SAFETY: Caller guarantees `i < N`.
        unsafe { <[T]>::get_unchecked_mut(&mut **self, i) }
    }
}

impl<'a, T: Clone> Sequence for &'a mut [T] {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> T {
        // SAFETY: Caller guarantees `i < self.len()`.
        unsafe { <[T]>::get_unchecked(&**self, i) }.clone()
    }
}

impl<'a, T: Clone> SequenceMut for &'a mut [T] {
    type Element = T;

    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        // SAFETY: Caller guarantees `i < self.len()`.
        unsafe { <[T]>::get_unchecked_mut(&mut **self, i) }
    }
}

/// Implement [`Sequence`] for a shared reference to a homogeneous tuple.
macro_rules! tuple_sequence {
    ($len:literal, $tuple:ty, $($idx:tt)+) => {
        impl<'a, T> Sequence for &'a $tuple {
            type Item = &'a T;
            const EXTENT: Extent = Extent::Static($len);

            #[inline(always)]
            fn len(&self) -> usize {
                $len
            }

            #[inline(always)]
            unsafe fn get_unchecked(&self, i: usize) -> &'a T {
                let this: &'a $tuple = *self;
                match i {
                    $($idx => &this.$idx,)+
                    // SAFETY: Caller guarantees `i` is one of the fields.
                    _ => unsafe { core::hint::unreachable_unchecked() },
                }
            }
        }
    };
}

tuple_sequence!(1, (T,), 0);
tuple_sequence!(2, (T, T), 0 1);
tuple_sequence!(3, (T, T, T), 0 1 2);
tuple_sequence!(4, (T, T, T, T), 0 1 2 3);
tuple_sequence!(5, (T, T, T, T, T), 0 1 2 3 4);
tuple_sequence!(6, (T, T, T, T, T, T), 0 1 2 3 4 5);
tuple_sequence!(7, (T, T, T, T, T, T, T), 0 1 2 3 4 5 6);
tuple_sequence!(8, (T, T, T, T, T, T, T, T), 0 1 2 3 4 5 6 7);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn array_bounds() {
        let xs = [1_u8, 2, 3];
        let s = &xs;
        assert_eq!(Sequence::len(&s), 3);
        assert_eq!(Sequence::get(&s, 2), Some(&3));
        assert_eq!(Sequence::get(&s, 3), None);
        assert_eq!(<&[u8; 3] as Sequence>::EXTENT, Extent::Static(3));
    }

    #[test]
    fn slice_is_dynamic() {
        let xs = [1_u8, 2, 3];
        let s: &[u8] = &xs[1..];
        assert_eq!(Sequence::len(&s), 2);
        assert_eq!(Sequence::get(&s, 0), Some(&2));
        assert_eq!(<&[u8] as Sequence>::EXTENT, Extent::Dynamic);
    }

    #[test]
    fn arrayvec_extent_is_capacity() {
        let mut v = ArrayVec::<u16, 8>::new();
        v.push(10);
        v.push(20);
        let s = &v;
        assert_eq!(Sequence::len(&s), 2);
        assert_eq!(Sequence::get(&s, 1), Some(&20));
        assert_eq!(Sequence::get(&s, 2), None);
        assert_eq!(<&ArrayVec<u16, 8> as Sequence>::EXTENT, Extent::Static(8));
    }

    #[test]
    fn tuples() {
        let t = ("a", "b", "c", "d");
        let s = &t;
        assert_eq!(Sequence::len(&s), 4);
        assert_eq!(Sequence::get(&s, 0), Some(&"a"));
        assert_eq!(Sequence::get(&s, 3), Some(&"d"));
        assert_eq!(Sequence::get(&s, 4), None);

        let one = (7_i32,);
        assert_eq!(Sequence::get(&&one, 0), Some(&7));
    }

    #[test]
    fn owned_and_mutable() {
        let mut xs = [1_i32, 2, 3];
        {
            let mut m = &mut xs;
            // SAFETY: 1 < 3
            unsafe { *SequenceMut::get_unchecked_mut(&mut m, 1) = 20 };
            assert_eq!(Sequence::get(&m, 1), Some(20));
        }
        assert_eq!(xs, [1, 20, 3]);

        let mut owned = xs;
        // SAFETY: 0 < 3
        unsafe { *SequenceMut::get_unchecked_mut(&mut owned, 0) = 10 };
        assert_eq!(Sequence::get(&owned, 0), Some(10));
    }
}
