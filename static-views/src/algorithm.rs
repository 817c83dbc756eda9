//! Small algorithms over views
//!
//! These are the loops the rest of the crate is built from: the hashed
//! table finds free slots with [`find_first_i`], and the string hash is a
//! [`lfold`].

use crate::view::{View, ViewMut};
use std::borrow::Borrow;

/// Index of the first item satisfying `pred`, or `view.size()` if none does.
pub fn find_first_i<V, P>(view: &V, mut pred: P) -> usize
where
    V: View,
    P: FnMut(&V::Item) -> bool,
{
    view.iter()
        .position(|item| pred(&item))
        .unwrap_or_else(|| view.size())
}

/// Left fold: combine every item into an accumulator, front to back.
pub fn lfold<V, T, F>(view: &V, init: T, op: F) -> T
where
    V: View,
    F: FnMut(T, V::Item) -> T,
{
    view.iter().fold(init, op)
}

/// Copy items of `view` into `out`, front to back.
///
/// Stops at the end of the shorter of the two and returns the number of
/// items copied.
pub fn copy_into<V, W>(view: &V, out: &mut W) -> usize
where
    V: View,
    W: ViewMut,
    V::Item: Borrow<W::Element>,
    W::Element: Clone,
{
    let mut copied = 0;
    for item in view.iter() {
        match out.at_mut(copied) {
            Ok(slot) => *slot = item.borrow().clone(),
            Err(_) => break,
        }
        copied += 1;
    }
    copied
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::raw;

    #[test]
    fn find_first() {
        let xs = [4, 8, 15, 16, 23, 42];
        let v = raw(&xs);
        assert_eq!(find_first_i(&v, |x| **x > 10), 2);
        assert_eq!(find_first_i(&v, |x| **x > 100), 6);
        assert_eq!(find_first_i(&raw(&xs).take(0), |_| true), 0);
    }

    #[test]
    fn fold() {
        let xs = [1, 2, 3, 4];
        assert_eq!(lfold(&raw(&xs), 0, |acc, x| acc * 10 + x), 1234);
    }

    #[test]
    fn copy_bounded() {
        let src = [1_u8, 2, 3, 4, 5];
        let mut dst = [0_u8; 3];
        let n = copy_into(&raw(&src).drop(1), &mut raw(&mut dst));
        assert_eq!(n, 3);
        assert_eq!(dst, [2, 3, 4]);

        let mut wide = [0_u8; 8];
        assert_eq!(copy_into(&raw(&src), &mut raw(&mut wide)), 5);
        assert_eq!(wide, [1, 2, 3, 4, 5, 0, 0, 0]);
    }
}
