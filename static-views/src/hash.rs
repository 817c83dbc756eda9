//! Hash functions for bucket tables
//!
//! A table hashes its elements through [`KeyHash`]. Any `Fn(&K) -> usize`
//! closure works; [`StaticHash`] is the default for maps and covers the
//! primitive key types without any runtime state.

use crate::algorithm::lfold;
use crate::raw::raw;

/// Hash function over keys of type `K`
pub trait KeyHash<K: ?Sized> {
    /// Hash one key.
    fn hash_key(&self, key: &K) -> usize;
}

impl<K: ?Sized, F: Fn(&K) -> usize> KeyHash<K> for F {
    #[inline(always)]
    fn hash_key(&self, key: &K) -> usize {
        self(key)
    }
}

/// Types that [`StaticHash`] knows how to hash
///
/// Integers hash to their own value. Strings and byte strings use a
/// multiplicative hash, `h = 37 * h + byte`, wrapping on overflow.
pub trait StaticHashable {
    /// Hash value of `self`.
    fn static_hash(&self) -> usize;
}

/// The default stateless hash function
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_structs)]
pub struct StaticHash;

impl<K: StaticHashable + ?Sized> KeyHash<K> for StaticHash {
    #[inline(always)]
    fn hash_key(&self, key: &K) -> usize {
        key.static_hash()
    }
}

/// Implement [`StaticHashable`] as identity for integers that widen losslessly.
macro_rules! identity_hash_from {
    ($($t:ty),*) => {
        $(impl StaticHashable for $t {
            #[inline(always)]
            fn static_hash(&self) -> usize {
                usize::from(*self)
            }
        })*
    };
}

/// Implement [`StaticHashable`] as identity for other integers.
///
/// Signed values wrap and wider values truncate to `usize`.
macro_rules! identity_hash_cast {
    ($($t:ty),*) => {
        $(impl StaticHashable for $t {
            #[inline(always)]
            fn static_hash(&self) -> usize {
                *self as usize
            }
        })*
    };
}

identity_hash_from!(u8, u16, usize, bool);
identity_hash_cast!(u32, u64, u128, i8, i16, i32, i64, i128, isize);

impl StaticHashable for char {
    #[inline(always)]
    fn static_hash(&self) -> usize {
        u32::from(*self).static_hash()
    }
}

impl StaticHashable for [u8] {
    fn static_hash(&self) -> usize {
        lfold(&raw(self), 0_usize, |hash, byte| {
            hash.wrapping_mul(37).wrapping_add(usize::from(*byte))
        })
    }
}

impl StaticHashable for str {
    #[inline(always)]
    fn static_hash(&self) -> usize {
        self.as_bytes().static_hash()
    }
}

impl StaticHashable for String {
    #[inline(always)]
    fn static_hash(&self) -> usize {
        self.as_bytes().static_hash()
    }
}

impl<const N: usize> StaticHashable for [u8; N] {
    #[inline(always)]
    fn static_hash(&self) -> usize {
        self[..].static_hash()
    }
}

impl<T: StaticHashable + ?Sized> StaticHashable for &T {
    #[inline(always)]
    fn static_hash(&self) -> usize {
        (**self).static_hash()
    }
}

/// CRC-32 (IEEE, reflected polynomial `0xEDB88320`) of a byte string.
///
/// Slower than [`StaticHash`] but spreads similar strings further apart.
/// Usable as a table hash with `|k: &&str| crc32_hash(k.as_bytes()) as usize`.
pub fn crc32_hash(bytes: &[u8]) -> u32 {
    /// Reflected CRC-32 generator polynomial
    const POLY: u32 = 0xEDB8_8320;
    let crc = lfold(&raw(bytes), !0_u32, |mut crc, byte| {
        crc ^= u32::from(*byte);
        for _ in 0..8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ POLY
            } else {
                crc >> 1
            };
        }
        crc
    });
    !crc
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn integers_are_identity() {
        assert_eq!(StaticHash.hash_key(&5_i32), 5);
        assert_eq!(StaticHash.hash_key(&200_u8), 200);
        assert_eq!(StaticHash.hash_key(&'A'), 65);
        assert_eq!(StaticHash.hash_key(&true), 1);
    }

    #[test]
    fn strings() {
        assert_eq!(StaticHash.hash_key(""), 0);
        assert_eq!(StaticHash.hash_key("a"), 97);
        assert_eq!(StaticHash.hash_key("ab"), 97 * 37 + 98);
        assert_eq!(
            StaticHash.hash_key(&"ab"),
            StaticHash.hash_key(&String::from("ab"))
        );
        assert_eq!(StaticHash.hash_key(b"ab"), StaticHash.hash_key("ab"));
    }

    #[test]
    fn closures_are_hashers() {
        let h = |k: &u32| (*k as usize) * 3;
        assert_eq!(h.hash_key(&4), 12);
    }

    #[test]
    fn crc32_check_value() {
        assert_eq!(crc32_hash(b""), 0);
        assert_eq!(crc32_hash(b"123456789"), 0xCBF4_3926);
    }
}
