//! Lookups through static maps

use static_assertions::assert_impl_all;
use static_views::{
    crc32_hash, raw, static_map, Config, Error, PairConfig, RawView, StaticHash, StaticMap,
};

type FruitMap = StaticMap<RawView<[(i32, &'static str); 3]>, PairConfig, StaticHash, 6, 2>;

assert_impl_all!(FruitMap: Send, Sync, Clone);

#[test]
fn fruit() {
    let m: FruitMap = static_views::static_map! {
        5 => "apple",
        8 => "pear",
        0 => "banana",
    }
    .unwrap();
    assert_eq!(m.at(&5), Ok("apple"));
    assert_eq!(m.at(&8), Ok("pear"));
    assert_eq!(m.at(&0), Ok("banana"));
    assert_eq!(m.find(&10), None);
    assert_eq!(m.find(&8), Some((8, "pear")));
    assert_eq!(m.count(&0), 1);
    assert_eq!(m.count(&10), 0);
    assert_eq!(m.at(&10), Err(Error::KeyNotFound));
    assert_eq!(m.size(), 3);
}

#[test]
fn string_keys() {
    let codes = [
        ("red", 0xff0000_u32),
        ("green", 0x00ff00),
        ("blue", 0x0000ff),
        ("white", 0xffffff),
        ("black", 0x000000),
    ];
    let m = static_map::<10, 2>()
        .build(raw(&codes), PairConfig::new())
        .unwrap();
    for (name, code) in &codes {
        assert_eq!(m.at(name), Ok(code));
    }
    assert!(!m.contains_key(&"purple"));
    assert_eq!(m.iter().count(), 5);
}

#[test]
fn crc_keys() {
    let codes = [("red", 1_u8), ("green", 2), ("blue", 3), ("cyan", 4)];
    let m = static_map::<8, 2>()
        .hasher(|k: &&str| crc32_hash(k.as_bytes()) as usize)
        .build(raw(&codes), PairConfig::new())
        .unwrap();
    assert_eq!(m.at(&"cyan"), Ok(&4));
    assert_eq!(m.at(&"magenta"), Err(Error::KeyNotFound));
}

#[test]
fn accessor_config() {
    // Elements are records; the key and value are fields of them.
    #[derive(Debug)]
    struct Element {
        number: u8,
        symbol: &'static str,
    }
    let table = [
        Element {
            number: 1,
            symbol: "H",
        },
        Element {
            number: 2,
            symbol: "He",
        },
        Element {
            number: 6,
            symbol: "C",
        },
    ];
    let by_symbol = static_map::<8, 2>()
        .build(
            raw(&table),
            Config::new(|e: &&Element| e.symbol, |e: &&Element| e.number),
        )
        .unwrap();
    assert_eq!(by_symbol.at(&"He"), Ok(2));
    assert_eq!(by_symbol.find(&"C").map(|e| e.number), Some(6));
    assert_eq!(by_symbol.count(&"O"), 0);
}

#[test]
fn duplicate_keys_first_wins() {
    let pairs = [(3_u16, "first"), (7, "other"), (3, "second")];
    let m = static_map::<4, 3>()
        .build(raw(&pairs), PairConfig::new())
        .unwrap();
    assert_eq!(m.at(&3), Ok(&"first"));
    assert_eq!(m.count(&3), 1);
    assert_eq!(m.size(), 3);
}
