//! Placement properties of the hashed bucket table

use static_views::{hashed, raw, Error, Extent, Hashed, View};

/// Hash a borrowed `u32` to itself.
fn ident(x: &&u32) -> usize {
    **x as usize
}

#[test]
fn every_item_in_its_own_bucket() {
    let xs = [12_u32, 7, 3, 19, 8, 0, 21, 5];
    let t = hashed::<5, 3>().hasher(ident).build(raw(&xs)).unwrap();

    let mut seen = Vec::new();
    for (b, bucket) in (&t).into_iter().enumerate() {
        assert!(bucket.size() <= t.bucket_size());
        for x in bucket.iter() {
            assert_eq!(*x as usize % 5, b);
            seen.push(*x);
        }
    }
    seen.sort_unstable();
    let mut expected = xs.to_vec();
    expected.sort_unstable();
    assert_eq!(seen, expected);
    assert_eq!(t.occupancy().iter().sum::<usize>(), xs.len());
}

#[test]
fn placement_keeps_parent_order() {
    // Whatever order the items arrive in, each bucket lists them in that
    // same order.
    let mut items = [1_u32, 5, 9, 2, 13, 6];
    let heap = permutohedron::Heap::new(&mut items);
    let mut count = 0;
    for permutation in heap {
        let t = hashed::<4, 4>()
            .hasher(ident)
            .build(raw(&permutation))
            .unwrap();
        for b in 0..4 {
            let expected: Vec<u32> = permutation
                .iter()
                .copied()
                .filter(|x| *x as usize % 4 == b)
                .collect();
            let got: Vec<u32> = t.bucket(b).iter().copied().collect();
            assert_eq!(got, expected);
        }
        count += 1;
    }
    assert_eq!(count, 720);
}

#[test]
fn capacity_is_the_callers_choice() {
    let xs = [0_u32, 3, 6, 9];
    // All four land in bucket 0 of 3.
    assert_eq!(
        hashed::<3, 3>().hasher(ident).build(raw(&xs)).unwrap_err(),
        Error::BucketFull {
            bucket: 0,
            capacity: 3
        }
    );
    assert!(hashed::<3, 4>().hasher(ident).build(raw(&xs)).is_ok());
    assert!(hashed::<2, 2>().hasher(ident).build(raw(&xs)).is_ok());
}

#[test]
fn compact_slots() {
    let xs: Vec<u32> = (0..40).collect();
    let t = hashed::<16, 4>()
        .hasher(ident)
        .slot_type::<u8>()
        .build(raw(&xs[..]))
        .unwrap();
    assert_eq!(t.bucket(3).iter().copied().collect::<Vec<_>>(), vec![3, 19, 35]);
    assert_eq!(
        hashed::<16, 16>()
            .hasher(ident)
            .slot_type::<u8>()
            .build(raw(&xs[..]))
            .unwrap_err(),
        Error::SlotOverflow {
            slots: 256,
            max: 255
        }
    );
}

#[test]
fn table_of_buckets_is_a_view() {
    let words = ["ox", "cat", "emu", "gnu", "bison", "yak"];
    let t = Hashed::<_, _, 4, 4>::new(raw(&words), |w: &&&str| w.len()).unwrap();
    assert_eq!((&t).extent(), Extent::Static(4));
    let three: Vec<&str> = (&t).at(3).unwrap().iter().copied().collect();
    assert_eq!(three, vec!["cat", "emu", "gnu", "yak"]);
    assert!((&t).at(4).is_err());
    assert_eq!(
        t.lookup(3, |w| w.starts_with('g')).copied(),
        Some("gnu")
    );
    assert_eq!(t.lookup(2, |w| w.starts_with('g')), None);
}
