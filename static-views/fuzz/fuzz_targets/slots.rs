//! Fuzzer for the "slot-array" API.
//!
//! Compares the slot storage of the hashed table against a simple model
//! built from nested `ArrayVec`s.

#![no_main]
use arbitrary::Arbitrary;
use arrayvec::ArrayVec;
use libfuzzer_sys::fuzz_target;
use static_views::SlotArray;

type BucketIdx = u8;
type ItemIdx = u8;

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Occupied(BucketIdx),
    Row(BucketIdx),
    Insert(BucketIdx, ItemIdx),
}

#[derive(Debug)]
struct SimulatedSlots<const B: usize, const S: usize>(ArrayVec<ArrayVec<usize, S>, B>);

impl<const B: usize, const S: usize> Default for SimulatedSlots<B, S> {
    fn default() -> Self {
        let mut r = ArrayVec::new();
        for _ in 0..B {
            r.push(ArrayVec::new());
        }
        Self(r)
    }
}

impl<const B: usize, const S: usize> SimulatedSlots<B, S> {
    fn push(&mut self, bucket: usize, index: usize) -> Result<usize, ()> {
        let a = &mut self.0[bucket];
        if a.is_full() {
            Err(())
        } else {
            a.push(index);
            Ok(a.len() - 1)
        }
    }
}

struct Sim<const B: usize, const S: usize> {
    slots: SlotArray<u8, B, S>,
    model: SimulatedSlots<B, S>,
}

impl<const B: usize, const S: usize> Sim<B, S> {
    fn new() -> Self {
        Self {
            slots: SlotArray::new(),
            model: Default::default(),
        }
    }

    fn bucket(&self, idx: BucketIdx) -> usize {
        (idx as usize) % B
    }

    fn apply(&mut self, op: &Op) {
        match *op {
            Op::Occupied(b) => {
                let b = self.bucket(b);
                assert_eq!(self.slots.occupied(b), self.model.0[b].len());
            }
            Op::Row(b) => {
                let b = self.bucket(b);
                let row = self.slots.row(b);
                let model = &self.model.0[b];
                let marker = SlotArray::<u8, B, S>::empty_marker();
                for (slot, value) in row.iter().enumerate() {
                    match model.get(slot) {
                        Some(index) => assert_eq!(*value as usize, *index),
                        None => assert_eq!(*value as usize, marker),
                    }
                }
            }
            Op::Insert(b, index) => {
                let b = self.bucket(b);
                let index = (index as usize) % SlotArray::<u8, B, S>::empty_marker();
                let r1 = self.slots.insert(b, index);
                let r2 = self.model.push(b, index);
                assert_eq!(r1, r2);
            }
        }
    }
}

fuzz_target!(|ex: Vec<Op>| {
    let mut shape1 = Sim::<7, 12>::new();
    let mut shape2 = Sim::<8, 16>::new();
    let mut shape3 = Sim::<1, 255>::new();

    for o in &ex {
        shape1.apply(o);
        shape2.apply(o);
        shape3.apply(o);
    }
});
