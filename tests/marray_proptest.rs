//! Property-based tests: arbitrary concurrent operation interleavings on
//! three replicas must still converge after a full exchange.

use marray::prelude::*;
use proptest::prelude::*;

/// One random mutation, with element references expressed as selectors into
/// whatever ids the replica happens to hold when the op is applied.
#[derive(Clone, Debug)]
enum Op {
    Push(i32),
    Unshift(i32),
    Insert(usize, i32),
    Set(usize, i32),
    Delete(usize),
    Pop,
    Shift,
    MoveTo(usize, usize),
    MoveAfter(usize, usize),
    MoveBefore(usize, usize),
    Swap(usize, usize),
    Reverse,
    Rotate(isize),
    SortAscending,
    Clear,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        5 => (-100i32..100).prop_map(Op::Push),
        3 => (-100i32..100).prop_map(Op::Unshift),
        4 => (0usize..16, -100i32..100).prop_map(|(i, v)| Op::Insert(i, v)),
        4 => (0usize..16, -100i32..100).prop_map(|(i, v)| Op::Set(i, v)),
        3 => (0usize..16).prop_map(Op::Delete),
        1 => Just(Op::Pop),
        1 => Just(Op::Shift),
        6 => (0usize..16, 0usize..16).prop_map(|(s, i)| Op::MoveTo(s, i)),
        3 => (0usize..16, 0usize..16).prop_map(|(s, a)| Op::MoveAfter(s, a)),
        3 => (0usize..16, 0usize..16).prop_map(|(s, a)| Op::MoveBefore(s, a)),
        3 => (0usize..16, 0usize..16).prop_map(|(a, b)| Op::Swap(a, b)),
        1 => Just(Op::Reverse),
        1 => (-8isize..8).prop_map(Op::Rotate),
        1 => Just(Op::SortAscending),
        1 => Just(Op::Clear),
    ]
}

fn apply(array: &MArray<i32>, op: &Op) {
    let ids = array.ids();
    let pick = |selector: usize| -> Option<ElementId> {
        if ids.is_empty() {
            None
        } else {
            Some(ids[selector % ids.len()])
        }
    };

    match op {
        Op::Push(v) => {
            array.push(*v);
        }
        Op::Unshift(v) => {
            array.unshift(*v);
        }
        Op::Insert(i, v) => {
            array.insert(*i, *v);
        }
        Op::Set(s, v) => {
            if let Some(id) = pick(*s) {
                array.set(&id, *v);
            }
        }
        Op::Delete(s) => {
            if let Some(id) = pick(*s) {
                array.delete(&id);
            }
        }
        Op::Pop => {
            array.pop();
        }
        Op::Shift => {
            array.shift();
        }
        Op::MoveTo(s, i) => {
            if let Some(id) = pick(*s) {
                array.move_to(&id, *i);
            }
        }
        Op::MoveAfter(s, a) => {
            if let (Some(id), Some(anchor)) = (pick(*s), pick(*a)) {
                array.move_after(&id, &anchor);
            }
        }
        Op::MoveBefore(s, a) => {
            if let (Some(id), Some(anchor)) = (pick(*s), pick(*a)) {
                array.move_before(&id, &anchor);
            }
        }
        Op::Swap(a, b) => {
            if let (Some(id_a), Some(id_b)) = (pick(*a), pick(*b)) {
                array.swap(&id_a, &id_b);
            }
        }
        Op::Reverse => array.reverse(),
        Op::Rotate(n) => array.rotate(*n),
        Op::SortAscending => array.sort_by(|a, b| a < b),
        Op::Clear => array.clear(),
    }
}

fn exchange_all(replicas: &[&MArray<i32>]) {
    for _ in 0..2 {
        for a in replicas {
            for b in replicas {
                a.merge(b);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Three replicas diverge under arbitrary op sequences, then fully
    /// exchange state: sequences and element facets must agree everywhere.
    #[test]
    fn arbitrary_interleavings_converge(
        seed_values in prop::collection::vec(-100i32..100, 0..6),
        ops1 in prop::collection::vec(arbitrary_op(), 0..25),
        ops2 in prop::collection::vec(arbitrary_op(), 0..25),
        ops3 in prop::collection::vec(arbitrary_op(), 0..25),
    ) {
        let r1: MArray<i32> = MArray::new("r1");
        for v in &seed_values {
            r1.push(*v);
        }
        let r2: MArray<i32> = MArray::new("r2");
        let r3: MArray<i32> = MArray::new("r3");
        r2.merge(&r1);
        r3.merge(&r1);

        for op in &ops1 {
            apply(&r1, op);
        }
        for op in &ops2 {
            apply(&r2, op);
        }
        for op in &ops3 {
            apply(&r3, op);
        }

        exchange_all(&[&r1, &r2, &r3]);

        prop_assert_eq!(r1.to_vec(), r2.to_vec());
        prop_assert_eq!(r2.to_vec(), r3.to_vec());
        let s1 = r1.snapshot();
        let s2 = r2.snapshot();
        let s3 = r3.snapshot();
        prop_assert_eq!(s1.elements(), s2.elements());
        prop_assert_eq!(s2.elements(), s3.elements());
    }

    /// Merging the same remote state again never changes anything.
    #[test]
    fn merge_is_idempotent(
        ops1 in prop::collection::vec(arbitrary_op(), 0..20),
        ops2 in prop::collection::vec(arbitrary_op(), 0..20),
    ) {
        let r1: MArray<i32> = MArray::new("r1");
        r1.push(0);
        let r2: MArray<i32> = MArray::new("r2");
        r2.merge(&r1);

        for op in &ops1 {
            apply(&r1, op);
        }
        for op in &ops2 {
            apply(&r2, op);
        }

        r1.merge(&r2);
        let settled = r1.snapshot();

        r1.merge(&r2);
        prop_assert_eq!(r1.snapshot(), settled);
    }

    /// Merge order between two remote states does not matter.
    #[test]
    fn merge_is_commutative(
        ops1 in prop::collection::vec(arbitrary_op(), 0..15),
        ops2 in prop::collection::vec(arbitrary_op(), 0..15),
        ops3 in prop::collection::vec(arbitrary_op(), 0..15),
    ) {
        let r1: MArray<i32> = MArray::new("r1");
        r1.push(0);
        r1.push(1);
        let r2: MArray<i32> = MArray::new("r2");
        let r3: MArray<i32> = MArray::new("r3");
        r2.merge(&r1);
        r3.merge(&r1);

        for op in &ops1 {
            apply(&r1, op);
        }
        for op in &ops2 {
            apply(&r2, op);
        }
        for op in &ops3 {
            apply(&r3, op);
        }

        let forward = r1.clone();
        forward.merge(&r2);
        forward.merge(&r3);

        let backward = r1.clone();
        backward.merge(&r3);
        backward.merge(&r2);

        prop_assert_eq!(forward.to_vec(), backward.to_vec());
        let fs = forward.snapshot();
        let bs = backward.snapshot();
        prop_assert_eq!(fs.elements(), bs.elements());
    }

    /// The materialized view is always a permutation of the live ids, and
    /// ids never change across arbitrary local mutation.
    #[test]
    fn view_is_a_permutation_of_live_ids(
        ops in prop::collection::vec(arbitrary_op(), 0..40),
    ) {
        let array: MArray<i32> = MArray::new("r1");
        for op in &ops {
            apply(&array, op);
        }

        let ids = array.ids();
        prop_assert_eq!(ids.len(), array.len());

        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), ids.len());

        for id in &ids {
            prop_assert!(array.element(id).is_some());
        }
    }
}
