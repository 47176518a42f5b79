//! Snapshots must survive a serialization round trip and merge identically.
//!
//! Requires the `serde` feature.

use marray::prelude::*;

#[test]
fn snapshot_round_trips_through_json() {
    let array: MArray<String> = MArray::new("a");
    let x = array.push("x".to_string());
    array.push("y".to_string());
    array.delete(&x);
    array.push("z".to_string());

    let snapshot = array.snapshot();
    let encoded = serde_json::to_string(&snapshot).expect("serialize");
    let decoded: Snapshot<String> = serde_json::from_str(&encoded).expect("deserialize");

    assert_eq!(decoded, snapshot);

    let restored = MArray::from_snapshot(decoded);
    assert_eq!(restored.to_vec(), array.to_vec());
    assert_eq!(restored.replica_id(), "a");
}

#[test]
fn serialized_snapshot_merges_like_the_live_replica() {
    let a: MArray<String> = MArray::new("a");
    let ids: Vec<ElementId> = ["A", "B", "C"]
        .iter()
        .map(|v| a.push((*v).to_string()))
        .collect();

    let b: MArray<String> = MArray::new("b");
    b.merge(&a);

    a.set(&ids[0], "A2".to_string());
    b.move_to(&ids[2], 0);

    // Ship b's state over the wire.
    let wire = serde_json::to_vec(&b.snapshot()).expect("serialize");
    let received: Snapshot<String> = serde_json::from_slice(&wire).expect("deserialize");

    let direct = a.clone();
    direct.merge(&b);

    a.merge_snapshot(&received);
    assert_eq!(a.to_vec(), direct.to_vec());
    assert_eq!(a.snapshot().elements(), direct.snapshot().elements());
}
