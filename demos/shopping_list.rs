//! Two users editing a shared shopping list while offline, then syncing.
//!
//! Run with `cargo run --example shopping_list`.

use marray::prelude::*;

fn main() {
    let user1: MArray<String> = MArray::new("user1");
    let user2: MArray<String> = MArray::new("user2");

    // User 1 writes the initial list.
    user1.push("Milk".to_string());
    let eggs = user1.push("Eggs".to_string());
    let bread = user1.push("Bread".to_string());

    // Sync to user 2.
    user2.merge(&user1);
    println!("Initial list: {:?}", user1.to_vec());

    // Offline, concurrently:
    // User 1 realizes they need two dozen eggs and edits the item.
    user1.set(&eggs, "Eggs (2 dozen)".to_string());
    // User 2 reorganizes, moving bread to the top.
    user2.move_to(&bread, 0);

    // Both sync again.
    user1.merge(&user2);
    user2.merge(&user1);

    println!("After sync:   {:?}", user1.to_vec());
    assert_eq!(user1.to_vec(), user2.to_vec());
    // Both changes apply: bread on top, eggs edited.
}
