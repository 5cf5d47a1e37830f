//! Basic usage example for packed-intset.
//!
//! This example demonstrates fixed and growable sets, set algebra, and
//! sharing a set between threads.

use std::sync::Arc;
use std::thread;

use packed_intset::{
    AnySet, Dense64, FixedSet, GrowableSet, IntSet, Reserved15, Reserved63, SetAlgebra,
    SetOptions,
};

fn main() {
    println!("=== packed-intset - Basic Usage Example ===\n");

    // Fixed set: capacity decided once
    let fixed = FixedSet::<Dense64>::new(1000);
    println!("Created fixed set for values 0..=1000 ({} words)", fixed.capacity());

    println!("\nInserting values: 100, 200, 150, 300");
    fixed.insert_all([100, 200, 150, 300]);
    println!("Set now contains {} values: {}", fixed.size(), fixed);

    println!("\nMembership checks:");
    println!("  contains(150): {}", fixed.contains(150));
    println!("  contains(999): {}", fixed.contains(999));

    println!("\nOut-of-range values are rejected:");
    match fixed.load_or_store(5000) {
        Ok(present) => println!("  stored, previously present: {}", present),
        Err(err) => println!("  error: {}", err),
    }

    println!("\nIteration (ascending order):");
    print!("  Values: ");
    for value in fixed.iter() {
        print!("{} ", value);
    }
    println!();

    println!("\nEarly stop after the first value above 120:");
    fixed.range(|value| {
        println!("  visited {}", value);
        value <= 120
    });

    println!("\nRemoving 150:");
    fixed.remove(150);
    println!("  contains(150): {}", fixed.contains(150));
    println!("  size: {}", fixed.size());

    // Growable set: storage follows the largest value
    println!("\n=== Growable Set ===\n");
    let growable = GrowableSet::<Reserved63>::new();
    println!("Initial capacity: {} words", growable.capacity());
    growable.insert_all(1000..1100);
    growable.insert_all(20_000..20_100);
    println!("After two clusters: {} values, {} words", growable.size(), growable.capacity());
    println!("  first 5: {:?}", growable.iter().take(5).collect::<Vec<_>>());

    // Options with normalization
    let bounded = SetOptions::new()
        .max_value(10_000)
        .capacity_hint(4)
        .growable::<Reserved15>();
    println!("\nBounded growable set: max {}", bounded.max_value());
    println!("  insert(10_000): {}", bounded.insert(10_000));
    println!("  insert(10_001): {}", bounded.insert(10_001));

    // Set algebra
    println!("\n=== Set Algebra ===\n");
    let a = FixedSet::<Dense64>::new(36);
    let b = FixedSet::<Dense64>::new(100);
    a.insert_all([0, 1, 2, 3, 4, 5]);
    b.insert_all([4, 5, 6, 7, 8]);
    println!("  a = {}", a);
    println!("  b = {}", b);
    println!("  a | b = {}", a.union(&b));
    println!("  a & b = {}", a.intersect(&b));
    println!("  a - b = {}", a.difference(&b));
    println!("  a ^ b = {}", a.symmetric_difference(&b));

    println!("\nMixed shapes use a sorted merge:");
    let mixed_a = AnySet::from(a.duplicate());
    let mixed_b = AnySet::from(b.to_growable::<Reserved15>());
    let merged = mixed_a.union(&mixed_b);
    println!("  {} | {} = {} ({})", mixed_a, mixed_b, merged, merged.layout_name());

    // Sharing between threads
    println!("\n=== Concurrent Inserts ===\n");
    let shared = Arc::new(GrowableSet::<Reserved63>::new());
    let handles: Vec<_> = (0..4u64)
        .map(|t| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for value in (t..100_000).step_by(4) {
                    shared.insert(value);
                }
            })
        })
        .collect();
    for handle in handles {
        if handle.join().is_err() {
            eprintln!("worker panicked");
        }
    }
    println!("  4 threads inserted {} values", shared.size());
    println!("  final capacity: {} words", shared.capacity());

    println!("\n=== Example Complete ===");
}
