//! Counting sort over a small value range using a fixed set.

use packed_intset::counting_sort;

fn main() {
    println!("=== packed-intset - Counting Sort Example ===\n");

    let mut scores = vec![0, -2, -1, 1, 1, 2, 1, 1, 3, 2, 1, 5, 2, 1, 1, 3, 5, 1, 2, 3];
    println!("Input:  {:?}", scores);
    counting_sort(&mut scores);
    println!("Sorted: {:?}", scores);

    // A pseudo-random batch with heavy repetition
    let mut batch: Vec<i32> = (0..10_000).map(|i: i32| (i * 7919 % 503) - 250).collect();
    let mut expected = batch.clone();
    expected.sort_unstable();
    counting_sort(&mut batch);
    println!(
        "\nSorted {} values in [-250, 252]: {}",
        batch.len(),
        if batch == expected { "ok" } else { "MISMATCH" }
    );

    // Wide ranges fall back to the standard sort
    let mut sparse = vec![1_000_000, -5, 42, i32::MAX];
    counting_sort(&mut sparse);
    println!("Sparse input: {:?}", sparse);

    println!("\n=== Example Complete ===");
}
