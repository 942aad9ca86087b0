//! Insert/delete churn on a large sparse matrix, reporting table maintenance

use hashmat::{SparseStore, StoreConfig, EMPTY};
use std::time::Instant;

fn main() -> hashmat::Result<()> {
    let size = 1_000_000;
    let config = StoreConfig::default().with_min_capacity(1 << 10);
    let mut matrix = SparseStore::with_config(size, size, config)?;

    println!("Matrix dimensions: {size} x {size}");
    println!("Initial capacity: {}", matrix.capacity());

    let start = Instant::now();
    matrix.set_main_diagonal(1)?;
    println!(
        "Filled diagonal in {:?}, capacity now {}",
        start.elapsed(),
        matrix.capacity()
    );

    // Delete every other diagonal cell and write an off-diagonal neighbour
    let start = Instant::now();
    for k in (0..size).step_by(2) {
        matrix.put(k, k, EMPTY)?;
        matrix.put(k, (k + 1) % size, -1)?;
    }
    let stats = matrix.stats();
    println!("Churned {} cells in {:?}", size, start.elapsed());
    println!(
        "Live: {}, tombstones: {}, capacity: {} (load {:.3}, deleted {:.3})",
        stats.live,
        stats.tombstones,
        stats.capacity,
        stats.load_ratio(),
        stats.deleted_ratio()
    );

    assert_eq!(matrix.get(1, 1)?, 1);
    assert_eq!(matrix.get(0, 0)?, EMPTY);
    assert_eq!(matrix.get(0, 1)?, -1);
    Ok(())
}
