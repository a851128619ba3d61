//! Export and history throughput benchmark

use std::time::Instant;

use pixel_art::domain::{
    Cell, Color, GridModel, HistoryManager, Snapshot, UndoPolicy, rasterize, rasterize_parallel,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn random_grid(rng: &mut StdRng, size: usize) -> GridModel {
    let mut grid = match GridModel::new(size, size) {
        Ok(grid) => grid,
        Err(err) => panic!("benchmark grid {size}x{size}: {err}"),
    };
    let cells = (0..grid.len())
        .map(|_| {
            if rng.random_bool(0.6) {
                Cell::Painted(Color::rgb(rng.random(), rng.random(), rng.random()))
            } else {
                Cell::Unset
            }
        })
        .collect();
    if let Err(err) = grid.restore(&Snapshot::from_cells(cells)) {
        panic!("benchmark grid {size}x{size}: {err}");
    }
    grid
}

fn benchmark_rasterize(grid: &GridModel, cell_size: usize, iterations: u32, parallel: bool) -> f64 {
    let snapshot = grid.snapshot();
    let (w, h) = grid.dimensions();

    let start = Instant::now();
    for _ in 0..iterations {
        let result = if parallel {
            rasterize_parallel(&snapshot, w, h, cell_size)
        } else {
            rasterize(&snapshot, w, h, cell_size)
        };
        if let Err(err) = result {
            eprintln!("rasterize failed: {err}");
            return f64::NAN;
        }
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Time one record + undo + redo cycle on a full history
fn benchmark_history(grid: &GridModel, iterations: u32) -> f64 {
    let mut history = HistoryManager::new(UndoPolicy::Standard);
    let start = Instant::now();
    for _ in 0..iterations {
        history.record_before_stroke(grid.snapshot());
        history.undo(grid.snapshot());
        history.redo(grid.snapshot());
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Pixel Art Export Benchmark ===\n");

    let mut rng = StdRng::seed_from_u64(2024);
    let sizes = [10, 20, 64, 128, 256];
    let cell_size = 20;
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10} {:>12}",
        "Grid", "Serial ms", "Parallel ms", "Speedup", "History ms");
    println!("{:-<62}", "");

    for size in sizes {
        let grid = random_grid(&mut rng, size);
        let serial_ms = benchmark_rasterize(&grid, cell_size, iterations, false);
        let parallel_ms = benchmark_rasterize(&grid, cell_size, iterations, true);
        let history_ms = benchmark_history(&grid, iterations * 10);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x {:>12.4}",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms,
            history_ms
        );
    }

    println!("\n=== Output Size at {}px/cell ===\n", cell_size);
    for size in sizes {
        let px = size * cell_size;
        let bytes = px * px * 4;
        println!("{:>10} {:>6}x{:<6} {:>8.1} MB", format!("{}x{}", size, size), px, px, bytes as f64 / 1_000_000.0);
    }
}
