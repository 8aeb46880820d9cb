//! Step throughput on seeded random grids of growing size

use std::time::Instant;
use cellular_automata::{GridEngine, Result};

const SEED: u64 = 0x5EED;
const ALIVE_FRACTION: f64 = 0.05;

/// Average milliseconds per generation
fn benchmark_step(size: usize, iterations: u32) -> Result<f64> {
    let mut engine = GridEngine::with_seed(size, size, ALIVE_FRACTION, SEED)?;

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<()> {
    println!("Step benchmark ({:.0}% initial density)", ALIVE_FRACTION * 100.0);
    println!("{:>10} {:>12} {:>16}", "grid", "ms/gen", "cells/s");

    for (size, iterations) in [(100, 500), (500, 100), (1000, 40), (2000, 10)] {
        let ms = benchmark_step(size, iterations)?;
        let cells_per_sec = (size * size) as f64 / (ms / 1000.0);
        println!(
            "{:>10} {:>12.3} {:>16.0}",
            format!("{size}x{size}"),
            ms,
            cells_per_sec
        );
    }
    Ok(())
}
