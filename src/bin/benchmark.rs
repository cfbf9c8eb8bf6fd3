//! Compare serial and rayon-parallel generation stepping, plus seed encode/decode cost

use std::time::Instant;
use seed_of_life::domain::{seed, step, GridState};

fn random_grid(size: usize) -> GridState {
    let mut grid = GridState::new(size, size);
    grid.randomize(0.3);
    grid
}

fn benchmark_step(size: usize, iterations: u32, advance: fn(&mut GridState)) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        advance(&mut grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_seed(size: usize, iterations: u32) -> f64 {
    let grid = random_grid(size);
    let mut target = GridState::new(size, size);

    let start = Instant::now();
    for _ in 0..iterations {
        let token = seed::encode(&grid);
        if let Err(e) = seed::decode(&token, &mut target) {
            eprintln!("round trip failed: {e}");
            break;
        }
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("Step engine benchmark (ms per generation)\n");
    println!("{:>10} {:>12} {:>12} {:>14}", "Size", "Serial", "Parallel", "Seed trip");
    println!("{}", "-".repeat(52));

    for &size in &[64, 256, 512, 1024] {
        let iterations = if size >= 512 { 10 } else { 50 };
        let serial = benchmark_step(size, iterations, step::advance);
        let parallel = benchmark_step(size, iterations, step::advance_parallel);
        let seed_trip = benchmark_seed(size, iterations);
        println!(
            "{:>10} {:>12.3} {:>12.3} {:>14.3}",
            format!("{size}x{size}"),
            serial,
            parallel,
            seed_trip
        );
    }
}
