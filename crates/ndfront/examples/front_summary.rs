//! Print a few accepted fronts with their sizes and attempt counts.
//!
//! Usage:
//!   cargo run -p ndfront --example front_summary -- [seed]

use ndfront::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025_u64);
    let mut rng = StdRng::seed_from_u64(seed);
    let cfg = EnforceCfg {
        check: CheckPolicy::Full,
        ..EnforceCfg::default()
    };
    let cases = [
        ("concave", 3),
        ("convex", 3),
        ("linear", 4),
        ("wave-3", 2),
        ("cliff", 3),
        ("cliff", 4),
    ];
    for (name, d) in cases {
        match generate_named(name, 500, d, &cfg, &mut rng) {
            Ok(front) => {
                let first = front.points.get(0).map(|p| p.iter().copied().collect::<Vec<_>>());
                println!(
                    "{}: n={}, d={}, attempts={}, first={:?}",
                    front.label(),
                    front.len(),
                    front.dim(),
                    front.attempts,
                    first
                );
            }
            Err(err) => eprintln!("{name} ({d}D): {err}"),
        }
    }
}
