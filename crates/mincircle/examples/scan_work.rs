//! Print containment-test counts for shuffled vs. fixed-order solves.
//!
//! Usage:
//!   cargo run -p mincircle --example scan_work -- [ramp|disk]
//!
//! On the collinear ramp the fixed order grows quadratically while the shuffled
//! solve stays linear; on a random disk both are linear.

use mincircle::circle::rand::{collinear_ramp, draw_points, CloudCfg, ReplayToken};
use mincircle::circle::{minimum_enclosing_circle_fixed_order, minimum_enclosing_circle_with_stats};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "ramp".to_string());
    let mut rng = StdRng::seed_from_u64(2025);
    for n in [250usize, 500, 1_000, 2_000, 4_000] {
        let pts = match mode.as_str() {
            "ramp" => collinear_ramp(n),
            "disk" => draw_points(
                CloudCfg {
                    count: n,
                    ..CloudCfg::default()
                },
                ReplayToken {
                    seed: 7,
                    index: n as u64,
                },
            ),
            _ => {
                eprintln!("usage: scan_work [ramp|disk]");
                return;
            }
        };
        let (_, fixed) = minimum_enclosing_circle_fixed_order(&pts);
        let (circle, shuffled) = minimum_enclosing_circle_with_stats(&pts, &mut rng);
        println!(
            "n={n} fixed_tests={} shuffled_tests={} per_point={:.2} circle={:?}",
            fixed.containment_tests,
            shuffled.containment_tests,
            shuffled.containment_tests as f64 / n as f64,
            circle
        );
    }
}
