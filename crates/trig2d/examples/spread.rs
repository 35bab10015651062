//! Print the radial spread of the disc sampler for quick visual sanity.
//!
//! Usage:
//!   cargo run -p trig2d --example spread -- [samples]
//!
//! Buckets draws by distance-to-center. The ordered two-draw formula
//! concentrates points well inside the radius instead of spreading them
//! area-uniformly, and this probe makes that bias visible.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trig2d::disc::point_in_disc;

fn main() {
    let samples: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(100_000);
    let center = Vector2::new(0.0, 0.0);
    let radius = 1.0;
    let mut rng = StdRng::seed_from_u64(2025);

    let mut buckets = [0usize; 10];
    let mut mean = 0.0f64;
    for _ in 0..samples {
        let p = point_in_disc(center, radius, &mut rng);
        let d = (p - center).norm();
        mean += d;
        let k = ((d / radius) * 10.0).min(9.0) as usize;
        buckets[k] += 1;
    }
    mean /= samples as f64;

    println!("samples={samples} mean_distance={mean:.4} radius={radius}");
    for (i, n) in buckets.iter().enumerate() {
        let lo = i as f64 / 10.0;
        println!("[{lo:.1}, {:.1})  {n}", lo + 0.1);
    }
}
