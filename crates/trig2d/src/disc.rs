//! Random points inside a disc (ordered two-draw sampler + replay tokens).
//!
//! Model
//! - Draw `alfa ≤ beta` from `{1/steps, …, 1}`, then place the point at
//!   angle `2π·alfa/beta` and distance `beta·radius` from the center. The
//!   resulting spread is deliberately not area-uniform; script logic is
//!   tuned around its center bias, so the formula is load-bearing and must
//!   not be replaced by a sqrt-scaled or rejection sampler.
//! - Draws come through `StepSource`, so callers plug any `rand::Rng` and
//!   tests substitute a fixed sequence.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `StepSource`, `DiscCfg`, `ReplayToken`

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Disc-sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct DiscCfg {
    /// Draw granularity: both factors come from `{1/steps, 2/steps, …, 1}`.
    /// Clamped to at least 1. The default keeps one million steps so the
    /// sampled distribution stays bit-compatible across releases.
    pub steps: u32,
}

impl Default for DiscCfg {
    fn default() -> Self {
        Self { steps: 1_000_000 }
    }
}

/// Uniform integer draws backing the disc sampler.
///
/// `next_step(steps)` returns an integer in `[1, steps]`, each value equally
/// likely. Every `rand::Rng` qualifies through the blanket impl; tests
/// implement the trait directly with a canned sequence.
pub trait StepSource {
    fn next_step(&mut self, steps: u32) -> u32;
}

impl<R: Rng> StepSource for R {
    #[inline]
    fn next_step(&mut self, steps: u32) -> u32 {
        self.gen_range(1..=steps)
    }
}

/// Exchange two scalars in place.
#[inline]
pub fn swap_f64(a: &mut f64, b: &mut f64) {
    std::mem::swap(a, b);
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Random point inside the disc around `center`, drawing from `src`.
///
/// `beta` is always positive, so the angle ratio stays finite; `alfa == beta`
/// lands on `(center.x + beta·radius, center.y)`. Radius 0 returns the
/// center.
pub fn point_in_disc_with<S: StepSource + ?Sized>(
    cfg: DiscCfg,
    center: Vector2<f64>,
    radius: f64,
    src: &mut S,
) -> Vector2<f64> {
    let steps = cfg.steps.max(1);
    let mut alfa = f64::from(src.next_step(steps)) / f64::from(steps);
    let mut beta = f64::from(src.next_step(steps)) / f64::from(steps);
    if beta < alfa {
        swap_f64(&mut alfa, &mut beta);
    }
    let theta = 2.0 * std::f64::consts::PI * alfa / beta;
    Vector2::new(
        center.x + beta * radius * theta.cos(),
        center.y + beta * radius * theta.sin(),
    )
}

/// Random point inside the disc with the default granularity.
#[inline]
pub fn point_in_disc<R: Rng>(center: Vector2<f64>, radius: f64, rng: &mut R) -> Vector2<f64> {
    point_in_disc_with(DiscCfg::default(), center, radius, rng)
}

/// Component-wise variant of [`point_in_disc`] for callers that keep raw
/// coordinates instead of vectors.
#[inline]
pub fn point_in_disc_xy<R: Rng>(x: f64, y: f64, radius: f64, rng: &mut R) -> (f64, f64) {
    let p = point_in_disc(Vector2::new(x, y), radius, rng);
    (p.x, p.y)
}

/// Reproducible draw: the same token always yields the same point.
pub fn point_in_disc_replayed(
    cfg: DiscCfg,
    center: Vector2<f64>,
    radius: f64,
    tok: ReplayToken,
) -> Vector2<f64> {
    let mut rng = tok.to_std_rng();
    point_in_disc_with(cfg, center, radius, &mut rng)
}
