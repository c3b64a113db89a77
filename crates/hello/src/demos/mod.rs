//! The demo functions.
//!
//! Each demo keeps its description in an inner block doc comment on the
//! first lines of its body. The registry reads that comment back out of the
//! embedded source, and the code panel shows the body without it.

mod fractals;
mod intro;
mod movies;
mod progress_bar;
mod random_numbers;
mod repetitions;
mod sinc;

pub use fractals::fractals;
pub use intro::intro;
pub use movies::movies;
pub use progress_bar::progress_bar;
pub use random_numbers::random_numbers;
pub use repetitions::repetitions;
pub use sinc::sinc;

use std::f64::consts::TAU;

use rand::Rng;

/// Embedded sources, one per demo file, for the code panel.
pub mod sources {
    pub const FRACTALS: &str = include_str!("fractals.rs");
    pub const MOVIES: &str = include_str!("movies.rs");
    pub const PROGRESS_BAR: &str = include_str!("progress_bar.rs");
    pub const RANDOM_NUMBERS: &str = include_str!("random_numbers.rs");
    pub const REPETITIONS: &str = include_str!("repetitions.rs");
    pub const SINC: &str = include_str!("sinc.rs");
}

/// `n` standard normal samples (Box-Muller).
pub(crate) fn randn(rng: &mut impl Rng, n: usize) -> Vec<f64> {
    (0..n)
        .map(|_| {
            // 1 - [0, 1) keeps the logarithm finite.
            let u1: f64 = 1.0 - rng.random::<f64>();
            let u2: f64 = rng.random();
            (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
        })
        .collect()
}

/// `num` evenly spaced values from `start` to `stop`, both included.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num).map(|i| start + step * i as f64).collect()
        }
    }
}
