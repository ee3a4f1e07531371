//! Chaos game over the fern's iterated function system.

pub mod transforms;
pub use transforms::{Affine, TransformSet, affine};

pub mod chaos_game;
pub use chaos_game::{ChaosGame, simulate};

use {
  crate::{config::Config, histogram::Histogram},
  rand::Rng,
};


/// Fresh histogram sized for `config`, filled with `config.iterations()` visits.
pub fn simulate_config(config: &Config, rng: &mut impl Rng) -> Histogram {
  let mut histogram = Histogram::new(config.size);
  simulate(&mut histogram, config.iterations(), &config.transforms, config.start, rng);
  histogram
}
