use {
  crate::{
    geometry::{PixelSpace, WorldSpace},
    solver::TransformSet,
  },
  anyhow::{bail, Result},
  euclid::{Point2D, Size2D},
};

/// Everything a render depends on, apart from the colorer and the destination.
///
/// ```
/// # use barnsley_fern::config::Config;
/// let config = Config::default()
///   .size(256, 256)
///   .iterations_per_pixel(16)
///   .seed(0);
/// assert_eq!(config.iterations(), 256 * 256 * 16);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
  pub size: Size2D<u32, PixelSpace>,
  /// Total iteration count is `pixel_count * iterations_per_pixel`.
  pub iterations_per_pixel: u64,
  pub start: Point2D<f64, WorldSpace>,
  pub transforms: TransformSet,
  /// Visit count at which a pixel is fully saturated.
  pub normalization: f64,
  pub seed: Option<u64>
}

impl Default for Config {
  fn default() -> Self {
    Self {
      size: Size2D::new(1024, 1024),
      iterations_per_pixel: 64,
      start: Point2D::new(0.0, 1.0),
      transforms: TransformSet::default(),
      normalization: 256.0,
      seed: None
    }
  }
}

impl Config {
  pub fn size(mut self, width: u32, height: u32) -> Self {
    self.size = Size2D::new(width, height);
    self
  }

  pub fn iterations_per_pixel(mut self, value: u64) -> Self {
    self.iterations_per_pixel = value;
    self
  }

  pub fn start(mut self, point: Point2D<f64, WorldSpace>) -> Self {
    self.start = point;
    self
  }

  pub fn transforms(mut self, transforms: TransformSet) -> Self {
    self.transforms = transforms;
    self
  }

  pub fn normalization(mut self, value: f64) -> Self {
    self.normalization = value;
    self
  }

  pub fn seed(mut self, seed: u64) -> Self {
    self.seed = Some(seed);
    self
  }

  pub fn pixel_count(&self) -> u64 {
    self.size.width as u64 * self.size.height as u64
  }

  /// Saturates instead of overflowing, [`Config::validate`] rejects such configs.
  pub fn iterations(&self) -> u64 {
    self.pixel_count().saturating_mul(self.iterations_per_pixel)
  }

  pub fn validate(&self) -> Result<()> {
    if self.size.width == 0 || self.size.height == 0 {
      bail!("canvas must not be empty, got {}x{}", self.size.width, self.size.height);
    }
    if self.pixel_count().checked_mul(self.iterations_per_pixel).is_none() {
      bail!("{} iterations per pixel overflows the iteration counter", self.iterations_per_pixel);
    }
    if !(self.normalization.is_finite() && self.normalization > 0.0) {
      bail!("normalization must be a positive number, got {}", self.normalization);
    }
    if !(self.start.x.is_finite() && self.start.y.is_finite()) {
      bail!("starting point {:?} is not finite", self.start);
    }
    let cutoffs = self.transforms.cutoffs;
    if !cutoffs.windows(2).all(|w| w[0] <= w[1]) || cutoffs[0] < 0.0 || cutoffs[2] > 100.0 {
      bail!("transform cutoffs {:?} do not partition [0, 100)", cutoffs);
    }
    Ok(())
  }
}
