use {
  crate::geometry::{self, PixelSpace},
  euclid::{Point2D, Size2D},
};

/// Dense per-pixel visit counter, row-major, indexed by `x + y * width`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
  size: Size2D<u32, PixelSpace>,
  data: Vec<f64>
}

impl Histogram {
  pub fn new(size: Size2D<u32, PixelSpace>) -> Self {
    Self {
      size,
      data: vec![0.0; size.width as usize * size.height as usize]
    }
  }

  pub fn from_counts(size: Size2D<u32, PixelSpace>, data: Vec<f64>) -> anyhow::Result<Self> {
    let expected = size.width as usize * size.height as usize;
    if data.len() != expected {
      anyhow::bail!("histogram of {}x{} needs {} cells, got {}", size.width, size.height, expected, data.len());
    }
    Ok(Self { size, data })
  }

  pub fn size(&self) -> Size2D<u32, PixelSpace> {
    self.size
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  pub fn as_slice(&self) -> &[f64] {
    &self.data
  }

  pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
    self.data.chunks(self.size.width.max(1) as usize)
  }

  pub fn get(&self, pixel: Point2D<u32, PixelSpace>) -> Option<f64> {
    self.contains(pixel)
      .then(|| self.data[geometry::pixel_index(pixel, self.size)])
  }

  pub fn contains(&self, pixel: Point2D<u32, PixelSpace>) -> bool {
    geometry::contains(pixel, self.size)
  }

  /// Add one visit to `pixel`.
  ///
  /// A pixel outside the canvas is an invariant violation: debug builds panic,
  /// release builds clamp it onto the nearest edge cell.
  pub fn increment(&mut self, pixel: Point2D<u32, PixelSpace>) {
    debug_assert!(
      self.contains(pixel),
      "pixel {:?} outside of {}x{} histogram", pixel, self.size.width, self.size.height
    );
    let pixel = Point2D::new(
      pixel.x.min(self.size.width.saturating_sub(1)),
      pixel.y.min(self.size.height.saturating_sub(1))
    );
    if let Some(count) = self.data.get_mut(geometry::pixel_index(pixel, self.size)) {
      *count += 1.0;
    }
  }

  /// Sum of all counters.
  pub fn total(&self) -> f64 {
    self.data.iter().sum()
  }

  pub fn max(&self) -> f64 {
    self.data.iter().cloned().fold(0.0, f64::max)
  }

  /// Inverted, scaled intensity `1 - count / normalization`: unvisited pixels are `1.0`,
  /// pixels at or above `normalization` visits are `<= 0.0`.
  pub fn value(&self, pixel: Point2D<u32, PixelSpace>, normalization: f64) -> Option<f64> {
    self.get(pixel).map(|count| intensity(count, normalization))
  }
}

pub fn intensity(count: f64, normalization: f64) -> f64 {
  1.0 - count / normalization
}
