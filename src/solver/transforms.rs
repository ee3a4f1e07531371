use {
  crate::geometry::WorldSpace,
  euclid::{Point2D, Transform2D},
};

pub type Affine = Transform2D<f64, WorldSpace, WorldSpace>;

/// `x' = a*x + b*y + e`, `y' = c*x + d*y + f`
pub fn affine(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Affine {
  // euclid stores the transposed matrix: x' = x*m11 + y*m21 + m31
  Transform2D::new(a, c, b, d, e, f)
}

/// Four affine maps, each selected with a fixed probability.
///
/// `cutoffs` are cumulative percentages: a draw `r` in `[0, 100)` selects map `0` when
/// `r < cutoffs[0]`, map `1` when `r < cutoffs[1]`, map `2` when `r < cutoffs[2]`,
/// and map `3` otherwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformSet {
  pub cutoffs: [f64; 3],
  pub maps: [Affine; 4]
}

impl TransformSet {
  /// Barnsley's fern. `growth` is the `a` coefficient of the leaflet map,
  /// controlling how quickly successive leaflets shrink.
  pub fn barnsley(growth: f64) -> Self {
    Self {
      cutoffs: [1.0, 86.0, 93.0],
      maps: [
        // stem
        affine(0.00, 0.00, 0.00, 0.16, 0.00, 0.00),
        // successively smaller leaflets
        affine(growth, 0.04, -0.04, 0.85, 0.00, 1.60),
        // largest left-hand leaflet
        affine(0.20, -0.26, 0.23, 0.22, 0.00, 1.60),
        // largest right-hand leaflet
        affine(-0.15, 0.28, 0.26, 0.24, 0.00, 0.44),
      ]
    }
  }

  /// Probability of each map, in percent.
  pub fn weights(&self) -> [f64; 4] {
    let c = self.cutoffs;
    [c[0], c[1] - c[0], c[2] - c[1], 100.0 - c[2]]
  }

  #[inline]
  pub fn select(&self, r: f64) -> usize {
    self.cutoffs.iter()
      .position(|&cutoff| r < cutoff)
      .unwrap_or(self.cutoffs.len())
  }

  #[inline]
  pub fn step(&self, point: Point2D<f64, WorldSpace>, r: f64) -> Point2D<f64, WorldSpace> {
    self.maps[self.select(r)].transform_point(point)
  }
}

impl Default for TransformSet {
  fn default() -> Self {
    Self::barnsley(0.8)
  }
}
