use {
  super::TransformSet,
  crate::{
    geometry::{Projection, WorldSpace},
    histogram::Histogram,
  },
  euclid::Point2D,
  rand::Rng,
};

/// Infinite orbit of the chaos game: every item is the previous point
/// sent through one randomly selected map.
pub struct ChaosGame<'a, R> {
  transforms: &'a TransformSet,
  point: Point2D<f64, WorldSpace>,
  rng: R
}

impl<'a, R: Rng> ChaosGame<'a, R> {
  pub fn new(transforms: &'a TransformSet, start: Point2D<f64, WorldSpace>, rng: R) -> Self {
    Self { transforms, point: start, rng }
  }
}

impl<'a, R: Rng> Iterator for ChaosGame<'a, R> {
  type Item = Point2D<f64, WorldSpace>;

  fn next(&mut self) -> Option<Self::Item> {
    let r = self.rng.gen_range(0.0..100.0);
    self.point = self.transforms.step(self.point, r);
    Some(self.point)
  }
}

/// Run `iterations` steps of the chaos game from `start`,
/// adding one visit per step to the pixel each point projects onto.
pub fn simulate(
  histogram: &mut Histogram,
  iterations: u64,
  transforms: &TransformSet,
  start: Point2D<f64, WorldSpace>,
  rng: &mut impl Rng
) {
  let projection = Projection::for_canvas(histogram.size());
  // counted in u64, `usize` may be narrower
  (0..iterations)
    .zip(ChaosGame::new(transforms, start, rng))
    .for_each(|(_, point)| histogram.increment(projection.to_pixel(point)));
}
