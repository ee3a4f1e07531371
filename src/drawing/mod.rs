//! Rasterization of a [`Histogram`] into an RGB pixel stream.

use {
  crate::{
    color::Colorer,
    geometry::PixelSpace,
    histogram::{self, Histogram},
  },
  anyhow::Result,
  euclid::Size2D,
  image::Rgb,
};

pub mod ppm;
mod impl_sink_rgbimage;

pub use ppm::{Encoding, Header, PpmWriter};
pub use impl_sink_rgbimage::ImageSink;

/// Byte-accepting destination of a raster, fed in row-major order.
pub trait Sink {
  /// Called once, before the first pixel.
  fn begin(&mut self, size: Size2D<u32, PixelSpace>) -> Result<()>;
  fn put(&mut self, color: Rgb<u8>) -> Result<()>;
  /// Called once, after the last pixel.
  fn finish(&mut self) -> Result<()>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
  fn begin(&mut self, size: Size2D<u32, PixelSpace>) -> Result<()> { (**self).begin(size) }
  fn put(&mut self, color: Rgb<u8>) -> Result<()> { (**self).put(color) }
  fn finish(&mut self) -> Result<()> { (**self).finish() }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
  fn begin(&mut self, size: Size2D<u32, PixelSpace>) -> Result<()> { (**self).begin(size) }
  fn put(&mut self, color: Rgb<u8>) -> Result<()> { (**self).put(color) }
  fn finish(&mut self) -> Result<()> { (**self).finish() }
}

/// Walk rows top to bottom, columns left to right, and emit
/// `colorer(1 - count / normalization)` for every cell.
pub fn render(
  histogram: &Histogram,
  normalization: f64,
  colorer: Colorer,
  sink: &mut impl Sink
) -> Result<()> {
  let size = histogram.size();
  sink.begin(size)?;
  itertools::iproduct!(0..size.height as usize, 0..size.width as usize)
    .map(|(y, x)| histogram.as_slice()[x + y * size.width as usize])
    .try_for_each(|count| sink.put(colorer.map(histogram::intensity(count, normalization))))?;
  sink.finish()
}

/// Collects pixels in memory, mostly useful for inspecting a render.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Pixels {
  pub size: Size2D<u32, PixelSpace>,
  pub data: Vec<Rgb<u8>>,
  pub finished: bool
}

impl Sink for Pixels {
  fn begin(&mut self, size: Size2D<u32, PixelSpace>) -> Result<()> {
    self.size = size;
    self.data.clear();
    self.data.reserve(size.width as usize * size.height as usize);
    Ok(())
  }

  fn put(&mut self, color: Rgb<u8>) -> Result<()> {
    self.data.push(color);
    Ok(())
  }

  fn finish(&mut self) -> Result<()> {
    self.finished = true;
    Ok(())
  }
}

impl Pixels {
  pub fn bytes(&self) -> Vec<u8> {
    self.data.iter().flat_map(|c| c.0).collect()
  }
}
