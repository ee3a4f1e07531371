use {
  super::Sink,
  crate::geometry::{self, PixelSpace},
  anyhow::{bail, Result},
  euclid::Size2D,
  image::{Rgb, RgbImage},
};

/// Fills an [`RgbImage`] in raster order, for encoders provided by the `image` crate.
#[derive(Debug, Clone, Default)]
pub struct ImageSink {
  image: RgbImage,
  cursor: usize
}

impl ImageSink {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn image(&self) -> &RgbImage {
    &self.image
  }

  pub fn into_image(self) -> RgbImage {
    self.image
  }
}

impl Sink for ImageSink {
  fn begin(&mut self, size: Size2D<u32, PixelSpace>) -> Result<()> {
    self.image = RgbImage::new(size.width, size.height);
    self.cursor = 0;
    Ok(())
  }

  fn put(&mut self, color: Rgb<u8>) -> Result<()> {
    let (w, h) = self.image.dimensions();
    if self.cursor >= w as usize * h as usize {
      bail!("pixel #{} is outside of {}x{} image", self.cursor, w, h);
    }
    let pixel = geometry::index_to_pixel(self.cursor, Size2D::new(w, h));
    self.image.put_pixel(pixel.x, pixel.y, color);
    self.cursor += 1;
    Ok(())
  }

  fn finish(&mut self) -> Result<()> {
    let (w, h) = self.image.dimensions();
    if self.cursor != w as usize * h as usize {
      bail!("image of {}x{} received {} pixels", w, h, self.cursor);
    }
    Ok(())
  }
}
