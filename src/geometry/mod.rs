//! Coordinate spaces and the projection of the fern's plane onto a raster.
//!
//! Two coordinate bases are in use: the continuous plane the fern lives in ([`WorldSpace`]),
//! and the raster grid ([`PixelSpace`]). The origin of the raster is in the top-left corner,
//! so the plane's `y` axis is flipped by the projection.

use euclid::{Box2D, Point2D, Size2D, Vector2D as V2};


/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelSpace;
/// Plane coordinate basis
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldSpace;

/// Bounding box of the attractor of the default transform set, rounded outward.
///
/// The tip is the fixed point of the leaflet map, `y = 1.6 / 0.158`.
pub fn fern_bounds() -> Box2D<f64, WorldSpace> {
  Box2D::new(
    Point2D::new(-2.24, 0.0),
    Point2D::new(2.66, 10.13)
  )
}

/// Affine scale-and-shift from the plane onto a canvas.
///
/// `pixel = shift + scale * point`, component-wise, then truncated toward zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
  pub scale: V2<f64, PixelSpace>,
  pub shift: V2<f64, PixelSpace>,
  pub size: Size2D<u32, PixelSpace>
}

impl Projection {
  /// Fit [`fern_bounds`] inside a canvas of the given size.
  pub fn for_canvas(size: Size2D<u32, PixelSpace>) -> Self {
    let (w, h) = (size.width as f64, size.height as f64);
    Self {
      scale: V2::new(0.195 * w, -0.090 * h),
      shift: V2::new(0.450 * w, 0.940 * h),
      size
    }
  }

  /// Continuous pixel coordinates, before truncation.
  pub fn project(&self, point: Point2D<f64, WorldSpace>) -> Point2D<f64, PixelSpace> {
    (self.shift + point.to_vector().cast_unit().component_mul(self.scale)).to_point()
  }

  /// Negative coordinates and NaN saturate to 0, the `as` cast semantics.
  pub fn to_pixel(&self, point: Point2D<f64, WorldSpace>) -> Point2D<u32, PixelSpace> {
    let p = self.project(point);
    Point2D::new(p.x as u32, p.y as u32)
  }

  /// Row-major index `x + y * width` of the pixel a point falls into.
  /// No bounds validation is performed, see [`contains`].
  pub fn point_to_pixel(&self, point: Point2D<f64, WorldSpace>) -> usize {
    pixel_index(self.to_pixel(point), self.size)
  }
}

pub fn contains(pixel: Point2D<u32, PixelSpace>, size: Size2D<u32, PixelSpace>) -> bool {
  pixel.x < size.width && pixel.y < size.height
}

pub fn pixel_index(pixel: Point2D<u32, PixelSpace>, size: Size2D<u32, PixelSpace>) -> usize {
  pixel.x as usize + pixel.y as usize * size.width as usize
}

pub fn index_to_pixel(index: usize, size: Size2D<u32, PixelSpace>) -> Point2D<u32, PixelSpace> {
  let width = size.width as usize;
  Point2D::new((index % width) as u32, (index / width) as u32)
}
