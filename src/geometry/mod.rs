//! .
//!
//! World coordinates follow the poster: origin in the center, y axis pointing up.
//! Pixel coordinates follow the image: origin in top-left corner, y axis pointing down.

use euclid::{Box2D, Point2D, Size2D, Vector2D as V2};

pub mod polygon;
pub use polygon::*;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelSpace;
/// Poster coordinate basis
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldSpace;

pub type P2 = Point2D<f64, WorldSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Maps the visible poster window onto a pixel canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
  pub window: Box2D<f64, WorldSpace>,
  pub resolution: Size2D<u32, PixelSpace>
}

impl Viewport {
  pub fn new(window: Box2D<f64, WorldSpace>, resolution: Size2D<u32, PixelSpace>) -> Self {
    Self { window, resolution }
  }

  /// Pixels per world unit, along each axis.
  pub fn scale(&self) -> V2<f64, PixelSpace> {
    V2::new(
      self.resolution.width as f64 / self.window.width(),
      self.resolution.height as f64 / self.window.height()
    )
  }

  pub fn to_pixel(&self, point: P2) -> Point2D<f64, PixelSpace> {
    let scale = self.scale();
    Point2D::new(
      (point.x - self.window.min.x) * scale.x,
      (self.window.max.y - point.y) * scale.y
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn viewport() -> Viewport {
    Viewport::new(
      Box2D::new(P2::splat(-7.0), P2::splat(7.0)),
      Size2D::new(1400, 1400)
    )
  }

  #[test] fn corners_map_to_image_corners() {
    let vp = viewport();
    assert_eq!(vp.to_pixel(P2::new(-7.0, 7.0)), Point2D::new(0.0, 0.0));
    assert_eq!(vp.to_pixel(P2::new(7.0, -7.0)), Point2D::new(1400.0, 1400.0));
    assert_eq!(vp.to_pixel(P2::origin()), Point2D::new(700.0, 700.0));
  }

  #[test] fn y_axis_points_up() {
    let vp = viewport();
    let title = vp.to_pixel(P2::new(-6.0, 6.3));
    assert!((title.x - 100.0).abs() < 1e-9 && (title.y - 70.0).abs() < 1e-9);
    assert!(vp.to_pixel(P2::new(0.0, 1.0)).y < vp.to_pixel(P2::new(0.0, -1.0)).y);
    assert_eq!(vp.scale(), V2::new(100.0, 100.0));
  }
}
