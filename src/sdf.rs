use {
  euclid::{Box2D, Point2D, Vector2D as V2},
  crate::geometry::{BoundingBox, WorldSpace}
};

/// Signed distance function
pub trait SDF<T, S = WorldSpace> {
  fn sdf(&self, pixel: Point2D<T, S>) -> T;
}

/// Line segment from `a` to `b`, thickened by `radius`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Capsule<S> {
  pub a: Point2D<f64, S>,
  pub b: Point2D<f64, S>,
  pub radius: f64
}

impl<S> SDF<f64, S> for Capsule<S> {
  fn sdf(&self, pixel: Point2D<f64, S>) -> f64 {
    let pa: V2<f64, S> = pixel - self.a;
    let ba: V2<f64, S> = self.b - self.a;
    let len2 = ba.square_length();
    let h = if len2 > 0.0 {
      (pa.dot(ba) / len2).clamp(0.0, 1.0)
    } else {
      0.0
    };
    (pa - ba * h).length() - self.radius
  }
}

impl<S> BoundingBox<f64, S> for Capsule<S> {
  fn bounding_box(&self) -> Box2D<f64, S> {
    Box2D::from_points([self.a, self.b])
      .inflate(self.radius, self.radius)
  }
}
