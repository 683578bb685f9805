use {
  super::{BoundingBox, WorldSpace},
  euclid::{Box2D, Point2D}
};

/// Closed polygon: the last vertex connects back to the first.
/// May be non-convex and self-intersecting.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<S = WorldSpace> {
  vertices: Vec<Point2D<f64, S>>
}

impl<S> Polygon<S> {
  pub fn new(vertices: Vec<Point2D<f64, S>>) -> Self {
    Self { vertices }
  }

  pub fn vertices(&self) -> &[Point2D<f64, S>] {
    &self.vertices
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// All edges, including the closing one.
  pub fn edges(&self) -> impl Iterator<Item = (Point2D<f64, S>, Point2D<f64, S>)> + '_ {
    self.vertices.iter()
      .zip(self.vertices.iter().cycle().skip(1))
      .map(|(a, b)| (*a, *b))
  }

  /// Apply a point transformation, e.g. into another coordinate space.
  pub fn map<S2>(&self, f: impl Fn(Point2D<f64, S>) -> Point2D<f64, S2>) -> Polygon<S2> {
    Polygon::new(self.vertices.iter().map(|p| f(*p)).collect())
  }
}

impl<S> BoundingBox<f64, S> for Polygon<S> {
  fn bounding_box(&self) -> Box2D<f64, S> {
    Box2D::from_points(self.vertices.iter().copied())
  }
}
