//! Polygon fill and outline stroke.
//!
//! Fill uses scanline coverage: every pixel row is sampled at [`SUBSAMPLES`] sub-scanlines,
//! each crossing is resolved with the nonzero winding rule, and the covered spans contribute
//! their exact horizontal overlap with each pixel. Rows are independent, so they run in
//! parallel; layers still composite one after another.
//!
//! Stroke is the union of one capsule per polygon edge, resolved through the capsule SDF.

use {
  euclid::Point2D,
  image::{Pixel, Rgba, RgbaImage},
  rayon::prelude::*,
  crate::{
    geometry::{BoundingBox, PixelSpace, Polygon},
    palette::Color,
    sdf::{Capsule, SDF}
  },
  super::{Draw, Texture, blend_coverage, pixel_bounds}
};

/// Vertical samples per pixel row.
pub const SUBSAMPLES: usize = 5;

/// Outline of a polygon, `width` pixels wide and centered on its edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline<S> {
  pub polygon: Polygon<S>,
  pub width: f64
}

/// Non-horizontal edge, stored top to bottom.
#[derive(Debug, Copy, Clone)]
struct Edge {
  top: Point2D<f64, PixelSpace>,
  bottom: Point2D<f64, PixelSpace>,
  /// +1 for edges running downward in the source polygon, -1 upward.
  winding: i32
}

impl Edge {
  fn collect(polygon: &Polygon<PixelSpace>) -> Vec<Edge> {
    polygon.edges()
      .filter(|(a, b)| a.y != b.y)
      .map(|(a, b)| match a.y < b.y {
        true => Edge { top: a, bottom: b, winding: 1 },
        false => Edge { top: b, bottom: a, winding: -1 }
      })
      .collect()
  }

  /// Crossing with the horizontal line at `y`; half-open in y, so shared vertices count once.
  fn crossing(&self, y: f64) -> Option<(f64, i32)> {
    (self.top.y <= y && y < self.bottom.y).then(|| {
      let t = (y - self.top.y) / (self.bottom.y - self.top.y);
      (self.top.x + t * (self.bottom.x - self.top.x), self.winding)
    })
  }
}

/// Add `weight` times the overlap of `[a, b)` with each pixel of `coverage`,
/// whose first cell is pixel column `x0`.
fn accumulate_span(coverage: &mut [f64], x0: usize, a: f64, b: f64, weight: f64) {
  let start = x0 as f64;
  let end = (x0 + coverage.len()) as f64;
  let (a, b) = (a.max(start), b.min(end));
  if b <= a {
    return;
  }
  let (ia, ib) = (a.floor() as usize, b.floor() as usize);
  if ia == ib {
    coverage[ia - x0] += (b - a) * weight;
    return;
  }
  coverage[ia - x0] += (ia as f64 + 1.0 - a) * weight;
  coverage[ia + 1 - x0..ib - x0].iter_mut().for_each(|c| *c += weight);
  if ib < x0 + coverage.len() {
    coverage[ib - x0] += (b - ib as f64) * weight;
  }
}

/// Fill coverage of pixel row `y`, over columns `x0..x0 + coverage.len()`.
fn row_coverage(edges: &[Edge], y: u32, x0: usize, coverage: &mut [f64]) {
  let weight = 1.0 / SUBSAMPLES as f64;
  let mut crossings = Vec::new();
  for k in 0..SUBSAMPLES {
    let sample_y = y as f64 + (k as f64 + 0.5) * weight;
    crossings.clear();
    crossings.extend(edges.iter().filter_map(|edge| edge.crossing(sample_y)));
    crossings.sort_by(|a: &(f64, i32), b| a.0.total_cmp(&b.0));

    let mut winding = 0;
    for pair in crossings.windows(2) {
      winding += pair[0].1;
      if winding != 0 {
        accumulate_span(coverage, x0, pair[0].0, pair[1].0, weight);
      }
    }
  }
}

impl Draw<RgbaImage> for Texture<Polygon<PixelSpace>, Color> {
  fn draw(&self, image: &mut RgbaImage) {
    if self.shape.len() < 3 {
      return;
    }
    let bounds = match pixel_bounds(self.shape.bounding_box(), image) {
      Some(x) => x,
      None => return // no intersection with the canvas
    };
    let edges = Edge::collect(&self.shape);
    let color = self.texture.to_rgba8();
    let stride = image.width() as usize * 4;
    let (x0, x1) = (bounds.min.x as usize, bounds.max.x as usize);

    image.par_chunks_mut(stride)
      .enumerate()
      .skip(bounds.min.y as usize)
      .take(bounds.height() as usize)
      .for_each(|(y, row)| {
        let mut coverage = vec![0.0; x1 - x0];
        row_coverage(&edges, y as u32, x0, &mut coverage);
        coverage.iter()
          .enumerate()
          .filter(|(_, c)| **c > 0.0)
          .for_each(|(i, c)| {
            let x = x0 + i;
            blend_coverage(Rgba::from_slice_mut(&mut row[x * 4..x * 4 + 4]), color, *c);
          });
      });
  }
}

impl Draw<RgbaImage> for Texture<Outline<PixelSpace>, Color> {
  fn draw(&self, image: &mut RgbaImage) {
    let Outline { polygon, width } = &self.shape;
    if polygon.is_empty() || *width <= 0.0 {
      return;
    }
    let radius = width / 2.0;
    let bounds = match pixel_bounds(polygon.bounding_box().inflate(radius + 1.0, radius + 1.0), image) {
      Some(x) => x,
      None => return
    };
    let size = bounds.size();
    // max coverage over all edges, so joints are not painted twice
    let mut mask = vec![0.0f64; size.width as usize * size.height as usize];

    polygon.edges()
      .map(|(a, b)| Capsule { a, b, radius })
      .for_each(|capsule| {
        let domain = match pixel_bounds(capsule.bounding_box().inflate(1.0, 1.0), image)
          .and_then(|b| b.intersection(&bounds)) {
          Some(x) => x,
          None => return
        };
        itertools::iproduct!(domain.y_range(), domain.x_range())
          .for_each(|(y, x)| {
            let center = Point2D::new(x as f64 + 0.5, y as f64 + 0.5);
            let coverage = (0.5 - capsule.sdf(center)).clamp(0.0, 1.0);
            let cell = &mut mask[
              (y - bounds.min.y) as usize * size.width as usize + (x - bounds.min.x) as usize
            ];
            *cell = cell.max(coverage);
          });
      });

    let color = self.texture.to_rgba8();
    itertools::iproduct!(bounds.y_range(), bounds.x_range())
      .zip(mask)
      .filter(|(_, coverage)| *coverage > 0.0)
      .for_each(|((y, x), coverage)| blend_coverage(image.get_pixel_mut(x, y), color, coverage));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn span_fractions() {
    let mut cov = vec![0.0; 4];
    accumulate_span(&mut cov, 10, 10.5, 12.25, 1.0);
    assert_eq!(cov, vec![0.5, 1.0, 0.25, 0.0]);

    let mut cov = vec![0.0; 3];
    accumulate_span(&mut cov, 0, 1.25, 1.75, 0.5);
    assert_eq!(cov, vec![0.0, 0.25, 0.0]);
  }

  #[test] fn span_is_clipped() {
    let mut cov = vec![0.0; 2];
    accumulate_span(&mut cov, 5, -3.0, 100.0, 1.0);
    assert_eq!(cov, vec![1.0, 1.0]);
    accumulate_span(&mut cov, 5, 8.0, 9.0, 1.0);
    assert_eq!(cov, vec![1.0, 1.0]);
  }

  #[test] fn square_row_is_fully_covered() {
    let square = Polygon::<PixelSpace>::new(vec![
      Point2D::new(2.0, 2.0), Point2D::new(6.0, 2.0),
      Point2D::new(6.0, 6.0), Point2D::new(2.0, 6.0)
    ]);
    let edges = Edge::collect(&square);
    assert_eq!(edges.len(), 2);
    let mut cov = vec![0.0; 8];
    row_coverage(&edges, 3, 0, &mut cov);
    for (x, c) in cov.iter().enumerate() {
      let expected = if (2..6).contains(&x) { 1.0 } else { 0.0 };
      assert!((c - expected).abs() < 1e-9, "x = {}: {}", x, c);
    }
  }

  #[test] fn nonzero_winding_fills_overlap() {
    // two overlapping squares with the same orientation, traced as one contour
    let shape = Polygon::<PixelSpace>::new(vec![
      Point2D::new(0.0, 0.0), Point2D::new(4.0, 0.0), Point2D::new(4.0, 4.0),
      Point2D::new(2.0, 4.0), Point2D::new(2.0, 2.0), Point2D::new(6.0, 2.0),
      Point2D::new(6.0, 6.0), Point2D::new(2.0, 6.0), Point2D::new(2.0, 4.0),
      Point2D::new(0.0, 4.0)
    ]);
    let mut cov = vec![0.0; 6];
    row_coverage(&Edge::collect(&shape), 3, 0, &mut cov);
    assert!(cov.iter().all(|c| (c - 1.0).abs() < 1e-9), "{:?}", cov);
  }
}
