//! Spiky blobs: irregular closed outlines sampled radially around a center.
//!
//! The outline is a sweep of `spikes` equally spaced angles over one full turn, the first at
//! `0` and the last at exactly `2π`, so the contour closes on itself. Each sample has its own
//! radius `r · (1 + jitter · g)` with `g` standard normal: most samples stay near the base
//! radius, a few shoot out as spikes. No smoothing is applied.

use {
  rand::Rng,
  std::f64::consts::TAU,
  crate::{
    error::{Result, invalid},
    geometry::{P2, Polygon},
    random::standard_normal
  }
};


/// Upper bound on vertices per blob.
pub const MAX_SPIKES: usize = 100_000;

/// One angular sample of a blob outline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PolarSample {
  pub angle: f64,
  pub radius: f64
}

#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
  pub center: P2,
  pub samples: Vec<PolarSample>
}

impl Blob {
  pub fn vertices(&self) -> impl Iterator<Item = P2> + '_ {
    self.samples.iter().map(|PolarSample { angle, radius }| P2::new(
      self.center.x + radius * angle.cos(),
      self.center.y + radius * angle.sin()
    ))
  }

  pub fn to_polygon(&self) -> Polygon {
    Polygon::new(self.vertices().collect())
  }
}

/// Sample a spiky blob of `spikes` vertices around `center`.
///
/// Rejects a negative `base_radius` (it would mirror the outline through the center),
/// a negative `jitter` and fewer than 3 spikes.
pub fn spiky_blob<R: Rng + ?Sized>(
  center: P2,
  base_radius: f64,
  spikes: usize,
  jitter: f64,
  rng: &mut R
) -> Result<Blob> {
  if !(base_radius.is_finite() && base_radius >= 0.0) {
    invalid!("blob radius must be finite and non-negative, got {}", base_radius);
  }
  if !(jitter.is_finite() && jitter >= 0.0) {
    invalid!("blob jitter must be finite and non-negative, got {}", jitter);
  }
  if !(3..=MAX_SPIKES).contains(&spikes) {
    invalid!("blob needs between 3 and {} spikes, got {}", MAX_SPIKES, spikes);
  }
  if !(center.x.is_finite() && center.y.is_finite()) {
    invalid!("blob center must be finite, got {:?}", center);
  }

  let step = TAU / (spikes - 1) as f64;
  let samples = (0..spikes)
    .map(|i| PolarSample {
      angle: if i == spikes - 1 { TAU } else { i as f64 * step },
      radius: base_radius * (1.0 + jitter * standard_normal(rng))
    })
    .collect();

  Ok(Blob { center, samples })
}
