//! Composition of a poster out of many randomized blobs.
//!
//! Layers are kept in generation order: layer `i + 1` is drawn over layer `i`, and with
//! translucent colors that order is what produces the overlap effect.

use {
  euclid::Box2D,
  rand::Rng,
  crate::{
    blob::{Blob, spiky_blob},
    error::{Error, Result},
    geometry::{P2, WorldSpace},
    palette::{CenterDistribution, Color, Stroke},
    params::{RenderParameters, TitleText},
    random::{self, rng_from_seed}
  }
};

#[cfg(test)] mod tests;

/// One blob with its paint.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
  pub blob: Blob,
  pub fill: Color,
  pub stroke: Option<Stroke>
}

#[derive(Debug, Clone, PartialEq)]
pub struct Poster {
  /// Bottom to top.
  pub layers: Vec<Layer>,
  pub titles: Vec<TitleText>,
  /// Visible part of the poster plane. Shapes outside of it are kept, just not visible.
  pub window: Box2D<f64, WorldSpace>
}

/// Seed a fresh random source from `params` and [`compose`].
pub fn generate(params: &RenderParameters) -> Result<Poster> {
  let mut rng = rng_from_seed(params.seed);
  log::debug!(
    "generating {} poster: seed {:?}, {} layers",
    params.style.name(), params.seed, params.layers
  );
  compose(params, &mut rng)
}

/// Validate `params`, then compose a poster drawing all randomness from `rng`.
/// Invalid parameters are reported before anything is drawn from `rng`.
///
/// Per layer the draws happen in a fixed order: color, radius, wobble, center x, center y,
/// then the blob's own radius perturbations.
pub fn compose<R: Rng + ?Sized>(params: &RenderParameters, rng: &mut R) -> Result<Poster> {
  params.validate()?;

  let layers = (0..params.layers)
    .map(|_| -> Result<Layer> {
      let fill = params.palette.choose(rng)
        .ok_or_else(|| Error::InvalidParameter("palette is empty".into()))?;
      let radius = random::uniform(rng, params.min_radius, params.max_radius);
      let wobble = random::uniform(rng, params.min_wobble, params.max_wobble);
      let center = sample_center(params.centers, rng);
      let blob = spiky_blob(center, radius, params.spikes, wobble, rng)?;
      Ok(Layer { blob, fill, stroke: params.stroke })
    })
    .collect::<Result<Vec<_>>>()?;

  Ok(Poster {
    layers,
    titles: params.titles.clone(),
    window: params.window
  })
}

fn sample_center<R: Rng + ?Sized>(centers: CenterDistribution, rng: &mut R) -> P2 {
  match centers {
    CenterDistribution::Uniform { min, max } => {
      let x = random::uniform(rng, min, max);
      let y = random::uniform(rng, min, max);
      P2::new(x, y)
    }
    CenterDistribution::Gaussian { mean, std_dev } => {
      let x = random::normal(rng, mean, std_dev);
      let y = random::normal(rng, mean, std_dev);
      P2::new(x, y)
    }
  }
}
