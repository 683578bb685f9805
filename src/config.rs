//! Layered configuration: style defaults, then a RON file, then command-line overrides.
//!
//! Every field is optional; an unset field keeps the value of the layer below.
//! ```
//! # use generative_poster::{config::PosterConfig, palette::Style};
//! let config = PosterConfig::from_ron(r#"
//!   #![enable(implicit_some)]
//!   (style: pastel, seed: 7, radius: (1.0, 2.0))
//! "#).unwrap();
//! let params = config.render_parameters();
//! assert_eq!(params.style, Style::Pastel);
//! assert_eq!(params.seed, Some(7));
//! assert_eq!((params.min_radius, params.max_radius), (1.0, 2.0));
//! ```

use {
  std::path::{Path, PathBuf},
  euclid::Box2D,
  serde::{Deserialize, Serialize},
  crate::{
    error::{Error, Result},
    geometry::P2,
    palette::{CenterDistribution, Palette, Stroke, Style},
    params::{RenderParameters, TitleText}
  }
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PosterConfig {
  pub style: Option<Style>,
  pub seed: Option<u64>,
  pub layers: Option<usize>,
  pub radius: Option<(f64, f64)>,
  pub wobble: Option<(f64, f64)>,
  pub spikes: Option<usize>,
  pub centers: Option<CenterDistribution>,
  pub palette: Option<Palette>,
  pub stroke: Option<Stroke>,
  /// Visible window as `(min_x, min_y, max_x, max_y)`.
  pub window: Option<(f64, f64, f64, f64)>,
  pub titles: Option<Vec<TitleText>>,
  pub figure_inches: Option<f64>,
  pub dpi: Option<f64>,
  pub font: Option<PathBuf>,
  pub output: Option<PathBuf>
}

impl PosterConfig {
  pub fn from_ron(source: &str) -> Result<Self> {
    Ok(ron::from_str(source)?)
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    Self::from_ron(&source)
      .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
  }

  /// Fields set in `over` replace the ones in `self`.
  pub fn merge(self, over: PosterConfig) -> PosterConfig {
    PosterConfig {
      style: over.style.or(self.style),
      seed: over.seed.or(self.seed),
      layers: over.layers.or(self.layers),
      radius: over.radius.or(self.radius),
      wobble: over.wobble.or(self.wobble),
      spikes: over.spikes.or(self.spikes),
      centers: over.centers.or(self.centers),
      palette: over.palette.or(self.palette),
      stroke: over.stroke.or(self.stroke),
      window: over.window.or(self.window),
      titles: over.titles.or(self.titles),
      figure_inches: over.figure_inches.or(self.figure_inches),
      dpi: over.dpi.or(self.dpi),
      font: over.font.or(self.font),
      output: over.output.or(self.output)
    }
  }

  /// Style defaults with every set field applied. Not validated yet.
  pub fn render_parameters(&self) -> RenderParameters {
    let mut params = RenderParameters::for_style(self.style.unwrap_or_default())
      .with_seed(self.seed);
    if let Some(layers) = self.layers { params.layers = layers; }
    if let Some((min, max)) = self.radius { params = params.with_radius(min, max); }
    if let Some((min, max)) = self.wobble { params = params.with_wobble(min, max); }
    if let Some(spikes) = self.spikes { params.spikes = spikes; }
    if let Some(centers) = self.centers { params.centers = centers; }
    if let Some(palette) = &self.palette { params.palette = palette.clone(); }
    if let Some(stroke) = self.stroke { params.stroke = Some(stroke); }
    if let Some((x0, y0, x1, y1)) = self.window {
      params.window = Box2D::new(P2::new(x0, y0), P2::new(x1, y1));
    }
    if let Some(titles) = &self.titles { params.titles = titles.clone(); }
    params
  }

  #[cfg(feature = "drawing")]
  pub fn render_options(&self) -> crate::drawing::RenderOptions {
    let defaults = crate::drawing::RenderOptions::default();
    crate::drawing::RenderOptions {
      figure_inches: self.figure_inches.unwrap_or(defaults.figure_inches),
      dpi: self.dpi.unwrap_or(defaults.dpi),
      ..defaults
    }
  }
}
