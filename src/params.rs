//! Per-request configuration of a poster.

use {
  euclid::Box2D,
  serde::{Deserialize, Serialize},
  crate::{
    blob::MAX_SPIKES,
    error::{Result, invalid},
    geometry::{P2, WorldSpace},
    palette::{CenterDistribution, Palette, Stroke, Style}
  }
};

/// Upper bound on blobs per poster.
pub const MAX_LAYERS: usize = 100_000;
/// Upper bound on title font size, in points.
pub const MAX_TITLE_SIZE: f64 = 500.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
  #[default]
  Normal,
  Bold
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
  #[default]
  Normal,
  Italic
}

/// Static text laid over the poster, anchored at its left/top corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleText {
  pub text: String,
  /// Anchor in poster coordinates.
  pub position: (f64, f64),
  /// Font size in points.
  pub size: f64,
  #[serde(default)]
  pub weight: FontWeight,
  #[serde(default)]
  pub style: FontStyle
}

impl TitleText {
  pub fn anchor(&self) -> P2 {
    P2::new(self.position.0, self.position.1)
  }

  pub fn default_titles() -> Vec<TitleText> {
    vec![
      TitleText {
        text: "Generative Poster".into(),
        position: (-6.0, 6.3),
        size: 26.0,
        weight: FontWeight::Bold,
        style: FontStyle::Normal
      },
      TitleText {
        text: "Week 3 • Arts & Advanced Big Data".into(),
        position: (-6.0, 5.6),
        size: 16.0,
        weight: FontWeight::Normal,
        style: FontStyle::Italic
      }
    ]
  }
}

/// Everything one poster generation depends on.
///
/// Built fresh per request from [`Style`] defaults, see [`RenderParameters::for_style`].
/// Call [`validate`](RenderParameters::validate) before generating.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParameters {
  pub style: Style,
  /// `None` draws from OS entropy; `Some(0)` is an ordinary seed.
  pub seed: Option<u64>,
  pub layers: usize,
  pub min_radius: f64,
  pub max_radius: f64,
  pub min_wobble: f64,
  pub max_wobble: f64,
  pub spikes: usize,
  pub centers: CenterDistribution,
  pub palette: Palette,
  pub stroke: Option<Stroke>,
  /// Visible part of the poster plane.
  pub window: Box2D<f64, WorldSpace>,
  pub titles: Vec<TitleText>
}

impl Default for RenderParameters {
  fn default() -> Self {
    Self::for_style(Style::default())
  }
}

impl RenderParameters {
  pub fn for_style(style: Style) -> Self {
    let preset = style.preset();
    Self {
      style,
      seed: None,
      layers: preset.layers,
      min_radius: preset.radius.0,
      max_radius: preset.radius.1,
      min_wobble: preset.wobble.0,
      max_wobble: preset.wobble.1,
      spikes: preset.spikes,
      centers: preset.centers,
      palette: preset.palette,
      stroke: preset.stroke,
      window: Box2D::new(P2::splat(-7.0), P2::splat(7.0)),
      titles: TitleText::default_titles()
    }
  }

  pub fn with_seed(self, seed: Option<u64>) -> Self {
    Self { seed, ..self }
  }

  pub fn with_layers(self, layers: usize) -> Self {
    Self { layers, ..self }
  }

  pub fn with_radius(self, min_radius: f64, max_radius: f64) -> Self {
    Self { min_radius, max_radius, ..self }
  }

  pub fn with_wobble(self, min_wobble: f64, max_wobble: f64) -> Self {
    Self { min_wobble, max_wobble, ..self }
  }

  pub fn with_spikes(self, spikes: usize) -> Self {
    Self { spikes, ..self }
  }

  pub fn with_centers(self, centers: CenterDistribution) -> Self {
    Self { centers, ..self }
  }

  /// Reject configurations that would produce degenerate output.
  pub fn validate(&self) -> Result<()> {
    check_range("radius", self.min_radius, self.max_radius)?;
    check_range("wobble", self.min_wobble, self.max_wobble)?;
    if !(3..=MAX_SPIKES).contains(&self.spikes) {
      invalid!("spike count must lie in 3..={}, got {}", MAX_SPIKES, self.spikes);
    }
    if self.layers > MAX_LAYERS {
      invalid!("layer count must not exceed {}, got {}", MAX_LAYERS, self.layers);
    }
    match self.centers {
      CenterDistribution::Uniform { min, max } => {
        if !(min.is_finite() && max.is_finite() && min <= max) {
          invalid!("center range is inverted or not finite: [{}, {}]", min, max);
        }
      }
      CenterDistribution::Gaussian { mean, std_dev } => {
        if !(mean.is_finite() && std_dev.is_finite() && std_dev >= 0.0) {
          invalid!("center distribution needs a finite mean and non-negative deviation, \
            got mean {} and deviation {}", mean, std_dev);
        }
      }
    }
    self.palette.validate()?;
    if let Some(stroke) = self.stroke {
      stroke.color.validate()?;
      if !(stroke.width.is_finite() && stroke.width >= 0.0) {
        invalid!("stroke width must be finite and non-negative, got {}", stroke.width);
      }
    }
    let w = self.window;
    if ![w.min.x, w.min.y, w.max.x, w.max.y].into_iter().all(f64::is_finite)
      || w.is_empty() {
      invalid!("canvas window must be finite and non-empty, got {:?}", w);
    }
    for title in &self.titles {
      if !(title.size.is_finite() && title.size > 0.0 && title.size <= MAX_TITLE_SIZE) {
        invalid!("title '{}' needs a font size in (0, {}] pt, got {}", title.text, MAX_TITLE_SIZE, title.size);
      }
      if !(title.position.0.is_finite() && title.position.1.is_finite()) {
        invalid!("title '{}' has a non-finite position", title.text);
      }
    }
    Ok(())
  }
}

fn check_range(name: &str, min: f64, max: f64) -> Result<()> {
  if !(min.is_finite() && max.is_finite()) {
    invalid!("{} bounds must be finite, got [{}, {}]", name, min, max);
  }
  if min < 0.0 {
    invalid!("{} must be non-negative, got minimum {}", name, min);
  }
  if min > max {
    invalid!("{} range is inverted: min {} > max {}", name, min, max);
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{error::Error, palette::Color};

  #[test] fn style_defaults_are_valid() {
    for style in Style::ALL {
      RenderParameters::for_style(style).validate().unwrap();
    }
  }

  #[test] fn complex_defaults() {
    let params = RenderParameters::default();
    assert_eq!(params.style, Style::Complex);
    assert_eq!(params.seed, None);
    assert_eq!(params.layers, 110);
    assert_eq!((params.min_radius, params.max_radius), (3.0, 4.0));
    assert_eq!((params.min_wobble, params.max_wobble), (0.3, 0.6));
    assert_eq!(params.spikes, 260);
    assert_eq!(params.window, Box2D::new(P2::splat(-7.0), P2::splat(7.0)));
    assert_eq!(params.titles.len(), 2);
  }

  #[test] fn seed_zero_is_kept() {
    assert_eq!(RenderParameters::default().with_seed(Some(0)).seed, Some(0));
  }

  #[test] fn rejects_bad_ranges() {
    let base = RenderParameters::default();
    let bad = [
      base.clone().with_radius(4.0, 3.0),
      base.clone().with_radius(-1.0, 3.0),
      base.clone().with_radius(1.0, f64::INFINITY),
      base.clone().with_wobble(0.6, 0.3),
      base.clone().with_spikes(2),
      base.clone().with_spikes(usize::MAX),
      base.clone().with_spikes(MAX_SPIKES + 1),
      base.clone().with_layers(usize::MAX),
      RenderParameters {
        titles: vec![TitleText { size: 1e6, ..TitleText::default_titles().remove(0) }],
        ..base.clone()
      },
      RenderParameters {
        titles: vec![TitleText { size: 0.0, ..TitleText::default_titles().remove(0) }],
        ..base.clone()
      },
      base.clone().with_centers(CenterDistribution::Uniform { min: 1.0, max: -1.0 }),
      base.clone().with_centers(CenterDistribution::Gaussian { mean: 0.0, std_dev: -0.5 }),
      RenderParameters { palette: Palette(vec![]), ..base.clone() },
      RenderParameters { palette: Palette(vec![Color::rgba(2.0, 0.0, 0.0, 1.0)]), ..base.clone() },
      RenderParameters { window: Box2D::new(P2::splat(1.0), P2::splat(1.0)), ..base.clone() },
      RenderParameters {
        stroke: Some(Stroke { color: Color::BLACK, width: -1.0 }),
        ..base.clone()
      },
    ];
    for params in bad {
      assert!(
        matches!(params.validate(), Err(Error::InvalidParameter(_))),
        "accepted {:?}", params
      );
    }
  }

  #[test] fn size_limits_are_inclusive() {
    let title = TitleText { size: MAX_TITLE_SIZE, ..TitleText::default_titles().remove(0) };
    RenderParameters { titles: vec![title], ..RenderParameters::default() }
      .with_spikes(MAX_SPIKES)
      .with_layers(MAX_LAYERS)
      .validate()
      .unwrap();
  }

  #[test] fn degenerate_ranges_are_fine() {
    RenderParameters::default()
      .with_layers(0)
      .with_radius(2.0, 2.0)
      .with_wobble(0.0, 0.0)
      .validate()
      .unwrap();
  }
}
