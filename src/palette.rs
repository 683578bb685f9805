//! Colors, palettes and the closed set of poster styles.

use {
  rand::{Rng, seq::SliceRandom},
  serde::{Deserialize, Serialize},
  crate::error::{Result, invalid}
};

/// RGBA color, every channel in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
  pub r: f64,
  pub g: f64,
  pub b: f64,
  pub a: f64
}

impl Color {
  pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
  pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);

  pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
    Self { r, g, b, a }
  }

  pub fn validate(&self) -> Result<()> {
    let in_unit = |c: f64| (0.0..=1.0).contains(&c);
    if ![self.r, self.g, self.b, self.a].into_iter().all(in_unit) {
      invalid!("color channels must lie in [0, 1], got {:?}", self);
    }
    Ok(())
  }

  /// 8-bit straight alpha channels.
  pub fn to_rgba8(&self) -> [u8; 4] {
    [self.r, self.g, self.b, self.a]
      .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
  }
}

/// Ordered set of colors belonging to one style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(pub Vec<Color>);

impl Palette {
  pub fn colors(&self) -> &[Color] {
    &self.0
  }

  pub fn validate(&self) -> Result<()> {
    if self.0.is_empty() {
      invalid!("palette must contain at least one color");
    }
    self.0.iter().try_for_each(Color::validate)
  }

  /// Uniform draw with replacement.
  /// Returns `None` only for an empty palette, which validation rejects.
  pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Color> {
    self.0.choose(rng).copied()
  }
}

/// How blob centers are scattered over the poster.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum CenterDistribution {
  /// x and y independently uniform in `[min, max]`.
  Uniform { min: f64, max: f64 },
  /// x and y independently normal, clustering toward `mean`.
  Gaussian { mean: f64, std_dev: f64 }
}

/// Thin outline drawn around every blob.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
  pub color: Color,
  /// Line width in points.
  pub width: f64
}

/// Visual style of a poster: its palette and the defaults of the randomization.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
  /// Vivid green and purple tones, dense overlap around the center.
  #[default]
  Complex,
  /// Saturated primaries, few spread-out blobs with a white outline.
  Vivid,
  /// Soft pastels, many layers with wide scatter.
  Pastel
}

/// Per-style defaults, see [`Style::preset`].
#[derive(Debug, Clone, PartialEq)]
pub struct StylePreset {
  pub palette: Palette,
  pub layers: usize,
  pub radius: (f64, f64),
  pub wobble: (f64, f64),
  pub spikes: usize,
  pub centers: CenterDistribution,
  pub stroke: Option<Stroke>
}

impl Style {
  pub const ALL: [Style; 3] = [Style::Complex, Style::Vivid, Style::Pastel];

  pub fn name(&self) -> &'static str {
    match self {
      Style::Complex => "complex",
      Style::Vivid => "vivid",
      Style::Pastel => "pastel"
    }
  }

  pub fn preset(&self) -> StylePreset {
    match self {
      Style::Complex => StylePreset {
        palette: Palette(vec![
          Color::rgba(0.22, 0.85, 0.22, 0.70), // vivid green
          Color::rgba(0.36, 0.95, 0.36, 0.55), // light green
          Color::rgba(0.62, 0.18, 0.78, 0.55), // magenta-purple
          Color::rgba(0.48, 0.14, 0.65, 0.50), // deep purple
          Color::rgba(0.55, 0.62, 0.62, 0.40), // gray-green
          Color::rgba(0.28, 0.72, 0.52, 0.45), // teal
        ]),
        layers: 110,
        radius: (3.0, 4.0),
        wobble: (0.3, 0.6),
        spikes: 260,
        centers: CenterDistribution::Gaussian { mean: 0.0, std_dev: 0.5 },
        stroke: None
      },
      Style::Vivid => StylePreset {
        palette: Palette(vec![
          Color::rgba(0.95, 0.20, 0.25, 0.60),
          Color::rgba(1.00, 0.75, 0.10, 0.60),
          Color::rgba(0.10, 0.55, 0.95, 0.55),
          Color::rgba(0.15, 0.80, 0.45, 0.55),
          Color::rgba(0.60, 0.20, 0.85, 0.50),
        ]),
        layers: 60,
        radius: (1.0, 2.5),
        wobble: (0.1, 0.4),
        spikes: 150,
        centers: CenterDistribution::Uniform { min: -3.5, max: 3.5 },
        stroke: Some(Stroke { color: Color::rgba(1.0, 1.0, 1.0, 0.35), width: 0.5 })
      },
      Style::Pastel => StylePreset {
        palette: Palette(vec![
          Color::rgba(0.98, 0.74, 0.80, 0.45),
          Color::rgba(0.70, 0.85, 0.98, 0.45),
          Color::rgba(0.78, 0.95, 0.78, 0.45),
          Color::rgba(1.00, 0.92, 0.70, 0.45),
          Color::rgba(0.85, 0.78, 0.95, 0.40),
          Color::rgba(0.95, 0.85, 0.75, 0.40),
        ]),
        layers: 180,
        radius: (1.5, 3.0),
        wobble: (0.2, 0.5),
        spikes: 200,
        centers: CenterDistribution::Gaussian { mean: 0.0, std_dev: 1.5 },
        stroke: None
      }
    }
  }
}

impl std::str::FromStr for Style {
  type Err = crate::error::Error;

  fn from_str(s: &str) -> Result<Self> {
    Style::ALL.into_iter()
      .find(|style| style.name().eq_ignore_ascii_case(s))
      .ok_or_else(|| crate::error::Error::InvalidParameter(format!(
        "unknown style '{}', expected one of: {}",
        s,
        Style::ALL.map(|style| style.name()).join(", ")
      )))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::random::rng_from_seed;

  #[test] fn presets_are_valid() {
    for style in Style::ALL {
      let preset = style.preset();
      preset.palette.validate().unwrap();
      assert!((5..=6).contains(&preset.palette.colors().len()), "{:?}", style);
      assert!(preset.radius.0 <= preset.radius.1);
      assert!(preset.wobble.0 <= preset.wobble.1);
      assert!((150..=260).contains(&preset.spikes));
    }
  }

  #[test] fn draws_stay_in_palette() {
    let mut rng = rng_from_seed(Some(3));
    let palette = Style::Complex.preset().palette;
    for _ in 0..500 {
      let c = palette.choose(&mut rng).unwrap();
      assert!(palette.colors().contains(&c));
    }
  }

  #[test] fn draws_with_replacement() {
    let mut rng = rng_from_seed(Some(3));
    let palette = Style::Vivid.preset().palette;
    let draws = (0..50).map(|_| palette.choose(&mut rng).unwrap()).collect::<Vec<_>>();
    // 50 draws from 5 colors must repeat
    assert!(draws.iter().enumerate().any(|(i, c)| draws[..i].contains(c)));
  }

  #[test] fn empty_palette_rejected() {
    assert!(Palette(vec![]).validate().is_err());
    assert!(Palette(vec![]).choose(&mut rng_from_seed(Some(0))).is_none());
  }

  #[test] fn out_of_range_color_rejected() {
    assert!(Color::rgba(1.2, 0.0, 0.0, 1.0).validate().is_err());
    assert!(Color::rgba(0.5, 0.0, 0.0, f64::NAN).validate().is_err());
    assert_eq!(Color::rgba(1.0, 0.0, 0.5, 0.0).to_rgba8(), [255, 0, 128, 0]);
  }

  #[test] fn style_from_str() {
    assert_eq!("Pastel".parse::<Style>().unwrap(), Style::Pastel);
    assert!("baroque".parse::<Style>().is_err());
  }
}
