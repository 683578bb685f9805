//! Title text, rasterized with fontdue.
//!
//! Faces are picked by weight and style. A family without a bold or italic face falls back to
//! its regular face, emboldened by repeated strikes or slanted by a shear.

use {
  std::path::{Path, PathBuf},
  fontdue::{Font, FontSettings},
  image::RgbaImage,
  crate::{
    error::{Error, Result},
    geometry::Viewport,
    palette::Color,
    params::{FontStyle, FontWeight, TitleText}
  },
  super::blend_coverage
};

/// Horizontal shift per pixel of height above the baseline, for synthetic oblique.
const OBLIQUE_SHEAR: f32 = 0.2;

static FONT_DIRS: [&str; 6] = [
  "/usr/share/fonts/TTF",
  "/usr/share/fonts/truetype/dejavu",
  "/usr/share/fonts/dejavu",
  "/usr/share/fonts/truetype/liberation",
  "/usr/share/fonts/liberation",
  "/Library/Fonts",
];

/// Regular, bold, italic and bold italic file names of each known family.
static FAMILIES: [[&str; 4]; 3] = [
  ["DejaVuSans.ttf", "DejaVuSans-Bold.ttf", "DejaVuSans-Oblique.ttf", "DejaVuSans-BoldOblique.ttf"],
  ["LiberationSans-Regular.ttf", "LiberationSans-Bold.ttf", "LiberationSans-Italic.ttf", "LiberationSans-BoldItalic.ttf"],
  ["Arial.ttf", "Arial Bold.ttf", "Arial Italic.ttf", "Arial Bold Italic.ttf"],
];

/// One font family: a regular face plus whichever styled faces were found.
pub struct FontSet {
  regular: Font,
  bold: Option<Font>,
  italic: Option<Font>,
  bold_italic: Option<Font>
}

impl std::fmt::Debug for FontSet {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FontSet")
      .field("regular", &self.regular.name())
      .field("bold", &self.bold.is_some())
      .field("italic", &self.italic.is_some())
      .field("bold_italic", &self.bold_italic.is_some())
      .finish()
  }
}

fn parse_font(bytes: &[u8]) -> Result<Font> {
  Font::from_bytes(bytes, FontSettings::default())
    .map_err(|e| Error::Font(e.to_string()))
}

fn load_font(path: &Path) -> Result<Font> {
  let bytes = std::fs::read(path)?;
  parse_font(&bytes).map_err(|e| Error::Font(format!("{}: {}", path.display(), e)))
}

impl FontSet {
  /// A family with only a regular face.
  pub fn from_bytes(regular: &[u8]) -> Result<Self> {
    Ok(Self { regular: parse_font(regular)?, bold: None, italic: None, bold_italic: None })
  }

  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let regular = load_font(path.as_ref())?;
    Ok(Self { regular, bold: None, italic: None, bold_italic: None })
  }

  /// Look for a known sans-serif family in the usual system font directories.
  pub fn discover() -> Option<Self> {
    FONT_DIRS.iter()
      .flat_map(|dir| FAMILIES.iter().map(move |family| (Path::new(dir), family)))
      .find_map(|(dir, [regular, bold, italic, bold_italic])| {
        let regular = load_font(&dir.join(regular)).ok()?;
        let styled = |name: &str| -> Option<Font> {
          let path: PathBuf = dir.join(name);
          path.is_file().then(|| load_font(&path).ok()).flatten()
        };
        let set = Self {
          regular,
          bold: styled(bold),
          italic: styled(italic),
          bold_italic: styled(bold_italic)
        };
        log::debug!("using fonts from {}: {:?}", dir.display(), set);
        Some(set)
      })
  }

  /// Face for the requested style, and whether bold and oblique must be synthesized.
  fn face(&self, weight: FontWeight, style: FontStyle) -> (&Font, bool, bool) {
    match (weight, style) {
      (FontWeight::Normal, FontStyle::Normal) => (&self.regular, false, false),
      (FontWeight::Bold, FontStyle::Normal) => match &self.bold {
        Some(font) => (font, false, false),
        None => (&self.regular, true, false)
      },
      (FontWeight::Normal, FontStyle::Italic) => match &self.italic {
        Some(font) => (font, false, false),
        None => (&self.regular, false, true)
      },
      (FontWeight::Bold, FontStyle::Italic) => match (&self.bold_italic, &self.bold, &self.italic) {
        (Some(font), _, _) => (font, false, false),
        (None, Some(font), _) => (font, false, true),
        (None, None, Some(font)) => (font, true, false),
        (None, None, None) => (&self.regular, true, true)
      }
    }
  }

  /// Draw `title` with its left/top corner at the title's anchor.
  pub fn draw_title(
    &self,
    image: &mut RgbaImage,
    title: &TitleText,
    viewport: &Viewport,
    pixels_per_point: f64,
    color: Color
  ) {
    let px = (title.size * pixels_per_point) as f32;
    let (font, fake_bold, fake_oblique) = self.face(title.weight, title.style);
    let anchor = viewport.to_pixel(title.anchor());
    let ascent = font.horizontal_line_metrics(px)
      .map(|m| m.ascent)
      .unwrap_or(px * 0.8);
    let baseline = anchor.y as f32 + ascent;
    let strikes = if fake_bold { (px / 24.0).round().max(1.0) as i32 } else { 0 };
    let shear = if fake_oblique { OBLIQUE_SHEAR } else { 0.0 };

    // glyph coverage is merged into one mask first, so overlapping strikes don't double up
    let (width, height) = image.dimensions();
    let mut mask = std::collections::HashMap::<(u32, u32), f32>::new();
    let mut pen = anchor.x as f32;
    let mut previous = None;

    for ch in title.text.chars() {
      if let Some(previous) = previous {
        pen += font.horizontal_kern(previous, ch, px).unwrap_or(0.0);
      }
      let (metrics, bitmap) = font.rasterize(ch, px);
      let left = pen + metrics.xmin as f32;
      let top = baseline - (metrics.height as i32 + metrics.ymin) as f32;

      for (i, coverage) in bitmap.iter().enumerate().filter(|(_, c)| **c > 0) {
        let (row, col) = (i / metrics.width, i % metrics.width);
        let y = top + row as f32;
        let x = left + col as f32 + shear * (baseline - y);
        for strike in 0..=strikes {
          let (x, y) = ((x + strike as f32).round(), y.round());
          if x < 0.0 || y < 0.0 || x >= width as f32 || y >= height as f32 {
            continue;
          }
          let cell = mask.entry((x as u32, y as u32)).or_insert(0.0);
          *cell = cell.max(*coverage as f32 / 255.0);
        }
      }
      pen += metrics.advance_width + strikes as f32;
      previous = Some(ch);
    }

    let color = color.to_rgba8();
    mask.into_iter()
      .for_each(|((x, y), coverage)| blend_coverage(image.get_pixel_mut(x, y), color, coverage as f64));
  }
}
