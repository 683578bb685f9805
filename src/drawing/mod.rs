//! Rasterization of a [`Poster`] into an RGBA image, and PNG export.
//!
//! The poster window is mapped onto a square canvas of `figure_inches · dpi` pixels, y axis up,
//! without any axis chrome. Layers are composited strictly in order, each with straight alpha
//! blending over everything drawn before; the titles go on top.

use {
  euclid::{Box2D, Size2D},
  image::{Pixel, Rgba, RgbaImage},
  crate::{
    error::{Result, invalid},
    geometry::{PixelSpace, Polygon, Viewport},
    palette::Color,
    poster::Poster
  }
};

mod raster;
mod text;
mod export;

pub use {
  raster::Outline,
  text::FontSet,
  export::{DOWNLOAD_FILE_NAME, encode_png, tight_crop}
};

/// Canvas sizes above this are refused rather than attempted.
pub const MAX_CANVAS_SIDE: u32 = 16384;

pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

/// A shape together with its paint.
#[derive(Debug, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}

pub trait Textured: Sized {
  fn texture<T>(self, texture: T) -> Texture<Self, T> {
    Texture { shape: self, texture }
  }
}
impl<S> Textured for Polygon<S> {}
impl<S> Textured for Outline<S> {}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
  /// Side of the square figure, in inches.
  pub figure_inches: f64,
  pub dpi: f64,
  /// Margin kept around the content by [`tight_crop`], in inches.
  pub pad_inches: f64,
  /// Crop the canvas to its content.
  pub tight: bool,
  pub background: Color,
  pub text_color: Color
}

impl Default for RenderOptions {
  fn default() -> Self {
    Self {
      figure_inches: 7.0,
      dpi: 300.0,
      pad_inches: 0.1,
      tight: true,
      background: Color::WHITE,
      text_color: Color::BLACK
    }
  }
}

impl RenderOptions {
  pub fn with_dpi(self, dpi: f64) -> Self {
    Self { dpi, ..self }
  }

  /// Side of the square canvas in pixels.
  pub fn canvas_side(&self) -> Result<u32> {
    for (name, value) in [("figure size", self.figure_inches), ("dpi", self.dpi)] {
      if !(value.is_finite() && value > 0.0) {
        invalid!("{} must be positive, got {}", name, value);
      }
    }
    if !(self.pad_inches.is_finite() && self.pad_inches >= 0.0) {
      invalid!("padding must be non-negative, got {}", self.pad_inches);
    }
    let side = (self.figure_inches * self.dpi).round();
    if side < 1.0 || side > MAX_CANVAS_SIDE as f64 {
      invalid!("canvas of {} pixels per side is out of range 1..={}", side, MAX_CANVAS_SIDE);
    }
    Ok(side as u32)
  }

  /// Pixels per typographic point.
  pub fn pixels_per_point(&self) -> f64 {
    self.dpi / 72.0
  }
}

/// Rasterize all layers, then the titles.
/// Without `fonts` the titles are skipped.
pub fn render(poster: &Poster, options: &RenderOptions, fonts: Option<&FontSet>) -> Result<RgbaImage> {
  let side = options.canvas_side()?;
  options.background.validate()?;
  options.text_color.validate()?;

  let viewport = Viewport::new(poster.window, Size2D::new(side, side));
  let mut image = RgbaImage::from_pixel(side, side, Rgba(options.background.to_rgba8()));

  crate::profile!("layers", {
    for layer in &poster.layers {
      let polygon = layer.blob.to_polygon().map(|p| viewport.to_pixel(p));
      match layer.stroke {
        Some(stroke) => {
          let outline = Outline {
            polygon: polygon.clone(),
            width: stroke.width * options.pixels_per_point()
          };
          polygon.texture(layer.fill).draw(&mut image);
          outline.texture(stroke.color).draw(&mut image);
        }
        None => polygon.texture(layer.fill).draw(&mut image)
      }
    }
  });

  match fonts {
    Some(fonts) => poster.titles.iter().for_each(|title|
      fonts.draw_title(&mut image, title, &viewport, options.pixels_per_point(), options.text_color)
    ),
    None if !poster.titles.is_empty() =>
      log::warn!("no font available, skipping {} title(s)", poster.titles.len()),
    None => ()
  }

  log::debug!("rendered {} layers onto {}x{} canvas", poster.layers.len(), side, side);
  Ok(image)
}

/// Render, crop if requested, and encode as PNG.
pub fn render_png(poster: &Poster, options: &RenderOptions, fonts: Option<&FontSet>) -> Result<Vec<u8>> {
  let image = render(poster, options, fonts)?;
  let image = match options.tight {
    true => {
      let pad = (options.pad_inches * options.dpi).round() as u32;
      tight_crop(&image, Rgba(options.background.to_rgba8()), pad)
    }
    false => image
  };
  let bytes = encode_png(&image, options.dpi)?;
  log::info!(
    "encoded {}x{} poster, {}",
    image.width(), image.height(), crate::util::file_size(bytes.len())
  );
  Ok(bytes)
}

/// Straight alpha "over" of `color`, scaled by `coverage` in `[0, 1]`.
fn blend_coverage(pixel: &mut Rgba<u8>, color: [u8; 4], coverage: f64) {
  let mut color = Rgba(color);
  color.0[3] = (color.0[3] as f64 * coverage.clamp(0.0, 1.0)).round() as u8;
  if color.0[3] > 0 {
    pixel.blend(&color);
  }
}

/// Pixel rectangle covered by `bounds`, clipped to the image.
fn pixel_bounds(bounds: Box2D<f64, PixelSpace>, image: &RgbaImage) -> Option<Box2D<u32, PixelSpace>> {
  let (width, height) = image.dimensions();
  let min_x = bounds.min.x.floor().max(0.0);
  let min_y = bounds.min.y.floor().max(0.0);
  let max_x = bounds.max.x.ceil().min(width as f64);
  let max_y = bounds.max.y.ceil().min(height as f64);
  if !(min_x < max_x && min_y < max_y) {
    return None;
  }
  Some(Box2D::new(
    [min_x as u32, min_y as u32].into(),
    [max_x as u32, max_y as u32].into()
  ))
}
