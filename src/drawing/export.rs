use {
  image::{Rgba, RgbaImage, imageops},
  crate::error::Result
};

const METERS_PER_INCH: f64 = 0.0254;

/// File name offered for the rendered poster.
pub const DOWNLOAD_FILE_NAME: &str = "Week3_GenerativePoster.png";

/// Crop `image` to the pixels differing from `background`, keeping `pad` pixels around them.
/// An image with no content is returned whole.
pub fn tight_crop(image: &RgbaImage, background: Rgba<u8>, pad: u32) -> RgbaImage {
  let content = image.enumerate_pixels()
    .filter(|(_, _, pixel)| **pixel != background)
    .fold(None, |bounds: Option<(u32, u32, u32, u32)>, (x, y, _)| Some(match bounds {
      None => (x, y, x, y),
      Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y))
    }));

  match content {
    None => image.clone(),
    Some((x0, y0, x1, y1)) => {
      let (x0, y0) = (x0.saturating_sub(pad), y0.saturating_sub(pad));
      let x1 = (x1 + 1).saturating_add(pad).min(image.width());
      let y1 = (y1 + 1).saturating_add(pad).min(image.height());
      imageops::crop_imm(image, x0, y0, x1 - x0, y1 - y0).to_image()
    }
  }
}

/// Encode as an 8-bit RGBA PNG byte stream, recording `dpi` in its pHYs chunk.
pub fn encode_png(image: &RgbaImage, dpi: f64) -> Result<Vec<u8>> {
  let mut bytes = Vec::new();
  {
    let mut encoder = png::Encoder::new(&mut bytes, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let per_meter = (dpi / METERS_PER_INCH).round() as u32;
    encoder.set_pixel_dims(Some(png::PixelDimensions {
      xppu: per_meter,
      yppu: per_meter,
      unit: png::Unit::Meter
    }));
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;
  }
  Ok(bytes)
}
