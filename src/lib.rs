//! Generative posters made of layered, randomly jittered blobs.
//!
//! The pipeline is fixed: sample parameters, generate a blob outline, fill it, repeat, render
//! to an image. [`blob`] holds the shape generator, [`poster`] the composition loop, and
//! [`drawing`] the rasterizer and PNG export (requires `drawing` feature, on by default).
//!
//! # Basic usage
//! ```no_run
//! # use generative_poster::{
//! #   error::Result,
//! #   params::RenderParameters,
//! #   palette::Style,
//! #   poster,
//! #   drawing::{self, FontSet, RenderOptions}
//! # };
//! # fn main() -> Result<()> {
//! let params = RenderParameters::for_style(Style::Complex)
//!   .with_seed(Some(42)) // reproducible; `None` draws from OS entropy
//!   .with_layers(110);
//!
//! // validates the parameters, then composes 110 blobs with a fresh random source
//! let poster = poster::generate(&params)?;
//!
//! // titles are skipped when no system font is found
//! let fonts = FontSet::discover();
//! let png = drawing::render_png(&poster, &RenderOptions::default(), fonts.as_ref())?;
//! std::fs::write(drawing::DOWNLOAD_FILE_NAME, png)?;
//! # Ok(())
//! # }
//! ```
//!
//! All randomness flows through one explicitly passed source, so two requests never share
//! state. To drive generation from your own source, call [`poster::compose`] directly:
//! ```
//! # use generative_poster::{params::RenderParameters, poster, random::rng_from_seed};
//! let mut rng = rng_from_seed(Some(0));
//! let poster = poster::compose(&RenderParameters::default().with_layers(3), &mut rng).unwrap();
//! assert_eq!(poster.layers.len(), 3);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod util;
pub mod random;
pub mod geometry;
pub mod sdf;
pub mod palette;
pub mod params;
pub mod blob;
pub mod poster;
pub mod config;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod drawing;
