//! Error type and result alias of the crate.
//!
//! Everything the caller can get wrong is reported as [`Error::InvalidParameter`] or
//! [`Error::Config`] before any generation work starts. Rendering failures bubble up from
//! the PNG encoder and filesystem.
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid parameter: {0}")]
  InvalidParameter(String),

  #[error("config error: {0}")]
  Config(String),

  #[error("font error: {0}")]
  Font(String),

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[cfg(feature = "png")]
  #[error(transparent)]
  Png(#[from] png::EncodingError),
}

impl From<ron::error::SpannedError> for Error {
  fn from(e: ron::error::SpannedError) -> Self {
    Error::Config(e.to_string())
  }
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;

/// Early return with [`Error::InvalidParameter`].
macro_rules! invalid {
  ($($arg: tt)*) => {
    return Err($crate::error::Error::InvalidParameter(format!($($arg)*)))
  };
}
pub(crate) use invalid;

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn ron_errors_become_config_errors() {
    let err: Error = ron::from_str::<u32>("\"nope\"").unwrap_err().into();
    assert!(matches!(err, Error::Config(_)));
  }

  #[test] fn invalid_parameter_message() {
    fn check(x: f64) -> Result<()> {
      if x < 0.0 { invalid!("radius must be non-negative, got {}", x); }
      Ok(())
    }
    assert!(check(1.0).is_ok());
    assert_eq!(
      check(-1.0).unwrap_err().to_string(),
      "invalid parameter: radius must be non-negative, got -1"
    );
  }
}
