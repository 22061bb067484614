//! Transition options loading from files.
//!
//! Supports loading [`TransitionOptions`] from RON documents when the
//! `serde` feature is enabled. Loaded options are validated before they are
//! returned, so a file can never smuggle in a negative duration.
//!
//! ```ron
//! (
//!     duration: 0.35,
//!     content_scale: 0.9,
//!     visible_content_width: 64.0,
//!     easing: EaseOut,
//! )
//! ```
use crate::{Error, TransitionOptions};

use std::path::Path;

/// Error type for options loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File not found.
    #[error("options file not found: {0}")]
    NotFound(String),
    /// Failed to read file.
    #[error("failed to read options: {0}")]
    Read(String),
    /// Failed to parse options file.
    #[error("failed to parse options: {0}")]
    Parse(String),
    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    /// The options were parsed but violate an invariant.
    #[error(transparent)]
    Invalid(#[from] Error),
}

/// Load [`TransitionOptions`] from a file path.
///
/// Supports RON format (.ron extension).
pub fn load_options_from_file(path: impl AsRef<Path>) -> Result<TransitionOptions, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match extension {
        "ron" => {
            let content =
                std::fs::read_to_string(path).map_err(|e| LoadError::Read(e.to_string()))?;

            options_from_str(&content)
        }
        _ => Err(LoadError::UnsupportedFormat(extension.to_string())),
    }
}

/// Parse [`TransitionOptions`] from a RON document.
///
/// Fields missing from the document keep their default values.
#[cfg(feature = "serde")]
pub fn options_from_str(content: &str) -> Result<TransitionOptions, LoadError> {
    let options = ron::from_str::<TransitionOptions>(content)
        .map_err(|e| LoadError::Parse(e.to_string()))?;

    options.validate()?;

    log::debug!("Loader: parsed transition options {options:?}");

    Ok(options)
}

/// Parse [`TransitionOptions`] from a RON document.
#[cfg(not(feature = "serde"))]
pub fn options_from_str(_content: &str) -> Result<TransitionOptions, LoadError> {
    Err(LoadError::UnsupportedFormat(
        "RON loading requires 'serde' feature".to_string(),
    ))
}
