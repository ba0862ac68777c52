//! Error handling for extrudemark
//!
//! Every failure the engine can report is terminal: a render either produces
//! a complete document or nothing at all. The taxonomy is:
//! - Configuration errors (missing/unreadable resources, invalid options)
//! - Glyph lookup errors (character absent from the outline source)
//! - Malformed outline errors (path commands without a current point)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for extrudemark
///
/// A unified error type used by the layout engine, the outline providers
/// and the settings layer.
#[derive(Error, Debug)]
pub enum Error {
    /// A required resource is missing or an option is invalid
    #[error("Configuration error: {reason}")]
    Configuration {
        /// The reason the configuration was rejected.
        reason: String,
    },

    /// The outline source has no glyph for a requested character
    #[error("No glyph for character {character:?} (U+{code:04X})", code = code_point(.character))]
    GlyphNotFound {
        /// The character that could not be resolved.
        character: char,
    },

    /// Path commands reference an undefined current point
    #[error("Malformed outline at command {index}: {reason}")]
    MalformedOutline {
        /// Position of the offending command in the outline.
        index: usize,
        /// Description of what was wrong with the command.
        reason: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error from a message
    pub fn configuration(reason: impl Into<String>) -> Self {
        Error::Configuration {
            reason: reason.into(),
        }
    }

    /// Create a malformed-outline error for the command at `index`
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Error::MalformedOutline {
            index,
            reason: reason.into(),
        }
    }

    /// Check if this is a configuration error
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Error::Configuration { .. } | Error::Io(_))
    }

    /// Check if this is a missing glyph error
    pub fn is_glyph_not_found(&self) -> bool {
        matches!(self, Error::GlyphNotFound { .. })
    }

    /// Check if this is a malformed outline error
    pub fn is_malformed_outline(&self) -> bool {
        matches!(self, Error::MalformedOutline { .. })
    }
}

fn code_point(c: &char) -> u32 {
    u32::from(*c)
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
