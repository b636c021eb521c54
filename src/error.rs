//! Error types for `locsplice`.
//!
//! Lookup failures (`LocaleNotFound`, `SectionNotFound`, `UnterminatedSection`,
//! `InvalidLocale`) are per-edit and non-fatal: a batch reports them and moves on.
//! Everything else aborts the run.

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `locsplice` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Lookup Errors ====================
    /// No `'<locale>': {` key exists in the document.
    #[error("could not find locale '{locale}'")]
    LocaleNotFound {
        /// Locale identifier that was searched for.
        locale: String,
    },

    /// The locale exists but its block has no `<section>: {` key.
    #[error("could not find section '{section}' in locale '{locale}'")]
    SectionNotFound {
        /// Locale whose block was searched.
        locale: String,
        /// Dotted section path that was searched for.
        section: String,
    },

    /// The brace scan ran off the end of its bound before depth returned to zero.
    #[error("section '{section}' in locale '{locale}' opened at byte {open_brace} is never closed")]
    UnterminatedSection {
        /// Locale whose block was scanned.
        locale: String,
        /// Dotted section path being scanned.
        section: String,
        /// Absolute offset of the section's opening brace.
        open_brace: usize,
    },

    /// The locale identifier is not of the form `xx-XX`.
    #[error("invalid locale identifier '{0}': expected the form xx-XX (e.g. en-US)")]
    InvalidLocale(String),

    // ==================== IO Errors ====================
    /// The document to patch could not be opened.
    #[error("source file {} not found", path.display())]
    SourceFileMissing {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// IO error from any other file operation.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Input Errors ====================
    /// The edit plan JSON could not be parsed.
    #[error("invalid edit plan: {0}")]
    Plan(#[from] serde_json::Error),

    /// A lookup pattern failed to compile.
    #[error("invalid lookup pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Whether a batch may skip this error and carry on with the next edit.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::LocaleNotFound { .. }
                | Self::SectionNotFound { .. }
                | Self::UnterminatedSection { .. }
                | Self::InvalidLocale(_)
        )
    }
}

/// A specialized Result type for `locsplice` operations.
pub type Result<T> = std::result::Result<T, Error>;
