//! Error types for the configuration decision engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while routing questions or
//! deriving configuration artifacts.

use thiserror::Error;

/// The main error type for the configuration decision engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_config_engine::error::EngineError;
///
/// let error = EngineError::QuestionNotFound {
///     id: "q1_missing".to_string(),
///     module: "payroll_area".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Question 'q1_missing' not found in module 'payroll_area'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Catalog file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Catalog file could not be parsed.
    #[error("Failed to parse catalog file '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Two questions in the same module share an id.
    #[error("Duplicate question id '{id}' in module '{module}'")]
    DuplicateQuestionId {
        /// The duplicated question id.
        id: String,
        /// The module containing the duplicate.
        module: String,
    },

    /// A question definition is missing a required field.
    #[error("Question '{id}' is invalid: {message}")]
    InvalidQuestion {
        /// The id of the invalid question (or a placeholder if the id itself is missing).
        id: String,
        /// A description of what made the question invalid.
        message: String,
    },

    /// A question id was not found in the catalog.
    #[error("Question '{id}' not found in module '{module}'")]
    QuestionNotFound {
        /// The question id that was not found.
        id: String,
        /// The module that was searched.
        module: String,
    },

    /// An answer value does not match the question's declared kind.
    #[error("Invalid answer for question '{id}': {message}")]
    InvalidAnswer {
        /// The question the answer was recorded against.
        id: String,
        /// A description of the mismatch.
        message: String,
    },

    /// A dynamic-question kind string was not recognized.
    #[error("Unknown dynamic question kind: {kind}")]
    UnknownDynamicKind {
        /// The unrecognized kind string.
        kind: String,
    },

    /// The module owning an answer set could not be determined.
    #[error("Unable to determine configuration module: {message}")]
    ModuleNotRecognized {
        /// A description of why inference failed.
        message: String,
    },

    /// Pay-date generation was requested for a frequency that has no
    /// weekday-snap rule.
    #[error("Pay date generation is not supported for frequency '{frequency}'")]
    UnsupportedPayDateFrequency {
        /// The unsupported frequency.
        frequency: String,
    },

    /// An export file id was not found in the registry.
    #[error("Unknown export file: {file_id}")]
    UnknownExportFile {
        /// The file id that was requested.
        file_id: String,
    },

    /// A session id was not found in the session store.
    #[error("Session not found: {session_id}")]
    SessionNotFound {
        /// The session id that was requested.
        session_id: String,
    },

    /// CSV serialization failed.
    #[error("CSV serialization failed: {message}")]
    CsvError {
        /// A description of the serialization failure.
        message: String,
    },
}

impl From<csv::Error> for EngineError {
    fn from(err: csv::Error) -> Self {
        EngineError::CsvError {
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
