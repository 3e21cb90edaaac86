//! Decode error types and diagnostics.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::decode::path::CodingPath;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error while decoding a package description.
///
/// Every structural variant carries the coding path of the value that
/// failed. Decoding is all-or-nothing: a document that fails anywhere
/// produces no model at all.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum DecodeError {
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    #[diagnostic(code(described_package::decode::invalid_json))]
    InvalidJson {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("{path}: no matching key found (expected one of: {})", .expected.join(", "))]
    #[diagnostic(
        code(described_package::decode::missing_discriminator),
        help("the object must contain exactly one of the listed keys")
    )]
    MissingDiscriminator {
        path: CodingPath,
        expected: Vec<&'static str>,
    },

    #[error("{path}: unrecognized tag `{tag}` (expected one of: {})", .expected.join(", "))]
    #[diagnostic(code(described_package::decode::unrecognized_tag))]
    UnrecognizedTag {
        path: CodingPath,
        tag: String,
        expected: Vec<&'static str>,
    },

    #[error("{path}: missing required field `{field}`")]
    #[diagnostic(code(described_package::decode::missing_field))]
    MissingRequiredField { path: CodingPath, field: String },

    #[error("{path}: expected {expected}, found {found}")]
    #[diagnostic(code(described_package::decode::type_mismatch))]
    TypeMismatch {
        path: CodingPath,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{path}: malformed payload: {message}")]
    #[diagnostic(code(described_package::decode::malformed_payload))]
    MalformedPayload { path: CodingPath, message: String },
}

/// The category of a [`DecodeError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    InvalidJson,
    MissingDiscriminator,
    UnrecognizedTag,
    MissingRequiredField,
    TypeMismatch,
    MalformedPayload,
}

impl DecodeError {
    /// The category of this error.
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::InvalidJson { .. } => DecodeErrorKind::InvalidJson,
            DecodeError::MissingDiscriminator { .. } => DecodeErrorKind::MissingDiscriminator,
            DecodeError::UnrecognizedTag { .. } => DecodeErrorKind::UnrecognizedTag,
            DecodeError::MissingRequiredField { .. } => DecodeErrorKind::MissingRequiredField,
            DecodeError::TypeMismatch { .. } => DecodeErrorKind::TypeMismatch,
            DecodeError::MalformedPayload { .. } => DecodeErrorKind::MalformedPayload,
        }
    }

    /// The coding path of the failing value (`None` for invalid JSON text).
    pub fn path(&self) -> Option<&CodingPath> {
        match self {
            DecodeError::InvalidJson { .. } => None,
            DecodeError::MissingDiscriminator { path, .. }
            | DecodeError::UnrecognizedTag { path, .. }
            | DecodeError::MissingRequiredField { path, .. }
            | DecodeError::TypeMismatch { path, .. }
            | DecodeError::MalformedPayload { path, .. } => Some(path),
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            DecodeError::InvalidJson {
                message,
                line,
                column,
            } => Diagnostic::error("package description is not valid JSON")
                .with_context(format!("line {}, column {}: {}", line, column, message))
                .with_suggestion(suggestions::REGENERATE_DESCRIPTION),

            DecodeError::MissingDiscriminator { path, expected } => {
                Diagnostic::error(format!("no matching key found at `{}`", path))
                    .with_context(format!("expected one of: {}", expected.join(", ")))
                    .with_suggestion(suggestions::SCHEMA_DRIFT)
            }

            DecodeError::UnrecognizedTag {
                path,
                tag,
                expected,
            } => Diagnostic::error(format!("unrecognized tag `{}` at `{}`", tag, path))
                .with_context(format!("known tags: {}", expected.join(", ")))
                .with_suggestion(suggestions::SCHEMA_DRIFT),

            DecodeError::MissingRequiredField { path, field } => {
                Diagnostic::error(format!("missing required field `{}`", field))
                    .with_context(format!("in object at `{}`", path))
                    .with_suggestion(suggestions::REGENERATE_DESCRIPTION)
            }

            DecodeError::TypeMismatch {
                path,
                expected,
                found,
            } => Diagnostic::error(format!("type mismatch at `{}`", path))
                .with_context(format!("expected {}, found {}", expected, found)),

            DecodeError::MalformedPayload { path, message } => {
                Diagnostic::error(format!("malformed payload at `{}`", path))
                    .with_context(message.clone())
                    .with_suggestion(suggestions::SCHEMA_DRIFT)
            }
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::InvalidJson {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}
