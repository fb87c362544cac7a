//! Error types.

use crate::element::ElementKind;
use thiserror::Error;

/// Errors raised while building or querying a screen.
///
/// These all point at a broken theme or layout; navigation misses are
/// never errors.
#[derive(Debug, Error)]
pub enum InteractionError {
    #[error("Can't find {kind} element \"{name}\" in screen {screen}")]
    MissingElement {
        kind: ElementKind,
        name: String,
        screen: String,
    },
    #[error("Duplicate {kind} element name \"{name}\"")]
    DuplicateName { kind: ElementKind, name: String },
    #[error("Layout error: {0}")]
    Layout(String),
}

/// Result type for registry and screen operations.
pub type InteractionResult<T> = Result<T, InteractionError>;
