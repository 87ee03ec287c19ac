//! Error types for template loading and rendering.
//!
//! This module provides [`RenderError`], the primary error type for all
//! rendering operations. It abstracts over the underlying template engine's
//! errors, providing a stable public API.

use std::fmt;

use crate::assets::AssetError;

/// Error type for template loading and rendering operations.
///
/// The variants split along the failure-handling boundaries of the load and
/// render pipeline:
///
/// - [`Asset`](RenderError::Asset) is fatal to a whole load pass (the asset
///   directory could not be listed).
/// - [`MissingTemplate`](RenderError::MissingTemplate) is a deployment
///   defect: handlers only ever ask for names shipped in the bundle, so an
///   absent name means the packaging is wrong, not the request.
/// - [`Template`](RenderError::Template) and
///   [`Serialization`](RenderError::Serialization) are request-time
///   execution failures, recoverable at the response boundary.
#[derive(Debug)]
pub enum RenderError {
    /// Template syntax error or execution failure.
    Template(String),

    /// Requested template absent from the built collection.
    MissingTemplate(String),

    /// Context serialization error.
    Serialization(String),

    /// Asset bundle failure during load.
    Asset(AssetError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Template(msg) => write!(f, "template error: {}", msg),
            RenderError::MissingTemplate(name) => write!(f, "template not found: {}", name),
            RenderError::Serialization(msg) => write!(f, "serialization error: {}", msg),
            RenderError::Asset(err) => write!(f, "asset bundle error: {}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Asset(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AssetError> for RenderError {
    fn from(err: AssetError) -> Self {
        RenderError::Asset(err)
    }
}

// Conversion from minijinja::Error - this keeps the engine out of the public API
impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => RenderError::MissingTemplate(err.to_string()),
            ErrorKind::BadSerialization => RenderError::Serialization(err.to_string()),
            _ => RenderError::Template(err.to_string()),
        }
    }
}
