//! Asset bundle providers.
//!
//! An asset bundle is a set of named byte blobs (template source files)
//! addressed by logical path, with a directory-listing operation. Two
//! interchangeable providers exist:
//!
//! - [`EmbeddedAssets`]: entries compiled into the binary, for production
//!   deployments with no files on disk.
//! - [`DirAssets`]: a filesystem directory, for the edit-reload-refresh
//!   development workflow.
//!
//! A [`TemplateGroup`](crate::TemplateGroup) takes one provider at
//! construction; providers are never mixed within one load pass.

mod dir;
mod embedded;

pub use dir::DirAssets;
pub use embedded::EmbeddedAssets;

use thiserror::Error;

/// Error raised by asset bundle operations.
#[derive(Debug, Error)]
pub enum AssetError {
    /// No asset exists at the requested path.
    #[error("no such asset: {0}")]
    NotFound(String),

    /// The logical directory could not be listed.
    #[error("could not list asset directory {dir}: {message}")]
    List { dir: String, message: String },

    /// The asset exists but its bytes could not be read.
    #[error("could not read asset {path}: {message}")]
    Read { path: String, message: String },
}

/// A named-blob lookup with a directory-listing operation.
///
/// Paths are logical, `/`-separated, and relative to the bundle root
/// (e.g. `templates/index.html`).
pub trait AssetSource: Send + Sync {
    /// Lists the file names directly under a logical directory, in a stable
    /// order.
    ///
    /// The listing may include entries that are not directly fetchable
    /// (e.g. subdirectory markers in a filesystem bundle); callers are
    /// expected to skip entries whose [`read`](Self::read) fails.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::List`] if the directory does not exist or
    /// cannot be read. Consumers treat this as fatal to the whole load.
    fn list(&self, dir: &str) -> Result<Vec<String>, AssetError>;

    /// Fetches the raw bytes of a single asset.
    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError>;
}
