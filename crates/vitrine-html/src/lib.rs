//! # Vitrine HTML - Asset-Backed Template Rendering
//!
//! `vitrine-html` is the templating subsystem of the vitrine demo server.
//! It loads named HTML template sources from an asset bundle, parses them
//! into a single shared collection, and renders a named template with a
//! caller-supplied data context into an HTTP response body.
//!
//! ## Core Concepts
//!
//! - [`TemplateGroup`]: owner of the parsed collection, the reload policy,
//!   and the render/lookup operations
//! - [`TemplateSet`]: one immutable parsed collection snapshot
//! - [`AssetSource`]: the bundle capability, with two providers:
//!   [`EmbeddedAssets`] (compiled into the binary) and [`DirAssets`]
//!   (filesystem, for hot reload during development)
//! - [`ReloadPolicy`]: build once vs. rebuild on every call
//!
//! ## Quick Start
//!
//! ```rust
//! use vitrine_html::{EmbeddedAssets, ReloadPolicy, TemplateGroup};
//! use serde_json::json;
//!
//! static SITE: &[(&str, &str)] = &[
//!     ("templates/hello.html", "<h1>Hello, {{ name }}!</h1>"),
//! ];
//!
//! let group = TemplateGroup::new(EmbeddedAssets::new(SITE), ReloadPolicy::Cached);
//! let body = group.render("hello.html", json!({ "name": "vitrine" })).unwrap();
//! assert_eq!(body, "<h1>Hello, vitrine!</h1>");
//! ```
//!
//! In an axum handler, render straight to the response:
//!
//! ```rust,ignore
//! async fn index(State(state): State<AppState>) -> Response {
//!     state.templates.render_response("index.html", IndexContext::gather())
//! }
//! ```
//!
//! ## Hot Reloading (Development)
//!
//! A group built over [`DirAssets`] with [`ReloadPolicy::Always`] re-reads
//! and re-parses every template source on each render. Edit the file,
//! refresh the browser:
//!
//! ```rust,ignore
//! // The root directory holds the `templates/` tree.
//! let group = TemplateGroup::new(
//!     DirAssets::new("crates/vitrine-site/assets"),
//!     ReloadPolicy::Always,
//! );
//! ```
//!
//! ## Failure Semantics
//!
//! A bundle whose `templates` directory cannot be listed fails the whole
//! load. Everything smaller degrades: unfetchable entries are skipped,
//! unparsable files are logged and skipped, and a template that fails
//! during execution produces a clean 500 with the error text instead of a
//! truncated body. A *missing* template name is the exception: that is a
//! deployment defect, surfaced as the distinguished
//! [`RenderError::MissingTemplate`] fault.

pub mod assets;
mod error;
pub mod funcs;
mod group;
mod response;

pub use assets::{AssetError, AssetSource, DirAssets, EmbeddedAssets};
pub use error::RenderError;
pub use group::{FuncInstaller, ReloadPolicy, TemplateGroup, TemplateSet, TEMPLATE_DIR};
pub use response::{error_response, html_response};
