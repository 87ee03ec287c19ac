//! Template group: load, cache, look up, render.
//!
//! A [`TemplateGroup`] owns the parsed collection of named templates for a
//! site. Templates are sourced from an [`AssetSource`] selected at
//! construction, parsed into a [`TemplateSet`] (one shared minijinja
//! environment, so templates can `{% include %}` each other and see the
//! same helper functions), and served to handlers through render and
//! lookup operations.
//!
//! # Reload policy
//!
//! The build-vs-reload branch is an explicit construction parameter rather
//! than a process-wide flag:
//!
//! - [`ReloadPolicy::Cached`]: the collection is built on first use and
//!   served unchanged for the process lifetime.
//! - [`ReloadPolicy::Always`]: the collection is discarded and rebuilt on
//!   every lookup or render, trading all caching for always-fresh sources.
//!   Paired with [`DirAssets`](crate::DirAssets) this gives the
//!   edit-reload-refresh development workflow: save the template file,
//!   refresh the browser.
//!
//! # Concurrency
//!
//! The current collection lives behind an `RwLock` as an immutable
//! `Arc<TemplateSet>` snapshot. Concurrent first requests (or concurrent
//! requests in reload mode) may build redundantly; exactly one snapshot
//! wins the swap, and every candidate is an equivalent parse of the same
//! bundle, so the duplicate work is harmless.

use std::sync::{Arc, RwLock};

use minijinja::{Environment, Value};
use serde::Serialize;
use tracing::{debug, warn};

use crate::assets::AssetSource;
use crate::error::RenderError;
use crate::funcs;

/// Logical directory inside the asset bundle that holds template sources.
pub const TEMPLATE_DIR: &str = "templates";

/// Helper-function installer run against every freshly built environment.
pub type FuncInstaller = fn(&mut Environment<'static>);

/// When a group rebuilds its parsed collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadPolicy {
    /// Build once on first use, then serve the same snapshot forever.
    Cached,
    /// Discard and rebuild on every lookup or render.
    Always,
}

/// One parsed template collection, immutable after publication.
///
/// All templates share a single namespace and helper set. Names are the
/// asset file names including extension (`index.html`, not `index`).
#[derive(Debug)]
pub struct TemplateSet {
    env: Environment<'static>,
}

impl TemplateSet {
    /// Looks up a template by name.
    ///
    /// A missing name is a deployment defect, not a user input error:
    /// handlers only ever ask for names known to exist in the bundle, so
    /// absence means the packaging is wrong. The returned
    /// [`RenderError::MissingTemplate`] is kept categorically separate from
    /// execution failures and is only folded into a 500 at the response
    /// boundary.
    pub fn get(&self, name: &str) -> Result<minijinja::Template<'_, '_>, RenderError> {
        self.env
            .get_template(name)
            .map_err(|_| RenderError::MissingTemplate(name.to_string()))
    }

    /// Executes the named template against `context`, buffering the output.
    pub fn render<C: Serialize>(&self, name: &str, context: C) -> Result<String, RenderError> {
        let template = self.get(name)?;
        Ok(template.render(Value::from_serialize(&context))?)
    }

    /// Returns true if the collection holds a template with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Names of all templates in the collection, in arbitrary order.
    pub fn names(&self) -> Vec<&str> {
        self.env.templates().map(|(name, _)| name).collect()
    }

    /// Number of templates in the collection.
    pub fn len(&self) -> usize {
        self.env.templates().count()
    }

    /// Returns true if the collection holds no templates.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Owner of the parsed template collection and its reload policy.
///
/// # Example
///
/// ```rust
/// use vitrine_html::{EmbeddedAssets, ReloadPolicy, TemplateGroup};
/// use serde_json::json;
///
/// static SITE: &[(&str, &str)] = &[
///     ("templates/hello.html", "Hello, {{ name }}!"),
/// ];
///
/// let group = TemplateGroup::new(EmbeddedAssets::new(SITE), ReloadPolicy::Cached);
/// let body = group.render("hello.html", json!({ "name": "vitrine" })).unwrap();
/// assert_eq!(body, "Hello, vitrine!");
/// ```
pub struct TemplateGroup {
    assets: Box<dyn AssetSource>,
    install_funcs: FuncInstaller,
    policy: ReloadPolicy,
    current: RwLock<Option<Arc<TemplateSet>>>,
}

impl TemplateGroup {
    /// Creates a group over `assets` with the stock helper set.
    pub fn new(assets: impl AssetSource + 'static, policy: ReloadPolicy) -> Self {
        Self::with_funcs(assets, policy, funcs::register)
    }

    /// Creates a group with a custom helper installer.
    ///
    /// The installer runs against every freshly built environment, so the
    /// helper set is fixed and identical across rebuilds.
    pub fn with_funcs(
        assets: impl AssetSource + 'static,
        policy: ReloadPolicy,
        install_funcs: FuncInstaller,
    ) -> Self {
        Self {
            assets: Box::new(assets),
            install_funcs,
            policy,
            current: RwLock::new(None),
        }
    }

    /// Returns the current parsed collection, building it if needed.
    ///
    /// Under [`ReloadPolicy::Always`] every call rebuilds from the asset
    /// source; under [`ReloadPolicy::Cached`] the first successful build is
    /// served for the process lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Asset`] if the bundle's template directory
    /// cannot be listed. Individual files that fail to fetch or parse do
    /// not error here; they are simply absent from the collection.
    pub fn collection(&self) -> Result<Arc<TemplateSet>, RenderError> {
        if self.policy == ReloadPolicy::Cached {
            let current = self.current.read().unwrap_or_else(|err| err.into_inner());
            if let Some(set) = current.as_ref() {
                return Ok(Arc::clone(set));
            }
        }

        let set = Arc::new(self.load()?);
        let mut current = self.current.write().unwrap_or_else(|err| err.into_inner());
        *current = Some(Arc::clone(&set));
        Ok(set)
    }

    /// Renders the named template with `context` into a string buffer.
    ///
    /// Resolves the collection per the reload policy, then executes the
    /// template. See [`TemplateSet::render`].
    pub fn render<C: Serialize>(&self, name: &str, context: C) -> Result<String, RenderError> {
        self.collection()?.render(name, context)
    }

    /// Builds a fresh collection from the asset source.
    ///
    /// A failed directory listing aborts the whole load. Unfetchable
    /// entries (e.g. subdirectories in a filesystem bundle) are skipped;
    /// files that fail to parse are logged and skipped, so one bad
    /// template never takes down the rest of the site.
    fn load(&self) -> Result<TemplateSet, RenderError> {
        let files = self.assets.list(TEMPLATE_DIR)?;

        let mut env = Environment::new();
        (self.install_funcs)(&mut env);

        for file in files {
            let path = format!("{}/{}", TEMPLATE_DIR, file);
            let Ok(raw) = self.assets.read(&path) else {
                continue;
            };
            let source = match String::from_utf8(raw) {
                Ok(source) => source,
                Err(err) => {
                    warn!("could not parse template {}: {}", file, err);
                    continue;
                }
            };
            debug!("loading template {}", file);
            if let Err(err) = env.add_template_owned(file.clone(), source) {
                warn!("could not parse template {}: {}", file, err);
            }
        }

        Ok(TemplateSet { env })
    }
}
