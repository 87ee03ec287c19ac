//! Cross-module behavior of the template group over real asset bundles.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;
use vitrine_html::{AssetError, AssetSource, DirAssets, ReloadPolicy, RenderError, TemplateGroup};

fn write_template(root: &Path, relative: &str, content: &str) {
    let full = root.join("templates").join(relative);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(full, content).unwrap();
}

#[test]
fn idempotent_build_yields_identical_collections() {
    let tmp = TempDir::new().unwrap();
    write_template(tmp.path(), "index.html", "index for {{ site }}");
    write_template(tmp.path(), "about.html", "about {{ site }}");

    let group = TemplateGroup::new(DirAssets::new(tmp.path()), ReloadPolicy::Always);

    let first = group.collection().unwrap();
    let second = group.collection().unwrap();

    let mut first_names = first.names();
    let mut second_names = second.names();
    first_names.sort_unstable();
    second_names.sort_unstable();
    assert_eq!(first_names, second_names);

    let ctx = json!({ "site": "vitrine" });
    assert_eq!(
        first.render("index.html", &ctx).unwrap(),
        second.render("index.html", &ctx).unwrap()
    );
}

#[test]
fn reload_policy_sees_disk_edits_without_restart() {
    let tmp = TempDir::new().unwrap();
    write_template(tmp.path(), "hot.html", "Version 1");

    let group = TemplateGroup::new(DirAssets::new(tmp.path()), ReloadPolicy::Always);
    assert_eq!(group.render("hot.html", ()).unwrap(), "Version 1");

    write_template(tmp.path(), "hot.html", "Version 2");
    assert_eq!(group.render("hot.html", ()).unwrap(), "Version 2");
}

#[test]
fn cached_policy_serves_stale_snapshot_after_edits() {
    let tmp = TempDir::new().unwrap();
    write_template(tmp.path(), "hot.html", "Version 1");

    let group = TemplateGroup::new(DirAssets::new(tmp.path()), ReloadPolicy::Cached);
    assert_eq!(group.render("hot.html", ()).unwrap(), "Version 1");

    write_template(tmp.path(), "hot.html", "Version 2");
    assert_eq!(group.render("hot.html", ()).unwrap(), "Version 1");
}

#[test]
fn unparsable_template_is_skipped_not_fatal() {
    let tmp = TempDir::new().unwrap();
    write_template(tmp.path(), "good-one.html", "one");
    write_template(tmp.path(), "good-two.html", "two");
    write_template(tmp.path(), "bad.html", "{{ unclosed");

    let group = TemplateGroup::new(DirAssets::new(tmp.path()), ReloadPolicy::Cached);
    let set = group.collection().unwrap();

    assert_eq!(set.len(), 2);
    assert!(set.contains("good-one.html"));
    assert!(set.contains("good-two.html"));
    assert!(!set.contains("bad.html"));
}

#[test]
fn subdirectory_entries_are_skipped_silently() {
    let tmp = TempDir::new().unwrap();
    write_template(tmp.path(), "index.html", "index");
    fs::create_dir_all(tmp.path().join("templates/partials")).unwrap();

    let group = TemplateGroup::new(DirAssets::new(tmp.path()), ReloadPolicy::Cached);
    let set = group.collection().unwrap();

    assert_eq!(set.len(), 1);
    assert!(!set.contains("partials"));
}

#[test]
fn missing_template_fault_names_the_template() {
    let tmp = TempDir::new().unwrap();
    write_template(tmp.path(), "index.html", "index");

    let group = TemplateGroup::new(DirAssets::new(tmp.path()), ReloadPolicy::Cached);
    let err = group.render("does-not-exist", ()).unwrap_err();

    assert!(matches!(err, RenderError::MissingTemplate(_)));
    assert!(err.to_string().contains("does-not-exist"));
}

/// Asset source whose listing always fails, counting fetch attempts.
struct UnlistableAssets {
    reads: Arc<AtomicUsize>,
}

impl AssetSource for UnlistableAssets {
    fn list(&self, dir: &str) -> Result<Vec<String>, AssetError> {
        Err(AssetError::List {
            dir: dir.to_string(),
            message: "bundle is corrupt".to_string(),
        })
    }

    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Err(AssetError::NotFound(path.to_string()))
    }
}

#[test]
fn listing_failure_aborts_load_before_any_fetch() {
    let reads = Arc::new(AtomicUsize::new(0));
    let group = TemplateGroup::new(
        UnlistableAssets {
            reads: Arc::clone(&reads),
        },
        ReloadPolicy::Cached,
    );

    let err = group.collection().unwrap_err();
    assert!(matches!(err, RenderError::Asset(AssetError::List { .. })));
    assert!(err.to_string().contains("bundle is corrupt"));

    // The same failure surfaces through render, and no fetch was ever
    // attempted: the load aborted before touching a single file.
    assert!(group.render("anything.html", ()).is_err());
    assert_eq!(reads.load(Ordering::SeqCst), 0);
}

#[test]
fn hot_reload_picks_up_new_files() {
    let tmp = TempDir::new().unwrap();
    write_template(tmp.path(), "index.html", "index");

    let group = TemplateGroup::new(DirAssets::new(tmp.path()), ReloadPolicy::Always);
    assert!(group.collection().unwrap().get("late.html").is_err());

    write_template(tmp.path(), "late.html", "late arrival");
    assert_eq!(group.render("late.html", ()).unwrap(), "late arrival");
}
