//! Static asset bundle compiled into the binary.

use super::{AssetError, AssetSource};

/// Asset bundle backed by `(path, content)` entries baked into the binary.
///
/// Each entry's path is the full logical path (e.g.
/// `"templates/index.html"`). Listing a directory preserves entry order, so
/// the declaration order of the table is the load order.
///
/// # Example
///
/// ```rust
/// use vitrine_html::{AssetSource, EmbeddedAssets};
///
/// static SITE: &[(&str, &str)] = &[
///     ("templates/index.html", "<h1>{{ title }}</h1>"),
///     ("templates/nav.html", "<nav></nav>"),
/// ];
///
/// let assets = EmbeddedAssets::new(SITE);
/// let names = assets.list("templates").unwrap();
/// assert_eq!(names, vec!["index.html", "nav.html"]);
/// ```
pub struct EmbeddedAssets {
    entries: &'static [(&'static str, &'static str)],
}

impl EmbeddedAssets {
    /// Creates a bundle over a static entry table.
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }
}

impl AssetSource for EmbeddedAssets {
    fn list(&self, dir: &str) -> Result<Vec<String>, AssetError> {
        let prefix = format!("{}/", dir.trim_end_matches('/'));
        let names: Vec<String> = self
            .entries
            .iter()
            .filter_map(|(path, _)| path.strip_prefix(prefix.as_str()))
            .filter(|rest| !rest.contains('/'))
            .map(str::to_string)
            .collect();

        // An embedded table has no notion of an empty directory: no entries
        // under the prefix means the directory does not exist.
        if names.is_empty() {
            return Err(AssetError::List {
                dir: dir.to_string(),
                message: "no such directory in embedded bundle".to_string(),
            });
        }
        Ok(names)
    }

    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        self.entries
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, content)| content.as_bytes().to_vec())
            .ok_or_else(|| AssetError::NotFound(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ENTRIES: &[(&str, &str)] = &[
        ("templates/index.html", "index body"),
        ("templates/nav.html", "nav body"),
        ("templates/partials/footer.html", "footer body"),
        ("styles/site.css", "body {}"),
    ];

    #[test]
    fn test_list_filters_by_directory() {
        let assets = EmbeddedAssets::new(ENTRIES);
        let names = assets.list("templates").unwrap();
        assert_eq!(names, vec!["index.html", "nav.html"]);
    }

    #[test]
    fn test_list_excludes_nested_entries() {
        let assets = EmbeddedAssets::new(ENTRIES);
        let names = assets.list("templates").unwrap();
        assert!(!names.iter().any(|n| n.contains("footer")));
    }

    #[test]
    fn test_list_unknown_directory_fails() {
        let assets = EmbeddedAssets::new(ENTRIES);
        let result = assets.list("missing");
        assert!(matches!(result, Err(AssetError::List { .. })));
    }

    #[test]
    fn test_read_returns_bytes() {
        let assets = EmbeddedAssets::new(ENTRIES);
        let bytes = assets.read("templates/index.html").unwrap();
        assert_eq!(bytes, b"index body");
    }

    #[test]
    fn test_read_unknown_path_fails() {
        let assets = EmbeddedAssets::new(ENTRIES);
        let result = assets.read("templates/absent.html");
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }
}
