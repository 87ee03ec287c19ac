//! Site assets embedded at compile time.
//!
//! The same files under `assets/` serve both providers: they are baked
//! into the binary here for the production bundle, and read from disk by
//! [`DirAssets`](vitrine_html::DirAssets) when running with `--debug`.

/// Embedded site asset table, `(logical path, content)` per entry.
pub const SITE_ASSETS: &[(&str, &str)] = &[
    (
        "templates/nav.html",
        include_str!("../assets/templates/nav.html"),
    ),
    (
        "templates/index.html",
        include_str!("../assets/templates/index.html"),
    ),
    (
        "templates/env.html",
        include_str!("../assets/templates/env.html"),
    ),
];
