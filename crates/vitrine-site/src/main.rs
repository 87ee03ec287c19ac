//! Vitrine demonstration server.
//!
//! A deliberately thin axum application around the `vitrine-html`
//! templating stack: two HTML pages, one embedded asset bundle, and a
//! `--debug` switch that swaps in filesystem assets with per-request
//! reloading for template development.

mod assets;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use clap::Parser;
use minijinja::Environment;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vitrine_html::{DirAssets, EmbeddedAssets, ReloadPolicy, TemplateGroup};

/// Demonstration web server for the vitrine templating stack.
#[derive(Parser)]
#[command(name = "vitrine-site", version, about)]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,

    /// Rebuild templates from --assets on every request instead of serving
    /// the embedded bundle.
    #[arg(long)]
    debug: bool,

    /// Asset root holding the templates/ tree, used with --debug.
    #[arg(long, default_value = "crates/vitrine-site/assets")]
    assets: PathBuf,
}

#[derive(Clone)]
struct AppState {
    templates: Arc<TemplateGroup>,
    debug: bool,
}

/// Site helper table: the stock set plus the server version global.
fn install_helpers(env: &mut Environment<'static>) {
    vitrine_html::funcs::register(env);
    env.add_global("server_version", env!("CARGO_PKG_VERSION"));
}

#[derive(Serialize)]
struct IndexContext {
    hostname: String,
    debug: bool,
    template_names: Vec<String>,
}

async fn index(State(state): State<AppState>) -> Response {
    let mut template_names: Vec<String> = match state.templates.collection() {
        Ok(set) => set.names().iter().map(|name| name.to_string()).collect(),
        Err(err) => return vitrine_html::error_response(&err),
    };
    template_names.sort_unstable();

    let context = IndexContext {
        hostname: std::env::var("HOSTNAME").unwrap_or_else(|_| "localhost".to_string()),
        debug: state.debug,
        template_names,
    };
    state.templates.render_response("index.html", context)
}

#[derive(Serialize)]
struct EnvVar {
    name: String,
    value: String,
}

#[derive(Serialize)]
struct EnvContext {
    vars: Vec<EnvVar>,
}

async fn environment(State(state): State<AppState>) -> Response {
    let mut vars: Vec<EnvVar> = std::env::vars()
        .map(|(name, value)| EnvVar { name, value })
        .collect();
    vars.sort_by(|a, b| a.name.cmp(&b.name));

    state.templates.render_response("env.html", EnvContext { vars })
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/env", get(environment))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let templates = if cli.debug {
        info!("debug mode: reloading templates from {}", cli.assets.display());
        TemplateGroup::with_funcs(
            DirAssets::new(&cli.assets),
            ReloadPolicy::Always,
            install_helpers,
        )
    } else {
        TemplateGroup::with_funcs(
            EmbeddedAssets::new(assets::SITE_ASSETS),
            ReloadPolicy::Cached,
            install_helpers,
        )
    };

    let state = AppState {
        templates: Arc::new(templates),
        debug: cli.debug,
    };

    let listener = tokio::net::TcpListener::bind(cli.listen).await?;
    info!("listening on http://{}", cli.listen);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
