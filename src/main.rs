//! CGI-style entry point.
//!
//! shell2http invokes this binary with request form fields exported as
//! `v_`-prefixed environment variables (`-export-vars -form`); the rendered
//! document goes to stdout. Logs go to stderr so they never leak into the
//! response body.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use s2h_admin::pages::PageParams;
use s2h_admin::{default_registry, DocumentRenderer};

/// Overrides the env-file location; defaults to `s2h.env` in the working
/// directory.
const ENV_FILE_VAR: &str = "S2H_ENV_FILE";
const DEFAULT_ENV_FILE: &str = "s2h.env";

/// Prefix shell2http puts on exported form fields.
const FORM_VAR_PREFIX: &str = "v_";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "s2h_admin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let env_file = std::env::var(ENV_FILE_VAR).unwrap_or_else(|_| DEFAULT_ENV_FILE.to_string());
    let params: PageParams = std::env::vars()
        .filter_map(|(key, value)| {
            key.strip_prefix(FORM_VAR_PREFIX)
                .map(|name| (name.to_string(), value))
        })
        .collect();

    tracing::debug!(env_file = %env_file, params = params.len(), "rendering admin page");

    let renderer = DocumentRenderer::new(default_registry(), env_file.into());
    let document = renderer.render(&params)?;
    println!("{document}");
    Ok(())
}
