//! Basic-auth page: edits the `username:password` credential pair behind
//! `SH_BASIC_AUTH`. An empty stored value means authentication is disabled.

use crate::config::ConfigStore;
use crate::error::AdminError;
use crate::markup::{el, Element};
use crate::pages::{PageContext, PageParams};

/// Env-file key holding the combined credentials.
pub const AUTH_KEY: &str = "SH_BASIC_AUTH";

pub fn page(ctx: &PageContext, params: &PageParams) -> Result<Element, AdminError> {
    let mut store = ConfigStore::load(&ctx.env_file)?;

    if params.contains_key("submit") {
        let username = params.get("username").map(String::as_str).unwrap_or("");
        let password = params.get("password").map(String::as_str).unwrap_or("");
        // Both fields must be present; either one blank disables auth.
        let combined = if !username.is_empty() && !password.is_empty() {
            format!("{username}:{password}")
        } else {
            String::new()
        };
        tracing::info!(enabled = !combined.is_empty(), "saving basic auth setting");
        store.set(AUTH_KEY, combined);
        store.save()?;
    }

    let basic_auth = store.get(AUTH_KEY).unwrap_or_default();
    let (username, password) = basic_auth.split_once(':').unwrap_or((basic_auth, ""));

    let form = el("form").attr("method", "post").child(
        el("fieldset")
            .child(el("legend").child("Basic authorization"))
            .child(el("label").attr("for_", "username").child("Username"))
            .child(
                el("input")
                    .attr("id", "username")
                    .attr("name", "username")
                    .attr("type", "text")
                    .attr("value", username)
                    .attr("placeholder", "leave blank to disable"),
            )
            .child(el("label").attr("for_", "password").child("Password"))
            .child(
                el("input")
                    .attr("id", "password")
                    .attr("name", "password")
                    .attr("type", "password")
                    .attr("value", password)
                    .attr("placeholder", "leave blank to disable"),
            )
            .child(el("br"))
            .child(
                el("input")
                    .attr("type", "submit")
                    .attr("name", "submit")
                    .attr("value", "Save"),
            )
            .child(" ")
            .child(el("input").attr("type", "reset").attr("value", "Reset")),
    );

    let state = if basic_auth.is_empty() {
        "disabled"
    } else {
        "enabled"
    };
    Ok(el("section")
        .child(form)
        .child(el("p").child(format!("Authentication is {state}"))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(dir: &tempfile::TempDir) -> PageContext {
        PageContext {
            env_file: dir.path().join("s2h.env"),
        }
    }

    fn params(pairs: &[(&str, &str)]) -> PageParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn submit_persists_combined_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx(&dir);
        page(
            &ctx,
            &params(&[("submit", "Save"), ("username", "a"), ("password", "b")]),
        )
        .unwrap();

        let store = ConfigStore::load(&ctx.env_file).unwrap();
        assert_eq!(store.get(AUTH_KEY), Some("a:b"));
    }

    #[test]
    fn blank_password_disables_auth() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx(&dir);
        std::fs::write(&ctx.env_file, "SH_BASIC_AUTH=a:b").unwrap();

        let markup = page(
            &ctx,
            &params(&[("submit", "Save"), ("username", "a"), ("password", "")]),
        )
        .unwrap()
        .render();

        let store = ConfigStore::load(&ctx.env_file).unwrap();
        assert_eq!(store.get(AUTH_KEY), Some(""));
        assert!(markup.contains("Authentication is disabled"));
    }

    #[test]
    fn stored_credentials_prefill_the_form() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx(&dir);
        std::fs::write(&ctx.env_file, "SH_BASIC_AUTH=admin:s3cret").unwrap();

        let markup = page(&ctx, &PageParams::new()).unwrap().render();
        assert!(markup.contains("value=\"admin\""));
        assert!(markup.contains("value=\"s3cret\""));
        assert!(markup.contains("Authentication is enabled"));
    }

    #[test]
    fn password_may_contain_colons() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx(&dir);
        std::fs::write(&ctx.env_file, "SH_BASIC_AUTH=a:b:c").unwrap();

        let markup = page(&ctx, &PageParams::new()).unwrap().render();
        // split at the first colon only
        assert!(markup.contains("value=\"a\""));
        assert!(markup.contains("value=\"b:c\""));
    }

    #[test]
    fn missing_env_file_renders_disabled_form() {
        let dir = tempfile::tempdir().unwrap();
        let markup = page(&ctx(&dir), &PageParams::new()).unwrap().render();
        assert!(markup.contains("Authentication is disabled"));
    }
}
