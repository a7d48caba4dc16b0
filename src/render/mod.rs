//! Document rendering.
//!
//! # Responsibilities
//! - Dispatch the request to a page and wrap the result in the page template
//! - Build the navigation bar from the registry, in registration order
//! - Emit the diagnostic footer (render time, optional environment dump)
//!
//! # Design Decisions
//! - Template substitution is single-pass: substituted values are never
//!   re-scanned for placeholders
//! - The environment dump exposes the whole process environment and is
//!   therefore an explicit opt-out ([`DocumentRenderer::with_env_dump`])
//! - Rendering never fails for request input; the only error paths are
//!   storage failures from handlers and an empty registry

use std::path::PathBuf;
use std::time::Instant;

use crate::error::AdminError;
use crate::markup::el;
use crate::pages::{PageContext, PageParams, PageRegistry};

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Admin > $title</title>
<style>$styles</style>
</head>
<body>
<nav>$navigation<hr></nav>
<main><h1>$title</h1>
$content
</main>
<footer>$footer</footer>
</body>
</html>"#;

const STYLES: &str = r#"
html { font-size: 50%; font-family: -apple-system, "Segoe UI", Roboto, Arial, sans-serif; }
body {
  font-size: 1.8rem;
  line-height: 1.618;
  max-width: 50em;
  margin: auto;
  color: #c9c9c9;
  background-color: #222222;
  padding: 13px;
}
h1, h2, h3 { line-height: 1.1; font-weight: 700; margin-top: 3rem; margin-bottom: 1.5rem; }
a { text-decoration: none; color: #ffffff; }
a:hover { color: #c9c9c9; border-bottom: 2px solid #c9c9c9; }
hr { border-color: #ffffff; }
pre { background-color: #4a4a4a; display: block; padding: 1em; overflow-x: auto; }
code { font-size: 0.9em; padding: 0 0.5em; background-color: #4a4a4a; white-space: pre-wrap; }
table { text-align: justify; width: 100%; border-collapse: collapse; }
td, th { padding: 0.5em; border-bottom: 1px solid #4a4a4a; }
input[type="submit"], input[type="reset"], input[type="button"] {
  display: inline-block;
  padding: 5px 10px;
  background-color: #ffffff;
  color: #222222;
  border: 1px solid #ffffff;
  border-radius: 1px;
  cursor: pointer;
}
textarea, select, input[type] {
  color: #c9c9c9;
  padding: 6px 10px;
  margin-bottom: 10px;
  background-color: #4a4a4a;
  border: 1px solid #4a4a4a;
  border-radius: 4px;
}
label, legend, fieldset { display: block; margin-bottom: .5rem; font-weight: 600; }
"#;

/// Renders one complete document per request: dispatches to a page, then
/// substitutes title, navigation, content, and footer into the template.
pub struct DocumentRenderer {
    registry: PageRegistry,
    ctx: PageContext,
    env_dump: bool,
}

impl DocumentRenderer {
    pub fn new(registry: PageRegistry, env_file: PathBuf) -> Self {
        Self {
            registry,
            ctx: PageContext { env_file },
            env_dump: true,
        }
    }

    /// The footer's environment dump prints every process environment
    /// variable into the document. Pass `false` to omit it.
    pub fn with_env_dump(mut self, enabled: bool) -> Self {
        self.env_dump = enabled;
        self
    }

    /// Produce the full document for one request.
    pub fn render(&self, params: &PageParams) -> Result<String, AdminError> {
        let start = Instant::now();
        let (title, content) = self.registry.dispatch(&self.ctx, params)?;
        let navigation = self.navigation();
        let footer = self.footer(start);
        tracing::debug!(title = %title, "page rendered");
        Ok(substitute(
            PAGE_TEMPLATE,
            &[
                ("title", &title),
                ("navigation", &navigation),
                ("content", &content),
                ("footer", &footer),
                ("styles", STYLES),
            ],
        ))
    }

    /// Fixed home link first, then one link per registered page.
    fn navigation(&self) -> String {
        let home = ("[ shell2http ]".to_string(), "../".to_string());
        std::iter::once(home)
            .chain(
                self.registry
                    .entries()
                    .map(|(key, title)| (title.to_string(), format!("?page={key}"))),
            )
            .map(|(label, href)| el("a").attr("href", href).child(label.as_str()).render())
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn footer(&self, start: Instant) -> String {
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        let mut footer = format!("<hr>Page rendered in {elapsed_ms:.2} ms.");
        if self.env_dump {
            let env = std::env::vars()
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<_>>()
                .join("\n");
            let details = el("details")
                .child(el("summary").child("environment"))
                .child(el("pre").child(el("code").child(env)));
            footer.push_str("<br>");
            footer.push_str(&details.render());
        }
        footer
    }
}

/// Replace `$name` placeholders in a single left-to-right pass, so values
/// containing `$` sequences are emitted verbatim.
fn substitute(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match vars.iter().find(|(name, _)| rest[1..].starts_with(name)) {
            Some((name, value)) => {
                out.push_str(value);
                rest = &rest[1 + name.len()..];
            }
            None => {
                out.push('$');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
