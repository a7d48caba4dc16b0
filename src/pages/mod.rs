//! Page registry and dispatch.
//!
//! # Data Flow
//! ```text
//! request parameters (flat string map)
//!     → dispatch: pop "page" key (default: first registration)
//!     → look up handler in registration order
//!     → handler(context, remaining params) → markup fragment
//!     → (title, rendered fragment) back to the renderer
//! ```
//!
//! # Design Decisions
//! - The registry is an explicit object built at startup and passed by
//!   reference, not a process-wide table
//! - Registration order is significant: first page is the default, and
//!   navigation follows the same order
//! - Re-registering a key replaces its handler/title but keeps its position
//! - Unknown page keys render a fixed not-found fragment, never an error

pub mod auth;
pub mod routing;

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::error::AdminError;
use crate::markup::{el, Element};

/// Flat request parameters, from the query string and/or form body.
pub type PageParams = IndexMap<String, String>;

/// Shared state handed to every page handler.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Location of the persisted env file.
    pub env_file: PathBuf,
}

/// A page handler: request parameters in, markup fragment out.
pub type PageHandler = fn(&PageContext, &PageParams) -> Result<Element, AdminError>;

struct PageEntry {
    handler: PageHandler,
    title: String,
}

/// Ordered collection of page key → (handler, title) registrations.
pub struct PageRegistry {
    pages: IndexMap<String, PageEntry>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self {
            pages: IndexMap::new(),
        }
    }

    /// Register a page. Without an explicit title one is derived from the
    /// key (separators become spaces, words are title-cased). Registering
    /// an existing key overwrites it in place.
    pub fn register(&mut self, key: &str, handler: PageHandler, title: Option<&str>) {
        let title = title
            .map(str::to_string)
            .unwrap_or_else(|| derive_title(key));
        self.pages.insert(key.to_string(), PageEntry { handler, title });
    }

    /// Select and invoke a handler from request parameters.
    ///
    /// Pops the `page` parameter (falling back to the first registration),
    /// renders a fixed not-found page for unknown keys, and returns the
    /// page title alongside its rendered fragment. Handler failures
    /// propagate.
    pub fn dispatch(
        &self,
        ctx: &PageContext,
        params: &PageParams,
    ) -> Result<(String, String), AdminError> {
        let default = self.pages.keys().next().ok_or(AdminError::NoPages)?;

        let mut params = params.clone();
        let key = params
            .shift_remove("page")
            .unwrap_or_else(|| default.clone());

        match self.pages.get(&key) {
            None => {
                tracing::debug!(page = %key, "unknown page requested");
                Ok((
                    "Page not found".to_string(),
                    el("p").child("Could not find the page requested").render(),
                ))
            }
            Some(entry) => {
                let fragment = (entry.handler)(ctx, &params)?;
                Ok((entry.title.clone(), fragment.render()))
            }
        }
    }

    /// (key, title) pairs in registration order, for navigation links.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pages
            .iter()
            .map(|(key, entry)| (key.as_str(), entry.title.as_str()))
    }
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry with the stock pages: routing first (the default page), then
/// authentication.
pub fn default_registry() -> PageRegistry {
    let mut registry = PageRegistry::new();
    registry.register("routing", routing::page, None);
    registry.register("auth", auth::page, Some("Authentication"));
    registry
}

fn derive_title(key: &str) -> String {
    key.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
