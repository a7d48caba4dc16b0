//! Admin console core for a shell2http command-dispatch bridge.
//!
//! The bridge maps URL paths to shell commands; its configuration lives in
//! a `KEY=VALUE` env file whose `SH_ROUTES` entry is one shell-quoted
//! string of path/command pairs. This crate edits that file through a small
//! page-based web UI: request parameters in, one markup document out. The
//! surrounding HTTP transport is the caller's concern.

pub mod config;
pub mod error;
pub mod markup;
pub mod pages;
pub mod render;
pub mod routes;

pub use error::AdminError;
pub use pages::{default_registry, PageContext, PageRegistry};
pub use render::DocumentRenderer;
