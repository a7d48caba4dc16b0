//! Persisted configuration subsystem.
//!
//! # Data Flow
//! ```text
//! env file (KEY=VALUE lines)
//!     → store.rs (whole-file read)
//!     → envfile.rs (decode into ordered entries)
//!     → ConfigStore (mutated in memory by page handlers)
//!     → envfile.rs (encode)
//!     → store.rs (whole-file write, only on explicit submit)
//! ```
//!
//! # Design Decisions
//! - Reads and writes are whole-file replace operations; callers needing
//!   multi-writer safety must serialize the read-decide-write sequence
//! - A missing backing file is an empty store, not an error
//! - Entries keep insertion order; overwriting a key keeps its position

pub mod envfile;
pub mod store;

pub use store::ConfigStore;
