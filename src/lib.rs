#![forbid(unsafe_code)]

//! Government services directory toolkit (govdir).
//!
//! The core is a schema-agnostic recursive renderer for legislative chamber
//! records: arbitrarily nested fixture JSON becomes a navigable display tree
//! (officials grids, committee grids, key-value blocks, labeled sections)
//! without a fixed schema per chamber. Around it:
//!
//! 1. **Directory model** — chamber records with fixed header fields and a
//!    free-form body, load-time fixture validation, slug lookup
//! 2. **Committee search** — case-insensitive substring filter
//! 3. **Region splitter** — offline one-JSON-array-in, one-file-per-slug-out
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use gov_directory::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use gov_directory::directory::fixture::Directory;
//! use gov_directory::render::renderer::DirectoryRenderer;
//! ```

pub mod prelude;

pub mod core;
pub mod directory;
pub mod render;
pub mod split;
