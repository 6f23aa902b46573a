//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use gov_directory::prelude::*;
//! ```

// Core
pub use crate::core::config::Config;
pub use crate::core::errors::{GovDirError, Result};

// Directory
pub use crate::directory::fixture::{Directory, FixtureIssue, IssueSeverity};
pub use crate::directory::model::{ChamberRecord, Committee, Official};
pub use crate::directory::search::filter_committees;

// Render
pub use crate::render::classify::{JsonClass, classify, is_simple_object};
pub use crate::render::label::humanize_key;
pub use crate::render::node::RenderNode;
pub use crate::render::registry::{SectionRegistry, SectionRenderer};
pub use crate::render::renderer::{DirectoryRenderer, PageView};

// Split
pub use crate::split::{SplitReport, split_regions};
