//! Recursive directory renderer: classification, registry dispatch, display
//! tree, labels, and terminal presentation.

pub mod classify;
pub mod label;
pub mod node;
pub mod registry;
pub mod renderer;
#[cfg(feature = "cli")]
pub mod text;
