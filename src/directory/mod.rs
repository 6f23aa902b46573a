//! Legislative directory: data model, fixture loading/validation, search.

pub mod fixture;
pub mod model;
pub mod search;
