//! URL handling module for Page-Glean
//!
//! This module provides the absolute-URL predicate used to reject bad input
//! before any network activity, and resolution of relative references found
//! in a page against that page's URL.

mod resolve;
mod validate;

// Re-export main functions
pub use resolve::resolve_reference;
pub use validate::{is_valid_url, parse_absolute_url};
