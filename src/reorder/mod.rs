//! Reordering of path entries by rule.
//!
//! This module handles:
//! - Parsing reorder specs (`SELECTOR:ACTION;...`)
//! - Applying the parsed rules to a path sequence

pub mod engine;
pub mod parser;

pub use engine::apply_rules;
pub use parser::{Action, ReorderRule, ReorderSpec};
