//! Helpers for JSX codemods over the SWC syntax tree.
//!
//! The crate reads and rewrites parsed modules in place: classify nodes
//! ([`classify`]), build new fragments ([`build`]), edit element attributes
//! ([`attributes`]), normalize `className` ([`class_name`]), manage import
//! declarations ([`imports`]) and walk or reshape the tree ([`traversal`]). Parsing
//! and printing are left to the caller's SWC setup.

pub mod attributes;
pub mod build;
pub mod class_name;
pub mod classify;
pub mod error;
pub mod imports;
pub mod matcher;
pub mod traversal;

#[cfg(test)]
mod test_utils;

pub use error::{Error, Result};
pub use matcher::{is_string_matching, Matcher};
