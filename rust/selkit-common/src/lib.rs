//! Core definitions (errors and argument checks), relied upon by all selkit-* crates.

pub mod error;
pub mod result;

pub use result::Result;
