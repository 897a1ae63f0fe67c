//! Document serialization for Querybind files.
//!
//! Output is deterministic so resolved batches diff cleanly:
//! - 2-space indentation
//! - Trailing newline
//! - UTF-8 encoding without BOM
//!
//! Input may be JSON or YAML, chosen by file extension.

mod json;

pub use json::*;
