//! # Indenter
//!
//! Indent text to arbitrary levels with scope guards instead of hand-built
//! whitespace.
//!
//! ```
//! use indenter::Indenter;
//!
//! let mut ind = Indenter::new();
//! let lines = ind.scoped(|ind| {
//!     let mut lines = vec![&*ind + "first level"];
//!     lines.push(ind.scoped(|ind| &*ind + "second level"));
//!     lines.push(&*ind + "first level again");
//!     lines
//! });
//!
//! assert_eq!(lines, ["  first level", "    second level", "  first level again"]);
//! ```

pub mod config;
pub mod error;
pub mod indent;

pub use config::*;
pub use error::IndentError;
pub use indent::*;
