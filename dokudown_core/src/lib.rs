//! `dokudown_core` converts Markdown into DokuWiki markup one line at a time.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Markdown file
//!   -> LineSource (reads lines in file order, terminators stripped)
//!   -> LineTransformer (classifies each line and rewrites it, tracking list depth,
//!      code block state and trailing blank lines)
//!   -> OutputTarget (writes the finished document to a file or stdout)
//! ```
//!
//! Each line is checked, in order, for a code fence (or verbatim code block
//! content), a header, and a numbered list item. Whatever is left passes
//! through unchanged.
//!
//! | Markdown        | DokuWiki              |
//! | --------------- | --------------------- |
//! | `# Title`       | `===== Title =====`   |
//! | `##### Small`   | `= Small =`           |
//! | `1. item`       | `  - item`            |
//! | `   1. nested`  | `    - nested`        |
//! | ```` ```rust ```` | `<code rust>`       |
//! | ```` ``` ````   | `</code>`             |
//!
//! Blank lines directly above a list item are dropped, and a code block
//! opened inside a list is attached to the end of the list item above it.
//!
//! ## Key Types
//!
//! - [`LineTransformer`] — The single-pass conversion state machine.
//! - [`LineSource`] — Line reader over any [`std::io::BufRead`].
//! - [`OutputTarget`] — File or stdout destination.
//! - [`SerializedTransformer`] — Queue-backed transformer for async line
//!   delivery.
//! - [`DokudownConfig`] — Configuration loaded from `dokudown.toml`.
//!
//! ## Quick Start
//!
//! ```rust
//! let lines = dokudown_core::convert_str("# Title\n\n1. one\n2. two\n");
//! assert_eq!(lines, vec!["===== Title =====", "  - one", "  - two"]);
//! ```

pub use config::*;
pub use convert::*;
pub use error::*;
pub use list_stack::*;
pub use output::*;
pub use queue::*;
pub use sink::*;
pub use source::*;
pub use transformer::*;

pub mod config;
mod convert;
#[allow(unused_assignments)]
mod error;
mod list_stack;
mod output;
pub mod patterns;
mod queue;
mod sink;
mod source;
mod transformer;
