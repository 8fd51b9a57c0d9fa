//! Frontmatter parsing.
//!
//! Notes carry an optional YAML block delimited by `---` lines at the very
//! start of the file. The block is split off the body and deserialized into
//! an insertion-ordered mapping; a note without a block simply has no
//! frontmatter, never an error.

pub mod parser;
pub mod types;

pub use parser::{FrontmatterParseError, parse};
pub use types::{Frontmatter, ParsedDocument};
