//! Build HTML and XHTML tag trees in memory and render them as markup.
//!
//! # Scope
//!
//! This crate provides:
//! - **[`TagNode`]** - an element with ordered, case-insensitive attributes
//!   and a list of text or nested-element content
//! - **Class lists** - token operations on the `class` attribute
//! - **Void-element table** - which elements omit their closing tag by default
//! - **Rendering** - indentation-aware serialization with HTML or XHTML
//!   self-closing style
//!
//! # Not Implemented
//!
//! - Parsing markup back into a tree
//! - Validating element or attribute names against a schema
//! - Escaping beyond `&`, `<`, `>`, `"` and `'`
//!
//! # Example
//!
//! ```
//! use htmltag::TagNode;
//!
//! # fn main() -> htmltag::Result<()> {
//! let mut span = TagNode::new("span")?;
//! span.append_content("hi");
//!
//! let mut div = TagNode::new("div")?;
//! div.append_content(span);
//!
//! assert_eq!(div.to_string(), "<div>\n\t<span>hi</span>\n</div>");
//! # Ok(())
//! # }
//! ```

mod classes;
/// Error type for rejected arguments.
pub mod error;
/// Entity escaping.
pub mod escape;
/// The tag tree itself.
pub mod node;
mod render;
/// Elements without a closing tag.
pub mod void;

pub use error::{Result, TagError};
pub use escape::escape_html;
pub use node::{Attributes, Content, DEFAULT_TAG_PREFIX, TagNode};
pub use void::{VoidElement, requires_closing_tag};
