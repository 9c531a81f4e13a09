//! The tag tree.
//!
//! A [`TagNode`] owns its attributes and its content. Nested elements are
//! moved into their parent, so a tree is a plain owned value that can be
//! cloned, compared, rendered from several threads, or dumped with serde.

use indexmap::IndexMap;
use serde::Serialize;

use htmltag_common::warning::warn_once;

use crate::error::{EMPTY_ATTRIBUTE_NAME, EMPTY_TAG_TYPE, Result, require_non_empty};
use crate::void::{VoidElement, requires_closing_tag};

/// Indent unit used by a freshly constructed node.
pub const DEFAULT_TAG_PREFIX: &str = "\t";

/// Ordered attribute map. Keys are always lower-case.
pub type Attributes = IndexMap<String, String>;

/// One item inside an element: literal text or a nested element.
///
/// Text is stored raw and escaped when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Content {
    /// Literal text.
    Text(String),
    /// A nested element.
    Tag(TagNode),
}

impl Content {
    /// The text, if this item is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Tag(_) => None,
        }
    }

    /// The nested element, if this item is one.
    #[must_use]
    pub const fn as_tag(&self) -> Option<&TagNode> {
        match self {
            Self::Tag(tag) => Some(tag),
            Self::Text(_) => None,
        }
    }

    /// Mutable access to the nested element, if this item is one.
    pub const fn as_tag_mut(&mut self) -> Option<&mut TagNode> {
        match self {
            Self::Tag(tag) => Some(tag),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<TagNode> for Content {
    fn from(tag: TagNode) -> Self {
        Self::Tag(tag)
    }
}

/// A single markup element and everything nested inside it.
///
/// Mutators validate their arguments first and return `&mut Self`, so calls
/// chain:
///
/// ```
/// use htmltag::TagNode;
///
/// # fn main() -> htmltag::Result<()> {
/// let mut link = TagNode::new("a")?;
/// link.set_attribute("href", "/about")?
///     .add_class("nav")?
///     .append_content("About");
/// assert_eq!(link.to_string(), r#"<a href="/about" class="nav">About</a>"#);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagNode {
    tag_type: String,
    attributes: Attributes,
    content: Vec<Content>,
    closing_tag: bool,
    xhtml_encoding: bool,
    tag_prefix: String,
}

impl TagNode {
    /// Create an HTML element whose closing tag follows the void-element table.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::InvalidArgument`](crate::TagError::InvalidArgument)
    /// if `tag_type` is empty.
    pub fn new(tag_type: impl Into<String>) -> Result<Self> {
        Self::with_options(tag_type, None, false)
    }

    /// Create an element with explicit overrides.
    ///
    /// `closing_tag` of `None` consults the void-element table; `Some(_)`
    /// forces the choice. `xhtml_encoding` makes non-closing elements render
    /// as `<tag ... />`.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::InvalidArgument`](crate::TagError::InvalidArgument)
    /// if `tag_type` is empty.
    pub fn with_options(
        tag_type: impl Into<String>,
        closing_tag: Option<bool>,
        xhtml_encoding: bool,
    ) -> Result<Self> {
        let tag_type = tag_type.into();
        require_non_empty(&tag_type, "TagNode::new", EMPTY_TAG_TYPE)?;
        let closing_tag = closing_tag.unwrap_or_else(|| requires_closing_tag(&tag_type));
        Ok(Self::from_parts(tag_type, closing_tag, xhtml_encoding))
    }

    /// Empty node around an already validated tag type.
    fn from_parts(tag_type: String, closing_tag: bool, xhtml_encoding: bool) -> Self {
        Self {
            tag_type,
            attributes: Attributes::new(),
            content: Vec::new(),
            closing_tag,
            xhtml_encoding,
            tag_prefix: DEFAULT_TAG_PREFIX.to_string(),
        }
    }

    /// The element name, exactly as given at construction.
    #[must_use]
    pub fn tag_type(&self) -> &str {
        &self.tag_type
    }

    // ========== attributes ==========

    /// Set `name` (case-insensitive) to `value`, replacing any previous value.
    ///
    /// A replaced attribute keeps its original position in the output.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `name` is empty.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> Result<&mut Self> {
        require_non_empty(name, "set_attribute", EMPTY_ATTRIBUTE_NAME)?;
        let _ = self
            .attributes
            .insert(name.to_ascii_lowercase(), value.into());
        Ok(self)
    }

    /// The value stored under `name` (case-insensitive), if any.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `name` is empty.
    pub fn get_attribute(&self, name: &str) -> Result<Option<&str>> {
        require_non_empty(name, "get_attribute", EMPTY_ATTRIBUTE_NAME)?;
        Ok(self
            .attributes
            .get(&name.to_ascii_lowercase())
            .map(String::as_str))
    }

    /// Remove `name` (case-insensitive). Removing an absent attribute is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `name` is empty.
    pub fn remove_attribute(&mut self, name: &str) -> Result<&mut Self> {
        require_non_empty(name, "remove_attribute", EMPTY_ATTRIBUTE_NAME)?;
        let _ = self.attributes.shift_remove(&name.to_ascii_lowercase());
        Ok(self)
    }

    /// Whether `name` (case-insensitive) is set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `name` is empty.
    pub fn has_attribute(&self, name: &str) -> Result<bool> {
        require_non_empty(name, "has_attribute", EMPTY_ATTRIBUTE_NAME)?;
        Ok(self.attributes.contains_key(&name.to_ascii_lowercase()))
    }

    /// All attributes in insertion order.
    #[must_use]
    pub const fn list_attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub(crate) const fn list_attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    // ========== content ==========

    /// Add `item` after the existing content.
    ///
    /// Content implies a closing tag, so this also turns the closing tag on.
    pub fn append_content(&mut self, item: impl Into<Content>) -> &mut Self {
        self.content.push(item.into());
        self.require_closing_tag_for_content();
        self
    }

    /// Add `item` before the existing content.
    ///
    /// Content implies a closing tag, so this also turns the closing tag on.
    pub fn prepend_content(&mut self, item: impl Into<Content>) -> &mut Self {
        self.content.insert(0, item.into());
        self.require_closing_tag_for_content();
        self
    }

    fn require_closing_tag_for_content(&mut self) {
        if self.closing_tag {
            return;
        }
        if VoidElement::lookup(&self.tag_type).is_some() {
            let _ = warn_once(
                "content",
                &format!("<{}> received content; enabling its closing tag", self.tag_type),
            );
        }
        self.closing_tag = true;
    }

    /// Drop all content. The closing tag setting is left alone.
    pub fn clear_content(&mut self) -> &mut Self {
        self.content.clear();
        self
    }

    /// The content items in render order.
    #[must_use]
    pub fn content(&self) -> &[Content] {
        &self.content
    }

    /// Mutable access to the existing content items.
    ///
    /// Items can be edited in place but not added or removed; use
    /// [`append_content`](Self::append_content) and friends for that.
    pub fn content_mut(&mut self) -> &mut [Content] {
        &mut self.content
    }

    // ========== flags ==========

    /// Force the closing tag on or off.
    pub const fn set_closing_tag(&mut self, enable: bool) -> &mut Self {
        self.closing_tag = enable;
        self
    }

    /// Whether `</tag>` is emitted.
    #[must_use]
    pub const fn closing_tag(&self) -> bool {
        self.closing_tag
    }

    /// Switch between HTML (`<br>`) and XHTML (`<br />`) style for elements
    /// without a closing tag.
    pub const fn set_xhtml_encoding(&mut self, enable: bool) -> &mut Self {
        self.xhtml_encoding = enable;
        self
    }

    /// Whether non-closing elements self-close with `" />"`.
    #[must_use]
    pub const fn xhtml_encoding(&self) -> bool {
        self.xhtml_encoding
    }

    /// Set the indent unit used when this node is rendered as the root of a
    /// render call. Nested elements always use their parent's unit.
    pub fn set_tag_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.tag_prefix = prefix.into();
        self
    }

    /// The indent unit, one tab by default.
    #[must_use]
    pub fn tag_prefix(&self) -> &str {
        &self.tag_prefix
    }
}

impl Default for TagNode {
    /// An empty `<div></div>`.
    fn default() -> Self {
        Self::from_parts("div".to_string(), true, false)
    }
}
