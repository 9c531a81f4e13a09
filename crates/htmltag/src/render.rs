//! Serializing a tag tree to markup.
//!
//! # Layout rules
//!
//! The whitespace rules reproduce legacy output exactly and are not meant to
//! be pretty-printer rules:
//!
//! - An element with a single content item keeps that item inline after its
//!   opening tag, except that a single nested element still starts on its own
//!   line and is followed by one extra newline.
//! - An element with several items puts each on its own line, indented one
//!   level deeper, and puts its closing tag on a fresh line at its own level.
//!
//! The indent unit comes from the node the render call starts at and is handed
//! down to every descendant. Depth comes only from the level argument, so the
//! unit is repeated, never concatenated with itself.

use std::fmt;

use htmltag_common::warning::warn_once;

use crate::escape::push_escaped;
use crate::node::{Content, TagNode};

impl TagNode {
    /// Render this element and everything below it, starting `indent_level`
    /// units in.
    ///
    /// ```
    /// use htmltag::TagNode;
    ///
    /// # fn main() -> htmltag::Result<()> {
    /// let mut list = TagNode::new("ul")?;
    /// list.append_content(TagNode::new("li")?)
    ///     .append_content(TagNode::new("li")?);
    /// assert_eq!(list.render(0), "<ul>\n\t<li></li>\n\t<li></li>\n</ul>");
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn render(&self, indent_level: usize) -> String {
        let mut out = String::new();
        self.render_into(&mut out, indent_level);
        out
    }

    /// Append the rendering of this element to `out`.
    pub fn render_into(&self, out: &mut String, indent_level: usize) {
        self.write_tag(out, self.tag_prefix(), indent_level);
    }

    fn write_tag(&self, out: &mut String, unit: &str, level: usize) {
        let content = self.content();
        let count = content.len();

        if !self.closing_tag() && count > 0 {
            let _ = warn_once(
                "render",
                &format!(
                    "<{}> has content but no closing tag; output is not well-formed",
                    self.tag_type()
                ),
            );
        }

        // Opening tag
        push_indent(out, unit, level);
        out.push('<');
        out.push_str(self.tag_type());
        self.write_formatted_attributes(out);
        if self.xhtml_encoding() && !self.closing_tag() {
            out.push_str(" /");
        }
        out.push('>');

        // Content
        for (index, item) in content.iter().enumerate() {
            match item {
                Content::Text(text) => {
                    if count > 1 {
                        out.push('\n');
                        push_indent(out, unit, level + 1);
                    }
                    push_escaped(out, text);
                }
                Content::Tag(child) => {
                    out.push('\n');
                    child.write_tag(out, unit, level + 1);
                    if count == 1 && index == 0 {
                        out.push('\n');
                    }
                }
            }
        }

        // Closing tag
        if self.closing_tag() {
            if count > 1 {
                out.push('\n');
                push_indent(out, unit, level);
            }
            out.push_str("</");
            out.push_str(self.tag_type());
            out.push('>');
        }
    }

    /// The attributes as ` name="value"` pairs in insertion order, escaped.
    ///
    /// Empty when there are no attributes.
    #[must_use]
    pub fn formatted_attributes(&self) -> String {
        let mut out = String::new();
        self.write_formatted_attributes(&mut out);
        out
    }

    fn write_formatted_attributes(&self, out: &mut String) {
        for (name, value) in self.list_attributes() {
            out.push(' ');
            push_escaped(out, name);
            out.push_str("=\"");
            push_escaped(out, value);
            out.push('"');
        }
    }
}

fn push_indent(out: &mut String, unit: &str, level: usize) {
    for _ in 0..level {
        out.push_str(unit);
    }
}

impl fmt::Display for TagNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_indent_repeats_unit() {
        let mut out = String::new();
        push_indent(&mut out, "--", 3);
        assert_eq!(out, "------");
    }

    #[test]
    fn test_render_into_appends() {
        let mut out = String::from("<!DOCTYPE html>\n");
        TagNode::default().render_into(&mut out, 0);
        assert_eq!(out, "<!DOCTYPE html>\n<div></div>");
    }

    #[test]
    fn test_child_uses_parent_unit() {
        let mut child = TagNode::new("b").unwrap();
        child.set_tag_prefix("????");
        let mut parent = TagNode::new("p").unwrap();
        parent.set_tag_prefix("  ");
        parent.append_content(child).append_content("x");
        assert_eq!(parent.render(0), "<p>\n  <b></b>\n  x\n</p>");
    }
}
