//! Class-list operations layered on the `class` attribute.
//!
//! The attribute value is treated as a list of single-space separated tokens
//! compared without regard to ASCII case. Every mutation leaves the value
//! trimmed, with single spaces and no duplicate tokens.

use crate::error::{EMPTY_CLASS_NAME, Result, require_non_empty};
use crate::node::TagNode;

const CLASS: &str = "class";

/// Collapse whitespace runs to a single space and trim both ends.
fn normalize(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl TagNode {
    fn class_value(&self) -> Option<&str> {
        self.list_attributes().get(CLASS).map(String::as_str)
    }

    /// The normalized class list, or an empty string if there is none.
    #[must_use]
    pub fn classes(&self) -> String {
        self.class_value().map(normalize).unwrap_or_default()
    }

    /// Whether `name` is one of the class tokens, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `name` is empty.
    pub fn has_class(&self, name: &str) -> Result<bool> {
        require_non_empty(name, "has_class", EMPTY_CLASS_NAME)?;
        Ok(self.contains_class(name))
    }

    fn contains_class(&self, name: &str) -> bool {
        self.classes()
            .split(' ')
            .any(|token| token.eq_ignore_ascii_case(name))
    }

    /// Add `name` unless an equal token is already present.
    ///
    /// Whitespace inside `name` separates tokens; each one is added on its own
    /// so the list never holds duplicates.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `name` is empty.
    pub fn add_class(&mut self, name: &str) -> Result<&mut Self> {
        require_non_empty(name, "add_class", EMPTY_CLASS_NAME)?;

        let mut classes = self.classes();
        for token in name.split_whitespace() {
            if classes
                .split(' ')
                .any(|existing| existing.eq_ignore_ascii_case(token))
            {
                continue;
            }
            if !classes.is_empty() {
                classes.push(' ');
            }
            classes.push_str(token);
        }

        let changed = match self.class_value() {
            Some(current) => current != classes,
            None => !classes.is_empty(),
        };
        if changed {
            self.set_attribute(CLASS, classes)?;
        }
        Ok(self)
    }

    /// Remove every token equal to `name`, ignoring ASCII case.
    ///
    /// The list is rebuilt from the surviving tokens. If none survive the
    /// `class` attribute is removed altogether.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `name` is empty.
    pub fn remove_class(&mut self, name: &str) -> Result<&mut Self> {
        require_non_empty(name, "remove_class", EMPTY_CLASS_NAME)?;

        let old = self.classes();
        self.clear_classes();
        for token in old.split(' ') {
            if token.trim().is_empty() || token.eq_ignore_ascii_case(name) {
                continue;
            }
            self.add_class(token)?;
        }
        Ok(self)
    }

    /// Remove the `class` attribute.
    pub fn clear_classes(&mut self) -> &mut Self {
        let _ = self.list_attributes_mut().shift_remove(CLASS);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_and_trims() {
        assert_eq!(normalize("  a \t b\n\nc  "), "a b c");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_add_class_to_messy_attribute_normalizes_it() {
        let mut tag = TagNode::default();
        tag.set_attribute("class", "  one   two ").unwrap();
        tag.add_class("three").unwrap();
        assert_eq!(tag.get_attribute("class").unwrap(), Some("one two three"));
    }

    #[test]
    fn test_whitespace_only_name_does_not_create_attribute() {
        let mut tag = TagNode::default();
        tag.add_class("   ").unwrap();
        assert!(!tag.has_attribute("class").unwrap());
    }
}
