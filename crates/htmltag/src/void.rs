//! The void-element table.
//!
//! Elements listed here get no closing tag unless the caller asks for one.
//! The set is the legacy HTML 4 list, including obsolete entries such as
//! `isindex` and `basefont`, so existing output stays byte-for-byte stable.

use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// An element type that has no closing tag by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VoidElement {
    /// `<img>`
    Img,
    /// `<input>`
    Input,
    /// `<br>`
    Br,
    /// `<hr>`
    Hr,
    /// `<frame>`
    Frame,
    /// `<area>`
    Area,
    /// `<base>`
    Base,
    /// `<basefont>`
    Basefont,
    /// `<col>`
    Col,
    /// `<isindex>`
    Isindex,
    /// `<link>`
    Link,
    /// `<meta>`
    Meta,
    /// `<param>`
    Param,
}

impl VoidElement {
    /// Look up `tag_type` in the table, ignoring ASCII case.
    #[must_use]
    pub fn lookup(tag_type: &str) -> Option<Self> {
        Self::from_str(tag_type).ok()
    }

    /// The canonical lower-case element name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Whether an element of `tag_type` gets a closing tag when none is requested
/// explicitly.
///
/// ```
/// use htmltag::requires_closing_tag;
///
/// assert!(requires_closing_tag("div"));
/// assert!(!requires_closing_tag("IMG"));
/// ```
#[must_use]
pub fn requires_closing_tag(tag_type: &str) -> bool {
    VoidElement::lookup(tag_type).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_table_has_thirteen_entries() {
        assert_eq!(VoidElement::iter().count(), 13);
    }

    #[test]
    fn test_every_entry_round_trips_through_its_name() {
        for element in VoidElement::iter() {
            assert_eq!(VoidElement::lookup(element.name()), Some(element));
            assert_eq!(element.to_string(), element.name());
        }
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(VoidElement::lookup("Meta"), Some(VoidElement::Meta));
        assert_eq!(VoidElement::lookup("BASEFONT"), Some(VoidElement::Basefont));
    }

    #[test]
    fn test_ordinary_elements_close() {
        for tag in ["div", "span", "p", "script", "textarea", "source", "wbr"] {
            assert!(requires_closing_tag(tag), "{tag} should close");
        }
    }

    #[test]
    fn test_void_elements_do_not_close() {
        for tag in ["img", "input", "br", "hr", "frame", "area", "base", "col", "link", "param"] {
            assert!(!requires_closing_tag(tag), "{tag} should not close");
        }
    }
}
