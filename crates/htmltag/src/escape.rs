//! Entity escaping for text and attribute output.
//!
//! Only the five characters with markup meaning are replaced. Everything else,
//! including non-ASCII text, is written through unchanged.

use std::borrow::Cow;

/// Replacement for a single character, or `None` if it is written as-is.
const fn entity_for(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#039;"),
        _ => None,
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` in `input`.
///
/// Borrows the input when nothing needs replacing.
///
/// ```
/// use htmltag::escape_html;
///
/// assert_eq!(escape_html("Tom & \"Jerry\""), "Tom &amp; &quot;Jerry&quot;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
#[must_use]
pub fn escape_html(input: &str) -> Cow<'_, str> {
    let Some(first) = input.find(|c: char| entity_for(c).is_some()) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len() + 16);
    out.push_str(&input[..first]);
    push_escaped(&mut out, &input[first..]);
    Cow::Owned(out)
}

/// Append the escaped form of `input` to `out`.
pub(crate) fn push_escaped(out: &mut String, input: &str) {
    for c in input.chars() {
        match entity_for(c) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_all_five_characters() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#039;");
    }

    #[test]
    fn test_unchanged_input_is_borrowed() {
        assert!(matches!(escape_html("nothing to do"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(escape_html("café < thé"), "café &lt; thé");
    }

    #[test]
    fn test_push_escaped_appends() {
        let mut out = String::from("x=");
        push_escaped(&mut out, "1>0");
        assert_eq!(out, "x=1&gt;0");
    }
}
