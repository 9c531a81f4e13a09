//! Builder warnings with colored terminal output.
//!
//! Provides deduplication so rendering the same malformed tree in a loop
//! reports the problem once.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock can only leave a half-filled set behind.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Warn about a suspicious tree (prints once per unique message).
///
/// Returns `true` if this call printed the warning.
///
/// Every distinct message is remembered until [`clear_warnings`]; long-lived
/// callers that build many different trees should clear periodically.
///
/// # Example
/// ```
/// use htmltag_common::warning::warn_once;
///
/// let _ = warn_once("render", "<br> has content but no closing tag");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_print = warned().get_or_insert_with(HashSet::new).insert(key);

    if should_print {
        eprintln!("{}", format!("[htmltag {component}] ⚠ {message}").yellow());
    }
    should_print
}

/// Number of distinct warnings recorded since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    warned().as_ref().map_or(0, HashSet::len)
}

/// Clear all recorded warnings.
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
