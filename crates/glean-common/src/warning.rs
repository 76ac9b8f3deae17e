//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the front end to report input that the explainers had to degrade
//! (an unterminated character class, a leftover token that is not a tag name).

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::{OwoColorize, Stream};

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Record `key` and report whether it was new.
fn first_sighting(key: String) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about degraded input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("regex", "unterminated character class at offset 4");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if first_sighting(format!("[{component}] {message}")) {
        let line = format!("[glean {component}] ⚠ {message}");
        eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.yellow()));
    }
}

/// Clear all recorded warnings (call before processing an unrelated batch)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
