//! Common assertion helpers for test output validation
//!
//! Provides predicates for the lines the menu prints.

#![allow(dead_code)]

use predicates::prelude::*;

/// Matches the directory header line
pub fn has_directory_header() -> impl Predicate<str> {
    predicates::str::contains("Current Directory:")
}

/// Matches one numbered listing line
pub fn has_entry(index: usize, kind: &str, name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{index}. ")).and(predicates::str::contains(format!(
        "{kind}: {name}"
    )))
}

/// Matches a batch summary line
pub fn has_summary(count: usize, action: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{count} {action}"))
}

/// Matches any printed error
pub fn has_error(message: &str) -> impl Predicate<str> {
    predicates::str::contains("Error:").and(predicates::str::contains(message.to_string()))
}

pub fn says_goodbye() -> impl Predicate<str> {
    predicates::str::contains("Goodbye!")
}
