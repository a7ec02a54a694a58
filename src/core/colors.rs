//! Color mapping for directory entries.
//!
//! One place decides how folders and files look so that the directory
//! listing and the selection summary stay consistent.
//!
//! # Color Scheme
//! - **Directories**: blue, bold
//! - **Files**: white

use crate::core::state::EntryKind;
use colored::*;

/// Returns a closure that applies the color of `kind` to any text
pub fn get_entry_color_style(kind: EntryKind) -> Box<dyn Fn(&str) -> ColoredString> {
    match kind {
        EntryKind::Directory => Box::new(|text: &str| text.blue().bold()),
        EntryKind::File => Box::new(|text: &str| text.white()),
    }
}

/// Colored "📁 Folder" / "📄 File" label
pub fn get_entry_label(kind: EntryKind) -> ColoredString {
    get_entry_color_style(kind)(kind.label())
}

pub fn get_colored_name(kind: EntryKind, name: &str) -> ColoredString {
    get_entry_color_style(kind)(name)
}
