//! Core functionality for the file-navigator tool.
//!
//! This module provides the navigation, selection and batch operation state
//! machine, the filesystem capability it runs on, error handling and the
//! output helpers used by the commands.

pub mod batch;
pub mod colors;
pub mod config;
pub mod dirs;
pub mod error;
pub mod filesystem;
pub mod index_parser;
pub mod navigator;
pub mod output;
pub mod selector;
pub mod session;
pub mod state;
pub mod templates;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{FileNavigatorError, Result};

// === Filesystem capability ===
// The only dynamic-dispatch seam: real filesystem or in-memory tree
pub use filesystem::{Filesystem, InMemoryFilesystem, LocalFilesystem};

// === State machine ===
// Current directory, selection snapshot and batch operations over it
pub use batch::BatchOperator;
pub use navigator::Navigator;
pub use selector::Selector;
pub use session::Session;

// === Data model ===
pub use state::{BatchOperation, BatchReport, DirectoryListing, EntryKind, NavigateOutcome};

// === Index parsing ===
// Parser for selection input like "0, 3,5" -> [0, 3, 5]
pub use index_parser::IndexParser;

// === Configuration ===
pub use config::AppConfig;

// === UI templates ===
pub use templates::{
    render_template, render_template_plain, strip_ansi_codes, TemplateContext, Templates, TEMPLATES,
};

// === Color system ===
pub use colors::{get_colored_name, get_entry_color_style, get_entry_label};

// === Output formatting ===
pub use output::{
    print_error, print_info, print_prompt, print_section_header, print_success, print_warning,
};
