//! File Navigator - a lean console file explorer with numbered selection.
//!
//! This library provides the core of file-navigator: a navigator that owns the
//! current directory, a selector that resolves typed indices against a listing
//! snapshot, and a batch operator that copies, moves or deletes the selection.
//! All filesystem access goes through the [`Filesystem`] trait, with a real
//! and an in-memory implementation.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Navigation, selection and batch operations
//! - The filesystem capability and its implementations
//! - Index parsing
//! - Error handling and result types
//! - UI templates and color system

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    // Color system
    get_colored_name,
    get_entry_color_style,
    get_entry_label,
    render_template,
    render_template_plain,
    strip_ansi_codes,

    AppConfig,

    // Data model
    BatchOperation,
    BatchOperator,
    BatchReport,
    DirectoryListing,
    EntryKind,
    // Error handling
    FileNavigatorError,
    // Filesystem capability
    Filesystem,
    InMemoryFilesystem,
    // Index parsing
    IndexParser,
    LocalFilesystem,
    NavigateOutcome,
    // State machine
    Navigator,
    Result,
    Selector,
    Session,

    TemplateContext,
    // UI and formatting
    Templates,
    TEMPLATES,
};
