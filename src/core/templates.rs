//! Template system for consistent output formatting.
//!
//! Every line the menu prints about directories and selections comes from a
//! template in [`TEMPLATES`], rendered with a [`TemplateContext`].
//!
//! # Public API
//! - [`Templates`]: Template definitions for all output sections
//! - [`TemplateContext`]: Context data for template rendering
//! - [`TEMPLATES`]: Global template instance
//! - [`render_template`]: Rendering with colors
//! - [`render_template_plain`]: Plain text rendering
//! - [`strip_ansi_codes`]: Removes color codes
//!
//! # Placeholders
//! `{path}`, `{n}`, `{entry_type}`, `{name}`, `{count}`, `{action}`.
//! Unknown placeholders are kept verbatim; placeholders without a value in
//! the context render as nothing.

use crate::core::{
    colors::{get_colored_name, get_entry_label},
    state::EntryKind,
};
use colored::*;
use std::fmt::Write;
use std::path::Path;

/// Template definitions for all output formatting
pub struct Templates {
    // Menu
    pub menu_header: &'static str,
    pub menu_items: &'static [&'static str],
    pub prompt_choice: &'static str,

    // Directory listing
    pub directory_header: &'static str,
    pub directory_separator: &'static str,
    pub entry_line: &'static str,

    // Selection
    pub selected_header: &'static str,
    pub selected_line: &'static str,

    // Batch summaries
    pub batch_summary: &'static str,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    menu_header: "--- File Explorer ---",
    menu_items: &[
        "1. Display Directory",
        "2. Navigate",
        "3. Go to Parent Directory",
        "4. Select Files",
        "5. Copy",
        "6. Move",
        "7. Delete",
        "8. Quit",
    ],
    prompt_choice: "Your choice: ",
    directory_header: "Current Directory: {path}",
    directory_separator: "--------------------------------------------------",
    entry_line: "{n}. {entry_type}: {name}",
    selected_header: "Selected files:",
    selected_line: " - {name}",
    batch_summary: "{count} {action}",
};

/// Context for template rendering
#[derive(Debug, Default)]
pub struct TemplateContext<'a> {
    pub path: Option<&'a Path>,
    pub n: Option<usize>,
    pub entry_kind: Option<EntryKind>,
    pub name: Option<&'a str>,
    pub count: Option<usize>,
    pub action: Option<&'a str>,
}

/// Render a template with context and apply colors
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    render(template, context, true)
}

/// Render a template without any color codes
pub fn render_template_plain(template: &str, context: &TemplateContext) -> String {
    render(template, context, false)
}

fn render(template: &str, context: &TemplateContext, colored: bool) -> String {
    let mut output = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                push_placeholder(&mut output, &after[..close], context, colored);
                rest = &after[close + 1..];
            }
            None => {
                // No closing brace, treat as literal
                output.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    output.push_str(rest);

    output
}

fn push_placeholder(output: &mut String, placeholder: &str, context: &TemplateContext, colored: bool) {
    let kind = context.entry_kind.unwrap_or(EntryKind::File);
    match placeholder {
        "path" => {
            if let Some(path) = context.path {
                let text = path.display().to_string();
                if colored {
                    let _ = write!(output, "{}", text.cyan());
                } else {
                    output.push_str(&text);
                }
            }
        }
        "n" => {
            if let Some(n) = context.n {
                let _ = write!(output, "{n}");
            }
        }
        "entry_type" => {
            if colored {
                let _ = write!(output, "{}", get_entry_label(kind));
            } else {
                output.push_str(kind.label());
            }
        }
        "name" => {
            if let Some(name) = context.name {
                if colored {
                    let _ = write!(output, "{}", get_colored_name(kind, name));
                } else {
                    output.push_str(name);
                }
            }
        }
        "count" => {
            if let Some(count) = context.count {
                let _ = write!(output, "{count}");
            }
        }
        "action" => {
            if let Some(action) = context.action {
                output.push_str(action);
            }
        }
        _ => {
            // Unknown placeholder, keep as-is
            output.push('{');
            output.push_str(placeholder);
            output.push('}');
        }
    }
}

/// Strip ANSI color codes
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_entry_line() {
        let context = TemplateContext {
            n: Some(3),
            entry_kind: Some(EntryKind::Directory),
            name: Some("projects"),
            ..Default::default()
        };
        let result = render_template_plain(TEMPLATES.entry_line, &context);
        assert_eq!(result, "3. 📁 Folder: projects");
    }

    #[test]
    fn test_colored_render_strips_to_plain() {
        let context = TemplateContext {
            n: Some(0),
            entry_kind: Some(EntryKind::File),
            name: Some("notes.txt"),
            ..Default::default()
        };
        let colored = render_template(TEMPLATES.entry_line, &context);
        assert_eq!(
            strip_ansi_codes(&colored),
            render_template_plain(TEMPLATES.entry_line, &context)
        );
    }

    #[test]
    fn test_render_directory_header() {
        let context = TemplateContext {
            path: Some(Path::new("/home/user")),
            ..Default::default()
        };
        let result = render_template_plain(TEMPLATES.directory_header, &context);
        assert_eq!(result, "Current Directory: /home/user");
    }

    #[test]
    fn test_render_batch_summary() {
        let context = TemplateContext {
            count: Some(2),
            action: Some("file(s) copied"),
            ..Default::default()
        };
        assert_eq!(
            render_template_plain(TEMPLATES.batch_summary, &context),
            "2 file(s) copied"
        );
    }

    #[test]
    fn test_plain_text_passes_through() {
        let context = TemplateContext::default();
        assert_eq!(
            render_template_plain("Simple text without placeholders", &context),
            "Simple text without placeholders"
        );
    }

    #[test]
    fn test_edge_cases_and_robustness() {
        let context = TemplateContext::default();
        assert_eq!(render_template_plain("", &context), "");
        assert_eq!(render_template_plain("{}", &context), "{}");
        assert_eq!(render_template_plain("{unknown}", &context), "{unknown}");
        assert_eq!(render_template_plain("open {", &context), "open {");
        assert_eq!(render_template_plain("{name}", &context), "");
    }

    #[test]
    fn test_menu_has_eight_items() {
        assert_eq!(TEMPLATES.menu_items.len(), 8);
        assert!(TEMPLATES.menu_items[7].contains("Quit"));
    }
}
