use crate::core::{
    error::Result,
    session::Session,
    state::EntryKind,
    templates::{render_template, TemplateContext, TEMPLATES},
};
use std::path::Path;

pub fn execute_display(session: &Session) -> Result<()> {
    let entries = session.navigator.display_entries()?;
    print_directory(session.current_path(), &entries);
    Ok(())
}

pub fn print_directory(path: &Path, entries: &[(usize, String, EntryKind)]) {
    for line in render_directory_lines(path, entries) {
        println!("{line}");
    }
}

pub fn render_directory_lines(path: &Path, entries: &[(usize, String, EntryKind)]) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len() + 3);
    lines.push(String::new());
    lines.push(render_template(
        TEMPLATES.directory_header,
        &TemplateContext {
            path: Some(path),
            ..Default::default()
        },
    ));
    lines.push(TEMPLATES.directory_separator.to_string());

    for (index, name, kind) in entries {
        lines.push(render_template(
            TEMPLATES.entry_line,
            &TemplateContext {
                n: Some(*index),
                entry_kind: Some(*kind),
                name: Some(name.as_str()),
                ..Default::default()
            },
        ));
    }

    if entries.is_empty() {
        lines.push("(empty directory)".to_string());
    }
    lines
}
