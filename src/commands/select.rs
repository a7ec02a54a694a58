use crate::commands::display::print_directory;
use crate::core::{
    print_error, print_section_header,
    session::Session,
    state::DirectoryListing,
    templates::{render_template, TemplateContext, TEMPLATES},
};
use std::path::PathBuf;

/// Snapshots and shows the listing that the next selection resolves against.
///
/// An unreadable directory is reported and yields an empty listing.
pub fn prepare_selection(session: &mut Session) -> DirectoryListing {
    match session.load_current_listing() {
        Ok(listing) => {
            let entries: Vec<_> = listing
                .iter()
                .map(|(index, name)| {
                    (
                        index,
                        name.to_string(),
                        session.navigator.describe_entry(name),
                    )
                })
                .collect();
            print_directory(listing.directory(), &entries);
            listing
        }
        Err(e) => {
            log::warn!("Could not load listing for selection: {e}");
            print_error(&format!("Error loading directory contents: {e}"));
            DirectoryListing::default()
        }
    }
}

/// Replaces the selection from comma-separated indices and prints it.
///
/// Malformed input is reported and leaves the previous selection in place.
pub fn execute_select(session: &mut Session, indices_text: &str) -> Vec<PathBuf> {
    match session.select(indices_text) {
        Ok(selected) => {
            print_section_header(TEMPLATES.selected_header);
            for path in &selected {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                let kind = session.navigator.describe_entry(&name);
                println!(
                    "{}",
                    render_template(
                        TEMPLATES.selected_line,
                        &TemplateContext {
                            entry_kind: Some(kind),
                            name: Some(&name),
                            ..Default::default()
                        },
                    )
                );
            }
            selected
        }
        Err(e) => {
            log::debug!("Selection rejected: {e}");
            print_error(&format!("Invalid input. Please enter valid indices. {e}"));
            Vec::new()
        }
    }
}
