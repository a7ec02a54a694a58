use crate::core::{
    error::Result,
    print_error, print_success,
    session::Session,
    state::{BatchOperation, BatchReport},
    templates::{render_template_plain, TemplateContext, TEMPLATES},
};
use std::path::Path;

pub fn execute_copy(session: &mut Session, destination: &str) -> Result<()> {
    let report = session.copy_selection(Path::new(destination.trim()));
    report_batch(report);
    Ok(())
}

pub fn execute_move(session: &mut Session, destination: &str) -> Result<()> {
    let report = session.move_selection(Path::new(destination.trim()));
    report_batch(report);
    Ok(())
}

pub fn execute_delete(session: &mut Session) -> Result<()> {
    let report = session.delete_selection();
    report_batch(report);
    Ok(())
}

/// One summary line per batch: the attempted count, or the first failure
pub fn report_batch(report: BatchReport) {
    let operation = report.operation;
    match report.into_result() {
        Ok(attempted) => print_success(&batch_summary(operation, attempted)),
        Err(e) => print_error(&format!("{} error: {e}", capitalized(operation))),
    }
}

pub fn batch_summary(operation: BatchOperation, attempted: usize) -> String {
    let noun = match operation {
        BatchOperation::Delete => "file(s)/folder(s)",
        BatchOperation::Copy | BatchOperation::Move => "file(s)",
    };
    let action = format!("{noun} {}", operation.past_tense());
    render_template_plain(
        TEMPLATES.batch_summary,
        &TemplateContext {
            count: Some(attempted),
            action: Some(&action),
            ..Default::default()
        },
    )
}

fn capitalized(operation: BatchOperation) -> &'static str {
    match operation {
        BatchOperation::Copy => "Copy",
        BatchOperation::Move => "Move",
        BatchOperation::Delete => "Delete",
    }
}
