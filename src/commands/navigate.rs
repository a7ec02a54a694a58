use crate::commands::display::execute_display;
use crate::core::{
    error::{FileNavigatorError, Result},
    index_parser::IndexParser,
    print_warning,
    session::Session,
    state::NavigateOutcome,
};

pub fn execute_navigate(session: &mut Session, input: &str) -> Result<()> {
    let index = IndexParser::parse_single(input)?;
    let index = usize::try_from(index).map_err(|_| FileNavigatorError::negative_index(index))?;

    match session.navigator.navigate(index)? {
        NavigateOutcome::Entered(path) => {
            log::info!("Entered {}", path.display());
        }
        NavigateOutcome::NotADirectory(path) => {
            log::debug!("{} is not a directory", path.display());
            print_warning("Cannot navigate into a file");
        }
    }

    execute_display(session)
}

pub fn execute_parent(session: &mut Session) -> Result<()> {
    if !session.navigator.go_to_parent() {
        print_warning("Already at the top-level directory");
    }
    execute_display(session)
}
