//! Interactive menu loop.
//!
//! Reads one choice per line from any `BufRead`, so the same loop serves the
//! terminal and scripted input. Errors from a single action are printed and
//! the loop continues; only a failure to read input ends it with an error.

use crate::commands::{
    batch::{execute_copy, execute_delete, execute_move},
    display::execute_display,
    navigate::{execute_navigate, execute_parent},
    select::{execute_select, prepare_selection},
};
use crate::core::{
    error::Result,
    print_error, print_info, print_prompt, print_section_header,
    session::Session,
    templates::TEMPLATES,
};
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Display,
    Navigate,
    Parent,
    Select,
    Copy,
    Move,
    Delete,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Display),
            "2" => Some(Self::Navigate),
            "3" => Some(Self::Parent),
            "4" => Some(Self::Select),
            "5" => Some(Self::Copy),
            "6" => Some(Self::Move),
            "7" => Some(Self::Delete),
            "8" => Some(Self::Quit),
            _ => None,
        }
    }
}

pub fn run_menu<R: BufRead>(session: &mut Session, input: &mut R) -> Result<()> {
    loop {
        print_menu();
        let Some(line) = prompt(input, TEMPLATES.prompt_choice)? else {
            log::debug!("Input closed, leaving menu");
            break;
        };

        let outcome = match MenuChoice::parse(&line) {
            Some(MenuChoice::Quit) => break,
            Some(choice) => dispatch(session, choice, input),
            None => {
                print_error("Invalid choice");
                Ok(())
            }
        };

        if let Err(e) = outcome {
            log::debug!("Menu action failed: {e:?}");
            print_error(&e.to_string());
        }
    }

    print_info("Goodbye!");
    Ok(())
}

fn print_menu() {
    print_section_header(TEMPLATES.menu_header);
    for item in TEMPLATES.menu_items {
        println!("{item}");
    }
}

fn dispatch<R: BufRead>(session: &mut Session, choice: MenuChoice, input: &mut R) -> Result<()> {
    match choice {
        MenuChoice::Display => execute_display(session),
        MenuChoice::Navigate => match prompt(input, "Enter navigation index: ")? {
            Some(text) => execute_navigate(session, &text),
            None => Ok(()),
        },
        MenuChoice::Parent => execute_parent(session),
        MenuChoice::Select => {
            prepare_selection(session);
            if let Some(text) = prompt(input, "Enter file indices to select (comma-separated): ")? {
                execute_select(session, &text);
            }
            Ok(())
        }
        MenuChoice::Copy => match prompt(input, "Enter destination path for copying: ")? {
            Some(dest) => execute_copy(session, &dest),
            None => Ok(()),
        },
        MenuChoice::Move => match prompt(input, "Enter destination path for moving: ")? {
            Some(dest) => execute_move(session, &dest),
            None => Ok(()),
        },
        MenuChoice::Delete => execute_delete(session),
        MenuChoice::Quit => Ok(()),
    }
}

/// Prints `message` and reads one line; `None` once input is exhausted
fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<Option<String>> {
    print_prompt(message);
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
