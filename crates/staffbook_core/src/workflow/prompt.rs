//! Retry loops around the typed validators.
//!
//! # Invariants
//! - Invalid operator input never escapes these functions; they re-prompt
//!   until a valid answer arrives or the console closes.

use super::console::{Console, ConsoleResult};
use crate::model::field::{
    resolve_search_choice, resolve_update_choice, Field, FieldContext, UpdatableField,
};
use crate::normalize::{
    normalize_criterion, normalize_update_value, parse_choice, Criterion, SelectionError,
};

pub(crate) const CHOICE_PROMPT: &str = "Enter the number corresponding to your choice: ";

/// Answer of a confirmation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Cancel,
}

/// Accepts `1`/`proceed` and `2`/`cancel`, ignoring case and surrounding space.
pub fn parse_confirmation(raw: &str) -> Option<Confirmation> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "proceed" => Some(Confirmation::Proceed),
        "2" | "cancel" => Some(Confirmation::Cancel),
        _ => None,
    }
}

/// Shows the search-context field list and reads a choice (1-6).
pub fn select_search_field<C: Console + ?Sized>(
    console: &mut C,
    heading: &str,
) -> ConsoleResult<Field> {
    select_from(console, heading, FieldContext::Search, resolve_search_choice)
}

/// Shows the update-target field list and reads a choice (1-5).
pub fn select_update_field<C: Console + ?Sized>(
    console: &mut C,
    heading: &str,
) -> ConsoleResult<UpdatableField> {
    select_from(
        console,
        heading,
        FieldContext::UpdateTarget,
        resolve_update_choice,
    )
}

fn select_from<C, T>(
    console: &mut C,
    heading: &str,
    context: FieldContext,
    resolve: fn(&str) -> Result<T, SelectionError>,
) -> ConsoleResult<T>
where
    C: Console + ?Sized,
{
    loop {
        console.write_line(&format!("{heading} using the following categories:"))?;
        for line in context.menu_lines() {
            console.write_line(&format!("    {line}"))?;
        }

        let answer = console.prompt(CHOICE_PROMPT)?;
        match resolve(&answer) {
            Ok(choice) => return Ok(choice),
            Err(err) => console.write_line(selection_complaint(&err))?,
        }
    }
}

fn selection_complaint(err: &SelectionError) -> &'static str {
    match err {
        SelectionError::NotANumber(_) => "Invalid input. Please enter a number input.",
        SelectionError::OutOfRange { .. } => "Invalid Choice. Please re-enter your choice.",
    }
}

/// Reads a match criterion for `field`, e.g. `purpose = "search criterion"`.
pub fn read_criterion<C: Console + ?Sized>(
    console: &mut C,
    field: Field,
    purpose: &str,
) -> ConsoleResult<Criterion> {
    loop {
        let answer = console.prompt(&format!("Please enter your {purpose}: "))?;
        match normalize_criterion(field, &answer) {
            Ok(criterion) => return Ok(criterion),
            Err(_) => console.write_line(&format!("Invalid {purpose}."))?,
        }
    }
}

/// Reads a replacement value for an update target.
pub fn read_update_value<C: Console + ?Sized>(
    console: &mut C,
    field: UpdatableField,
    purpose: &str,
) -> ConsoleResult<String> {
    loop {
        let answer = console.prompt(&format!("Please enter your {purpose}: "))?;
        match normalize_update_value(field, &answer) {
            Ok(value) => return Ok(value),
            Err(_) => console.write_line(&format!("Invalid {purpose}."))?,
        }
    }
}

/// Binary proceed/cancel gate guarding a mutation.
pub fn confirm<C: Console + ?Sized>(console: &mut C) -> ConsoleResult<Confirmation> {
    loop {
        console.write_line("Enter 1 (proceed) to continue")?;
        let answer = console.prompt("Enter 2 (cancel) to cancel: ")?;
        match parse_confirmation(&answer) {
            Some(confirmation) => return Ok(confirmation),
            None => console.write_line("Invalid choice")?,
        }
    }
}

/// Shows `options` and reads a choice in `1..=options.len()`.
pub fn read_menu_choice<C: Console + ?Sized>(
    console: &mut C,
    heading: &str,
    options: &[&str],
) -> ConsoleResult<u32> {
    let max = options.len() as u32;
    loop {
        console.write_line(heading)?;
        for (index, option) in options.iter().enumerate() {
            console.write_line(&format!("    {}. {option}", index + 1))?;
        }

        let answer = console.prompt(CHOICE_PROMPT)?;
        match parse_choice(&answer, max) {
            Ok(choice) => return Ok(choice),
            Err(_) => console.write_line("Invalid input")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        confirm, parse_confirmation, read_criterion, read_menu_choice, select_search_field,
        select_update_field, Confirmation,
    };
    use crate::model::field::{Field, UpdatableField};
    use crate::normalize::Criterion;
    use crate::workflow::console::{ConsoleError, IoConsole};
    use std::io::Cursor;

    fn console(input: &str) -> IoConsole<Cursor<String>, Vec<u8>> {
        IoConsole::new(Cursor::new(input.to_string()), Vec::new())
    }

    fn output(console: IoConsole<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn confirmation_accepts_words_and_numbers() {
        assert_eq!(parse_confirmation("1"), Some(Confirmation::Proceed));
        assert_eq!(parse_confirmation(" Proceed "), Some(Confirmation::Proceed));
        assert_eq!(parse_confirmation("CANCEL"), Some(Confirmation::Cancel));
        assert_eq!(parse_confirmation("2"), Some(Confirmation::Cancel));
        assert_eq!(parse_confirmation("yes"), None);
        assert_eq!(parse_confirmation("3"), None);
    }

    #[test]
    fn search_field_selection_reprompts_until_in_range() {
        let mut console = console("7\nabc\n4\n");
        let field = select_search_field(&mut console, "Search").unwrap();
        assert_eq!(field, Field::Surname);

        let text = output(console);
        assert_eq!(text.matches("Search using the following categories:").count(), 3);
        assert!(text.contains("Invalid Choice. Please re-enter your choice."));
        assert!(text.contains("Invalid input. Please enter a number input."));
    }

    #[test]
    fn update_field_selection_rejects_six() {
        let mut console = console("6\n5\n");
        let field = select_update_field(&mut console, "Select a category to update").unwrap();
        assert_eq!(field, UpdatableField::Salary);
    }

    #[test]
    fn criterion_reprompts_on_invalid_id() {
        let mut console = console("abc\n12\n");
        let criterion = read_criterion(&mut console, Field::Id, "search criterion").unwrap();
        assert_eq!(criterion, Criterion::Id(12));
        assert!(output(console).contains("Invalid search criterion."));
    }

    #[test]
    fn confirm_loops_until_known_answer() {
        let mut console = console("maybe\ncancel\n");
        assert_eq!(confirm(&mut console).unwrap(), Confirmation::Cancel);
        assert!(output(console).contains("Invalid choice"));
    }

    #[test]
    fn menu_choice_reprompts_and_surfaces_closed_input() {
        let mut console = console("0\n");
        let err = read_menu_choice(&mut console, "Options:", &["a", "b"]).unwrap_err();
        assert!(matches!(err, ConsoleError::InputClosed));
        assert!(output(console).contains("Invalid input"));
    }
}
