use rusqlite::Connection;
use staffbook_core::db::{open_db_in_memory, DbOptions};
use staffbook_core::{
    run_session, ConsoleError, Criterion, DeleteOutcome, EmployeeId, EmployeeRepository, Field,
    IoConsole, NewEmployee, RecordWorkflow, SessionOptions, SessionOutcome,
    SqliteEmployeeRepository, TableStatus, UpdateOutcome, WorkflowError,
};
use std::io::Cursor;

type ScriptedWorkflow<'conn> =
    RecordWorkflow<SqliteEmployeeRepository<'conn>, IoConsole<Cursor<String>, Vec<u8>>>;

fn open() -> Connection {
    open_db_in_memory(&DbOptions::default()).unwrap()
}

fn workflow<'conn>(conn: &'conn Connection, input: &str) -> ScriptedWorkflow<'conn> {
    RecordWorkflow::new(
        SqliteEmployeeRepository::new(conn),
        IoConsole::new(Cursor::new(input.to_string()), Vec::new()),
    )
}

fn transcript(workflow: ScriptedWorkflow<'_>) -> String {
    let (_, console) = workflow.into_parts();
    String::from_utf8(console.into_output()).unwrap()
}

fn seed(conn: &Connection) -> (EmployeeId, EmployeeId) {
    let repo = SqliteEmployeeRepository::new(conn);
    let john = NewEmployee::from_input("mr", "john", "smith", "js@example.com", "1234.5").unwrap();
    let jane = NewEmployee::from_input("ms", "jane", "doe", "jd@example.com", "2000").unwrap();
    (repo.insert(&john).unwrap(), repo.insert(&jane).unwrap())
}

fn count(conn: &Connection) -> u64 {
    SqliteEmployeeRepository::new(conn).count().unwrap()
}

fn surname_matches(conn: &Connection, surname: &str) -> usize {
    SqliteEmployeeRepository::new(conn)
        .find_by(Field::Surname, &Criterion::Text(surname.to_string()))
        .unwrap()
        .len()
}

#[test]
fn search_reports_and_displays_matches() {
    let conn = open();
    seed(&conn);

    let mut flow = workflow(&conn, "4\nSmith \n");
    assert_eq!(flow.search().unwrap(), 1);

    let text = transcript(flow);
    assert!(text.contains("1 employee has been found:"));
    assert!(text.contains("Name: Mr John Smith"));
    assert!(text.contains("Email: js@example.com"));
    assert!(text.contains("Salary: £1234.50"));
}

#[test]
fn search_out_of_range_choice_reprompts_without_mutation() {
    let conn = open();
    seed(&conn);

    let mut flow = workflow(&conn, "7\n6\n2000\n");
    assert_eq!(flow.search().unwrap(), 1);
    assert_eq!(count(&conn), 2);

    let text = transcript(flow);
    assert!(text.contains("Invalid Choice. Please re-enter your choice."));
    assert!(text.contains("Name: Ms Jane Doe"));
}

#[test]
fn search_without_matches_reports_none() {
    let conn = open();
    seed(&conn);

    let mut flow = workflow(&conn, "1\nabc\n999\n");
    assert_eq!(flow.search().unwrap(), 0);

    let text = transcript(flow);
    assert!(text.contains("Invalid search criterion."));
    assert!(text.contains("No employees match the search criteria."));
}

#[test]
fn undecodable_criterion_reprompts_instead_of_failing() {
    let conn = open();
    let (john, _) = seed(&conn);

    let mut input = b"1\n\xff\xfe\n".to_vec();
    input.extend_from_slice(format!("{john}\n").as_bytes());
    let mut flow = RecordWorkflow::new(
        SqliteEmployeeRepository::new(&conn),
        IoConsole::new(Cursor::new(input), Vec::new()),
    );
    assert_eq!(flow.search().unwrap(), 1);

    let (_, console) = flow.into_parts();
    let text = String::from_utf8(console.into_output()).unwrap();
    assert!(text.contains("Invalid search criterion."));
    assert!(text.contains("Name: Mr John Smith"));
}

#[test]
fn session_treats_undecodable_menu_answer_as_invalid_choice() {
    let conn = open();

    let mut flow = RecordWorkflow::new(
        SqliteEmployeeRepository::new(&conn),
        IoConsole::new(Cursor::new(b"\xff\xfe\n7\n".to_vec()), Vec::new()),
    );
    let options = SessionOptions {
        pause_after_action: false,
    };
    assert_eq!(run_session(&mut flow, options).unwrap(), SessionOutcome::Exited);

    let (_, console) = flow.into_parts();
    let text = String::from_utf8(console.into_output()).unwrap();
    assert!(text.contains("Invalid choice"));
}

#[test]
fn update_with_zero_matches_stops_without_prompting() {
    let conn = open();
    seed(&conn);

    // Input ends right after the criterion; any further prompt would fail with InputClosed.
    let mut flow = workflow(&conn, "4\nnobody\n");
    assert_eq!(flow.update().unwrap(), UpdateOutcome::NoMatches);

    let text = transcript(flow);
    assert!(text.contains("No employees match the update criteria."));
    assert!(!text.contains("Select a category to update"));
    assert_eq!(surname_matches(&conn, "smith"), 1);
    assert_eq!(surname_matches(&conn, "doe"), 1);
}

#[test]
fn update_proceed_overwrites_target_field() {
    let conn = open();
    seed(&conn);

    let mut flow = workflow(&conn, "4\nsmith\n3\n Jones\n1\n");
    assert_eq!(flow.update().unwrap(), UpdateOutcome::Updated(1));

    let text = transcript(flow);
    assert!(text.contains("1 employee will be updated. Employee:"));
    assert!(text.contains("Employee(s) successfully updated."));
    assert_eq!(surname_matches(&conn, "jones"), 1);
    assert_eq!(surname_matches(&conn, "smith"), 0);
}

#[test]
fn update_cancel_leaves_store_untouched() {
    let conn = open();
    seed(&conn);

    let mut flow = workflow(&conn, "4\nsmith\n3\njones\nwhat\ncancel\n");
    assert_eq!(flow.update().unwrap(), UpdateOutcome::Cancelled);

    assert!(transcript(flow).contains("Invalid choice"));
    assert_eq!(surname_matches(&conn, "smith"), 1);
    assert_eq!(surname_matches(&conn, "jones"), 0);
}

#[test]
fn update_salary_by_id_normalizes_new_value() {
    let conn = open();
    let (john, _) = seed(&conn);

    let input = format!("1\n{john}\n6\n5\nlots\n999.999\nproceed\n");
    let mut flow = workflow(&conn, &input);
    assert_eq!(flow.update().unwrap(), UpdateOutcome::Updated(1));
    assert!(transcript(flow).contains("Invalid Choice. Please re-enter your choice."));

    let repo = SqliteEmployeeRepository::new(&conn);
    let updated = repo.find_by(Field::Id, &Criterion::Id(john)).unwrap();
    assert_eq!(updated[0].salary, "1000.00");
}

#[test]
fn delete_all_cancel_keeps_count() {
    let conn = open();
    seed(&conn);
    let before = count(&conn);

    let mut flow = workflow(&conn, "1\ncancel\n");
    assert_eq!(flow.delete().unwrap(), DeleteOutcome::Cancelled);
    assert_eq!(count(&conn), before);
}

#[test]
fn delete_all_proceed_reports_removed_count() {
    let conn = open();
    seed(&conn);

    let mut flow = workflow(&conn, "1\n1\n");
    assert_eq!(flow.delete().unwrap(), DeleteOutcome::DeletedAll(2));

    let text = transcript(flow);
    assert!(text.contains("All 2 records have been deleted."));
    assert!(text.contains("No data remains."));
    assert_eq!(count(&conn), 0);
}

#[test]
fn delete_selected_without_matches_ends_flow() {
    let conn = open();
    seed(&conn);

    let mut flow = workflow(&conn, "2\n4\nnobody\n");
    assert_eq!(flow.delete().unwrap(), DeleteOutcome::NoMatches);
    assert!(transcript(flow).contains("No matching employee."));
    assert_eq!(count(&conn), 2);
}

#[test]
fn delete_selected_proceed_lists_then_removes_matches() {
    let conn = open();
    seed(&conn);

    let mut flow = workflow(&conn, "2\n5\nJD@example.com\nproceed\n");
    assert_eq!(flow.delete().unwrap(), DeleteOutcome::DeletedSelected(1));

    let text = transcript(flow);
    let listed = text.find("The following 1 employee/s will be deleted:").unwrap();
    let shown = text.find("Name: Ms Jane Doe").unwrap();
    let done = text.find("Employee(s) successfully deleted").unwrap();
    assert!(listed < shown && shown < done);
    assert_eq!(surname_matches(&conn, "doe"), 0);
    assert_eq!(count(&conn), 1);
}

#[test]
fn delete_selected_cancel_keeps_matches() {
    let conn = open();
    seed(&conn);

    let mut flow = workflow(&conn, "2\n4\ndoe\n2\n");
    assert_eq!(flow.delete().unwrap(), DeleteOutcome::Cancelled);
    assert_eq!(surname_matches(&conn, "doe"), 1);
}

#[test]
fn delete_menu_reprompts_then_exits() {
    let conn = open();
    seed(&conn);

    let mut flow = workflow(&conn, "0\nfour\n3\n");
    assert_eq!(flow.delete().unwrap(), DeleteOutcome::Exited);
    assert_eq!(transcript(flow).matches("Invalid input").count(), 2);
    assert_eq!(count(&conn), 2);
}

#[test]
fn add_employee_normalizes_input_and_retries_salary() {
    let conn = open();

    let mut flow = workflow(&conn, "MR\n John \nSmith\nJS@Example.com\nabc\n1234.5\n");
    let id = flow.add_employee().unwrap();

    let text = transcript(flow);
    assert!(text.contains("Invalid entry. Please enter a number value: "));
    assert!(text.contains("Employee added."));

    let repo = SqliteEmployeeRepository::new(&conn);
    let stored = repo.find_by(Field::Id, &Criterion::Id(id)).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "mr");
    assert_eq!(stored[0].forename, "john");
    assert_eq!(stored[0].email, "js@example.com");
    assert_eq!(stored[0].salary, "1234.50");
}

#[test]
fn view_all_on_empty_table_reports_no_records() {
    let conn = open();

    let mut flow = workflow(&conn, "");
    assert_eq!(flow.view_all().unwrap(), 0);
    assert!(transcript(flow).contains("No records in database"));
}

#[test]
fn create_table_warns_when_present() {
    let conn = open();
    let mut flow = workflow(&conn, "");
    assert_eq!(flow.create_table().unwrap(), TableStatus::AlreadyExists);
    assert!(transcript(flow).contains("Warning: Table already created"));

    let bare = open_db_in_memory(&DbOptions {
        auto_create_table: false,
    })
    .unwrap();
    let mut flow = workflow(&bare, "");
    assert_eq!(flow.create_table().unwrap(), TableStatus::Created);
    assert!(transcript(flow).contains("Table successfully created"));
}

#[test]
fn closed_input_mid_flow_is_reported() {
    let conn = open();
    seed(&conn);

    let mut flow = workflow(&conn, "4\n");
    let err = flow.search().unwrap_err();
    assert!(matches!(err, WorkflowError::Console(ConsoleError::InputClosed)));
}

#[test]
fn session_runs_actions_until_exit() {
    let conn = open();
    seed(&conn);
    let options = SessionOptions {
        pause_after_action: false,
    };

    let mut flow = workflow(&conn, "1\n3\n9\nabc\n7\n");
    assert_eq!(run_session(&mut flow, options).unwrap(), SessionOutcome::Exited);

    let text = transcript(flow);
    assert!(text.contains(" 1. Create employee table"));
    assert!(text.contains(" 7. Exit"));
    assert!(text.contains("Warning: Table already created"));
    assert!(text.contains("Name: Mr John Smith"));
    assert_eq!(text.matches("Invalid choice").count(), 2);
}

#[test]
fn session_ends_when_input_closes() {
    let conn = open();
    let mut flow = workflow(&conn, "3\n");
    let options = SessionOptions {
        pause_after_action: false,
    };
    assert_eq!(
        run_session(&mut flow, options).unwrap(),
        SessionOutcome::InputClosed
    );
}

#[test]
fn session_reports_store_errors_and_continues() {
    let conn = open_db_in_memory(&DbOptions {
        auto_create_table: false,
    })
    .unwrap();
    let options = SessionOptions {
        pause_after_action: false,
    };

    let mut flow = workflow(&conn, "3\n1\n3\n7\n");
    assert_eq!(run_session(&mut flow, options).unwrap(), SessionOutcome::Exited);

    let text = transcript(flow);
    assert!(text.contains("Error: "));
    assert!(text.contains("Table successfully created"));
    assert!(text.contains("No records in database"));
}

#[test]
fn session_pauses_between_actions() {
    let conn = open();
    let mut flow = workflow(&conn, "3\n\n7\n");
    assert_eq!(
        run_session(&mut flow, SessionOptions::default()).unwrap(),
        SessionOutcome::Exited
    );
    assert!(transcript(flow).contains("Press the enter key to go back to the main menu."));
}
