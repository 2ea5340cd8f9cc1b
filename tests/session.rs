use std::io::Cursor;

use paydesk::employee::{Position, Registry};
use paydesk::error::PayrollError;
use paydesk::prompt::Session;

/// Runs a full scripted session and returns everything it printed plus the
/// resulting registry.
fn run_script(script: &str) -> (String, Registry) {
    colored::control::set_override(false);
    let mut session = Session::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let mut registry = Registry::new();
    session.run(&mut registry).expect("scripted session should end via the exit option");
    let out = String::from_utf8(session.into_output()).unwrap();
    (out, registry)
}

#[test]
fn menu_rejects_everything_but_a_single_digit_one_to_five() {
    let (out, registry) = run_script("6\n0\nabc\n12\n\n5\n");
    let complaints = out
        .matches("Invalid input! Please enter a number between 1 and 5.")
        .count();
    assert_eq!(complaints, 5, "each bad menu line re-prompts once");
    assert!(registry.is_empty(), "bad menu input has no side effects");
    assert!(out.ends_with("Exiting program...\n"));
}

#[test]
fn part_time_flow_with_invalid_inputs_at_every_field() {
    let script = concat!(
        "2\n",       // add part-time employees
        "E 1\n",     // id: space is not alphanumeric
        "E1!\n",     // id: punctuation
        "E1\n",      // id: accepted
        "Bob3\n",    // name: digit
        "Bob\n",     // name: accepted
        "-20\n",     // salary: sign
        "20.5.5\n",  // salary: two decimal points
        "20\n",      // salary: accepted
        "1 2\n",     // hours: embedded space
        "eighty\n",  // hours: not digits
        "0\n",       // hours: not strictly positive
        "80\n",      // hours: accepted
        "x\n",       // add another: not y/n
        "n\n",       // done with part-time
        "4\n",       // report
        "5\n",       // exit
    );
    let (out, registry) = run_script(script);

    assert!(out.contains("Invalid ID! The ID should only contain letters and numbers."));
    assert!(out.contains("Invalid Name! The name should only contain letters and spaces."));
    assert!(out.contains("Invalid input! Please enter a valid positive number."));
    assert!(out.contains("Invalid input! No spaces allowed."));
    assert!(out.contains("Invalid input! Please enter a positive whole number."));
    assert!(out.contains("Invalid input! Please enter 'Y' for Yes or 'N' for No."));

    assert_eq!(registry.len(), 1);
    let kept = registry.iter().next().unwrap();
    assert_eq!(kept.id(), "E1");
    assert_eq!(kept.name(), "Bob");
    assert_eq!(kept.position(), &Position::PartTime { hours_worked: 80 });
    assert_eq!(kept.pay().to_string(), "1600");
    assert!(out.contains("Total Salary: $1600"));
}

#[test]
fn duplicate_identifier_restarts_the_id_prompt() {
    let script = concat!(
        "1\n",   // add full-time employees
        "AB12\n",
        "Ada\n",
        "5000\n",
        "y\n",   // another of the same type
        "ab12\n", // collides case-insensitively, entire id re-requested
        "AB13\n",
        "Bea\n",
        "6000\n",
        "n\n",
        "5\n",
    );
    let (out, registry) = run_script(script);
    assert!(out.contains("Duplicate ID! Enter a unique ID."));
    assert_eq!(registry.len(), 2);
    let ids: Vec<&str> = registry.iter().map(|e| e.id()).collect();
    assert_eq!(ids, vec!["AB12", "AB13"]);
}

#[test]
fn contractual_flow_computes_fee_times_projects() {
    let script = concat!(
        "3\n",
        "C1\n",
        "Cleo\n",
        "300\n",
        "4\n",   // projects completed
        "n\n",
        "4\n",   // report
        "5\n",
    );
    let (out, registry) = run_script(script);
    assert_eq!(registry.len(), 1);
    assert!(out.contains("Contract Payment Per Project: $300"));
    assert!(out.contains("Projects Completed: 4"));
    assert!(out.contains("Total Salary: $1200"));
}

#[test]
fn report_before_any_employee_shows_the_notice() {
    let (out, _registry) = run_script("4\n5\n");
    assert!(out.contains("No employees to display!"));
    assert!(
        !out.contains("Employee Payroll Report"),
        "empty report has no header"
    );
}

#[test]
fn exhausted_input_is_an_error_not_a_spin() {
    colored::control::set_override(false);
    let mut session = Session::new(Cursor::new(b"1\nE1\n".to_vec()), Vec::new());
    let mut registry = Registry::new();
    let err = session.run(&mut registry).unwrap_err();
    assert!(matches!(err, PayrollError::EndOfInput));
    assert!(registry.is_empty(), "no partially gathered record is kept");
}
