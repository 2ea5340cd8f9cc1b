//! Interactive prompt loops for gathering validated employee records.
//!
//! A [`Session`] owns a reader and a writer and drives the whole interactive
//! protocol: the top-level menu, the per-field prompt/validate/re-prompt
//! loops, and the "add another of the same type?" question. It is generic
//! over `BufRead`/`Write` so tests can feed it scripted input and inspect
//! the produced output; the binary hands it locked stdin/stdout.
//!
//! Every recoverable failure is an input-validation failure, handled locally
//! by printing an error and re-prompting. The only errors that propagate are
//! I/O failures and end of input, since a prompt loop can never complete
//! once the reader is exhausted.

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::{info, warn};

use crate::employee::{Employee, Position, PositionKind, Registry};
use crate::error::{PayrollError, Result};
use crate::money::Amount;
use crate::report;
use crate::validate::{is_valid_identifier, is_valid_name, parse_positive_integer};

/// One of the five top-level menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddFullTime,
    AddPartTime,
    AddContractual,
    Report,
    Exit,
}

/// The menu accepts exactly one character, a digit between 1 and 5.
fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    let mut chars = line.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    match c {
        '1' => Some(MenuChoice::AddFullTime),
        '2' => Some(MenuChoice::AddPartTime),
        '3' => Some(MenuChoice::AddContractual),
        '4' => Some(MenuChoice::Report),
        '5' => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// An interactive session over a line-oriented reader and a writer.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the session, handing back the writer (used by tests to
    /// inspect everything the session printed).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line, stripping the trailing newline. Nothing else is
    /// trimmed: stray whitespace reaches the validators and is rejected
    /// there. A zero-byte read means the input is exhausted.
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PayrollError::EndOfInput);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn complain(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message.red())?;
        Ok(())
    }

    /// Prompts until a valid, unused identifier is entered. A failure of
    /// either check re-requests the entire identifier.
    fn prompt_identifier(&mut self, registry: &Registry) -> Result<String> {
        loop {
            let id = self.ask("Enter Employee ID (letters and numbers only): ")?;
            if !is_valid_identifier(&id) {
                self.complain("Invalid ID! The ID should only contain letters and numbers.")?;
                continue;
            }
            if !registry.is_unique(&id) {
                self.complain("Duplicate ID! Enter a unique ID.")?;
                continue;
            }
            return Ok(id);
        }
    }

    fn prompt_name(&mut self) -> Result<String> {
        loop {
            let name = self.ask("Enter Employee Name (letters only): ")?;
            if is_valid_name(&name) {
                return Ok(name);
            }
            self.complain("Invalid Name! The name should only contain letters and spaces.")?;
        }
    }

    fn prompt_amount(&mut self, prompt: &str) -> Result<Amount> {
        loop {
            let line = self.ask(prompt)?;
            if let Some(amount) = Amount::parse(&line) {
                return Ok(amount);
            }
            self.complain("Invalid input! Please enter a valid positive number.")?;
        }
    }

    fn prompt_count(&mut self, prompt: &str) -> Result<u32> {
        loop {
            let line = self.ask(prompt)?;
            if line.contains(' ') {
                self.complain("Invalid input! No spaces allowed.")?;
                continue;
            }
            if let Some(count) = parse_positive_integer(&line) {
                return Ok(count);
            }
            self.complain("Invalid input! Please enter a positive whole number.")?;
        }
    }

    /// Asks a yes/no question until the answer is exactly one character,
    /// `y` or `n`, case-insensitively.
    fn prompt_yes_no(&mut self, question: &str) -> Result<bool> {
        loop {
            let answer = self.ask(question)?;
            match answer.as_str() {
                "y" | "Y" => return Ok(true),
                "n" | "N" => return Ok(false),
                _ => {
                    self.complain("Invalid input! Please enter 'Y' for Yes or 'N' for No.")?;
                }
            }
        }
    }

    /// Gathers and keeps employees of the given kind, one after another,
    /// until the user declines to add more.
    pub fn add_employees(&mut self, registry: &mut Registry, kind: PositionKind) -> Result<()> {
        loop {
            let id = self.prompt_identifier(registry)?;
            let name = self.prompt_name()?;
            let rate = self.prompt_amount("Enter Salary: ")?;
            let position = match kind {
                PositionKind::FullTime => Position::FullTime,
                PositionKind::PartTime => Position::PartTime {
                    hours_worked: self.prompt_count("Enter Hours Worked: ")?,
                },
                PositionKind::Contractual => Position::Contractual {
                    projects_completed: self.prompt_count("Enter Number of Projects: ")?,
                },
            };
            let employee = Employee::new(id, name, rate, position);
            info!(id = %employee.id(), kind = ?kind, "keeping employee");
            if !registry.keep(employee) {
                warn!("identifier collision on keep; record discarded");
                continue;
            }
            let again = self.prompt_yes_no(
                "Do you want to add another employee of the same type? (Y/N): ",
            )?;
            if !again {
                return Ok(());
            }
        }
    }

    fn prompt_menu(&mut self) -> Result<MenuChoice> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Menu")?;
            writeln!(self.output, "1 - Full-time Employee")?;
            writeln!(self.output, "2 - Part-time Employee")?;
            writeln!(self.output, "3 - Contractual Employee")?;
            writeln!(self.output, "4 - Display Payroll Report")?;
            writeln!(self.output, "5 - Exit")?;
            let line = self.ask("Enter your choice: ")?;
            match parse_menu_choice(&line) {
                Some(choice) => return Ok(choice),
                None => {
                    self.complain("Invalid input! Please enter a number between 1 and 5.")?;
                }
            }
        }
    }

    /// The top-level dispatch loop. Returns when the exit option is chosen.
    pub fn run(&mut self, registry: &mut Registry) -> Result<()> {
        loop {
            match self.prompt_menu()? {
                MenuChoice::AddFullTime => {
                    self.add_employees(registry, PositionKind::FullTime)?
                }
                MenuChoice::AddPartTime => {
                    self.add_employees(registry, PositionKind::PartTime)?
                }
                MenuChoice::AddContractual => {
                    self.add_employees(registry, PositionKind::Contractual)?
                }
                MenuChoice::Report => report::render(registry, &mut self.output)?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting program...")?;
                    return Ok(());
                }
            }
        }
    }
}
