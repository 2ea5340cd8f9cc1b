// the uniqueness index uses a HashSet with a fast hasher
use std::collections::HashSet;
use std::hash::BuildHasherDefault;
use seahash::SeaHasher;

// used to print out readable forms of an employee
use std::fmt;

use colored::Colorize;

// our own stuff that we need
use crate::money::Amount;

pub type IdHasher = BuildHasherDefault<SeaHasher>;

// ------------- Position -------------
/// The kind of engagement an employee has, together with the field that
/// drives its pay formula. The set of variants is closed: the pay formulas
/// and displayed fields are exhaustively matched below.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum Position {
    /// Pay is the flat monthly salary.
    FullTime,
    /// Pay is the hourly wage times the hours worked.
    PartTime { hours_worked: u32 },
    /// Pay is the per-project fee times the projects completed.
    Contractual { projects_completed: u32 },
}

/// Fieldless selector for the three positions, used by the menu dispatch to
/// say which variant the input loop should gather.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum PositionKind {
    FullTime,
    PartTime,
    Contractual,
}

// ------------- Employee -------------
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct Employee {
    id: String,
    name: String,
    rate: Amount,
    position: Position,
}

impl Employee {
    pub fn new(id: String, name: String, rate: Amount, position: Position) -> Self {
        Self {
            id,
            name,
            rate,
            position,
        }
    }
    // It's intentional to encapsulate the fields in the struct
    // and only expose them using "getters", because this yields
    // true immutability for records after creation.
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn rate(&self) -> &Amount {
        &self.rate
    }
    pub fn position(&self) -> &Position {
        &self.position
    }
    /// Computes the pay for this employee from its immutable fields.
    pub fn pay(&self) -> Amount {
        match self.position {
            Position::FullTime => self.rate.clone(),
            Position::PartTime { hours_worked } => &self.rate * hours_worked,
            Position::Contractual { projects_completed } => &self.rate * projects_completed,
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{}",
            format!("Employee: {} (ID: {})", self.name, self.id).magenta()
        )?;
        match self.position {
            Position::FullTime => {
                write!(
                    f,
                    "{}",
                    format!("Fixed Monthly Salary: ${}", self.rate).yellow()
                )
            }
            Position::PartTime { hours_worked } => {
                writeln!(f, "Hourly Wage: ${}", self.rate)?;
                writeln!(f, "Hours Worked: {}", hours_worked)?;
                write!(f, "{}", format!("Total Salary: ${}", self.pay()).yellow())
            }
            Position::Contractual { projects_completed } => {
                writeln!(f, "Contract Payment Per Project: ${}", self.rate)?;
                writeln!(f, "Projects Completed: {}", projects_completed)?;
                write!(f, "{}", format!("Total Salary: ${}", self.pay()).yellow())
            }
        }
    }
}

// ------------- Registry -------------
/// Owns every employee record created during a session, in insertion order.
///
/// The registry is append-only: records are never mutated or removed once
/// kept, and the whole collection is released when the registry is dropped
/// at program exit. A side index of case-normalized identifiers guarantees
/// that no two kept records share an id under case-insensitive comparison.
pub struct Registry {
    kept: Vec<Employee>,
    ids: HashSet<String, IdHasher>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            kept: Vec::new(),
            ids: HashSet::default(),
        }
    }
    /// True iff no kept record has this identifier, case-insensitively.
    pub fn is_unique(&self, id: &str) -> bool {
        !self.ids.contains(&id.to_uppercase())
    }
    /// Appends the employee, unless its identifier collides with one that is
    /// already kept. Returns whether the employee was kept.
    pub fn keep(&mut self, employee: Employee) -> bool {
        if !self.ids.insert(employee.id().to_uppercase()) {
            return false;
        }
        self.kept.push(employee);
        true
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.kept.iter()
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
