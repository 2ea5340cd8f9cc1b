//! Renders the payroll report for every kept employee.

use std::io::{self, Write};

use colored::Colorize;

use crate::employee::Registry;

/// Writes the payroll report to `out`.
///
/// An empty registry yields only a notice, without the report header.
/// Otherwise each record renders its own details, in insertion order,
/// separated by blank lines.
pub fn render<W: Write>(registry: &Registry, out: &mut W) -> io::Result<()> {
    if registry.is_empty() {
        writeln!(out, "No employees to display!")?;
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "------ {} ------", "Employee Payroll Report".red())?;
    writeln!(out)?;
    for employee in registry.iter() {
        writeln!(out, "{employee}")?;
        writeln!(out)?;
    }
    Ok(())
}
