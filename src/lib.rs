//! Paydesk – an interactive console payroll for three kinds of employees.
//!
//! The program is a single menu loop over stdin/stdout: the user adds
//! full-time, part-time and contractual employees, every field is validated
//! with re-prompting on failure, and a report lists each kept record with
//! its computed pay. Nothing is persisted; the registry lives for the
//! duration of the process and is released in full on exit.
//!
//! ## Modules
//! * [`employee`] – The [`employee::Employee`] record, its closed
//!   [`employee::Position`] variants with their pay formulas, and the
//!   [`employee::Registry`] that owns all records and guards identifier
//!   uniqueness.
//! * [`money`] – The [`money::Amount`] type: exact, strictly positive
//!   decimal amounts for wages and computed pay.
//! * [`validate`] – Pure validators for identifiers, names and positive
//!   integer counts.
//! * [`prompt`] – The interactive [`prompt::Session`]: field prompt loops
//!   and the top-level menu, generic over reader/writer.
//! * [`report`] – Renders the payroll report in insertion order.
//! * [`error`] – The crate error type; validation failures never surface
//!   here, only I/O failures and exhausted input do.
//!
//! ## Pay model
//! Pay is computed from immutable fields: a full-time employee is paid the
//! flat rate, a part-time employee the rate times hours worked, and a
//! contractual employee the rate times projects completed. Records can only
//! be built from validated input, so pay computation has no error cases.
//!
//! ## Quick Start
//! ```
//! use std::io::Cursor;
//! use paydesk::{employee::Registry, prompt::Session};
//! let script = b"1\nE1\nAda\n5000\nn\n4\n5\n";
//! let mut session = Session::new(Cursor::new(&script[..]), Vec::new());
//! let mut registry = Registry::new();
//! session.run(&mut registry).unwrap();
//! assert_eq!(registry.len(), 1);
//! ```

pub mod employee;
pub mod error;
pub mod money;
pub mod prompt;
pub mod report;
pub mod validate;
