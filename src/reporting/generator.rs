//! Report generation capability.

use std::io::{self, Stdout, Write};

use tracing::debug;

use crate::error::EngineResult;
use crate::models::Employee;

/// Generates a report for an employee.
///
/// Kept separate from [`super::ReportPrinter`] so a type that only generates
/// reports does not have to implement printing.
pub trait ReportGenerator {
    /// Generates the report for the given employee.
    fn generate_report(&mut self, employee: &Employee) -> EngineResult<()>;
}

/// Announces report generation on a console-like sink.
///
/// # Example
///
/// ```
/// use solid_payroll::models::Employee;
/// use solid_payroll::reporting::{ConsoleReportGenerator, ReportGenerator};
/// use rust_decimal::Decimal;
///
/// let mut generator = ConsoleReportGenerator::with_writer(Vec::new());
/// generator.generate_report(&Employee::new("Hamza", Decimal::from(5000)))?;
///
/// let output = String::from_utf8(generator.into_writer()).unwrap();
/// assert_eq!(output, "Generating report for Hamza\n");
/// # Ok::<(), solid_payroll::error::EngineError>(())
/// ```
pub struct ConsoleReportGenerator<W: Write = Stdout> {
    out: W,
}

impl ConsoleReportGenerator<Stdout> {
    /// Creates a generator that writes to standard output.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleReportGenerator<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleReportGenerator<W> {
    /// Creates a generator that writes to the given sink.
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    /// Consumes the generator and returns its output sink.
    pub fn into_writer(self) -> W {
        self.out
    }
}

impl<W: Write> ReportGenerator for ConsoleReportGenerator<W> {
    fn generate_report(&mut self, employee: &Employee) -> EngineResult<()> {
        debug!(employee = %employee.name, "Generating report");
        writeln!(self.out, "Generating report for {}", employee.name)?;
        Ok(())
    }
}
