//! Report printing capability.

use std::io::{self, Stdout, Write};

use crate::error::EngineResult;

/// Prints already-produced report content.
pub trait ReportPrinter {
    /// Prints the given report content. Any text is accepted.
    fn print_report(&mut self, report_content: &str) -> EngineResult<()>;
}

/// Prints reports to a console-like sink.
///
/// # Example
///
/// ```
/// use solid_payroll::reporting::{ConsolePrinter, ReportPrinter};
///
/// let mut printer = ConsolePrinter::with_writer(Vec::new());
/// printer.print_report("Quarterly summary")?;
///
/// let output = String::from_utf8(printer.into_writer()).unwrap();
/// assert_eq!(output, "Printing report: Quarterly summary\n");
/// # Ok::<(), solid_payroll::error::EngineError>(())
/// ```
pub struct ConsolePrinter<W: Write = Stdout> {
    out: W,
}

impl ConsolePrinter<Stdout> {
    /// Creates a printer that writes to standard output.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsolePrinter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsolePrinter<W> {
    /// Creates a printer that writes to the given sink.
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    /// Consumes the printer and returns its output sink.
    pub fn into_writer(self) -> W {
        self.out
    }
}

impl<W: Write> ReportPrinter for ConsolePrinter<W> {
    fn print_report(&mut self, report_content: &str) -> EngineResult<()> {
        writeln!(self.out, "Printing report: {}", report_content)?;
        Ok(())
    }
}
