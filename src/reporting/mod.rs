//! Report generation and printing.
//!
//! Generation and printing are two separate traits, [`ReportGenerator`] and
//! [`ReportPrinter`], so a consumer that needs only one of them never depends
//! on the other. Neither is wired into salary processing.

mod generator;
mod printer;

pub use generator::{ConsoleReportGenerator, ReportGenerator};
pub use printer::{ConsolePrinter, ReportPrinter};
