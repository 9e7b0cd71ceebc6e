//! Salary processing service.
//!
//! This module provides the [`SalaryService`] type, which computes a salary
//! through an injected calculator and writes one line describing the result.

use std::io::{self, Stdout, Write};

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::SalaryCalculator;
use crate::error::EngineResult;
use crate::models::Employee;

/// Formats the line emitted for a processed salary.
///
/// The salary is written in normalised form, so `5000.00` renders as `5000`.
///
/// # Examples
///
/// ```
/// use solid_payroll::service::format_processed_salary;
/// use rust_decimal::Decimal;
///
/// let line = format_processed_salary("Hamza", Decimal::new(500000, 2));
/// assert_eq!(line, "Processed salary for Hamza: 5000");
/// ```
pub fn format_processed_salary(name: &str, salary: Decimal) -> String {
    format!("Processed salary for {}: {}", name, salary.normalize())
}

/// Computes salaries with an injected calculator and reports them.
///
/// The service only knows the [`SalaryCalculator`] trait, so any conforming
/// calculator can be swapped in at construction. Output goes to standard
/// output unless a writer is supplied with [`SalaryService::with_writer`].
///
/// # Example
///
/// ```
/// use solid_payroll::calculation::BonusSalaryCalculator;
/// use solid_payroll::models::Employee;
/// use solid_payroll::service::SalaryService;
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new("Hamza", Decimal::from(5000));
/// let mut service = SalaryService::with_writer(Box::new(BonusSalaryCalculator), Vec::new());
/// service.process_salary(&employee)?;
///
/// let output = String::from_utf8(service.into_writer()).unwrap();
/// assert_eq!(output, "Processed salary for Hamza: 6000\n");
/// # Ok::<(), solid_payroll::error::EngineError>(())
/// ```
pub struct SalaryService<W: Write = Stdout> {
    calculator: Box<dyn SalaryCalculator>,
    out: W,
}

impl SalaryService<Stdout> {
    /// Creates a service that writes to standard output.
    pub fn new(calculator: Box<dyn SalaryCalculator>) -> Self {
        Self::with_writer(calculator, io::stdout())
    }
}

impl<W: Write> SalaryService<W> {
    /// Creates a service that writes to the given sink.
    pub fn with_writer(calculator: Box<dyn SalaryCalculator>, out: W) -> Self {
        Self { calculator, out }
    }

    /// Calculates the employee's salary and writes one result line.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Output` if the line cannot be written.
    pub fn process_salary(&mut self, employee: &Employee) -> EngineResult<()> {
        let salary = self.calculator.calculate_salary(employee);
        debug!(
            calculator = self.calculator.name(),
            employee = %employee.name,
            salary = %salary,
            "Salary processed"
        );

        writeln!(self.out, "{}", format_processed_salary(&employee.name, salary))?;
        Ok(())
    }

    /// Consumes the service and returns its output sink.
    pub fn into_writer(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{BasicSalaryCalculator, BonusSalaryCalculator};
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn run(calculator: Box<dyn SalaryCalculator>, employee: &Employee) -> String {
        let mut service = SalaryService::with_writer(calculator, Vec::new());
        service.process_salary(employee).unwrap();
        String::from_utf8(service.into_writer()).unwrap()
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_format_processed_salary() {
        assert_eq!(
            format_processed_salary("Hamza", dec("5000")),
            "Processed salary for Hamza: 5000"
        );
    }

    #[test]
    fn test_format_strips_trailing_zeros() {
        assert_eq!(
            format_processed_salary("Hamza", dec("6000.00")),
            "Processed salary for Hamza: 6000"
        );
        assert_eq!(
            format_processed_salary("Hamza", dec("5000.50")),
            "Processed salary for Hamza: 5000.5"
        );
    }

    #[test]
    fn test_basic_service_writes_one_line() {
        let employee = Employee::new("Hamza", dec("5000"));
        let output = run(Box::new(BasicSalaryCalculator), &employee);
        assert_eq!(output, "Processed salary for Hamza: 5000\n");
    }

    #[test]
    fn test_bonus_service_writes_one_line() {
        let employee = Employee::new("Hamza", dec("5000"));
        let output = run(Box::new(BonusSalaryCalculator), &employee);
        assert_eq!(output, "Processed salary for Hamza: 6000\n");
    }

    #[test]
    fn test_service_interpolates_employee_name() {
        let employee = Employee::new("Amira", dec("3100"));
        let output = run(Box::new(BasicSalaryCalculator), &employee);
        assert_eq!(output, "Processed salary for Amira: 3100\n");
    }

    #[test]
    fn test_service_can_process_repeatedly() {
        let employee = Employee::new("Hamza", dec("5000"));
        let mut service = SalaryService::with_writer(Box::new(BonusSalaryCalculator), Vec::new());
        service.process_salary(&employee).unwrap();
        service.process_salary(&employee).unwrap();

        let output = String::from_utf8(service.into_writer()).unwrap();
        assert_eq!(
            output,
            "Processed salary for Hamza: 6000\nProcessed salary for Hamza: 6000\n"
        );
    }

    #[test]
    fn test_service_accepts_custom_calculator() {
        struct HalfSalaryCalculator;

        impl SalaryCalculator for HalfSalaryCalculator {
            fn calculate_salary(&self, employee: &Employee) -> Decimal {
                employee.basic_salary / Decimal::TWO
            }
        }

        let employee = Employee::new("Hamza", dec("5000"));
        let output = run(Box::new(HalfSalaryCalculator), &employee);
        assert_eq!(output, "Processed salary for Hamza: 2500\n");
    }

    #[test]
    fn test_new_service_writes_to_stdout() {
        let employee = Employee::new("Hamza", dec("5000"));
        let mut service = SalaryService::new(Box::new(BasicSalaryCalculator));
        assert!(service.process_salary(&employee).is_ok());
    }

    #[test]
    fn test_write_failure_returns_output_error() {
        let employee = Employee::new("Hamza", dec("5000"));
        let mut service = SalaryService::with_writer(Box::new(BasicSalaryCalculator), BrokenPipe);

        let result = service.process_salary(&employee);
        assert!(matches!(result, Err(EngineError::Output { .. })));
    }
}
