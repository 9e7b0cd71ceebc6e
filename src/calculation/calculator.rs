//! The salary calculation capability.

use rust_decimal::Decimal;

use crate::models::Employee;

/// Derives a pay amount from an employee record.
///
/// Implementations must be pure: the same employee always yields the same
/// amount and no state is retained between calls. Callers depend on this
/// trait, usually as a `Box<dyn SalaryCalculator>`, so new variants can be
/// added without changing existing ones or the code that uses them.
///
/// # Examples
///
/// ```
/// use solid_payroll::calculation::SalaryCalculator;
/// use solid_payroll::models::Employee;
/// use rust_decimal::Decimal;
///
/// struct DoubleSalaryCalculator;
///
/// impl SalaryCalculator for DoubleSalaryCalculator {
///     fn calculate_salary(&self, employee: &Employee) -> Decimal {
///         employee.basic_salary * Decimal::TWO
///     }
/// }
///
/// let calculator: Box<dyn SalaryCalculator> = Box::new(DoubleSalaryCalculator);
/// let employee = Employee::new("Hamza", Decimal::from(5000));
/// assert_eq!(calculator.calculate_salary(&employee), Decimal::from(10000));
/// assert_eq!(calculator.name(), "custom");
/// ```
pub trait SalaryCalculator {
    /// Calculates the salary for the given employee.
    fn calculate_salary(&self, employee: &Employee) -> Decimal;

    /// A short identifier for this calculator, used in log events.
    fn name(&self) -> &'static str {
        "custom"
    }
}
