//! Basic salary calculation.
//!
//! The basic variant pays the employee's base salary with no adjustment.

use rust_decimal::Decimal;

use crate::models::Employee;

use super::SalaryCalculator;

/// Pays exactly the employee's base salary.
///
/// # Examples
///
/// ```
/// use solid_payroll::calculation::{BasicSalaryCalculator, SalaryCalculator};
/// use solid_payroll::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new("Hamza", Decimal::from(5000));
/// assert_eq!(BasicSalaryCalculator.calculate_salary(&employee), Decimal::from(5000));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicSalaryCalculator;

impl SalaryCalculator for BasicSalaryCalculator {
    fn calculate_salary(&self, employee: &Employee) -> Decimal {
        employee.basic_salary
    }

    fn name(&self) -> &'static str {
        "basic"
    }
}
