//! Bonus salary calculation.
//!
//! The bonus variant pays the employee's base salary plus a fixed bonus.

use rust_decimal::Decimal;

use crate::models::Employee;

use super::SalaryCalculator;

/// The fixed bonus added on top of the base salary.
pub const FIXED_BONUS: Decimal = Decimal::ONE_THOUSAND;

/// Pays the employee's base salary plus [`FIXED_BONUS`].
///
/// The bonus amount is a constant and cannot be configured. The result
/// saturates at `Decimal::MAX`, so salaries within 1000 of the ceiling are
/// paid exactly `Decimal::MAX`.
///
/// # Examples
///
/// ```
/// use solid_payroll::calculation::{BonusSalaryCalculator, SalaryCalculator};
/// use solid_payroll::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new("Hamza", Decimal::from(5000));
/// assert_eq!(BonusSalaryCalculator.calculate_salary(&employee), Decimal::from(6000));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BonusSalaryCalculator;

impl SalaryCalculator for BonusSalaryCalculator {
    fn calculate_salary(&self, employee: &Employee) -> Decimal {
        employee.basic_salary.saturating_add(FIXED_BONUS)
    }

    fn name(&self) -> &'static str {
        "bonus"
    }
}
