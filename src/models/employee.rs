//! Employee model.
//!
//! This module defines the Employee record that salary calculators and
//! services operate on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee whose salary is processed.
///
/// The record only holds data. Calculators and services borrow it for the
/// duration of one call and never take ownership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's display name.
    pub name: String,
    /// The base salary amount before any calculation is applied.
    pub basic_salary: Decimal,
}

impl Employee {
    /// Creates a new employee record.
    ///
    /// # Examples
    ///
    /// ```
    /// use solid_payroll::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("Hamza", Decimal::from(5000));
    /// assert_eq!(employee.name, "Hamza");
    /// assert_eq!(employee.basic_salary, Decimal::from(5000));
    /// ```
    pub fn new(name: impl Into<String>, basic_salary: Decimal) -> Self {
        Self {
            name: name.into(),
            basic_salary,
        }
    }
}
