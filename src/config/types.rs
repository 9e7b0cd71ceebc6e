//! Configuration types for the salary demonstration.
//!
//! These structures are deserialized from YAML scenario files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::Employee;

/// A salary processing scenario: the employee whose salary is processed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DemoScenario {
    /// The employee processed by every salary service in the run.
    pub employee: Employee,
}

impl Default for DemoScenario {
    /// The built-in scenario: `Hamza` with a base salary of 5000.
    fn default() -> Self {
        Self {
            employee: Employee::new("Hamza", Decimal::from(5000)),
        }
    }
}
