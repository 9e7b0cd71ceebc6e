//! Salary calculation logic.
//!
//! This module contains the [`SalaryCalculator`] capability and its two
//! variants: basic salary passthrough and basic salary plus a fixed bonus.

mod basic_salary;
mod bonus_salary;
mod calculator;

pub use basic_salary::BasicSalaryCalculator;
pub use bonus_salary::{BonusSalaryCalculator, FIXED_BONUS};
pub use calculator::SalaryCalculator;
