//! Salary processing services.
//!
//! The [`SalaryService`] ties a salary calculator to an output sink.

mod salary_service;

pub use salary_service::{SalaryService, format_processed_salary};
