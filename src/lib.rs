//! Salary processing with pluggable calculation strategies.
//!
//! This crate models an employee, computes a salary through an injected
//! [`calculation::SalaryCalculator`], and writes the result to the console
//! through a [`service::SalaryService`]. Report generation and report printing
//! are provided as separate capabilities in [`reporting`].

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod reporting;
pub mod service;
