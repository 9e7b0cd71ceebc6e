//! Core data models for salary processing.

mod employee;

pub use employee::Employee;
