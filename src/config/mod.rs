//! Scenario configuration for salary processing.
//!
//! A scenario names the employee whose salary is processed. The built-in
//! [`DemoScenario::default`] is what the binary runs; [`ScenarioLoader`] reads
//! the same structure from YAML.
//!
//! # Example
//!
//! ```no_run
//! use solid_payroll::config::ScenarioLoader;
//!
//! let scenario = ScenarioLoader::load("./config/demo.yaml").unwrap();
//! println!("Loaded employee: {}", scenario.employee.name);
//! ```

mod loader;
mod types;

pub use loader::ScenarioLoader;
pub use types::DemoScenario;
