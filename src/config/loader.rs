//! Scenario loading functionality.
//!
//! This module provides the [`ScenarioLoader`] type for loading salary
//! scenarios from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::DemoScenario;

/// Loads salary scenarios from YAML.
///
/// A scenario file looks like:
/// ```text
/// employee:
///   name: Hamza
///   basic_salary: "5000"
/// ```
///
/// # Example
///
/// ```no_run
/// use solid_payroll::config::ScenarioLoader;
///
/// let scenario = ScenarioLoader::load("./config/demo.yaml")?;
/// println!("Employee: {}", scenario.employee.name);
/// # Ok::<(), solid_payroll::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Loads a scenario from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns the scenario on success, or an error if:
    /// - The file cannot be read (`ConfigNotFound`)
    /// - The file is not a valid scenario document (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<DemoScenario> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&path_str, &content)
    }

    /// Parses a scenario from YAML text.
    ///
    /// `source` names where the text came from and is only used in errors.
    ///
    /// # Example
    ///
    /// ```
    /// use solid_payroll::config::ScenarioLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let yaml = "employee:\n  name: Amira\n  basic_salary: \"4200\"\n";
    /// let scenario = ScenarioLoader::from_yaml_str("inline", yaml)?;
    /// assert_eq!(scenario.employee.basic_salary, Decimal::from(4200));
    /// # Ok::<(), solid_payroll::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(source: &str, content: &str) -> EngineResult<DemoScenario> {
        let scenario: DemoScenario =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        info!(
            source = %source,
            employee = %scenario.employee.name,
            "Loaded salary scenario"
        );
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_demo_configuration() {
        let result = ScenarioLoader::load("./config/demo.yaml");
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        assert_eq!(result.unwrap(), DemoScenario::default());
    }

    #[test]
    fn test_from_yaml_str_parses_employee() {
        let yaml = "employee:\n  name: Amira\n  basic_salary: \"4200.50\"\n";
        let scenario = ScenarioLoader::from_yaml_str("inline", yaml).unwrap();

        assert_eq!(scenario.employee.name, "Amira");
        assert_eq!(scenario.employee.basic_salary, dec("4200.50"));
    }

    #[test]
    fn test_load_missing_file_returns_not_found() {
        let result = ScenarioLoader::load("./config/does_not_exist.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("does_not_exist.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_returns_parse_error() {
        let yaml = "employee:\n  name: Amira\n";
        let result = ScenarioLoader::from_yaml_str("inline", yaml);

        match result {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert_eq!(path, "inline");
                assert!(message.contains("basic_salary"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ScenarioLoader::from_yaml_str("broken", "employee: [unclosed");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_default_scenario_is_hamza_5000() {
        let scenario = DemoScenario::default();
        assert_eq!(scenario.employee.name, "Hamza");
        assert_eq!(scenario.employee.basic_salary, dec("5000"));
    }
}
