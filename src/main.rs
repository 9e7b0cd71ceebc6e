//! Salary processing demo.
//!
//! Processes one employee's salary twice, once with the basic calculator and
//! once with the bonus calculator. Log output goes to stderr and is controlled
//! by `RUST_LOG`; standard output carries only the result lines.

use std::io::{self, Write};

use solid_payroll::calculation::{BasicSalaryCalculator, BonusSalaryCalculator, SalaryCalculator};
use solid_payroll::config::DemoScenario;
use solid_payroll::error::EngineResult;
use solid_payroll::models::Employee;
use solid_payroll::service::SalaryService;
use tracing_subscriber::EnvFilter;

fn main() -> EngineResult<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let DemoScenario { employee } = DemoScenario::default();
    run(&employee, io::stdout)
}

/// Processes `employee` with the basic and then the bonus calculator.
///
/// Every line, labels included, goes through a writer obtained from
/// `make_writer`, so a failed write surfaces as an error.
fn run<W, F>(employee: &Employee, mut make_writer: F) -> EngineResult<()>
where
    W: Write,
    F: FnMut() -> W,
{
    let basic_calculator: Box<dyn SalaryCalculator> = Box::new(BasicSalaryCalculator);
    let bonus_calculator: Box<dyn SalaryCalculator> = Box::new(BonusSalaryCalculator);

    let mut basic_service = SalaryService::with_writer(basic_calculator, make_writer());
    let mut bonus_service = SalaryService::with_writer(bonus_calculator, make_writer());

    writeln!(make_writer(), "Process Salary with Basic Calculation...")?;
    basic_service.process_salary(employee)?;

    writeln!(make_writer(), "Process Salary with Bonus Calculation...")?;
    bonus_service.process_salary(employee)?;

    Ok(())
}
