// Text report of a solve, in the calculator's output layout

use std::fmt;

use super::models::{OptimizationProblem, Solution, SolverStatistics};
use super::value_objects::SolutionStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub status: SolutionStatus,
    /// `(name, value)` in declaration order; empty unless a point was found
    pub values: Vec<(String, f64)>,
    /// User objective truncated toward zero
    pub objective_value: Option<i64>,
    pub message: String,
    pub statistics: SolverStatistics,
}

impl Report {
    pub fn new(problem: &OptimizationProblem, solution: &Solution) -> Self {
        let values = if solution.is_feasible() {
            problem
                .variables
                .iter()
                .zip(&solution.variable_values)
                .map(|(var, &value)| (var.name.clone(), value))
                .collect()
        } else {
            Vec::new()
        };

        let objective_value = if solution.is_feasible() {
            solution.optimal_value.map(truncate)
        } else {
            None
        };

        Self {
            status: solution.status,
            values,
            objective_value,
            message: solution.message.clone(),
            statistics: solution.statistics.clone(),
        }
    }

    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, v)| v)
    }
}

fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}

/// Whole numbers keep a trailing `.0`. Magnitudes from `1e16` up and
/// below `1e-4` switch to exponent form without padding (`1e20`, `1e-7`).
fn format_value(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:?}", value)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            SolutionStatus::Optimal | SolutionStatus::Feasible => {
                if self.status == SolutionStatus::Optimal {
                    writeln!(f, "Optimal Solution:")?;
                } else {
                    writeln!(f, "Feasible Solution:")?;
                }
                for (name, value) in &self.values {
                    writeln!(f, "{} = {}", name, format_value(*value))?;
                }
                match self.objective_value {
                    Some(value) => write!(f, "Objective Value: {}", value),
                    None => write!(f, "Objective Value: unavailable"),
                }
            }
            status => {
                writeln!(f, "Status: {}", status)?;
                write!(f, "{}", self.message)
            }
        }
    }
}
