// Domain service interface for solving optimization problems
// Every backend adapter implements this; the domain never names a concrete solver

use super::models::{OptimizationProblem, Solution};

/// Error types for the solver service
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    #[error("Solver execution failed: {0}")]
    ExecutionFailed(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Domain service interface for optimization solvers
///
/// Implementations register the objective returned by
/// [`ObjectiveFunction::registered_coefficients`](super::models::ObjectiveFunction::registered_coefficients)
/// and optimize it in the direction of
/// [`ObjectiveFunction::solve_sense`](super::models::ObjectiveFunction::solve_sense). Infeasible and unbounded models are reported through
/// [`Solution::status`], not as errors.
pub trait SolverService: Send + Sync {
    /// Solve an optimization problem
    fn solve(&self, problem: &OptimizationProblem) -> Result<Solution>;

    /// Validate a problem without solving it
    fn validate(&self, problem: &OptimizationProblem) -> Result<()> {
        let mut errors = Vec::new();

        if problem.objective.coefficients.is_empty() {
            errors.push("Objective must have at least one coefficient".to_string());
        }

        let num_vars = problem.num_variables();

        if problem.variables.len() != num_vars {
            errors.push(format!(
                "Number of variables ({}) doesn't match objective coefficients ({})",
                problem.variables.len(),
                num_vars
            ));
        }

        for (i, constraint) in problem.constraints.iter().enumerate() {
            if constraint.num_variables() != num_vars {
                errors.push(format!(
                    "Constraint {} has {} coefficients but problem has {} variables",
                    i + 1,
                    constraint.num_variables(),
                    num_vars
                ));
            }
            if !constraint.bound.is_finite() {
                errors.push(format!(
                    "Constraint {} has a non-finite right-hand side",
                    i + 1
                ));
            }
        }

        if problem
            .objective
            .coefficients
            .iter()
            .chain(problem.constraints.iter().flat_map(|c| c.coefficients.iter()))
            .any(|c| !c.is_finite())
        {
            errors.push("Coefficients must be finite numbers".to_string());
        }

        for var in &problem.variables {
            if let Some(upper) = var.upper_bound {
                if var.lower_bound > upper {
                    errors.push(format!(
                        "Variable '{}' has lower bound ({}) > upper bound ({})",
                        var.name, var.lower_bound, upper
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolverError::InvalidProblem(errors.join("; ")))
        }
    }

    /// Get the name of this solver backend
    fn name(&self) -> &str;
}
