// Calculator form state and its conversion into an optimization problem

use super::models::{Constraint, ObjectiveFunction, OptimizationProblem, Variable};
use super::value_objects::{ConstraintType, OptimizationType, Restriction, SolverBackend};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("The number of variables must be at least 1")]
    NoVariables,

    #[error("The number of constraints must be at least 1")]
    NoConstraints,

    #[error("Expected {expected} {field} but got {actual}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Constraint {row} has {actual} coefficients, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Right-hand side of constraint {row} is not a number: '{value}'")]
    InvalidRightHandSide { row: usize, value: String },

    #[error("Unknown {field} selection '{value}'")]
    UnknownSelection { field: &'static str, value: String },
}

/// One constraint row as entered
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintRow {
    pub coefficients: Vec<f64>,
    pub operator: ConstraintType,
    /// Right-hand side exactly as typed
    pub rhs: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorForm {
    pub num_variables: usize,
    pub objective: Vec<f64>,
    pub restrictions: Vec<Restriction>,
    pub constraints: Vec<ConstraintRow>,
    pub direction: OptimizationType,
}

impl CalculatorForm {
    /// Form with `n` variables and `m` constraints, every field at its default.
    pub fn blank(n: usize, m: usize) -> Self {
        Self {
            num_variables: n,
            objective: vec![0.0; n],
            restrictions: vec![Restriction::Unrestricted; n],
            constraints: (0..m)
                .map(|_| ConstraintRow {
                    coefficients: vec![0.0; n],
                    operator: ConstraintType::LessThanOrEqual,
                    rhs: "0".to_string(),
                })
                .collect(),
            direction: OptimizationType::Maximize,
        }
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Variable names in declaration order: `x1..xN`.
    pub fn variable_names(&self) -> Vec<String> {
        (1..=self.num_variables).map(|i| format!("x{}", i)).collect()
    }

    /// Build the model for one solve request.
    pub fn to_problem(&self, backend: SolverBackend) -> Result<OptimizationProblem, FormError> {
        let n = self.num_variables;
        if n == 0 {
            return Err(FormError::NoVariables);
        }
        if self.constraints.is_empty() {
            return Err(FormError::NoConstraints);
        }
        check_len("objective coefficients", n, self.objective.len())?;
        check_len("restrictions", n, self.restrictions.len())?;

        let variables = self
            .variable_names()
            .into_iter()
            .zip(&self.restrictions)
            .map(|(name, restriction)| match restriction {
                Restriction::Restricted => Variable::integer(name),
                Restriction::Unrestricted => Variable::continuous(name),
            })
            .collect();

        let objective = ObjectiveFunction::new(self.direction, self.objective.clone());
        let mut problem = OptimizationProblem::new(objective)
            .with_name("Integer_Programming_Problem")
            .with_variables(variables)
            .with_backend(backend);

        for (i, row) in self.constraints.iter().enumerate() {
            let number = i + 1;
            if row.coefficients.len() != n {
                return Err(FormError::RowLengthMismatch {
                    row: number,
                    expected: n,
                    actual: row.coefficients.len(),
                });
            }
            let bound = parse_rhs(number, &row.rhs)?;
            problem = problem.add_constraint(Constraint::new(
                row.operator,
                row.coefficients.clone(),
                bound,
            ));
        }

        Ok(problem)
    }
}

fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<(), FormError> {
    if expected == actual {
        Ok(())
    } else {
        Err(FormError::LengthMismatch {
            field,
            expected,
            actual,
        })
    }
}

fn parse_rhs(row: usize, text: &str) -> Result<f64, FormError> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FormError::InvalidRightHandSide {
            row,
            value: text.to_string(),
        }),
    }
}
