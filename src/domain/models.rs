use super::value_objects::{
    ConstraintType, ObjectiveSign, OptimizationType, SolutionStatus, SolverBackend, VariableType,
};

/// Decision variable: non-negative, unbounded above
#[derive(Debug, Clone)]
pub struct Variable {
    pub variable_type: VariableType,
    pub lower_bound: f64,
    pub upper_bound: Option<f64>,
    pub name: String,
}

impl Variable {
    pub fn continuous(name: impl Into<String>) -> Self {
        Self {
            variable_type: VariableType::Continuous,
            lower_bound: 0.0,
            upper_bound: None,
            name: name.into(),
        }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self {
            variable_type: VariableType::Integer,
            lower_bound: 0.0,
            upper_bound: None,
            name: name.into(),
        }
    }

    pub fn is_integer(&self) -> bool {
        self.variable_type == VariableType::Integer
    }
}

/// Objective function together with the declared direction
#[derive(Debug, Clone)]
pub struct ObjectiveFunction {
    pub optimization_type: OptimizationType,
    pub coefficients: Vec<f64>,
}

impl ObjectiveFunction {
    pub fn new(optimization_type: OptimizationType, coefficients: Vec<f64>) -> Self {
        Self {
            optimization_type,
            coefficients,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }

    pub fn has_negative(&self) -> bool {
        self.coefficients.iter().any(|&c| c < 0.0)
    }

    /// Sign applied before the objective is handed to the backend.
    ///
    /// Without negative coefficients, Maximize is negated and Minimize kept.
    /// With at least one negative coefficient the roles swap: Maximize is kept
    /// and Minimize is negated. This reproduces the calculator's historical
    /// output and is not the textbook max/min reduction.
    pub fn registered_sign(&self) -> ObjectiveSign {
        match (self.has_negative(), self.optimization_type) {
            (false, OptimizationType::Maximize) => ObjectiveSign::Negated,
            (false, OptimizationType::Minimize) => ObjectiveSign::AsGiven,
            (true, OptimizationType::Maximize) => ObjectiveSign::AsGiven,
            (true, OptimizationType::Minimize) => ObjectiveSign::Negated,
        }
    }

    /// Direction the backend optimizes the registered objective in.
    ///
    /// A negated Maximize without negative coefficients is minimized, so the
    /// user's objective is still maximized. Every other case keeps the
    /// declared direction.
    pub fn solve_sense(&self) -> OptimizationType {
        match (self.has_negative(), self.optimization_type) {
            (false, OptimizationType::Maximize) => OptimizationType::Minimize,
            (_, direction) => direction,
        }
    }

    /// Coefficients handed to the backend.
    pub fn registered_coefficients(&self) -> Vec<f64> {
        let factor = self.registered_sign().factor();
        self.coefficients.iter().map(|&c| factor * c).collect()
    }

    /// The user's objective `Σ c·x` at the given point.
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(values)
            .map(|(c, x)| c * x)
            .sum()
    }
}

/// Linear constraint on variables
#[derive(Debug, Clone)]
pub struct Constraint {
    pub constraint_type: ConstraintType,
    pub coefficients: Vec<f64>,
    pub bound: f64,
}

impl Constraint {
    pub fn new(constraint_type: ConstraintType, coefficients: Vec<f64>, bound: f64) -> Self {
        Self {
            constraint_type,
            coefficients,
            bound,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }
}

/// Complete optimization problem, rebuilt for every solve
#[derive(Debug, Clone)]
pub struct OptimizationProblem {
    pub name: String,
    pub objective: ObjectiveFunction,
    pub constraints: Vec<Constraint>,
    pub variables: Vec<Variable>,
    pub backend: SolverBackend,
}

impl OptimizationProblem {
    pub fn new(objective: ObjectiveFunction) -> Self {
        Self {
            name: String::new(),
            objective,
            constraints: Vec::new(),
            variables: Vec::new(),
            backend: SolverBackend::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn add_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_variables(mut self, variables: Vec<Variable>) -> Self {
        self.variables = variables;
        self
    }

    pub fn with_backend(mut self, backend: SolverBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn num_variables(&self) -> usize {
        self.objective.num_variables()
    }

    pub fn num_integer_variables(&self) -> usize {
        self.variables.iter().filter(|v| v.is_integer()).count()
    }

    /// Round values of integer variables to whole numbers.
    ///
    /// Branch-and-bound returns integer columns within a tolerance (9.9999999).
    pub fn snap_integers(&self, values: &mut [f64]) {
        for (value, var) in values.iter_mut().zip(&self.variables) {
            if var.is_integer() {
                *value = value.round();
            }
        }
    }

    pub fn statistics(&self) -> SolverStatistics {
        SolverStatistics {
            solve_time_ms: 0.0,
            num_variables: self.num_variables() as u32,
            num_constraints: self.constraints.len() as u32,
            num_integer_vars: self.num_integer_variables() as u32,
        }
    }
}

/// Statistics about the solve process
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolverStatistics {
    pub solve_time_ms: f64,
    pub num_variables: u32,
    pub num_constraints: u32,
    pub num_integer_vars: u32,
}

/// Solution to an optimization problem
#[derive(Debug, Clone)]
pub struct Solution {
    pub status: SolutionStatus,
    /// Value of the user's objective at `variable_values`
    pub optimal_value: Option<f64>,
    pub variable_values: Vec<f64>,
    pub message: String,
    pub statistics: SolverStatistics,
}

impl Solution {
    pub fn new(status: SolutionStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            optimal_value: None,
            variable_values: Vec::new(),
            message: message.into(),
            statistics: SolverStatistics::default(),
        }
    }

    pub fn optimal(value: f64, variable_values: Vec<f64>) -> Self {
        Self {
            status: SolutionStatus::Optimal,
            optimal_value: Some(value),
            variable_values,
            message: "Optimal solution found".to_string(),
            statistics: SolverStatistics::default(),
        }
    }

    pub fn infeasible() -> Self {
        Self::new(
            SolutionStatus::Infeasible,
            "Problem is infeasible: no solution satisfies all constraints",
        )
    }

    pub fn unbounded() -> Self {
        Self::new(
            SolutionStatus::Unbounded,
            "Problem is unbounded: objective can be improved infinitely",
        )
    }

    pub fn with_statistics(mut self, statistics: SolverStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    pub fn is_feasible(&self) -> bool {
        matches!(
            self.status,
            SolutionStatus::Optimal | SolutionStatus::Feasible
        )
    }
}
