// Domain value objects: the selections a calculator form is made of

use std::fmt;
use std::str::FromStr;

use super::form::FormError;

/// Type of decision variable in the optimization problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableType {
    /// Continuous real number (x ∈ ℝ, x ≥ 0)
    Continuous,
    /// Integer number (x ∈ ℤ, x ≥ 0)
    Integer,
}

/// Integrality selection for a variable, as offered on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Restriction {
    #[default]
    Unrestricted,
    /// Restricted to whole numbers
    Restricted,
}

impl Restriction {
    pub fn variable_type(self) -> VariableType {
        match self {
            Restriction::Unrestricted => VariableType::Continuous,
            Restriction::Restricted => VariableType::Integer,
        }
    }
}

impl FromStr for Restriction {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Unrestricted" | "unrestricted" => Ok(Restriction::Unrestricted),
            "Restricted" | "restricted" => Ok(Restriction::Restricted),
            other => Err(FormError::UnknownSelection {
                field: "restriction",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Restriction::Unrestricted => write!(f, "Unrestricted"),
            Restriction::Restricted => write!(f, "Restricted"),
        }
    }
}

/// Type of constraint comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConstraintType {
    /// Less than or equal (≤)
    #[default]
    LessThanOrEqual,
    /// Equal (=)
    Equal,
    /// Greater than or equal (≥)
    GreaterThanOrEqual,
}

impl FromStr for ConstraintType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "<=" | "≤" => Ok(ConstraintType::LessThanOrEqual),
            "=" | "==" => Ok(ConstraintType::Equal),
            ">=" | "≥" => Ok(ConstraintType::GreaterThanOrEqual),
            other => Err(FormError::UnknownSelection {
                field: "operator",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintType::LessThanOrEqual => write!(f, "<="),
            ConstraintType::Equal => write!(f, "="),
            ConstraintType::GreaterThanOrEqual => write!(f, ">="),
        }
    }
}

/// Direction of optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptimizationType {
    /// Maximize the objective function
    #[default]
    Maximize,
    /// Minimize the objective function
    Minimize,
}

impl FromStr for OptimizationType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Maximize" | "maximize" | "max" => Ok(OptimizationType::Maximize),
            "Minimize" | "minimize" | "min" => Ok(OptimizationType::Minimize),
            other => Err(FormError::UnknownSelection {
                field: "direction",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptimizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimizationType::Maximize => write!(f, "Maximize"),
            OptimizationType::Minimize => write!(f, "Minimize"),
        }
    }
}

/// Sign applied to the user's objective before it is handed to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveSign {
    AsGiven,
    Negated,
}

impl ObjectiveSign {
    pub fn factor(self) -> f64 {
        match self {
            ObjectiveSign::AsGiven => 1.0,
            ObjectiveSign::Negated => -1.0,
        }
    }
}

impl fmt::Display for ObjectiveSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectiveSign::AsGiven => write!(f, "as given"),
            ObjectiveSign::Negated => write!(f, "negated"),
        }
    }
}

/// Status of the optimization solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Found optimal solution
    Optimal,
    /// Found feasible solution (may not be optimal)
    Feasible,
    /// Problem has no feasible solution
    Infeasible,
    /// Objective can be improved infinitely
    Unbounded,
    /// Solver error occurred
    Error,
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionStatus::Optimal => write!(f, "Optimal"),
            SolutionStatus::Feasible => write!(f, "Feasible"),
            SolutionStatus::Infeasible => write!(f, "Infeasible"),
            SolutionStatus::Unbounded => write!(f, "Unbounded"),
            SolutionStatus::Error => write!(f, "Error"),
        }
    }
}

/// Solver backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverBackend {
    /// Automatically select best solver
    #[default]
    Auto,
    /// COIN-OR CBC solver
    CoinCbc,
    /// HiGHS solver
    Highs,
}

impl FromStr for SolverBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(SolverBackend::Auto),
            "cbc" | "coin_cbc" | "coin-cbc" => Ok(SolverBackend::CoinCbc),
            "highs" => Ok(SolverBackend::Highs),
            other => Err(format!("unknown solver backend '{}'", other)),
        }
    }
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverBackend::Auto => write!(f, "Auto"),
            SolverBackend::CoinCbc => write!(f, "COIN-OR CBC"),
            SolverBackend::Highs => write!(f, "HiGHS"),
        }
    }
}
