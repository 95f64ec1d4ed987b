// Domain layer: calculator model, form, session and solver contract
pub mod domain;

// Application layer: gRPC messages, service and mappers
pub mod application;

// Infrastructure layer: configuration, logging, server
#[cfg(feature = "server")]
pub mod infrastructure;

// Solver adapters: concrete implementations of SolverService
#[cfg(feature = "server")]
pub mod solver;

// Re-export commonly used types
pub use domain::{
    CalculatorForm, Constraint, ConstraintRow, ConstraintType, Credentials, Event, FormError,
    Interaction, InteractionError, ObjectiveFunction, ObjectiveSign, OptimizationProblem,
    OptimizationType, Page, Report, Restriction, Session, Solution, SolutionStatus, SolverBackend,
    SolverError, SolverService, Variable, VariableType,
};

pub use application::GrpcCalculatorService;

#[cfg(feature = "server")]
pub use infrastructure::{setup_logger, start_server, Args, ServerConfig};

#[cfg(feature = "server")]
pub use solver::{CoinCbcSolver, HighsSolver, SolverFactory};
