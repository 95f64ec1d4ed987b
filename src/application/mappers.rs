// Mappers: convert between wire messages and domain types
// Keeps prost types out of the domain layer

use crate::domain::{
    form::{CalculatorForm, ConstraintRow, FormError},
    interaction::InteractionError,
    report::Report,
    session::LoginError,
    solver_service::SolverError,
    value_objects::{
        ConstraintType, OptimizationType, Restriction, SolutionStatus, SolverBackend,
    },
};
use tonic::Status;

use super::messages as proto;

/// Empty selections fall back to the form's first option.
fn selection<T: Default + std::str::FromStr<Err = FormError>>(
    label: &str,
) -> Result<T, FormError> {
    if label.trim().is_empty() {
        Ok(T::default())
    } else {
        label.parse()
    }
}

pub fn proto_to_domain_row(row: &proto::ConstraintRow) -> Result<ConstraintRow, FormError> {
    Ok(ConstraintRow {
        coefficients: row.coefficients.clone(),
        operator: selection::<ConstraintType>(&row.operator)?,
        rhs: row.rhs.clone(),
    })
}

pub fn proto_to_domain_form(form: &proto::CalculatorForm) -> Result<CalculatorForm, FormError> {
    let restrictions = form
        .restrictions
        .iter()
        .map(|label| selection::<Restriction>(label))
        .collect::<Result<Vec<_>, _>>()?;

    let constraints = form
        .constraints
        .iter()
        .map(proto_to_domain_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CalculatorForm {
        num_variables: form.num_variables as usize,
        objective: form.objective_coefficients.clone(),
        restrictions,
        constraints,
        direction: selection::<OptimizationType>(&form.direction)?,
    })
}

pub fn domain_to_proto_form(form: &CalculatorForm) -> proto::CalculatorForm {
    proto::CalculatorForm {
        num_variables: form.num_variables as u32,
        objective_coefficients: form.objective.clone(),
        restrictions: form.restrictions.iter().map(|r| r.to_string()).collect(),
        constraints: form
            .constraints
            .iter()
            .map(|row| proto::ConstraintRow {
                coefficients: row.coefficients.clone(),
                operator: row.operator.to_string(),
                rhs: row.rhs.clone(),
            })
            .collect(),
        direction: form.direction.to_string(),
    }
}

pub fn parse_backend(label: &str, default: SolverBackend) -> Result<SolverBackend, Status> {
    if label.trim().is_empty() {
        Ok(default)
    } else {
        label.parse().map_err(Status::invalid_argument)
    }
}

pub fn domain_to_proto_status(status: SolutionStatus) -> proto::SolutionStatus {
    match status {
        SolutionStatus::Optimal => proto::SolutionStatus::Optimal,
        SolutionStatus::Feasible => proto::SolutionStatus::Feasible,
        SolutionStatus::Infeasible => proto::SolutionStatus::Infeasible,
        SolutionStatus::Unbounded => proto::SolutionStatus::Unbounded,
        SolutionStatus::Error => proto::SolutionStatus::Error,
    }
}

pub fn domain_to_proto_report(report: &Report, solver_name: &str) -> proto::SolveReply {
    proto::SolveReply {
        status: domain_to_proto_status(report.status) as i32,
        report: report.to_string(),
        values: report
            .values
            .iter()
            .map(|(name, value)| proto::VariableValue {
                name: name.clone(),
                value: *value,
            })
            .collect(),
        objective_value: report.objective_value,
        message: report.message.clone(),
        statistics: Some(proto::SolverStatistics {
            solve_time_ms: report.statistics.solve_time_ms,
            num_variables: report.statistics.num_variables,
            num_constraints: report.statistics.num_constraints,
            num_integer_vars: report.statistics.num_integer_vars,
            solver_backend: solver_name.to_string(),
        }),
    }
}

pub fn form_status(err: FormError) -> Status {
    Status::invalid_argument(err.to_string())
}

pub fn login_status(err: LoginError) -> Status {
    Status::unauthenticated(err.to_string())
}

pub fn solver_status(err: SolverError) -> Status {
    match err {
        SolverError::InvalidProblem(_) => Status::invalid_argument(err.to_string()),
        SolverError::ExecutionFailed(_) => Status::internal(format!("Solver error: {}", err)),
    }
}

pub fn interaction_status(err: InteractionError) -> Status {
    match err {
        InteractionError::NotLoggedIn => Status::unauthenticated(err.to_string()),
        InteractionError::Form(e) => form_status(e),
        InteractionError::Solver(e) => solver_status(e),
    }
}
