// HiGHS Solver Adapter
// Translates the domain problem into a HiGHS row-wise problem

use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution},
    solver_service::{Result, SolverError, SolverService},
    value_objects::{ConstraintType, OptimizationType, SolutionStatus},
};
use highs::{HighsModelStatus, RowProblem, Sense, SolvedModel};
use log::{debug, warn};
use std::time::Instant;

pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

fn run(pb: RowProblem, sense: Sense, presolve: bool) -> SolvedModel {
    let mut model = pb.optimise(sense);
    model.set_option("output_flag", false);
    if !presolve {
        model.set_option("presolve", "off");
    }
    model.solve()
}

impl SolverService for HighsSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<DomainSolution> {
        self.validate(problem)?;

        let start_time = Instant::now();
        let mut statistics = problem.statistics();

        let objective = problem.objective.registered_coefficients();
        let sense = match problem.objective.solve_sense() {
            OptimizationType::Maximize => Sense::Maximise,
            OptimizationType::Minimize => Sense::Minimise,
        };
        debug!(
            "registering objective {}, solving with sense {:?}",
            problem.objective.registered_sign(),
            sense
        );

        let mut pb = RowProblem::default();
        let mut columns = Vec::with_capacity(problem.variables.len());

        for (var_def, &obj_coeff) in problem.variables.iter().zip(&objective) {
            let lower = var_def.lower_bound;
            let upper = var_def.upper_bound.unwrap_or(f64::INFINITY);

            let col = if var_def.is_integer() {
                pb.add_integer_column(obj_coeff, lower..upper)
            } else {
                pb.add_column(obj_coeff, lower..upper)
            };
            columns.push(col);
        }

        for constraint in &problem.constraints {
            let terms: Vec<_> = constraint
                .coefficients
                .iter()
                .zip(&columns)
                .filter(|&(&coeff, _)| coeff != 0.0)
                .map(|(&coeff, &col)| (col, coeff))
                .collect();

            match constraint.constraint_type {
                ConstraintType::LessThanOrEqual => {
                    pb.add_row(..=constraint.bound, &terms);
                }
                ConstraintType::Equal => {
                    pb.add_row(constraint.bound..=constraint.bound, &terms);
                }
                ConstraintType::GreaterThanOrEqual => {
                    pb.add_row(constraint.bound.., &terms);
                }
            }
        }

        let mut solved = run(pb.clone(), sense, true);
        if solved.status() == HighsModelStatus::UnboundedOrInfeasible {
            // Presolve may not tell infeasible from unbounded
            debug!("presolve was inconclusive, solving again without it");
            solved = run(pb, sense, false);
        }
        statistics.solve_time_ms = start_time.elapsed().as_secs_f64() * 1000.0;

        match solved.status() {
            HighsModelStatus::Optimal => {
                let mut variable_values = solved.get_solution().columns().to_vec();
                problem.snap_integers(&mut variable_values);

                let actual_obj = problem.objective.evaluate(&variable_values);

                let mut solution = DomainSolution::optimal(actual_obj, variable_values)
                    .with_statistics(statistics);
                solution.message = format!("Optimal solution found for '{}'", problem.name);
                Ok(solution)
            }
            HighsModelStatus::Infeasible => {
                Ok(DomainSolution::infeasible().with_statistics(statistics))
            }
            HighsModelStatus::Unbounded => {
                Ok(DomainSolution::unbounded().with_statistics(statistics))
            }
            HighsModelStatus::UnboundedOrInfeasible => {
                warn!("HiGHS could not decide between infeasible and unbounded");
                Ok(DomainSolution::new(
                    SolutionStatus::Error,
                    "Problem is either infeasible or unbounded",
                )
                .with_statistics(statistics))
            }
            status => Err(SolverError::ExecutionFailed(format!(
                "HiGHS solver returned status: {:?}",
                status
            ))),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}
