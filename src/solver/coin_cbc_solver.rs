// COIN-OR CBC adapter through good_lp

use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution},
    solver_service::{Result, SolverError, SolverService},
    value_objects::{ConstraintType, OptimizationType},
};
use good_lp::{
    constraint::{eq, geq, leq},
    solvers::coin_cbc, variable, variables, Expression, ResolutionError,
    Solution as GoodLpSolutionTrait, SolverModel, Variable as GoodLpVariable,
};
use log::debug;
use std::time::Instant;

pub struct CoinCbcSolver;

impl CoinCbcSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoinCbcSolver {
    fn default() -> Self {
        Self::new()
    }
}

fn linear_expression(coefficients: &[f64], vars: &[GoodLpVariable]) -> Expression {
    let mut expr: Expression = 0.into();
    for (&coeff, &var) in coefficients.iter().zip(vars) {
        if coeff != 0.0 {
            expr += coeff * var;
        }
    }
    expr
}

impl SolverService for CoinCbcSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<DomainSolution> {
        self.validate(problem)?;

        let start_time = Instant::now();
        let mut statistics = problem.statistics();

        let mut vars = variables!();
        let lp_variables: Vec<GoodLpVariable> = problem
            .variables
            .iter()
            .map(|var_def| {
                let mut definition = variable().min(var_def.lower_bound);
                if let Some(upper) = var_def.upper_bound {
                    definition = definition.max(upper);
                }
                if var_def.is_integer() {
                    definition = definition.integer();
                }
                vars.add(definition.name(var_def.name.clone()))
            })
            .collect();

        let sense = problem.objective.solve_sense();
        debug!(
            "registering objective {}, solving with sense {}",
            problem.objective.registered_sign(),
            sense
        );
        let objective = linear_expression(
            &problem.objective.registered_coefficients(),
            &lp_variables,
        );

        let unsolved = match sense {
            OptimizationType::Maximize => vars.maximise(objective),
            OptimizationType::Minimize => vars.minimise(objective),
        };
        let mut lp_model = unsolved.using(coin_cbc::coin_cbc);
        lp_model.set_parameter("log", "0");

        for constraint in &problem.constraints {
            let lhs = linear_expression(&constraint.coefficients, &lp_variables);
            lp_model = match constraint.constraint_type {
                ConstraintType::LessThanOrEqual => lp_model.with(leq(lhs, constraint.bound)),
                ConstraintType::Equal => lp_model.with(eq(lhs, constraint.bound)),
                ConstraintType::GreaterThanOrEqual => lp_model.with(geq(lhs, constraint.bound)),
            };
        }

        let solution_result = lp_model.solve();
        statistics.solve_time_ms = start_time.elapsed().as_secs_f64() * 1000.0;

        match solution_result {
            Ok(sol) => {
                let mut variable_values: Vec<f64> =
                    lp_variables.iter().map(|&var| sol.value(var)).collect();
                problem.snap_integers(&mut variable_values);

                let actual_obj = problem.objective.evaluate(&variable_values);

                let mut solution = DomainSolution::optimal(actual_obj, variable_values)
                    .with_statistics(statistics);
                solution.message = format!("Optimal solution found for '{}'", problem.name);
                Ok(solution)
            }
            Err(ResolutionError::Infeasible) => {
                Ok(DomainSolution::infeasible().with_statistics(statistics))
            }
            Err(ResolutionError::Unbounded) => {
                Ok(DomainSolution::unbounded().with_statistics(statistics))
            }
            Err(e) => Err(SolverError::ExecutionFailed(format!("{:?}", e))),
        }
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
    }
}
