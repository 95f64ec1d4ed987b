// Calculator interaction: edits only update the form, the solver runs on submit

use log::{debug, info};

use super::form::{CalculatorForm, FormError};
use super::report::Report;
use super::session::Session;
use super::solver_service::{SolverError, SolverService};
use super::value_objects::SolverBackend;

#[derive(Debug, thiserror::Error)]
pub enum InteractionError {
    #[error("Log in to use the calculator")]
    NotLoggedIn,

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Solver(#[from] SolverError),
}

#[derive(Debug, Clone)]
pub enum Event {
    /// A field changed; the form is replaced wholesale
    Edit(CalculatorForm),
    Submit,
    Reset,
}

#[derive(Debug, Clone)]
pub struct Interaction {
    form: CalculatorForm,
    backend: SolverBackend,
    last_report: Option<Report>,
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new(CalculatorForm::blank(1, 1))
    }
}

impl Interaction {
    pub fn new(form: CalculatorForm) -> Self {
        Self {
            form,
            backend: SolverBackend::Auto,
            last_report: None,
        }
    }

    pub fn with_backend(mut self, backend: SolverBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn form(&self) -> &CalculatorForm {
        &self.form
    }

    pub fn last_report(&self) -> Option<&Report> {
        self.last_report.as_ref()
    }

    /// Apply one event. Returns the report currently on display.
    pub fn handle(
        &mut self,
        session: &Session,
        event: Event,
        solver: &dyn SolverService,
    ) -> Result<Option<&Report>, InteractionError> {
        match event {
            Event::Edit(form) => {
                self.form = form;
            }
            Event::Reset => {
                debug!("resetting calculator form");
                self.form = CalculatorForm::blank(
                    self.form.num_variables.max(1),
                    self.form.num_constraints().max(1),
                );
                self.last_report = None;
            }
            Event::Submit => {
                if !session.logged_in {
                    return Err(InteractionError::NotLoggedIn);
                }
                let problem = self.form.to_problem(self.backend)?;
                info!(
                    "solving {} variables x {} constraints for {} with {}",
                    problem.num_variables(),
                    problem.constraints.len(),
                    session.email,
                    solver.name()
                );
                let solution = solver.solve(&problem)?;
                self.last_report = Some(Report::new(&problem, &solution));
            }
        }
        Ok(self.last_report.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;
    use crate::domain::form::ConstraintRow;
    use crate::domain::models::{OptimizationProblem, Solution};
    use crate::domain::session::Credentials;
    use crate::domain::solver_service::Result;
    use crate::domain::value_objects::{
        ConstraintType, ObjectiveSign, OptimizationType, Restriction, SolutionStatus,
    };

    /// Records the registered objective and answers with a fixed point.
    struct StubSolver {
        calls: AtomicUsize,
        seen: Mutex<Vec<(ObjectiveSign, OptimizationType, Vec<f64>)>>,
        point: Vec<f64>,
    }

    impl StubSolver {
        fn new(point: Vec<f64>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
                point,
            }
        }
    }

    impl SolverService for StubSolver {
        fn solve(&self, problem: &OptimizationProblem) -> Result<Solution> {
            self.validate(problem)?;
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push((
                problem.objective.registered_sign(),
                problem.objective.solve_sense(),
                problem.objective.registered_coefficients(),
            ));
            let mut values = self.point.clone();
            problem.snap_integers(&mut values);
            let value = problem.objective.evaluate(&values);
            Ok(Solution::optimal(value, values))
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    struct FailingSolver;

    impl SolverService for FailingSolver {
        fn solve(&self, _problem: &OptimizationProblem) -> Result<Solution> {
            Err(SolverError::ExecutionFailed("backend crashed".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn logged_in() -> Session {
        let mut session = Session::anonymous();
        session
            .login("example@example.com", "password", &Credentials::default())
            .unwrap();
        session
    }

    fn trivial_form(direction: OptimizationType, coefficient: f64) -> CalculatorForm {
        CalculatorForm {
            num_variables: 1,
            objective: vec![coefficient],
            restrictions: vec![Restriction::Restricted],
            constraints: vec![ConstraintRow {
                coefficients: vec![1.0],
                operator: ConstraintType::LessThanOrEqual,
                rhs: "10".to_string(),
            }],
            direction,
        }
    }

    #[test]
    fn edit_does_not_solve() {
        let solver = StubSolver::new(vec![10.0]);
        let mut interaction = Interaction::default();
        let shown = interaction
            .handle(
                &logged_in(),
                Event::Edit(trivial_form(OptimizationType::Maximize, 3.0)),
                &solver,
            )
            .unwrap();
        assert!(shown.is_none());
        assert_eq!(solver.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn submit_renders_report() {
        let solver = StubSolver::new(vec![9.9999999]);
        let mut interaction = Interaction::new(trivial_form(OptimizationType::Maximize, 3.0));
        let report = interaction
            .handle(&logged_in(), Event::Submit, &solver)
            .unwrap()
            .unwrap();
        assert_eq!(report.status, SolutionStatus::Optimal);
        assert_eq!(
            report.to_string(),
            "Optimal Solution:\nx1 = 10.0\nObjective Value: 30"
        );
        assert_eq!(
            solver.seen.lock().unwrap()[0],
            (
                ObjectiveSign::Negated,
                OptimizationType::Minimize,
                vec![-3.0]
            )
        );
    }

    #[test]
    fn edit_keeps_previous_report() {
        let solver = StubSolver::new(vec![10.0]);
        let session = logged_in();
        let mut interaction = Interaction::new(trivial_form(OptimizationType::Maximize, 3.0));
        interaction.handle(&session, Event::Submit, &solver).unwrap();
        let shown = interaction
            .handle(
                &session,
                Event::Edit(trivial_form(OptimizationType::Minimize, 5.0)),
                &solver,
            )
            .unwrap();
        assert_eq!(shown.and_then(|r| r.objective_value), Some(30));
        assert_eq!(solver.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn submit_applies_sign_per_direction_and_negatives() {
        use OptimizationType::{Maximize, Minimize};

        let cases = [
            (Maximize, 3.0, ObjectiveSign::Negated, Minimize),
            (Minimize, 3.0, ObjectiveSign::AsGiven, Minimize),
            (Maximize, -3.0, ObjectiveSign::AsGiven, Maximize),
            (Minimize, -3.0, ObjectiveSign::Negated, Minimize),
        ];
        let session = logged_in();
        for (direction, coefficient, sign, sense) in cases {
            let solver = StubSolver::new(vec![1.0]);
            let mut interaction = Interaction::new(trivial_form(direction, coefficient));
            interaction.handle(&session, Event::Submit, &solver).unwrap();
            let seen = solver.seen.lock().unwrap();
            assert_eq!(seen[0].0, sign, "{} with {}", direction, coefficient);
            assert_eq!(seen[0].1, sense, "{} with {}", direction, coefficient);
            assert_eq!(seen[0].2, vec![sign.factor() * coefficient]);
        }
    }

    #[test]
    fn submit_requires_login() {
        let solver = StubSolver::new(vec![10.0]);
        let mut interaction = Interaction::new(trivial_form(OptimizationType::Maximize, 3.0));
        let err = interaction
            .handle(&Session::anonymous(), Event::Submit, &solver)
            .unwrap_err();
        assert!(matches!(err, InteractionError::NotLoggedIn));
        assert_eq!(solver.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn submit_surfaces_form_errors() {
        let solver = StubSolver::new(vec![10.0]);
        let mut form = trivial_form(OptimizationType::Maximize, 3.0);
        form.constraints[0].rhs = "abc".to_string();
        let mut interaction = Interaction::new(form);
        let err = interaction
            .handle(&logged_in(), Event::Submit, &solver)
            .unwrap_err();
        assert!(matches!(
            err,
            InteractionError::Form(FormError::InvalidRightHandSide { row: 1, .. })
        ));
    }

    #[test]
    fn solver_failure_keeps_previous_report() {
        let session = logged_in();
        let mut interaction = Interaction::new(trivial_form(OptimizationType::Maximize, 3.0));
        interaction
            .handle(&session, Event::Submit, &StubSolver::new(vec![10.0]))
            .unwrap();

        let err = interaction
            .handle(&session, Event::Submit, &FailingSolver)
            .unwrap_err();
        assert!(matches!(
            err,
            InteractionError::Solver(SolverError::ExecutionFailed(_))
        ));
        assert_eq!(
            interaction.last_report().and_then(|r| r.objective_value),
            Some(30)
        );
    }

    #[test]
    fn reset_clears_form_and_report() {
        let solver = StubSolver::new(vec![10.0]);
        let session = logged_in();
        let mut interaction = Interaction::new(trivial_form(OptimizationType::Maximize, 3.0));
        interaction.handle(&session, Event::Submit, &solver).unwrap();
        let shown = interaction.handle(&session, Event::Reset, &solver).unwrap();
        assert!(shown.is_none());
        assert_eq!(interaction.form(), &CalculatorForm::blank(1, 1));
    }
}
