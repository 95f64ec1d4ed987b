use intprog::*;

const EPS: f64 = 1e-6;

pub fn assert_optimal(report: &Report, expected_obj: i64, expected_x: &[f64]) {
    assert_eq!(report.status, SolutionStatus::Optimal, "{}", report);
    assert_eq!(report.objective_value, Some(expected_obj), "{}", report);
    assert_eq!(report.values.len(), expected_x.len());

    for ((name, x), expected) in report.values.iter().zip(expected_x) {
        assert!(
            (x - expected).abs() < EPS,
            "{}: {}, expected: {}",
            name,
            x,
            expected
        );
    }
}

pub fn assert_infeasible(report: &Report) {
    assert_eq!(report.status, SolutionStatus::Infeasible, "{}", report);
    assert!(report.values.is_empty());
    assert!(report.to_string().starts_with("Status: Infeasible"));
}

pub struct TestProblem {
    pub form: CalculatorForm,
    pub check_report: Box<dyn FnOnce(&Report)>,
}

impl TestProblem {
    fn new<F: FnOnce(&Report) + 'static>(form: CalculatorForm, check_report: F) -> Self {
        Self {
            form,
            check_report: Box::new(check_report),
        }
    }
}

fn row(coefficients: &[f64], operator: ConstraintType, rhs: &str) -> ConstraintRow {
    ConstraintRow {
        coefficients: coefficients.to_vec(),
        operator,
        rhs: rhs.to_string(),
    }
}

fn form(
    objective: &[f64],
    restrictions: &[Restriction],
    constraints: Vec<ConstraintRow>,
    direction: OptimizationType,
) -> CalculatorForm {
    CalculatorForm {
        num_variables: objective.len(),
        objective: objective.to_vec(),
        restrictions: restrictions.to_vec(),
        constraints,
        direction,
    }
}

pub fn single_integer_maximize() -> TestProblem {
    TestProblem::new(
        form(
            &[3.0],
            &[Restriction::Restricted],
            vec![row(&[1.0], ConstraintType::LessThanOrEqual, "10")],
            OptimizationType::Maximize,
        ),
        |report| {
            assert_optimal(report, 30, &[10.0]);
            assert_eq!(
                report.to_string(),
                "Optimal Solution:\nx1 = 10.0\nObjective Value: 30"
            );
        },
    )
}

pub fn contradictory_bounds() -> TestProblem {
    TestProblem::new(
        form(
            &[1.0],
            &[Restriction::Restricted],
            vec![
                row(&[1.0], ConstraintType::GreaterThanOrEqual, "5"),
                row(&[1.0], ConstraintType::LessThanOrEqual, "2"),
            ],
            OptimizationType::Maximize,
        ),
        assert_infeasible,
    )
}

pub fn zero_objective() -> TestProblem {
    TestProblem::new(
        form(
            &[0.0, 0.0],
            &[Restriction::Unrestricted, Restriction::Restricted],
            vec![row(&[1.0, 1.0], ConstraintType::LessThanOrEqual, "4")],
            OptimizationType::Maximize,
        ),
        |report| {
            assert_eq!(report.status, SolutionStatus::Optimal);
            assert_eq!(report.objective_value, Some(0));
            assert!(report.to_string().ends_with("Objective Value: 0"));
        },
    )
}

pub fn continuous_stays_fractional() -> TestProblem {
    TestProblem::new(
        form(
            &[1.0],
            &[Restriction::Unrestricted],
            vec![row(&[2.0], ConstraintType::LessThanOrEqual, "3")],
            OptimizationType::Maximize,
        ),
        |report| {
            assert_optimal(report, 1, &[1.5]);
            assert!(report.to_string().contains("x1 = 1.5"));
        },
    )
}

pub fn restricted_is_whole() -> TestProblem {
    TestProblem::new(
        form(
            &[1.0],
            &[Restriction::Restricted],
            vec![row(&[2.0], ConstraintType::LessThanOrEqual, "3")],
            OptimizationType::Maximize,
        ),
        |report| {
            assert_optimal(report, 1, &[1.0]);
            assert!(report.values.iter().all(|(_, x)| x.fract() == 0.0));
        },
    )
}

pub fn minimize_keeps_declaration_order() -> TestProblem {
    TestProblem::new(
        form(
            &[1.0, 2.0, 3.0],
            &[Restriction::Unrestricted; 3],
            vec![
                row(&[0.0, 0.0, 1.0], ConstraintType::GreaterThanOrEqual, "3"),
                row(&[1.0, 0.0, 0.0], ConstraintType::GreaterThanOrEqual, "1"),
                row(&[0.0, 1.0, 0.0], ConstraintType::GreaterThanOrEqual, "2"),
            ],
            OptimizationType::Minimize,
        ),
        |report| {
            assert_optimal(report, 14, &[1.0, 2.0, 3.0]);
            let names: Vec<_> = report.values.iter().map(|(n, _)| n.as_str()).collect();
            assert_eq!(names, vec!["x1", "x2", "x3"]);
        },
    )
}

pub fn equality_row() -> TestProblem {
    TestProblem::new(
        form(
            &[2.0, 1.0],
            &[Restriction::Restricted, Restriction::Restricted],
            vec![
                row(&[1.0, 1.0], ConstraintType::Equal, "3"),
                row(&[1.0, 0.0], ConstraintType::LessThanOrEqual, "1"),
            ],
            OptimizationType::Maximize,
        ),
        |report| assert_optimal(report, 4, &[1.0, 2.0]),
    )
}

pub fn unbounded() -> TestProblem {
    TestProblem::new(
        form(
            &[1.0],
            &[Restriction::Unrestricted],
            vec![row(&[1.0], ConstraintType::GreaterThanOrEqual, "1")],
            OptimizationType::Maximize,
        ),
        |report| {
            assert_eq!(report.status, SolutionStatus::Unbounded, "{}", report);
            assert!(report.values.is_empty());
            assert!(report.to_string().starts_with("Status: Unbounded"));
        },
    )
}

/// A negative coefficient under Maximize keeps the objective and maximizes it.
pub fn negative_coefficient_maximize() -> TestProblem {
    TestProblem::new(
        form(
            &[-1.0],
            &[Restriction::Restricted],
            vec![row(&[1.0], ConstraintType::LessThanOrEqual, "4")],
            OptimizationType::Maximize,
        ),
        |report| assert_optimal(report, 0, &[0.0]),
    )
}

/// A negative coefficient under Minimize negates the objective and minimizes it.
pub fn negative_coefficient_minimize() -> TestProblem {
    TestProblem::new(
        form(
            &[-1.0, 0.0],
            &[Restriction::Restricted, Restriction::Unrestricted],
            vec![row(&[1.0, 1.0], ConstraintType::LessThanOrEqual, "4")],
            OptimizationType::Minimize,
        ),
        |report| {
            assert_eq!(report.status, SolutionStatus::Optimal);
            assert_eq!(report.value_of("x1"), Some(0.0));
            assert_eq!(report.objective_value, Some(0));
        },
    )
}

pub fn mixed_signs_maximize() -> TestProblem {
    TestProblem::new(
        form(
            &[3.0, -1.0],
            &[Restriction::Restricted, Restriction::Restricted],
            vec![row(&[1.0, 1.0], ConstraintType::LessThanOrEqual, "10")],
            OptimizationType::Maximize,
        ),
        |report| {
            assert_optimal(report, 30, &[10.0, 0.0]);
            assert_eq!(
                report.to_string(),
                "Optimal Solution:\nx1 = 10.0\nx2 = 0.0\nObjective Value: 30"
            );
        },
    )
}

pub fn mixed_signs_minimize() -> TestProblem {
    TestProblem::new(
        form(
            &[2.0, -1.0],
            &[Restriction::Restricted, Restriction::Restricted],
            vec![
                row(&[1.0, 1.0], ConstraintType::LessThanOrEqual, "6"),
                row(&[1.0, 0.0], ConstraintType::GreaterThanOrEqual, "1"),
            ],
            OptimizationType::Minimize,
        ),
        // Registered as -2*x1 + x2 and minimized
        |report| assert_optimal(report, 12, &[6.0, 0.0]),
    )
}

/// Infeasible rows plus a ray along which the objective grows without limit.
pub fn infeasible_with_unbounded_ray() -> TestProblem {
    TestProblem::new(
        form(
            &[1.0, 1.0],
            &[Restriction::Unrestricted, Restriction::Unrestricted],
            vec![
                row(&[1.0, -1.0], ConstraintType::GreaterThanOrEqual, "1"),
                row(&[1.0, -1.0], ConstraintType::LessThanOrEqual, "0"),
            ],
            OptimizationType::Maximize,
        ),
        assert_infeasible,
    )
}
