// Example: drive the calculator service like the web form would
//
// A workshop makes tables (x1) and chairs (x2).
//
// Product | Wood (units) | Labour (h) | Profit ($)
// --------|--------------|------------|-----------
// Table   |      4       |     2      |    30
// Chair   |      3       |     1      |    20
//
// Stock: 23 units of wood, 10 hours of labour. Both products are whole units.
//
// Maximize: 30*x1 + 20*x2
// Subject to: 4*x1 + 3*x2 ≤ 23
//             2*x1 + 1*x2 ≤ 10

use std::io::{self, Write};

use intprog::application::messages::{
    CalculatorForm, ConstraintRow, LoginRequest, PageRequest, SolutionStatus, SolveRequest,
};
use intprog::application::rpc::calculator_client::CalculatorClient;
use tonic::Request;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut client = CalculatorClient::connect("http://127.0.0.1:50051").await?;

    let formulation = client
        .get_page(Request::new(PageRequest {
            page: "formulation".to_string(),
            credentials: None,
        }))
        .await?
        .into_inner();
    println!("=== {} ===\n", formulation.title);
    for paragraph in &formulation.paragraphs {
        println!("{}", paragraph);
    }

    let credentials = LoginRequest {
        email: "example@example.com".to_string(),
        password: "password".to_string(),
    };
    let login = client.login(Request::new(credentials.clone())).await?.into_inner();
    println!("\n{}", login.message);
    if !login.logged_in {
        return Ok(());
    }
    println!("Menu: {}\n", login.menu.join(" | "));

    print!("Solver (auto, cbc, highs) [auto]: ");
    io::stdout().flush()?;
    let mut solver = String::new();
    io::stdin().read_line(&mut solver)?;

    let form = CalculatorForm {
        num_variables: 2,
        objective_coefficients: vec![30.0, 20.0],
        restrictions: vec!["Restricted".to_string(), "Restricted".to_string()],
        constraints: vec![
            ConstraintRow {
                coefficients: vec![4.0, 3.0],
                operator: "<=".to_string(),
                rhs: "23".to_string(),
            },
            ConstraintRow {
                coefficients: vec![2.0, 1.0],
                operator: "<=".to_string(),
                rhs: "10".to_string(),
            },
        ],
        direction: "Maximize".to_string(),
    };

    let request = SolveRequest {
        form: Some(form.clone()),
        credentials: Some(credentials.clone()),
        solver: solver.trim().to_string(),
    };

    let validation = client.validate_form(Request::new(request.clone())).await?.into_inner();
    for warning in &validation.warnings {
        println!("⚠ {}", warning);
    }
    if !validation.is_valid {
        println!("✗ {}", validation.errors.join("; "));
        return Ok(());
    }

    let reply = client.solve(Request::new(request)).await?.into_inner();
    println!("{}\n", reply.report);
    if let Some(stats) = &reply.statistics {
        println!(
            "Solved by {} in {:.2} ms ({} variables, {} integer, {} constraints)",
            stats.solver_backend,
            stats.solve_time_ms,
            stats.num_variables,
            stats.num_integer_vars,
            stats.num_constraints
        );
    }

    // Demand more pieces than the stock allows to see the status tag
    let mut infeasible = form;
    infeasible.constraints.push(ConstraintRow {
        coefficients: vec![1.0, 1.0],
        operator: ">=".to_string(),
        rhs: "50".to_string(),
    });
    let reply = client
        .solve(Request::new(SolveRequest {
            form: Some(infeasible),
            credentials: Some(credentials),
            solver: solver.trim().to_string(),
        }))
        .await?
        .into_inner();

    match SolutionStatus::try_from(reply.status) {
        Ok(SolutionStatus::Infeasible) => println!("\n✓ Infeasible model reported as such"),
        Ok(status) => println!("\nUnexpected status: {:?}", status),
        Err(_) => println!("\nUnknown status {}", reply.status),
    }
    println!("{}", reply.report);

    Ok(())
}
