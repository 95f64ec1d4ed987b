#[cfg(feature = "server")]
use log::{info, warn};
#[cfg(feature = "server")]
use tonic::{Request, Response, Status};

#[cfg(feature = "server")]
use super::{mappers, messages as proto, rpc::calculator_server::Calculator};
#[cfg(feature = "server")]
use crate::domain::{Event, Interaction, Page, SolverService};
use crate::domain::{Credentials, LoginError, Session, SolverBackend};
#[cfg(feature = "server")]
use crate::solver::SolverFactory;

/// gRPC calculator service
///
/// Stateless between calls: every request builds its own [`Session`] from the
/// credentials it carries.
pub struct GrpcCalculatorService {
    default_backend: SolverBackend,
    account: Credentials,
}

impl GrpcCalculatorService {
    pub fn new(default_backend: SolverBackend, account: Credentials) -> Self {
        Self {
            default_backend,
            account,
        }
    }

    pub fn default_backend(&self) -> SolverBackend {
        self.default_backend
    }

    /// Session for one request; no credentials means an anonymous session.
    pub fn session_for(&self, email: Option<(&str, &str)>) -> Result<Session, LoginError> {
        let mut session = Session::anonymous();
        if let Some((email, password)) = email {
            session.login(email, password, &self.account)?;
        }
        Ok(session)
    }
}

impl Default for GrpcCalculatorService {
    fn default() -> Self {
        Self::new(SolverBackend::Auto, Credentials::default())
    }
}

#[cfg(feature = "server")]
fn credentials(login: &Option<proto::LoginRequest>) -> Option<(&str, &str)> {
    login
        .as_ref()
        .map(|l| (l.email.as_str(), l.password.as_str()))
}

#[cfg(feature = "server")]
#[tonic::async_trait]
impl Calculator for GrpcCalculatorService {
    async fn solve(
        &self,
        request: Request<proto::SolveRequest>,
    ) -> Result<Response<proto::SolveReply>, Status> {
        let request = request.into_inner();

        let form = request
            .form
            .as_ref()
            .ok_or_else(|| Status::invalid_argument("Form is required"))?;
        let form = mappers::proto_to_domain_form(form).map_err(mappers::form_status)?;
        let backend = mappers::parse_backend(&request.solver, self.default_backend)?;
        let session = self
            .session_for(credentials(&request.credentials))
            .map_err(mappers::login_status)?;

        let solver = SolverFactory::create_from_backend(backend);
        let solver_name = solver.name().to_string();
        info!(
            "solve request: {} variables, {} constraints, solver {}",
            form.num_variables,
            form.num_constraints(),
            solver_name
        );

        // Solvers block; keep them off the async workers
        let report = tokio::task::spawn_blocking(move || {
            let mut interaction = Interaction::new(form).with_backend(backend);
            interaction
                .handle(&session, Event::Submit, solver.as_ref())
                .map(|shown| shown.cloned())
        })
        .await
        .map_err(|e| Status::internal(format!("Solve task failed: {}", e)))?
        .map_err(mappers::interaction_status)?
        .ok_or_else(|| Status::internal("Solver produced no report"))?;

        info!(
            "status {} in {:.2} ms",
            report.status, report.statistics.solve_time_ms
        );

        Ok(Response::new(mappers::domain_to_proto_report(
            &report,
            &solver_name,
        )))
    }

    async fn validate_form(
        &self,
        request: Request<proto::SolveRequest>,
    ) -> Result<Response<proto::ValidationReply>, Status> {
        let request = request.into_inner();
        let form = request
            .form
            .as_ref()
            .ok_or_else(|| Status::invalid_argument("Form is required"))?;

        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let problem = mappers::proto_to_domain_form(form)
            .and_then(|form| form.to_problem(self.default_backend));

        let reply = match problem {
            Ok(problem) => {
                if let Err(e) = SolverFactory::default_solver().validate(&problem) {
                    errors.push(e.to_string());
                }
                if problem.objective.coefficients.iter().all(|&c| c == 0.0) {
                    warnings.push(
                        "Objective is zero: every feasible point is optimal".to_string(),
                    );
                }
                if problem.objective.has_negative() {
                    warnings.push(format!(
                        "Objective has negative coefficients: {} registers the objective {}",
                        problem.objective.optimization_type,
                        problem.objective.registered_sign()
                    ));
                }
                let num_integer = problem.num_integer_variables();
                if num_integer > 100 {
                    warnings.push(format!(
                        "Problem has {} integer variables, may be slow to solve",
                        num_integer
                    ));
                }
                proto::ValidationReply {
                    is_valid: errors.is_empty(),
                    errors,
                    warnings,
                    num_variables: problem.num_variables() as u32,
                    num_constraints: problem.constraints.len() as u32,
                    num_integer_vars: num_integer as u32,
                }
            }
            Err(e) => proto::ValidationReply {
                is_valid: false,
                errors: vec![e.to_string()],
                warnings,
                num_variables: form.num_variables,
                num_constraints: form.constraints.len() as u32,
                num_integer_vars: 0,
            },
        };

        Ok(Response::new(reply))
    }

    async fn login(
        &self,
        request: Request<proto::LoginRequest>,
    ) -> Result<Response<proto::LoginReply>, Status> {
        let request = request.into_inner();

        let attempt = Some((request.email.as_str(), request.password.as_str()));

        let reply = match self.session_for(attempt) {
            Ok(session) => {
                info!("logged in as {}", session.email);
                proto::LoginReply {
                    logged_in: true,
                    email: session.email,
                    message: "Logged in successfully!".to_string(),
                    menu: Page::menu(true).iter().map(|p| p.to_string()).collect(),
                }
            }
            Err(e) => {
                warn!("login rejected: {}", e);
                proto::LoginReply {
                    logged_in: false,
                    email: String::new(),
                    message: e.to_string(),
                    menu: Page::menu(false).iter().map(|p| p.to_string()).collect(),
                }
            }
        };

        Ok(Response::new(reply))
    }

    async fn get_page(
        &self,
        request: Request<proto::PageRequest>,
    ) -> Result<Response<proto::PageReply>, Status> {
        let request = request.into_inner();
        let page: Page = request.page.parse().map_err(Status::not_found)?;
        let session = self
            .session_for(credentials(&request.credentials))
            .map_err(mappers::login_status)?;

        if !Page::menu(session.logged_in).contains(&page) {
            return Err(Status::unauthenticated(format!(
                "Log in to open the {} page",
                page
            )));
        }

        Ok(Response::new(proto::PageReply {
            title: page.title().to_string(),
            paragraphs: page.paragraphs().iter().map(|p| p.to_string()).collect(),
        }))
    }
}
