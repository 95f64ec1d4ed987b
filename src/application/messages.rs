// Wire messages of the intprog.calculator service (prost encoding)
// Selections travel as the labels shown on the form: "<=", "Restricted", "Maximize"

/// One constraint row as entered on the form
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConstraintRow {
    #[prost(double, repeated, tag = "1")]
    pub coefficients: ::prost::alloc::vec::Vec<f64>,
    /// "<=", "=" or ">="; empty means "<="
    #[prost(string, tag = "2")]
    pub operator: ::prost::alloc::string::String,
    /// Right-hand side as typed, parsed server side
    #[prost(string, tag = "3")]
    pub rhs: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CalculatorForm {
    #[prost(uint32, tag = "1")]
    pub num_variables: u32,
    #[prost(double, repeated, tag = "2")]
    pub objective_coefficients: ::prost::alloc::vec::Vec<f64>,
    /// "Unrestricted" or "Restricted" per variable; empty means "Unrestricted"
    #[prost(string, repeated, tag = "3")]
    pub restrictions: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, repeated, tag = "4")]
    pub constraints: ::prost::alloc::vec::Vec<ConstraintRow>,
    /// "Maximize" or "Minimize"; empty means "Maximize"
    #[prost(string, tag = "5")]
    pub direction: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoginRequest {
    #[prost(string, tag = "1")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub password: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SolveRequest {
    #[prost(message, optional, tag = "1")]
    pub form: ::core::option::Option<CalculatorForm>,
    #[prost(message, optional, tag = "2")]
    pub credentials: ::core::option::Option<LoginRequest>,
    /// "auto", "cbc" or "highs"; empty uses the server default
    #[prost(string, tag = "3")]
    pub solver: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SolutionStatus {
    Unspecified = 0,
    Optimal = 1,
    Feasible = 2,
    Infeasible = 3,
    Unbounded = 4,
    Error = 5,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VariableValue {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(double, tag = "2")]
    pub value: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SolverStatistics {
    #[prost(double, tag = "1")]
    pub solve_time_ms: f64,
    #[prost(uint32, tag = "2")]
    pub num_variables: u32,
    #[prost(uint32, tag = "3")]
    pub num_constraints: u32,
    #[prost(uint32, tag = "4")]
    pub num_integer_vars: u32,
    #[prost(string, tag = "5")]
    pub solver_backend: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SolveReply {
    #[prost(enumeration = "SolutionStatus", tag = "1")]
    pub status: i32,
    /// Plain-text report, rendered verbatim by clients
    #[prost(string, tag = "2")]
    pub report: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "3")]
    pub values: ::prost::alloc::vec::Vec<VariableValue>,
    #[prost(int64, optional, tag = "4")]
    pub objective_value: ::core::option::Option<i64>,
    #[prost(string, tag = "5")]
    pub message: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "6")]
    pub statistics: ::core::option::Option<SolverStatistics>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValidationReply {
    #[prost(bool, tag = "1")]
    pub is_valid: bool,
    #[prost(string, repeated, tag = "2")]
    pub errors: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "3")]
    pub warnings: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(uint32, tag = "4")]
    pub num_variables: u32,
    #[prost(uint32, tag = "5")]
    pub num_constraints: u32,
    #[prost(uint32, tag = "6")]
    pub num_integer_vars: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoginReply {
    #[prost(bool, tag = "1")]
    pub logged_in: bool,
    #[prost(string, tag = "2")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub message: ::prost::alloc::string::String,
    /// Page names available to this session
    #[prost(string, repeated, tag = "4")]
    pub menu: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PageRequest {
    #[prost(string, tag = "1")]
    pub page: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub credentials: ::core::option::Option<LoginRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PageReply {
    #[prost(string, tag = "1")]
    pub title: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "2")]
    pub paragraphs: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
