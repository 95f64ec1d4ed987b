// Declares the calculator gRPC service without a .proto file.
// Messages are prost structs in src/application/messages.rs.

fn method(name: &str, route: &str, input: &str, output: &str) -> tonic_build::manual::Method {
    tonic_build::manual::Method::builder()
        .name(name)
        .route_name(route)
        .input_type(format!("crate::application::messages::{}", input))
        .output_type(format!("crate::application::messages::{}", output))
        .codec_path("tonic::codec::ProstCodec")
        .build()
}

fn main() {
    let calculator = tonic_build::manual::Service::builder()
        .name("Calculator")
        .package("intprog.calculator")
        .method(method("solve", "Solve", "SolveRequest", "SolveReply"))
        .method(method(
            "validate_form",
            "ValidateForm",
            "SolveRequest",
            "ValidationReply",
        ))
        .method(method("login", "Login", "LoginRequest", "LoginReply"))
        .method(method("get_page", "GetPage", "PageRequest", "PageReply"))
        .build();

    tonic_build::manual::Builder::new().compile(&[calculator]);
}
