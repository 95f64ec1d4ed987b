// Application layer: wire messages, the gRPC service and the mappers between them

pub mod grpc_service;
pub mod mappers;
pub mod messages;

/// Generated client and server for `intprog.calculator.Calculator`
pub mod rpc {
    include!(concat!(env!("OUT_DIR"), "/intprog.calculator.Calculator.rs"));
}

pub use grpc_service::GrpcCalculatorService;
