// Infrastructure: server startup

use log::info;
use tonic::transport::Server;

use super::config::ServerConfig;
use crate::application::rpc::calculator_server::CalculatorServer;
use crate::application::GrpcCalculatorService;

pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let service = GrpcCalculatorService::new(config.backend, config.account.clone());

    print_banner(&config);

    Server::builder()
        .add_service(CalculatorServer::new(service))
        .serve(config.address)
        .await?;

    Ok(())
}

fn print_banner(config: &ServerConfig) {
    info!("intprog - integer programming calculator");
    info!("listening on {}", config.address);
    info!("default solver: {}", config.backend);
    info!("demo account: {}", config.account.email);
}
