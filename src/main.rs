use clap::Parser;
use intprog::{setup_logger, start_server, Args, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_logger(args.log_level)?;

    let config = ServerConfig::from(&args);
    start_server(config).await?;

    Ok(())
}
