// Server configuration, parsed from the command line

use std::net::SocketAddr;

use clap::Parser;

use crate::domain::{Credentials, SolverBackend};

#[derive(Parser, Debug)]
#[command(name = "intprog-server")]
#[command(about = "gRPC integer programming calculator", long_about = None)]
pub struct Args {
    /// Address to listen on
    #[arg(short, long, default_value = "0.0.0.0:50051")]
    pub address: SocketAddr,

    /// Solver used when a request does not name one (auto, cbc, highs)
    #[arg(short, long, default_value = "auto")]
    pub backend: SolverBackend,

    /// Email of the demo account
    #[arg(long, default_value = "example@example.com")]
    pub demo_email: String,

    /// Password of the demo account
    #[arg(long, default_value = "password")]
    pub demo_password: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    pub log_level: log::LevelFilter,
}

pub struct ServerConfig {
    pub address: SocketAddr,
    pub backend: SolverBackend,
    pub account: Credentials,
}

impl ServerConfig {
    pub fn new(address: SocketAddr, backend: SolverBackend) -> Self {
        Self {
            address,
            backend,
            account: Credentials::default(),
        }
    }

    pub fn with_account(mut self, account: Credentials) -> Self {
        self.account = account;
        self
    }
}

impl From<&Args> for ServerConfig {
    fn from(args: &Args) -> Self {
        ServerConfig::new(args.address, args.backend).with_account(Credentials::new(
            args.demo_email.clone(),
            args.demo_password.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["intprog-server"]);
        let config = ServerConfig::from(&args);
        assert_eq!(config.address.port(), 50051);
        assert_eq!(config.backend, SolverBackend::Auto);
        assert_eq!(config.account, Credentials::default());
        assert_eq!(args.log_level, log::LevelFilter::Info);
    }

    #[test]
    fn overrides() {
        let args = Args::parse_from([
            "intprog-server",
            "--address",
            "127.0.0.1:6000",
            "--backend",
            "cbc",
            "--demo-email",
            "ops@example.com",
            "--log-level",
            "debug",
        ]);
        let config = ServerConfig::from(&args);
        assert_eq!(config.address.to_string(), "127.0.0.1:6000");
        assert_eq!(config.backend, SolverBackend::CoinCbc);
        assert_eq!(config.account.email, "ops@example.com");
        assert_eq!(args.log_level, log::LevelFilter::Debug);
    }
}
