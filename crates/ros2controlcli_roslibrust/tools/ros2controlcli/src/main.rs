use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use ros2controlcli::command::run_command;
use ros2controlcli::config::Config;
use ros2controlcli_roslibrust::{log_core_error, RosControllerManager, ServiceCaller, Transport};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    init_logging();

    let config = match Config::from_args_iter(std::env::args_os()) {
        Ok(Ok(config)) => config,
        Ok(Err(err)) => {
            eprintln!("{}", err.message());
            return Ok(ExitCode::FAILURE);
        }
        Err(usage) => usage.exit(),
    };

    let transport = Transport::connect(&config.bridge_url)
        .await
        .with_context(|| format!("connect to rosbridge at {}", config.bridge_url))?;

    let outcome = {
        let caller = ServiceCaller::new(&transport).with_readiness_timeout(config.service_timeout);
        let manager = RosControllerManager::new(caller, &config.controller_manager);
        run_command(&manager, &config.command).await
    };
    drop(transport);

    match outcome {
        Ok(message) => {
            println!("{message}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            log_core_error(&err);
            eprintln!("{}", err.message());
            Ok(ExitCode::FAILURE)
        }
    }
}
