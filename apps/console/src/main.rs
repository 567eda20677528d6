//! Complaint desk admin console.
//!
//! Drives the session, master data and complaint workflows against the
//! complaint desk proxy, or against an in-memory mock with `--mock`.

#![forbid(unsafe_code)]

mod cli;
mod commands;
mod render;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use complaintdesk_application::{AdminWorkspace, ApiClient, ApiTransport};
use complaintdesk_core::AppResult;
use complaintdesk_domain::RoleRouteTable;
use complaintdesk_infrastructure::{FileSessionStore, InMemoryApiTransport, ReqwestApiTransport};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    match execute(cli).await {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {}", error.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> AppResult<commands::Output> {
    let transport: Arc<dyn ApiTransport> = if cli.mock {
        Arc::new(InMemoryApiTransport::seeded())
    } else {
        Arc::new(ReqwestApiTransport::new(
            &cli.api_url,
            Duration::from_millis(cli.timeout_ms),
        )?)
    };

    let workspace = AdminWorkspace::new(
        ApiClient::new(transport),
        Arc::new(FileSessionStore::new(cli.session_file)),
        RoleRouteTable::default(),
        cli.no_permission_policy,
    );

    let output = commands::run(cli.command, &workspace).await;
    workspace.close().await;
    output
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}
