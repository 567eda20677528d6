//! Console screens.
//!
//! Every command returns the lines to print. Screen commands open the
//! workspace, check the screen's route and then act on the loaded stores.

mod complaints;
mod masters;
mod session;


use complaintdesk_application::{AdminWorkspace, LoadOutcome, WorkspaceOpened};
use complaintdesk_core::{AppError, AppResult};

use crate::cli::Command;

pub type Output = Vec<String>;

pub async fn run(command: Command, workspace: &AdminWorkspace) -> AppResult<Output> {
    let Some(route) = command.required_route() else {
        workspace.session().initialize().await;
        return session::run(command, workspace).await;
    };

    let opened = workspace.open().await;
    workspace.session().require_route(route).await?;

    match command {
        Command::Profile(args) => session::profile(workspace, args).await,
        Command::Dashboard => complaints::dashboard(workspace, &opened).await,
        Command::Complaints { action } => complaints::run(action, workspace, &opened).await,
        other => masters::run(other, workspace, &opened).await,
    }
}

/// Turns a failed or discarded store load into an error for the screen.
fn ensure_loaded(outcome: Option<&LoadOutcome>, what: &str) -> AppResult<()> {
    match outcome {
        Some(LoadOutcome::Loaded) => Ok(()),
        Some(LoadOutcome::Reset { error }) => {
            Err(AppError::Rejected(format!("failed to load {what}: {error}")))
        }
        Some(LoadOutcome::Discarded) | None => {
            Err(AppError::Internal(format!("{what} were not loaded")))
        }
    }
}

fn masters_loaded(opened: &WorkspaceOpened) -> AppResult<()> {
    ensure_loaded(opened.masters.as_ref(), "master data")
}

fn complaints_loaded(opened: &WorkspaceOpened) -> AppResult<()> {
    ensure_loaded(opened.complaints.as_ref(), "complaints")
}
