use complaintdesk_application::{AdminWorkspace, MasterDataStore, RegisterInput};
use complaintdesk_core::{AppError, AppResult};
use complaintdesk_domain::{ProfileUpdate, SessionUser};

use crate::cli::{Command, ProfileArgs};
use crate::render;

use super::Output;

pub(super) async fn run(command: Command, workspace: &AdminWorkspace) -> AppResult<Output> {
    let session = workspace.session();

    match command {
        Command::Login { email, password } => {
            let result = session.login(&email, &password).await;
            if !result.ok {
                return Err(AppError::Rejected(
                    result.error.unwrap_or_else(|| "Login failed".to_owned()),
                ));
            }
            let user = signed_in(workspace).await?;
            let mut lines = vec![format!("logged in as {} <{}>", user.name, user.email)];
            lines.extend(render::navigation(&session.visible_navigation().await));
            Ok(lines)
        }
        Command::Logout => {
            session.logout().await?;
            Ok(vec!["logged out".to_owned()])
        }
        Command::Whoami => {
            let user = signed_in(workspace).await?;
            let mut lines = render::session(&user);
            lines.push(format!(
                "policy:   {} (applies when the session carries no permissions)",
                session.policy().as_str()
            ));
            Ok(lines)
        }
        Command::Menu => {
            signed_in(workspace).await?;
            Ok(render::navigation(&session.visible_navigation().await))
        }
        Command::Register(args) => {
            let user = session
                .register(RegisterInput {
                    name: args.name,
                    email: args.email,
                    password: args.password,
                    mobile_number: Some(args.mobile),
                    address: Some(args.address),
                })
                .await?;
            Ok(vec![format!("registered and logged in as {} <{}>", user.name, user.email)])
        }
        Command::Capabilities => Ok(render::capabilities(&MasterDataStore::capabilities())),
        other => Err(AppError::Internal(format!(
            "'{other:?}' is not a session command"
        ))),
    }
}

pub(super) async fn profile(workspace: &AdminWorkspace, args: ProfileArgs) -> AppResult<Output> {
    if args.is_empty() {
        return Ok(render::session(&signed_in(workspace).await?));
    }

    let updated = workspace
        .session()
        .update_profile(ProfileUpdate {
            name: args.name,
            email: args.email,
            mobile: args.mobile,
            address: args.address,
        })
        .await?;
    let mut lines = vec!["profile saved on this device".to_owned()];
    lines.extend(render::session(&updated));
    Ok(lines)
}

async fn signed_in(workspace: &AdminWorkspace) -> AppResult<SessionUser> {
    workspace
        .session()
        .current()
        .await
        .ok_or_else(|| AppError::Unauthorized("please log in first".to_owned()))
}
