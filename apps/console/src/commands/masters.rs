use complaintdesk_application::{AdminWorkspace, Capability, WorkspaceOpened};
use complaintdesk_core::{AppError, AppResult};
use complaintdesk_domain::RouteKey;

use crate::cli::{Command, MasterAction, RolePermissionAction, UserRoleAction};
use crate::render;

use super::{Output, masters_loaded};

pub(super) async fn run(
    command: Command,
    workspace: &AdminWorkspace,
    opened: &WorkspaceOpened,
) -> AppResult<Output> {
    masters_loaded(opened)?;
    let store = workspace.masters();

    match command {
        Command::Customers { action } => match action {
            MasterAction::List => Ok(render::list(
                &store.snapshot().await.customers,
                render::customer,
                "no customers",
            )),
            MasterAction::Add(fields) => {
                let created = store.add_customer(fields.customer()).await?;
                Ok(vec!["customer added".to_owned(), render::customer(&created)])
            }
            MasterAction::Update { id, fields } => {
                let updated = store.update_customer(&id, fields.customer()).await?;
                Ok(vec!["customer updated".to_owned(), render::customer(&updated)])
            }
            MasterAction::Delete { id } => {
                store.delete_customer(&id).await?;
                Ok(vec![format!("deleted customer {id}")])
            }
        },
        Command::Engineers { action } => match action {
            MasterAction::List => Ok(render::list(
                &store.snapshot().await.engineers,
                render::engineer,
                "no engineers",
            )),
            MasterAction::Add(fields) => {
                let created = store.add_engineer(fields.engineer()).await?;
                Ok(vec!["engineer added".to_owned(), render::engineer(&created)])
            }
            MasterAction::Update { id, fields } => {
                let updated = store.update_engineer(&id, fields.engineer()).await?;
                Ok(vec!["engineer updated".to_owned(), render::engineer(&updated)])
            }
            MasterAction::Delete { id } => {
                store.delete_engineer(&id).await?;
                Ok(vec![format!("deleted engineer {id}")])
            }
        },
        Command::Users { action } => match action {
            MasterAction::List => Ok(render::list(
                &store.snapshot().await.users,
                render::user,
                "no users",
            )),
            MasterAction::Add(fields) => {
                let created = store.add_user(fields.user()).await?;
                Ok(vec!["user added".to_owned(), render::user(&created)])
            }
            MasterAction::Update { id, fields } => {
                let updated = store.update_user(&id, fields.user()).await?;
                Ok(vec!["user updated".to_owned(), render::user(&updated)])
            }
            MasterAction::Delete { id } => {
                store.delete_user(&id).await?;
                Ok(vec![format!("deleted user {id}")])
            }
        },
        Command::Roles => Ok(render::list(
            &store.snapshot().await.roles,
            render::role,
            "no roles",
        )),
        Command::Permissions => Ok(render::list(
            &store.snapshot().await.permissions,
            render::permission,
            "no permissions",
        )),
        Command::RolePermissions { action } => match action {
            RolePermissionAction::Show { role_id } => Ok(render::list(
                &store.permissions_by_role(&role_id).await?,
                render::role_permission,
                "no permissions assigned",
            )),
            RolePermissionAction::Save {
                role_id,
                permission_ids,
            } => {
                let count = permission_ids.len();
                store.save_role_permissions(&role_id, permission_ids).await?;
                Ok(vec![format!("saved {count} permission(s) for role {role_id}")])
            }
            RolePermissionAction::Routes { role, routes } => {
                let screens: Vec<&str> = routes.iter().map(RouteKey::as_str).collect();
                let mut lines = vec![format!("role {role} now opens: {}", screens.join(", "))];
                let capability = workspace
                    .session()
                    .replace_role_routes(&role, routes)
                    .await;
                if capability == Capability::LocalOnly {
                    lines.push(local_only_note());
                }
                Ok(lines)
            }
        },
        Command::UserRoles {
            action: UserRoleAction::Assign { user_id, role_ids },
        } => {
            let count = role_ids.len();
            let capability = store.set_user_roles(&user_id, role_ids).await;
            let mut lines = vec![format!("user {user_id} now holds {count} role(s)")];
            if capability == Capability::LocalOnly {
                lines.push(local_only_note());
            }
            Ok(lines)
        }
        other => Err(AppError::Internal(format!(
            "'{other:?}' is not a master data command"
        ))),
    }
}

fn local_only_note() -> String {
    "note: no backend endpoint exists; the change is kept for this session only".to_owned()
}
