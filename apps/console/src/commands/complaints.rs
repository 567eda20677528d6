use complaintdesk_application::{AdminWorkspace, WorkspaceOpened};
use complaintdesk_core::{AppError, AppResult};
use complaintdesk_domain::{ComplaintUpdate, NewComplaint};

use crate::cli::ComplaintAction;
use crate::render;

use super::{Output, complaints_loaded, masters_loaded};

pub(super) async fn dashboard(
    workspace: &AdminWorkspace,
    opened: &WorkspaceOpened,
) -> AppResult<Output> {
    complaints_loaded(opened)?;
    let summary = workspace.complaints().summary().await;
    let masters = workspace.masters().snapshot().await;
    Ok(render::summary(
        &summary,
        masters.customers.len(),
        masters.engineers.len(),
    ))
}

pub(super) async fn run(
    action: ComplaintAction,
    workspace: &AdminWorkspace,
    opened: &WorkspaceOpened,
) -> AppResult<Output> {
    complaints_loaded(opened)?;
    let store = workspace.complaints();

    match action {
        ComplaintAction::List => Ok(render::list(
            &store.complaints().await,
            render::complaint,
            "no complaints",
        )),
        ComplaintAction::Create(args) => {
            let created = store
                .add(NewComplaint {
                    customer_id: args.customer_id,
                    customer_name: args.customer_name,
                    mobile_number: args.mobile,
                    email: args.email,
                    address: args.address,
                    nature_of_complaint: args.nature,
                    details: args.details,
                })
                .await?;
            Ok(vec![
                "complaint registered".to_owned(),
                render::complaint(&created),
            ])
        }
        ComplaintAction::Assign {
            complaint_id,
            engineer_id,
        } => {
            masters_loaded(opened)?;
            let engineer = workspace
                .masters()
                .snapshot()
                .await
                .engineers
                .into_iter()
                .find(|engineer| engineer.id == engineer_id)
                .ok_or_else(|| {
                    AppError::NotFound(format!("engineer '{engineer_id}' does not exist"))
                })?;
            let assigned = store.assign_engineer(&complaint_id, &engineer).await?;
            Ok(vec![
                format!("assigned {} to {}", engineer.name, assigned.id),
                render::complaint(&assigned),
            ])
        }
        ComplaintAction::Update {
            complaint_id,
            status,
            nature,
            details,
        } => {
            let updated = store
                .update(
                    &complaint_id,
                    ComplaintUpdate {
                        status,
                        nature_of_complaint: nature,
                        details,
                    },
                )
                .await?;
            Ok(vec![
                "complaint updated on this device only".to_owned(),
                render::complaint(&updated),
            ])
        }
        ComplaintAction::Delete { complaint_id } => {
            store.delete(&complaint_id).await?;
            Ok(vec![format!("deleted complaint {complaint_id}")])
        }
    }
}
