use std::sync::Arc;

use serde_json::json;

use complaintdesk_core::AppError;
use complaintdesk_domain::{ComplaintStatus, ComplaintUpdate, Engineer, NewComplaint};

use crate::endpoints::app;
use crate::test_support::{FakeTransport, client_with};
use crate::{ComplaintsRepository, LoadOutcome, MountGuard};

use super::ComplaintStore;

async fn seeded() -> (Arc<FakeTransport>, ComplaintStore, MountGuard) {
    let transport = Arc::new(FakeTransport::default());
    transport
        .respond(
            app::COMPLAINTS,
            json!({ "success": true, "data": [
                { "complaintId": "CFT-0001", "customerName": "Acme Corp", "status": "Draft" },
                { "complaintId": "CFT-0002", "customerName": "Globex Ltd", "statusId": 3, "engineerId": 502 }
            ] }),
        )
        .await;
    let store = ComplaintStore::new(ComplaintsRepository::new(client_with(&transport)));
    let guard = MountGuard::mount();
    assert_eq!(store.load(&guard.token(), "1", Some("1")).await, LoadOutcome::Loaded);
    (transport, store, guard)
}

fn engineer() -> Engineer {
    Engineer {
        id: "501".to_owned(),
        name: "Alex Johnson".to_owned(),
        mobile_number: None,
        email: Some("alex@cft.com".to_owned()),
        address: None,
        is_active: true,
    }
}

#[tokio::test]
async fn load_after_unmount_is_discarded() {
    let (transport, store, guard) = seeded().await;
    transport
        .respond(
            app::COMPLAINTS,
            json!({ "success": true, "data": [
                { "complaintId": "CFT-0009", "customerName": "Initech", "status": "Completed" }
            ] }),
        )
        .await;
    let token = guard.token();
    drop(guard);

    assert_eq!(store.load(&token, "1", Some("1")).await, LoadOutcome::Discarded);

    let ids: Vec<String> = store
        .complaints()
        .await
        .into_iter()
        .map(|complaint| complaint.id)
        .collect();
    assert_eq!(ids, vec!["CFT-0001".to_owned(), "CFT-0002".to_owned()]);
    assert_eq!(transport.requests_to(app::COMPLAINTS).await.len(), 2);
}

#[tokio::test]
async fn assignment_is_reflected_without_refetch() {
    let (transport, store, _guard) = seeded().await;
    transport
        .respond(app::ASSIGN_ENGINEER, json!({ "success": true, "data": null }))
        .await;

    let Ok(assigned) = store.assign_engineer("CFT-0001", &engineer()).await else {
        panic!("assignment should succeed");
    };

    assert_eq!(assigned.engineer_id.as_deref(), Some("501"));
    assert_eq!(assigned.assigned_engineer.as_deref(), Some("Alex Johnson"));
    assert!(assigned.assigned_at.is_some());

    let local = store.get("CFT-0001").await.ok();
    assert_eq!(local, Some(assigned));
    assert_eq!(transport.requests_to(app::COMPLAINTS).await.len(), 1);
}

#[tokio::test]
async fn failed_assignment_keeps_local_record() {
    let (transport, store, _guard) = seeded().await;
    transport
        .respond(
            app::ASSIGN_ENGINEER,
            json!({ "success": false, "message": "Assignment service unavailable" }),
        )
        .await;

    let result = store.assign_engineer("CFT-0001", &engineer()).await;

    assert!(matches!(result, Err(AppError::Rejected(_))));
    let local = store.get("CFT-0001").await.ok();
    assert_eq!(local.and_then(|complaint| complaint.engineer_id), None);
}

#[tokio::test]
async fn added_complaint_is_prepended_and_counted() {
    let (transport, store, _guard) = seeded().await;
    transport
        .respond(app::CREATE_COMPLAINT, json!({ "success": true, "data": "CFT-0003" }))
        .await;

    let created = store
        .add(NewComplaint {
            customer_id: None,
            customer_name: "Initech".to_owned(),
            mobile_number: "9000000000".to_owned(),
            email: "it@initech.com".to_owned(),
            address: "Initech Tower".to_owned(),
            nature_of_complaint: "Electrical".to_owned(),
            details: "Power trips every hour.".to_owned(),
        })
        .await;
    assert!(created.is_ok());

    let complaints = store.complaints().await;
    assert_eq!(complaints[0].id, "CFT-0003");

    let summary = store.summary().await;
    assert_eq!(summary.total, 3);
    assert_eq!(summary.draft, 2);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.unassigned, 2);
}

#[tokio::test]
async fn local_update_and_remote_delete() {
    let (transport, store, _guard) = seeded().await;

    let updated = store
        .update(
            "CFT-0001",
            ComplaintUpdate {
                status: Some(ComplaintStatus::ResolutionPending),
                ..ComplaintUpdate::default()
            },
        )
        .await;
    assert_eq!(
        updated.map(|complaint| complaint.status).ok(),
        Some(ComplaintStatus::ResolutionPending)
    );

    transport
        .respond(app::DELETE_COMPLAINT, json!({ "success": true }))
        .await;
    assert!(store.delete("CFT-0002").await.is_ok());
    assert_eq!(store.complaints().await.len(), 1);

    assert!(matches!(
        store.delete("CFT-0002").await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn failed_load_empties_the_list() {
    let (transport, store, guard) = seeded().await;
    transport
        .fail(
            app::COMPLAINTS,
            AppError::Upstream {
                status: 500,
                message: "HTTP 500".to_owned(),
            },
        )
        .await;

    let outcome = store.load(&guard.token(), "1", None).await;

    assert_eq!(
        outcome,
        LoadOutcome::Reset {
            error: "HTTP 500".to_owned()
        }
    );
    assert!(store.complaints().await.is_empty());
}
