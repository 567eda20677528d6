use std::sync::Arc;

use serde_json::json;

use complaintdesk_core::AppError;
use complaintdesk_domain::{ComplaintStatus, NewComplaint};

use crate::endpoints::app;
use crate::test_support::{FakeTransport, client_with};

use super::ComplaintsRepository;

fn new_complaint() -> NewComplaint {
    NewComplaint {
        customer_id: Some("1001".to_owned()),
        customer_name: "Acme Corp".to_owned(),
        mobile_number: "9123456780".to_owned(),
        email: "ops@acme.com".to_owned(),
        address: "Acme Park, Houston".to_owned(),
        nature_of_complaint: "Plumbing".to_owned(),
        details: "Leaking pipe in the pantry.".to_owned(),
    }
}

#[tokio::test]
async fn list_sends_user_and_role_scope() {
    let transport = Arc::new(FakeTransport::default());
    transport
        .respond(
            app::COMPLAINTS,
            json!({
                "success": true,
                "data": [{
                    "complaintId": "CFT-0001",
                    "customerId": 1001,
                    "customerName": "Acme Corp",
                    "mobileNumber": "9123456780",
                    "natureOfComplaint": "Installation",
                    "details": "Need assistance configuring new device.",
                    "assignedEngineerId": 501,
                    "status": "Open",
                    "createdAt": "2026-01-15T10:00:00Z"
                }, {
                    "id": "CFT-0002",
                    "statusId": 2,
                    "complaintDetails": "No cooling"
                }]
            }),
        )
        .await;
    let repository = ComplaintsRepository::new(client_with(&transport));

    let Ok(complaints) = repository.list("1", None).await else {
        panic!("complaint list should load");
    };

    assert_eq!(complaints.len(), 2);
    assert_eq!(complaints[0].id, "CFT-0001");
    assert_eq!(complaints[0].status, ComplaintStatus::Draft);
    assert_eq!(complaints[0].engineer_id.as_deref(), Some("501"));
    assert!(complaints[0].created_at.is_some());
    assert_eq!(complaints[1].status, ComplaintStatus::ResolutionPending);
    assert_eq!(complaints[1].details, "No cooling");

    let requests = transport.requests_to(app::COMPLAINTS).await;
    assert_eq!(
        requests[0].body,
        Some(json!({ "UserId": "1", "RoleId": "1" }))
    );
}

#[tokio::test]
async fn create_rejects_incomplete_form_locally() {
    let transport = Arc::new(FakeTransport::default());
    let repository = ComplaintsRepository::new(client_with(&transport));

    let result = repository
        .create(NewComplaint {
            details: " ".to_owned(),
            ..new_complaint()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(message)) if message == "Please fill in all fields"
    ));
    assert!(transport.requests().await.is_empty());
}

#[tokio::test]
async fn create_uses_echoed_identifier() {
    let transport = Arc::new(FakeTransport::default());
    transport
        .respond(
            app::CREATE_COMPLAINT,
            json!({ "success": true, "data": "CFT-0042" }),
        )
        .await;
    let repository = ComplaintsRepository::new(client_with(&transport));

    let Ok(created) = repository.create(new_complaint()).await else {
        panic!("complaint should be created");
    };
    assert_eq!(created.id, "CFT-0042");
    assert_eq!(created.status, ComplaintStatus::Draft);
    assert_eq!(created.nature_of_complaint, "Plumbing");
}

#[tokio::test]
async fn create_without_identifier_is_rejected() {
    for data in [json!(null), json!({ "message": "queued" })] {
        let transport = Arc::new(FakeTransport::default());
        transport
            .respond(
                app::CREATE_COMPLAINT,
                json!({ "success": true, "message": "Saved", "data": data }),
            )
            .await;
        let repository = ComplaintsRepository::new(client_with(&transport));

        let result = repository.create(new_complaint()).await;
        assert!(matches!(result, Err(AppError::Rejected(_))), "{result:?}");
    }
}

#[tokio::test]
async fn create_fallback_surfaces_service_message() {
    let transport = Arc::new(FakeTransport::default());
    transport
        .respond(
            app::CREATE_COMPLAINT,
            json!({ "success": false, "message": "Complaint service unavailable", "data": null }),
        )
        .await;
    let repository = ComplaintsRepository::new(client_with(&transport));

    let result = repository.create(new_complaint()).await;
    assert!(matches!(
        result,
        Err(AppError::Rejected(message)) if message == "Complaint service unavailable"
    ));
}

#[tokio::test]
async fn assign_without_echo_returns_none() {
    let transport = Arc::new(FakeTransport::default());
    transport
        .respond(app::ASSIGN_ENGINEER, json!({ "success": true }))
        .await;
    let repository = ComplaintsRepository::new(client_with(&transport));

    let result = repository.assign_engineer("CFT-0001", "502").await;
    assert!(matches!(result, Ok(None)));

    let requests = transport.requests_to(app::ASSIGN_ENGINEER).await;
    assert_eq!(
        requests[0].body,
        Some(json!({ "complaintId": "CFT-0001", "engineerId": "502" }))
    );
}
