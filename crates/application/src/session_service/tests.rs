use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::json;

use complaintdesk_core::AppError;
use complaintdesk_domain::{NoPermissionPolicy, ProfileUpdate, RoleRouteTable, RouteKey};

use crate::Capability;
use crate::endpoints::app;
use crate::test_support::{FakeSessionStore, FakeTransport, client_with};

use super::SessionService;

fn service(
    transport: &Arc<FakeTransport>,
    store: &Arc<FakeSessionStore>,
    policy: NoPermissionPolicy,
) -> SessionService {
    SessionService::new(
        client_with(transport),
        store.clone(),
        RoleRouteTable::default(),
        policy,
    )
}

async fn respond_with_login(transport: &FakeTransport, permissions: serde_json::Value) {
    transport
        .respond(
            app::LOGIN,
            json!({
                "success": true,
                "data": {
                    "userId": 3,
                    "name": "CSR Agent",
                    "emailId": "csr@cft.com",
                    "roles": ["CSR"],
                    "permissions": permissions,
                    "token": "csr-token"
                }
            }),
        )
        .await;
}

#[tokio::test]
async fn login_persists_session_and_sets_bearer() {
    let transport = Arc::new(FakeTransport::default());
    let store = Arc::new(FakeSessionStore::default());
    respond_with_login(&transport, json!(["Dashboard", "Complaints", "Bogus Screen"])).await;
    let service = service(&transport, &store, NoPermissionPolicy::RoleTable);

    let result = service.login("csr@cft.com", "secret").await;
    assert!(result.ok);
    assert_eq!(result.error, None);

    let stored = store.raw.lock().await.clone().unwrap_or_default();
    assert!(stored.contains("\"permissionNames\""));

    assert_eq!(
        service.allowed_routes().await,
        BTreeSet::from([RouteKey::Dashboard, RouteKey::Complaints])
    );

    let _ = service.visible_navigation().await;
    transport
        .respond(app::ROLES, json!({ "success": true, "data": [] }))
        .await;
    let _ = crate::MastersRepository::new(service.client.clone())
        .list_roles()
        .await;
    let requests = transport.requests_to(app::ROLES).await;
    assert_eq!(requests[0].bearer.as_deref(), Some("csr-token"));
}

#[tokio::test]
async fn failed_login_reports_message_and_stays_anonymous() {
    let transport = Arc::new(FakeTransport::default());
    let store = Arc::new(FakeSessionStore::default());
    transport
        .respond(
            app::LOGIN,
            json!({ "success": false, "message": "Invalid credentials", "data": null }),
        )
        .await;
    let service = service(&transport, &store, NoPermissionPolicy::RoleTable);

    let result = service.login("csr@cft.com", "wrong").await;

    assert!(!result.ok);
    assert_eq!(result.error.as_deref(), Some("Invalid credentials"));
    assert!(service.current().await.is_none());
    assert!(store.raw.lock().await.is_none());
    assert!(service.allowed_routes().await.is_empty());
}

#[tokio::test]
async fn initialize_hydrates_stored_session() {
    let transport = Arc::new(FakeTransport::default());
    let store = Arc::new(FakeSessionStore::default());
    *store.raw.lock().await = Some(
        r#"{"id":"2","name":"Service Engineer","email":"eng1@cft.com","roles":["Engineer"],"permissionNames":[]}"#
            .to_owned(),
    );
    let service = service(&transport, &store, NoPermissionPolicy::RoleTable);

    let session = service.initialize().await;

    assert_eq!(session.map(|session| session.id), Some("2".to_owned()));
    assert_eq!(
        service.allowed_routes().await,
        BTreeSet::from([RouteKey::Dashboard, RouteKey::Complaints, RouteKey::Profile])
    );
}

#[tokio::test]
async fn unreadable_stored_session_is_anonymous() {
    let transport = Arc::new(FakeTransport::default());
    let store = Arc::new(FakeSessionStore::default());
    *store.raw.lock().await = Some("{not json".to_owned());
    let service = service(&transport, &store, NoPermissionPolicy::RoleTable);

    assert!(service.initialize().await.is_none());
    assert!(service.current().await.is_none());
}

#[tokio::test]
async fn policy_decides_for_sessions_without_permissions() {
    let raw = r#"{"id":"9","name":"Nobody","email":"n@cft.com","roles":["Auditor"]}"#;

    for (policy, expected) in [
        (NoPermissionPolicy::RoleTable, 0),
        (NoPermissionPolicy::AllRoutes, RouteKey::all().len()),
        (NoPermissionPolicy::Deny, 0),
    ] {
        let transport = Arc::new(FakeTransport::default());
        let store = Arc::new(FakeSessionStore::default());
        *store.raw.lock().await = Some(raw.to_owned());
        let service = service(&transport, &store, policy);
        let _ = service.initialize().await;

        assert_eq!(service.allowed_routes().await.len(), expected, "{policy:?}");
    }
}

#[tokio::test]
async fn logout_clears_everything() {
    let transport = Arc::new(FakeTransport::default());
    let store = Arc::new(FakeSessionStore::default());
    respond_with_login(&transport, json!(["Dashboard"])).await;
    let service = service(&transport, &store, NoPermissionPolicy::RoleTable);
    assert!(service.login("csr@cft.com", "secret").await.ok);

    assert!(service.logout().await.is_ok());

    assert!(service.current().await.is_none());
    assert!(store.raw.lock().await.is_none());
    assert_eq!(service.client.bearer().await, None);
    assert!(service.visible_navigation().await.is_empty());
}

#[tokio::test]
async fn profile_update_requires_session_and_persists() {
    let transport = Arc::new(FakeTransport::default());
    let store = Arc::new(FakeSessionStore::default());
    let service = service(&transport, &store, NoPermissionPolicy::RoleTable);

    let anonymous = service.update_profile(ProfileUpdate::default()).await;
    assert!(matches!(anonymous, Err(AppError::Unauthorized(_))));

    respond_with_login(&transport, json!(["Profile"])).await;
    assert!(service.login("csr@cft.com", "secret").await.ok);

    let updated = service
        .update_profile(ProfileUpdate {
            address: Some("Contact Center, Floor 2".to_owned()),
            ..ProfileUpdate::default()
        })
        .await;
    assert!(updated.is_ok());

    let stored = store.raw.lock().await.clone().unwrap_or_default();
    assert!(stored.contains("Contact Center, Floor 2"));
}

#[tokio::test]
async fn require_route_distinguishes_anonymous_and_forbidden() {
    let transport = Arc::new(FakeTransport::default());
    let store = Arc::new(FakeSessionStore::default());
    let service = service(&transport, &store, NoPermissionPolicy::RoleTable);

    assert!(matches!(
        service.require_route(RouteKey::Dashboard).await,
        Err(AppError::Unauthorized(_))
    ));

    respond_with_login(&transport, json!(["Dashboard"])).await;
    assert!(service.login("csr@cft.com", "secret").await.ok);

    assert!(service.require_route(RouteKey::Dashboard).await.is_ok());
    assert!(matches!(
        service.require_route(RouteKey::Users).await,
        Err(AppError::Forbidden(_))
    ));
}

#[tokio::test]
async fn replaced_role_routes_apply_to_role_based_sessions() {
    let transport = Arc::new(FakeTransport::default());
    let store = Arc::new(FakeSessionStore::default());
    respond_with_login(&transport, json!([])).await;
    let service = service(&transport, &store, NoPermissionPolicy::RoleTable);
    assert!(service.login("csr@cft.com", "secret").await.ok);

    let capability = service
        .replace_role_routes("csr", [RouteKey::Customers])
        .await;
    assert_eq!(capability, Capability::LocalOnly);

    assert_eq!(
        service.allowed_routes().await,
        BTreeSet::from([RouteKey::Customers])
    );
}
