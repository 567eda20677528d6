//! Canned payloads served when the upstream API is unavailable.

use chrono::Utc;
use serde_json::{Value, json};

/// Permission names granted to the demo session. They normalise onto every
/// navigable route.
pub const DEMO_PERMISSIONS: &[&str] = &[
    "Dashboard",
    "Complaints",
    "RegisterComplaint",
    "Customers",
    "Engineers",
    "Users",
    "RoleMapping",
    "PermissionMapping",
    "Profile",
];

/// Token handed out with the demo session.
pub const DEMO_TOKEN: &str = "demo-token";

fn unavailable(message: &str) -> Value {
    json!({ "success": false, "message": message, "data": null })
}

/// Demo session echoing the submitted identifier.
pub fn demo_login(email_id: &str) -> Value {
    json!({
        "success": true,
        "message": "Login successful (fallback)",
        "data": {
            "userId": 1,
            "name": "Admin User",
            "emailId": email_id,
            "roles": ["Admin"],
            "permissions": DEMO_PERMISSIONS,
            "token": DEMO_TOKEN,
        }
    })
}

pub(super) fn login() -> Value {
    unavailable("Auth service unavailable")
}

pub(super) fn register() -> Value {
    unavailable("Registration unavailable")
}

pub(super) fn users() -> Value {
    json!({
        "success": true,
        "data": [
            { "userId": 1, "name": "Admin User", "emailId": "admin@cft.com", "mobileNumber": "9999999999", "address": "HQ" },
            { "userId": 2, "name": "Service Engineer", "emailId": "eng1@cft.com", "mobileNumber": "8888888888", "address": "Field Office" },
            { "userId": 3, "name": "CSR Agent", "emailId": "csr@cft.com", "mobileNumber": "7777777777", "address": "Contact Center" }
        ]
    })
}

pub(super) fn roles() -> Value {
    json!({
        "success": true,
        "data": [
            { "roleId": 1, "roleName": "Admin" },
            { "roleId": 2, "roleName": "Engineer" },
            { "roleId": 3, "roleName": "CSR" }
        ]
    })
}

pub(super) fn permissions() -> Value {
    json!({
        "success": true,
        "data": [
            { "key": "VIEW_DASHBOARD", "name": "View Dashboard" },
            { "key": "VIEW_COMPLAINTS", "name": "View Complaints" },
            { "key": "ASSIGN_COMPLAINTS", "name": "Assign Complaints" },
            { "key": "MANAGE_MASTERS", "name": "Manage Masters" }
        ]
    })
}

pub(super) fn user_roles() -> Value {
    json!({
        "success": true,
        "data": [
            { "userId": 1, "roleId": 1 },
            { "userId": 2, "roleId": 2 },
            { "userId": 3, "roleId": 3 }
        ]
    })
}

pub(super) fn role_permissions() -> Value {
    json!({
        "success": true,
        "data": [
            { "roleId": 1, "permissionKey": "VIEW_DASHBOARD" },
            { "roleId": 1, "permissionKey": "VIEW_COMPLAINTS" },
            { "roleId": 1, "permissionKey": "ASSIGN_COMPLAINTS" },
            { "roleId": 1, "permissionKey": "MANAGE_MASTERS" },
            { "roleId": 2, "permissionKey": "VIEW_DASHBOARD" },
            { "roleId": 2, "permissionKey": "VIEW_COMPLAINTS" },
            { "roleId": 3, "permissionKey": "VIEW_DASHBOARD" },
            { "roleId": 3, "permissionKey": "VIEW_COMPLAINTS" }
        ]
    })
}

pub(super) fn permissions_by_role() -> Value {
    json!({ "success": true, "data": [] })
}

pub(super) fn save_role_permissions() -> Value {
    unavailable("Permission service unavailable")
}

pub(super) fn customers() -> Value {
    json!({
        "success": true,
        "data": [
            { "customerId": 1001, "name": "Acme Corp", "mobileNumber": "9123456780", "email": "ops@acme.com", "address": "Acme Park, Houston" },
            { "customerId": 1002, "name": "Globex Ltd", "mobileNumber": "9234567810", "email": "service@globex.com", "address": "Globex Ave, Chicago" }
        ]
    })
}

pub(super) fn save_customer() -> Value {
    unavailable("Customer service unavailable")
}

pub(super) fn engineers() -> Value {
    json!({
        "success": true,
        "data": [
            { "engineerId": 501, "name": "Alex Johnson", "email": "alex@cft.com", "mobileNumber": "9001002001" },
            { "engineerId": 502, "name": "Priya Sharma", "email": "priya@cft.com", "mobileNumber": "9001002002" }
        ]
    })
}

pub(super) fn save_engineer() -> Value {
    unavailable("Engineer service unavailable")
}

pub(super) fn save_user() -> Value {
    unavailable("User service unavailable")
}

pub(super) fn nature_of_complaint() -> Value {
    json!({
        "success": true,
        "data": ["Plumbing", "Electrical", "AC Repair", "Other"]
    })
}

pub(super) fn complaints() -> Value {
    json!({
        "success": true,
        "data": [{
            "complaintId": "CFT-0001",
            "customerId": 1001,
            "customerName": "Acme Corp",
            "mobileNumber": "9123456780",
            "email": "ops@acme.com",
            "address": "Acme Park, Houston",
            "natureOfComplaint": "Installation",
            "details": "Need assistance configuring new device.",
            "assignedEngineerId": 501,
            "status": "Open",
            "createdAt": Utc::now().to_rfc3339(),
        }]
    })
}

pub(super) fn create_complaint() -> Value {
    unavailable("Complaint service unavailable")
}

pub(super) fn assign_engineer() -> Value {
    json!({ "success": false, "message": "Assignment service unavailable" })
}

pub(super) fn delete_complaint() -> Value {
    unavailable("Complaint service unavailable")
}
