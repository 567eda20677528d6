use complaintdesk_core::AppResult;
use complaintdesk_domain::{
    Customer, Engineer, MasterUser, PermissionDefinition, Role, RolePermission, UserRole,
};
use serde_json::Value;

use crate::wire::{WireRecord, value_text};

pub(super) fn customer(value: &Value) -> AppResult<Customer> {
    let record = WireRecord::from_value(value, "customer")?;
    Ok(Customer {
        id: record.required_text(&["customerId", "id"], "customer")?,
        name: record.required_text(&["name", "customerName"], "customer")?,
        mobile_number: record
            .text(&["mobileNumber", "mobile"])
            .unwrap_or_default(),
        email: record.text(&["email", "emailId"]),
        address: record.text(&["address"]),
        is_active: record.flag(&["isActive"], true),
    })
}

pub(super) fn engineer(value: &Value) -> AppResult<Engineer> {
    let record = WireRecord::from_value(value, "engineer")?;
    Ok(Engineer {
        id: record.required_text(&["engineerId", "id"], "engineer")?,
        name: record.required_text(&["name", "engineerName"], "engineer")?,
        mobile_number: record.text(&["mobileNumber", "mobile"]),
        email: record.text(&["email", "emailId"]),
        address: record.text(&["address"]),
        is_active: record.flag(&["isActive"], true),
    })
}

pub(super) fn user(value: &Value) -> AppResult<MasterUser> {
    let record = WireRecord::from_value(value, "user")?;
    Ok(MasterUser {
        id: record.required_text(&["userId", "id"], "user")?,
        name: record.required_text(&["name", "userName"], "user")?,
        email: record.text(&["emailId", "email"]).unwrap_or_default(),
        mobile_number: record.text(&["mobileNumber", "mobile"]),
        address: record.text(&["address"]),
        is_active: record.flag(&["isActive"], true),
    })
}

pub(super) fn role(value: &Value) -> AppResult<Role> {
    let record = WireRecord::from_value(value, "role")?;
    Ok(Role {
        id: record.required_text(&["roleId", "id"], "role")?,
        name: record.required_text(&["roleName", "name"], "role")?,
    })
}

pub(super) fn permission(value: &Value) -> AppResult<PermissionDefinition> {
    let record = WireRecord::from_value(value, "permission")?;
    let name = record.required_text(&["name", "permissionName", "label"], "permission")?;
    Ok(PermissionDefinition {
        id: record
            .text(&["permissionId", "id", "key"])
            .unwrap_or_else(|| name.clone()),
        name,
    })
}

/// `role_id` fills in the role for by-role answers that omit it.
pub(super) fn role_permission(value: &Value, role_id: Option<&str>) -> AppResult<RolePermission> {
    let record = WireRecord::from_value(value, "role permission")?;
    let role_id = match (record.text(&["roleId"]), role_id) {
        (Some(found), _) => found,
        (None, Some(role_id)) => role_id.to_owned(),
        (None, None) => record.required_text(&["roleId"], "role permission")?,
    };
    Ok(RolePermission {
        role_id,
        permission_id: record
            .required_text(&["permissionId", "permissionKey", "key"], "role permission")?,
        is_active: record.flag(&["isActive"], true),
    })
}

pub(super) fn user_role(value: &Value) -> AppResult<UserRole> {
    let record = WireRecord::from_value(value, "user role")?;
    Ok(UserRole {
        user_id: record.required_text(&["userId"], "user role")?,
        role_id: record.required_text(&["roleId"], "user role")?,
    })
}

/// Expands the `{ owner: [ids] }` map form into `(owner, id)` pairs.
pub(super) fn id_map_pairs(value: &Value) -> Vec<(String, String)> {
    let Some(map) = value.as_object() else {
        return Vec::new();
    };

    map.iter()
        .flat_map(|(owner, ids)| {
            let ids: Vec<String> = match ids {
                Value::Array(items) => items.iter().filter_map(value_text).collect(),
                other => value_text(other).into_iter().collect(),
            };
            ids.into_iter().map(move |id| (owner.clone(), id))
        })
        .collect()
}

/// Nature-of-complaint entries may be plain strings or `{ name }` objects.
pub(super) fn nature_of_complaint(value: &Value) -> AppResult<String> {
    if let Some(text) = value_text(value) {
        return Ok(text);
    }

    WireRecord::from_value(value, "nature of complaint")?.required_text(
        &["natureOfComplaint", "name", "complaintType", "value"],
        "nature of complaint",
    )
}
