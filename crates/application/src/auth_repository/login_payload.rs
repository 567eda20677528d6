use complaintdesk_core::{AppError, AppResult};
use complaintdesk_domain::{SessionUser, normalize_permission_name};
use serde_json::Value;

use crate::wire::{WireRecord, value_text};

/// Converts the `data` member of a login or registration envelope into a
/// session record.
///
/// Two shapes are recognised: nested (`data.user` with `data.permissions`
/// or `data.user.permissions`) and flat (`data.userId`, `data.emailId`,
/// `data.permissions`). Anything else is rejected.
pub fn parse_login_data(data: &Value) -> AppResult<SessionUser> {
    let outer = WireRecord::from_value(data, "login")?;

    if let Some(user) = outer.field(&["user"]) {
        let user = WireRecord::from_value(user, "login user")?;
        let permissions = outer
            .list(&["permissions"])
            .or_else(|| user.list(&["permissions"]));

        return Ok(build_session(
            &user,
            permissions,
            outer.text(&["token"]),
            outer.field(&["roles"]),
        ));
    }

    let is_flat = ["userId", "id", "emailId", "email", "permissions"]
        .iter()
        .any(|key| outer.field(&[key]).is_some());
    if !is_flat {
        return Err(AppError::Validation(
            "unrecognized login payload: expected 'user' or flat user fields".to_owned(),
        ));
    }

    Ok(build_session(&outer, outer.list(&["permissions"]), None, None))
}

fn build_session(
    user: &WireRecord<'_>,
    permissions: Option<&Vec<Value>>,
    outer_token: Option<String>,
    outer_roles: Option<&Value>,
) -> SessionUser {
    let roles = user
        .field(&["roles"])
        .or(outer_roles)
        .map(role_names)
        .filter(|roles| !roles.is_empty())
        .or_else(|| user.field(&["roleId"]).map(role_names))
        .unwrap_or_default();

    SessionUser {
        id: user.text(&["userId", "id"]).unwrap_or_default(),
        name: user.text(&["userName", "name"]).unwrap_or_default(),
        email: user.text(&["emailId", "email"]).unwrap_or_default(),
        roles,
        permission_names: permission_names(permissions.map(Vec::as_slice).unwrap_or_default()),
        token: user.text(&["token"]).or(outer_token),
        mobile: user.text(&["mobileNumber", "mobile"]),
        address: user.text(&["address"]),
    }
}

fn role_names(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(_) => WireRecord::from_value(item, "role")
                    .ok()
                    .and_then(|role| role.text(&["name", "roleName", "roleId", "id"])),
                other => value_text(other),
            })
            .collect(),
        other => value_text(other).into_iter().collect(),
    }
}

/// Normalises permission entries, dropping inactive and blank ones and
/// keeping the first occurrence of each name.
fn permission_names(entries: &[Value]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for entry in entries {
        let raw = match entry {
            Value::Object(_) => {
                let Ok(record) = WireRecord::from_value(entry, "permission") else {
                    continue;
                };
                if !record.flag(&["isActive"], true) {
                    continue;
                }
                record.text(&["name", "permissionName", "permissionKey", "key"])
            }
            other => value_text(other),
        };

        let Some(raw) = raw else {
            continue;
        };
        let normalized = normalize_permission_name(raw.as_str());
        if !normalized.is_empty() && !names.contains(&normalized) {
            names.push(normalized);
        }
    }

    names
}
