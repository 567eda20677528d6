use std::fmt::{Display, Formatter};
use std::str::FromStr;

use complaintdesk_core::AppError;
use serde::{Deserialize, Serialize};

/// Navigable admin screens used to gate the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteKey {
    /// Complaint dashboard.
    Dashboard,
    /// Complaint list.
    Complaints,
    /// Complaint registration form.
    RegisterComplaint,
    /// Customer master.
    Customers,
    /// Engineer master.
    Engineers,
    /// User master.
    Users,
    /// User to role assignment.
    RoleMapping,
    /// Role to permission assignment.
    PermissionMapping,
    /// Own profile.
    Profile,
}

impl RouteKey {
    /// Returns the stable route key value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Complaints => "complaints",
            Self::RegisterComplaint => "register-complaint",
            Self::Customers => "customers",
            Self::Engineers => "engineers",
            Self::Users => "users",
            Self::RoleMapping => "role-mapping",
            Self::PermissionMapping => "permission-mapping",
            Self::Profile => "profile",
        }
    }

    /// Returns the fixed allow-list of route keys.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[RouteKey] = &[
            RouteKey::Dashboard,
            RouteKey::Complaints,
            RouteKey::RegisterComplaint,
            RouteKey::Customers,
            RouteKey::Engineers,
            RouteKey::Users,
            RouteKey::RoleMapping,
            RouteKey::PermissionMapping,
            RouteKey::Profile,
        ];

        ALL
    }

    /// Maps a backend permission name onto a route key.
    ///
    /// Names are normalized with [`normalize_permission_name`] and must then
    /// match an allow-listed key exactly; anything else yields `None`.
    #[must_use]
    pub fn from_permission_name(name: &str) -> Option<Self> {
        Self::from_str(normalize_permission_name(name).as_str()).ok()
    }
}

impl Display for RouteKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for RouteKey {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown route key '{value}'")))
    }
}

/// Normalizes a permission name into kebab-case.
///
/// `RoleMapping` becomes `role-mapping`, `Role Permission Mapping` becomes
/// `role-permission-mapping`. Whitespace, `_` and `-` runs collapse into a
/// single separator.
#[must_use]
pub fn normalize_permission_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len() + 4);
    let mut previous: Option<char> = None;
    let mut pending_separator = false;

    for character in name.trim().chars() {
        if character.is_whitespace() || character == '-' || character == '_' {
            pending_separator = true;
            previous = None;
            continue;
        }

        let camel_boundary = character.is_uppercase()
            && previous.is_some_and(|prior| prior.is_lowercase() || prior.is_ascii_digit());

        if (pending_separator || camel_boundary) && !normalized.is_empty() {
            normalized.push('-');
        }
        pending_separator = false;

        normalized.extend(character.to_lowercase());
        previous = Some(character);
    }

    normalized
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use proptest::prelude::*;

    use super::{RouteKey, normalize_permission_name};

    #[test]
    fn pascal_case_names_map_to_route_keys() {
        assert_eq!(
            RouteKey::from_permission_name("RoleMapping"),
            Some(RouteKey::RoleMapping)
        );
        assert_eq!(
            RouteKey::from_permission_name("PermissionMapping"),
            Some(RouteKey::PermissionMapping)
        );
        assert_eq!(
            RouteKey::from_permission_name("RegisterComplaint"),
            Some(RouteKey::RegisterComplaint)
        );
        assert_eq!(
            RouteKey::from_permission_name(" Dashboard "),
            Some(RouteKey::Dashboard)
        );
    }

    #[test]
    fn spaced_names_map_to_route_keys() {
        assert_eq!(
            RouteKey::from_permission_name("Role Mapping"),
            Some(RouteKey::RoleMapping)
        );
        assert_eq!(
            RouteKey::from_permission_name("register_complaint"),
            Some(RouteKey::RegisterComplaint)
        );
    }

    #[test]
    fn unknown_names_are_dropped() {
        assert_eq!(RouteKey::from_permission_name("VIEW_DASHBOARD"), None);
        assert_eq!(RouteKey::from_permission_name("Reports"), None);
        assert_eq!(RouteKey::from_permission_name(""), None);
        assert_eq!(RouteKey::from_permission_name("role"), None);
    }

    #[test]
    fn route_key_roundtrip_storage_value() {
        for key in RouteKey::all() {
            let restored = RouteKey::from_str(key.as_str());
            assert_eq!(restored.ok(), Some(*key));
        }
    }

    #[test]
    fn route_keys_are_their_own_normal_form() {
        for key in RouteKey::all() {
            assert_eq!(normalize_permission_name(key.as_str()), key.as_str());
        }
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(name in "[A-Za-z0-9 _-]{0,24}") {
            let once = normalize_permission_name(name.as_str());
            let twice = normalize_permission_name(once.as_str());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn resolved_keys_are_allow_listed(name in "[A-Za-z _-]{0,24}") {
            let first = RouteKey::from_permission_name(name.as_str());
            let second = RouteKey::from_permission_name(name.as_str());
            prop_assert_eq!(first, second);
            if let Some(key) = first {
                prop_assert!(RouteKey::all().contains(&key));
                prop_assert_eq!(RouteKey::from_permission_name(key.as_str()), Some(key));
            }
        }
    }
}
