use std::collections::BTreeSet;

use serde::Serialize;

use crate::RouteKey;

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    /// Route key gating the entry.
    pub key: RouteKey,
    /// Menu label.
    pub label: &'static str,
    /// Screen path.
    pub path: &'static str,
}

/// Full sidebar in display order.
pub const NAVIGATION: &[NavigationItem] = &[
    NavigationItem {
        key: RouteKey::Dashboard,
        label: "Dashboard",
        path: "/dashboard",
    },
    NavigationItem {
        key: RouteKey::Complaints,
        label: "View Complaints",
        path: "/dashboard",
    },
    NavigationItem {
        key: RouteKey::RegisterComplaint,
        label: "Register Complaint",
        path: "/register-complaint",
    },
    NavigationItem {
        key: RouteKey::Customers,
        label: "Customer Master",
        path: "/masters/customers",
    },
    NavigationItem {
        key: RouteKey::Engineers,
        label: "Engineer Master",
        path: "/masters/engineers",
    },
    NavigationItem {
        key: RouteKey::Users,
        label: "User Master",
        path: "/masters/users",
    },
    NavigationItem {
        key: RouteKey::RoleMapping,
        label: "User Role Mapping",
        path: "/masters/role-mapping",
    },
    NavigationItem {
        key: RouteKey::PermissionMapping,
        label: "Role Permission Mapping",
        path: "/masters/permission-mapping",
    },
    NavigationItem {
        key: RouteKey::Profile,
        label: "Profile",
        path: "/profile",
    },
];

/// Returns the sidebar entries visible for the allowed routes, in display order.
#[must_use]
pub fn visible_navigation(allowed: &BTreeSet<RouteKey>) -> Vec<NavigationItem> {
    NAVIGATION
        .iter()
        .filter(|item| allowed.contains(&item.key))
        .copied()
        .collect()
}
