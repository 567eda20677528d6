use std::collections::BTreeSet;
use std::str::FromStr;

use complaintdesk_core::AppError;
use serde::{Deserialize, Serialize};

use crate::{RouteKey, SessionUser};

/// What a session without any permission names is allowed to see.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoPermissionPolicy {
    /// Union of the routes mapped to the session's roles.
    #[default]
    RoleTable,
    /// Every known route. Permissive; intended for demo deployments.
    AllRoutes,
    /// Nothing.
    Deny,
}

impl NoPermissionPolicy {
    /// Returns the stable configuration value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoleTable => "role-table",
            Self::AllRoutes => "all-routes",
            Self::Deny => "deny",
        }
    }
}

impl FromStr for NoPermissionPolicy {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "role-table" => Ok(Self::RoleTable),
            "all-routes" => Ok(Self::AllRoutes),
            "deny" => Ok(Self::Deny),
            other => Err(AppError::Validation(format!(
                "no-permission policy must be 'role-table', 'all-routes' or 'deny', got '{other}'"
            ))),
        }
    }
}

/// Routes granted to one role by the fallback table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRoutes {
    role_id: Option<String>,
    role_name: String,
    routes: BTreeSet<RouteKey>,
}

impl RoleRoutes {
    /// Creates a table entry.
    #[must_use]
    pub fn new(
        role_id: Option<&str>,
        role_name: impl Into<String>,
        routes: impl IntoIterator<Item = RouteKey>,
    ) -> Self {
        Self {
            role_id: role_id.map(str::to_owned),
            role_name: role_name.into(),
            routes: routes.into_iter().collect(),
        }
    }

    /// Returns the role display name.
    #[must_use]
    pub fn role_name(&self) -> &str {
        self.role_name.as_str()
    }

    /// Returns the granted routes.
    #[must_use]
    pub fn routes(&self) -> &BTreeSet<RouteKey> {
        &self.routes
    }

    fn matches(&self, role: &str) -> bool {
        let role = role.trim();
        self.role_name.eq_ignore_ascii_case(role) || self.role_id.as_deref() == Some(role)
    }
}

/// In-memory role to route fallback table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRouteTable {
    entries: Vec<RoleRoutes>,
}

impl RoleRouteTable {
    /// Creates a table from explicit entries.
    #[must_use]
    pub fn new(entries: Vec<RoleRoutes>) -> Self {
        Self { entries }
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[RoleRoutes] {
        &self.entries
    }

    /// Returns the routes mapped to one role id or name.
    #[must_use]
    pub fn routes_for(&self, role: &str) -> BTreeSet<RouteKey> {
        self.entries
            .iter()
            .filter(|entry| entry.matches(role))
            .flat_map(|entry| entry.routes.iter().copied())
            .collect()
    }

    /// Replaces the routes of a role, adding the role when it is unknown.
    pub fn replace_routes(&mut self, role: &str, routes: impl IntoIterator<Item = RouteKey>) {
        let routes: BTreeSet<RouteKey> = routes.into_iter().collect();
        match self.entries.iter_mut().find(|entry| entry.matches(role)) {
            Some(entry) => entry.routes = routes,
            None => self.entries.push(RoleRoutes {
                role_id: None,
                role_name: role.trim().to_owned(),
                routes,
            }),
        }
    }
}

impl Default for RoleRouteTable {
    fn default() -> Self {
        Self::new(vec![
            RoleRoutes::new(Some("1"), "Admin", RouteKey::all().iter().copied()),
            RoleRoutes::new(
                Some("2"),
                "Engineer",
                [RouteKey::Dashboard, RouteKey::Complaints, RouteKey::Profile],
            ),
            RoleRoutes::new(
                Some("3"),
                "CSR",
                [
                    RouteKey::Dashboard,
                    RouteKey::Complaints,
                    RouteKey::RegisterComplaint,
                    RouteKey::Profile,
                ],
            ),
            RoleRoutes::new(
                None,
                "ComplaintManager",
                [
                    RouteKey::Dashboard,
                    RouteKey::Complaints,
                    RouteKey::RegisterComplaint,
                    RouteKey::Customers,
                    RouteKey::Engineers,
                    RouteKey::Profile,
                ],
            ),
        ])
    }
}

/// Computes the navigable routes for a session.
///
/// Explicit permission names win; unknown names are dropped. Without any
/// permission names the policy decides.
#[must_use]
pub fn resolve_allowed_routes(
    session: Option<&SessionUser>,
    table: &RoleRouteTable,
    policy: NoPermissionPolicy,
) -> BTreeSet<RouteKey> {
    let Some(session) = session else {
        return BTreeSet::new();
    };

    if !session.permission_names.is_empty() {
        return session
            .permission_names
            .iter()
            .filter_map(|name| RouteKey::from_permission_name(name))
            .collect();
    }

    match policy {
        NoPermissionPolicy::RoleTable => session
            .roles
            .iter()
            .flat_map(|role| table.routes_for(role))
            .collect(),
        NoPermissionPolicy::AllRoutes => RouteKey::all().iter().copied().collect(),
        NoPermissionPolicy::Deny => BTreeSet::new(),
    }
}
