use serde_json::Value;

use crate::endpoints::{app, upstream};

use super::fallback;

/// One route on the proxy surface.
#[derive(Debug, Clone, Copy)]
pub struct ProxyRoute {
    /// Stable name used in logs.
    pub name: &'static str,
    /// Path served by the proxy.
    pub app_path: &'static str,
    /// Path on the upstream API.
    pub upstream_path: &'static str,
    /// Whether the inbound query string is forwarded.
    pub forward_query: bool,
    fallback: fn() -> Value,
}

impl ProxyRoute {
    const fn new(
        name: &'static str,
        app_path: &'static str,
        upstream_path: &'static str,
        fallback: fn() -> Value,
    ) -> Self {
        Self {
            name,
            app_path,
            upstream_path,
            forward_query: false,
            fallback,
        }
    }

    const fn with_query(mut self) -> Self {
        self.forward_query = true;
        self
    }

    /// Builds the fallback payload served when the upstream is unavailable.
    #[must_use]
    pub fn fallback(&self) -> Value {
        (self.fallback)()
    }
}

/// Login.
pub const LOGIN: ProxyRoute = ProxyRoute::new("login", app::LOGIN, upstream::LOGIN, fallback::login);
/// Self registration.
pub const REGISTER: ProxyRoute =
    ProxyRoute::new("register", app::REGISTER, upstream::REGISTER, fallback::register);
/// Complaint list.
pub const COMPLAINTS: ProxyRoute = ProxyRoute::new(
    "complaints",
    app::COMPLAINTS,
    upstream::COMPLAINTS,
    fallback::complaints,
);
/// Complaint registration.
pub const CREATE_COMPLAINT: ProxyRoute = ProxyRoute::new(
    "create-complaint",
    app::CREATE_COMPLAINT,
    upstream::CREATE_COMPLAINT,
    fallback::create_complaint,
);
/// Engineer assignment.
pub const ASSIGN_ENGINEER: ProxyRoute = ProxyRoute::new(
    "assign-engineer",
    app::ASSIGN_ENGINEER,
    upstream::ASSIGN_ENGINEER,
    fallback::assign_engineer,
);
/// Complaint removal.
pub const DELETE_COMPLAINT: ProxyRoute = ProxyRoute::new(
    "delete-complaint",
    app::DELETE_COMPLAINT,
    upstream::DELETE_COMPLAINT,
    fallback::delete_complaint,
);
/// Customer list.
pub const CUSTOMERS: ProxyRoute = ProxyRoute::new(
    "customers",
    app::CUSTOMERS,
    upstream::CUSTOMERS,
    fallback::customers,
);
/// Customer save.
pub const SAVE_CUSTOMER: ProxyRoute = ProxyRoute::new(
    "save-customer",
    app::SAVE_CUSTOMER,
    upstream::SAVE_CUSTOMER,
    fallback::save_customer,
);
/// Engineer list.
pub const ENGINEERS: ProxyRoute = ProxyRoute::new(
    "engineers",
    app::ENGINEERS,
    upstream::ENGINEERS,
    fallback::engineers,
);
/// Engineer save.
pub const SAVE_ENGINEER: ProxyRoute = ProxyRoute::new(
    "save-engineer",
    app::SAVE_ENGINEER,
    upstream::SAVE_ENGINEER,
    fallback::save_engineer,
);
/// User list.
pub const USERS: ProxyRoute = ProxyRoute::new("users", app::USERS, upstream::USERS, fallback::users);
/// User save.
pub const SAVE_USER: ProxyRoute =
    ProxyRoute::new("save-user", app::SAVE_USER, upstream::SAVE_USER, fallback::save_user);
/// Role list.
pub const ROLES: ProxyRoute = ProxyRoute::new("roles", app::ROLES, upstream::ROLES, fallback::roles);
/// Permission list.
pub const PERMISSIONS: ProxyRoute = ProxyRoute::new(
    "permissions",
    app::PERMISSIONS,
    upstream::PERMISSIONS,
    fallback::permissions,
);
/// Role to permission assignments.
pub const ROLE_PERMISSIONS: ProxyRoute = ProxyRoute::new(
    "role-permissions",
    app::ROLE_PERMISSIONS,
    upstream::ROLE_PERMISSIONS,
    fallback::role_permissions,
)
.with_query();
/// Permissions of one role.
pub const PERMISSIONS_BY_ROLE: ProxyRoute = ProxyRoute::new(
    "permissions-by-role",
    app::PERMISSIONS_BY_ROLE,
    upstream::PERMISSIONS_BY_ROLE,
    fallback::permissions_by_role,
);
/// Save the permissions of one role.
pub const SAVE_ROLE_PERMISSIONS: ProxyRoute = ProxyRoute::new(
    "save-role-permissions",
    app::SAVE_ROLE_PERMISSIONS,
    upstream::SAVE_ROLE_PERMISSIONS,
    fallback::save_role_permissions,
);
/// User to role assignments.
pub const USER_ROLES: ProxyRoute = ProxyRoute::new(
    "user-roles",
    app::USER_ROLES,
    upstream::USER_ROLES,
    fallback::user_roles,
)
.with_query();
/// Complaint categories.
pub const NATURE_OF_COMPLAINT: ProxyRoute = ProxyRoute::new(
    "nature-of-complaint",
    app::NATURE_OF_COMPLAINT,
    upstream::NATURE_OF_COMPLAINT,
    fallback::nature_of_complaint,
);

/// Every proxied route.
pub const ALL: &[ProxyRoute] = &[
    LOGIN,
    REGISTER,
    COMPLAINTS,
    CREATE_COMPLAINT,
    ASSIGN_ENGINEER,
    DELETE_COMPLAINT,
    CUSTOMERS,
    SAVE_CUSTOMER,
    ENGINEERS,
    SAVE_ENGINEER,
    USERS,
    SAVE_USER,
    ROLES,
    PERMISSIONS,
    ROLE_PERMISSIONS,
    PERMISSIONS_BY_ROLE,
    SAVE_ROLE_PERMISSIONS,
    USER_ROLES,
    NATURE_OF_COMPLAINT,
];

/// Finds the route served at `app_path`.
#[must_use]
pub fn find(app_path: &str) -> Option<&'static ProxyRoute> {
    ALL.iter().find(|route| route.app_path == app_path)
}
