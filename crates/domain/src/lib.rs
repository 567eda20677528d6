//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod access;
mod complaint;
mod masters;
mod navigation;
mod route;
mod session;

pub use access::{NoPermissionPolicy, RoleRouteTable, RoleRoutes, resolve_allowed_routes};
pub use complaint::{
    Complaint, ComplaintStatus, ComplaintSummary, ComplaintUpdate, NewComplaint,
};
pub use masters::{
    Customer, CustomerDraft, Engineer, EngineerDraft, MasterUser, MasterUserDraft,
    PermissionDefinition, Role, RolePermission, UserRole,
};
pub use navigation::{NAVIGATION, NavigationItem, visible_navigation};
pub use route::{RouteKey, normalize_permission_name};
pub use session::{ProfileUpdate, SessionUser};
