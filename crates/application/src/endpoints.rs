//! Static map of logical operations to URL paths.

/// Paths on the upstream REST API.
pub mod upstream {
    /// Login.
    pub const LOGIN: &str = "/api/Login/UserLogin";
    /// Self registration.
    pub const REGISTER: &str = "/api/LoginMaster/RegisterUser";

    /// User list.
    pub const USERS: &str = "/api/UserMaster/GetAllUsers";
    /// User create/update/soft-delete.
    pub const SAVE_USER: &str = "/api/UserMaster/SaveUser";
    /// Role list.
    pub const ROLES: &str = "/api/RoleMaster/GetAllRoles";
    /// Permission list.
    pub const PERMISSIONS: &str = "/api/PermissionMaster/GetAllPermissions";
    /// User to role assignments.
    pub const USER_ROLES: &str = "/api/UserMaster/GetUserRoles";
    /// Role to permission assignments.
    pub const ROLE_PERMISSIONS: &str = "/api/RoleMaster/GetRolePermissions";
    /// Permissions of one role.
    pub const PERMISSIONS_BY_ROLE: &str = "/api/RoleMaster/GetPermissionsByRole";
    /// Save the permissions of one role.
    pub const SAVE_ROLE_PERMISSIONS: &str = "/api/RoleMaster/SavePermissionsByRole";
    /// Customer list.
    pub const CUSTOMERS: &str = "/api/CustomerMaster/GetAllCustomers";
    /// Customer create/update/soft-delete.
    pub const SAVE_CUSTOMER: &str = "/api/CustomerMaster/SaveCustomer";
    /// Engineer list.
    pub const ENGINEERS: &str = "/api/EngineerMaster/GetAllEngineers";
    /// Engineer create/update/soft-delete.
    pub const SAVE_ENGINEER: &str = "/api/EngineerMaster/SaveEngineer";
    /// Complaint categories.
    pub const NATURE_OF_COMPLAINT: &str = "/api/Complaint/GetNatureOfComplaint";

    /// Complaint list.
    pub const COMPLAINTS: &str = "/api/Complaint/GetAllComplaints";
    /// Complaint registration.
    pub const CREATE_COMPLAINT: &str = "/api/Complaint/Create";
    /// Engineer assignment.
    pub const ASSIGN_ENGINEER: &str = "/api/Complaint/AssignEngineer";
    /// Complaint removal.
    pub const DELETE_COMPLAINT: &str = "/api/Complaint/Delete";
}

/// Paths on the proxy surface served by this application.
pub mod app {
    /// Login.
    pub const LOGIN: &str = "/api/auth/login";
    /// Self registration.
    pub const REGISTER: &str = "/api/auth/register";

    /// Complaint list.
    pub const COMPLAINTS: &str = "/api/complaints";
    /// Complaint registration.
    pub const CREATE_COMPLAINT: &str = "/api/complaints/create";
    /// Engineer assignment.
    pub const ASSIGN_ENGINEER: &str = "/api/complaints/assign";
    /// Complaint removal.
    pub const DELETE_COMPLAINT: &str = "/api/complaints/delete";

    /// Customer list.
    pub const CUSTOMERS: &str = "/api/masters/customers";
    /// Customer save.
    pub const SAVE_CUSTOMER: &str = "/api/masters/customers/save";
    /// Engineer list.
    pub const ENGINEERS: &str = "/api/masters/engineers";
    /// Engineer save.
    pub const SAVE_ENGINEER: &str = "/api/masters/engineers/save";
    /// User list.
    pub const USERS: &str = "/api/masters/users";
    /// User save.
    pub const SAVE_USER: &str = "/api/masters/users/save";
    /// Role list.
    pub const ROLES: &str = "/api/masters/roles";
    /// Permission list.
    pub const PERMISSIONS: &str = "/api/masters/permissions";
    /// Role to permission assignments.
    pub const ROLE_PERMISSIONS: &str = "/api/masters/role-permissions";
    /// Permissions of one role.
    pub const PERMISSIONS_BY_ROLE: &str = "/api/masters/role-permissions/by-role";
    /// Save the permissions of one role.
    pub const SAVE_ROLE_PERMISSIONS: &str = "/api/masters/role-permissions/save";
    /// User to role assignments.
    pub const USER_ROLES: &str = "/api/masters/user-roles";
    /// Complaint categories.
    pub const NATURE_OF_COMPLAINT: &str = "/api/masters/nature-of-complaint";
}
