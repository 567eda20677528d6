use complaintdesk_application::{Capability, MasterOperation};
use complaintdesk_domain::{
    Complaint, ComplaintSummary, Customer, Engineer, MasterUser, NavigationItem,
    PermissionDefinition, Role, RolePermission, SessionUser, UserRole,
};

const EMPTY: &str = "-";

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|value| !value.is_empty()).unwrap_or(EMPTY)
}

pub fn session(user: &SessionUser) -> Vec<String> {
    vec![
        format!("id:       {}", user.id),
        format!("name:     {}", user.name),
        format!("email:    {}", user.email),
        format!("roles:    {}", user.roles.join(", ")),
        format!("mobile:   {}", or_dash(user.mobile.as_deref())),
        format!("address:  {}", or_dash(user.address.as_deref())),
    ]
}

pub fn navigation(items: &[NavigationItem]) -> Vec<String> {
    if items.is_empty() {
        return vec!["no screens are available for this account".to_owned()];
    }

    items
        .iter()
        .map(|item| format!("{:<20} {:<26} {}", item.key.as_str(), item.label, item.path))
        .collect()
}

pub fn summary(summary: &ComplaintSummary, customers: usize, engineers: usize) -> Vec<String> {
    [
        ("complaints", summary.total),
        ("  draft", summary.draft),
        ("  resolution pending", summary.resolution_pending),
        ("  completed", summary.completed),
        ("  unassigned", summary.unassigned),
        ("customers", customers),
        ("engineers", engineers),
    ]
    .iter()
    .map(|(label, count)| format!("{:<22}{count}", format!("{label}:")))
    .collect()
}

pub fn complaint(complaint: &Complaint) -> String {
    format!(
        "{:<38} {:<20} {:<12} {:<18} {:<20} {}",
        complaint.id,
        complaint.customer_name,
        complaint.mobile_number,
        complaint.status.name(),
        or_dash(
            complaint
                .assigned_engineer
                .as_deref()
                .or(complaint.engineer_id.as_deref())
        ),
        complaint.nature_of_complaint,
    )
}

pub fn customer(customer: &Customer) -> String {
    format!(
        "{:<38} {:<24} {:<12} {:<28} {}",
        customer.id,
        customer.name,
        customer.mobile_number,
        or_dash(customer.email.as_deref()),
        or_dash(customer.address.as_deref()),
    )
}

pub fn engineer(engineer: &Engineer) -> String {
    format!(
        "{:<38} {:<24} {:<12} {}",
        engineer.id,
        engineer.name,
        or_dash(engineer.mobile_number.as_deref()),
        or_dash(engineer.email.as_deref()),
    )
}

pub fn user(user: &MasterUser) -> String {
    format!(
        "{:<38} {:<24} {:<28} {}",
        user.id,
        user.name,
        user.email,
        or_dash(user.mobile_number.as_deref()),
    )
}

pub fn role(role: &Role) -> String {
    format!("{:<8} {}", role.id, role.name)
}

pub fn permission(permission: &PermissionDefinition) -> String {
    format!("{:<24} {}", permission.id, permission.name)
}

pub fn role_permission(entry: &RolePermission) -> String {
    format!("{:<8} {}", entry.role_id, entry.permission_id)
}

pub fn user_role(entry: &UserRole) -> String {
    format!("{:<38} {}", entry.user_id, entry.role_id)
}

pub fn list<T>(items: &[T], line: fn(&T) -> String, empty: &str) -> Vec<String> {
    if items.is_empty() {
        return vec![empty.to_owned()];
    }
    items.iter().map(line).collect()
}

pub fn capabilities(entries: &[(MasterOperation, Capability)]) -> Vec<String> {
    entries
        .iter()
        .map(|(operation, capability)| {
            format!("{:<24} {}", operation.as_str(), capability.as_str())
        })
        .collect()
}
