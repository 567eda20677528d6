//! Master data records (customers, engineers, users, roles, permissions).

use complaintdesk_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Customer master record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Backend identifier.
    pub id: String,
    /// Customer name.
    pub name: String,
    /// Contact mobile number.
    pub mobile_number: String,
    /// Contact email.
    pub email: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Soft-delete flag.
    pub is_active: bool,
}

/// Engineer master record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engineer {
    /// Backend identifier.
    pub id: String,
    /// Engineer name.
    pub name: String,
    /// Contact mobile number.
    pub mobile_number: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Base address.
    pub address: Option<String>,
    /// Soft-delete flag.
    pub is_active: bool,
}

/// Back-office user record from the user master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterUser {
    /// Backend identifier.
    pub id: String,
    /// User name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Contact mobile number.
    pub mobile_number: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Soft-delete flag.
    pub is_active: bool,
}

/// Role master record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Permission master record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDefinition {
    /// Backend identifier or stable key.
    pub id: String,
    /// Display name, e.g. `RoleMapping`.
    pub name: String,
}

/// Role to permission assignment. `is_active == false` is a soft delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermission {
    /// Role identifier.
    pub role_id: String,
    /// Permission identifier.
    pub permission_id: String,
    /// Whether the assignment is in effect.
    pub is_active: bool,
}

/// User to role assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    /// User identifier.
    pub user_id: String,
    /// Role identifier.
    pub role_id: String,
}

/// Customer form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDraft {
    /// Customer name (required).
    pub name: String,
    /// Mobile number (required).
    pub mobile_number: String,
    /// Email.
    pub email: Option<String>,
    /// Address.
    pub address: Option<String>,
}

impl CustomerDraft {
    /// Checks required fields and returns trimmed values.
    pub fn validated(self) -> AppResult<Self> {
        Ok(Self {
            name: NonEmptyString::new(self.name)?.into(),
            mobile_number: NonEmptyString::new(self.mobile_number)?.into(),
            email: optional_trimmed(self.email),
            address: optional_trimmed(self.address),
        })
    }
}

/// Engineer form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineerDraft {
    /// Engineer name (required).
    pub name: String,
    /// Mobile number (required).
    pub mobile_number: String,
    /// Email (required).
    pub email: String,
    /// Address.
    pub address: Option<String>,
}

impl EngineerDraft {
    /// Checks required fields and returns trimmed values.
    pub fn validated(self) -> AppResult<Self> {
        Ok(Self {
            name: NonEmptyString::new(self.name)?.into(),
            mobile_number: NonEmptyString::new(self.mobile_number)?.into(),
            email: NonEmptyString::new(self.email)?.into(),
            address: optional_trimmed(self.address),
        })
    }
}

/// User master form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterUserDraft {
    /// User name (required).
    pub name: String,
    /// Email (required).
    pub email: String,
    /// Mobile number.
    pub mobile_number: Option<String>,
    /// Address.
    pub address: Option<String>,
}

impl MasterUserDraft {
    /// Checks required fields and returns trimmed values.
    pub fn validated(self) -> AppResult<Self> {
        Ok(Self {
            name: NonEmptyString::new(self.name)?.into(),
            email: NonEmptyString::new(self.email)?.into(),
            mobile_number: optional_trimmed(self.mobile_number),
            address: optional_trimmed(self.address),
        })
    }
}

fn optional_trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{CustomerDraft, EngineerDraft, MasterUserDraft};

    #[test]
    fn engineer_draft_requires_name_mobile_and_email() {
        let draft = EngineerDraft {
            name: "Alex Johnson".to_owned(),
            mobile_number: "9001002001".to_owned(),
            email: "  ".to_owned(),
            address: None,
        };
        assert!(draft.validated().is_err());
    }

    #[test]
    fn customer_draft_drops_blank_optional_fields() {
        let draft = CustomerDraft {
            name: " Acme Corp ".to_owned(),
            mobile_number: "9123456780".to_owned(),
            email: Some("   ".to_owned()),
            address: Some("Acme Park, Houston".to_owned()),
        };

        let Ok(validated) = draft.validated() else {
            panic!("customer draft should validate");
        };
        assert_eq!(validated.name, "Acme Corp");
        assert_eq!(validated.email, None);
        assert_eq!(validated.address.as_deref(), Some("Acme Park, Houston"));
    }

    #[test]
    fn user_draft_requires_email() {
        let draft = MasterUserDraft {
            name: "CSR Agent".to_owned(),
            ..MasterUserDraft::default()
        };
        assert!(draft.validated().is_err());
    }
}
