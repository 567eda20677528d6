use serde::{Deserialize, Serialize};

/// Authenticated user persisted in client storage.
///
/// Serialized camelCase; this is the single source of truth for "is logged in".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Backend user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Role identifiers (names or ids as supplied by the backend).
    #[serde(default)]
    pub roles: Vec<String>,
    /// Normalized permission names.
    #[serde(default)]
    pub permission_names: Vec<String>,
    /// Opaque bearer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Mobile number from the profile screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    /// Address from the profile screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl SessionUser {
    /// Returns the first role identifier, used as the complaint-list scope.
    #[must_use]
    pub fn primary_role(&self) -> Option<&str> {
        self.roles.first().map(String::as_str)
    }

    /// Merges profile edits. No backend validation happens here.
    pub fn apply_profile(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(mobile) = update.mobile {
            self.mobile = Some(mobile);
        }
        if let Some(address) = update.address {
            self.address = Some(address);
        }
    }
}

/// Profile screen edits; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New mobile number.
    pub mobile: Option<String>,
    /// New address.
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{ProfileUpdate, SessionUser};

    fn sample_user() -> SessionUser {
        SessionUser {
            id: "1".to_owned(),
            name: "Admin User".to_owned(),
            email: "admin@cft.com".to_owned(),
            roles: vec!["Admin".to_owned()],
            permission_names: vec!["dashboard".to_owned()],
            token: Some("demo-token".to_owned()),
            mobile: None,
            address: None,
        }
    }

    #[test]
    fn persisted_record_uses_camel_case_keys() {
        let value = serde_json::to_value(sample_user()).unwrap_or_default();
        assert_eq!(value["permissionNames"][0], "dashboard");
        assert_eq!(value["roles"][0], "Admin");
        assert!(value.get("mobile").is_none());
    }

    #[test]
    fn minimal_record_deserializes() {
        let parsed: Result<SessionUser, _> =
            serde_json::from_str(r#"{"id":"7","name":"Csr","email":"csr@cft.com"}"#);
        let Ok(user) = parsed else {
            panic!("minimal session record should parse");
        };
        assert!(user.roles.is_empty());
        assert!(user.permission_names.is_empty());
        assert_eq!(user.primary_role(), None);
    }

    #[test]
    fn profile_update_merges_only_supplied_fields() {
        let mut user = sample_user();
        user.apply_profile(ProfileUpdate {
            name: Some("Ops Admin".to_owned()),
            mobile: Some("9999999999".to_owned()),
            ..ProfileUpdate::default()
        });

        assert_eq!(user.name, "Ops Admin");
        assert_eq!(user.email, "admin@cft.com");
        assert_eq!(user.mobile.as_deref(), Some("9999999999"));
        assert_eq!(user.address, None);
    }
}
