//! Master data endpoints: customers, engineers, users, roles and permissions.
//!
//! Saves go through a single upsert endpoint per record type: id `0`
//! creates, a real id updates, and `IsActive: false` soft-deletes.

use complaintdesk_core::{AppError, AppResult};
use complaintdesk_domain::{
    Customer, CustomerDraft, Engineer, EngineerDraft, MasterUser, MasterUserDraft,
    PermissionDefinition, Role, RolePermission, UserRole,
};
use serde_json::{Value, json};

use crate::ApiClient;
use crate::endpoints::app;
use crate::envelope::list_items;
use crate::wire::{parse_items, value_text};

mod records;


/// Repository for the master data endpoints.
#[derive(Clone)]
pub struct MastersRepository {
    client: ApiClient,
}

impl MastersRepository {
    /// Creates a repository over the shared client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists customers.
    pub async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        let items = self.client.get_envelope(app::CUSTOMERS).await?.into_items()?;
        Ok(parse_items(items, "customer", records::customer))
    }

    /// Lists engineers.
    pub async fn list_engineers(&self) -> AppResult<Vec<Engineer>> {
        let items = self.client.get_envelope(app::ENGINEERS).await?.into_items()?;
        Ok(parse_items(items, "engineer", records::engineer))
    }

    /// Lists back-office users.
    pub async fn list_users(&self) -> AppResult<Vec<MasterUser>> {
        let items = self.client.get_envelope(app::USERS).await?.into_items()?;
        Ok(parse_items(items, "user", records::user))
    }

    /// Lists roles.
    pub async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let items = self.client.get_envelope(app::ROLES).await?.into_items()?;
        Ok(parse_items(items, "role", records::role))
    }

    /// Lists permission definitions.
    pub async fn list_permissions(&self) -> AppResult<Vec<PermissionDefinition>> {
        let items = self
            .client
            .get_envelope(app::PERMISSIONS)
            .await?
            .into_items()?;
        Ok(parse_items(items, "permission", records::permission))
    }

    /// Lists user to role assignments. Accepts both the list and the
    /// `{ userId: [roleIds] }` map forms.
    pub async fn list_user_roles(&self) -> AppResult<Vec<UserRole>> {
        let data = self.client.get_envelope(app::USER_ROLES).await?.into_data()?;
        if data.is_object() {
            return Ok(records::id_map_pairs(&data)
                .into_iter()
                .map(|(user_id, role_id)| UserRole { user_id, role_id })
                .collect());
        }

        let items = list_items(data)?;
        Ok(parse_items(items, "user role", records::user_role))
    }

    /// Lists role to permission assignments, including soft-deleted ones.
    pub async fn list_role_permissions(&self) -> AppResult<Vec<RolePermission>> {
        let data = self
            .client
            .get_envelope(app::ROLE_PERMISSIONS)
            .await?
            .into_data()?;
        role_permissions_from(data, None)
    }

    /// Lists the assignments of one role.
    pub async fn permissions_by_role(&self, role_id: &str) -> AppResult<Vec<RolePermission>> {
        let data = self
            .client
            .post_envelope(app::PERMISSIONS_BY_ROLE, json!({ "RoleId": role_id }))
            .await?
            .into_data()?;
        role_permissions_from(data, Some(role_id))
    }

    /// Replaces the permission set of one role.
    pub async fn save_role_permissions(
        &self,
        role_id: &str,
        permission_ids: &[String],
    ) -> AppResult<()> {
        let permissions: Vec<Value> = permission_ids
            .iter()
            .map(|permission_id| {
                json!({ "RoleId": role_id, "PermissionId": permission_id, "IsActive": true })
            })
            .collect();

        self.client
            .post_envelope(
                app::SAVE_ROLE_PERMISSIONS,
                json!({ "RoleId": role_id, "Permissions": permissions }),
            )
            .await?
            .into_data()?;
        Ok(())
    }

    /// Lists complaint categories.
    pub async fn list_nature_of_complaint(&self) -> AppResult<Vec<String>> {
        let items = self
            .client
            .get_envelope(app::NATURE_OF_COMPLAINT)
            .await?
            .into_items()?;
        Ok(parse_items(
            items,
            "nature of complaint",
            records::nature_of_complaint,
        ))
    }

    /// Creates (`id == None`) or updates a customer.
    pub async fn save_customer(&self, id: Option<&str>, draft: CustomerDraft) -> AppResult<Customer> {
        let draft = draft.validated()?;
        let body = json!({
            "id": wire_id(id),
            "name": draft.name,
            "mobileNumber": draft.mobile_number,
            "email": draft.email,
            "address": draft.address,
            "IsActive": true,
        });

        let data = self.save(app::SAVE_CUSTOMER, body).await?;
        if let Ok(saved) = records::customer(&data) {
            return Ok(saved);
        }
        Ok(Customer {
            id: saved_id(&data, id, "customer")?,
            name: draft.name,
            mobile_number: draft.mobile_number,
            email: draft.email,
            address: draft.address,
            is_active: true,
        })
    }

    /// Soft-deletes a customer.
    pub async fn delete_customer(&self, customer: &Customer) -> AppResult<()> {
        let body = json!({
            "id": customer.id,
            "name": customer.name,
            "mobileNumber": customer.mobile_number,
            "email": customer.email,
            "address": customer.address,
            "IsActive": false,
        });
        self.save(app::SAVE_CUSTOMER, body).await.map(|_| ())
    }

    /// Creates (`id == None`) or updates an engineer.
    pub async fn save_engineer(&self, id: Option<&str>, draft: EngineerDraft) -> AppResult<Engineer> {
        let draft = draft.validated()?;
        let body = json!({
            "id": wire_id(id),
            "name": draft.name,
            "mobilenumber": draft.mobile_number,
            "email": draft.email,
            "address": draft.address,
            "IsActive": true,
        });

        let data = self.save(app::SAVE_ENGINEER, body).await?;
        if let Ok(saved) = records::engineer(&data) {
            return Ok(saved);
        }
        Ok(Engineer {
            id: saved_id(&data, id, "engineer")?,
            name: draft.name,
            mobile_number: Some(draft.mobile_number),
            email: Some(draft.email),
            address: draft.address,
            is_active: true,
        })
    }

    /// Soft-deletes an engineer.
    pub async fn delete_engineer(&self, engineer: &Engineer) -> AppResult<()> {
        let body = json!({
            "id": engineer.id,
            "name": engineer.name,
            "mobilenumber": engineer.mobile_number,
            "email": engineer.email,
            "address": engineer.address,
            "IsActive": false,
        });
        self.save(app::SAVE_ENGINEER, body).await.map(|_| ())
    }

    /// Creates (`id == None`) or updates a back-office user.
    pub async fn save_user(&self, id: Option<&str>, draft: MasterUserDraft) -> AppResult<MasterUser> {
        let draft = draft.validated()?;
        let body = json!({
            "id": wire_id(id),
            "name": draft.name,
            "emailId": draft.email,
            "mobileNumber": draft.mobile_number,
            "address": draft.address,
            "IsActive": true,
        });

        let data = self.save(app::SAVE_USER, body).await?;
        if let Ok(saved) = records::user(&data) {
            return Ok(saved);
        }
        Ok(MasterUser {
            id: saved_id(&data, id, "user")?,
            name: draft.name,
            email: draft.email,
            mobile_number: draft.mobile_number,
            address: draft.address,
            is_active: true,
        })
    }

    /// Soft-deletes a back-office user.
    pub async fn delete_user(&self, user: &MasterUser) -> AppResult<()> {
        let body = json!({
            "id": user.id,
            "name": user.name,
            "emailId": user.email,
            "mobileNumber": user.mobile_number,
            "address": user.address,
            "IsActive": false,
        });
        self.save(app::SAVE_USER, body).await.map(|_| ())
    }

    async fn save(&self, path: &str, body: Value) -> AppResult<Value> {
        self.client.post_envelope(path, body).await?.into_data()
    }
}

fn wire_id(id: Option<&str>) -> Value {
    match id {
        Some(id) => Value::String(id.to_owned()),
        None => json!(0),
    }
}

/// Identifier for a saved record whose body did not echo the full record:
/// a scalar `data` or the existing id. A create answered with neither is
/// rejected.
fn saved_id(data: &Value, id: Option<&str>, what: &str) -> AppResult<String> {
    value_text(data)
        .or_else(|| id.filter(|id| !id.trim().is_empty()).map(str::to_owned))
        .ok_or_else(|| {
            AppError::Rejected(format!("backend did not return an id for the saved {what}"))
        })
}

fn role_permissions_from(data: Value, role_id: Option<&str>) -> AppResult<Vec<RolePermission>> {
    if data.is_object() {
        return Ok(records::id_map_pairs(&data)
            .into_iter()
            .map(|(role_id, permission_id)| RolePermission {
                role_id,
                permission_id,
                is_active: true,
            })
            .collect());
    }

    let items = list_items(data)?;
    Ok(parse_items(items, "role permission", |item| {
        records::role_permission(item, role_id)
    }))
}
