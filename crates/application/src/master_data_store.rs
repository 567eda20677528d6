//! Shared master data state for the admin screens.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use complaintdesk_core::{AppError, AppResult};
use complaintdesk_domain::{
    Customer, CustomerDraft, Engineer, EngineerDraft, MasterUser, MasterUserDraft,
    PermissionDefinition, Role, RolePermission, UserRole,
};

use crate::{LoadOutcome, MastersRepository, MountToken};


/// Whether an operation reaches the backend or only changes local state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Persisted through the backend.
    Remote,
    /// Applied to in-memory state only; lost on reload.
    LocalOnly,
}

impl Capability {
    /// Returns the display label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::LocalOnly => "local-only",
        }
    }
}

/// Mutating operations offered by [`MasterDataStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MasterOperation {
    /// Create, update or delete a customer.
    SaveCustomer,
    /// Create, update or delete an engineer.
    SaveEngineer,
    /// Create, update or delete a user.
    SaveUser,
    /// Replace the permissions of a role.
    SaveRolePermissions,
    /// Replace the roles of a user.
    SetUserRoles,
    /// Replace the screens a role opens when a session has no permissions.
    SetRoleRoutes,
}

impl MasterOperation {
    /// Returns the display label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SaveCustomer => "save-customer",
            Self::SaveEngineer => "save-engineer",
            Self::SaveUser => "save-user",
            Self::SaveRolePermissions => "save-role-permissions",
            Self::SetUserRoles => "set-user-roles",
            Self::SetRoleRoutes => "set-role-routes",
        }
    }
}

/// Snapshot of every master data slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterData {
    /// Customers.
    pub customers: Vec<Customer>,
    /// Engineers.
    pub engineers: Vec<Engineer>,
    /// Back-office users.
    pub users: Vec<MasterUser>,
    /// Roles.
    pub roles: Vec<Role>,
    /// Permission definitions.
    pub permissions: Vec<PermissionDefinition>,
    /// User to role assignments.
    pub user_roles: Vec<UserRole>,
    /// Role to permission assignments.
    pub role_permissions: Vec<RolePermission>,
}

trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Customer {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Keyed for Engineer {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Keyed for MasterUser {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

fn replace_by_key<T: Keyed>(items: &mut [T], updated: T) {
    if let Some(slot) = items.iter_mut().find(|item| item.key() == updated.key()) {
        *slot = updated;
    }
}

fn find_by_key<T: Keyed + Clone>(items: &[T], id: &str, what: &str) -> AppResult<T> {
    items
        .iter()
        .find(|item| item.key() == id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("{what} '{id}' does not exist")))
}

/// Master data container shared by the admin screens.
#[derive(Clone)]
pub struct MasterDataStore {
    repository: MastersRepository,
    state: Arc<RwLock<MasterData>>,
}

impl MasterDataStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(repository: MastersRepository) -> Self {
        Self {
            repository,
            state: Arc::new(RwLock::new(MasterData::default())),
        }
    }

    /// Publishes which operations persist remotely.
    #[must_use]
    pub fn capabilities() -> Vec<(MasterOperation, Capability)> {
        vec![
            (MasterOperation::SaveCustomer, Capability::Remote),
            (MasterOperation::SaveEngineer, Capability::Remote),
            (MasterOperation::SaveUser, Capability::Remote),
            (MasterOperation::SaveRolePermissions, Capability::Remote),
            (MasterOperation::SetUserRoles, Capability::LocalOnly),
            (MasterOperation::SetRoleRoutes, Capability::LocalOnly),
        ]
    }

    /// Fetches every slice at once.
    ///
    /// Any failure resets all slices to empty. Results arriving after the
    /// token was cancelled are discarded.
    pub async fn load(&self, token: &MountToken) -> LoadOutcome {
        let repository = &self.repository;
        let fetched = tokio::try_join!(
            repository.list_customers(),
            repository.list_engineers(),
            repository.list_users(),
            repository.list_roles(),
            repository.list_permissions(),
            repository.list_user_roles(),
            repository.list_role_permissions(),
        );

        if token.is_cancelled() {
            debug!("master data load finished after unmount; discarding");
            return LoadOutcome::Discarded;
        }

        match fetched {
            Ok((customers, engineers, users, roles, permissions, user_roles, role_permissions)) => {
                *self.state.write().await = MasterData {
                    customers,
                    engineers,
                    users,
                    roles,
                    permissions,
                    user_roles,
                    role_permissions,
                };
                LoadOutcome::Loaded
            }
            Err(error) => {
                warn!(error = %error, "master data load failed; resetting");
                *self.state.write().await = MasterData::default();
                LoadOutcome::Reset {
                    error: error.user_message().to_owned(),
                }
            }
        }
    }

    /// Returns a snapshot of all slices.
    pub async fn snapshot(&self) -> MasterData {
        self.state.read().await.clone()
    }

    /// Creates a customer and prepends it.
    pub async fn add_customer(&self, draft: CustomerDraft) -> AppResult<Customer> {
        let created = self.repository.save_customer(None, draft).await?;
        self.state.write().await.customers.insert(0, created.clone());
        Ok(created)
    }

    /// Updates a customer in place.
    pub async fn update_customer(&self, id: &str, draft: CustomerDraft) -> AppResult<Customer> {
        let updated = self.repository.save_customer(Some(id), draft).await?;
        replace_by_key(&mut self.state.write().await.customers, updated.clone());
        Ok(updated)
    }

    /// Soft-deletes a customer and removes it from the list.
    pub async fn delete_customer(&self, id: &str) -> AppResult<()> {
        let customer = find_by_key(&self.state.read().await.customers, id, "customer")?;
        self.repository.delete_customer(&customer).await?;
        self.state
            .write()
            .await
            .customers
            .retain(|customer| customer.id != id);
        Ok(())
    }

    /// Creates an engineer and prepends it.
    pub async fn add_engineer(&self, draft: EngineerDraft) -> AppResult<Engineer> {
        let created = self.repository.save_engineer(None, draft).await?;
        self.state.write().await.engineers.insert(0, created.clone());
        Ok(created)
    }

    /// Updates an engineer in place.
    pub async fn update_engineer(&self, id: &str, draft: EngineerDraft) -> AppResult<Engineer> {
        let updated = self.repository.save_engineer(Some(id), draft).await?;
        replace_by_key(&mut self.state.write().await.engineers, updated.clone());
        Ok(updated)
    }

    /// Soft-deletes an engineer and removes it from the list.
    pub async fn delete_engineer(&self, id: &str) -> AppResult<()> {
        let engineer = find_by_key(&self.state.read().await.engineers, id, "engineer")?;
        self.repository.delete_engineer(&engineer).await?;
        self.state
            .write()
            .await
            .engineers
            .retain(|engineer| engineer.id != id);
        Ok(())
    }

    /// Creates a user and prepends it.
    pub async fn add_user(&self, draft: MasterUserDraft) -> AppResult<MasterUser> {
        let created = self.repository.save_user(None, draft).await?;
        self.state.write().await.users.insert(0, created.clone());
        Ok(created)
    }

    /// Updates a user in place.
    pub async fn update_user(&self, id: &str, draft: MasterUserDraft) -> AppResult<MasterUser> {
        let updated = self.repository.save_user(Some(id), draft).await?;
        replace_by_key(&mut self.state.write().await.users, updated.clone());
        Ok(updated)
    }

    /// Soft-deletes a user and removes it from the list.
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        let user = find_by_key(&self.state.read().await.users, id, "user")?;
        self.repository.delete_user(&user).await?;
        self.state.write().await.users.retain(|user| user.id != id);
        Ok(())
    }

    /// Fetches the current assignments of one role.
    pub async fn permissions_by_role(&self, role_id: &str) -> AppResult<Vec<RolePermission>> {
        self.repository.permissions_by_role(role_id).await
    }

    /// Replaces the permissions of a role remotely, then locally.
    pub async fn save_role_permissions(
        &self,
        role_id: &str,
        permission_ids: Vec<String>,
    ) -> AppResult<()> {
        self.repository
            .save_role_permissions(role_id, &permission_ids)
            .await?;

        let mut state = self.state.write().await;
        state
            .role_permissions
            .retain(|assignment| assignment.role_id != role_id);
        state
            .role_permissions
            .extend(permission_ids.into_iter().map(|permission_id| RolePermission {
                role_id: role_id.to_owned(),
                permission_id,
                is_active: true,
            }));
        Ok(())
    }

    /// Replaces the roles of a user in local state only.
    pub async fn set_user_roles(&self, user_id: &str, role_ids: Vec<String>) -> Capability {
        let mut state = self.state.write().await;
        state.user_roles.retain(|assignment| assignment.user_id != user_id);
        state
            .user_roles
            .extend(role_ids.into_iter().map(|role_id| UserRole {
                user_id: user_id.to_owned(),
                role_id,
            }));
        debug!(user_id, "user roles changed locally; no backend endpoint exists");
        Capability::LocalOnly
    }
}
