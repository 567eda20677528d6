//! Session and permission resolution for the admin client.
//!
//! The session moves anonymous → authenticated → anonymous. The persisted
//! record in [`SessionStore`] is the single source of truth across restarts;
//! allowed routes are derived from it on demand.

use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use complaintdesk_core::{AppError, AppResult};
use complaintdesk_domain::{
    NavigationItem, NoPermissionPolicy, ProfileUpdate, RoleRouteTable, RouteKey, SessionUser,
    resolve_allowed_routes, visible_navigation,
};

use crate::{ApiClient, AuthRepository, Capability, RegisterInput, SessionStore};

#[cfg(test)]
mod tests;

/// Outcome of a login attempt as shown on the login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    /// Whether a session was established.
    pub ok: bool,
    /// Human-readable failure message.
    pub error: Option<String>,
}

impl LoginResult {
    fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    fn failure(error: &AppError) -> Self {
        Self {
            ok: false,
            error: Some(error.user_message().to_owned()),
        }
    }
}

/// Application service owning the current session.
#[derive(Clone)]
pub struct SessionService {
    auth: AuthRepository,
    client: ApiClient,
    store: Arc<dyn SessionStore>,
    policy: NoPermissionPolicy,
    current: Arc<RwLock<Option<SessionUser>>>,
    role_table: Arc<RwLock<RoleRouteTable>>,
}

impl SessionService {
    /// Creates an anonymous session service.
    #[must_use]
    pub fn new(
        client: ApiClient,
        store: Arc<dyn SessionStore>,
        role_table: RoleRouteTable,
        policy: NoPermissionPolicy,
    ) -> Self {
        Self {
            auth: AuthRepository::new(client.clone()),
            client,
            store,
            policy,
            current: Arc::new(RwLock::new(None)),
            role_table: Arc::new(RwLock::new(role_table)),
        }
    }

    /// Hydrates the session from storage.
    ///
    /// Missing or unreadable records leave the service anonymous.
    pub async fn initialize(&self) -> Option<SessionUser> {
        let raw = match self.store.read().await {
            Ok(raw) => raw,
            Err(error) => {
                warn!(error = %error, "failed to read stored session");
                None
            }
        };

        let session = raw.and_then(|raw| match serde_json::from_str::<SessionUser>(&raw) {
            Ok(session) => Some(session),
            Err(error) => {
                warn!(error = %error, "discarding unreadable stored session");
                None
            }
        });

        self.client
            .set_bearer(session.as_ref().and_then(|session| session.token.clone()))
            .await;
        *self.current.write().await = session.clone();
        session
    }

    /// Logs in and persists the session. Failures leave the state anonymous.
    pub async fn login(&self, email: &str, password: &str) -> LoginResult {
        let session = match self.auth.login(email, password).await {
            Ok(session) => session,
            Err(error) => {
                warn!(error = %error, "login failed");
                return LoginResult::failure(&error);
            }
        };

        if let Err(error) = self.establish(session).await {
            warn!(error = %error, "failed to persist session");
            return LoginResult::failure(&error);
        }

        LoginResult::success()
    }

    /// Registers a new account and logs it in.
    pub async fn register(&self, input: RegisterInput) -> AppResult<SessionUser> {
        let session = self.auth.register(input).await?;
        self.establish(session.clone()).await?;
        Ok(session)
    }

    /// Clears storage, state and the bearer token.
    pub async fn logout(&self) -> AppResult<()> {
        *self.current.write().await = None;
        self.client.set_bearer(None).await;
        self.store.remove().await?;
        info!("session cleared");
        Ok(())
    }

    /// Merges profile edits into the session and persists them locally.
    pub async fn update_profile(&self, update: ProfileUpdate) -> AppResult<SessionUser> {
        let mut current = self.current.write().await;
        let Some(session) = current.as_mut() else {
            return Err(AppError::Unauthorized("no active session".to_owned()));
        };

        let mut updated = session.clone();
        updated.apply_profile(update);
        self.persist(&updated).await?;
        *session = updated.clone();
        Ok(updated)
    }

    /// Returns the current session.
    pub async fn current(&self) -> Option<SessionUser> {
        self.current.read().await.clone()
    }

    /// Returns the configured no-permission policy.
    #[must_use]
    pub fn policy(&self) -> NoPermissionPolicy {
        self.policy
    }

    /// Computes the routes the current session may navigate to.
    pub async fn allowed_routes(&self) -> BTreeSet<RouteKey> {
        let current = self.current.read().await;
        let table = self.role_table.read().await;

        if let Some(session) = current.as_ref()
            && session.permission_names.is_empty()
            && self.policy == NoPermissionPolicy::AllRoutes
        {
            warn!(
                user = %session.email,
                "session has no permission names; granting every route"
            );
        }

        resolve_allowed_routes(current.as_ref(), &table, self.policy)
    }

    /// Returns the sidebar entries for the current session.
    pub async fn visible_navigation(&self) -> Vec<NavigationItem> {
        visible_navigation(&self.allowed_routes().await)
    }

    /// Fails unless the current session may open `route`.
    pub async fn require_route(&self, route: RouteKey) -> AppResult<SessionUser> {
        let Some(session) = self.current().await else {
            return Err(AppError::Unauthorized("please log in first".to_owned()));
        };

        if !self.allowed_routes().await.contains(&route) {
            return Err(AppError::Forbidden(format!(
                "'{route}' is not available for this account"
            )));
        }

        Ok(session)
    }

    /// Returns a snapshot of the role fallback table.
    pub async fn role_table(&self) -> RoleRouteTable {
        self.role_table.read().await.clone()
    }

    /// Replaces the routes granted to a role by the fallback table.
    ///
    /// The table lives in memory only; no backend endpoint stores it.
    pub async fn replace_role_routes(
        &self,
        role: &str,
        routes: impl IntoIterator<Item = RouteKey>,
    ) -> Capability {
        let routes: Vec<RouteKey> = routes.into_iter().collect();
        self.role_table.write().await.replace_routes(role, routes);
        info!(role, "role routes replaced");
        Capability::LocalOnly
    }

    async fn establish(&self, session: SessionUser) -> AppResult<()> {
        self.persist(&session).await?;
        self.client.set_bearer(session.token.clone()).await;
        info!(user = %session.email, "session established");
        *self.current.write().await = Some(session);
        Ok(())
    }

    async fn persist(&self, session: &SessionUser) -> AppResult<()> {
        let raw = serde_json::to_string(session)
            .map_err(|error| AppError::Internal(format!("failed to serialize session: {error}")))?;
        self.store.write(&raw).await
    }
}
