use std::sync::Arc;

use tokio::sync::Mutex;

use complaintdesk_domain::{NoPermissionPolicy, RoleRouteTable, SessionUser};

use crate::{
    ApiClient, ComplaintStore, ComplaintsRepository, LoadOutcome, MasterDataStore,
    MastersRepository, MountGuard, SessionService, SessionStore,
};

/// What [`AdminWorkspace::open`] found and loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceOpened {
    /// Hydrated session, if any.
    pub session: Option<SessionUser>,
    /// Master data load result; `None` when anonymous.
    pub masters: Option<LoadOutcome>,
    /// Complaint load result; `None` when anonymous.
    pub complaints: Option<LoadOutcome>,
}

/// Application state container bundling the session and both stores.
#[derive(Clone)]
pub struct AdminWorkspace {
    session: SessionService,
    masters: MasterDataStore,
    complaints: ComplaintStore,
    mounted: Arc<Mutex<Option<MountGuard>>>,
}

impl AdminWorkspace {
    /// Wires the services over one shared client.
    #[must_use]
    pub fn new(
        client: ApiClient,
        session_store: Arc<dyn SessionStore>,
        role_table: RoleRouteTable,
        policy: NoPermissionPolicy,
    ) -> Self {
        Self {
            session: SessionService::new(client.clone(), session_store, role_table, policy),
            masters: MasterDataStore::new(MastersRepository::new(client.clone())),
            complaints: ComplaintStore::new(ComplaintsRepository::new(client)),
            mounted: Arc::new(Mutex::new(None)),
        }
    }

    /// Hydrates the session and, when authenticated, mounts and loads both stores.
    pub async fn open(&self) -> WorkspaceOpened {
        let session = self.session.initialize().await;
        let Some(user) = session.clone() else {
            return WorkspaceOpened {
                session,
                masters: None,
                complaints: None,
            };
        };

        let guard = MountGuard::mount();
        let token = guard.token();
        if let Some(previous) = self.mounted.lock().await.replace(guard) {
            previous.unmount();
        }

        let (masters, complaints) = tokio::join!(
            self.masters.load(&token),
            self.complaints
                .load(&token, user.id.as_str(), user.primary_role()),
        );

        WorkspaceOpened {
            session,
            masters: Some(masters),
            complaints: Some(complaints),
        }
    }

    /// Unmounts; loads still in flight are discarded.
    pub async fn close(&self) {
        if let Some(guard) = self.mounted.lock().await.take() {
            guard.unmount();
        }
    }

    /// Session service.
    #[must_use]
    pub fn session(&self) -> &SessionService {
        &self.session
    }

    /// Master data store.
    #[must_use]
    pub fn masters(&self) -> &MasterDataStore {
        &self.masters
    }

    /// Complaint store.
    #[must_use]
    pub fn complaints(&self) -> &ComplaintStore {
        &self.complaints
    }
}
