use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use complaintdesk_core::{AppError, AppResult};
use complaintdesk_domain::{Complaint, ComplaintSummary, ComplaintUpdate, Engineer, NewComplaint};

use crate::{ComplaintsRepository, LoadOutcome, MountToken};

#[cfg(test)]
mod tests;

/// Complaint list shared by the dashboard and registration screens.
#[derive(Clone)]
pub struct ComplaintStore {
    repository: ComplaintsRepository,
    complaints: Arc<RwLock<Vec<Complaint>>>,
}

impl ComplaintStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(repository: ComplaintsRepository) -> Self {
        Self {
            repository,
            complaints: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Fetches the complaints visible to `user_id` under `role_id`.
    ///
    /// Failures empty the list; results after unmount are discarded.
    pub async fn load(
        &self,
        token: &MountToken,
        user_id: &str,
        role_id: Option<&str>,
    ) -> LoadOutcome {
        let fetched = self.repository.list(user_id, role_id).await;

        if token.is_cancelled() {
            debug!("complaint load finished after unmount; discarding");
            return LoadOutcome::Discarded;
        }

        match fetched {
            Ok(complaints) => {
                *self.complaints.write().await = complaints;
                LoadOutcome::Loaded
            }
            Err(error) => {
                warn!(error = %error, "complaint load failed; resetting");
                self.complaints.write().await.clear();
                LoadOutcome::Reset {
                    error: error.user_message().to_owned(),
                }
            }
        }
    }

    /// Returns the current list, newest first.
    pub async fn complaints(&self) -> Vec<Complaint> {
        self.complaints.read().await.clone()
    }

    /// Returns one complaint.
    pub async fn get(&self, complaint_id: &str) -> AppResult<Complaint> {
        self.complaints
            .read()
            .await
            .iter()
            .find(|complaint| complaint.id == complaint_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("complaint '{complaint_id}' does not exist")))
    }

    /// Registers a complaint and prepends it.
    pub async fn add(&self, complaint: NewComplaint) -> AppResult<Complaint> {
        let created = self.repository.create(complaint).await?;
        info!(complaint_id = %created.id, "complaint registered");
        self.complaints.write().await.insert(0, created.clone());
        Ok(created)
    }

    /// Assigns an engineer remotely and reflects it locally without a re-fetch.
    pub async fn assign_engineer(
        &self,
        complaint_id: &str,
        engineer: &Engineer,
    ) -> AppResult<Complaint> {
        let existing = self.get(complaint_id).await?;
        let echoed = self
            .repository
            .assign_engineer(complaint_id, engineer.id.as_str())
            .await?;

        let mut assigned = echoed.unwrap_or(existing);
        assigned.assign(engineer.id.as_str(), engineer.name.as_str(), Utc::now());
        self.replace(assigned.clone()).await;
        info!(complaint_id, engineer_id = %engineer.id, "engineer assigned");
        Ok(assigned)
    }

    /// Applies a local edit. There is no backend update endpoint.
    pub async fn update(&self, complaint_id: &str, update: ComplaintUpdate) -> AppResult<Complaint> {
        let mut complaints = self.complaints.write().await;
        let Some(complaint) = complaints
            .iter_mut()
            .find(|complaint| complaint.id == complaint_id)
        else {
            return Err(AppError::NotFound(format!(
                "complaint '{complaint_id}' does not exist"
            )));
        };

        complaint.apply(update);
        Ok(complaint.clone())
    }

    /// Deletes a complaint remotely, then removes it from the list.
    pub async fn delete(&self, complaint_id: &str) -> AppResult<()> {
        self.get(complaint_id).await?;
        self.repository.delete(complaint_id).await?;
        self.complaints
            .write()
            .await
            .retain(|complaint| complaint.id != complaint_id);
        Ok(())
    }

    /// Dashboard counters for the current list.
    pub async fn summary(&self) -> ComplaintSummary {
        ComplaintSummary::from_complaints(&self.complaints.read().await)
    }

    async fn replace(&self, updated: Complaint) {
        let mut complaints = self.complaints.write().await;
        if let Some(slot) = complaints
            .iter_mut()
            .find(|complaint| complaint.id == updated.id)
        {
            *slot = updated;
        }
    }
}
