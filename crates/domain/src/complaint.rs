//! Complaint lifecycle types.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use complaintdesk_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Complaint lifecycle status.
///
/// Wire values carry both a numeric id and a human name; unknown values
/// fall back to [`ComplaintStatus::Draft`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComplaintStatus {
    /// Registered, not yet worked on.
    #[default]
    Draft,
    /// Engineer working on a resolution.
    ResolutionPending,
    /// Closed.
    Completed,
}

impl ComplaintStatus {
    /// Returns all statuses in lifecycle order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[ComplaintStatus] = &[
            ComplaintStatus::Draft,
            ComplaintStatus::ResolutionPending,
            ComplaintStatus::Completed,
        ];

        ALL
    }

    /// Returns the numeric status id.
    #[must_use]
    pub fn id(&self) -> i64 {
        match self {
            Self::Draft => 1,
            Self::ResolutionPending => 2,
            Self::Completed => 3,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::ResolutionPending => "Resolution Pending",
            Self::Completed => "Completed",
        }
    }

    /// Maps a numeric status id; ids outside `1..=3` map to `Draft`.
    #[must_use]
    pub fn from_id(id: i64) -> Self {
        match id {
            2 => Self::ResolutionPending,
            3 => Self::Completed,
            _ => Self::Draft,
        }
    }

    /// Maps a display name or stringified id; unknown values map to `Draft`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if let Ok(id) = name.parse::<i64>() {
            return Self::from_id(id);
        }

        Self::all()
            .iter()
            .copied()
            .find(|status| status.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }
}

impl Display for ComplaintStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Complaint as held in client state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    /// Backend identifier, e.g. `CFT-0001`.
    pub id: String,
    /// Customer reference.
    pub customer_id: Option<String>,
    /// Customer name snapshot.
    pub customer_name: String,
    /// Contact mobile snapshot.
    pub mobile_number: String,
    /// Contact email snapshot.
    pub email: Option<String>,
    /// Address snapshot.
    pub address: Option<String>,
    /// Complaint category.
    pub nature_of_complaint: String,
    /// Free-text description.
    pub details: String,
    /// Lifecycle status.
    pub status: ComplaintStatus,
    /// Assigned engineer id.
    pub engineer_id: Option<String>,
    /// Assigned engineer name.
    pub assigned_engineer: Option<String>,
    /// When the engineer was assigned.
    pub assigned_at: Option<DateTime<Utc>>,
    /// When the complaint was registered.
    pub created_at: Option<DateTime<Utc>>,
}

impl Complaint {
    /// Records an engineer assignment on the local copy.
    pub fn assign(&mut self, engineer_id: &str, engineer_name: &str, at: DateTime<Utc>) {
        self.engineer_id = Some(engineer_id.to_owned());
        self.assigned_engineer = Some(engineer_name.to_owned());
        self.assigned_at = Some(at);
    }

    /// Applies a local edit.
    pub fn apply(&mut self, update: ComplaintUpdate) {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(nature) = update.nature_of_complaint {
            self.nature_of_complaint = nature;
        }
        if let Some(details) = update.details {
            self.details = details;
        }
    }
}

/// Registration form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewComplaint {
    /// Selected customer, if picked from the customer master.
    pub customer_id: Option<String>,
    /// Customer name.
    pub customer_name: String,
    /// Contact mobile.
    pub mobile_number: String,
    /// Contact email.
    pub email: String,
    /// Address.
    pub address: String,
    /// Complaint category.
    pub nature_of_complaint: String,
    /// Description.
    pub details: String,
}

impl NewComplaint {
    /// Ensures every form field is filled in.
    pub fn validate(&self) -> AppResult<()> {
        let fields = [
            &self.customer_name,
            &self.mobile_number,
            &self.email,
            &self.address,
            &self.nature_of_complaint,
            &self.details,
        ];

        if fields.iter().any(|value| value.trim().is_empty()) {
            return Err(AppError::Validation("Please fill in all fields".to_owned()));
        }

        Ok(())
    }
}

/// Local edit of an existing complaint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplaintUpdate {
    /// New status.
    pub status: Option<ComplaintStatus>,
    /// New category.
    pub nature_of_complaint: Option<String>,
    /// New description.
    pub details: Option<String>,
}

/// Dashboard counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComplaintSummary {
    /// All complaints.
    pub total: usize,
    /// Complaints in `Draft`.
    pub draft: usize,
    /// Complaints in `Resolution Pending`.
    pub resolution_pending: usize,
    /// Complaints in `Completed`.
    pub completed: usize,
    /// Complaints without an engineer.
    pub unassigned: usize,
}

impl ComplaintSummary {
    /// Counts complaints per status.
    #[must_use]
    pub fn from_complaints(complaints: &[Complaint]) -> Self {
        complaints
            .iter()
            .fold(Self::default(), |mut summary, complaint| {
                summary.total += 1;
                match complaint.status {
                    ComplaintStatus::Draft => summary.draft += 1,
                    ComplaintStatus::ResolutionPending => summary.resolution_pending += 1,
                    ComplaintStatus::Completed => summary.completed += 1,
                }
                if complaint.engineer_id.is_none() {
                    summary.unassigned += 1;
                }
                summary
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{Complaint, ComplaintStatus, ComplaintSummary, NewComplaint};

    #[test]
    fn status_id_name_roundtrip_is_lossless() {
        for (id, name) in [(1, "Draft"), (2, "Resolution Pending"), (3, "Completed")] {
            let status = ComplaintStatus::from_id(id);
            assert_eq!(status.name(), name);
            assert_eq!(ComplaintStatus::from_name(status.name()).id(), id);
        }
    }

    #[test]
    fn unknown_status_ids_default_to_draft() {
        for id in [0, 4, -1, 99] {
            let status = ComplaintStatus::from_id(id);
            assert_eq!(status, ComplaintStatus::Draft);
            assert_eq!(status.id(), 1);
        }
    }

    #[test]
    fn unknown_status_names_default_to_draft() {
        assert_eq!(ComplaintStatus::from_name("Open"), ComplaintStatus::Draft);
        assert_eq!(ComplaintStatus::from_name("Assigned"), ComplaintStatus::Draft);
        assert_eq!(
            ComplaintStatus::from_name("resolution pending"),
            ComplaintStatus::ResolutionPending
        );
        assert_eq!(ComplaintStatus::from_name("3"), ComplaintStatus::Completed);
    }

    #[test]
    fn new_complaint_requires_every_field() {
        let complaint = NewComplaint {
            customer_name: "Acme Corp".to_owned(),
            mobile_number: "9123456780".to_owned(),
            email: "ops@acme.com".to_owned(),
            address: "Acme Park".to_owned(),
            nature_of_complaint: "Plumbing".to_owned(),
            details: " ".to_owned(),
            customer_id: None,
        };
        assert!(complaint.validate().is_err());
    }

    #[test]
    fn summary_counts_statuses_and_unassigned() {
        let base = Complaint {
            id: "CFT-0001".to_owned(),
            customer_id: None,
            customer_name: "Acme Corp".to_owned(),
            mobile_number: "9123456780".to_owned(),
            email: None,
            address: None,
            nature_of_complaint: "Plumbing".to_owned(),
            details: "Leak".to_owned(),
            status: ComplaintStatus::Draft,
            engineer_id: None,
            assigned_engineer: None,
            assigned_at: None,
            created_at: None,
        };
        let mut completed = base.clone();
        completed.status = ComplaintStatus::Completed;
        completed.engineer_id = Some("501".to_owned());

        let summary = ComplaintSummary::from_complaints(&[base, completed]);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.draft, 1);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.unassigned, 1);
    }
}
