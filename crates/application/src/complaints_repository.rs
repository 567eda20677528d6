//! Complaint endpoints.

use complaintdesk_core::{AppError, AppResult};
use complaintdesk_domain::{Complaint, ComplaintStatus, NewComplaint};
use serde_json::{Value, json};

use crate::ApiClient;
use crate::endpoints::app;
use crate::wire::{WireRecord, parse_items, value_text};

#[cfg(test)]
mod tests;

/// Role used to scope the complaint list when the session has none.
pub const DEFAULT_LIST_ROLE: &str = "1";

/// Repository for the complaint endpoints.
#[derive(Clone)]
pub struct ComplaintsRepository {
    client: ApiClient,
}

impl ComplaintsRepository {
    /// Creates a repository over the shared client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists the complaints visible to a user under a role.
    pub async fn list(&self, user_id: &str, role_id: Option<&str>) -> AppResult<Vec<Complaint>> {
        let items = self
            .client
            .post_envelope(
                app::COMPLAINTS,
                json!({
                    "UserId": user_id,
                    "RoleId": role_id.unwrap_or(DEFAULT_LIST_ROLE),
                }),
            )
            .await?
            .into_items()?;

        Ok(parse_items(items, "complaint", complaint_from_wire))
    }

    /// Registers a complaint. The form must pass [`NewComplaint::validate`].
    pub async fn create(&self, complaint: NewComplaint) -> AppResult<Complaint> {
        complaint.validate()?;

        let data = self
            .client
            .post_envelope(
                app::CREATE_COMPLAINT,
                json!({
                    "customerId": complaint.customer_id,
                    "customerName": complaint.customer_name.trim(),
                    "mobileNumber": complaint.mobile_number.trim(),
                    "email": complaint.email.trim(),
                    "address": complaint.address.trim(),
                    "natureOfComplaint": complaint.nature_of_complaint.trim(),
                    "complaintDetails": complaint.details.trim(),
                }),
            )
            .await?
            .into_data()?;

        if let Ok(created) = complaint_from_wire(&data) {
            return Ok(created);
        }

        let id = value_text(&data).ok_or_else(|| {
            AppError::Rejected("backend did not return an id for the new complaint".to_owned())
        })?;
        Ok(Complaint {
            id,
            customer_id: complaint.customer_id,
            customer_name: complaint.customer_name.trim().to_owned(),
            mobile_number: complaint.mobile_number.trim().to_owned(),
            email: Some(complaint.email.trim().to_owned()),
            address: Some(complaint.address.trim().to_owned()),
            nature_of_complaint: complaint.nature_of_complaint.trim().to_owned(),
            details: complaint.details.trim().to_owned(),
            status: ComplaintStatus::Draft,
            engineer_id: None,
            assigned_engineer: None,
            assigned_at: None,
            created_at: Some(chrono::Utc::now()),
        })
    }

    /// Assigns an engineer. Returns the backend's copy when it echoes one.
    pub async fn assign_engineer(
        &self,
        complaint_id: &str,
        engineer_id: &str,
    ) -> AppResult<Option<Complaint>> {
        let data = self
            .client
            .post_envelope(
                app::ASSIGN_ENGINEER,
                json!({ "complaintId": complaint_id, "engineerId": engineer_id }),
            )
            .await?
            .into_data()?;

        Ok(complaint_from_wire(&data).ok())
    }

    /// Removes a complaint.
    pub async fn delete(&self, complaint_id: &str) -> AppResult<()> {
        self.client
            .post_envelope(app::DELETE_COMPLAINT, json!({ "complaintId": complaint_id }))
            .await?
            .into_data()?;
        Ok(())
    }
}

fn complaint_from_wire(value: &Value) -> AppResult<Complaint> {
    let record = WireRecord::from_value(value, "complaint")?;

    let status = match record.integer(&["statusId"]) {
        Some(id) => ComplaintStatus::from_id(id),
        None => record
            .text(&["status", "statusName"])
            .map(|name| ComplaintStatus::from_name(name.as_str()))
            .unwrap_or_default(),
    };

    Ok(Complaint {
        id: record.required_text(&["complaintId", "id"], "complaint")?,
        customer_id: record.text(&["customerId"]),
        customer_name: record.text(&["customerName", "name"]).unwrap_or_default(),
        mobile_number: record.text(&["mobileNumber", "mobile"]).unwrap_or_default(),
        email: record.text(&["email", "emailId"]),
        address: record.text(&["address"]),
        nature_of_complaint: record.text(&["natureOfComplaint"]).unwrap_or_default(),
        details: record
            .text(&["complaintDetails", "details"])
            .unwrap_or_default(),
        status,
        engineer_id: record.text(&["engineerId", "assignedEngineerId"]),
        assigned_engineer: record.text(&["assignedEngineer", "engineerName"]),
        assigned_at: record.timestamp(&["assignedAt", "assignedDate"]),
        created_at: record.timestamp(&["createdAt", "createdDate"]),
    })
}
