use async_trait::async_trait;
use chrono::Utc;
use complaintdesk_application::endpoints::app;
use complaintdesk_application::proxy_service::{fallback, routes};
use complaintdesk_application::{ApiRequest, ApiTransport};
use complaintdesk_core::{AppError, AppResult};
use serde_json::{Map, Value, json};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;


/// Offline stand-in for the proxy surface.
///
/// Answers every application path from memory with the same envelopes the
/// proxy serves, so the console runs without a backend. Created records get
/// fresh UUID ids.
#[derive(Debug, Default)]
pub struct InMemoryApiTransport {
    users: RwLock<Vec<Value>>,
    roles: RwLock<Vec<Value>>,
    permissions: RwLock<Vec<Value>>,
    user_roles: RwLock<Vec<Value>>,
    role_permissions: RwLock<Vec<Value>>,
    customers: RwLock<Vec<Value>>,
    engineers: RwLock<Vec<Value>>,
    natures: RwLock<Vec<Value>>,
    complaints: RwLock<Vec<Value>>,
}

#[derive(Debug, Clone, Copy)]
enum MasterCollection {
    Customers,
    Engineers,
    Users,
}

impl MasterCollection {
    fn id_key(self) -> &'static str {
        match self {
            Self::Customers => "customerId",
            Self::Engineers => "engineerId",
            Self::Users => "userId",
        }
    }
}

impl InMemoryApiTransport {
    /// Creates an empty transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport seeded with the canned proxy payloads.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            users: RwLock::new(seed(&routes::USERS)),
            roles: RwLock::new(seed(&routes::ROLES)),
            permissions: RwLock::new(seed(&routes::PERMISSIONS)),
            user_roles: RwLock::new(seed(&routes::USER_ROLES)),
            role_permissions: RwLock::new(seed(&routes::ROLE_PERMISSIONS)),
            customers: RwLock::new(seed(&routes::CUSTOMERS)),
            engineers: RwLock::new(seed(&routes::ENGINEERS)),
            natures: RwLock::new(seed(&routes::NATURE_OF_COMPLAINT)),
            complaints: RwLock::new(seed(&routes::COMPLAINTS)),
        }
    }

    fn collection(&self, collection: MasterCollection) -> &RwLock<Vec<Value>> {
        match collection {
            MasterCollection::Customers => &self.customers,
            MasterCollection::Engineers => &self.engineers,
            MasterCollection::Users => &self.users,
        }
    }

    async fn register(&self, body: &Value) -> Value {
        let (Some(name), Some(email), Some(_)) = (
            text(body, &["name"]),
            text(body, &["emailId", "email"]),
            text(body, &["password"]),
        ) else {
            return rejected("Name, email and password are required");
        };

        let mut users = self.users.write().await;
        let taken = users.iter().any(|user| {
            text(user, &["emailId", "email"])
                .is_some_and(|existing| existing.eq_ignore_ascii_case(email.as_str()))
        });
        if taken {
            return rejected("Email already registered");
        }

        let user_id = Uuid::new_v4().to_string();
        users.insert(
            0,
            json!({
                "userId": user_id,
                "name": name,
                "emailId": email,
                "mobileNumber": body.get("mobileNumber").cloned().unwrap_or(Value::Null),
                "address": body.get("address").cloned().unwrap_or(Value::Null),
            }),
        );
        self.user_roles
            .write()
            .await
            .push(json!({ "userId": user_id, "roleId": 3 }));

        json!({
            "success": true,
            "message": "Registered",
            "data": {
                "userId": user_id,
                "name": name,
                "emailId": email,
                "roles": ["3"],
                "token": Uuid::new_v4().to_string(),
            }
        })
    }

    async fn save_master(&self, collection: MasterCollection, body: &Value) -> Value {
        let id_key = collection.id_key();
        let existing_id = body
            .get("id")
            .and_then(id_text)
            .filter(|id| id != "0");
        let active = body.get("IsActive").and_then(Value::as_bool).unwrap_or(true);
        let mut records = self.collection(collection).write().await;

        let Some(id) = existing_id else {
            let record = master_record(body, id_key, Uuid::new_v4().to_string());
            records.insert(0, record.clone());
            return saved(record);
        };

        let Some(position) = records
            .iter()
            .position(|record| record.get(id_key).and_then(id_text).as_deref() == Some(id.as_str()))
        else {
            return rejected("Record not found");
        };

        if !active {
            records.remove(position);
            return json!({ "success": true, "message": "Deleted", "data": null });
        }

        let record = master_record(body, id_key, id);
        records[position] = record.clone();
        saved(record)
    }

    async fn permissions_by_role(&self, body: &Value) -> Value {
        let role_id = body.get("RoleId").and_then(id_text);
        let matching: Vec<Value> = self
            .role_permissions
            .read()
            .await
            .iter()
            .filter(|entry| entry.get("roleId").and_then(id_text) == role_id)
            .cloned()
            .collect();
        listing(matching)
    }

    async fn save_role_permissions(&self, body: &Value) -> Value {
        let Some(role_id) = body.get("RoleId").and_then(id_text) else {
            return rejected("RoleId is required");
        };
        let granted = body
            .get("Permissions")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|entry| entry.get("IsActive").and_then(Value::as_bool).unwrap_or(true))
                    .filter_map(|entry| entry.get("PermissionId").and_then(id_text))
                    .map(|permission| json!({ "roleId": role_id, "permissionKey": permission }))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let mut entries = self.role_permissions.write().await;
        entries.retain(|entry| {
            entry.get("roleId").and_then(id_text).as_deref() != Some(role_id.as_str())
        });
        entries.extend(granted);
        json!({ "success": true, "message": "Permissions saved" })
    }

    async fn create_complaint(&self, body: &Value) -> Value {
        let mut record = body.as_object().cloned().unwrap_or_default();
        record.insert(
            "complaintId".to_owned(),
            Value::String(Uuid::new_v4().to_string()),
        );
        record.insert("statusId".to_owned(), json!(1));
        record.insert("status".to_owned(), json!("Draft"));
        record.insert("createdAt".to_owned(), json!(Utc::now().to_rfc3339()));
        let record = Value::Object(record);

        self.complaints.write().await.insert(0, record.clone());
        json!({ "success": true, "message": "Complaint registered", "data": record })
    }

    async fn assign_engineer(&self, body: &Value) -> Value {
        let complaint_id = body.get("complaintId").and_then(id_text);
        let engineer_id = body.get("engineerId").cloned().unwrap_or(Value::Null);
        let mut complaints = self.complaints.write().await;

        let Some(complaint) = complaints
            .iter_mut()
            .find(|complaint| complaint.get("complaintId").and_then(id_text) == complaint_id)
        else {
            return rejected("Complaint not found");
        };

        if let Some(fields) = complaint.as_object_mut() {
            fields.remove("assignedEngineerId");
            fields.insert("engineerId".to_owned(), engineer_id);
        }
        saved(complaint.clone())
    }

    async fn delete_complaint(&self, body: &Value) -> Value {
        let complaint_id = body.get("complaintId").and_then(id_text);
        let mut complaints = self.complaints.write().await;
        let before = complaints.len();
        complaints.retain(|complaint| complaint.get("complaintId").and_then(id_text) != complaint_id);

        if complaints.len() == before {
            rejected("Complaint not found")
        } else {
            json!({ "success": true, "message": "Complaint deleted", "data": null })
        }
    }
}

#[async_trait]
impl ApiTransport for InMemoryApiTransport {
    async fn send(&self, request: ApiRequest) -> AppResult<Option<Value>> {
        debug!(method = request.method.as_str(), path = %request.path, "mock api request");
        let body = request.body.unwrap_or(Value::Null);

        let response = match request.path.as_str() {
            app::LOGIN => login(&body),
            app::REGISTER => self.register(&body).await,
            app::USERS => listing(self.users.read().await.clone()),
            app::ROLES => listing(self.roles.read().await.clone()),
            app::PERMISSIONS => listing(self.permissions.read().await.clone()),
            app::USER_ROLES => listing(self.user_roles.read().await.clone()),
            app::ROLE_PERMISSIONS => listing(self.role_permissions.read().await.clone()),
            app::PERMISSIONS_BY_ROLE => self.permissions_by_role(&body).await,
            app::SAVE_ROLE_PERMISSIONS => self.save_role_permissions(&body).await,
            app::CUSTOMERS => listing(self.customers.read().await.clone()),
            app::SAVE_CUSTOMER => self.save_master(MasterCollection::Customers, &body).await,
            app::ENGINEERS => listing(self.engineers.read().await.clone()),
            app::SAVE_ENGINEER => self.save_master(MasterCollection::Engineers, &body).await,
            app::SAVE_USER => self.save_master(MasterCollection::Users, &body).await,
            app::NATURE_OF_COMPLAINT => listing(self.natures.read().await.clone()),
            app::COMPLAINTS => listing(self.complaints.read().await.clone()),
            app::CREATE_COMPLAINT => self.create_complaint(&body).await,
            app::ASSIGN_ENGINEER => self.assign_engineer(&body).await,
            app::DELETE_COMPLAINT => self.delete_complaint(&body).await,
            _ => {
                return Err(AppError::Upstream {
                    status: 404,
                    message: "HTTP 404".to_owned(),
                });
            }
        };

        Ok(Some(response))
    }
}

fn login(body: &Value) -> Value {
    let email = text(body, &["email", "emailId", "Email"]);
    let password = text(body, &["password", "Password"]);
    match (email, password) {
        (Some(email), Some(_)) => fallback::demo_login(email.as_str()),
        _ => rejected("Invalid credentials"),
    }
}

fn seed(route: &routes::ProxyRoute) -> Vec<Value> {
    route
        .fallback()
        .get("data")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

fn listing(items: Vec<Value>) -> Value {
    json!({ "success": true, "data": items })
}

fn saved(record: Value) -> Value {
    json!({ "success": true, "message": "Saved", "data": record })
}

fn rejected(message: &str) -> Value {
    json!({ "success": false, "message": message, "data": null })
}

fn master_record(body: &Value, id_key: &str, id: String) -> Value {
    let mut record: Map<String, Value> = body
        .as_object()
        .map(|fields| {
            fields
                .iter()
                .filter(|(key, _)| !matches!(key.as_str(), "id" | "IsActive"))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default();
    record.insert(id_key.to_owned(), Value::String(id));
    Value::Object(record)
}

fn text(body: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        body.get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    })
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_owned()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
