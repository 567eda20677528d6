use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use complaintdesk_domain::{
    ComplaintStatus, CustomerDraft, EngineerDraft, MasterUserDraft, NoPermissionPolicy, RouteKey,
};

/// Complaint desk admin console.
#[derive(Parser, Debug)]
#[command(name = "complaintdesk", about = "Complaint desk admin console", version)]
pub struct Cli {
    /// Base URL of the complaint desk proxy.
    #[arg(
        long,
        env = "COMPLAINTDESK_API_URL",
        default_value = "http://127.0.0.1:3000",
        global = true
    )]
    pub api_url: String,

    /// File holding the stored session.
    #[arg(
        long,
        env = "COMPLAINTDESK_SESSION_FILE",
        default_value = ".complaintdesk/session.json",
        global = true
    )]
    pub session_file: PathBuf,

    /// Per-request timeout in milliseconds.
    #[arg(
        long,
        env = "COMPLAINTDESK_TIMEOUT_MS",
        default_value_t = 10_000,
        global = true
    )]
    pub timeout_ms: u64,

    /// What a session without permission names may open: role-table, all-routes or deny.
    #[arg(
        long,
        env = "COMPLAINTDESK_NO_PERMISSION_POLICY",
        default_value = "role-table",
        global = true
    )]
    pub no_permission_policy: NoPermissionPolicy,

    /// Serve every request from the in-memory mock API.
    #[arg(long, env = "COMPLAINTDESK_MOCK", global = true)]
    pub mock: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Log in and store the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the stored session.
    Logout,
    /// Show the current session.
    Whoami,
    /// List the screens this account may open.
    Menu,
    /// Show or edit the profile kept in the session.
    Profile(ProfileArgs),
    /// Create an account and log it in.
    Register(RegisterArgs),
    /// Complaint counters.
    Dashboard,
    /// Complaint screens.
    Complaints {
        #[command(subcommand)]
        action: ComplaintAction,
    },
    /// Customer master.
    Customers {
        #[command(subcommand)]
        action: MasterAction,
    },
    /// Engineer master.
    Engineers {
        #[command(subcommand)]
        action: MasterAction,
    },
    /// User master.
    Users {
        #[command(subcommand)]
        action: MasterAction,
    },
    /// List roles.
    Roles,
    /// List permission definitions.
    Permissions,
    /// Role to permission mapping.
    RolePermissions {
        #[command(subcommand)]
        action: RolePermissionAction,
    },
    /// User to role mapping.
    UserRoles {
        #[command(subcommand)]
        action: UserRoleAction,
    },
    /// Which master operations reach the backend.
    Capabilities,
}

impl Command {
    /// Screen guarding this command; `None` for session commands.
    pub fn required_route(&self) -> Option<RouteKey> {
        match self {
            Self::Login { .. }
            | Self::Logout
            | Self::Whoami
            | Self::Menu
            | Self::Register(_)
            | Self::Capabilities => None,
            Self::Profile(_) => Some(RouteKey::Profile),
            Self::Dashboard => Some(RouteKey::Dashboard),
            Self::Complaints {
                action: ComplaintAction::Create(_),
            } => Some(RouteKey::RegisterComplaint),
            Self::Complaints { .. } => Some(RouteKey::Complaints),
            Self::Customers { .. } => Some(RouteKey::Customers),
            Self::Engineers { .. } => Some(RouteKey::Engineers),
            Self::Users { .. } => Some(RouteKey::Users),
            Self::Roles | Self::UserRoles { .. } => Some(RouteKey::RoleMapping),
            Self::Permissions | Self::RolePermissions { .. } => Some(RouteKey::PermissionMapping),
        }
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub mobile: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
}

impl ProfileArgs {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long, default_value = "")]
    pub mobile: String,
    #[arg(long, default_value = "")]
    pub address: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ComplaintAction {
    /// List complaints visible to the current role.
    List,
    /// Register a complaint.
    Create(NewComplaintArgs),
    /// Assign an engineer.
    Assign {
        complaint_id: String,
        engineer_id: String,
    },
    /// Edit a complaint locally.
    Update {
        complaint_id: String,
        #[arg(long, value_parser = parse_status)]
        status: Option<ComplaintStatus>,
        #[arg(long)]
        nature: Option<String>,
        #[arg(long)]
        details: Option<String>,
    },
    /// Delete a complaint.
    Delete { complaint_id: String },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct NewComplaintArgs {
    /// Existing customer id.
    #[arg(long)]
    pub customer_id: Option<String>,
    #[arg(long)]
    pub customer_name: String,
    #[arg(long)]
    pub mobile: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub nature: String,
    #[arg(long)]
    pub details: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum MasterAction {
    /// List records.
    List,
    /// Create a record.
    Add(MasterArgs),
    /// Replace a record.
    Update {
        id: String,
        #[command(flatten)]
        fields: MasterArgs,
    },
    /// Delete a record.
    Delete { id: String },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub mobile: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
}

impl MasterArgs {
    pub fn customer(self) -> CustomerDraft {
        CustomerDraft {
            name: self.name,
            mobile_number: self.mobile.unwrap_or_default(),
            email: self.email,
            address: self.address,
        }
    }

    pub fn engineer(self) -> EngineerDraft {
        EngineerDraft {
            name: self.name,
            mobile_number: self.mobile.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            address: self.address,
        }
    }

    pub fn user(self) -> MasterUserDraft {
        MasterUserDraft {
            name: self.name,
            email: self.email.unwrap_or_default(),
            mobile_number: self.mobile,
            address: self.address,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RolePermissionAction {
    /// Show the permissions of one role.
    Show { role_id: String },
    /// Replace the backend permission ids of one role.
    Save {
        role_id: String,
        permission_ids: Vec<String>,
    },
    /// Replace the screens one role opens when a session carries no
    /// permission names. Kept for this console process only.
    Routes {
        role: String,
        #[arg(required = true, value_parser = parse_route)]
        routes: Vec<RouteKey>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum UserRoleAction {
    /// Replace the roles of one user.
    Assign {
        user_id: String,
        #[arg(required = true)]
        role_ids: Vec<String>,
    },
}

/// Accepts a route key (`role-mapping`) or a permission-style name (`RoleMapping`).
fn parse_route(value: &str) -> Result<RouteKey, String> {
    RouteKey::from_permission_name(value).ok_or_else(|| {
        let known: Vec<&str> = RouteKey::all().iter().map(RouteKey::as_str).collect();
        format!("unknown screen '{value}'; expected one of {}", known.join(", "))
    })
}

/// Accepts a status name or id; unlike wire values, unknown input is refused.
fn parse_status(value: &str) -> Result<ComplaintStatus, String> {
    let trimmed = value.trim();
    ComplaintStatus::all()
        .iter()
        .copied()
        .find(|status| {
            status.name().eq_ignore_ascii_case(trimmed)
                || status.id().to_string() == trimmed
                || status.name().replace(' ', "-").eq_ignore_ascii_case(trimmed)
        })
        .ok_or_else(|| {
            format!("unknown status '{value}'; expected draft, resolution-pending or completed")
        })
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use complaintdesk_domain::{ComplaintStatus, NoPermissionPolicy, RouteKey};

    use super::{Cli, Command, ComplaintAction, MasterAction, RolePermissionAction};

    fn parse(args: &[&str]) -> Cli {
        let Ok(cli) = Cli::try_parse_from(args) else {
            panic!("arguments must parse: {args:?}");
        };
        cli
    }

    #[test]
    fn global_options_have_defaults() {
        let cli = parse(&["complaintdesk", "whoami"]);

        assert_eq!(cli.timeout_ms, 10_000);
        assert_eq!(cli.no_permission_policy, NoPermissionPolicy::RoleTable);
        assert!(!cli.mock);
        assert_eq!(cli.command, Command::Whoami);
    }

    #[test]
    fn complaint_update_accepts_status_names_and_ids() {
        for status in ["resolution-pending", "Resolution Pending", "2"] {
            let cli = parse(&[
                "complaintdesk",
                "complaints",
                "update",
                "CFT-0001",
                "--status",
                status,
            ]);
            assert!(matches!(
                cli.command,
                Command::Complaints {
                    action: ComplaintAction::Update {
                        status: Some(ComplaintStatus::ResolutionPending),
                        ..
                    }
                }
            ));
        }

        let refused = Cli::try_parse_from([
            "complaintdesk",
            "complaints",
            "update",
            "CFT-0001",
            "--status",
            "Open",
        ]);
        assert!(refused.is_err());
    }

    #[test]
    fn commands_are_gated_by_their_screen() {
        let create = parse(&[
            "complaintdesk",
            "complaints",
            "create",
            "--customer-name",
            "Acme Corp",
            "--mobile",
            "9123456780",
            "--email",
            "ops@acme.com",
            "--address",
            "Acme Park",
            "--nature",
            "Electrical",
            "--details",
            "Sparks",
        ]);
        assert_eq!(create.command.required_route(), Some(RouteKey::RegisterComplaint));

        let users = parse(&["complaintdesk", "users", "delete", "3"]);
        assert_eq!(
            users.command,
            Command::Users {
                action: MasterAction::Delete { id: "3".to_owned() }
            }
        );
        assert_eq!(users.command.required_route(), Some(RouteKey::Users));

        let routes = parse(&[
            "complaintdesk",
            "role-permissions",
            "routes",
            "CSR",
            "customers",
            "RoleMapping",
        ]);
        assert_eq!(
            routes.command,
            Command::RolePermissions {
                action: RolePermissionAction::Routes {
                    role: "CSR".to_owned(),
                    routes: vec![RouteKey::Customers, RouteKey::RoleMapping],
                }
            }
        );
        assert!(
            Cli::try_parse_from(["complaintdesk", "role-permissions", "routes", "CSR", "billing"])
                .is_err()
        );

        let policy = parse(&["complaintdesk", "--no-permission-policy", "deny", "menu"]);
        assert_eq!(policy.no_permission_policy, NoPermissionPolicy::Deny);
        assert_eq!(policy.command.required_route(), None);
    }
}
