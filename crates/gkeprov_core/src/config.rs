use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Roles bound to a freshly created service account.
pub const DEFAULT_SERVICE_ACCOUNT_ROLES: &[&str] = &[
    "roles/compute.instanceAdmin.v1",
    "roles/iam.serviceAccountActor",
    "roles/container.clusterAdmin",
    "roles/container.admin",
    "roles/container.developer",
    "roles/storage.objectAdmin",
    "roles/editor",
];

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub gcloud: GcloudSettings,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GcloudSettings {
    /// `gcloud` executable, resolved through `PATH` when not absolute
    pub binary: String,
    /// Directory for key files; the home directory when unset
    pub key_dir: Option<PathBuf>,
    pub roles: Vec<String>,
    /// Upper bound for each non-interactive `gcloud` call; unbounded when unset
    pub command_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gcloud: GcloudSettings::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for GcloudSettings {
    fn default() -> Self {
        Self {
            binary: "gcloud".to_string(),
            key_dir: None,
            roles: DEFAULT_SERVICE_ACCOUNT_ROLES
                .iter()
                .map(|r| r.to_string())
                .collect(),
            command_timeout_secs: None,
        }
    }
}
