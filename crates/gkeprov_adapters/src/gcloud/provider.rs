use std::path::{Path, PathBuf};

use async_trait::async_trait;
use gkeprov_core::config::GcloudSettings;
use gkeprov_core::entities::{ProjectId, ServiceAccountName};
use gkeprov_core::error::Error;
use gkeprov_core::ports::CloudIdentityProvider;
use serde::Deserialize;
use tokio::fs;
use tracing::{info, instrument};

use super::GcloudCli;

/// Permission needed to bind roles to a new service account
const SET_IAM_POLICY_PERMISSION: &str = "resourcemanager.projects.setIamPolicy";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectEntry {
    project_id: String,
}

#[derive(Debug, Deserialize)]
struct ServiceAccountEntry {
    email: String,
}

/// Parse `gcloud projects list --format=json` output, keeping gcloud's order
fn parse_project_ids(json: &str) -> Result<Vec<ProjectId>, Error> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }

    let entries: Vec<ProjectEntry> = serde_json::from_str(json)
        .map_err(|e| Error::Provider(format!("failed to parse project list: {}", e)))?;

    entries
        .into_iter()
        .filter(|e| !e.project_id.is_empty())
        .map(|e| ProjectId::new(e.project_id))
        .collect()
}

/// Whether `gcloud iam service-accounts list --format=json` output contains `email`
fn contains_account(json: &str, email: &str) -> Result<bool, Error> {
    if json.trim().is_empty() {
        return Ok(false);
    }

    let entries: Vec<ServiceAccountEntry> = serde_json::from_str(json)
        .map_err(|e| Error::Provider(format!("failed to parse service account list: {}", e)))?;

    Ok(entries.iter().any(|a| a.email.eq_ignore_ascii_case(email)))
}

/// [`CloudIdentityProvider`] that drives the `gcloud` CLI.
///
/// New accounts get every role in `roles` bound at project level. The key
/// is only downloaded when `<key_dir>/<name>.key.json` does not exist yet,
/// so repeated runs never issue a second key.
pub struct GcloudIdentityProvider {
    cli: GcloudCli,
    roles: Vec<String>,
}

impl GcloudIdentityProvider {
    pub fn new(cli: GcloudCli, roles: Vec<String>) -> Self {
        Self { cli, roles }
    }

    pub fn from_settings(settings: &GcloudSettings) -> Self {
        Self::new(GcloudCli::from_settings(settings), settings.roles.clone())
    }

    async fn service_account_exists(&self, email: &str, project: &ProjectId) -> Result<bool, Error> {
        let filter = format!("email:{}", email);
        let output = self
            .cli
            .output(&[
                "iam",
                "service-accounts",
                "list",
                "--project",
                project.as_str(),
                "--filter",
                &filter,
                "--format=json",
            ])
            .await?;
        contains_account(&output, email)
    }

    async fn has_permission(&self, permission: &str, project: &ProjectId) -> Result<bool, Error> {
        let resource = format!("//cloudresourcemanager.googleapis.com/projects/{}", project);
        let output = self
            .cli
            .output(&[
                "iam",
                "list-testable-permissions",
                &resource,
                "--filter",
                permission,
                "--format=json",
            ])
            .await?;
        Ok(output.contains(permission))
    }

    async fn create_service_account(
        &self,
        name: &ServiceAccountName,
        email: &str,
        project: &ProjectId,
    ) -> Result<(), Error> {
        if !self.has_permission(SET_IAM_POLICY_PERMISSION, project).await? {
            return Err(Error::Provider(format!(
                "user does not have the required permission '{}' to configure a service account",
                SET_IAM_POLICY_PERMISSION
            )));
        }

        info!(account = %name, "creating service account");
        self.cli
            .output(&[
                "iam",
                "service-accounts",
                "create",
                name.as_str(),
                "--project",
                project.as_str(),
                "--display-name",
                name.as_str(),
            ])
            .await?;

        let member = format!("serviceAccount:{}", email);
        for role in &self.roles {
            info!(%role, "assigning role");
            self.cli
                .output(&[
                    "projects",
                    "add-iam-policy-binding",
                    project.as_str(),
                    "--member",
                    &member,
                    "--role",
                    role,
                    "--project",
                    project.as_str(),
                ])
                .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl CloudIdentityProvider for GcloudIdentityProvider {
    #[instrument(skip(self))]
    async fn list_projects(&self) -> Result<Vec<ProjectId>, Error> {
        let output = self
            .cli
            .output(&["projects", "list", "--format=json"])
            .await?;
        parse_project_ids(&output)
    }

    #[instrument(skip(self, name, project, key_dir), fields(account = %name, project = %project))]
    async fn get_or_create_service_account(
        &self,
        name: &ServiceAccountName,
        project: &ProjectId,
        key_dir: &Path,
    ) -> Result<PathBuf, Error> {
        let email = name.email(project);

        if self.service_account_exists(&email, project).await? {
            info!("service account exists");
        } else {
            info!("service account not found, checking permission to create it");
            self.create_service_account(name, &email, project).await?;
        }

        fs::create_dir_all(key_dir).await?;

        let key_path = key_dir.join(name.key_file_name());
        if fs::try_exists(&key_path).await? {
            info!(path = %key_path.display(), "key already exists");
        } else {
            info!(path = %key_path.display(), "downloading service account key");
            let key_arg = key_path.to_string_lossy().into_owned();
            self.cli
                .output(&[
                    "iam",
                    "service-accounts",
                    "keys",
                    "create",
                    &key_arg,
                    "--iam-account",
                    &email,
                    "--project",
                    project.as_str(),
                ])
                .await?;
        }

        Ok(key_path)
    }
}
