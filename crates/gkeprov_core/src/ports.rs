use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::entities::{ProjectId, ServiceAccountName};
use crate::error::Error;

/// Cloud APIs for projects and service accounts.
#[async_trait]
pub trait CloudIdentityProvider: Send + Sync {
    /// List the projects visible to the authenticated user, in provider order
    async fn list_projects(&self) -> Result<Vec<ProjectId>, Error>;

    /// Ensure `name` exists in `project` and its key is written under `key_dir`.
    ///
    /// Must be idempotent per `(name, project)`: a repeated call returns the
    /// existing key path instead of creating a second account or key.
    async fn get_or_create_service_account(
        &self,
        name: &ServiceAccountName,
        project: &ProjectId,
        key_dir: &Path,
    ) -> Result<PathBuf, Error>;
}

/// Interactive authentication against the cloud provider
#[async_trait]
pub trait CloudLogin: Send + Sync {
    async fn login(&self) -> Result<(), Error>;
}

/// Validator for text input. `Err` carries the message shown to the user.
pub type InputValidator<'a> = &'a (dyn Fn(&str) -> Result<(), String> + Send + Sync);

/// Console prompts.
///
/// Implementations return [`Error::PromptAborted`] when the user cancels.
pub trait Prompter: Send + Sync {
    /// Ask for text, re-asking until `validator` accepts the answer.
    fn input(&self, message: &str, validator: InputValidator<'_>) -> Result<String, Error>;

    /// Pick exactly one of `options`.
    fn select(&self, message: &str, help: &str, options: &[String]) -> Result<String, Error>;

    /// Yes/no question.
    fn confirm(&self, message: &str, default: bool) -> Result<bool, Error>;
}
