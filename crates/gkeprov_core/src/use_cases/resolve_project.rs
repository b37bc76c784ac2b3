use std::sync::Arc;

use tracing::{debug, info};

use crate::entities::ProjectId;
use crate::error::{Error, CREATE_PROJECT_GUIDANCE};
use crate::ports::{CloudIdentityProvider, Prompter};

fn single_project_notice(project: &ProjectId) -> String {
    format!(
        "Using the only Google Cloud Project {} to create the cluster",
        project
    )
}

/// Picks the project a service account is created in when none was given.
///
/// - no projects: ask whether to create one; either answer ends in an error,
///   automatic creation is not implemented yet
/// - one project: used without asking
/// - several projects: the user selects one
pub struct ResolveProjectUseCase<C, P>
where
    C: CloudIdentityProvider,
    P: Prompter,
{
    provider: Arc<C>,
    prompter: Arc<P>,
}

impl<C, P> ResolveProjectUseCase<C, P>
where
    C: CloudIdentityProvider,
    P: Prompter,
{
    pub fn new(provider: Arc<C>, prompter: Arc<P>) -> Self {
        Self { provider, prompter }
    }

    pub async fn execute(&self) -> Result<ProjectId, Error> {
        let existing = self.provider.list_projects().await?;
        debug!(count = existing.len(), "listed existing projects");

        let project_id = match existing.as_slice() {
            [] => {
                let create = self
                    .prompter
                    .confirm("No existing Google Projects exist, create one now?", true)?;
                let reason = if create {
                    "auto creating projects not yet implemented"
                } else {
                    "no Google Cloud project to create cluster in"
                };
                return Err(Error::ProjectResolution(format!(
                    "{reason}, {CREATE_PROJECT_GUIDANCE}"
                )));
            }
            [only] => {
                info!("{}", single_project_notice(only));
                only.as_str().to_string()
            }
            many => {
                let options: Vec<String> = many.iter().map(|p| p.as_str().to_string()).collect();
                self.prompter.select(
                    "Google Cloud Project:",
                    "Select a Google Project to create the cluster in",
                    &options,
                )?
            }
        };

        if project_id.is_empty() {
            return Err(Error::ProjectResolution(format!(
                "no Google Cloud project to create cluster in, {CREATE_PROJECT_GUIDANCE}"
            )));
        }

        ProjectId::new(project_id)
    }
}
