use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::entities::{ProjectId, ServiceAccountFlags, ServiceAccountName};
use crate::error::Error;
use crate::ports::{CloudIdentityProvider, CloudLogin, Prompter};
use crate::use_cases::ResolveProjectUseCase;

/// Orchestrates provisioning of a service account key:
/// - optional login
/// - account name from flags or a validated prompt
/// - project from flags or [`ResolveProjectUseCase`]
/// - get-or-create of the account and its key file
pub struct CreateServiceAccountUseCase<L, C, P>
where
    L: CloudLogin,
    C: CloudIdentityProvider,
    P: Prompter,
{
    login: Arc<L>,
    provider: Arc<C>,
    prompter: Arc<P>,
    resolver: ResolveProjectUseCase<C, P>,
    key_dir: PathBuf,
}

impl<L, C, P> CreateServiceAccountUseCase<L, C, P>
where
    L: CloudLogin,
    C: CloudIdentityProvider,
    P: Prompter,
{
    pub fn new(login: Arc<L>, provider: Arc<C>, prompter: Arc<P>, key_dir: PathBuf) -> Self {
        let resolver = ResolveProjectUseCase::new(provider.clone(), prompter.clone());
        Self {
            login,
            provider,
            prompter,
            resolver,
            key_dir,
        }
    }

    /// Run the workflow, filling resolved values back into `flags`.
    ///
    /// Returns the path of the credential key file. Every failure ends the
    /// run; only the name prompt repeats on invalid input.
    pub async fn execute(&self, flags: &mut ServiceAccountFlags) -> Result<PathBuf, Error> {
        if flags.skip_login {
            debug!("skipping login");
        } else {
            self.login.login().await?;
        }

        let name = self.resolve_name(flags.name.as_deref())?;
        flags.name = Some(name.as_str().to_string());

        let project = match flags.project.as_deref() {
            Some(project) => ProjectId::new(project)?,
            None => self.resolver.execute().await?,
        };
        flags.project = Some(project.as_str().to_string());

        let path = self
            .provider
            .get_or_create_service_account(&name, &project, &self.key_dir)
            .await?;

        info!(account = %name, project = %project, path = %path.display(), "service account key ready");
        Ok(path)
    }

    fn resolve_name(&self, flag: Option<&str>) -> Result<ServiceAccountName, Error> {
        match flag {
            Some(name) => ServiceAccountName::parse(name),
            None => {
                let answer = self
                    .prompter
                    .input("Name for the service account", &ServiceAccountName::validate)?;
                ServiceAccountName::parse(answer)
            }
        }
    }
}
