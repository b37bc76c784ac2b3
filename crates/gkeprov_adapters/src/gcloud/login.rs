use async_trait::async_trait;
use gkeprov_core::error::Error;
use gkeprov_core::ports::CloudLogin;
use tracing::{info, instrument};

use super::GcloudCli;

/// Browser based `gcloud auth login`
pub struct GcloudLogin {
    cli: GcloudCli,
}

impl GcloudLogin {
    pub fn new(cli: GcloudCli) -> Self {
        Self { cli }
    }
}

#[async_trait]
impl CloudLogin for GcloudLogin {
    #[instrument(skip(self))]
    async fn login(&self) -> Result<(), Error> {
        info!("logging in with gcloud");

        let status = self
            .cli
            .interactive(&["auth", "login", "--brief"])
            .await
            .map_err(|e| Error::Login(format!("failed to run {}: {}", self.cli.binary(), e)))?;

        if !status.success() {
            return Err(Error::Login(format!(
                "`{} auth login` exited with {}",
                self.cli.binary(),
                status
            )));
        }

        Ok(())
    }
}
