//! Adapters backed by the Google Cloud SDK (`gcloud`) command line
//!
//! Every cloud call shells out to `gcloud`, so the user's existing SDK
//! installation and credentials are reused.

mod login;
mod provider;

#[cfg(all(test, unix))]
mod fake;

use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use gkeprov_core::config::GcloudSettings;
use gkeprov_core::error::Error;
use tokio::process::Command;
use tracing::debug;

pub use login::GcloudLogin;
pub use provider::GcloudIdentityProvider;

/// Runs `gcloud` subcommands
#[derive(Debug, Clone)]
pub struct GcloudCli {
    binary: String,
    timeout: Option<Duration>,
}

impl GcloudCli {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_settings(settings: &GcloudSettings) -> Self {
        Self::new(settings.binary.clone())
            .with_timeout(settings.command_timeout_secs.map(Duration::from_secs))
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Run a non-interactive command and capture its stdout.
    ///
    /// A non-zero exit status becomes [`Error::Provider`] carrying stderr.
    pub async fn output(&self, args: &[&str]) -> Result<String, Error> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args).stdin(Stdio::null()).kill_on_drop(true);

        debug!(command = %self.describe(args), "running gcloud");

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| {
                    Error::Provider(format!(
                        "`{}` timed out after {}s",
                        self.describe(args),
                        limit.as_secs()
                    ))
                })?,
            None => cmd.output().await,
        }
        .map_err(|e| Error::Provider(format!("failed to run `{}`: {}", self.describe(args), e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Provider(format!(
                "`{}` failed ({}): {}",
                self.describe(args),
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run a command attached to the user's terminal. Never times out.
    pub async fn interactive(&self, args: &[&str]) -> std::io::Result<ExitStatus> {
        debug!(command = %self.describe(args), "running interactive gcloud");
        Command::new(&self.binary).args(args).status().await
    }

    fn describe(&self, args: &[&str]) -> String {
        let mut parts = Vec::with_capacity(args.len() + 1);
        parts.push(self.binary.as_str());
        parts.extend_from_slice(args);
        parts.join(" ")
    }
}
