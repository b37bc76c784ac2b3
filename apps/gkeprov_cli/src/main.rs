mod prompter;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use gkeprov_adapters::{configuration, paths, telemetry};
use gkeprov_adapters::{GcloudCli, GcloudIdentityProvider, GcloudLogin};
use gkeprov_core::entities::ServiceAccountFlags;
use gkeprov_core::use_cases::CreateServiceAccountUseCase;
use tracing::error;

use crate::prompter::DialoguerPrompter;

/// Creates a GKE service account and downloads its key
///
/// Examples:
///
///   gkeprov
///
///   # to specify the options via flags
///   gkeprov --name my-service-account --project my-gke-project
#[derive(Parser, Debug)]
#[command(author, version, verbatim_doc_comment)]
struct Cli {
    /// The name of the service account to create
    #[arg(short, long)]
    name: Option<String>,

    /// The GCP project to create the service account in
    #[arg(short, long)]
    project: Option<String>,

    /// Skip Google auth if already logged in via gcloud auth
    #[arg(long, default_value = "false")]
    skip_login: bool,
}

impl Cli {
    fn into_flags(self) -> ServiceAccountFlags {
        ServiceAccountFlags::new(self.name, self.project, self.skip_login)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = configuration::get_configuration().context("configuration loading failed")?;

    let _guard = telemetry::init_subscriber("gkeprov", &settings.log_level);

    let key_dir = paths::key_directory(&settings.gcloud)?;

    let use_case = CreateServiceAccountUseCase::new(
        Arc::new(GcloudLogin::new(GcloudCli::from_settings(&settings.gcloud))),
        Arc::new(GcloudIdentityProvider::from_settings(&settings.gcloud)),
        Arc::new(DialoguerPrompter::new()),
        key_dir,
    );

    let mut flags = cli.into_flags();
    match use_case.execute(&mut flags).await {
        Ok(path) => {
            println!("Created service account key {}", path.display());
            Ok(())
        }
        Err(e) => {
            error!(?e, "failed to create service account");
            Err(e.into())
        }
    }
}
