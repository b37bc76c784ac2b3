pub mod configuration;
pub mod gcloud;
pub mod paths;
pub mod telemetry;

// Re-exports for convenience
pub use gcloud::{GcloudCli, GcloudIdentityProvider, GcloudLogin};
