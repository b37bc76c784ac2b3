use std::path::PathBuf;

use directories::BaseDirs;
use gkeprov_core::config::GcloudSettings;
use gkeprov_core::error::Error;

/// Directory key files are written to: `gcloud.key_dir` when configured,
/// otherwise the user's home directory.
pub fn key_directory(settings: &GcloudSettings) -> Result<PathBuf, Error> {
    if let Some(dir) = &settings.key_dir {
        return Ok(dir.clone());
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(Error::HomeDirectoryNotFound)
}
