//! Stand-in `gcloud` executable for exercising the adapters without the SDK.
//!
//! The script records each invocation in `calls.log`, keeps created
//! accounts in `accounts.json`, and changes behavior when marker files
//! (`hang`, `deny`, `deny_login`) exist next to it.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::GcloudCli;

const SCRIPT: &str = r#"#!/bin/sh
dir=$(dirname "$0")
echo "$*" >> "$dir/calls.log"
if [ -f "$dir/hang" ]; then
  sleep 5
fi
case "$*" in
  "auth login --brief")
    if [ -f "$dir/deny_login" ]; then exit 1; fi ;;
  "projects list"*)
    if [ -f "$dir/projects.json" ]; then cat "$dir/projects.json"; else echo "[]"; fi ;;
  "iam service-accounts list"*)
    if [ -f "$dir/accounts.json" ]; then cat "$dir/accounts.json"; else echo "[]"; fi ;;
  "iam list-testable-permissions"*)
    if [ -f "$dir/deny" ]; then echo "[]"; else echo '[{"name": "resourcemanager.projects.setIamPolicy"}]'; fi ;;
  "iam service-accounts create"*)
    echo "[{\"email\": \"$4@$6.iam.gserviceaccount.com\"}]" > "$dir/accounts.json" ;;
  "iam service-accounts keys create"*)
    echo '{"type": "service_account"}' > "$5" ;;
  "projects add-iam-policy-binding"*)
    ;;
  *)
    echo "unexpected: $*" >&2
    exit 2 ;;
esac
"#;

pub struct FakeGcloud {
    dir: TempDir,
}

impl FakeGcloud {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("gcloud");
        fs::write(&script, SCRIPT).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn cli(&self) -> GcloudCli {
        GcloudCli::new(self.path().join("gcloud").to_string_lossy().into_owned())
    }

    pub fn touch(&self, marker: &str) {
        fs::write(self.path().join(marker), "").unwrap();
    }

    pub fn write(&self, file: &str, content: &str) {
        fs::write(self.path().join(file), content).unwrap();
    }

    pub fn key_dir(&self) -> PathBuf {
        self.path().join("home")
    }

    /// Recorded invocations, one argument string per call
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.path().join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }
}
