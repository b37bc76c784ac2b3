use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identifier of a cloud project. Opaque, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Result<Self, Error> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::Validation("project id must not be empty".to_string()));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of a service account, at least [`ServiceAccountName::MIN_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceAccountName(String);

impl ServiceAccountName {
    pub const MIN_LEN: usize = 6;

    /// Validation rule applied to prompted and flag-supplied names.
    pub fn validate(candidate: &str) -> Result<(), String> {
        if candidate.chars().count() < Self::MIN_LEN {
            return Err(format!(
                "Service Account name must be longer than {} characters",
                Self::MIN_LEN - 1
            ));
        }
        Ok(())
    }

    pub fn parse(candidate: impl Into<String>) -> Result<Self, Error> {
        let candidate = candidate.into();
        Self::validate(&candidate).map_err(Error::Validation)?;
        Ok(Self(candidate))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Email address of this account inside `project`.
    pub fn email(&self, project: &ProjectId) -> String {
        format!("{}@{}.iam.gserviceaccount.com", self.0, project)
    }

    /// File name the account's credential key is written to.
    pub fn key_file_name(&self) -> String {
        format!("{}.key.json", self.0)
    }
}

impl fmt::Display for ServiceAccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User intent for one provisioning run.
///
/// Empty values are resolved interactively and written back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceAccountFlags {
    pub name: Option<String>,
    pub project: Option<String>,
    pub skip_login: bool,
}

impl ServiceAccountFlags {
    pub fn new(name: Option<String>, project: Option<String>, skip_login: bool) -> Self {
        // Surrounding whitespace is dropped; blank values behave like missing ones
        let non_empty = |v: Option<String>| {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };
        Self {
            name: non_empty(name),
            project: non_empty(project),
            skip_login,
        }
    }
}
