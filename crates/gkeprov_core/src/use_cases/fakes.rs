//! In-memory port implementations shared by the use case tests.

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::entities::{ProjectId, ServiceAccountName};
use crate::error::Error;
use crate::ports::{CloudIdentityProvider, CloudLogin, InputValidator, Prompter};

#[derive(Default)]
pub struct FakeProvider {
    pub projects: Vec<ProjectId>,
    pub list_error: Option<String>,
    pub get_or_create_error: Option<String>,
    pub list_calls: AtomicUsize,
    pub accounts: Mutex<HashSet<(String, String)>>,
    pub get_or_create_calls: Mutex<Vec<(String, String, PathBuf)>>,
    pub creations: AtomicUsize,
}

impl FakeProvider {
    pub fn with_projects(ids: &[&str]) -> Self {
        Self {
            projects: ids.iter().map(|id| ProjectId::new(*id).unwrap()).collect(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl CloudIdentityProvider for FakeProvider {
    async fn list_projects(&self) -> Result<Vec<ProjectId>, Error> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match &self.list_error {
            Some(msg) => Err(Error::Provider(msg.clone())),
            None => Ok(self.projects.clone()),
        }
    }

    async fn get_or_create_service_account(
        &self,
        name: &ServiceAccountName,
        project: &ProjectId,
        key_dir: &Path,
    ) -> Result<PathBuf, Error> {
        self.get_or_create_calls.lock().unwrap().push((
            name.to_string(),
            project.to_string(),
            key_dir.to_path_buf(),
        ));

        if let Some(msg) = &self.get_or_create_error {
            return Err(Error::Provider(msg.clone()));
        }

        let key = (name.to_string(), project.to_string());
        if self.accounts.lock().unwrap().insert(key) {
            self.creations.fetch_add(1, Ordering::SeqCst);
        }

        Ok(key_dir.join(name.key_file_name()))
    }
}

/// Answers prompts from a script; an exhausted script behaves like an abort.
#[derive(Default)]
pub struct ScriptedPrompter {
    pub inputs: Mutex<VecDeque<String>>,
    pub rejected_inputs: Mutex<Vec<String>>,
    pub selection: Option<String>,
    pub select_calls: Mutex<Vec<Vec<String>>>,
    pub confirmation: Option<bool>,
    pub confirm_calls: AtomicUsize,
}

impl ScriptedPrompter {
    pub fn with_inputs(inputs: &[&str]) -> Self {
        Self {
            inputs: Mutex::new(inputs.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        }
    }

    pub fn selecting(choice: &str) -> Self {
        Self {
            selection: Some(choice.to_string()),
            ..Default::default()
        }
    }

    pub fn confirming(answer: bool) -> Self {
        Self {
            confirmation: Some(answer),
            ..Default::default()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, _message: &str, validator: InputValidator<'_>) -> Result<String, Error> {
        let mut inputs = self.inputs.lock().unwrap();
        while let Some(answer) = inputs.pop_front() {
            match validator(answer.as_str()) {
                Ok(()) => return Ok(answer),
                Err(_) => self.rejected_inputs.lock().unwrap().push(answer),
            }
        }
        Err(Error::PromptAborted)
    }

    fn select(&self, _message: &str, _help: &str, options: &[String]) -> Result<String, Error> {
        self.select_calls.lock().unwrap().push(options.to_vec());
        self.selection.clone().ok_or(Error::PromptAborted)
    }

    fn confirm(&self, _message: &str, _default: bool) -> Result<bool, Error> {
        self.confirm_calls.fetch_add(1, Ordering::SeqCst);
        self.confirmation.ok_or(Error::PromptAborted)
    }
}

#[derive(Default)]
pub struct FakeLogin {
    pub fail_with: Option<String>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl CloudLogin for FakeLogin {
    async fn login(&self) -> Result<(), Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(msg) => Err(Error::Login(msg.clone())),
            None => Ok(()),
        }
    }
}
