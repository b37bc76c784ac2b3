use std::io::ErrorKind;

use dialoguer::{Confirm, Input, Select};
use gkeprov_core::error::Error;
use gkeprov_core::ports::{InputValidator, Prompter};

/// Terminal prompts rendered with dialoguer
#[derive(Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn map_prompt_error(err: dialoguer::Error) -> Error {
    match err {
        dialoguer::Error::IO(e) if e.kind() == ErrorKind::Interrupted => Error::PromptAborted,
        dialoguer::Error::IO(e) => Error::Prompt(e.to_string()),
        #[allow(unreachable_patterns)]
        other => Error::Prompt(other.to_string()),
    }
}

fn select_prompt(message: &str, help: &str) -> String {
    if help.is_empty() {
        message.to_string()
    } else {
        format!("{} ({})", message.trim_end_matches(':'), help)
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, message: &str, validator: InputValidator<'_>) -> Result<String, Error> {
        Input::<String>::new()
            .with_prompt(message)
            .validate_with(|answer: &String| validator(answer.as_str()))
            .interact_text()
            .map_err(map_prompt_error)
    }

    fn select(&self, message: &str, help: &str, options: &[String]) -> Result<String, Error> {
        let index = Select::new()
            .with_prompt(select_prompt(message, help))
            .items(options)
            .default(0)
            .interact_opt()
            .map_err(map_prompt_error)?
            .ok_or(Error::PromptAborted)?;

        options
            .get(index)
            .cloned()
            .ok_or_else(|| Error::Prompt(format!("selection {} out of range", index)))
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool, Error> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact_opt()
            .map_err(map_prompt_error)?
            .ok_or(Error::PromptAborted)
    }
}
