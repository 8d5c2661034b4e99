use anyhow::Result;
use typed_builder::TypedBuilder;

mod input;
mod spinner;

#[derive(Debug, Default, Clone)]
pub struct Interaction;

impl Interaction {
    pub fn new() -> Self {
        Default::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct InputPromptOptions {
    #[builder(setter(into))]
    pub message: String,
    #[builder(default, setter(strip_option, into))]
    pub help_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputPromptResult {
    Input(String),
    Canceled,
}

pub trait InputPrompt {
    fn input(&self, options: InputPromptOptions) -> Result<InputPromptResult>;
}

#[derive(Debug, PartialEq, Eq, TypedBuilder)]
pub struct SelectPromptOptions {
    #[builder(setter(transform = |s: impl Into<String>| s.into()))]
    message: String,
    #[builder(setter(transform = |items: impl IntoIterator<Item = impl Into<String>>| {
        items.into_iter().map(|s| s.into()).collect()
    }))]
    options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectPromptResult {
    Selected(String),
    Canceled,
}

pub trait SelectPrompt {
    fn select(&self, options: SelectPromptOptions) -> Result<SelectPromptResult>;
}

pub struct SpinnerHandle {
    stop_spinner: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl SpinnerHandle {
    pub fn new(stop_spinner: Box<dyn FnOnce() + Send + Sync>) -> Self {
        Self {
            stop_spinner: Some(stop_spinner),
        }
    }

    /// Stop the spinner before the handle goes out of scope.
    pub fn stop(mut self) {
        if let Some(stop_spinner) = self.stop_spinner.take() {
            stop_spinner();
        }
    }
}

impl Drop for SpinnerHandle {
    fn drop(&mut self) {
        if let Some(stop_spinner) = self.stop_spinner.take() {
            stop_spinner();
        }
    }
}

pub trait SpinnerInteraction {
    fn start_spinner(&self, message: String) -> Result<SpinnerHandle>;
}

#[cfg(test)]
pub mod mocks {
    use super::*;
    use mockall::mock;

    mock! {
        pub Interaction {}

        impl SpinnerInteraction for Interaction {
            fn start_spinner(&self, message: String) -> Result<SpinnerHandle>;
        }

        impl InputPrompt for Interaction {
            fn input(&self, options: InputPromptOptions) -> Result<InputPromptResult>;
        }

        impl SelectPrompt for Interaction {
            fn select(&self, options: SelectPromptOptions) -> Result<SelectPromptResult>;
        }
    }
}
