use anyhow::Result;
use inquire::{InquireError, Select, Text};

use super::{
    InputPrompt, InputPromptOptions, InputPromptResult, Interaction, SelectPrompt,
    SelectPromptOptions, SelectPromptResult,
};

impl InputPrompt for Interaction {
    fn input(&self, options: InputPromptOptions) -> Result<InputPromptResult> {
        let mut prompt = Text::new(&options.message);

        if let Some(help_message) = options.help_message.as_deref() {
            prompt = prompt.with_help_message(help_message);
        }

        match prompt.prompt() {
            Ok(input) => Ok(InputPromptResult::Input(input)),
            Err(InquireError::OperationCanceled) => Ok(InputPromptResult::Canceled),
            Err(InquireError::OperationInterrupted) => Ok(InputPromptResult::Canceled),
            Err(err) => Err(anyhow::anyhow!("error prompting for input: {}", err)),
        }
    }
}

impl SelectPrompt for Interaction {
    fn select(&self, options: SelectPromptOptions) -> Result<SelectPromptResult> {
        let select = Select::new(&options.message, options.options);

        match select.prompt() {
            Ok(selected) => Ok(SelectPromptResult::Selected(selected)),
            Err(InquireError::OperationCanceled) => Ok(SelectPromptResult::Canceled),
            Err(InquireError::OperationInterrupted) => Ok(SelectPromptResult::Canceled),
            Err(err) => Err(anyhow::anyhow!("error prompting for selection: {}", err)),
        }
    }
}
