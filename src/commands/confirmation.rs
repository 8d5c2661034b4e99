//! Typed confirmation used by the destructive commands.

use anyhow::{Context, Result};

use crate::{
    error::CliError,
    formatting::{bold, bold_blue},
    interaction::{InputPrompt, InputPromptOptions, InputPromptResult},
};

/// Ask the user to type `name` to confirm the deletion of a resource of the given kind.
///
/// Returns [`CliError::ConfirmationMismatch`] when the input differs from `name` and
/// [`CliError::Interrupted`] when the user interrupts the prompt.
pub fn require_typed_name<I>(interaction: &I, kind: &'static str, name: &str) -> Result<()>
where
    I: InputPrompt + ?Sized,
{
    let message = format!(
        "{} {} {}",
        bold("Please type"),
        bold_blue(name),
        bold("to confirm:")
    );

    let result = interaction
        .input(
            InputPromptOptions::builder()
                .message(message)
                .help_message(format!("This will permanently delete the {kind}."))
                .build(),
        )
        .context("confirming deletion")?;

    match result {
        InputPromptResult::Input(input) if input == name => Ok(()),
        InputPromptResult::Input(_) => Err(CliError::ConfirmationMismatch { kind }.into()),
        InputPromptResult::Canceled => Err(CliError::Interrupted.into()),
    }
}
