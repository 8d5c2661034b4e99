//! Errors raised by the CLI itself, as opposed to errors coming back from the API.
//!
//! API and transport failures are represented by [`crate::api::ApiError`] and are propagated
//! unchanged. Missing arguments are rejected by clap before a command is built.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// The user typed something other than the resource name at the confirmation prompt.
    #[error("Incorrect {kind} name entered, skipping {kind} deletion...")]
    ConfirmationMismatch { kind: &'static str },

    /// The user interrupted a prompt (Ctrl-C / Esc).
    ///
    /// `main` turns this into a silent exit with status 0.
    #[error("operation interrupted")]
    Interrupted,
}

impl CliError {
    /// Returns true if the error chain contains [`CliError::Interrupted`].
    pub fn is_interrupted(error: &anyhow::Error) -> bool {
        error
            .chain()
            .filter_map(|cause| cause.downcast_ref::<CliError>())
            .any(|error| *error == CliError::Interrupted)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn test_confirmation_mismatch_message() {
        let error = CliError::ConfirmationMismatch { kind: "database" };
        assert_eq!(
            error.to_string(),
            "Incorrect database name entered, skipping database deletion..."
        );
    }

    #[test]
    fn test_is_interrupted() {
        let error: anyhow::Error = CliError::Interrupted.into();
        assert!(CliError::is_interrupted(&error));

        let wrapped = Err::<(), _>(CliError::Interrupted)
            .context("confirming deletion")
            .unwrap_err();
        assert!(CliError::is_interrupted(&wrapped));

        let other: anyhow::Error = CliError::ConfirmationMismatch { kind: "branch" }.into();
        assert!(!CliError::is_interrupted(&other));
    }
}
