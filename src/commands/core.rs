//! This module contains the core traits for commands.
//!
//! The goal of this module is to provide a common interface for all commands.
//!
//! There are three traits:
//! - [`Command`] is a trait for all commands.
//! - [`CommandWithOutput`] is a trait for commands that return an output.
//! - [`TryFromArgs`] builds a command from its parsed arguments and the shared [`Config`].
//!
//! There is also a helper trait [`CommandWithOutputExt`] which provides a method to turn
//! a [`CommandWithOutput`] into a [`Command`] that prints the output to stdout.

use std::io::Write;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::{
    config::Config,
    formatting::{Format, Formattable},
};

/// Trait for all commands.
///
/// A command is a unit of work that can be executed.
#[async_trait]
pub trait Command {
    /// Execute the command
    async fn execute(&mut self) -> Result<()>;
}

/// Trait for commands that return an output.
///
/// The output of a command is the result of the work.
#[async_trait]
pub trait CommandWithOutput {
    type Output;

    /// Execute the command and return the output.
    async fn execute(&mut self) -> Result<Self::Output>;
}

/// Build a command from its CLI arguments, injecting the default dependencies.
///
/// Failing here (e.g. no organization configured) happens before any request is sent.
pub trait TryFromArgs<A>: Sized {
    fn try_from_args(args: A, config: &Config) -> Result<Self>;
}

/// Command extensions trait.
pub trait CommandWithOutputExt {
    /// Convert a [`CommandWithOutput`] into a [`Command`] that prints the output to stdout.
    ///
    /// # Arguments
    ///
    /// * `format` - The format to print the output in.
    fn with_print_to_stdout(self, format: Format) -> Result<Box<dyn Command>>;
}

/// Wrapper command that prints the output of a [`CommandWithOutput`] to a writer.
/// The wrapper implements the [`Command`] trait and prints the output when executed.
pub struct PrintCommand<C>
where
    C: CommandWithOutput,
    C::Output: Formattable,
{
    command: C,
    format: Format,
    writer: Box<dyn Write + Send>,
}

impl<C> PrintCommand<C>
where
    C: CommandWithOutput + Send,
    C::Output: Formattable,
{
    pub fn new(command: C, format: Format, writer: Box<dyn Write + Send>) -> Self {
        Self {
            command,
            format,
            writer,
        }
    }
}

#[async_trait]
impl<C> Command for PrintCommand<C>
where
    C: CommandWithOutput + Send,
    C::Output: Formattable,
{
    async fn execute(&mut self) -> Result<()> {
        // Execute the command and get the output.
        let output = self.command.execute().await?;

        let formatted_output = output.format(self.format)?;

        // Tables already end with a newline.
        let written = if formatted_output.ends_with('\n') {
            write!(self.writer, "{formatted_output}")
        } else {
            writeln!(self.writer, "{formatted_output}")
        };
        written.context("writing output")?;

        self.writer.flush().context("writing output")
    }
}

impl<C> CommandWithOutputExt for C
where
    C: CommandWithOutput + Send + 'static,
    C::Output: Formattable + 'static,
{
    fn with_print_to_stdout(self, format: Format) -> Result<Box<dyn Command>> {
        Ok(Box::new(PrintCommand::new(
            self,
            format,
            Box::new(std::io::stdout()),
        )))
    }
}
