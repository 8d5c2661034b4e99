//! This module contains the formatting logic for the application.
//!
//! The main entry point is the [`Formattable`] trait which provides a method to format an object as text or json.
use std::fmt::Display;

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::{StyledObject, style};
use serde::Serialize;

/// Format of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Trait for types that can be formatted as text or JSON.
///
/// The main use of this trait is to format the output of commands.
/// Types implementing both [`Display`] and [`Serialize`] automatically get a default implementation.
pub trait Formattable {
    /// Format the output of the object as text or json.
    fn format(&self, format: Format) -> Result<String>;
}

/// Implement [`Formattable`] for any type that implements [`Display`] and [`Serialize`].
///
/// When the text is requested, the object is converted to a string using the [`Display`] trait.
/// When the JSON is requested, the object is serialized to an indented JSON string using the [`Serialize`] trait.
impl<T> Formattable for T
where
    T: Display + Serialize,
{
    fn format(&self, format: Format) -> Result<String> {
        Ok(match format {
            Format::Text => self.to_string(),
            Format::Json => serde_json::to_string_pretty(self).context("serializing to json")?,
        })
    }
}

/// Bold text, used for the static parts of messages.
pub fn bold<D: Display>(value: D) -> StyledObject<D> {
    style(value).bold()
}

/// Bold blue text, used to highlight resource names in messages.
pub fn bold_blue<D: Display>(value: D) -> StyledObject<D> {
    style(value).blue().bold()
}
