//! Command to display the active organization.

use std::fmt::Display;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::{
    args::org,
    commands::{CommandWithOutput, TryFromArgs},
    config::Config,
    formatting::bold_blue,
};

pub struct Show {
    organization: String,
}

impl TryFromArgs<org::Show> for Show {
    fn try_from_args(_: org::Show, config: &Config) -> Result<Self> {
        Ok(Self {
            organization: config.organization()?.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowResult {
    org: String,
}

impl Display for ShowResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Active organization: {}", bold_blue(&self.org))
    }
}

#[async_trait]
impl CommandWithOutput for Show {
    type Output = ShowResult;

    async fn execute(&mut self) -> Result<Self::Output> {
        Ok(ShowResult {
            org: self.organization.clone(),
        })
    }
}
