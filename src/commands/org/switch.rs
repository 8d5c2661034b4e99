//! Command to switch the active organization.
//!
//! The organization is checked against the API before it is written to the config file.
//! Without a name, the user picks one of the organizations they can access.

use std::fmt::Display;

use anyhow::{Result, bail};
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::{
    api::GetOrganizationRequest,
    args::org,
    commands::{CommandWithOutput, TryFromArgs},
    config::Config,
    dependencies::{ConfigStore, OrganizationGetter, OrganizationLister},
    error::CliError,
    formatting::bold_blue,
    interaction::{
        Interaction, SelectPrompt, SelectPromptOptions, SelectPromptResult, SpinnerInteraction,
    },
};

pub trait SwitchInteraction: SelectPrompt + SpinnerInteraction + Send + Sync {}
impl<T: SelectPrompt + SpinnerInteraction + Send + Sync> SwitchInteraction for T {}

pub trait OrganizationSource: OrganizationGetter + OrganizationLister + Send + Sync {}
impl<T: OrganizationGetter + OrganizationLister + Send + Sync> OrganizationSource for T {}

pub struct Switch {
    organization: Option<String>,

    interaction: Box<dyn SwitchInteraction>,
    organizations: Box<dyn OrganizationSource>,
    config_store: Box<dyn ConfigStore + Send + Sync>,
}

// Doesn't need an organization to be configured yet.
impl TryFromArgs<org::Switch> for Switch {
    fn try_from_args(args: org::Switch, config: &Config) -> Result<Self> {
        Ok(Self {
            organization: args.organization,

            interaction: Box::new(Interaction::new()),
            organizations: Box::new(config.new_client()?),
            config_store: Box::new(config.store()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchResult {
    org: String,
}

impl Display for SwitchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Successfully switched to organization {}",
            bold_blue(&self.org)
        )
    }
}

impl Switch {
    async fn verify_organization(&self, organization: String) -> Result<String> {
        let _spinner = self.interaction.start_spinner(format!(
            "Fetching organization {}...",
            bold_blue(&organization)
        ))?;

        let organization = self
            .organizations
            .get_organization(GetOrganizationRequest { organization })
            .await?;

        Ok(organization.name)
    }

    async fn select_organization(&self) -> Result<String> {
        let spinner = self
            .interaction
            .start_spinner("Fetching organizations...".to_string())?;

        let names = self
            .organizations
            .list_organizations()
            .await?
            .into_iter()
            .map(|organization| organization.name)
            .collect::<Vec<_>>();

        // The prompt can't share the terminal with a running spinner.
        spinner.stop();

        if names.is_empty() {
            bail!("no organizations are available for this account");
        }

        let options = SelectPromptOptions::builder()
            .message("Select an organization:")
            .options(names)
            .build();

        match self.interaction.select(options)? {
            SelectPromptResult::Selected(name) => Ok(name),
            SelectPromptResult::Canceled => Err(CliError::Interrupted.into()),
        }
    }
}

#[async_trait]
impl CommandWithOutput for Switch {
    type Output = SwitchResult;

    async fn execute(&mut self) -> Result<Self::Output> {
        let organization = match self.organization.take() {
            Some(organization) => self.verify_organization(organization).await?,
            None => self.select_organization().await?,
        };

        debug!(organization = %organization, "saving organization");
        self.config_store.save_organization(&organization)?;

        Ok(SwitchResult { org: organization })
    }
}
