//! Command to list the branches of a database.

use std::fmt::Display;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::{
    api::ListBranchesRequest,
    args::branch,
    commands::{CommandWithOutput, TryFromArgs},
    config::Config,
    dependencies::BranchLister,
    formatting::bold_blue,
    interaction::{Interaction, SpinnerInteraction},
    models::{Branch, display_timestamp},
    table::Table,
};

pub struct List {
    organization: String,
    database: String,

    interaction: Box<dyn SpinnerInteraction + Send + Sync>,
    branch_lister: Box<dyn BranchLister + Send + Sync>,
}

impl TryFromArgs<branch::List> for List {
    fn try_from_args(args: branch::List, config: &Config) -> Result<Self> {
        Ok(Self {
            organization: config.organization()?.to_string(),
            database: args.database,

            interaction: Box::new(Interaction::new()),
            branch_lister: Box::new(config.new_client()?),
        })
    }
}

/// Result of the list command, serialized as a plain array of branches.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ListResult {
    #[serde(skip)]
    database: String,
    branches: Vec<Branch>,
}

impl From<&ListResult> for Table {
    fn from(value: &ListResult) -> Self {
        Table::from_iter(
            &value.branches,
            &[
                ("NAME", |b: &Branch| b.name.clone()),
                ("PARENT BRANCH", |b: &Branch| b.parent_branch.clone()),
                ("READY", |b: &Branch| yes_no(b.ready)),
                ("CREATED AT", |b: &Branch| display_timestamp(&b.created_at)),
                ("UPDATED AT", |b: &Branch| display_timestamp(&b.updated_at)),
            ],
        )
    }
}

fn yes_no(value: bool) -> String {
    let text = if value { "Yes" } else { "No" };
    text.to_string()
}

impl Display for ListResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.branches.is_empty() {
            return write!(f, "No branches exist in {}.", bold_blue(&self.database));
        }

        Table::from(self).fmt(f)
    }
}

#[async_trait]
impl CommandWithOutput for List {
    type Output = ListResult;

    async fn execute(&mut self) -> Result<Self::Output> {
        let _spinner = self.interaction.start_spinner(format!(
            "Fetching branches for {}...",
            bold_blue(&self.database)
        ))?;

        let branches = self
            .branch_lister
            .list_branches(ListBranchesRequest {
                organization: self.organization.clone(),
                database: self.database.clone(),
            })
            .await?;

        Ok(ListResult {
            database: self.database.clone(),
            branches,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependencies::mocks::MockApi;
    use crate::formatting::{Format, Formattable};
    use crate::interaction::SpinnerHandle;
    use crate::interaction::mocks::MockInteraction;

    fn create_command(branch_lister: MockApi) -> List {
        let mut interaction = MockInteraction::new();
        interaction
            .expect_start_spinner()
            .return_once(|_| Ok(SpinnerHandle::new(Box::new(|| {}))));

        List {
            organization: "acme".to_string(),
            database: "foo".to_string(),
            interaction: Box::new(interaction),
            branch_lister: Box::new(branch_lister),
        }
    }

    #[tokio::test]
    async fn test_list_branches() {
        let mut branch_lister = MockApi::new();
        branch_lister
            .expect_list_branches()
            .withf(|request| request.organization == "acme" && request.database == "foo")
            .return_once(|_| {
                Ok(vec![Branch {
                    name: "main".to_string(),
                    parent_branch: String::new(),
                    ready: true,
                    created_at: "2021-01-14T10:19:23Z".parse().unwrap(),
                    updated_at: "2021-01-14T10:19:23Z".parse().unwrap(),
                }])
            });

        let result = create_command(branch_lister)
            .execute()
            .await
            .expect("execute should succeed");

        let text = result.to_string();
        assert!(text.starts_with("NAME    PARENT BRANCH    READY"));
        assert!(text.lines().nth(1).unwrap().contains("Yes"));

        let json: serde_json::Value =
            serde_json::from_str(&result.format(Format::Json).unwrap()).unwrap();
        assert_eq!(json[0]["name"], "main");
    }

    #[tokio::test]
    async fn test_list_no_branches() {
        let mut branch_lister = MockApi::new();
        branch_lister
            .expect_list_branches()
            .return_once(|_| Ok(vec![]));

        let result = create_command(branch_lister)
            .execute()
            .await
            .expect("execute should succeed");

        assert_eq!(
            console::strip_ansi_codes(&result.format(Format::Text).unwrap()),
            "No branches exist in foo."
        );
        assert_eq!(result.format(Format::Json).unwrap(), "[]");
    }
}
