//! Greengrass commands

mod core_definitions;
mod deployments;
mod groups;

pub use core_definitions::ListCoreDefinitionsParams;
pub use deployments::{CreateDeploymentParams, ListDeploymentsParams, ResetDeploymentsParams};
pub use groups::{CreateGroupParams, DeleteGroupParams, GetGroupParams, ListGroupsParams};

use crate::api::GreengrassApi;
use aws_sdk_greengrass::error::BuildError;
use awscmd_core::{
    CommandOutput, ConfirmationGate, EndpointContext, InvocationContext, InvocationError,
    InvocationResult, Outcome,
};
use clap::Subcommand;
use log::warn;
use std::collections::HashMap;

pub(crate) const DEPLOYMENT_TYPES: [&str; 4] = [
    "NewDeployment",
    "Redeployment",
    "ResetDeployment",
    "ForceResetDeployment",
];

/// Greengrass takes `MaxResults` as a string.
fn max_results(size: Option<u32>) -> Option<String> {
    size.map(|s| s.to_string())
}

fn build_failed(operation: &str) -> impl FnOnce(BuildError) -> InvocationError + '_ {
    move |e| InvocationError::request_build(operation, e)
}

/// Collect repeated `--tag` pairs; a repeated key keeps its last value.
fn tag_map(tags: &[(String, String)]) -> Option<HashMap<String, String>> {
    if tags.is_empty() {
        return None;
    }
    let mut map = HashMap::with_capacity(tags.len());
    for (key, value) in tags {
        if map.insert(key.clone(), value.clone()).is_some() {
            warn!("Tag '{key}' given more than once; using the last value");
        }
    }
    Some(map)
}

#[derive(Debug, Subcommand)]
pub enum GreengrassCommand {
    /// List Greengrass groups
    ListGroups(ListGroupsParams),
    /// Show a group
    GetGroup(GetGroupParams),
    /// Create a group, optionally with an initial version
    CreateGroup(CreateGroupParams),
    /// Delete a group
    DeleteGroup(DeleteGroupParams),
    /// Deploy a group version
    CreateDeployment(CreateDeploymentParams),
    /// List the deployments of a group
    ListDeployments(ListDeploymentsParams),
    /// Reset a group's deployments
    ResetDeployments(ResetDeploymentsParams),
    /// List core definitions
    ListCoreDefinitions(ListCoreDefinitionsParams),
}

impl GreengrassCommand {
    pub async fn run(
        self,
        api: &dyn GreengrassApi,
        endpoint: EndpointContext,
        gate: &ConfirmationGate,
    ) -> InvocationResult<Outcome<CommandOutput>> {
        match self {
            Self::ListGroups(params) => groups::list_groups(
                api,
                InvocationContext::new(groups::LIST_GROUPS, endpoint, params),
            )
            .await
            .map(Outcome::Completed),
            Self::GetGroup(params) => groups::get_group(
                api,
                InvocationContext::new(groups::GET_GROUP, endpoint, params),
            )
            .await
            .map(Outcome::Completed),
            Self::CreateGroup(params) => {
                groups::create_group(
                    api,
                    InvocationContext::new(groups::CREATE_GROUP, endpoint, params),
                    gate,
                )
                .await
            }
            Self::DeleteGroup(params) => {
                groups::delete_group(
                    api,
                    InvocationContext::new(groups::DELETE_GROUP, endpoint, params),
                    gate,
                )
                .await
            }
            Self::CreateDeployment(params) => {
                deployments::create_deployment(
                    api,
                    InvocationContext::new(deployments::CREATE_DEPLOYMENT, endpoint, params),
                    gate,
                )
                .await
            }
            Self::ListDeployments(params) => deployments::list_deployments(
                api,
                InvocationContext::new(deployments::LIST_DEPLOYMENTS, endpoint, params),
            )
            .await
            .map(Outcome::Completed),
            Self::ResetDeployments(params) => {
                deployments::reset_deployments(
                    api,
                    InvocationContext::new(deployments::RESET_DEPLOYMENTS, endpoint, params),
                    gate,
                )
                .await
            }
            Self::ListCoreDefinitions(params) => core_definitions::list_core_definitions(
                api,
                InvocationContext::new(
                    core_definitions::LIST_CORE_DEFINITIONS,
                    endpoint,
                    params,
                ),
            )
            .await
            .map(Outcome::Completed),
        }
    }
}
