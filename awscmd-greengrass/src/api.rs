//! Greengrass client seam: one method per supported operation.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_greengrass::operation::create_deployment::{
    CreateDeploymentInput, CreateDeploymentOutput,
};
use aws_sdk_greengrass::operation::create_group::{CreateGroupInput, CreateGroupOutput};
use aws_sdk_greengrass::operation::delete_group::{DeleteGroupInput, DeleteGroupOutput};
use aws_sdk_greengrass::operation::get_group::{GetGroupInput, GetGroupOutput};
use aws_sdk_greengrass::operation::list_core_definitions::{
    ListCoreDefinitionsInput, ListCoreDefinitionsOutput,
};
use aws_sdk_greengrass::operation::list_deployments::{
    ListDeploymentsInput, ListDeploymentsOutput,
};
use aws_sdk_greengrass::operation::list_groups::{ListGroupsInput, ListGroupsOutput};
use aws_sdk_greengrass::operation::reset_deployments::{
    ResetDeploymentsInput, ResetDeploymentsOutput,
};
use aws_sdk_greengrass::Client;
use awscmd_core::BoxError;

#[async_trait]
pub trait GreengrassApi: Send + Sync {
    async fn list_groups(&self, input: ListGroupsInput) -> Result<ListGroupsOutput, BoxError>;

    async fn get_group(&self, input: GetGroupInput) -> Result<GetGroupOutput, BoxError>;

    async fn create_group(&self, input: CreateGroupInput) -> Result<CreateGroupOutput, BoxError>;

    async fn delete_group(&self, input: DeleteGroupInput) -> Result<DeleteGroupOutput, BoxError>;

    async fn create_deployment(
        &self,
        input: CreateDeploymentInput,
    ) -> Result<CreateDeploymentOutput, BoxError>;

    async fn list_deployments(
        &self,
        input: ListDeploymentsInput,
    ) -> Result<ListDeploymentsOutput, BoxError>;

    async fn reset_deployments(
        &self,
        input: ResetDeploymentsInput,
    ) -> Result<ResetDeploymentsOutput, BoxError>;

    async fn list_core_definitions(
        &self,
        input: ListCoreDefinitionsInput,
    ) -> Result<ListCoreDefinitionsOutput, BoxError>;
}

pub struct SdkGreengrass {
    client: Client,
}

impl SdkGreengrass {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl GreengrassApi for SdkGreengrass {
    async fn list_groups(&self, input: ListGroupsInput) -> Result<ListGroupsOutput, BoxError> {
        self.client
            .list_groups()
            .set_max_results(input.max_results)
            .set_next_token(input.next_token)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn get_group(&self, input: GetGroupInput) -> Result<GetGroupOutput, BoxError> {
        self.client
            .get_group()
            .set_group_id(input.group_id)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn create_group(&self, input: CreateGroupInput) -> Result<CreateGroupOutput, BoxError> {
        self.client
            .create_group()
            .set_amzn_client_token(input.amzn_client_token)
            .set_initial_version(input.initial_version)
            .set_name(input.name)
            .set_tags(input.tags)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn delete_group(&self, input: DeleteGroupInput) -> Result<DeleteGroupOutput, BoxError> {
        self.client
            .delete_group()
            .set_group_id(input.group_id)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn create_deployment(
        &self,
        input: CreateDeploymentInput,
    ) -> Result<CreateDeploymentOutput, BoxError> {
        self.client
            .create_deployment()
            .set_amzn_client_token(input.amzn_client_token)
            .set_deployment_id(input.deployment_id)
            .set_deployment_type(input.deployment_type)
            .set_group_id(input.group_id)
            .set_group_version_id(input.group_version_id)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn list_deployments(
        &self,
        input: ListDeploymentsInput,
    ) -> Result<ListDeploymentsOutput, BoxError> {
        self.client
            .list_deployments()
            .set_group_id(input.group_id)
            .set_max_results(input.max_results)
            .set_next_token(input.next_token)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn reset_deployments(
        &self,
        input: ResetDeploymentsInput,
    ) -> Result<ResetDeploymentsOutput, BoxError> {
        self.client
            .reset_deployments()
            .set_amzn_client_token(input.amzn_client_token)
            .set_force(input.force)
            .set_group_id(input.group_id)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn list_core_definitions(
        &self,
        input: ListCoreDefinitionsInput,
    ) -> Result<ListCoreDefinitionsOutput, BoxError> {
        self.client
            .list_core_definitions()
            .set_max_results(input.max_results)
            .set_next_token(input.next_token)
            .send()
            .await
            .map_err(Into::into)
    }
}
