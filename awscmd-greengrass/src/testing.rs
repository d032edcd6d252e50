use crate::api::GreengrassApi;
use async_trait::async_trait;
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
use aws_sdk_greengrass::types::{
    DefinitionInformation, Deployment, DeploymentType, GroupInformation,
};
use awscmd_core::{BoxError, EndpointContext};
use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub(crate) fn endpoint() -> EndpointContext {
    EndpointContext {
        service: "greengrass".to_string(),
        region: Some("eu-central-1".to_string()),
        endpoint_url: None,
    }
}

pub(crate) fn group_page(ids: &[&str], next: Option<&str>) -> ListGroupsOutput {
    let groups = ids
        .iter()
        .map(|id| GroupInformation::builder().id(*id).name(format!("{id}-name")).build())
        .collect();
    ListGroupsOutput::builder()
        .set_groups(Some(groups))
        .set_next_token(next.map(str::to_string))
        .build()
}

pub(crate) fn deployment_page(ids: &[&str], next: Option<&str>) -> ListDeploymentsOutput {
    let deployments = ids
        .iter()
        .map(|id| {
            Deployment::builder()
                .deployment_id(*id)
                .deployment_type(DeploymentType::NewDeployment)
                .build()
        })
        .collect();
    ListDeploymentsOutput::builder()
        .set_deployments(Some(deployments))
        .set_next_token(next.map(str::to_string))
        .build()
}

pub(crate) fn definition_page(ids: &[&str], next: Option<&str>) -> ListCoreDefinitionsOutput {
    let definitions = ids
        .iter()
        .map(|id| DefinitionInformation::builder().id(*id).build())
        .collect();
    ListCoreDefinitionsOutput::builder()
        .set_definitions(Some(definitions))
        .set_next_token(next.map(str::to_string))
        .build()
}

/// Transport failure shaped like the one the SDK reports for an unknown host.
#[derive(Debug)]
struct DnsFailure;

impl fmt::Display for DnsFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dns error: failed to lookup address information: Name or service not known")
    }
}

impl std::error::Error for DnsFailure {}

#[derive(Debug)]
struct DispatchFailure(DnsFailure);

impl fmt::Display for DispatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dispatch failure")
    }
}

impl std::error::Error for DispatchFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Scripted pages for the list calls, fixed answers for the rest.
/// `get_group` always fails with a name-resolution error.
#[derive(Default)]
pub(crate) struct FakeGreengrass {
    calls: AtomicUsize,
    group_pages: Mutex<VecDeque<ListGroupsOutput>>,
    group_inputs: Mutex<Vec<ListGroupsInput>>,
    deployment_pages: Mutex<VecDeque<ListDeploymentsOutput>>,
    deployment_inputs: Mutex<Vec<ListDeploymentsInput>>,
    definition_pages: Mutex<VecDeque<ListCoreDefinitionsOutput>>,
    definition_inputs: Mutex<Vec<ListCoreDefinitionsInput>>,
}

impl FakeGreengrass {
    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn push_group_page(&self, page: ListGroupsOutput) {
        self.group_pages.lock().unwrap().push_back(page);
    }

    pub(crate) fn push_deployment_page(&self, page: ListDeploymentsOutput) {
        self.deployment_pages.lock().unwrap().push_back(page);
    }

    pub(crate) fn push_definition_page(&self, page: ListCoreDefinitionsOutput) {
        self.definition_pages.lock().unwrap().push_back(page);
    }

    pub(crate) fn group_inputs(&self) -> Vec<ListGroupsInput> {
        self.group_inputs.lock().unwrap().clone()
    }

    pub(crate) fn deployment_inputs(&self) -> Vec<ListDeploymentsInput> {
        self.deployment_inputs.lock().unwrap().clone()
    }

    pub(crate) fn definition_inputs(&self) -> Vec<ListCoreDefinitionsInput> {
        self.definition_inputs.lock().unwrap().clone()
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn serve<I, O>(
    inputs: &Mutex<Vec<I>>,
    pages: &Mutex<VecDeque<O>>,
    input: I,
    operation: &str,
) -> Result<O, BoxError> {
    inputs.lock().unwrap().push(input);
    pages
        .lock()
        .unwrap()
        .pop_front()
        .ok_or_else(|| format!("no scripted {operation} response left").into())
}

#[async_trait]
impl GreengrassApi for FakeGreengrass {
    async fn list_groups(&self, input: ListGroupsInput) -> Result<ListGroupsOutput, BoxError> {
        self.record();
        serve(&self.group_inputs, &self.group_pages, input, "ListGroups")
    }

    async fn get_group(&self, _input: GetGroupInput) -> Result<GetGroupOutput, BoxError> {
        self.record();
        Err(DispatchFailure(DnsFailure).into())
    }

    async fn create_group(&self, input: CreateGroupInput) -> Result<CreateGroupOutput, BoxError> {
        self.record();
        Ok(CreateGroupOutput::builder()
            .id("g-new")
            .set_name(input.name)
            .build())
    }

    async fn delete_group(&self, _input: DeleteGroupInput) -> Result<DeleteGroupOutput, BoxError> {
        self.record();
        Ok(DeleteGroupOutput::builder().build())
    }

    async fn create_deployment(
        &self,
        _input: CreateDeploymentInput,
    ) -> Result<CreateDeploymentOutput, BoxError> {
        self.record();
        Ok(CreateDeploymentOutput::builder().deployment_id("d-1").build())
    }

    async fn list_deployments(
        &self,
        input: ListDeploymentsInput,
    ) -> Result<ListDeploymentsOutput, BoxError> {
        self.record();
        serve(
            &self.deployment_inputs,
            &self.deployment_pages,
            input,
            "ListDeployments",
        )
    }

    async fn reset_deployments(
        &self,
        _input: ResetDeploymentsInput,
    ) -> Result<ResetDeploymentsOutput, BoxError> {
        self.record();
        Ok(ResetDeploymentsOutput::builder().deployment_id("d-reset").build())
    }

    async fn list_core_definitions(
        &self,
        input: ListCoreDefinitionsInput,
    ) -> Result<ListCoreDefinitionsOutput, BoxError> {
        self.record();
        serve(
            &self.definition_inputs,
            &self.definition_pages,
            input,
            "ListCoreDefinitions",
        )
    }
}
