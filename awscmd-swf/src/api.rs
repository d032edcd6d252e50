//! SWF client seam: one method per supported operation.
//!
//! Commands talk to [`SwfApi`] so request mapping can be exercised against a
//! recording fake; [`SdkSwf`] forwards to the real SDK client.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_swf::operation::deprecate_domain::{DeprecateDomainInput, DeprecateDomainOutput};
use aws_sdk_swf::operation::describe_domain::{DescribeDomainInput, DescribeDomainOutput};
use aws_sdk_swf::operation::get_workflow_execution_history::{
    GetWorkflowExecutionHistoryInput, GetWorkflowExecutionHistoryOutput,
};
use aws_sdk_swf::operation::list_activity_types::{ListActivityTypesInput, ListActivityTypesOutput};
use aws_sdk_swf::operation::list_domains::{ListDomainsInput, ListDomainsOutput};
use aws_sdk_swf::operation::list_open_workflow_executions::{
    ListOpenWorkflowExecutionsInput, ListOpenWorkflowExecutionsOutput,
};
use aws_sdk_swf::operation::register_activity_type::{
    RegisterActivityTypeInput, RegisterActivityTypeOutput,
};
use aws_sdk_swf::operation::register_domain::{RegisterDomainInput, RegisterDomainOutput};
use aws_sdk_swf::operation::signal_workflow_execution::{
    SignalWorkflowExecutionInput, SignalWorkflowExecutionOutput,
};
use aws_sdk_swf::operation::start_workflow_execution::{
    StartWorkflowExecutionInput, StartWorkflowExecutionOutput,
};
use aws_sdk_swf::operation::terminate_workflow_execution::{
    TerminateWorkflowExecutionInput, TerminateWorkflowExecutionOutput,
};
use aws_sdk_swf::Client;
use awscmd_core::BoxError;

#[async_trait]
pub trait SwfApi: Send + Sync {
    async fn list_domains(&self, input: ListDomainsInput) -> Result<ListDomainsOutput, BoxError>;

    async fn describe_domain(
        &self,
        input: DescribeDomainInput,
    ) -> Result<DescribeDomainOutput, BoxError>;

    async fn register_domain(
        &self,
        input: RegisterDomainInput,
    ) -> Result<RegisterDomainOutput, BoxError>;

    async fn deprecate_domain(
        &self,
        input: DeprecateDomainInput,
    ) -> Result<DeprecateDomainOutput, BoxError>;

    async fn list_activity_types(
        &self,
        input: ListActivityTypesInput,
    ) -> Result<ListActivityTypesOutput, BoxError>;

    async fn register_activity_type(
        &self,
        input: RegisterActivityTypeInput,
    ) -> Result<RegisterActivityTypeOutput, BoxError>;

    async fn start_workflow_execution(
        &self,
        input: StartWorkflowExecutionInput,
    ) -> Result<StartWorkflowExecutionOutput, BoxError>;

    async fn list_open_workflow_executions(
        &self,
        input: ListOpenWorkflowExecutionsInput,
    ) -> Result<ListOpenWorkflowExecutionsOutput, BoxError>;

    async fn signal_workflow_execution(
        &self,
        input: SignalWorkflowExecutionInput,
    ) -> Result<SignalWorkflowExecutionOutput, BoxError>;

    async fn terminate_workflow_execution(
        &self,
        input: TerminateWorkflowExecutionInput,
    ) -> Result<TerminateWorkflowExecutionOutput, BoxError>;

    async fn get_workflow_execution_history(
        &self,
        input: GetWorkflowExecutionHistoryInput,
    ) -> Result<GetWorkflowExecutionHistoryOutput, BoxError>;
}

/// [`SwfApi`] backed by the AWS SDK.
pub struct SdkSwf {
    client: Client,
}

impl SdkSwf {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl SwfApi for SdkSwf {
    async fn list_domains(&self, input: ListDomainsInput) -> Result<ListDomainsOutput, BoxError> {
        self.client
            .list_domains()
            .set_registration_status(input.registration_status)
            .set_maximum_page_size(input.maximum_page_size)
            .set_next_page_token(input.next_page_token)
            .set_reverse_order(input.reverse_order)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn describe_domain(
        &self,
        input: DescribeDomainInput,
    ) -> Result<DescribeDomainOutput, BoxError> {
        self.client
            .describe_domain()
            .set_name(input.name)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn register_domain(
        &self,
        input: RegisterDomainInput,
    ) -> Result<RegisterDomainOutput, BoxError> {
        self.client
            .register_domain()
            .set_name(input.name)
            .set_description(input.description)
            .set_workflow_execution_retention_period_in_days(
                input.workflow_execution_retention_period_in_days,
            )
            .set_tags(input.tags)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn deprecate_domain(
        &self,
        input: DeprecateDomainInput,
    ) -> Result<DeprecateDomainOutput, BoxError> {
        self.client
            .deprecate_domain()
            .set_name(input.name)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn list_activity_types(
        &self,
        input: ListActivityTypesInput,
    ) -> Result<ListActivityTypesOutput, BoxError> {
        self.client
            .list_activity_types()
            .set_domain(input.domain)
            .set_name(input.name)
            .set_registration_status(input.registration_status)
            .set_maximum_page_size(input.maximum_page_size)
            .set_next_page_token(input.next_page_token)
            .set_reverse_order(input.reverse_order)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn register_activity_type(
        &self,
        input: RegisterActivityTypeInput,
    ) -> Result<RegisterActivityTypeOutput, BoxError> {
        self.client
            .register_activity_type()
            .set_domain(input.domain)
            .set_name(input.name)
            .set_version(input.version)
            .set_description(input.description)
            .set_default_task_list(input.default_task_list)
            .set_default_task_priority(input.default_task_priority)
            .set_default_task_heartbeat_timeout(input.default_task_heartbeat_timeout)
            .set_default_task_start_to_close_timeout(input.default_task_start_to_close_timeout)
            .set_default_task_schedule_to_start_timeout(
                input.default_task_schedule_to_start_timeout,
            )
            .set_default_task_schedule_to_close_timeout(
                input.default_task_schedule_to_close_timeout,
            )
            .send()
            .await
            .map_err(Into::into)
    }

    async fn start_workflow_execution(
        &self,
        input: StartWorkflowExecutionInput,
    ) -> Result<StartWorkflowExecutionOutput, BoxError> {
        self.client
            .start_workflow_execution()
            .set_domain(input.domain)
            .set_workflow_id(input.workflow_id)
            .set_workflow_type(input.workflow_type)
            .set_task_list(input.task_list)
            .set_task_priority(input.task_priority)
            .set_input(input.input)
            .set_execution_start_to_close_timeout(input.execution_start_to_close_timeout)
            .set_task_start_to_close_timeout(input.task_start_to_close_timeout)
            .set_tag_list(input.tag_list)
            .set_child_policy(input.child_policy)
            .set_lambda_role(input.lambda_role)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn list_open_workflow_executions(
        &self,
        input: ListOpenWorkflowExecutionsInput,
    ) -> Result<ListOpenWorkflowExecutionsOutput, BoxError> {
        self.client
            .list_open_workflow_executions()
            .set_domain(input.domain)
            .set_start_time_filter(input.start_time_filter)
            .set_type_filter(input.type_filter)
            .set_tag_filter(input.tag_filter)
            .set_execution_filter(input.execution_filter)
            .set_maximum_page_size(input.maximum_page_size)
            .set_next_page_token(input.next_page_token)
            .set_reverse_order(input.reverse_order)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn signal_workflow_execution(
        &self,
        input: SignalWorkflowExecutionInput,
    ) -> Result<SignalWorkflowExecutionOutput, BoxError> {
        self.client
            .signal_workflow_execution()
            .set_domain(input.domain)
            .set_workflow_id(input.workflow_id)
            .set_run_id(input.run_id)
            .set_signal_name(input.signal_name)
            .set_input(input.input)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn terminate_workflow_execution(
        &self,
        input: TerminateWorkflowExecutionInput,
    ) -> Result<TerminateWorkflowExecutionOutput, BoxError> {
        self.client
            .terminate_workflow_execution()
            .set_domain(input.domain)
            .set_workflow_id(input.workflow_id)
            .set_run_id(input.run_id)
            .set_reason(input.reason)
            .set_details(input.details)
            .set_child_policy(input.child_policy)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn get_workflow_execution_history(
        &self,
        input: GetWorkflowExecutionHistoryInput,
    ) -> Result<GetWorkflowExecutionHistoryOutput, BoxError> {
        self.client
            .get_workflow_execution_history()
            .set_domain(input.domain)
            .set_execution(input.execution)
            .set_maximum_page_size(input.maximum_page_size)
            .set_next_page_token(input.next_page_token)
            .set_reverse_order(input.reverse_order)
            .send()
            .await
            .map_err(Into::into)
    }
}
