//! SWF commands: one params struct and one handler per operation.

mod activity_types;
mod domains;
mod executions;
mod history;

pub use activity_types::{ListActivityTypesParams, RegisterActivityTypeParams};
pub use domains::{
    DeprecateDomainParams, DescribeDomainParams, ListDomainsParams, RegisterDomainParams,
};
pub use executions::{
    ListOpenWorkflowExecutionsParams, SignalWorkflowExecutionParams,
    StartWorkflowExecutionParams, TerminateWorkflowExecutionParams,
};
pub use history::GetWorkflowExecutionHistoryParams;

use crate::api::SwfApi;
use aws_sdk_swf::error::BuildError;
use awscmd_core::{
    CommandOutput, ConfirmationGate, EndpointContext, InvocationContext, InvocationError,
    InvocationResult, Outcome,
};
use clap::Subcommand;

/// Largest `maximumPageSize` SWF accepts.
pub const MAX_PAGE_SIZE: u32 = 1000;

pub(crate) const REGISTRATION_STATUSES: [&str; 2] = ["REGISTERED", "DEPRECATED"];
pub(crate) const CHILD_POLICIES: [&str; 3] = ["TERMINATE", "REQUEST_CANCEL", "ABANDON"];

fn page_size(size: Option<u32>) -> Option<i32> {
    size.map(|s| i32::try_from(s).unwrap_or(i32::MAX))
}

fn build_failed(operation: &str) -> impl FnOnce(BuildError) -> InvocationError + '_ {
    move |e| InvocationError::request_build(operation, e)
}

#[derive(Debug, Subcommand)]
pub enum SwfCommand {
    /// List domains with the given registration status
    ListDomains(ListDomainsParams),
    /// Show a domain's status and configuration
    DescribeDomain(DescribeDomainParams),
    /// Register a new domain
    RegisterDomain(RegisterDomainParams),
    /// Deprecate a domain
    DeprecateDomain(DeprecateDomainParams),
    /// List activity types registered in a domain
    ListActivityTypes(ListActivityTypesParams),
    /// Register a new activity type
    RegisterActivityType(RegisterActivityTypeParams),
    /// Start a workflow execution
    StartWorkflowExecution(StartWorkflowExecutionParams),
    /// List open workflow executions in a domain
    ListOpenWorkflowExecutions(ListOpenWorkflowExecutionsParams),
    /// Send a signal to a running workflow execution
    SignalWorkflowExecution(SignalWorkflowExecutionParams),
    /// Terminate a running workflow execution
    TerminateWorkflowExecution(TerminateWorkflowExecutionParams),
    /// Page through the event history of a workflow execution
    GetWorkflowExecutionHistory(GetWorkflowExecutionHistoryParams),
}

impl SwfCommand {
    pub async fn run(
        self,
        api: &dyn SwfApi,
        endpoint: EndpointContext,
        gate: &ConfirmationGate,
    ) -> InvocationResult<Outcome<CommandOutput>> {
        match self {
            Self::ListDomains(params) => {
                let ctx = InvocationContext::new(domains::LIST_DOMAINS, endpoint, params);
                domains::list_domains(api, ctx)
                    .await
                    .map(Outcome::Completed)
            }
            Self::DescribeDomain(params) => {
                let ctx = InvocationContext::new(domains::DESCRIBE_DOMAIN, endpoint, params);
                domains::describe_domain(api, ctx)
                    .await
                    .map(Outcome::Completed)
            }
            Self::RegisterDomain(params) => {
                let ctx = InvocationContext::new(domains::REGISTER_DOMAIN, endpoint, params);
                domains::register_domain(api, ctx, gate).await
            }
            Self::DeprecateDomain(params) => {
                let ctx = InvocationContext::new(domains::DEPRECATE_DOMAIN, endpoint, params);
                domains::deprecate_domain(api, ctx, gate).await
            }
            Self::ListActivityTypes(params) => {
                let ctx = InvocationContext::new(
                    activity_types::LIST_ACTIVITY_TYPES,
                    endpoint,
                    params,
                );
                activity_types::list_activity_types(api, ctx)
                    .await
                    .map(Outcome::Completed)
            }
            Self::RegisterActivityType(params) => {
                let ctx = InvocationContext::new(
                    activity_types::REGISTER_ACTIVITY_TYPE,
                    endpoint,
                    params,
                );
                activity_types::register_activity_type(api, ctx, gate).await
            }
            Self::StartWorkflowExecution(params) => {
                let ctx = InvocationContext::new(
                    executions::START_WORKFLOW_EXECUTION,
                    endpoint,
                    params,
                );
                executions::start_workflow_execution(api, ctx, gate).await
            }
            Self::ListOpenWorkflowExecutions(params) => {
                let ctx = InvocationContext::new(
                    executions::LIST_OPEN_WORKFLOW_EXECUTIONS,
                    endpoint,
                    params,
                );
                executions::list_open_workflow_executions(api, ctx)
                    .await
                    .map(Outcome::Completed)
            }
            Self::SignalWorkflowExecution(params) => {
                let ctx = InvocationContext::new(
                    executions::SIGNAL_WORKFLOW_EXECUTION,
                    endpoint,
                    params,
                );
                executions::signal_workflow_execution(api, ctx, gate).await
            }
            Self::TerminateWorkflowExecution(params) => {
                let ctx = InvocationContext::new(
                    executions::TERMINATE_WORKFLOW_EXECUTION,
                    endpoint,
                    params,
                );
                executions::terminate_workflow_execution(api, ctx, gate).await
            }
            Self::GetWorkflowExecutionHistory(params) => {
                let ctx = InvocationContext::new(
                    history::GET_WORKFLOW_EXECUTION_HISTORY,
                    endpoint,
                    params,
                );
                history::get_workflow_execution_history(api, ctx)
                    .await
                    .map(Outcome::Completed)
            }
        }
    }
}
