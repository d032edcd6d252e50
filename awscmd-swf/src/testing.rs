//! Recording [`SwfApi`] fake for command tests.

use crate::api::SwfApi;
use async_trait::async_trait;
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
use aws_sdk_swf::primitives::DateTime;
use aws_sdk_swf::types::{
    ActivityType, ActivityTypeInfo, DomainInfo, EventType, ExecutionStatus, HistoryEvent,
    RegistrationStatus, WorkflowExecution, WorkflowExecutionInfo,
};
use awscmd_core::{BoxError, EndpointContext};
use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub(crate) fn endpoint() -> EndpointContext {
    EndpointContext {
        service: "swf".to_string(),
        region: Some("us-east-1".to_string()),
        endpoint_url: None,
    }
}

fn token(next: Option<&str>) -> Option<String> {
    next.map(str::to_string)
}

pub(crate) fn domain_page(names: &[&str], next: Option<&str>) -> ListDomainsOutput {
    let infos = names
        .iter()
        .map(|name| {
            DomainInfo::builder()
                .name(*name)
                .status(RegistrationStatus::Registered)
                .build()
                .expect("domain info")
        })
        .collect();
    ListDomainsOutput::builder()
        .set_domain_infos(Some(infos))
        .set_next_page_token(token(next))
        .build()
        .expect("list domains output")
}

pub(crate) fn activity_page(names: &[&str], next: Option<&str>) -> ListActivityTypesOutput {
    let infos = names
        .iter()
        .map(|name| {
            ActivityTypeInfo::builder()
                .activity_type(
                    ActivityType::builder()
                        .name(*name)
                        .version("1")
                        .build()
                        .expect("activity type"),
                )
                .status(RegistrationStatus::Registered)
                .creation_date(DateTime::from_secs(1_704_067_200))
                .build()
                .expect("activity type info")
        })
        .collect();
    ListActivityTypesOutput::builder()
        .set_type_infos(Some(infos))
        .set_next_page_token(token(next))
        .build()
        .expect("list activity types output")
}

pub(crate) fn execution_page(
    workflow_ids: &[&str],
    next: Option<&str>,
) -> ListOpenWorkflowExecutionsOutput {
    let infos = workflow_ids
        .iter()
        .map(|id| {
            WorkflowExecutionInfo::builder()
                .execution(
                    WorkflowExecution::builder()
                        .workflow_id(*id)
                        .run_id(format!("{id}-run"))
                        .build()
                        .expect("workflow execution"),
                )
                .start_timestamp(DateTime::from_secs(1_704_067_200))
                .execution_status(ExecutionStatus::Open)
                .build()
                .expect("execution info")
        })
        .collect();
    ListOpenWorkflowExecutionsOutput::builder()
        .set_execution_infos(Some(infos))
        .set_next_page_token(token(next))
        .build()
        .expect("list open executions output")
}

pub(crate) fn history_page(
    event_ids: RangeInclusive<i64>,
    next: Option<&str>,
) -> GetWorkflowExecutionHistoryOutput {
    let events = event_ids
        .map(|id| {
            HistoryEvent::builder()
                .event_id(id)
                .event_type(EventType::WorkflowExecutionSignaled)
                .event_timestamp(DateTime::from_secs(1_704_067_200 + id))
                .build()
                .expect("history event")
        })
        .collect();
    GetWorkflowExecutionHistoryOutput::builder()
        .set_events(Some(events))
        .set_next_page_token(token(next))
        .build()
        .expect("history output")
}

fn exhausted(operation: &str) -> BoxError {
    format!("no scripted {operation} response left").into()
}

/// Serves scripted pages in order and records every request it receives.
/// Lists fail once their pages run out; describe always fails.
#[derive(Default)]
pub(crate) struct FakeSwf {
    calls: AtomicUsize,
    domain_pages: Mutex<VecDeque<ListDomainsOutput>>,
    domain_inputs: Mutex<Vec<ListDomainsInput>>,
    activity_pages: Mutex<VecDeque<ListActivityTypesOutput>>,
    activity_inputs: Mutex<Vec<ListActivityTypesInput>>,
    execution_pages: Mutex<VecDeque<ListOpenWorkflowExecutionsOutput>>,
    execution_inputs: Mutex<Vec<ListOpenWorkflowExecutionsInput>>,
    history_pages: Mutex<VecDeque<GetWorkflowExecutionHistoryOutput>>,
    history_inputs: Mutex<Vec<GetWorkflowExecutionHistoryInput>>,
}

impl FakeSwf {
    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn push_domain_page(&self, page: ListDomainsOutput) {
        self.domain_pages.lock().unwrap().push_back(page);
    }

    pub(crate) fn push_activity_page(&self, page: ListActivityTypesOutput) {
        self.activity_pages.lock().unwrap().push_back(page);
    }

    pub(crate) fn push_execution_page(&self, page: ListOpenWorkflowExecutionsOutput) {
        self.execution_pages.lock().unwrap().push_back(page);
    }

    pub(crate) fn push_history_page(&self, page: GetWorkflowExecutionHistoryOutput) {
        self.history_pages.lock().unwrap().push_back(page);
    }

    pub(crate) fn domain_inputs(&self) -> Vec<ListDomainsInput> {
        self.domain_inputs.lock().unwrap().clone()
    }

    pub(crate) fn activity_inputs(&self) -> Vec<ListActivityTypesInput> {
        self.activity_inputs.lock().unwrap().clone()
    }

    pub(crate) fn execution_inputs(&self) -> Vec<ListOpenWorkflowExecutionsInput> {
        self.execution_inputs.lock().unwrap().clone()
    }

    pub(crate) fn history_inputs(&self) -> Vec<GetWorkflowExecutionHistoryInput> {
        self.history_inputs.lock().unwrap().clone()
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
        .ok_or_else(|| exhausted(operation))
}

#[async_trait]
impl SwfApi for FakeSwf {
    async fn list_domains(&self, input: ListDomainsInput) -> Result<ListDomainsOutput, BoxError> {
        self.record();
        serve(&self.domain_inputs, &self.domain_pages, input, "ListDomains")
    }

    async fn describe_domain(
        &self,
        _input: DescribeDomainInput,
    ) -> Result<DescribeDomainOutput, BoxError> {
        self.record();
        Err("UnknownResourceFault: Unknown domain: orders".into())
    }

    async fn register_domain(
        &self,
        _input: RegisterDomainInput,
    ) -> Result<RegisterDomainOutput, BoxError> {
        self.record();
        Ok(RegisterDomainOutput::builder().build())
    }

    async fn deprecate_domain(
        &self,
        _input: DeprecateDomainInput,
    ) -> Result<DeprecateDomainOutput, BoxError> {
        self.record();
        Ok(DeprecateDomainOutput::builder().build())
    }

    async fn list_activity_types(
        &self,
        input: ListActivityTypesInput,
    ) -> Result<ListActivityTypesOutput, BoxError> {
        self.record();
        serve(
            &self.activity_inputs,
            &self.activity_pages,
            input,
            "ListActivityTypes",
        )
    }

    async fn register_activity_type(
        &self,
        _input: RegisterActivityTypeInput,
    ) -> Result<RegisterActivityTypeOutput, BoxError> {
        self.record();
        Ok(RegisterActivityTypeOutput::builder().build())
    }

    async fn start_workflow_execution(
        &self,
        _input: StartWorkflowExecutionInput,
    ) -> Result<StartWorkflowExecutionOutput, BoxError> {
        self.record();
        Ok(StartWorkflowExecutionOutput::builder().run_id("run-1").build())
    }

    async fn list_open_workflow_executions(
        &self,
        input: ListOpenWorkflowExecutionsInput,
    ) -> Result<ListOpenWorkflowExecutionsOutput, BoxError> {
        self.record();
        serve(
            &self.execution_inputs,
            &self.execution_pages,
            input,
            "ListOpenWorkflowExecutions",
        )
    }

    async fn signal_workflow_execution(
        &self,
        _input: SignalWorkflowExecutionInput,
    ) -> Result<SignalWorkflowExecutionOutput, BoxError> {
        self.record();
        Ok(SignalWorkflowExecutionOutput::builder().build())
    }

    async fn terminate_workflow_execution(
        &self,
        _input: TerminateWorkflowExecutionInput,
    ) -> Result<TerminateWorkflowExecutionOutput, BoxError> {
        self.record();
        Ok(TerminateWorkflowExecutionOutput::builder().build())
    }

    async fn get_workflow_execution_history(
        &self,
        input: GetWorkflowExecutionHistoryInput,
    ) -> Result<GetWorkflowExecutionHistoryOutput, BoxError> {
        self.record();
        serve(
            &self.history_inputs,
            &self.history_pages,
            input,
            "GetWorkflowExecutionHistory",
        )
    }
}
