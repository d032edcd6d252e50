//! Workflow execution operations

use super::{build_failed, page_size, CHILD_POLICIES, MAX_PAGE_SIZE};
use crate::api::SwfApi;
use crate::groups::{
    ExecutionFilterGroup, StartTimeFilterGroup, TagFilterGroup, TaskListGroup, TypeFilterGroup,
    WorkflowTypeGroup,
};
use crate::views::{EmptyView, ExecutionInfoView, ExecutionListView, RunView};
use aws_sdk_swf::operation::list_open_workflow_executions::ListOpenWorkflowExecutionsInput;
use aws_sdk_swf::operation::signal_workflow_execution::SignalWorkflowExecutionInput;
use aws_sdk_swf::operation::start_workflow_execution::StartWorkflowExecutionInput;
use aws_sdk_swf::operation::terminate_workflow_execution::TerminateWorkflowExecutionInput;
use aws_sdk_swf::types::ChildPolicy;
use awscmd_core::{
    execute_confirmed, require_group, CommandOutput, ConfirmationGate, InvocationContext,
    InvocationError, InvocationResult, Outcome, Page, PageRequest, Paginator, PagingOptions,
    ParameterGroup,
};
use chrono::{DateTime, Utc};
use clap::Args;

pub(crate) const START_WORKFLOW_EXECUTION: &str = "StartWorkflowExecution";
pub(crate) const LIST_OPEN_WORKFLOW_EXECUTIONS: &str = "ListOpenWorkflowExecutions";
pub(crate) const SIGNAL_WORKFLOW_EXECUTION: &str = "SignalWorkflowExecution";
pub(crate) const TERMINATE_WORKFLOW_EXECUTION: &str = "TerminateWorkflowExecution";

fn child_policy(raw: Option<&String>) -> Option<ChildPolicy> {
    raw.map(|policy| ChildPolicy::from(policy.as_str()))
}

#[derive(Debug, Clone, Args)]
pub struct StartWorkflowExecutionParams {
    #[arg(long)]
    pub domain: String,

    /// User-defined identifier for the execution
    #[arg(long)]
    pub workflow_id: String,

    #[arg(long)]
    pub workflow_type_name: Option<String>,

    #[arg(long)]
    pub workflow_type_version: Option<String>,

    /// Overrides the workflow type's default decision task list
    #[arg(long, alias = "task-list-name")]
    pub task_list: Option<String>,

    #[arg(long)]
    pub task_priority: Option<String>,

    /// Input made available to the new execution
    #[arg(long)]
    pub input: Option<String>,

    #[arg(long)]
    pub execution_start_to_close_timeout: Option<String>,

    #[arg(long)]
    pub task_start_to_close_timeout: Option<String>,

    /// Tag to associate with the execution; may be repeated (up to 5)
    #[arg(long = "tag-list", value_name = "TAG")]
    pub tag_list: Vec<String>,

    #[arg(long, value_parser = CHILD_POLICIES)]
    pub child_policy: Option<String>,

    /// IAM role that lambda functions in this execution run as
    #[arg(long)]
    pub lambda_role: Option<String>,
}

impl StartWorkflowExecutionParams {
    pub(crate) fn build_input(&self) -> InvocationResult<StartWorkflowExecutionInput> {
        let workflow_type = require_group(
            WorkflowTypeGroup {
                name: self.workflow_type_name.as_deref(),
                version: self.workflow_type_version.as_deref(),
            },
            "--workflow-type-name and --workflow-type-version",
        )?;
        let task_list = TaskListGroup {
            name: self.task_list.as_deref(),
            flag: "--task-list",
        }
        .build()?;

        StartWorkflowExecutionInput::builder()
            .domain(&self.domain)
            .workflow_id(&self.workflow_id)
            .workflow_type(workflow_type)
            .set_task_list(task_list)
            .set_task_priority(self.task_priority.clone())
            .set_input(self.input.clone())
            .set_execution_start_to_close_timeout(self.execution_start_to_close_timeout.clone())
            .set_task_start_to_close_timeout(self.task_start_to_close_timeout.clone())
            .set_tag_list((!self.tag_list.is_empty()).then(|| self.tag_list.clone()))
            .set_child_policy(child_policy(self.child_policy.as_ref()))
            .set_lambda_role(self.lambda_role.clone())
            .build()
            .map_err(build_failed(START_WORKFLOW_EXECUTION))
    }
}

pub(crate) async fn start_workflow_execution(
    api: &dyn SwfApi,
    ctx: InvocationContext<StartWorkflowExecutionParams>,
    gate: &ConfirmationGate,
) -> InvocationResult<Outcome<CommandOutput>> {
    let target = ctx.params.workflow_id.clone();
    execute_confirmed(
        &ctx,
        gate,
        &target,
        StartWorkflowExecutionParams::build_input,
        |input| api.start_workflow_execution(input),
    )
    .await?
    .try_map(|output| {
        let view = RunView {
            run_id: output.run_id().map(str::to_string),
        };
        CommandOutput::new(&view, Some("RunId"))
    })
}

#[derive(Debug, Clone, Args)]
pub struct ListOpenWorkflowExecutionsParams {
    #[arg(long)]
    pub domain: String,

    /// Only executions started at or after this time (RFC 3339)
    #[arg(long, alias = "start-time-filter-oldest-date")]
    pub oldest_date: Option<DateTime<Utc>>,

    /// Only executions started at or before this time (RFC 3339)
    #[arg(long, alias = "start-time-filter-latest-date")]
    pub latest_date: Option<DateTime<Utc>>,

    /// Only executions of this workflow type
    #[arg(long)]
    pub type_name: Option<String>,

    #[arg(long)]
    pub type_version: Option<String>,

    /// Only executions carrying this tag
    #[arg(long)]
    pub tag_filter: Option<String>,

    /// Only executions with this workflow id
    #[arg(long)]
    pub execution_filter_workflow_id: Option<String>,

    #[arg(long)]
    pub reverse_order: bool,

    #[command(flatten)]
    pub paging: PagingOptions,
}

impl ListOpenWorkflowExecutionsParams {
    pub(crate) fn build_input(
        &self,
        page: &PageRequest,
    ) -> InvocationResult<ListOpenWorkflowExecutionsInput> {
        let start_time_filter = require_group(
            StartTimeFilterGroup {
                oldest_date: self.oldest_date.as_ref(),
                latest_date: self.latest_date.as_ref(),
            },
            "--oldest-date",
        )?;
        let type_filter = TypeFilterGroup {
            name: self.type_name.as_deref(),
            version: self.type_version.as_deref(),
        }
        .build()?;
        let tag_filter = TagFilterGroup {
            tag: self.tag_filter.as_deref(),
        }
        .build()?;
        let execution_filter = ExecutionFilterGroup {
            workflow_id: self.execution_filter_workflow_id.as_deref(),
        }
        .build()?;

        // The service accepts at most one of these filters per call
        let filters = [
            type_filter.is_some(),
            tag_filter.is_some(),
            execution_filter.is_some(),
        ];
        if filters.iter().filter(|set| **set).count() > 1 {
            return Err(InvocationError::invalid_parameter(
                "--type-name/--tag-filter/--execution-filter-workflow-id",
                "only one of the type, tag or execution filters may be given",
            ));
        }

        ListOpenWorkflowExecutionsInput::builder()
            .domain(&self.domain)
            .start_time_filter(start_time_filter)
            .set_type_filter(type_filter)
            .set_tag_filter(tag_filter)
            .set_execution_filter(execution_filter)
            .set_reverse_order(self.reverse_order.then_some(true))
            .set_maximum_page_size(page_size(page.page_size))
            .set_next_page_token(page.token.clone())
            .build()
            .map_err(build_failed(LIST_OPEN_WORKFLOW_EXECUTIONS))
    }
}

pub(crate) async fn list_open_workflow_executions(
    api: &dyn SwfApi,
    ctx: InvocationContext<ListOpenWorkflowExecutionsParams>,
) -> InvocationResult<CommandOutput> {
    // Reject bad filters before the first request goes out
    ctx.params.build_input(&PageRequest::default())?;

    let ctx = &ctx;
    let collected = Paginator::new(
        ctx.params.paging.clone(),
        Some(MAX_PAGE_SIZE),
        move |page: PageRequest| {
            let input = ctx.params.build_input(&page);
            async move {
                let output = api
                    .list_open_workflow_executions(input?)
                    .await
                    .map_err(|e| ctx.call_failed(e))?;
                Ok(Page::new(
                    output
                        .execution_infos()
                        .iter()
                        .map(ExecutionInfoView::from)
                        .collect(),
                    output.next_page_token().map(str::to_string),
                ))
            }
        },
    )
    .collect()
    .await?;

    let view = ExecutionListView {
        execution_infos: collected.items,
        next_page_token: collected.next_token.clone(),
    };
    Ok(CommandOutput::new(&view, Some("ExecutionInfos"))?.with_next_token(collected.next_token))
}

#[derive(Debug, Clone, Args)]
pub struct SignalWorkflowExecutionParams {
    #[arg(long)]
    pub domain: String,

    #[arg(long)]
    pub workflow_id: String,

    /// Run to signal; defaults to the current run of the workflow id
    #[arg(long)]
    pub run_id: Option<String>,

    #[arg(long)]
    pub signal_name: String,

    /// Data attached to the signal
    #[arg(long)]
    pub input: Option<String>,
}

impl SignalWorkflowExecutionParams {
    pub(crate) fn build_input(&self) -> InvocationResult<SignalWorkflowExecutionInput> {
        SignalWorkflowExecutionInput::builder()
            .domain(&self.domain)
            .workflow_id(&self.workflow_id)
            .set_run_id(self.run_id.clone())
            .signal_name(&self.signal_name)
            .set_input(self.input.clone())
            .build()
            .map_err(build_failed(SIGNAL_WORKFLOW_EXECUTION))
    }
}

pub(crate) async fn signal_workflow_execution(
    api: &dyn SwfApi,
    ctx: InvocationContext<SignalWorkflowExecutionParams>,
    gate: &ConfirmationGate,
) -> InvocationResult<Outcome<CommandOutput>> {
    let target = ctx.params.workflow_id.clone();
    execute_confirmed(
        &ctx,
        gate,
        &target,
        SignalWorkflowExecutionParams::build_input,
        |input| api.signal_workflow_execution(input),
    )
    .await?
    .try_map(|_| CommandOutput::new(&EmptyView {}, None))
}

#[derive(Debug, Clone, Args)]
pub struct TerminateWorkflowExecutionParams {
    #[arg(long)]
    pub domain: String,

    #[arg(long)]
    pub workflow_id: String,

    #[arg(long)]
    pub run_id: Option<String>,

    /// Descriptive reason recorded in the history
    #[arg(long)]
    pub reason: Option<String>,

    #[arg(long)]
    pub details: Option<String>,

    #[arg(long, value_parser = CHILD_POLICIES)]
    pub child_policy: Option<String>,
}

impl TerminateWorkflowExecutionParams {
    pub(crate) fn build_input(&self) -> InvocationResult<TerminateWorkflowExecutionInput> {
        TerminateWorkflowExecutionInput::builder()
            .domain(&self.domain)
            .workflow_id(&self.workflow_id)
            .set_run_id(self.run_id.clone())
            .set_reason(self.reason.clone())
            .set_details(self.details.clone())
            .set_child_policy(child_policy(self.child_policy.as_ref()))
            .build()
            .map_err(build_failed(TERMINATE_WORKFLOW_EXECUTION))
    }
}

pub(crate) async fn terminate_workflow_execution(
    api: &dyn SwfApi,
    ctx: InvocationContext<TerminateWorkflowExecutionParams>,
    gate: &ConfirmationGate,
) -> InvocationResult<Outcome<CommandOutput>> {
    let target = ctx.params.workflow_id.clone();
    execute_confirmed(
        &ctx,
        gate,
        &target,
        TerminateWorkflowExecutionParams::build_input,
        |input| api.terminate_workflow_execution(input),
    )
    .await?
    .try_map(|_| CommandOutput::new(&EmptyView {}, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{endpoint, execution_page, FakeSwf};
    use awscmd_core::test_support::ScriptedPrompter;
    use serde_json::json;

    fn start_params() -> StartWorkflowExecutionParams {
        StartWorkflowExecutionParams {
            domain: "orders".to_string(),
            workflow_id: "order-42".to_string(),
            workflow_type_name: Some("OrderFlow".to_string()),
            workflow_type_version: Some("1.0".to_string()),
            task_list: None,
            task_priority: None,
            input: None,
            execution_start_to_close_timeout: None,
            task_start_to_close_timeout: None,
            tag_list: vec![],
            child_policy: None,
            lambda_role: None,
        }
    }

    fn list_params() -> ListOpenWorkflowExecutionsParams {
        ListOpenWorkflowExecutionsParams {
            domain: "orders".to_string(),
            oldest_date: Some("2024-01-01T00:00:00Z".parse().unwrap()),
            latest_date: None,
            type_name: None,
            type_version: None,
            tag_filter: None,
            execution_filter_workflow_id: None,
            reverse_order: false,
            paging: PagingOptions::default(),
        }
    }

    #[test]
    fn test_start_maps_groups_and_collections() {
        let params = StartWorkflowExecutionParams {
            task_list: Some("deciders".to_string()),
            tag_list: vec!["priority".to_string(), "eu".to_string()],
            child_policy: Some("ABANDON".to_string()),
            ..start_params()
        };
        let input = params.build_input().unwrap();

        let workflow_type = input.workflow_type.expect("workflow type should be sent");
        assert_eq!(workflow_type.name(), "OrderFlow");
        assert_eq!(workflow_type.version(), "1.0");
        assert_eq!(input.task_list.expect("task list").name(), "deciders");
        assert_eq!(
            input.tag_list,
            Some(vec!["priority".to_string(), "eu".to_string()])
        );
        assert_eq!(input.child_policy, Some(ChildPolicy::Abandon));
    }

    #[test]
    fn test_start_leaves_unset_optionals_out() {
        let input = start_params().build_input().unwrap();
        assert!(input.task_list.is_none());
        assert!(input.tag_list.is_none());
        assert!(input.child_policy.is_none());
        assert!(input.lambda_role.is_none());
    }

    #[test]
    fn test_start_requires_workflow_type() {
        let params = StartWorkflowExecutionParams {
            workflow_type_name: None,
            workflow_type_version: None,
            ..start_params()
        };
        let err = params.build_input().unwrap_err();
        assert!(err.is_usage_error());
        assert!(err.to_string().contains("--workflow-type-name"), "{err}");
    }

    #[test]
    fn test_start_rejects_partial_workflow_type() {
        let params = StartWorkflowExecutionParams {
            workflow_type_version: None,
            ..start_params()
        };
        let err = params.build_input().unwrap_err();
        assert!(err.to_string().contains("--workflow-type-version"), "{err}");
    }

    #[tokio::test]
    async fn test_start_emits_run_id() {
        let fake = FakeSwf::default();
        let gate = ConfirmationGate::new(true, Box::new(ScriptedPrompter::answering(false)));

        let outcome = start_workflow_execution(
            &fake,
            InvocationContext::new(START_WORKFLOW_EXECUTION, endpoint(), start_params()),
            &gate,
        )
        .await
        .unwrap();

        let Outcome::Completed(output) = outcome else {
            panic!("Expected the call to complete");
        };
        assert_eq!(
            output.select(&awscmd_core::Selection::Primary).unwrap(),
            json!("run-1")
        );
    }

    #[tokio::test]
    async fn test_start_with_bad_input_never_prompts() {
        let fake = FakeSwf::default();
        let prompter = ScriptedPrompter::answering(true);
        let asked = prompter.asked();
        let gate = ConfirmationGate::new(false, Box::new(prompter));
        let params = StartWorkflowExecutionParams {
            workflow_type_name: None,
            ..start_params()
        };

        let err = start_workflow_execution(
            &fake,
            InvocationContext::new(START_WORKFLOW_EXECUTION, endpoint(), params),
            &gate,
        )
        .await
        .unwrap_err();

        assert!(err.is_usage_error());
        assert_eq!(asked.load(std::sync::atomic::Ordering::SeqCst), 0);
        assert_eq!(fake.call_count(), 0);
    }

    #[test]
    fn test_list_requires_start_time_filter() {
        let params = ListOpenWorkflowExecutionsParams {
            oldest_date: None,
            ..list_params()
        };
        let err = params.build_input(&PageRequest::default()).unwrap_err();
        assert!(err.to_string().contains("--oldest-date"), "{err}");
    }

    #[test]
    fn test_list_rejects_combined_filters() {
        let params = ListOpenWorkflowExecutionsParams {
            type_name: Some("OrderFlow".to_string()),
            tag_filter: Some("eu".to_string()),
            ..list_params()
        };
        let err = params.build_input(&PageRequest::default()).unwrap_err();
        assert!(err.is_usage_error());
    }

    #[test]
    fn test_list_filter_groups_are_null_when_unset() {
        let input = list_params()
            .build_input(&PageRequest::default())
            .unwrap();
        assert!(input.type_filter.is_none());
        assert!(input.tag_filter.is_none());
        assert!(input.execution_filter.is_none());
        assert_eq!(
            input.start_time_filter.expect("start filter").oldest_date().secs(),
            1_704_067_200
        );
    }

    #[tokio::test]
    async fn test_list_open_executions_collects_pages() {
        let fake = FakeSwf::default();
        fake.push_execution_page(execution_page(&["w1", "w2"], Some("T1")));
        fake.push_execution_page(execution_page(&["w3"], None));

        let output = list_open_workflow_executions(
            &fake,
            InvocationContext::new(LIST_OPEN_WORKFLOW_EXECUTIONS, endpoint(), list_params()),
        )
        .await
        .unwrap();

        let ids: Vec<_> = output.response["ExecutionInfos"]
            .as_array()
            .unwrap()
            .iter()
            .map(|info| info["Execution"]["WorkflowId"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["w1", "w2", "w3"]);
        assert_eq!(fake.execution_inputs().len(), 2);
    }

    #[tokio::test]
    async fn test_terminate_declined_without_confirmation() {
        let fake = FakeSwf::default();
        let gate = ConfirmationGate::new(false, Box::new(ScriptedPrompter::answering(false)));
        let params = TerminateWorkflowExecutionParams {
            domain: "orders".to_string(),
            workflow_id: "order-42".to_string(),
            run_id: None,
            reason: Some("stuck".to_string()),
            details: None,
            child_policy: Some("TERMINATE".to_string()),
        };

        let outcome = terminate_workflow_execution(
            &fake,
            InvocationContext::new(TERMINATE_WORKFLOW_EXECUTION, endpoint(), params),
            &gate,
        )
        .await
        .unwrap();

        assert_eq!(outcome, Outcome::Declined);
        assert_eq!(fake.call_count(), 0);
    }

    #[test]
    fn test_signal_maps_fields() {
        let params = SignalWorkflowExecutionParams {
            domain: "orders".to_string(),
            workflow_id: "order-42".to_string(),
            run_id: Some("run-1".to_string()),
            signal_name: "Cancel".to_string(),
            input: None,
        };
        let input = params.build_input().unwrap();
        assert_eq!(input.signal_name.as_deref(), Some("Cancel"));
        assert_eq!(input.run_id.as_deref(), Some("run-1"));
        assert!(input.input.is_none());
    }
}
