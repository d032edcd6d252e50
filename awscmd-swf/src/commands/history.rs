use super::{build_failed, page_size, MAX_PAGE_SIZE};
use crate::api::SwfApi;
use crate::groups::ExecutionGroup;
use crate::views::{HistoryEventView, HistoryView};
use aws_sdk_swf::operation::get_workflow_execution_history::GetWorkflowExecutionHistoryInput;
use awscmd_core::{
    require_group, CommandOutput, InvocationContext, InvocationResult, Page, PageRequest,
    Paginator, PagingOptions,
};
use clap::Args;

pub(crate) const GET_WORKFLOW_EXECUTION_HISTORY: &str = "GetWorkflowExecutionHistory";

#[derive(Debug, Clone, Args)]
pub struct GetWorkflowExecutionHistoryParams {
    #[arg(long)]
    pub domain: String,

    #[arg(long, alias = "workflow-id")]
    pub execution_workflow_id: Option<String>,

    #[arg(long, alias = "run-id")]
    pub execution_run_id: Option<String>,

    /// Return events newest first
    #[arg(long)]
    pub reverse_order: bool,

    #[command(flatten)]
    pub paging: PagingOptions,
}

impl GetWorkflowExecutionHistoryParams {
    pub(crate) fn build_input(
        &self,
        page: &PageRequest,
    ) -> InvocationResult<GetWorkflowExecutionHistoryInput> {
        let execution = require_group(
            ExecutionGroup {
                workflow_id: self.execution_workflow_id.as_deref(),
                run_id: self.execution_run_id.as_deref(),
            },
            "--execution-workflow-id and --execution-run-id",
        )?;

        GetWorkflowExecutionHistoryInput::builder()
            .domain(&self.domain)
            .execution(execution)
            .set_reverse_order(self.reverse_order.then_some(true))
            .set_maximum_page_size(page_size(page.page_size))
            .set_next_page_token(page.token.clone())
            .build()
            .map_err(build_failed(GET_WORKFLOW_EXECUTION_HISTORY))
    }
}

pub(crate) async fn get_workflow_execution_history(
    api: &dyn SwfApi,
    ctx: InvocationContext<GetWorkflowExecutionHistoryParams>,
) -> InvocationResult<CommandOutput> {
    ctx.params.build_input(&PageRequest::default())?;

    let ctx = &ctx;
    let collected = Paginator::new(
        ctx.params.paging.clone(),
        Some(MAX_PAGE_SIZE),
        move |page: PageRequest| {
            let input = ctx.params.build_input(&page);
            async move {
                let output = api
                    .get_workflow_execution_history(input?)
                    .await
                    .map_err(|e| ctx.call_failed(e))?;
                Ok(Page::new(
                    output.events().iter().map(HistoryEventView::from).collect(),
                    output.next_page_token().map(str::to_string),
                ))
            }
        },
    )
    .collect()
    .await?;

    let view = HistoryView {
        events: collected.items,
        next_page_token: collected.next_token.clone(),
    };
    Ok(CommandOutput::new(&view, Some("Events"))?.with_next_token(collected.next_token))
}
