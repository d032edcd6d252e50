use super::{build_failed, page_size, MAX_PAGE_SIZE, REGISTRATION_STATUSES};
use crate::api::SwfApi;
use crate::groups::TaskListGroup;
use crate::views::{ActivityTypeInfoView, ActivityTypeListView, EmptyView};
use aws_sdk_swf::operation::list_activity_types::ListActivityTypesInput;
use aws_sdk_swf::operation::register_activity_type::RegisterActivityTypeInput;
use aws_sdk_swf::types::RegistrationStatus;
use awscmd_core::{
    execute_confirmed, CommandOutput, ConfirmationGate, InvocationContext, InvocationResult,
    Outcome, Page, PageRequest, Paginator, PagingOptions, ParameterGroup,
};
use clap::Args;

pub(crate) const LIST_ACTIVITY_TYPES: &str = "ListActivityTypes";
pub(crate) const REGISTER_ACTIVITY_TYPE: &str = "RegisterActivityType";

#[derive(Debug, Clone, Args)]
pub struct ListActivityTypesParams {
    /// Domain the activity types are registered in
    #[arg(long)]
    pub domain: String,

    /// Only list activity types with this name
    #[arg(long)]
    pub name: Option<String>,

    /// Only list activity types with this status
    #[arg(long, value_parser = REGISTRATION_STATUSES)]
    pub registration_status: String,

    /// Return results in reverse alphabetical order
    #[arg(long)]
    pub reverse_order: bool,

    #[command(flatten)]
    pub paging: PagingOptions,
}

impl ListActivityTypesParams {
    pub(crate) fn build_input(
        &self,
        page: &PageRequest,
    ) -> InvocationResult<ListActivityTypesInput> {
        ListActivityTypesInput::builder()
            .domain(&self.domain)
            .set_name(self.name.clone())
            .registration_status(RegistrationStatus::from(self.registration_status.as_str()))
            .set_reverse_order(self.reverse_order.then_some(true))
            .set_maximum_page_size(page_size(page.page_size))
            .set_next_page_token(page.token.clone())
            .build()
            .map_err(build_failed(LIST_ACTIVITY_TYPES))
    }
}

pub(crate) async fn list_activity_types(
    api: &dyn SwfApi,
    ctx: InvocationContext<ListActivityTypesParams>,
) -> InvocationResult<CommandOutput> {
    let ctx = &ctx;
    let collected = Paginator::new(
        ctx.params.paging.clone(),
        Some(MAX_PAGE_SIZE),
        move |page: PageRequest| {
            let input = ctx.params.build_input(&page);
            async move {
                let output = api
                    .list_activity_types(input?)
                    .await
                    .map_err(|e| ctx.call_failed(e))?;
                Ok(Page::new(
                    output
                        .type_infos()
                        .iter()
                        .map(ActivityTypeInfoView::from)
                        .collect(),
                    output.next_page_token().map(str::to_string),
                ))
            }
        },
    )
    .collect()
    .await?;

    let view = ActivityTypeListView {
        type_infos: collected.items,
        next_page_token: collected.next_token.clone(),
    };
    Ok(CommandOutput::new(&view, Some("TypeInfos"))?.with_next_token(collected.next_token))
}

#[derive(Debug, Clone, Args)]
pub struct RegisterActivityTypeParams {
    /// Domain to register the activity type in
    #[arg(long)]
    pub domain: String,

    /// Name of the activity type
    #[arg(long)]
    pub name: String,

    /// Version of the activity type
    #[arg(long)]
    pub version: String,

    /// Text description of the activity type
    #[arg(long)]
    pub description: Option<String>,

    /// Task list used when scheduling tasks of this type
    #[arg(long, alias = "default-task-list-name")]
    pub default_task_list: Option<String>,

    /// Default task priority; higher values are scheduled first
    #[arg(long)]
    pub default_task_priority: Option<String>,

    /// Default heartbeat timeout in seconds, or NONE
    #[arg(long)]
    pub default_task_heartbeat_timeout: Option<String>,

    /// Default start-to-close timeout in seconds, or NONE
    #[arg(long)]
    pub default_task_start_to_close_timeout: Option<String>,

    /// Default schedule-to-start timeout in seconds, or NONE
    #[arg(long)]
    pub default_task_schedule_to_start_timeout: Option<String>,

    /// Default schedule-to-close timeout in seconds, or NONE
    #[arg(long)]
    pub default_task_schedule_to_close_timeout: Option<String>,
}

impl RegisterActivityTypeParams {
    pub(crate) fn build_input(&self) -> InvocationResult<RegisterActivityTypeInput> {
        let task_list = TaskListGroup {
            name: self.default_task_list.as_deref(),
            flag: "--default-task-list",
        }
        .build()?;

        RegisterActivityTypeInput::builder()
            .domain(&self.domain)
            .name(&self.name)
            .version(&self.version)
            .set_description(self.description.clone())
            .set_default_task_list(task_list)
            .set_default_task_priority(self.default_task_priority.clone())
            .set_default_task_heartbeat_timeout(self.default_task_heartbeat_timeout.clone())
            .set_default_task_start_to_close_timeout(
                self.default_task_start_to_close_timeout.clone(),
            )
            .set_default_task_schedule_to_start_timeout(
                self.default_task_schedule_to_start_timeout.clone(),
            )
            .set_default_task_schedule_to_close_timeout(
                self.default_task_schedule_to_close_timeout.clone(),
            )
            .build()
            .map_err(build_failed(REGISTER_ACTIVITY_TYPE))
    }
}

pub(crate) async fn register_activity_type(
    api: &dyn SwfApi,
    ctx: InvocationContext<RegisterActivityTypeParams>,
    gate: &ConfirmationGate,
) -> InvocationResult<Outcome<CommandOutput>> {
    let target = format!("{}/{}", ctx.params.name, ctx.params.version);
    execute_confirmed(
        &ctx,
        gate,
        &target,
        RegisterActivityTypeParams::build_input,
        |input| api.register_activity_type(input),
    )
    .await?
    .try_map(|_| CommandOutput::new(&EmptyView {}, None))
}
