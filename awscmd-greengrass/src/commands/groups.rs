//! Group operations

use super::{build_failed, max_results, tag_map};
use crate::api::GreengrassApi;
use crate::initial_version::InitialVersionGroup;
use crate::views::{EmptyView, GroupDetailView, GroupInfoView, GroupListView};
use aws_sdk_greengrass::operation::create_group::CreateGroupInput;
use aws_sdk_greengrass::operation::delete_group::DeleteGroupInput;
use aws_sdk_greengrass::operation::get_group::GetGroupInput;
use aws_sdk_greengrass::operation::list_groups::ListGroupsInput;
use awscmd_core::{
    execute, execute_confirmed, parse_key_value, CommandOutput, ConfirmationGate,
    InvocationContext, InvocationResult, Outcome, Page, PageRequest, Paginator, PagingOptions,
    ParameterGroup,
};
use clap::Args;

pub(crate) const LIST_GROUPS: &str = "ListGroups";
pub(crate) const GET_GROUP: &str = "GetGroup";
pub(crate) const CREATE_GROUP: &str = "CreateGroup";
pub(crate) const DELETE_GROUP: &str = "DeleteGroup";

#[derive(Debug, Clone, Args)]
pub struct ListGroupsParams {
    #[command(flatten)]
    pub paging: PagingOptions,
}

impl ListGroupsParams {
    pub(crate) fn build_input(&self, page: &PageRequest) -> InvocationResult<ListGroupsInput> {
        ListGroupsInput::builder()
            .set_max_results(max_results(page.page_size))
            .set_next_token(page.token.clone())
            .build()
            .map_err(build_failed(LIST_GROUPS))
    }
}

pub(crate) async fn list_groups(
    api: &dyn GreengrassApi,
    ctx: InvocationContext<ListGroupsParams>,
) -> InvocationResult<CommandOutput> {
    let ctx = &ctx;
    let collected = Paginator::new(ctx.params.paging.clone(), None, move |page: PageRequest| {
        let input = ctx.params.build_input(&page);
        async move {
            let output = api
                .list_groups(input?)
                .await
                .map_err(|e| ctx.call_failed(e))?;
            Ok(Page::new(
                output.groups().iter().map(GroupInfoView::from).collect(),
                output.next_token().map(str::to_string),
            ))
        }
    })
    .collect()
    .await?;

    let view = GroupListView {
        groups: collected.items,
        next_token: collected.next_token.clone(),
    };
    Ok(CommandOutput::new(&view, Some("Groups"))?.with_next_token(collected.next_token))
}

#[derive(Debug, Clone, Args)]
pub struct GetGroupParams {
    #[arg(long)]
    pub group_id: String,
}

impl GetGroupParams {
    pub(crate) fn build_input(&self) -> InvocationResult<GetGroupInput> {
        GetGroupInput::builder()
            .group_id(&self.group_id)
            .build()
            .map_err(build_failed(GET_GROUP))
    }
}

pub(crate) async fn get_group(
    api: &dyn GreengrassApi,
    ctx: InvocationContext<GetGroupParams>,
) -> InvocationResult<CommandOutput> {
    let output = execute(&ctx, GetGroupParams::build_input, |input| {
        api.get_group(input)
    })
    .await?;
    CommandOutput::new(&GroupDetailView::from(&output), None)
}

#[derive(Debug, Clone, Args)]
pub struct CreateGroupParams {
    /// Name of the new group
    #[arg(long)]
    pub name: String,

    /// Idempotency token for the request
    #[arg(long, alias = "client-token")]
    pub amzn_client_token: Option<String>,

    #[command(flatten)]
    pub initial_version: InitialVersionGroup,

    /// Tag as KEY=VALUE; may be repeated
    #[arg(long = "tag", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub tags: Vec<(String, String)>,
}

impl CreateGroupParams {
    pub(crate) fn build_input(&self) -> InvocationResult<CreateGroupInput> {
        CreateGroupInput::builder()
            .name(&self.name)
            .set_amzn_client_token(self.amzn_client_token.clone())
            .set_initial_version((&self.initial_version).build()?)
            .set_tags(tag_map(&self.tags))
            .build()
            .map_err(build_failed(CREATE_GROUP))
    }
}

pub(crate) async fn create_group(
    api: &dyn GreengrassApi,
    ctx: InvocationContext<CreateGroupParams>,
    gate: &ConfirmationGate,
) -> InvocationResult<Outcome<CommandOutput>> {
    let target = ctx.params.name.clone();
    execute_confirmed(
        &ctx,
        gate,
        &target,
        CreateGroupParams::build_input,
        |input| api.create_group(input),
    )
    .await?
    .try_map(|output| CommandOutput::new(&GroupInfoView::from(&output), None))
}

#[derive(Debug, Clone, Args)]
pub struct DeleteGroupParams {
    #[arg(long)]
    pub group_id: String,
}

impl DeleteGroupParams {
    pub(crate) fn build_input(&self) -> InvocationResult<DeleteGroupInput> {
        DeleteGroupInput::builder()
            .group_id(&self.group_id)
            .build()
            .map_err(build_failed(DELETE_GROUP))
    }
}

pub(crate) async fn delete_group(
    api: &dyn GreengrassApi,
    ctx: InvocationContext<DeleteGroupParams>,
    gate: &ConfirmationGate,
) -> InvocationResult<Outcome<CommandOutput>> {
    let target = ctx.params.group_id.clone();
    execute_confirmed(
        &ctx,
        gate,
        &target,
        DeleteGroupParams::build_input,
        |input| api.delete_group(input),
    )
    .await?
    .try_map(|_| CommandOutput::new(&EmptyView {}, None))
}
