use super::{build_failed, max_results};
use crate::api::GreengrassApi;
use crate::views::{DefinitionInfoView, DefinitionListView};
use aws_sdk_greengrass::operation::list_core_definitions::ListCoreDefinitionsInput;
use awscmd_core::{
    CommandOutput, InvocationContext, InvocationResult, Page, PageRequest, Paginator,
    PagingOptions,
};
use clap::Args;

pub(crate) const LIST_CORE_DEFINITIONS: &str = "ListCoreDefinitions";

#[derive(Debug, Clone, Args)]
pub struct ListCoreDefinitionsParams {
    #[command(flatten)]
    pub paging: PagingOptions,
}

impl ListCoreDefinitionsParams {
    pub(crate) fn build_input(
        &self,
        page: &PageRequest,
    ) -> InvocationResult<ListCoreDefinitionsInput> {
        ListCoreDefinitionsInput::builder()
            .set_max_results(max_results(page.page_size))
            .set_next_token(page.token.clone())
            .build()
            .map_err(build_failed(LIST_CORE_DEFINITIONS))
    }
}

pub(crate) async fn list_core_definitions(
    api: &dyn GreengrassApi,
    ctx: InvocationContext<ListCoreDefinitionsParams>,
) -> InvocationResult<CommandOutput> {
    let ctx = &ctx;
    let collected = Paginator::new(ctx.params.paging.clone(), None, move |page: PageRequest| {
        let input = ctx.params.build_input(&page);
        async move {
            let output = api
                .list_core_definitions(input?)
                .await
                .map_err(|e| ctx.call_failed(e))?;
            Ok(Page::new(
                output
                    .definitions()
                    .iter()
                    .map(DefinitionInfoView::from)
                    .collect(),
                output.next_token().map(str::to_string),
            ))
        }
    })
    .collect()
    .await?;

    let view = DefinitionListView {
        definitions: collected.items,
        next_token: collected.next_token.clone(),
    };
    Ok(CommandOutput::new(&view, Some("Definitions"))?.with_next_token(collected.next_token))
}
