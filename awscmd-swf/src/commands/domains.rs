//! Domain operations

use super::{build_failed, page_size, MAX_PAGE_SIZE, REGISTRATION_STATUSES};
use crate::api::SwfApi;
use crate::views::{
    DomainConfigurationView, DomainDetailView, DomainInfoView, DomainListView, EmptyView,
};
use aws_sdk_swf::operation::deprecate_domain::DeprecateDomainInput;
use aws_sdk_swf::operation::describe_domain::DescribeDomainInput;
use aws_sdk_swf::operation::list_domains::ListDomainsInput;
use aws_sdk_swf::operation::register_domain::RegisterDomainInput;
use aws_sdk_swf::types::{RegistrationStatus, ResourceTag};
use awscmd_core::{
    execute, execute_confirmed, parse_key_value, CommandOutput, ConfirmationGate,
    InvocationContext, InvocationError, InvocationResult, Outcome, Page, PageRequest, Paginator,
    PagingOptions,
};
use clap::Args;

pub(crate) const LIST_DOMAINS: &str = "ListDomains";
pub(crate) const DESCRIBE_DOMAIN: &str = "DescribeDomain";
pub(crate) const REGISTER_DOMAIN: &str = "RegisterDomain";
pub(crate) const DEPRECATE_DOMAIN: &str = "DeprecateDomain";

#[derive(Debug, Clone, Args)]
pub struct ListDomainsParams {
    /// Only list domains with this status
    #[arg(long, value_parser = REGISTRATION_STATUSES)]
    pub registration_status: String,

    /// Return results in reverse alphabetical order
    #[arg(long)]
    pub reverse_order: bool,

    #[command(flatten)]
    pub paging: PagingOptions,
}

impl ListDomainsParams {
    pub(crate) fn build_input(&self, page: &PageRequest) -> InvocationResult<ListDomainsInput> {
        ListDomainsInput::builder()
            .registration_status(RegistrationStatus::from(self.registration_status.as_str()))
            .set_reverse_order(self.reverse_order.then_some(true))
            .set_maximum_page_size(page_size(page.page_size))
            .set_next_page_token(page.token.clone())
            .build()
            .map_err(build_failed(LIST_DOMAINS))
    }
}

pub(crate) async fn list_domains(
    api: &dyn SwfApi,
    ctx: InvocationContext<ListDomainsParams>,
) -> InvocationResult<CommandOutput> {
    let ctx = &ctx;
    let collected = Paginator::new(
        ctx.params.paging.clone(),
        Some(MAX_PAGE_SIZE),
        move |page: PageRequest| {
            let input = ctx.params.build_input(&page);
            async move {
                let output = api
                    .list_domains(input?)
                    .await
                    .map_err(|e| ctx.call_failed(e))?;
                Ok(Page::new(
                    output.domain_infos().iter().map(DomainInfoView::from).collect(),
                    output.next_page_token().map(str::to_string),
                ))
            }
        },
    )
    .collect()
    .await?;

    let view = DomainListView {
        domain_infos: collected.items,
        next_page_token: collected.next_token.clone(),
    };
    Ok(CommandOutput::new(&view, Some("DomainInfos"))?.with_next_token(collected.next_token))
}

#[derive(Debug, Clone, Args)]
pub struct DescribeDomainParams {
    /// Name of the domain
    #[arg(long, alias = "domain")]
    pub name: String,
}

impl DescribeDomainParams {
    pub(crate) fn build_input(&self) -> InvocationResult<DescribeDomainInput> {
        DescribeDomainInput::builder()
            .name(&self.name)
            .build()
            .map_err(build_failed(DESCRIBE_DOMAIN))
    }
}

pub(crate) async fn describe_domain(
    api: &dyn SwfApi,
    ctx: InvocationContext<DescribeDomainParams>,
) -> InvocationResult<CommandOutput> {
    let output = execute(&ctx, DescribeDomainParams::build_input, |input| {
        api.describe_domain(input)
    })
    .await?;

    let view = DomainDetailView {
        domain_info: output.domain_info().map(DomainInfoView::from),
        configuration: output.configuration().map(|c| DomainConfigurationView {
            workflow_execution_retention_period_in_days: c
                .workflow_execution_retention_period_in_days()
                .to_string(),
        }),
    };
    CommandOutput::new(&view, None)
}

#[derive(Debug, Clone, Args)]
pub struct RegisterDomainParams {
    /// Name of the domain to register
    #[arg(long, alias = "domain")]
    pub name: String,

    /// Days to keep closed workflow execution histories (0-90, or NONE)
    #[arg(long, alias = "retention-days")]
    pub workflow_execution_retention_period_in_days: String,

    /// Text description of the domain
    #[arg(long)]
    pub description: Option<String>,

    /// Resource tag as KEY=VALUE; may be repeated
    #[arg(long = "tag", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub tags: Vec<(String, String)>,
}

impl RegisterDomainParams {
    pub(crate) fn build_input(&self) -> InvocationResult<RegisterDomainInput> {
        let tags = self
            .tags
            .iter()
            .map(|(key, value)| {
                ResourceTag::builder()
                    .key(key)
                    .value(value)
                    .build()
                    .map_err(|e| InvocationError::invalid_parameter("--tag", e.to_string()))
            })
            .collect::<InvocationResult<Vec<_>>>()?;

        RegisterDomainInput::builder()
            .name(&self.name)
            .workflow_execution_retention_period_in_days(
                &self.workflow_execution_retention_period_in_days,
            )
            .set_description(self.description.clone())
            .set_tags((!tags.is_empty()).then_some(tags))
            .build()
            .map_err(build_failed(REGISTER_DOMAIN))
    }
}

pub(crate) async fn register_domain(
    api: &dyn SwfApi,
    ctx: InvocationContext<RegisterDomainParams>,
    gate: &ConfirmationGate,
) -> InvocationResult<Outcome<CommandOutput>> {
    let target = ctx.params.name.clone();
    execute_confirmed(
        &ctx,
        gate,
        &target,
        RegisterDomainParams::build_input,
        |input| api.register_domain(input),
    )
    .await?
    .try_map(|_| CommandOutput::new(&EmptyView {}, None))
}

#[derive(Debug, Clone, Args)]
pub struct DeprecateDomainParams {
    /// Name of the domain to deprecate
    #[arg(long, alias = "domain")]
    pub name: String,
}

impl DeprecateDomainParams {
    pub(crate) fn build_input(&self) -> InvocationResult<DeprecateDomainInput> {
        DeprecateDomainInput::builder()
            .name(&self.name)
            .build()
            .map_err(build_failed(DEPRECATE_DOMAIN))
    }
}

pub(crate) async fn deprecate_domain(
    api: &dyn SwfApi,
    ctx: InvocationContext<DeprecateDomainParams>,
    gate: &ConfirmationGate,
) -> InvocationResult<Outcome<CommandOutput>> {
    let target = ctx.params.name.clone();
    execute_confirmed(
        &ctx,
        gate,
        &target,
        DeprecateDomainParams::build_input,
        |input| api.deprecate_domain(input),
    )
    .await?
    .try_map(|_| CommandOutput::new(&EmptyView {}, None))
}
