use super::{build_failed, max_results, DEPLOYMENT_TYPES};
use crate::api::GreengrassApi;
use crate::views::{DeploymentInfoView, DeploymentListView, DeploymentRefView};
use aws_sdk_greengrass::operation::create_deployment::CreateDeploymentInput;
use aws_sdk_greengrass::operation::list_deployments::ListDeploymentsInput;
use aws_sdk_greengrass::operation::reset_deployments::ResetDeploymentsInput;
use aws_sdk_greengrass::types::DeploymentType;
use awscmd_core::{
    execute_confirmed, CommandOutput, ConfirmationGate, InvocationContext, InvocationError,
    InvocationResult, Outcome, Page, PageRequest, Paginator, PagingOptions,
};
use clap::Args;

pub(crate) const CREATE_DEPLOYMENT: &str = "CreateDeployment";
pub(crate) const LIST_DEPLOYMENTS: &str = "ListDeployments";
pub(crate) const RESET_DEPLOYMENTS: &str = "ResetDeployments";

#[derive(Debug, Clone, Args)]
pub struct CreateDeploymentParams {
    #[arg(long)]
    pub group_id: String,

    /// Kind of deployment
    #[arg(long, value_parser = DEPLOYMENT_TYPES)]
    pub deployment_type: String,

    /// Group version to deploy
    #[arg(long)]
    pub group_version_id: Option<String>,

    /// Deployment to redeploy; only meaningful with `Redeployment`
    #[arg(long)]
    pub deployment_id: Option<String>,

    #[arg(long, alias = "client-token")]
    pub amzn_client_token: Option<String>,
}

impl CreateDeploymentParams {
    pub(crate) fn build_input(&self) -> InvocationResult<CreateDeploymentInput> {
        let deployment_type = DeploymentType::from(self.deployment_type.as_str());
        if deployment_type == DeploymentType::Redeployment && self.deployment_id.is_none() {
            return Err(InvocationError::invalid_parameter(
                "--deployment-id",
                "is required for a Redeployment",
            ));
        }

        CreateDeploymentInput::builder()
            .group_id(&self.group_id)
            .deployment_type(deployment_type)
            .set_group_version_id(self.group_version_id.clone())
            .set_deployment_id(self.deployment_id.clone())
            .set_amzn_client_token(self.amzn_client_token.clone())
            .build()
            .map_err(build_failed(CREATE_DEPLOYMENT))
    }
}

pub(crate) async fn create_deployment(
    api: &dyn GreengrassApi,
    ctx: InvocationContext<CreateDeploymentParams>,
    gate: &ConfirmationGate,
) -> InvocationResult<Outcome<CommandOutput>> {
    let target = ctx.params.group_id.clone();
    execute_confirmed(
        &ctx,
        gate,
        &target,
        CreateDeploymentParams::build_input,
        |input| api.create_deployment(input),
    )
    .await?
    .try_map(|output| {
        let view = DeploymentRefView {
            deployment_arn: output.deployment_arn().map(str::to_string),
            deployment_id: output.deployment_id().map(str::to_string),
        };
        CommandOutput::new(&view, Some("DeploymentId"))
    })
}

#[derive(Debug, Clone, Args)]
pub struct ListDeploymentsParams {
    #[arg(long)]
    pub group_id: String,

    #[command(flatten)]
    pub paging: PagingOptions,
}

impl ListDeploymentsParams {
    pub(crate) fn build_input(
        &self,
        page: &PageRequest,
    ) -> InvocationResult<ListDeploymentsInput> {
        ListDeploymentsInput::builder()
            .group_id(&self.group_id)
            .set_max_results(max_results(page.page_size))
            .set_next_token(page.token.clone())
            .build()
            .map_err(build_failed(LIST_DEPLOYMENTS))
    }
}

pub(crate) async fn list_deployments(
    api: &dyn GreengrassApi,
    ctx: InvocationContext<ListDeploymentsParams>,
) -> InvocationResult<CommandOutput> {
    let ctx = &ctx;
    let collected = Paginator::new(ctx.params.paging.clone(), None, move |page: PageRequest| {
        let input = ctx.params.build_input(&page);
        async move {
            let output = api
                .list_deployments(input?)
                .await
                .map_err(|e| ctx.call_failed(e))?;
            Ok(Page::new(
                output
                    .deployments()
                    .iter()
                    .map(DeploymentInfoView::from)
                    .collect(),
                output.next_token().map(str::to_string),
            ))
        }
    })
    .collect()
    .await?;

    let view = DeploymentListView {
        deployments: collected.items,
        next_token: collected.next_token.clone(),
    };
    Ok(CommandOutput::new(&view, Some("Deployments"))?.with_next_token(collected.next_token))
}

#[derive(Debug, Clone, Args)]
pub struct ResetDeploymentsParams {
    #[arg(long)]
    pub group_id: String,

    /// Reset even if the core cannot be reached
    #[arg(long)]
    pub force: bool,

    #[arg(long, alias = "client-token")]
    pub amzn_client_token: Option<String>,
}

impl ResetDeploymentsParams {
    pub(crate) fn build_input(&self) -> InvocationResult<ResetDeploymentsInput> {
        ResetDeploymentsInput::builder()
            .group_id(&self.group_id)
            .set_force(self.force.then_some(true))
            .set_amzn_client_token(self.amzn_client_token.clone())
            .build()
            .map_err(build_failed(RESET_DEPLOYMENTS))
    }
}

pub(crate) async fn reset_deployments(
    api: &dyn GreengrassApi,
    ctx: InvocationContext<ResetDeploymentsParams>,
    gate: &ConfirmationGate,
) -> InvocationResult<Outcome<CommandOutput>> {
    let target = ctx.params.group_id.clone();
    execute_confirmed(
        &ctx,
        gate,
        &target,
        ResetDeploymentsParams::build_input,
        |input| api.reset_deployments(input),
    )
    .await?
    .try_map(|output| {
        let view = DeploymentRefView {
            deployment_arn: output.deployment_arn().map(str::to_string),
            deployment_id: output.deployment_id().map(str::to_string),
        };
        CommandOutput::new(&view, Some("DeploymentId"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{deployment_page, endpoint, FakeGreengrass};
    use awscmd_core::test_support::ScriptedPrompter;
    use awscmd_core::Selection;
    use serde_json::json;

    fn create_params(deployment_type: &str) -> CreateDeploymentParams {
        CreateDeploymentParams {
            group_id: "g-1".to_string(),
            deployment_type: deployment_type.to_string(),
            group_version_id: Some("v-3".to_string()),
            deployment_id: None,
            amzn_client_token: None,
        }
    }

    #[test]
    fn test_create_deployment_maps_enum() {
        let input = create_params("NewDeployment").build_input().unwrap();
        assert_eq!(input.deployment_type, Some(DeploymentType::NewDeployment));
        assert_eq!(input.group_version_id.as_deref(), Some("v-3"));
        assert!(input.deployment_id.is_none());
    }

    #[test]
    fn test_redeployment_needs_deployment_id() {
        let err = create_params("Redeployment").build_input().unwrap_err();
        assert!(err.is_usage_error());
        assert!(err.to_string().contains("--deployment-id"), "{err}");
    }

    #[tokio::test]
    async fn test_create_deployment_emits_deployment_id() {
        let fake = FakeGreengrass::default();
        let gate = ConfirmationGate::new(false, Box::new(ScriptedPrompter::answering(true)));

        let outcome = create_deployment(
            &fake,
            InvocationContext::new(CREATE_DEPLOYMENT, endpoint(), create_params("NewDeployment")),
            &gate,
        )
        .await
        .unwrap();

        let Outcome::Completed(output) = outcome else {
            panic!("Expected the call to complete");
        };
        assert_eq!(output.select(&Selection::Primary).unwrap(), json!("d-1"));
        assert_eq!(fake.call_count(), 1);
    }

    #[tokio::test]
    async fn test_reset_deployments_force_flag() {
        let fake = FakeGreengrass::default();
        let gate = ConfirmationGate::new(false, Box::new(ScriptedPrompter::answering(false)));
        let params = ResetDeploymentsParams {
            group_id: "g-1".to_string(),
            force: true,
            amzn_client_token: None,
        };
        assert_eq!(params.build_input().unwrap().force, Some(true));

        let outcome = reset_deployments(
            &fake,
            InvocationContext::new(RESET_DEPLOYMENTS, endpoint(), params),
            &gate,
        )
        .await
        .unwrap();

        assert_eq!(outcome, Outcome::Declined);
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn test_list_deployments_manual_page() {
        let fake = FakeGreengrass::default();
        fake.push_deployment_page(deployment_page(&["d-1", "d-2"], Some("T9")));

        let params = ListDeploymentsParams {
            group_id: "g-1".to_string(),
            paging: PagingOptions {
                no_paginate: true,
                ..PagingOptions::default()
            },
        };
        let output = list_deployments(
            &fake,
            InvocationContext::new(LIST_DEPLOYMENTS, endpoint(), params),
        )
        .await
        .unwrap();

        assert_eq!(output.next_token.as_deref(), Some("T9"));
        assert_eq!(
            output.response["Deployments"][1]["DeploymentId"],
            json!("d-2")
        );
        let inputs = fake.deployment_inputs();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].group_id.as_deref(), Some("g-1"));
    }
}
