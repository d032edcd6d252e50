//! The `InitialVersion` object of CreateGroup, built from seven ARN flags.

use aws_sdk_greengrass::types::GroupVersion;
use awscmd_core::{InvocationResult, ParameterGroup};
use clap::Args;

/// Definition versions the new group starts with. Every member is optional;
/// with none given the group is created without an initial version.
#[derive(Debug, Clone, Default, Args)]
pub struct InitialVersionGroup {
    #[arg(long, value_name = "ARN")]
    pub initial_version_connector_definition_version_arn: Option<String>,

    #[arg(long, value_name = "ARN")]
    pub initial_version_core_definition_version_arn: Option<String>,

    #[arg(long, value_name = "ARN")]
    pub initial_version_device_definition_version_arn: Option<String>,

    #[arg(long, value_name = "ARN")]
    pub initial_version_function_definition_version_arn: Option<String>,

    #[arg(long, value_name = "ARN")]
    pub initial_version_logger_definition_version_arn: Option<String>,

    #[arg(long, value_name = "ARN")]
    pub initial_version_resource_definition_version_arn: Option<String>,

    #[arg(long, value_name = "ARN")]
    pub initial_version_subscription_definition_version_arn: Option<String>,
}

impl ParameterGroup for &InitialVersionGroup {
    type Output = GroupVersion;
    const NAME: &'static str = "initial version";

    fn is_empty(&self) -> bool {
        [
            &self.initial_version_connector_definition_version_arn,
            &self.initial_version_core_definition_version_arn,
            &self.initial_version_device_definition_version_arn,
            &self.initial_version_function_definition_version_arn,
            &self.initial_version_logger_definition_version_arn,
            &self.initial_version_resource_definition_version_arn,
            &self.initial_version_subscription_definition_version_arn,
        ]
        .iter()
        .all(|arn| arn.is_none())
    }

    fn build_present(self) -> InvocationResult<GroupVersion> {
        Ok(GroupVersion::builder()
            .set_connector_definition_version_arn(
                self.initial_version_connector_definition_version_arn.clone(),
            )
            .set_core_definition_version_arn(
                self.initial_version_core_definition_version_arn.clone(),
            )
            .set_device_definition_version_arn(
                self.initial_version_device_definition_version_arn.clone(),
            )
            .set_function_definition_version_arn(
                self.initial_version_function_definition_version_arn.clone(),
            )
            .set_logger_definition_version_arn(
                self.initial_version_logger_definition_version_arn.clone(),
            )
            .set_resource_definition_version_arn(
                self.initial_version_resource_definition_version_arn.clone(),
            )
            .set_subscription_definition_version_arn(
                self.initial_version_subscription_definition_version_arn.clone(),
            )
            .build())
    }
}
