//! JSON views of Greengrass responses. Greengrass already reports timestamps
//! as strings, so they are passed through untouched.

use aws_sdk_greengrass::operation::create_group::CreateGroupOutput;
use aws_sdk_greengrass::operation::get_group::GetGroupOutput;
use aws_sdk_greengrass::types::{DefinitionInformation, Deployment, GroupInformation};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

fn sorted_tags(tags: Option<&HashMap<String, String>>) -> Option<BTreeMap<String, String>> {
    tags.map(|tags| {
        tags.iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    })
}

#[derive(Debug, Serialize)]
pub(crate) struct EmptyView {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct GroupInfoView {
    pub arn: Option<String>,
    pub creation_timestamp: Option<String>,
    pub id: Option<String>,
    pub last_updated_timestamp: Option<String>,
    pub latest_version: Option<String>,
    pub latest_version_arn: Option<String>,
    pub name: Option<String>,
}

impl From<&GroupInformation> for GroupInfoView {
    fn from(info: &GroupInformation) -> Self {
        Self {
            arn: owned(info.arn()),
            creation_timestamp: owned(info.creation_timestamp()),
            id: owned(info.id()),
            last_updated_timestamp: owned(info.last_updated_timestamp()),
            latest_version: owned(info.latest_version()),
            latest_version_arn: owned(info.latest_version_arn()),
            name: owned(info.name()),
        }
    }
}

impl From<&CreateGroupOutput> for GroupInfoView {
    fn from(out: &CreateGroupOutput) -> Self {
        Self {
            arn: owned(out.arn()),
            creation_timestamp: owned(out.creation_timestamp()),
            id: owned(out.id()),
            last_updated_timestamp: owned(out.last_updated_timestamp()),
            latest_version: owned(out.latest_version()),
            latest_version_arn: owned(out.latest_version_arn()),
            name: owned(out.name()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct GroupListView {
    pub groups: Vec<GroupInfoView>,
    pub next_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct GroupDetailView {
    #[serde(flatten)]
    pub group: GroupInfoView,
    pub tags: Option<BTreeMap<String, String>>,
}

impl From<&GetGroupOutput> for GroupDetailView {
    fn from(out: &GetGroupOutput) -> Self {
        Self {
            group: GroupInfoView {
                arn: owned(out.arn()),
                creation_timestamp: owned(out.creation_timestamp()),
                id: owned(out.id()),
                last_updated_timestamp: owned(out.last_updated_timestamp()),
                latest_version: owned(out.latest_version()),
                latest_version_arn: owned(out.latest_version_arn()),
                name: owned(out.name()),
            },
            tags: sorted_tags(out.tags()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DeploymentRefView {
    pub deployment_arn: Option<String>,
    pub deployment_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DeploymentInfoView {
    pub created_at: Option<String>,
    pub deployment_arn: Option<String>,
    pub deployment_id: Option<String>,
    pub deployment_type: Option<String>,
    pub group_arn: Option<String>,
}

impl From<&Deployment> for DeploymentInfoView {
    fn from(deployment: &Deployment) -> Self {
        Self {
            created_at: owned(deployment.created_at()),
            deployment_arn: owned(deployment.deployment_arn()),
            deployment_id: owned(deployment.deployment_id()),
            deployment_type: deployment
                .deployment_type()
                .map(|t| t.as_str().to_string()),
            group_arn: owned(deployment.group_arn()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DeploymentListView {
    pub deployments: Vec<DeploymentInfoView>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DefinitionInfoView {
    pub arn: Option<String>,
    pub creation_timestamp: Option<String>,
    pub id: Option<String>,
    pub last_updated_timestamp: Option<String>,
    pub latest_version: Option<String>,
    pub latest_version_arn: Option<String>,
    pub name: Option<String>,
    pub tags: Option<BTreeMap<String, String>>,
}

impl From<&DefinitionInformation> for DefinitionInfoView {
    fn from(info: &DefinitionInformation) -> Self {
        Self {
            arn: owned(info.arn()),
            creation_timestamp: owned(info.creation_timestamp()),
            id: owned(info.id()),
            last_updated_timestamp: owned(info.last_updated_timestamp()),
            latest_version: owned(info.latest_version()),
            latest_version_arn: owned(info.latest_version_arn()),
            name: owned(info.name()),
            tags: sorted_tags(info.tags()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DefinitionListView {
    pub definitions: Vec<DefinitionInfoView>,
    pub next_token: Option<String>,
}
