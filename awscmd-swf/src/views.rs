//! JSON views of SWF responses, keyed the way the service names them.

use aws_sdk_swf::primitives::DateTime;
use aws_sdk_swf::types::{
    ActivityTypeInfo, DomainInfo, HistoryEvent, WorkflowExecution, WorkflowExecutionInfo,
};
use crate::events::{event_attributes, AttributeValue};
use chrono::SecondsFormat;
use serde::Serialize;
use serde_json::{Map, Value};

/// RFC 3339 rendering of an SDK timestamp.
pub(crate) fn format_timestamp(value: &DateTime) -> String {
    chrono::DateTime::from_timestamp(value.secs(), value.subsec_nanos())
        .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| value.secs().to_string())
}

/// Responses with no payload.
#[derive(Debug, Serialize)]
pub(crate) struct EmptyView {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DomainInfoView {
    pub name: String,
    pub status: String,
    pub description: Option<String>,
    pub arn: Option<String>,
}

impl From<&DomainInfo> for DomainInfoView {
    fn from(info: &DomainInfo) -> Self {
        Self {
            name: info.name().to_string(),
            status: info.status().as_str().to_string(),
            description: info.description().map(str::to_string),
            arn: info.arn().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DomainListView {
    pub domain_infos: Vec<DomainInfoView>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DomainConfigurationView {
    pub workflow_execution_retention_period_in_days: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DomainDetailView {
    pub domain_info: Option<DomainInfoView>,
    pub configuration: Option<DomainConfigurationView>,
}

/// Name/version pair shared by activity and workflow types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct TypeRefView {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ActivityTypeInfoView {
    pub activity_type: Option<TypeRefView>,
    pub status: String,
    pub description: Option<String>,
    pub creation_date: String,
    pub deprecation_date: Option<String>,
}

impl From<&ActivityTypeInfo> for ActivityTypeInfoView {
    fn from(info: &ActivityTypeInfo) -> Self {
        Self {
            activity_type: info.activity_type().map(|t| TypeRefView {
                name: t.name().to_string(),
                version: t.version().to_string(),
            }),
            status: info.status().as_str().to_string(),
            description: info.description().map(str::to_string),
            creation_date: format_timestamp(info.creation_date()),
            deprecation_date: info.deprecation_date().map(format_timestamp),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ActivityTypeListView {
    pub type_infos: Vec<ActivityTypeInfoView>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RunView {
    pub run_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ExecutionView {
    pub workflow_id: String,
    pub run_id: String,
}

impl From<&WorkflowExecution> for ExecutionView {
    fn from(execution: &WorkflowExecution) -> Self {
        Self {
            workflow_id: execution.workflow_id().to_string(),
            run_id: execution.run_id().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ExecutionInfoView {
    pub execution: Option<ExecutionView>,
    pub workflow_type: Option<TypeRefView>,
    pub start_timestamp: String,
    pub close_timestamp: Option<String>,
    pub execution_status: String,
    pub close_status: Option<String>,
    pub parent: Option<ExecutionView>,
    pub tag_list: Vec<String>,
    pub cancel_requested: Option<Value>,
}

impl From<&WorkflowExecutionInfo> for ExecutionInfoView {
    fn from(info: &WorkflowExecutionInfo) -> Self {
        Self {
            execution: info.execution().map(ExecutionView::from),
            workflow_type: info.workflow_type().map(|t| TypeRefView {
                name: t.name().to_string(),
                version: t.version().to_string(),
            }),
            start_timestamp: format_timestamp(info.start_timestamp()),
            close_timestamp: info.close_timestamp().map(format_timestamp),
            execution_status: info.execution_status().as_str().to_string(),
            close_status: info.close_status().map(|s| s.as_str().to_string()),
            parent: info.parent().map(ExecutionView::from),
            tag_list: info.tag_list().to_vec(),
            cancel_requested: info.cancel_requested().attribute_value(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ExecutionListView {
    pub execution_infos: Vec<ExecutionInfoView>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct HistoryEventView {
    pub event_id: i64,
    pub event_type: String,
    pub event_timestamp: String,
    /// The populated `*EventAttributes` block, under its own name.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl From<&HistoryEvent> for HistoryEventView {
    fn from(event: &HistoryEvent) -> Self {
        Self {
            event_id: event.event_id(),
            event_type: event.event_type().as_str().to_string(),
            event_timestamp: format_timestamp(event.event_timestamp()),
            attributes: event_attributes(event),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct HistoryView {
    pub events: Vec<HistoryEventView>,
    pub next_page_token: Option<String>,
}
