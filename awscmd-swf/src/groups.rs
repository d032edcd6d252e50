//! Nested SWF request objects assembled from flat flags.

use aws_sdk_swf::primitives::DateTime;
use aws_sdk_swf::types::{
    ExecutionTimeFilter, TagFilter, TaskList, WorkflowExecution, WorkflowExecutionFilter,
    WorkflowType, WorkflowTypeFilter,
};
use awscmd_core::{require_member, InvocationError, InvocationResult, ParameterGroup};
use chrono::{DateTime as ChronoDateTime, Utc};

fn invalid(flag: &str, err: impl std::fmt::Display) -> InvocationError {
    InvocationError::invalid_parameter(flag, err.to_string())
}

pub(crate) fn to_smithy_time(value: &ChronoDateTime<Utc>) -> DateTime {
    DateTime::from_millis(value.timestamp_millis())
}

#[derive(Debug, Default)]
pub(crate) struct TaskListGroup<'a> {
    pub name: Option<&'a str>,
    pub flag: &'static str,
}

impl ParameterGroup for TaskListGroup<'_> {
    type Output = TaskList;
    const NAME: &'static str = "task list";

    fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    fn build_present(self) -> InvocationResult<TaskList> {
        let flag = self.flag;
        TaskList::builder()
            .name(require_member::<_, Self>(self.name, flag)?)
            .build()
            .map_err(|e| invalid(flag, e))
    }
}

#[derive(Debug, Default)]
pub(crate) struct WorkflowTypeGroup<'a> {
    pub name: Option<&'a str>,
    pub version: Option<&'a str>,
}

impl ParameterGroup for WorkflowTypeGroup<'_> {
    type Output = WorkflowType;
    const NAME: &'static str = "workflow type";

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.version.is_none()
    }

    fn build_present(self) -> InvocationResult<WorkflowType> {
        WorkflowType::builder()
            .name(require_member::<_, Self>(self.name, "--workflow-type-name")?)
            .version(require_member::<_, Self>(
                self.version,
                "--workflow-type-version",
            )?)
            .build()
            .map_err(|e| invalid("--workflow-type-name", e))
    }
}

#[derive(Debug, Default)]
pub(crate) struct TypeFilterGroup<'a> {
    pub name: Option<&'a str>,
    pub version: Option<&'a str>,
}

impl ParameterGroup for TypeFilterGroup<'_> {
    type Output = WorkflowTypeFilter;
    const NAME: &'static str = "type filter";

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.version.is_none()
    }

    fn build_present(self) -> InvocationResult<WorkflowTypeFilter> {
        WorkflowTypeFilter::builder()
            .name(require_member::<_, Self>(self.name, "--type-name")?)
            .set_version(self.version.map(str::to_string))
            .build()
            .map_err(|e| invalid("--type-name", e))
    }
}

#[derive(Debug, Default)]
pub(crate) struct TagFilterGroup<'a> {
    pub tag: Option<&'a str>,
}

impl ParameterGroup for TagFilterGroup<'_> {
    type Output = TagFilter;
    const NAME: &'static str = "tag filter";

    fn is_empty(&self) -> bool {
        self.tag.is_none()
    }

    fn build_present(self) -> InvocationResult<TagFilter> {
        TagFilter::builder()
            .tag(require_member::<_, Self>(self.tag, "--tag-filter")?)
            .build()
            .map_err(|e| invalid("--tag-filter", e))
    }
}

#[derive(Debug, Default)]
pub(crate) struct ExecutionFilterGroup<'a> {
    pub workflow_id: Option<&'a str>,
}

impl ParameterGroup for ExecutionFilterGroup<'_> {
    type Output = WorkflowExecutionFilter;
    const NAME: &'static str = "execution filter";

    fn is_empty(&self) -> bool {
        self.workflow_id.is_none()
    }

    fn build_present(self) -> InvocationResult<WorkflowExecutionFilter> {
        WorkflowExecutionFilter::builder()
            .workflow_id(require_member::<_, Self>(
                self.workflow_id,
                "--execution-filter-workflow-id",
            )?)
            .build()
            .map_err(|e| invalid("--execution-filter-workflow-id", e))
    }
}

#[derive(Debug, Default)]
pub(crate) struct StartTimeFilterGroup<'a> {
    pub oldest_date: Option<&'a ChronoDateTime<Utc>>,
    pub latest_date: Option<&'a ChronoDateTime<Utc>>,
}

impl ParameterGroup for StartTimeFilterGroup<'_> {
    type Output = ExecutionTimeFilter;
    const NAME: &'static str = "start time filter";

    fn is_empty(&self) -> bool {
        self.oldest_date.is_none() && self.latest_date.is_none()
    }

    fn build_present(self) -> InvocationResult<ExecutionTimeFilter> {
        let oldest = require_member::<_, Self>(self.oldest_date, "--oldest-date")?;
        if let Some(latest) = self.latest_date {
            if latest < oldest {
                return Err(InvocationError::invalid_parameter(
                    "--latest-date",
                    "must not be earlier than --oldest-date",
                ));
            }
        }
        ExecutionTimeFilter::builder()
            .oldest_date(to_smithy_time(oldest))
            .set_latest_date(self.latest_date.map(to_smithy_time))
            .build()
            .map_err(|e| invalid("--oldest-date", e))
    }
}

#[derive(Debug, Default)]
pub(crate) struct ExecutionGroup<'a> {
    pub workflow_id: Option<&'a str>,
    pub run_id: Option<&'a str>,
}

impl ParameterGroup for ExecutionGroup<'_> {
    type Output = WorkflowExecution;
    const NAME: &'static str = "workflow execution";

    fn is_empty(&self) -> bool {
        self.workflow_id.is_none() && self.run_id.is_none()
    }

    fn build_present(self) -> InvocationResult<WorkflowExecution> {
        WorkflowExecution::builder()
            .workflow_id(require_member::<_, Self>(
                self.workflow_id,
                "--execution-workflow-id",
            )?)
            .run_id(require_member::<_, Self>(self.run_id, "--execution-run-id")?)
            .build()
            .map_err(|e| invalid("--execution-workflow-id", e))
    }
}
