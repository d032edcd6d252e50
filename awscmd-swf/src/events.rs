//! JSON rendering of the per-type attribute blocks carried by history events.
//!
//! Every `HistoryEvent` has exactly one populated `*EventAttributes` member,
//! selected by its event type. Each populated block is rendered under its
//! PascalCase member name with the fields the service returned.

use aws_sdk_swf::types::{
    ActivityTaskTimeoutType, ActivityType, CancelTimerFailedCause,
    CancelWorkflowExecutionFailedCause, ChildPolicy, CompleteWorkflowExecutionFailedCause,
    ContinueAsNewWorkflowExecutionFailedCause, DecisionTaskTimeoutType,
    FailWorkflowExecutionFailedCause, HistoryEvent, LambdaFunctionTimeoutType,
    RecordMarkerFailedCause, RequestCancelActivityTaskFailedCause,
    RequestCancelExternalWorkflowExecutionFailedCause, ScheduleActivityTaskFailedCause,
    ScheduleLambdaFunctionFailedCause, SignalExternalWorkflowExecutionFailedCause,
    StartChildWorkflowExecutionFailedCause, StartLambdaFunctionFailedCause,
    StartTimerFailedCause, TaskList, WorkflowExecution, WorkflowExecutionCancelRequestedCause,
    WorkflowExecutionTerminatedCause, WorkflowExecutionTimeoutType, WorkflowType,
};
use serde_json::{json, Map, Value};

/// A response member that may or may not be present. `None` means "leave it out".
pub(crate) trait AttributeValue {
    fn attribute_value(&self) -> Option<Value>;
}

impl<T: AttributeValue + ?Sized> AttributeValue for &T {
    fn attribute_value(&self) -> Option<Value> {
        (**self).attribute_value()
    }
}

impl<T: AttributeValue> AttributeValue for Option<T> {
    fn attribute_value(&self) -> Option<Value> {
        self.as_ref().and_then(T::attribute_value)
    }
}

impl AttributeValue for str {
    fn attribute_value(&self) -> Option<Value> {
        Some(Value::String(self.to_string()))
    }
}

impl AttributeValue for String {
    fn attribute_value(&self) -> Option<Value> {
        self.as_str().attribute_value()
    }
}

impl AttributeValue for i64 {
    fn attribute_value(&self) -> Option<Value> {
        Some(Value::from(*self))
    }
}

impl AttributeValue for i32 {
    fn attribute_value(&self) -> Option<Value> {
        Some(Value::from(*self))
    }
}

impl AttributeValue for bool {
    fn attribute_value(&self) -> Option<Value> {
        Some(Value::Bool(*self))
    }
}

impl<T: AttributeValue> AttributeValue for [T] {
    fn attribute_value(&self) -> Option<Value> {
        if self.is_empty() {
            return None;
        }
        Some(Value::Array(self.iter().filter_map(T::attribute_value).collect()))
    }
}

impl AttributeValue for TaskList {
    fn attribute_value(&self) -> Option<Value> {
        Some(json!({ "Name": self.name() }))
    }
}

impl AttributeValue for WorkflowType {
    fn attribute_value(&self) -> Option<Value> {
        Some(json!({ "Name": self.name(), "Version": self.version() }))
    }
}

impl AttributeValue for ActivityType {
    fn attribute_value(&self) -> Option<Value> {
        Some(json!({ "Name": self.name(), "Version": self.version() }))
    }
}

impl AttributeValue for WorkflowExecution {
    fn attribute_value(&self) -> Option<Value> {
        Some(json!({ "WorkflowId": self.workflow_id(), "RunId": self.run_id() }))
    }
}

macro_rules! enum_attribute_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AttributeValue for $ty {
                fn attribute_value(&self) -> Option<Value> {
                    Some(Value::String(self.as_str().to_string()))
                }
            }
        )*
    };
}

enum_attribute_values!(
    ActivityTaskTimeoutType,
    CancelTimerFailedCause,
    CancelWorkflowExecutionFailedCause,
    ChildPolicy,
    CompleteWorkflowExecutionFailedCause,
    ContinueAsNewWorkflowExecutionFailedCause,
    DecisionTaskTimeoutType,
    FailWorkflowExecutionFailedCause,
    LambdaFunctionTimeoutType,
    RecordMarkerFailedCause,
    RequestCancelActivityTaskFailedCause,
    RequestCancelExternalWorkflowExecutionFailedCause,
    ScheduleActivityTaskFailedCause,
    ScheduleLambdaFunctionFailedCause,
    SignalExternalWorkflowExecutionFailedCause,
    StartChildWorkflowExecutionFailedCause,
    StartLambdaFunctionFailedCause,
    StartTimerFailedCause,
    WorkflowExecutionCancelRequestedCause,
    WorkflowExecutionTerminatedCause,
    WorkflowExecutionTimeoutType,
);

/// `decision_task_completed_event_id` -> `DecisionTaskCompletedEventId`.
pub(crate) fn pascal_case(snake: &str) -> String {
    snake
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_ascii_uppercase().to_string() + chars.as_str()
            })
        })
        .collect()
}

fn put(fields: &mut Map<String, Value>, field: &str, value: impl AttributeValue) {
    if let Some(value) = value.attribute_value() {
        fields.insert(pascal_case(field), value);
    }
}

macro_rules! collect_attributes {
    ($event:expr, $( $branch:ident { $( $field:ident ),* $(,)? } )*) => {{
        let event = $event;
        let mut attributes = Map::new();
        $(
            if let Some(branch) = event.$branch() {
                let mut fields = Map::new();
                $( put(&mut fields, stringify!($field), branch.$field()); )*
                attributes.insert(pascal_case(stringify!($branch)), Value::Object(fields));
            }
        )*
        attributes
    }};
}

/// Populated attribute blocks of one event, keyed by PascalCase member name.
pub(crate) fn event_attributes(event: &HistoryEvent) -> Map<String, Value> {
    collect_attributes!(event,
        workflow_execution_started_event_attributes {
            input,
            execution_start_to_close_timeout,
            task_start_to_close_timeout,
            child_policy,
            task_list,
            task_priority,
            workflow_type,
            tag_list,
            continued_execution_run_id,
            parent_workflow_execution,
            parent_initiated_event_id,
            lambda_role,
        }
        workflow_execution_completed_event_attributes {
            result,
            decision_task_completed_event_id,
        }
        complete_workflow_execution_failed_event_attributes {
            cause,
            decision_task_completed_event_id,
        }
        workflow_execution_failed_event_attributes {
            reason,
            details,
            decision_task_completed_event_id,
        }
        fail_workflow_execution_failed_event_attributes {
            cause,
            decision_task_completed_event_id,
        }
        workflow_execution_timed_out_event_attributes {
            timeout_type,
            child_policy,
        }
        workflow_execution_canceled_event_attributes {
            details,
            decision_task_completed_event_id,
        }
        cancel_workflow_execution_failed_event_attributes {
            cause,
            decision_task_completed_event_id,
        }
        workflow_execution_continued_as_new_event_attributes {
            input,
            decision_task_completed_event_id,
            new_execution_run_id,
            execution_start_to_close_timeout,
            task_list,
            task_priority,
            task_start_to_close_timeout,
            child_policy,
            tag_list,
            workflow_type,
            lambda_role,
        }
        continue_as_new_workflow_execution_failed_event_attributes {
            cause,
            decision_task_completed_event_id,
        }
        workflow_execution_terminated_event_attributes {
            reason,
            details,
            child_policy,
            cause,
        }
        workflow_execution_cancel_requested_event_attributes {
            external_workflow_execution,
            external_initiated_event_id,
            cause,
        }
        decision_task_scheduled_event_attributes {
            task_list,
            task_priority,
            start_to_close_timeout,
        }
        decision_task_started_event_attributes {
            identity,
            scheduled_event_id,
        }
        decision_task_completed_event_attributes {
            execution_context,
            scheduled_event_id,
            started_event_id,
        }
        decision_task_timed_out_event_attributes {
            timeout_type,
            scheduled_event_id,
            started_event_id,
        }
        activity_task_scheduled_event_attributes {
            activity_type,
            activity_id,
            input,
            control,
            schedule_to_start_timeout,
            schedule_to_close_timeout,
            start_to_close_timeout,
            task_list,
            task_priority,
            decision_task_completed_event_id,
            heartbeat_timeout,
        }
        activity_task_started_event_attributes {
            identity,
            scheduled_event_id,
        }
        activity_task_completed_event_attributes {
            result,
            scheduled_event_id,
            started_event_id,
        }
        activity_task_failed_event_attributes {
            reason,
            details,
            scheduled_event_id,
            started_event_id,
        }
        activity_task_timed_out_event_attributes {
            timeout_type,
            scheduled_event_id,
            started_event_id,
            details,
        }
        activity_task_canceled_event_attributes {
            details,
            scheduled_event_id,
            started_event_id,
            latest_cancel_requested_event_id,
        }
        activity_task_cancel_requested_event_attributes {
            decision_task_completed_event_id,
            activity_id,
        }
        workflow_execution_signaled_event_attributes {
            signal_name,
            input,
            external_workflow_execution,
            external_initiated_event_id,
        }
        marker_recorded_event_attributes {
            marker_name,
            details,
            decision_task_completed_event_id,
        }
        record_marker_failed_event_attributes {
            marker_name,
            cause,
            decision_task_completed_event_id,
        }
        timer_started_event_attributes {
            timer_id,
            control,
            start_to_fire_timeout,
            decision_task_completed_event_id,
        }
        timer_fired_event_attributes {
            timer_id,
            started_event_id,
        }
        timer_canceled_event_attributes {
            timer_id,
            started_event_id,
            decision_task_completed_event_id,
        }
        start_child_workflow_execution_initiated_event_attributes {
            workflow_id,
            workflow_type,
            control,
            input,
            execution_start_to_close_timeout,
            task_list,
            task_priority,
            decision_task_completed_event_id,
            child_policy,
            task_start_to_close_timeout,
            tag_list,
            lambda_role,
        }
        child_workflow_execution_started_event_attributes {
            workflow_execution,
            workflow_type,
            initiated_event_id,
        }
        child_workflow_execution_completed_event_attributes {
            workflow_execution,
            workflow_type,
            result,
            initiated_event_id,
            started_event_id,
        }
        child_workflow_execution_failed_event_attributes {
            workflow_execution,
            workflow_type,
            reason,
            details,
            initiated_event_id,
            started_event_id,
        }
        child_workflow_execution_timed_out_event_attributes {
            workflow_execution,
            workflow_type,
            timeout_type,
            initiated_event_id,
            started_event_id,
        }
        child_workflow_execution_canceled_event_attributes {
            workflow_execution,
            workflow_type,
            details,
            initiated_event_id,
            started_event_id,
        }
        child_workflow_execution_terminated_event_attributes {
            workflow_execution,
            workflow_type,
            initiated_event_id,
            started_event_id,
        }
        signal_external_workflow_execution_initiated_event_attributes {
            workflow_id,
            run_id,
            signal_name,
            input,
            decision_task_completed_event_id,
            control,
        }
        external_workflow_execution_signaled_event_attributes {
            workflow_execution,
            initiated_event_id,
        }
        signal_external_workflow_execution_failed_event_attributes {
            workflow_id,
            run_id,
            cause,
            initiated_event_id,
            decision_task_completed_event_id,
            control,
        }
        external_workflow_execution_cancel_requested_event_attributes {
            workflow_execution,
            initiated_event_id,
        }
        request_cancel_external_workflow_execution_initiated_event_attributes {
            workflow_id,
            run_id,
            decision_task_completed_event_id,
            control,
        }
        request_cancel_external_workflow_execution_failed_event_attributes {
            workflow_id,
            run_id,
            cause,
            initiated_event_id,
            decision_task_completed_event_id,
            control,
        }
        schedule_activity_task_failed_event_attributes {
            activity_type,
            activity_id,
            cause,
            decision_task_completed_event_id,
        }
        request_cancel_activity_task_failed_event_attributes {
            activity_id,
            cause,
            decision_task_completed_event_id,
        }
        start_timer_failed_event_attributes {
            timer_id,
            cause,
            decision_task_completed_event_id,
        }
        cancel_timer_failed_event_attributes {
            timer_id,
            cause,
            decision_task_completed_event_id,
        }
        start_child_workflow_execution_failed_event_attributes {
            workflow_type,
            cause,
            workflow_id,
            initiated_event_id,
            decision_task_completed_event_id,
            control,
        }
        lambda_function_scheduled_event_attributes {
            id,
            name,
            control,
            input,
            start_to_close_timeout,
            decision_task_completed_event_id,
        }
        lambda_function_started_event_attributes {
            scheduled_event_id,
        }
        lambda_function_completed_event_attributes {
            scheduled_event_id,
            started_event_id,
            result,
        }
        lambda_function_failed_event_attributes {
            scheduled_event_id,
            started_event_id,
            reason,
            details,
        }
        lambda_function_timed_out_event_attributes {
            scheduled_event_id,
            started_event_id,
            timeout_type,
        }
        schedule_lambda_function_failed_event_attributes {
            id,
            name,
            cause,
            decision_task_completed_event_id,
        }
        start_lambda_function_failed_event_attributes {
            scheduled_event_id,
            cause,
            message,
        }
    )
}
