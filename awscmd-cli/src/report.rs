//! Rendering results and failures for the terminal.

use anyhow::Result;
use awscmd_core::{CommandOutput, InvocationError, Selection};

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_USAGE: u8 = 2;

/// Pretty JSON for the selected part of a response.
pub fn render_output(output: &CommandOutput, selection: &Selection) -> Result<String> {
    let value = output.select(selection)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Hint printed when a paged call stopped with pages left.
pub fn resume_hint(output: &CommandOutput) -> Option<String> {
    output
        .next_token
        .as_deref()
        .map(|token| format!("More results are available. Resume with --starting-token {token}"))
}

/// `Error: ...` followed by one `Caused by: ...` line per source that the
/// top-level message does not already spell out.
pub fn render_error(err: &anyhow::Error) -> String {
    let headline = err.to_string();
    let mut rendered = format!("Error: {headline}");
    for cause in err.chain().skip(1) {
        let cause = cause.to_string();
        if !headline.contains(&cause) {
            rendered.push_str("\nCaused by: ");
            rendered.push_str(&cause);
        }
    }
    rendered
}

pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<InvocationError>() {
        Some(invocation) if invocation.is_usage_error() => EXIT_USAGE,
        _ => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awscmd_core::{BoxError, EndpointContext};
    use serde_json::json;

    fn endpoint() -> EndpointContext {
        EndpointContext {
            service: "swf".to_string(),
            region: Some("us-east-1".to_string()),
            endpoint_url: None,
        }
    }

    #[test]
    fn test_usage_errors_exit_2() {
        let err =
            anyhow::Error::new(InvocationError::invalid_parameter("--oldest-date", "missing"));
        assert_eq!(exit_code(&err), EXIT_USAGE);
    }

    #[test]
    fn test_service_errors_exit_1() {
        let source: BoxError = "ThrottlingException: Rate exceeded".into();
        let err =
            anyhow::Error::new(InvocationError::from_call("ListDomains", &endpoint(), source));
        assert_eq!(exit_code(&err), EXIT_FAILURE);
        assert_eq!(
            render_error(&err),
            "Error: ListDomains failed: ThrottlingException: Rate exceeded"
        );
    }

    #[test]
    fn test_name_resolution_error_lists_cause() {
        let source: BoxError = "dns error: failed to lookup address information".into();
        let err =
            anyhow::Error::new(InvocationError::from_call("ListDomains", &endpoint(), source));
        let rendered = render_error(&err);
        assert!(rendered.starts_with("Error: Name resolution failure"), "{rendered}");
        assert!(
            rendered.contains("\nCaused by: dns error: failed to lookup address information"),
            "{rendered}"
        );
    }

    #[test]
    fn test_render_primary_and_hint() {
        let response = json!({"DomainInfos": [], "NextPageToken": "T1"});
        let output = CommandOutput::new(&response, Some("DomainInfos"))
            .unwrap()
            .with_next_token(Some("T1".to_string()));
        assert_eq!(render_output(&output, &Selection::Primary).unwrap(), "[]");
        assert!(resume_hint(&output).unwrap().ends_with("--starting-token T1"));
        assert!(render_output(&output, &Selection::Field("Nope".to_string())).is_err());
    }
}
