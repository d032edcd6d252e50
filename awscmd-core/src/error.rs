//! Error model shared by every awscmd operation.

use crate::context::EndpointContext;
use std::error::Error as StdError;
use thiserror::Error;

/// Boxed error as returned by the service API seams.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Fragments that identify a DNS / name-resolution failure somewhere in an
/// error's source chain. Matched case-insensitively.
const NAME_RESOLUTION_MARKERS: &[&str] = &[
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "nodename nor servname provided",
    "no such host is known",
    "temporary failure in name resolution",
];

#[derive(Error, Debug)]
pub enum InvocationError {
    /// The remote call failed. `detail` is the flattened source chain.
    #[error("{operation} failed: {detail}")]
    Service {
        operation: String,
        detail: String,
        #[source]
        source: BoxError,
    },

    /// The endpoint host name could not be resolved.
    #[error("{message}")]
    NameResolution {
        message: String,
        #[source]
        source: BoxError,
    },

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Failed to build {operation} request: {source}")]
    RequestBuild {
        operation: String,
        #[source]
        source: BoxError,
    },

    #[error("Pagination stalled: the service returned continuation token '{token}' more than once")]
    PaginationStalled { token: String },

    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to read confirmation: {0}")]
    Prompt(#[from] std::io::Error),
}

pub type InvocationResult<T> = Result<T, InvocationError>;

impl InvocationError {
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn request_build<E>(operation: &str, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::RequestBuild {
            operation: operation.to_string(),
            source: source.into(),
        }
    }

    /// Classify a failure raised by a remote call.
    ///
    /// Name-resolution failures are rewritten with the endpoint the call was
    /// aimed at; everything else is carried through unchanged as `Service`.
    pub fn from_call(operation: &str, endpoint: &EndpointContext, source: BoxError) -> Self {
        if is_name_resolution_failure(source.as_ref()) {
            return Self::NameResolution {
                message: format!(
                    "Name resolution failure trying to reach the {} endpoint ({}) for {operation}. \
                     Check the region and endpoint URL, and your network connection.",
                    endpoint.service,
                    endpoint.describe()
                ),
                source,
            };
        }

        Self::Service {
            operation: operation.to_string(),
            detail: render_chain(source.as_ref()),
            source,
        }
    }

    /// Whether the failure stems from bad caller input rather than the service.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::RequestBuild { .. }
        )
    }
}

fn is_name_resolution_failure(error: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(error);
    while let Some(err) = current {
        let text = err.to_string().to_ascii_lowercase();
        if NAME_RESOLUTION_MARKERS
            .iter()
            .any(|marker| text.contains(marker))
        {
            return true;
        }
        current = err.source();
    }
    false
}

/// Join an error and its sources into one line, skipping repeated messages.
fn render_chain(error: &(dyn StdError + 'static)) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut current = Some(error);
    while let Some(err) = current {
        let text = err.to_string();
        if !text.is_empty() && parts.last() != Some(&text) {
            parts.push(text);
        }
        current = err.source();
    }
    parts.join(": ")
}
