//! Per-invocation context and the generic request/response wrappers.

use crate::confirm::ConfirmationGate;
use crate::error::{BoxError, InvocationError, InvocationResult};
use log::{debug, warn};
use std::future::Future;

/// Where a call is headed. Only used to explain failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointContext {
    pub service: String,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

impl EndpointContext {
    pub fn from_config(service: &str, config: &aws_config::SdkConfig) -> Self {
        Self {
            service: service.to_string(),
            region: config.region().map(ToString::to_string),
            endpoint_url: config.endpoint_url().map(ToString::to_string),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match (&self.endpoint_url, &self.region) {
            (Some(url), Some(region)) => format!("{url}, region {region}"),
            (Some(url), None) => url.clone(),
            (None, Some(region)) => format!("region {region}"),
            (None, None) => "no region configured".to_string(),
        }
    }
}

/// Result of a call guarded by the confirmation gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    /// The caller did not confirm; no request was sent.
    Declined,
}

impl<T> Outcome<T> {
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Outcome<U>, E> {
        match self {
            Self::Completed(value) => f(value).map(Outcome::Completed),
            Self::Declined => Ok(Outcome::Declined),
        }
    }
}

/// Resolved parameters of one invocation plus the endpoint it targets.
#[derive(Debug, Clone)]
pub struct InvocationContext<P> {
    pub operation: &'static str,
    pub endpoint: EndpointContext,
    pub params: P,
}

impl<P> InvocationContext<P> {
    pub fn new(operation: &'static str, endpoint: EndpointContext, params: P) -> Self {
        Self {
            operation,
            endpoint,
            params,
        }
    }

    /// Classify a failed remote call against this context's endpoint.
    pub fn call_failed(&self, source: BoxError) -> InvocationError {
        InvocationError::from_call(self.operation, &self.endpoint, source)
    }
}

/// Build a request from the context, send it, and classify any failure.
pub async fn execute<P, I, O, B, F, Fut>(
    ctx: &InvocationContext<P>,
    build_request: B,
    invoke: F,
) -> InvocationResult<O>
where
    B: FnOnce(&P) -> InvocationResult<I>,
    F: FnOnce(I) -> Fut,
    Fut: Future<Output = Result<O, BoxError>>,
{
    let request = build_request(&ctx.params)?;
    debug!("Invoking {} ({})", ctx.operation, ctx.endpoint.service);
    invoke(request).await.map_err(|e| ctx.call_failed(e))
}

/// Like [`execute`], for operations that change remote state.
///
/// The request is built before the gate is consulted so bad input is reported
/// without prompting. A declined confirmation sends nothing.
pub async fn execute_confirmed<P, I, O, B, F, Fut>(
    ctx: &InvocationContext<P>,
    gate: &ConfirmationGate,
    target: &str,
    build_request: B,
    invoke: F,
) -> InvocationResult<Outcome<O>>
where
    B: FnOnce(&P) -> InvocationResult<I>,
    F: FnOnce(I) -> Fut,
    Fut: Future<Output = Result<O, BoxError>>,
{
    let request = build_request(&ctx.params)?;

    if !gate.confirm(ctx.operation, &ctx.endpoint.service, target)? {
        warn!("{} on '{}' was not confirmed; skipping", ctx.operation, target);
        return Ok(Outcome::Declined);
    }

    debug!("Invoking {} ({})", ctx.operation, ctx.endpoint.service);
    invoke(request)
        .await
        .map(Outcome::Completed)
        .map_err(|e| ctx.call_failed(e))
}
