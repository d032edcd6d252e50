//! Parameter groups: flat flags that map onto one nested request object.
//!
//! A group with every member unset builds to `None`, so the nested object is
//! left out of the request instead of being sent empty.

use crate::error::{InvocationError, InvocationResult};

pub trait ParameterGroup: Sized {
    type Output;

    /// Name used in error messages, e.g. `type filter`.
    const NAME: &'static str;

    fn is_empty(&self) -> bool;

    /// Build the nested object. Only called when at least one member is set.
    fn build_present(self) -> InvocationResult<Self::Output>;

    fn build(self) -> InvocationResult<Option<Self::Output>> {
        if self.is_empty() {
            Ok(None)
        } else {
            self.build_present().map(Some)
        }
    }
}

/// Build a group the API requires, failing when none of its flags were given.
pub fn require_group<G: ParameterGroup>(group: G, flags: &str) -> InvocationResult<G::Output> {
    group.build()?.ok_or_else(|| {
        InvocationError::invalid_parameter(flags, format!("the {} is required", G::NAME))
    })
}

/// A member the group cannot be built without.
pub fn require_member<T, G: ParameterGroup>(value: Option<T>, flag: &str) -> InvocationResult<T> {
    value.ok_or_else(|| {
        InvocationError::invalid_parameter(
            flag,
            format!("is required when any other {} option is set", G::NAME),
        )
    })
}

/// clap value parser for `KEY=VALUE` pairs.
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}
