//! Response rendering and `--select` handling.

use crate::error::{InvocationError, InvocationResult};
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

/// Which part of a response to emit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// The operation's declared primary output
    #[default]
    Primary,
    /// The whole response (`*`)
    Whole,
    /// A named top-level field of the response
    Field(String),
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "" => Err("selection cannot be empty".to_string()),
            "*" => Ok(Self::Whole),
            field => Ok(Self::Field(field.to_string())),
        }
    }
}

/// A completed call, rendered to JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub response: Value,
    /// Field emitted by default; `None` means the whole response
    pub primary: Option<&'static str>,
    /// Continuation token left over by a paged call
    pub next_token: Option<String>,
}

impl CommandOutput {
    pub fn new<V: Serialize>(view: &V, primary: Option<&'static str>) -> InvocationResult<Self> {
        Ok(Self {
            response: serde_json::to_value(view)?,
            primary,
            next_token: None,
        })
    }

    pub fn with_next_token(mut self, next_token: Option<String>) -> Self {
        self.next_token = next_token;
        self
    }

    pub fn select(&self, selection: &Selection) -> InvocationResult<Value> {
        let field = match selection {
            Selection::Whole => return Ok(self.response.clone()),
            Selection::Primary => match self.primary {
                Some(field) => field,
                None => return Ok(self.response.clone()),
            },
            Selection::Field(field) => field.as_str(),
        };

        self.response.get(field).cloned().ok_or_else(|| {
            InvocationError::invalid_parameter(
                "--select",
                format!("the response has no field '{field}'"),
            )
        })
    }
}
