//! Shared invocation layer for the awscmd service bindings:
//! - per-call context and the execute / execute-confirmed wrappers
//! - confirmation gate for mutating operations
//! - parameter groups that map flat flags onto nested request objects
//! - bounded cursor pagination
//! - response selection and error classification
//!

mod confirm;
mod context;
mod error;
mod group;
mod output;
pub mod pagination;
mod settings;

pub use confirm::{ConfirmationGate, Prompter, TerminalPrompter};
pub use context::{execute, execute_confirmed, EndpointContext, InvocationContext, Outcome};
pub use error::{BoxError, InvocationError, InvocationResult};
pub use group::{parse_key_value, require_group, require_member, ParameterGroup};
pub use output::{CommandOutput, Selection};
pub use pagination::{Collected, Page, PageRequest, Paginator, PagingMode, PagingOptions};
pub use settings::ConnectionSettings;

#[cfg(any(test, feature = "test-support"))]
pub use confirm::test_support;
