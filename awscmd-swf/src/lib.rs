//! Amazon Simple Workflow Service bindings for awscmd.
//!
//! Each operation maps its flags onto the SDK request (nested objects are
//! assembled through parameter groups), sends it through [`SwfApi`] and
//! renders the response as a PascalCase JSON view.

pub mod api;
pub mod commands;
mod events;
mod groups;
mod views;

#[cfg(test)]
mod testing;

pub use api::{SdkSwf, SwfApi};
pub use commands::{SwfCommand, MAX_PAGE_SIZE};

/// Service name used in endpoint descriptions and prompts.
pub const SERVICE_NAME: &str = "swf";
