//! AWS Greengrass (v1) bindings for awscmd.
//!
//! Same shape as the SWF bindings: flag structs per operation, a mockable
//! [`GreengrassApi`] seam and PascalCase response views. Greengrass publishes
//! no page-size maximum, so list commands pass `--page-size` through as is.

pub mod api;
pub mod commands;
mod initial_version;
mod views;

#[cfg(test)]
mod testing;

pub use api::{GreengrassApi, SdkGreengrass};
pub use commands::GreengrassCommand;
pub use initial_version::InitialVersionGroup;

/// Service name used in endpoint descriptions and prompts.
pub const SERVICE_NAME: &str = "greengrass";
