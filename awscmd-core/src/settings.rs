//! Connection settings layered over the SDK's default provider chains.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use clap::Args;
use log::debug;

/// Global flags that pick where calls go. Anything left unset falls back to
/// the SDK defaults (environment, shared config files, instance metadata).
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct ConnectionSettings {
    /// AWS region to send requests to
    #[arg(long, global = true, value_name = "REGION")]
    pub region: Option<String>,

    /// Named profile from the shared AWS config files
    #[arg(long, global = true, env = "AWS_PROFILE", value_name = "NAME")]
    pub profile: Option<String>,

    /// Override the service endpoint (e.g. a local emulator)
    #[arg(long, global = true, env = "AWS_ENDPOINT_URL", value_name = "URL")]
    pub endpoint_url: Option<String>,
}

impl ConnectionSettings {
    pub async fn load(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(url) = &self.endpoint_url {
            loader = loader.endpoint_url(url);
        }

        let config = loader.load().await;
        debug!(
            "Loaded AWS config (region: {:?}, endpoint: {:?})",
            config.region().map(ToString::to_string),
            config.endpoint_url()
        );
        config
    }
}
