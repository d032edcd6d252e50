//! awscmd: one subcommand per AWS Greengrass / Amazon SWF operation.

mod report;

use anyhow::Result;
use awscmd_core::{ConfirmationGate, ConnectionSettings, EndpointContext, Outcome, Selection};
use awscmd_greengrass::{GreengrassCommand, SdkGreengrass};
use awscmd_swf::{SdkSwf, SwfCommand};
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "awscmd",
    version,
    about = "Call AWS Greengrass and Amazon SWF operations from the command line",
    long_about = "Call AWS Greengrass and Amazon SWF operations from the command line.\n\n\
        List operations follow continuation tokens automatically; use --max-items, \
        --page-size, --starting-token and --no-paginate to control paging. \
        Operations that change remote state ask for confirmation unless --yes is given."
)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionSettings,

    /// Skip the confirmation prompt for operations that change remote state
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    /// Response part to print: a top-level field name, or '*' for everything
    #[arg(long, global = true, value_name = "FIELD")]
    select: Option<Selection>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    service: Service,
}

#[derive(Subcommand, Debug)]
enum Service {
    /// Amazon Simple Workflow Service operations
    Swf {
        #[command(subcommand)]
        operation: SwfCommand,
    },
    /// AWS Greengrass (v1) operations
    Greengrass {
        #[command(subcommand)]
        operation: GreengrassCommand,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let selection = cli.select.unwrap_or_default();
    let gate = ConfirmationGate::terminal(cli.yes);
    let config = cli.connection.load().await;

    let outcome = match cli.service {
        Service::Swf { operation } => {
            let endpoint = EndpointContext::from_config(awscmd_swf::SERVICE_NAME, &config);
            debug!("Dispatching {operation:?}");
            operation
                .run(&SdkSwf::new(&config), endpoint, &gate)
                .await?
        }
        Service::Greengrass { operation } => {
            let endpoint = EndpointContext::from_config(awscmd_greengrass::SERVICE_NAME, &config);
            debug!("Dispatching {operation:?}");
            operation
                .run(&SdkGreengrass::new(&config), endpoint, &gate)
                .await?
        }
    };

    match outcome {
        Outcome::Completed(output) => {
            println!("{}", report::render_output(&output, &selection)?);
            if let Some(hint) = report::resume_hint(&output) {
                eprintln!("{hint}");
            }
        }
        Outcome::Declined => info!("Nothing was sent"),
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", report::render_error(&err));
            ExitCode::from(report::exit_code(&err))
        }
    }
}
