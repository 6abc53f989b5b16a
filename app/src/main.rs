mod browse;
mod cli;
mod view;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use listing_core::{
    DetailViewModel, GetListingDetailUseCase, GetListingsUseCase, ListingViewModel,
    PropertyClient, PropertyRepository, RemotePropertyRepository, TransportConfig, UiState,
    UreqTransport,
};
use tokio::io::{AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::browse::Browser;
use crate::cli::{CommandLine, Commands};
use crate::view::{render_detail_screen, render_listing_screen};

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn repository(cli: &CommandLine) -> Arc<dyn PropertyRepository> {
    let transport = UreqTransport::new(&TransportConfig {
        timeout: Duration::from_secs(cli.timeout_secs),
    });
    Arc::new(RemotePropertyRepository::new(
        PropertyClient::new(&cli.base_url),
        transport,
    ))
}

async fn print(screen: String) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(screen.as_bytes()).await?;
    stdout.flush().await.context("writing to stdout")
}

fn exit_code<T>(state: &UiState<T>) -> ExitCode {
    match state {
        UiState::Error(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = CommandLine::parse_args();
    init_logging(cli.verbose);
    info!(base_url = %cli.base_url, "starting");

    let repo = repository(&cli);
    let get_listings = GetListingsUseCase::new(Arc::clone(&repo));
    let get_listing_detail = GetListingDetailUseCase::new(repo);

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::List => {
            let state = ListingViewModel::new(get_listings).settled().await;
            print(render_listing_screen(&state)).await?;
            Ok(exit_code(&state))
        }
        Commands::Show { id } => {
            let state = DetailViewModel::new(get_listing_detail, id).settled().await;
            print(render_detail_screen(&state)).await?;
            Ok(exit_code(&state))
        }
        Commands::Browse => {
            let mut browser = Browser::new(ListingViewModel::new(get_listings), get_listing_detail);
            browser
                .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
                .await
                .context("interactive session failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
