//! # stockline entry point

use anyhow::Result;
use stockline::cmd_args::CommandLineArgs;
use stockline::config::AppSettings;
use stockline::logging::init_tracing_subscriber;
use stockline::{
    AppController, CatalogClient, CatalogService, TerminalEventStream, TerminalRenderStream,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    init_tracing_subscriber(cmd_args.verbose())?;

    let settings = AppSettings::resolve(&cmd_args)?;
    tracing::info!(
        "Starting with profile '{}' against {}",
        settings.profile_name,
        settings.catalog.base_url()
    );

    let catalog = CatalogService::new(CatalogClient::new(&settings.catalog)?);
    let mut app = AppController::with_io_streams(
        settings,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
        catalog,
    )?;

    app.run().await
}
