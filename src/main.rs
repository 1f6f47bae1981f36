use std::process::ExitCode;

use app_core::AppContext;
use app_core::cli::Cli;
use clap::Parser;
use tracing::{debug, info};

fn main() -> ExitCode {
    // Load .env file if it exists so CONFIG_PATH can come from it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let ctx = match AppContext::bootstrap(cli.config.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let _guard = ctx.logger.enter();

    info!(
        env = %ctx.settings.env,
        debug = ctx.settings.debug,
        root_dir = %ctx.settings.root_dir,
        "Settings loaded"
    );
    debug!(
        port = ctx.settings.grpc.port,
        timeout = ?ctx.settings.grpc.timeout,
        "gRPC server settings"
    );

    ExitCode::SUCCESS
}
