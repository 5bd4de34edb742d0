use crate::cli::{Cli, Command};
use crate::error::{Result as ServerErrorResult, ServerError};
use crate::{logger, stdio};

use fmk_config::Config;
use fmk_db::create_pool;
use fmk_ipc::{FileParams, Request, Router, encode_response};

use std::path::PathBuf;

use log::{error, info};
use tokio::io::BufReader;

/// Load configuration, start logging, open the database, and run the
/// chosen command.
pub async fn run(cli: Cli) -> ServerErrorResult<()> {
    let config = match &cli.config_dir {
        Some(dir) => Config::load_from(dir)?,
        None => Config::load()?,
    };
    config.validate()?;

    // Logging first, so everything below is recorded
    logger::initialize(
        config.logging.level,
        config.log_file_path(),
        config.logging.colored,
    )?;

    info!("Starting fmk-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = create_pool(&config.database_path()).await?;
    let router = Router::new(pool.clone(), config.export.clone());

    let result = match cli.command.unwrap_or_default() {
        Command::Serve => serve_stdio(&router).await,
        Command::Export { file } => {
            let file = file.unwrap_or_else(|| PathBuf::from(&config.export.default_file_name));
            run_once(&router, Request::ExportData(file_params(file))).await
        }
        Command::Import { file } => {
            run_once(&router, Request::ImportData(file_params(file))).await
        }
    };

    pool.close().await;

    match &result {
        Ok(()) => info!("fmk-server stopped"),
        Err(e) => error!("fmk-server stopped with error: {e}"),
    }

    result
}

async fn serve_stdio(router: &Router) -> ServerErrorResult<()> {
    info!("Serving requests on stdin");

    let reader = BufReader::new(tokio::io::stdin());
    stdio::serve(router, reader, tokio::io::stdout()).await?;

    Ok(())
}

/// Run a single request and print its response line.
async fn run_once(router: &Router, request: Request) -> ServerErrorResult<()> {
    let operation = request.name();
    let response = router.handle(request).await;

    println!("{}", encode_response(&response));

    if response.is_success() {
        return Ok(());
    }

    let message = response
        .envelope()
        .and_then(|e| e.error.clone().or_else(|| e.message.clone()))
        .unwrap_or_else(|| "unknown error".to_string());

    Err(ServerError::Command { operation, message })
}

fn file_params(file: PathBuf) -> FileParams {
    FileParams {
        file_path: Some(file.display().to_string()),
    }
}
