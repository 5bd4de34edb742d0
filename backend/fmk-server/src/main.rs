use fmk_server::Cli;

use std::error::Error;

use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    fmk_server::run(cli).await?;

    Ok(())
}
