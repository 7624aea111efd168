mod bot;
mod config;
mod error;
mod startup;

use std::{path::Path, process::ExitCode};

use crate::{
    bot::start::{bootstrap, DiscordGateway, Session},
    config::{ConfigSources, DOTENV_FILE},
    error::AppError,
};

#[tokio::main]
async fn main() -> ExitCode {
    startup::init_tracing();

    match run().await {
        Ok(()) => {
            tracing::info!("Discord client stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            e.exit_code()
        }
    }
}

async fn run() -> Result<(), AppError> {
    let sources = ConfigSources::from_process(Path::new(DOTENV_FILE));
    let gateway = DiscordGateway::new();

    let session = bootstrap(sources, &gateway).await?;

    session.wait().await
}
