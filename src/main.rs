use std::process::ExitCode;

use clap::Parser;
use cook_upload::config::load_dotenv;
use cook_upload::utils::logging;
use cook_upload::{AppError, Cli, Config, UploadFlow};
use tracing::{error, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            let code = e.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(code as u8)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let dotenv_warning = load_dotenv();
    let config = Config::from_env()?;
    let _log_guard = logging::init(cli.verbose, &config.log_file)?;
    if let Some(message) = dotenv_warning {
        warn!("⚠️ {}", message);
    }
    logging::log_startup(&config.llm_model_name, &config.notion_db_id);

    let flow = UploadFlow::new(&config);
    let outcome = match flow.run(&cli.to_request()).await {
        Ok(outcome) => outcome,
        Err(e) => {
            // Logged here while the file writer guard is still alive.
            error!("❌ {}", e);
            return Err(e.into());
        }
    };

    logging::log_outcome(&outcome.title, outcome.page_url.as_deref(), &config.log_file);
    println!("{}", outcome.page_url.as_deref().unwrap_or(&outcome.page_id));

    Ok(())
}
