use std::io::Write;
use clap::Parser;
use rn_ai_optimize::config::config_manager::ConfigManager;
use rn_ai_optimize::errors::ErrorHandler;
use rn_ai_optimize::i18n::Locale;
use rn_ai_optimize::structs::cli::Cli;
use rn_ai_optimize::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let locale = Locale::from_env();
    let cli = Cli::parse();

    if let Ok(cwd) = std::env::current_dir() {
        ConfigManager::load_dotenv(&cwd);
    }

    let config = match ConfigManager::load() {
        Ok(config) => config,
        Err(e) => {
            ErrorHandler::handle_error(&e, locale);
            std::process::exit(1);
        }
    };

    let mut runner = CommandRunner::new(config, locale);
    if let Err(e) = runner.run(cli).await {
        ErrorHandler::handle_error(&e, locale);
        std::process::exit(1);
    }

    Ok(())
}
