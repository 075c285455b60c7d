//! Jirabot binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Install the tracing subscriber (stderr, so logs stay out of the chat)
//! 3. Build the chat orchestrator over the HTTP backends
//! 4. Run one command, or an interactive session until exit

mod cli;
mod output;
mod repl;

use clap::Parser;
use tokio::io::BufReader;

use jirabot_chat::ChatOrchestrator;
use jirabot_core::JirabotConfig;

use cli::CliArgs;
use output::Painter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let config_file = args.resolve_config_path();
    let mut config = if args.config_is_explicit() {
        JirabotConfig::load(&config_file)?
    } else {
        JirabotConfig::load_or_default(&config_file)
    };
    config.apply_env_overrides();

    // Tracing.
    let level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting jirabot v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration resolved");
    if config.llm.api_key.is_none() {
        tracing::warn!("No language model API key configured; natural-language queries will use the default query");
    }

    let mut orchestrator = ChatOrchestrator::from_config(&config)?;
    let painter = Painter::detect(args.no_color);

    if let Some(command) = args.one_shot() {
        if let Some(text) = orchestrator.handle(&command).await.text() {
            println!("{}", text);
        }
        return Ok(());
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run(
        &mut orchestrator,
        stdin,
        &mut stdout,
        painter,
        tokio::signal::ctrl_c(),
    )
    .await?;

    Ok(())
}
