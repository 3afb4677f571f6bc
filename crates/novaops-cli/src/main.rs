//! NovaOps CLI entry point.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use novaops_cli::cli::{Cli, Commands};
use novaops_cli::commands;
use novaops_cli::config::Config;
use novaops_cli::repl::Repl;
use novaops_tools::Commander;

fn main() {
    // .env.local takes precedence over .env
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt().with_env_filter(filter).with_target(false).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> commands::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(state_dir) = cli.state_dir() {
        config.state_dir = state_dir;
    }
    debug!(
        region = %config.aws_region,
        model = %config.model_id,
        lite_model = %config.lite_model_id,
        demo_mode = config.demo_mode,
        max_agent_turns = config.max_agent_turns,
        agent_timeout_secs = config.agent_timeout,
        embedding_dim = config.embedding_dim,
        "Loaded configuration"
    );

    let commander = Commander::new()
        .with_model(&config.model_id)
        .with_embedding_dim(config.embedding_dim);

    match cli.command {
        Some(Commands::Run) | None => {
            let mut repl = Repl::new(&config.state_dir, commander)?;
            repl.run()?;
            Ok(())
        }
        Some(cmd) => commands::execute(cmd, &commander),
    }
}
