mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use sharepoint_lib::Config;
use simplelog::ColorChoice;
use simplelog::LevelFilter;
use simplelog::TermLogger;
use simplelog::TerminalMode;

use cli::Cli;
use cli::Command;

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("sharepoint")
        .build();

    if let Err(e) = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

fn load_env(cli: &Cli) {
    let result = match &cli.env_file {
        Some(path) => dotenvy::from_path(path).map(|_| path.clone()),
        None => dotenvy::dotenv(),
    };

    match result {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => log::debug!("No dotenv file loaded"),
        Err(e) => log::warn!("Failed to load dotenv file: {}", e),
    }
}

async fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    match cli.subcommand() {
        Command::Check { library } => commands::check(config, &library).await,
        Command::Site => commands::site(config).await,
        Command::List { library } => commands::list(config, &library).await,
        Command::Upload {
            path,
            library,
            name,
        } => commands::upload(config, &path, &library, name.as_deref()).await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);
    load_env(&cli);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("✗ Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        // Already reported on its own line
        Err(e) if e.is::<commands::StepFailed>() => ExitCode::FAILURE,
        Err(e) => {
            println!("✗ Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
