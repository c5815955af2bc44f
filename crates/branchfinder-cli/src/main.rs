mod shell;
mod terminal;

use std::path::PathBuf;

use anyhow::Context;
use branchfinder_app::{Command, Controller};
use branchfinder_core::{distinct_categories, distinct_locations, AppConfig};
use branchfinder_loader::{load_dataset, DataSource};
use branchfinder_map::{HeadlessBackend, MapSettings};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::terminal::{OutputFormat, TerminalView};

#[derive(Debug, Parser)]
#[command(name = "branchfinder")]
#[command(about = "Search, filter, and map bank branch locations")]
struct Cli {
    /// Read the dataset from a local JSON file
    #[arg(long, global = true, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Fetch the dataset from this URL instead of the configured one
    #[arg(long, global = true)]
    url: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
struct FilterArgs {
    /// Case-insensitive text matched against name, area, and address
    #[arg(long, short)]
    search: Option<String>,

    /// Exact region code (e.g., NCR)
    #[arg(long, short)]
    location: Option<String>,

    /// Exact branch category (e.g., ATM)
    #[arg(long = "type", short = 't')]
    category: Option<String>,
}

impl FilterArgs {
    fn into_commands(self) -> Vec<Command> {
        let mut commands = Vec::new();
        if let Some(term) = self.search {
            commands.push(Command::Search(term));
        }
        if let Some(location) = self.location {
            commands.push(Command::SetLocation(location));
        }
        if let Some(category) = self.category {
            commands.push(Command::SetCategory(category));
        }
        commands
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print matching branches as result cards
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show which branches the map would plot for a query
    Map {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show the detail panel for one branch
    Detail {
        /// Dataset position shown in list output
        index: usize,
    },
    /// List region codes present in the dataset
    Locations,
    /// List branch categories present in the dataset
    Categories,
    /// Start an interactive session
    Shell {
        #[command(flatten)]
        filters: FilterArgs,
    },
}

fn resolve_source(cli: &Cli, config: &AppConfig) -> DataSource {
    if let Some(path) = &cli.file {
        return DataSource::File(path.clone());
    }
    if let Some(url) = &cli.url {
        return DataSource::Url(url.clone());
    }
    match &config.data_path {
        Some(path) => DataSource::File(path.clone()),
        None => DataSource::Url(config.data_url.clone()),
    }
}

fn print_lines(view: &mut TerminalView) {
    for line in view.drain() {
        println!("{line}");
    }
}

/// Apply filter commands, keeping only the output of the last one.
fn apply_filters(
    controller: &mut Controller<TerminalView, HeadlessBackend>,
    commands: Vec<Command>,
) -> anyhow::Result<()> {
    for command in commands {
        controller.view_mut().drain();
        controller.dispatch(command)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config =
        branchfinder_core::load_app_config().context("failed to load app configuration")?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let source = resolve_source(&cli, &config);
    tracing::debug!(source = %source, env = %config.env, "loading branch data");

    let loaded = load_dataset(&source, config.request_timeout_secs, &config.user_agent).await;
    let mut controller = Controller::from_load_result(
        loaded,
        TerminalView::new(cli.format),
        HeadlessBackend::new(),
        HeadlessBackend::new(),
        MapSettings::from_app_config(&config),
    );

    if controller.load_failed() {
        controller.start();
        print_lines(controller.view_mut());
        anyhow::bail!("branch data could not be loaded from {source}");
    }

    match cli.command {
        Some(Commands::Locations) => {
            for location in distinct_locations(controller.dataset()) {
                println!("{location}");
            }
        }
        Some(Commands::Categories) => {
            for category in distinct_categories(controller.dataset()) {
                println!("{category}");
            }
        }
        Some(Commands::Detail { index }) => {
            controller.dispatch(Command::Select(index))?;
            print_lines(controller.view_mut());
        }
        Some(Commands::Map { filters }) => {
            controller.start();
            apply_filters(&mut controller, filters.into_commands())?;
            controller.view_mut().drain();
            controller.dispatch(Command::ToggleView)?;
            print_lines(controller.view_mut());
        }
        Some(Commands::Shell { filters }) => {
            controller.start();
            apply_filters(&mut controller, filters.into_commands())?;
            let stdin = std::io::stdin();
            shell::run_shell(&mut controller, stdin.lock(), std::io::stdout())?;
        }
        Some(Commands::List { filters }) => {
            controller.start();
            apply_filters(&mut controller, filters.into_commands())?;
            print_lines(controller.view_mut());
        }
        None => {
            controller.start();
            print_lines(controller.view_mut());
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
