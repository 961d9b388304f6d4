mod menu;

use std::io;

use anyhow::Context;
use clap::{Parser, Subcommand};
use libris_kernel::{settings::Settings, Endpoint, EndpointSet};

use menu::{Menu, Outcome};

/// Library catalog demo server
#[derive(Debug, Parser)]
#[command(name = "libris", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Pick one endpoint from the interactive menu and serve it (default)
    Menu,
    /// Serve endpoints without prompting
    Serve {
        /// Endpoint to enable; repeatable. Defaults to `catalog.endpoints`.
        #[arg(short, long = "endpoint", value_name = "ENDPOINT")]
        endpoints: Vec<Endpoint>,
    },
    /// List every endpoint with its method and path
    Endpoints,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load Libris settings")?;
    libris_telemetry::init(&settings.telemetry)?;

    tracing::debug!(env = ?settings.environment, command = ?cli.command, "libris cli starting");

    let endpoints = match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let stdin = io::stdin();
            let mut menu = Menu::new(stdin.lock(), io::stdout(), settings.menu.clear_screen);
            match menu.run().context("menu input failed")? {
                Outcome::Exit => return Ok(()),
                Outcome::Serve(endpoint) => EndpointSet::single(endpoint),
            }
        }
        Command::Serve { endpoints } if endpoints.is_empty() => settings.catalog.endpoint_set()?,
        Command::Serve { endpoints } => EndpointSet::new(endpoints)?,
        Command::Endpoints => {
            for endpoint in Endpoint::ALL {
                println!(
                    "{:<22} {:<5} {}",
                    endpoint.slug(),
                    endpoint.method().as_str().to_uppercase(),
                    endpoint.path()
                );
            }
            return Ok(());
        }
    };

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(libris_app::serve(&settings, &endpoints))
}
