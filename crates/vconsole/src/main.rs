//! vconsole - Command-line host for the viewer script console helpers
//!
//! Runs one console helper per invocation against a scene that echoes
//! draw calls and a static host type registry.

mod args;
mod config;
mod scene;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;
use vconsole_core::{draw_point, draw_shape, draw_vector, Describer, Vector3};

#[derive(Parser, Debug)]
#[command(name = "vconsole")]
#[command(about = "Viewer script console helpers")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "vconsole.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// drawPoint(Vector3) or drawPoint(x,y,z)
    DrawPoint {
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// drawVector(Vector3, Vector3) or drawVector(x,y,z, dirx, diry, dirz)
    DrawVector {
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// drawShape(shape)
    DrawShape {
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// help(value): list what can be done with a value
    Describe {
        /// Value to describe (`globals`, `h:app`, `c:QObject`, `v:1,2,3`, `42`, ...)
        target: String,
    },
    /// Print the Vector3 method help
    VectorHelp,
    /// Write a default configuration file to the --config path
    InitConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    debug!("vconsole v{}", env!("CARGO_PKG_VERSION"));

    run(cli.command, &cli.config)
}

/// Execute one console helper
fn run(command: Command, config_path: &Path) -> Result<()> {
    let mut scene = scene::EchoScene::default();

    match command {
        Command::DrawPoint { args: raw } => draw_point(&mut scene, &args::parse_values(&raw)?)?,
        Command::DrawVector { args: raw } => draw_vector(&mut scene, &args::parse_values(&raw)?)?,
        Command::DrawShape { args: raw } => draw_shape(&mut scene, &args::parse_values(&raw)?)?,
        Command::Describe { target } => {
            let config = config::load_config(config_path)?;
            let registry = config.load_registry()?;
            let value = if target == "globals" {
                args::globals()
            } else {
                args::parse_value(&target)?
            };
            let describer = Describer::with_options(&registry, config.describe);
            describer.describe(&value, &mut std::io::stdout());
        }
        Command::VectorHelp => print!("{}", Vector3::help()),
        Command::InitConfig => {
            config::save_default_config(config_path)?;
            info!(path = %config_path.display(), "Wrote default configuration");
            println!("Wrote {}", config_path.display());
        }
    }

    debug!(drawn = scene.drawn, "Done");
    Ok(())
}
