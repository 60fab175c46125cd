mod settings;

use anyhow::Context;
use chrono::{Local, NaiveTime};
use clap::{Parser, Subcommand};
use clockface::{Clock, Instant, Theme};
use settings::Settings;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clockface", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Render the face to a PNG file.
    Render {
        /// Time to show as HH:MM, HH:MM:SS or HH:MM:SS.mmm (defaults to now)
        #[arg(short, long, value_parser = parse_time)]
        time: Option<NaiveTime>,

        /// Face radius in logical units
        #[arg(short, long)]
        radius: Option<f64>,

        /// Device pixels per logical unit
        #[arg(short, long)]
        density: Option<f64>,

        /// Move the second hand in whole-second steps
        #[arg(long)]
        stepped: bool,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Manage the settings file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigAction {
    /// Print where the settings file is read from.
    Path,
    /// Write the default settings file unless one already exists.
    Init,
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"]
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(s, format).ok())
        .ok_or_else(|| format!("expected HH:MM[:SS[.mmm]], got {s:?}"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            time,
            radius,
            density,
            stepped,
            output,
        } => {
            let job = resolve(settings::load_or_default(), stepped, radius, density, output);
            let instant = time.map_or_else(|| Instant::of(&Local::now()), Instant::from);
            render(instant, job)
        }
        Commands::Config { action } => match action {
            ConfigAction::Path => {
                println!("{}", settings::get_config_path()?.display());
                Ok(())
            }
            ConfigAction::Init => {
                let path = settings::write_default_config()?;
                println!("{}", path.display());
                Ok(())
            }
        },
    }
}

/// Face parameters after command-line flags are laid over the settings.
#[derive(Debug, Clone, PartialEq)]
struct RenderJob {
    theme: Theme,
    radius: f64,
    density: f64,
    output: PathBuf,
}

fn resolve(
    settings: Settings,
    stepped: bool,
    radius: Option<f64>,
    density: Option<f64>,
    output: Option<PathBuf>,
) -> RenderJob {
    RenderJob {
        theme: Theme {
            continuous_seconds: settings.theme.continuous_seconds && !stepped,
            ..settings.theme
        },
        radius: radius.unwrap_or(settings.radius),
        density: density.unwrap_or(settings.density),
        output: output.unwrap_or(settings.output),
    }
}

fn render(instant: Instant, job: RenderJob) -> anyhow::Result<()> {
    let RenderJob {
        theme,
        radius,
        density,
        output,
    } = job;

    let mut clock = Clock::sized(radius, density, theme)?;
    clock.draw(instant)?;

    let png = encode_png(&clock)?;
    fs_err::write(&output, png)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    log::info!(
        "Rendered {} at radius {} to {}",
        instant,
        radius,
        output.display()
    );
    Ok(())
}

fn encode_png(clock: &Clock) -> anyhow::Result<Vec<u8>> {
    let mut png = Vec::new();
    clock
        .surface()
        .write_png(&mut png)
        .context("Failed to encode PNG")?;
    Ok(png)
}
