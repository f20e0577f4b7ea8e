use anyhow::Result;
use clap::{Parser, ValueEnum};

use wallset::ui::{self, prelude::*};
use wallset::wallpaper::Config;
use wallset::wallpaper::cli::WallpaperCommands;
use wallset::wallpaper::commands::handle_wallpaper_command;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Detect the running desktop and set its wallpaper
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print every external command before running it
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, value_enum, global = true, default_value = "text")]
    output: Format,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: WallpaperCommands,
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    config.verbose |= cli.verbose;
    handle_wallpaper_command(cli.command, &config)
}

fn main() {
    let cli = Cli::parse();
    let format = match cli.output {
        Format::Text => OutputFormat::Text,
        Format::Json => OutputFormat::Json,
    };
    if cli.no_color {
        colored::control::set_override(false);
    }
    ui::init(format, !cli.no_color);

    if let Err(e) = run(cli) {
        emit(Level::Error, "error", &format!("Error: {e:#}"), None);
        std::process::exit(1);
    }
}
