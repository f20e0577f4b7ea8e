use anyhow::{Context, Result};
use colored::*;
use serde_json::json;
use std::path::PathBuf;

use crate::common::strings::expand_user;
use crate::ui::prelude::*;
use crate::wallpaper::cli::{SetArgs, WallpaperCommands};
use crate::wallpaper::{Config, all_backends, by_name, detect};

pub fn handle_wallpaper_command(command: WallpaperCommands, config: &Config) -> Result<()> {
    match command {
        WallpaperCommands::Set(args) => handle_set(args, config),
        WallpaperCommands::Detect => handle_detect(config),
        WallpaperCommands::List => handle_list(config),
    }
}

fn handle_set(args: SetArgs, config: &Config) -> Result<()> {
    let mut backend = match &args.backend {
        Some(name) => by_name(config, name)?,
        None => detect(config)?,
    };
    if config.verbose {
        emit(
            Level::Debug,
            "wallpaper.backend",
            &format!("Using backend: {}", backend.name()),
            Some(json!({ "backend": backend.name() })),
        );
    }

    if let Some(mode) = &args.mode {
        backend.set_mode(mode);
    }
    backend.set_verbose(config.verbose);

    let path = PathBuf::from(expand_user(&args.path));
    backend
        .set_wallpaper(&path)
        .with_context(|| format!("setting wallpaper with {}", backend.name()))?;

    emit(
        Level::Success,
        "wallpaper.set",
        &format!("Wallpaper set to: {}", path.display().to_string().green()),
        Some(json!({ "backend": backend.name(), "path": path })),
    );
    Ok(())
}

fn handle_detect(config: &Config) -> Result<()> {
    let backend = detect(config)?;
    emit(
        Level::Info,
        "wallpaper.detect",
        &format!("Detected backend: {}", backend.name().cyan()),
        Some(json!({ "backend": backend.name() })),
    );
    Ok(())
}

fn handle_list(config: &Config) -> Result<()> {
    for backend in all_backends(config) {
        let installed = backend.is_installed();
        let running = backend.is_running();
        let state = match (installed, running) {
            (true, true) => "active".green().bold(),
            (true, false) => "installed".normal(),
            (false, true) => "missing tools".yellow(),
            (false, false) => "unavailable".dimmed(),
        };
        emit(
            Level::Info,
            "wallpaper.backend",
            &format!(
                "{:<10} {:<14} {}",
                backend.name(),
                state,
                backend.required_tools().join(", ")
            ),
            Some(json!({
                "backend": backend.name(),
                "installed": installed,
                "running": running,
                "tools": backend.required_tools(),
            })),
        );
    }
    Ok(())
}
