use std::path::Path;

use crate::common::command::{CommandRunner, SystemRunner};
use crate::common::session::{self, SESSION_VARS};
use crate::wallpaper::mode::FillMode;
use crate::wallpaper::{Backend, Config, Result, Settings, WallpaperError, apply, resolve_image};

/// Sway, one `output <name> bg` command per active output.
pub struct Sway<R = SystemRunner> {
    settings: Settings,
    runner: R,
}

impl Sway {
    pub fn new(config: &Config) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> Sway<R> {
    pub fn with_runner(config: &Config, runner: R) -> Self {
        Self {
            settings: Settings::new(config),
            runner,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn outputs(&self) -> Vec<String> {
        let query = self
            .settings
            .invocation("swaymsg")
            .args(["-t", "get_outputs", "--raw"]);
        active_outputs(&self.runner.capture(&query))
    }
}

/// Names of active outputs in `swaymsg -t get_outputs` JSON.
fn active_outputs(json: &str) -> Vec<String> {
    let Ok(serde_json::Value::Array(outputs)) = serde_json::from_str::<serde_json::Value>(json) else {
        return Vec::new();
    };
    outputs
        .iter()
        .filter(|out| out["active"].as_bool().unwrap_or(false))
        .filter_map(|out| out["name"].as_str().map(str::to_string))
        .collect()
}

/// `bg` modes understood by swaybg.
fn bg_mode(mode: FillMode) -> Option<&'static str> {
    Some(match mode {
        FillMode::Auto | FillMode::Zoom => "fill",
        FillMode::Center => "center",
        FillMode::Tile => "tile",
        FillMode::Stretch => "stretch",
        FillMode::Scale => "fit",
    })
}

impl<R: CommandRunner> Backend for Sway<R> {
    fn name(&self) -> &'static str {
        "Sway"
    }

    fn required_tools(&self) -> &'static [&'static str] {
        &["swaymsg"]
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    fn is_running(&self) -> bool {
        session::env_contains(SESSION_VARS, "sway")
    }

    fn set_wallpaper(&self, image: &Path) -> Result<()> {
        let image = resolve_image(image)?;

        let outputs = self.outputs();
        if outputs.is_empty() {
            return Err(WallpaperError::DiscoveryFailed {
                backend: self.name(),
            });
        }

        let bg = self.settings.native_mode(self.name(), bg_mode)?;
        let image = image.to_string_lossy().into_owned();

        for output in &outputs {
            let set = self.settings.invocation("swaymsg").args([
                "output",
                output.as_str(),
                "bg",
                image.as_str(),
                bg.as_str(),
            ]);
            apply(&self.runner, &set)?;
        }
        Ok(())
    }
}
