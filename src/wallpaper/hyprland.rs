use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::common::command::{CommandRunner, SystemRunner};
use crate::common::session::{self, SESSION_VARS};
use crate::ui::prelude::*;
use crate::wallpaper::mode::FillMode;
use crate::wallpaper::{Backend, Config, Result, Settings, WallpaperError, apply, resolve_image};

/// Hyprland, through the swww daemon.
pub struct Hyprland<R = SystemRunner> {
    settings: Settings,
    runner: R,
    daemon_grace: Duration,
}

impl Hyprland {
    pub fn new(config: &Config) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> Hyprland<R> {
    pub fn with_runner(config: &Config, runner: R) -> Self {
        Self {
            settings: Settings::new(config),
            runner,
            daemon_grace: Duration::from_millis(100),
        }
    }

    /// How long to wait after starting `swww-daemon` before talking to it.
    pub fn daemon_grace(mut self, grace: Duration) -> Self {
        self.daemon_grace = grace;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Start `swww-daemon` if `swww query` exits non-zero. The daemon is
    /// left running on its own.
    fn ensure_daemon(&self) -> Result<()> {
        let query = self.settings.invocation("swww").arg("query");
        if self.runner.run(&query).is_ok() {
            return Ok(());
        }

        let daemon = self.settings.invocation("swww-daemon");
        let pid = self
            .runner
            .spawn(&daemon)
            .map_err(|source| WallpaperError::command_failed(daemon.to_string(), source))?;
        if self.settings.verbose {
            emit(
                Level::Debug,
                "wallpaper.swww.daemon",
                &format!("started swww-daemon (pid {pid})"),
                None,
            );
        }
        thread::sleep(self.daemon_grace);
        Ok(())
    }
}

/// `--resize` values of `swww img`. swww cannot tile.
fn resize(mode: FillMode) -> Option<&'static str> {
    match mode {
        FillMode::Auto | FillMode::Zoom => Some("crop"),
        FillMode::Scale => Some("fit"),
        FillMode::Stretch => Some("stretch"),
        FillMode::Center => Some("no"),
        FillMode::Tile => None,
    }
}

impl<R: CommandRunner> Backend for Hyprland<R> {
    fn name(&self) -> &'static str {
        "Hyprland"
    }

    fn required_tools(&self) -> &'static [&'static str] {
        &["swww", "swww-daemon"]
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    fn is_running(&self) -> bool {
        session::env_contains(SESSION_VARS, "hyprland")
    }

    fn set_wallpaper(&self, image: &Path) -> Result<()> {
        let image = resolve_image(image)?;

        self.ensure_daemon()?;

        let mode = self.settings.native_mode(self.name(), resize)?;
        let img = self
            .settings
            .invocation("swww")
            .arg("img")
            .arg(image.to_string_lossy())
            .args(["--resize", mode.as_str()]);
        apply(&self.runner, &img)
    }
}
