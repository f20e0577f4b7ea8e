use std::path::Path;

use crate::common::command::{CommandRunner, SystemRunner};
use crate::common::session;
use crate::wallpaper::mode::FillMode;
use crate::wallpaper::{Backend, Config, Result, Settings, apply, resolve_image};

/// Generic X11 fallback for window managers without their own mechanism.
pub struct Feh<R = SystemRunner> {
    settings: Settings,
    runner: R,
}

impl Feh {
    pub fn new(config: &Config) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> Feh<R> {
    pub fn with_runner(config: &Config, runner: R) -> Self {
        Self {
            settings: Settings::new(config),
            runner,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}

fn bg_flag(mode: FillMode) -> Option<&'static str> {
    Some(match mode {
        FillMode::Auto | FillMode::Zoom => "fill",
        FillMode::Center => "center",
        FillMode::Tile => "tile",
        FillMode::Stretch => "scale",
        FillMode::Scale => "max",
    })
}

impl<R: CommandRunner> Backend for Feh<R> {
    fn name(&self) -> &'static str {
        "Feh"
    }

    fn required_tools(&self) -> &'static [&'static str] {
        &["feh"]
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Matches any X11 session.
    fn is_running(&self) -> bool {
        session::env_contains(&["XDG_SESSION_TYPE"], "x11")
    }

    fn set_wallpaper(&self, image: &Path) -> Result<()> {
        let image = resolve_image(image)?;
        let flag = self.settings.native_mode(self.name(), bg_flag)?;
        let feh = self
            .settings
            .invocation("feh")
            .arg(format!("--bg-{flag}"))
            .arg(image.to_string_lossy());
        apply(&self.runner, &feh)
    }
}
