//! Desktop wallpaper backends.
//!
//! Every supported desktop environment or window manager implements
//! [`Backend`]. [`detect`] walks them in priority order and returns the first
//! one that is both installed and running.
//!
//! Multi-target updates are best-effort: desktop configuration stores have no
//! multi-key transaction, so when one target fails the ones already written
//! stay written and the first error is returned.

use std::path::{Path, PathBuf};

use crate::common::command::{CommandRunner, Invocation};
use crate::common::session;

pub mod cli;
pub mod commands;
pub mod config;
pub mod detect;
pub mod error;
pub mod feh;
pub mod gsettings;
pub mod hyprland;
pub mod mode;
pub mod plasma;
pub mod sway;
pub mod xfce4;

pub use config::Config;
pub use detect::{all_backends, by_name, choose, detect, select};
pub use error::{Result, WallpaperError};
pub use feh::Feh;
pub use gsettings::GSettings;
pub use hyprland::Hyprland;
pub use mode::{FillMode, map_mode};
pub use plasma::Plasma;
pub use sway::Sway;
pub use xfce4::Xfce4;

/// The contract every desktop backend fulfils.
pub trait Backend {
    /// Display name, e.g. `Xfce4`.
    fn name(&self) -> &'static str;

    /// Executables this backend shells out to.
    fn required_tools(&self) -> &'static [&'static str];

    fn settings(&self) -> &Settings;

    fn settings_mut(&mut self) -> &mut Settings;

    /// True if every required tool is on `PATH`. Never fails.
    fn is_installed(&self) -> bool {
        session::tools_on_path(self.required_tools())
    }

    /// True if the session environment names this backend.
    fn is_running(&self) -> bool;

    /// Store the fill mode for the next [`Backend::set_wallpaper`]. Validation
    /// happens there.
    fn set_mode(&mut self, mode: &str) {
        self.settings_mut().mode = mode.to_string();
    }

    fn set_verbose(&mut self, verbose: bool) {
        self.settings_mut().verbose = verbose;
    }

    /// Set `image` as the wallpaper.
    fn set_wallpaper(&self, image: &Path) -> Result<()>;
}

/// Per-instance state shared by all backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Requested fill mode; empty means `default_mode`
    pub mode: String,
    pub verbose: bool,
    pub default_mode: String,
}

impl Settings {
    pub fn new(config: &Config) -> Self {
        Self {
            mode: String::new(),
            verbose: config.verbose,
            default_mode: config.default_mode.clone(),
        }
    }

    pub fn effective_mode(&self) -> &str {
        mode::effective_mode(&self.mode, &self.default_mode)
    }

    /// Translate the effective mode through `table`.
    pub fn native_mode(&self, backend: &'static str, table: mode::ModeTable) -> Result<String> {
        map_mode(backend, self.effective_mode(), table)
    }

    pub fn invocation(&self, program: &str) -> Invocation {
        Invocation::new(program).verbose(self.verbose)
    }
}

/// Check that `image` exists and return it as an absolute path.
pub fn resolve_image(image: &Path) -> Result<PathBuf> {
    if !image.exists() {
        return Err(WallpaperError::FileNotFound(image.to_path_buf()));
    }
    std::path::absolute(image).map_err(|_| WallpaperError::FileNotFound(image.to_path_buf()))
}

/// Run one configuration command, wrapping failure as `CommandFailed`.
pub fn apply<R: CommandRunner>(runner: &R, invocation: &Invocation) -> Result<()> {
    runner
        .run(invocation)
        .map_err(|source| WallpaperError::command_failed(invocation.to_string(), source))
}

/// Split captured output into trimmed, non-empty lines.
pub fn listing(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
