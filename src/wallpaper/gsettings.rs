//! GNOME, MATE and Cinnamon all keep their background in a GSettings schema
//! and differ only in schema name, keys and path format.

use std::path::Path;

use crate::common::command::{CommandRunner, SystemRunner};
use crate::common::session::{self, SESSION_VARS};
use crate::wallpaper::mode::FillMode;
use crate::wallpaper::{Backend, Config, Result, Settings, WallpaperError, apply, listing, resolve_image};

/// How a schema expects the image location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathFormat {
    Plain,
    FileUri,
}

/// One desktop's background schema.
#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub token: &'static str,
    pub tools: &'static [&'static str],
    pub schema: &'static str,
    /// Keys that receive the image, in order. Keys the schema does not list
    /// are skipped (e.g. `picture-uri-dark` before GNOME 42).
    pub image_keys: &'static [&'static str],
    pub options_key: &'static str,
    pub format: PathFormat,
}

pub const GNOME: Profile = Profile {
    name: "Gnome",
    token: "gnome",
    tools: &["gsettings"],
    schema: "org.gnome.desktop.background",
    image_keys: &["picture-uri", "picture-uri-dark"],
    options_key: "picture-options",
    format: PathFormat::FileUri,
};

pub const MATE: Profile = Profile {
    name: "MATE",
    token: "mate",
    tools: &["gsettings", "mate-session"],
    schema: "org.mate.background",
    image_keys: &["picture-filename"],
    options_key: "picture-options",
    format: PathFormat::Plain,
};

pub const CINNAMON: Profile = Profile {
    name: "Cinnamon",
    token: "cinnamon",
    tools: &["gsettings", "cinnamon-session"],
    schema: "org.cinnamon.desktop.background",
    image_keys: &["picture-uri"],
    options_key: "picture-options",
    format: PathFormat::FileUri,
};

/// `picture-options` values shared by all three schemas.
fn picture_options(mode: FillMode) -> Option<&'static str> {
    Some(match mode {
        FillMode::Auto | FillMode::Zoom => "zoom",
        FillMode::Center => "centered",
        FillMode::Tile => "wallpaper",
        FillMode::Stretch => "stretched",
        FillMode::Scale => "scaled",
    })
}

pub struct GSettings<R = SystemRunner> {
    profile: &'static Profile,
    settings: Settings,
    runner: R,
}

impl GSettings {
    pub fn gnome(config: &Config) -> Self {
        Self::with_runner(&GNOME, config, SystemRunner)
    }

    pub fn mate(config: &Config) -> Self {
        Self::with_runner(&MATE, config, SystemRunner)
    }

    pub fn cinnamon(config: &Config) -> Self {
        Self::with_runner(&CINNAMON, config, SystemRunner)
    }
}

impl<R: CommandRunner> GSettings<R> {
    pub fn with_runner(profile: &'static Profile, config: &Config, runner: R) -> Self {
        Self {
            profile,
            settings: Settings::new(config),
            runner,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// The profile's keys that the schema actually lists, options key first.
    fn targets(&self) -> Vec<&'static str> {
        let list = self
            .settings
            .invocation("gsettings")
            .args(["list-keys", self.profile.schema]);
        let keys = listing(&self.runner.capture(&list));
        std::iter::once(self.profile.options_key)
            .chain(self.profile.image_keys.iter().copied())
            .filter(|key| keys.iter().any(|k| k == key))
            .collect()
    }

    fn set_key(&self, key: &str, value: &str) -> Result<()> {
        let set = self
            .settings
            .invocation("gsettings")
            .args(["set", self.profile.schema, key, value]);
        apply(&self.runner, &set)
    }
}

impl<R: CommandRunner> Backend for GSettings<R> {
    fn name(&self) -> &'static str {
        self.profile.name
    }

    fn required_tools(&self) -> &'static [&'static str] {
        self.profile.tools
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    fn is_running(&self) -> bool {
        session::env_contains(SESSION_VARS, self.profile.token)
    }

    fn set_wallpaper(&self, image: &Path) -> Result<()> {
        let image = resolve_image(image)?;

        let targets = self.targets();
        if targets.is_empty() {
            return Err(WallpaperError::DiscoveryFailed {
                backend: self.name(),
            });
        }

        let option = self.settings.native_mode(self.name(), picture_options)?;
        let location = match self.profile.format {
            PathFormat::Plain => image.to_string_lossy().into_owned(),
            PathFormat::FileUri => format!("file://{}", image.display()),
        };

        for key in targets {
            if key == self.profile.options_key {
                self.set_key(key, &option)?;
            } else {
                self.set_key(key, &location)?;
            }
        }
        Ok(())
    }
}
