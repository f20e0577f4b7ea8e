use std::path::Path;

use crate::common::command::{CommandRunner, SystemRunner};
use crate::common::session::{self, SESSION_VARS};
use crate::common::strings::meat;
use crate::ui::prelude::*;
use crate::wallpaper::mode::FillMode;
use crate::wallpaper::{Backend, Config, Result, Settings, WallpaperError, apply, listing, resolve_image};

const CHANNEL: &str = "xfce4-desktop";
const STYLE_SUFFIX: &str = "/image-style";
const IMAGE_SUFFIX: &str = "/last-image";

/// Xfce4 via the `xfce4-desktop` xfconf channel.
///
/// Every monitor and workspace has its own `image-style` and `last-image`
/// property; all of them are updated.
pub struct Xfce4<R = SystemRunner> {
    settings: Settings,
    runner: R,
}

impl Xfce4 {
    pub fn new(config: &Config) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> Xfce4<R> {
    pub fn with_runner(config: &Config, runner: R) -> Self {
        Self {
            settings: Settings::new(config),
            runner,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Channel properties that hold an image style or an image path.
    fn targets(&self) -> Vec<String> {
        let list = self
            .settings
            .invocation("xfconf-query")
            .args(["--channel", CHANNEL, "--list"]);
        listing(&self.runner.capture(&list))
            .into_iter()
            .filter(|prop| prop.ends_with(STYLE_SUFFIX) || prop.ends_with(IMAGE_SUFFIX))
            .collect()
    }

    fn set_property(&self, property: &str, value: &str) -> Result<()> {
        let set = self
            .settings
            .invocation("xfconf-query")
            .args(["--channel", CHANNEL, "--property", property, "--set", value]);
        apply(&self.runner, &set)
    }
}

/// Auto=0, Centered=1, Tiled=2, Stretched=3, Scaled=4, Zoomed=5
fn image_style(mode: FillMode) -> Option<&'static str> {
    Some(match mode {
        FillMode::Auto => "0",
        FillMode::Center => "1",
        FillMode::Tile => "2",
        FillMode::Stretch => "3",
        FillMode::Scale => "4",
        FillMode::Zoom => "5",
    })
}

impl<R: CommandRunner> Backend for Xfce4<R> {
    fn name(&self) -> &'static str {
        "Xfce4"
    }

    fn required_tools(&self) -> &'static [&'static str] {
        &["xfconf-query", "xfce4-session"]
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    fn is_running(&self) -> bool {
        session::env_contains(SESSION_VARS, "xfce")
    }

    fn set_wallpaper(&self, image: &Path) -> Result<()> {
        let image = resolve_image(image)?;

        let targets = self.targets();
        if targets.is_empty() {
            return Err(WallpaperError::DiscoveryFailed {
                backend: self.name(),
            });
        }

        let style = self.settings.native_mode(self.name(), image_style)?;
        let image = image.to_string_lossy();

        for prop in &targets {
            if prop.ends_with(STYLE_SUFFIX) {
                self.set_property(prop, &style)?;
            } else {
                if self.settings.verbose {
                    emit(
                        Level::Debug,
                        "wallpaper.xfce4.target",
                        &format!("updating {}", meat(prop, "/backdrop/", IMAGE_SUFFIX)),
                        None,
                    );
                }
                self.set_property(prop, &image)?;
            }
        }
        Ok(())
    }
}
