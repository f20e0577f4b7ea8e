use std::path::Path;

use crate::common::command::{CommandRunner, SystemRunner};
use crate::common::session::{self, SESSION_VARS};
use crate::wallpaper::mode::FillMode;
use crate::wallpaper::{Backend, Config, Result, Settings, apply, resolve_image};

/// Plasma 6 ships qdbus6, Plasma 5 ships qdbus or qdbus-qt5 depending on
/// the distribution.
const QDBUS: &[&str] = &["qdbus6", "qdbus", "qdbus-qt5"];

/// KDE Plasma, through the PlasmaShell scripting API.
pub struct Plasma<R = SystemRunner> {
    settings: Settings,
    runner: R,
    qdbus: Option<&'static str>,
}

impl Plasma {
    pub fn new(config: &Config) -> Self {
        let qdbus = QDBUS.iter().copied().find(|exe| which::which(exe).is_ok());
        Self {
            settings: Settings::new(config),
            runner: SystemRunner,
            qdbus,
        }
    }
}

impl<R: CommandRunner> Plasma<R> {
    /// Use `qdbus` as the D-Bus client instead of searching `PATH`.
    pub fn with_runner(config: &Config, runner: R, qdbus: &'static str) -> Self {
        Self {
            settings: Settings::new(config),
            runner,
            qdbus: Some(qdbus),
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}

/// `FillMode` of the org.kde.image plugin, which follows Qt's
/// `Image.fillMode`: Stretch=0, PreserveAspectFit=1, PreserveAspectCrop=2,
/// Tile=3, Pad=6.
fn fill_mode(mode: FillMode) -> Option<&'static str> {
    Some(match mode {
        FillMode::Stretch => "0",
        FillMode::Scale => "1",
        FillMode::Auto | FillMode::Zoom => "2",
        FillMode::Tile => "3",
        FillMode::Center => "6",
    })
}

fn js_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Script that points every desktop containment at `uri`.
fn desktop_script(uri: &str, fill: &str) -> String {
    format!(
        r#"desktops().forEach(d => {{
    d.wallpaperPlugin = "org.kde.image";
    d.currentConfigGroup = Array("Wallpaper", "org.kde.image", "General");
    d.writeConfig("Image", "{}");
    d.writeConfig("FillMode", {});
    d.reloadConfig();
}});"#,
        js_string(uri),
        fill
    )
}

impl<R: CommandRunner> Backend for Plasma<R> {
    fn name(&self) -> &'static str {
        "Plasma"
    }

    fn required_tools(&self) -> &'static [&'static str] {
        QDBUS
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Any one of the qdbus variants is enough.
    fn is_installed(&self) -> bool {
        self.qdbus.is_some()
    }

    fn is_running(&self) -> bool {
        session::env_contains(SESSION_VARS, "plasma") || session::env_contains(SESSION_VARS, "kde")
    }

    fn set_wallpaper(&self, image: &Path) -> Result<()> {
        let image = resolve_image(image)?;
        let qdbus = self.qdbus.unwrap_or(QDBUS[0]);

        let fill = self.settings.native_mode(self.name(), fill_mode)?;
        let script = desktop_script(&format!("file://{}", image.display()), &fill);

        let evaluate = self.settings.invocation(qdbus).args([
            "org.kde.plasmashell",
            "/PlasmaShell",
            "org.kde.PlasmaShell.evaluateScript",
            script.as_str(),
        ]);
        apply(&self.runner, &evaluate)
    }
}
