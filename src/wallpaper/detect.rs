//! Backend selection.

use crate::wallpaper::{
    Backend, Config, Feh, GSettings, Hyprland, Plasma, Result, Sway, WallpaperError, Xfce4,
};

/// Every supported backend, most specific first.
///
/// Compositors come before full desktops, and the generic X11 fallback is
/// last, so a session that looks like two environments resolves the same way
/// every time.
pub fn all_backends(config: &Config) -> Vec<Box<dyn Backend>> {
    vec![
        Box::new(Sway::new(config)),
        Box::new(Hyprland::new(config)),
        Box::new(Xfce4::new(config)),
        Box::new(GSettings::mate(config)),
        Box::new(GSettings::cinnamon(config)),
        Box::new(Plasma::new(config)),
        Box::new(GSettings::gnome(config)),
        Box::new(Feh::new(config)),
    ]
}

/// Return the first candidate that is installed and running.
pub fn select(candidates: Vec<Box<dyn Backend>>) -> Result<Box<dyn Backend>> {
    candidates
        .into_iter()
        .find(|backend| backend.is_installed() && backend.is_running())
        .ok_or(WallpaperError::NoBackendDetected)
}

/// Detect the backend for the current session.
pub fn detect(config: &Config) -> Result<Box<dyn Backend>> {
    select(all_backends(config))
}

/// Return the candidate called `name` (case-insensitive) if it is installed.
/// Whether it is running is not checked.
pub fn choose(candidates: Vec<Box<dyn Backend>>, name: &str) -> Result<Box<dyn Backend>> {
    let backend = candidates
        .into_iter()
        .find(|backend| backend.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| WallpaperError::UnknownBackend(name.to_string()))?;
    if !backend.is_installed() {
        return Err(WallpaperError::NotInstalled {
            backend: backend.name(),
            tools: backend.required_tools().join(", "),
        });
    }
    Ok(backend)
}

/// Pick a backend by name, ignoring the session environment.
pub fn by_name(config: &Config, name: &str) -> Result<Box<dyn Backend>> {
    choose(all_backends(config), name)
}
