use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by detection and by [`Backend::set_wallpaper`].
///
/// None of these are retried internally.
///
/// [`Backend::set_wallpaper`]: crate::wallpaper::Backend::set_wallpaper
#[derive(Error, Debug)]
pub enum WallpaperError {
    #[error("no such file: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("could not detect a supported desktop environment or window manager")]
    NoBackendDetected,

    #[error("unknown backend: {0}")]
    UnknownBackend(String),

    #[error("{backend} is not installed (needs {tools})")]
    NotInstalled {
        backend: &'static str,
        tools: String,
    },

    #[error("could not find any configuration targets for {backend}")]
    DiscoveryFailed { backend: &'static str },

    #[error("invalid desktop wallpaper mode for {backend}: {mode}")]
    InvalidMode { backend: &'static str, mode: String },

    #[error("command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: io::Error,
    },
}

impl WallpaperError {
    pub fn command_failed(command: impl Into<String>, source: io::Error) -> Self {
        WallpaperError::CommandFailed {
            command: command.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, WallpaperError>;
