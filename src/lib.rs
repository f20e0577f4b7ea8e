//! wallset: detect the running desktop environment and set its wallpaper.
//!
//! The entry point is [`wallpaper::detect`], which returns the first
//! [`wallpaper::Backend`] that is both installed and running in the current
//! session.

pub mod common;
pub mod ui;
pub mod wallpaper;

pub use wallpaper::{Backend, Config, FillMode, WallpaperError, detect};
