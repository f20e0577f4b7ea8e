use clap::{Args, Subcommand};

#[derive(Subcommand, Debug, Clone)]
pub enum WallpaperCommands {
    /// Set the wallpaper
    Set(SetArgs),
    /// Show which backend would be used
    Detect,
    /// List all backends with their installed and running state
    List,
}

#[derive(Args, Debug, Clone)]
pub struct SetArgs {
    /// Path to the wallpaper image
    pub path: String,
    /// Fill mode: auto, center, tile, stretch, scale, zoom, or a single backend-native digit
    #[arg(short, long)]
    pub mode: Option<String>,
    /// Use this backend instead of detecting one
    #[arg(short, long)]
    pub backend: Option<String>,
}
