use anyhow::Result;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch session: an empty `bin` directory used as `PATH`, a config home
/// and a wallpaper image.
pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        fs::create_dir_all(temp_dir.path().join("bin"))?;
        fs::create_dir_all(temp_dir.path().join("config"))?;
        fs::write(temp_dir.path().join("wallpaper.png"), b"not really a png")?;
        Ok(Self { temp_dir })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.path().join("bin")
    }

    pub fn config_home(&self) -> PathBuf {
        self.path().join("config")
    }

    pub fn image(&self) -> PathBuf {
        self.path().join("wallpaper.png")
    }

    /// File the fake tools append their arguments to
    pub fn log(&self) -> PathBuf {
        self.path().join("calls.log")
    }

    /// Install an executable shell script named `name` on the fake `PATH`.
    pub fn install_tool(&self, name: &str, script: &str) -> Result<()> {
        let path = self.bin_dir().join(name);
        fs::write(&path, format!("#!/bin/sh\n{script}"))?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        Ok(())
    }

    pub fn logged_calls(&self) -> Result<Vec<String>> {
        if !self.log().exists() {
            return Ok(Vec::new());
        }
        Ok(fs::read_to_string(self.log())?
            .lines()
            .map(str::to_string)
            .collect())
    }
}
