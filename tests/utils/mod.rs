use anyhow::Result;
use std::process::Command;

use super::common::TestEnvironment;

pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Run the wallset binary inside `env` with a clean environment plus `vars`.
pub fn run_wallset_command(
    env: &TestEnvironment,
    vars: &[(&str, &str)],
    args: &[&str],
) -> Result<CommandOutput> {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wallset"));
    cmd.args(args)
        .env_clear()
        .env("PATH", env.bin_dir())
        .env("HOME", env.path())
        .env("XDG_CONFIG_HOME", env.config_home())
        .env("WALLSET_TEST_LOG", env.log())
        .current_dir(env.path());
    for (key, value) in vars {
        cmd.env(key, value);
    }

    let output = cmd.output()?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    })
}

/// A fake `xfconf-query` that lists two monitors and logs every `--set`.
/// Fails after logging when the property matches `fail_on`.
pub fn fake_xfconf(fail_on: Option<&str>) -> String {
    let fail = match fail_on {
        Some(prop) => format!("case \"$4\" in {prop}) exit 1 ;; esac\n"),
        None => String::new(),
    };
    format!(
        r#"if [ "$3" = "--list" ]; then
  printf '%s\n' /backdrop/screen0/monitor0/image-style /backdrop/screen0/monitor0/last-image /backdrop/screen0/monitor1/image-style /backdrop/screen0/monitor1/last-image
  exit 0
fi
echo "$@" >> "$WALLSET_TEST_LOG"
{fail}exit 0
"#
    )
}
