mod common;
mod utils;

use anyhow::Result;
use common::TestEnvironment;

const XFCE: &[(&str, &str)] = &[("XDG_SESSION_DESKTOP", "XFCE")];

fn xfce_env(fail_on: Option<&str>) -> Result<TestEnvironment> {
    let env = TestEnvironment::new()?;
    env.install_tool("xfconf-query", &utils::fake_xfconf(fail_on))?;
    env.install_tool("xfce4-session", "exit 0\n")?;
    Ok(env)
}

#[test]
fn test_sets_every_xfce_monitor() -> Result<()> {
    let env = xfce_env(None)?;
    let image = env.image();

    let output = utils::run_wallset_command(
        &env,
        XFCE,
        &["set", image.to_str().unwrap(), "--mode", "tile"],
    )?;
    assert_eq!(output.exit_code, 0, "set failed: {}", output.stderr);

    let calls = env.logged_calls()?;
    assert_eq!(calls.len(), 4);
    assert_eq!(calls.iter().filter(|c| c.ends_with("--set 2")).count(), 2);
    let image_set = format!("--set {}", image.display());
    assert_eq!(calls.iter().filter(|c| c.ends_with(&image_set)).count(), 2);
    Ok(())
}

#[test]
fn test_third_target_failure_stops_the_run() -> Result<()> {
    let env = xfce_env(Some("*/monitor1/image-style"))?;
    let image = env.image();

    let output = utils::run_wallset_command(&env, XFCE, &["set", image.to_str().unwrap()])?;

    assert_eq!(output.exit_code, 1);
    assert!(output.stderr.contains("command failed"), "{}", output.stderr);
    assert_eq!(env.logged_calls()?.len(), 3);
    Ok(())
}

#[test]
fn test_missing_image_runs_nothing() -> Result<()> {
    let env = xfce_env(None)?;
    let missing = env.path().join("missing.png");

    let output = utils::run_wallset_command(&env, XFCE, &["set", missing.to_str().unwrap()])?;

    assert_eq!(output.exit_code, 1);
    assert!(output.stderr.contains("no such file"), "{}", output.stderr);
    assert!(env.logged_calls()?.is_empty());
    Ok(())
}

#[test]
fn test_invalid_mode() -> Result<()> {
    let env = xfce_env(None)?;
    let image = env.image();

    let output = utils::run_wallset_command(
        &env,
        XFCE,
        &["set", image.to_str().unwrap(), "--mode", "sideways"],
    )?;

    assert_eq!(output.exit_code, 1);
    assert!(output.stderr.contains("invalid desktop wallpaper mode for Xfce4: sideways"));
    assert!(env.logged_calls()?.is_empty());
    Ok(())
}

#[test]
fn test_default_mode_from_config() -> Result<()> {
    let env = xfce_env(None)?;
    let config_dir = env.config_home().join("wallset");
    std::fs::create_dir_all(&config_dir)?;
    std::fs::write(config_dir.join("config.toml"), "default_mode = \"zoom\"\n")?;
    let image = env.image();

    let output = utils::run_wallset_command(&env, XFCE, &["set", image.to_str().unwrap()])?;
    assert_eq!(output.exit_code, 0, "set failed: {}", output.stderr);

    let calls = env.logged_calls()?;
    assert_eq!(calls.iter().filter(|c| c.ends_with("--set 5")).count(), 2);
    Ok(())
}

#[test]
fn test_no_backend_detected() -> Result<()> {
    let env = TestEnvironment::new()?;

    let output = utils::run_wallset_command(&env, XFCE, &["detect"])?;

    assert_eq!(output.exit_code, 1);
    assert!(output.stderr.contains("could not detect"), "{}", output.stderr);
    Ok(())
}

#[test]
fn test_detect_reports_xfce() -> Result<()> {
    let env = xfce_env(None)?;

    let output = utils::run_wallset_command(&env, XFCE, &["--no-color", "detect"])?;

    assert_eq!(output.exit_code, 0, "detect failed: {}", output.stderr);
    assert!(output.stdout.contains("Detected backend: Xfce4"));
    Ok(())
}

#[test]
fn test_list_as_json() -> Result<()> {
    let env = xfce_env(None)?;

    let output = utils::run_wallset_command(&env, XFCE, &["--output", "json", "list"])?;
    assert_eq!(output.exit_code, 0, "list failed: {}", output.stderr);

    let events: Vec<serde_json::Value> = output
        .stdout
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;
    assert_eq!(events.len(), 8);
    let xfce = events
        .iter()
        .find(|e| e["data"]["backend"] == "Xfce4")
        .expect("Xfce4 listed");
    assert_eq!(xfce["data"]["installed"], true);
    assert_eq!(xfce["data"]["running"], true);
    Ok(())
}

#[test]
fn test_verbose_echoes_commands() -> Result<()> {
    let env = xfce_env(None)?;
    let image = env.image();

    let output = utils::run_wallset_command(
        &env,
        XFCE,
        &["--verbose", "--no-color", "set", image.to_str().unwrap()],
    )?;

    assert_eq!(output.exit_code, 0, "set failed: {}", output.stderr);
    assert!(output.stderr.contains("xfconf-query --channel xfce4-desktop --list"));
    Ok(())
}

#[test]
fn test_backend_override_needs_its_tools() -> Result<()> {
    let env = xfce_env(None)?;
    let image = env.image();

    let output = utils::run_wallset_command(
        &env,
        XFCE,
        &["set", image.to_str().unwrap(), "--backend", "sway"],
    )?;

    assert_eq!(output.exit_code, 1);
    assert!(output.stderr.contains("Sway is not installed"), "{}", output.stderr);
    assert!(env.logged_calls()?.is_empty());
    Ok(())
}

#[test]
fn test_backend_override_skips_detection() -> Result<()> {
    let env = xfce_env(None)?;
    let image = env.image();

    let output = utils::run_wallset_command(
        &env,
        &[("XDG_SESSION_DESKTOP", "sway")],
        &["set", image.to_str().unwrap(), "--backend", "XFCE4"],
    )?;

    assert_eq!(output.exit_code, 0, "set failed: {}", output.stderr);
    assert_eq!(env.logged_calls()?.len(), 4);
    Ok(())
}
