//! Session and tool discovery from the process environment.

use std::env;
use std::ffi::OsStr;
use std::path::Path;

/// Variables that name the running desktop session.
pub const SESSION_VARS: &[&str] = &[
    "XDG_SESSION_DESKTOP",
    "GDMSESSION",
    "DESKTOP_SESSION",
    "XDG_CURRENT_DESKTOP",
];

/// Check whether any of `vars` contains `token`, ignoring case.
pub fn env_contains(vars: &[&str], token: &str) -> bool {
    contains_with(vars, token, |key| env::var(key).ok())
}

/// Same as [`env_contains`] with an explicit variable lookup.
pub fn contains_with<F>(vars: &[&str], token: &str, lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    let token = token.to_lowercase();
    vars.iter()
        .filter_map(|key| lookup(key))
        .any(|value| value.to_lowercase().contains(&token))
}

/// Check whether every tool resolves on the current `PATH`.
pub fn tools_on_path(tools: &[&str]) -> bool {
    tools.iter().all(|tool| which::which(tool).is_ok())
}

/// Same as [`tools_on_path`] against an explicit search path.
pub fn tools_in<P: AsRef<OsStr>>(tools: &[&str], search_path: P, cwd: &Path) -> bool {
    tools
        .iter()
        .all(|tool| which::which_in(tool, Some(search_path.as_ref()), cwd).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_contains_exact_match() {
        let env = lookup(&[("XDG_SESSION_DESKTOP", "xfce")]);
        assert!(contains_with(SESSION_VARS, "xfce", env));
    }

    #[test]
    fn test_contains_mixed_case_substring() {
        let env = lookup(&[("DESKTOP_SESSION", "/usr/share/xsessions/XFCE")]);
        assert!(contains_with(SESSION_VARS, "xfce", &env));
        assert!(contains_with(SESSION_VARS, "XfCe", &env));
    }

    #[test]
    fn test_contains_rejects_other_sessions() {
        let env = lookup(&[("GDMSESSION", "gnome"), ("XDG_SESSION_DESKTOP", "ubuntu")]);
        assert!(!contains_with(SESSION_VARS, "xfce", env));
        assert!(!contains_with(SESSION_VARS, "xfce", lookup(&[])));
    }

    #[test]
    fn test_contains_only_listed_vars() {
        let env = lookup(&[("SOMETHING_ELSE", "sway")]);
        assert!(!contains_with(SESSION_VARS, "sway", env));
    }

    #[test]
    fn test_tools_in_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!tools_in(&["sh"], dir.path(), dir.path()));
        assert!(!tools_in(&["xfconf-query", "xfce4-session"], dir.path(), dir.path()));
    }

    #[test]
    fn test_tools_in_requires_every_tool() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("xfconf-query");
        std::fs::write(&tool, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

        assert!(tools_in(&["xfconf-query"], dir.path(), dir.path()));
        assert!(!tools_in(&["xfconf-query", "xfce4-session"], dir.path(), dir.path()));
    }
}
