//! Small string helpers.

/// Longest common prefix of all strings. Empty for an empty input.
pub fn common_prefix<S: AsRef<str>>(strings: &[S]) -> String {
    let Some(first) = strings.first() else {
        return String::new();
    };
    let mut prefix = first.as_ref();
    for s in &strings[1..] {
        let s = s.as_ref();
        let len = prefix
            .char_indices()
            .zip(s.chars())
            .take_while(|((_, a), b)| a == b)
            .last()
            .map_or(0, |((i, c), _)| i + c.len_utf8());
        prefix = &prefix[..len];
    }
    prefix.to_string()
}

/// Longest common suffix of all strings. Empty for an empty input.
pub fn common_suffix<S: AsRef<str>>(strings: &[S]) -> String {
    let Some(first) = strings.first() else {
        return String::new();
    };
    let mut suffix = first.as_ref();
    for s in &strings[1..] {
        let s = s.as_ref();
        let start = suffix
            .char_indices()
            .rev()
            .zip(s.chars().rev())
            .take_while(|((_, a), b)| a == b)
            .last()
            .map_or(suffix.len(), |((i, _), _)| i);
        suffix = &suffix[start..];
    }
    suffix.to_string()
}

/// The part of `s` between `prefix` and `suffix`.
///
/// Neither is checked for actually being present; only their lengths are
/// used. Strings too short to hold both are returned unchanged.
pub fn meat<'a>(s: &'a str, prefix: &str, suffix: &str) -> &'a str {
    if s.len() < prefix.len() + suffix.len() {
        return s;
    }
    s.get(prefix.len()..s.len() - suffix.len()).unwrap_or(s)
}

/// Expand a leading `~` or `$HOME`.
pub fn expand_user(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("$HOME") {
        return format!("{}{}", shellexpand::tilde("~"), rest);
    }
    shellexpand::tilde(path).into_owned()
}
