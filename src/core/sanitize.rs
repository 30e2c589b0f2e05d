// src/core/sanitize.rs
use crate::config::consts::UNKNOWN_SUBJECT;

/// Make a subject name safe to embed in a file name.
/// Separators and characters Windows rejects become '_'; non-ASCII is kept.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in normalize_ws(name).chars() {
        match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => out.push('_'),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    // "." and ".." would resolve to directories
    let out = out.trim_matches(|c| c == '.' || c == ' ').to_string();
    if out.is_empty() { s!(UNKNOWN_SUBJECT) } else { out }
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_plain_names() {
        assert_eq!(sanitize_filename("SUN Yang"), "SUN Yang");
        assert_eq!(sanitize_filename("孙杨"), "孙杨");
    }

    #[test]
    fn replaces_path_characters() {
        assert_eq!(sanitize_filename("a/b\\c:d"), "a_b_c_d");
        assert_eq!(sanitize_filename("  x \t y  "), "x y");
    }

    #[test]
    fn empty_or_dots_become_unknown() {
        assert_eq!(sanitize_filename(""), "Unknown");
        assert_eq!(sanitize_filename(".."), "Unknown");
    }
}
