//! `parameters.prop` parsing
//!
//! Java properties syntax: `key=value` or `key:value`, `#`/`!` comments,
//! backslash escapes and trailing-backslash line continuation.

/// Parse properties text into ordered key/value pairs
pub fn parse_properties(content: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    let mut pending = String::new();

    for raw in content.lines() {
        let line = raw.trim_start();
        if pending.is_empty() && (line.is_empty() || line.starts_with('#') || line.starts_with('!'))
        {
            continue;
        }

        if ends_with_continuation(line) {
            pending.push_str(&line[..line.len() - 1]);
            continue;
        }
        pending.push_str(line);

        if let Some(entry) = split_entry(&pending) {
            entries.push(entry);
        }
        pending.clear();
    }

    if !pending.is_empty() {
        if let Some(entry) = split_entry(&pending) {
            entries.push(entry);
        }
    }
    entries
}

/// Look up one key
pub fn property<'a>(entries: &'a [(String, String)], key: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// An odd number of trailing backslashes continues the line
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> Option<(String, String)> {
    let mut escaped = false;
    let mut split_at = None;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                split_at = Some((i, c.len_utf8()));
                break;
            }
            _ => {}
        }
    }

    let (key, value) = match split_at {
        Some((i, len)) => (&line[..i], &line[i + len..]),
        None => (line, ""),
    };
    let key = unescape(key.trim());
    if key.is_empty() {
        return None;
    }
    Some((key, unescape(value.trim_start())))
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}
