//! Text normalization for content comparison
//!
//! Comparison is line based and insensitive to whitespace and blank lines.
//! Manifests additionally drop the tenant-injected `Origin` headers and
//! parameter files drop comment lines (the tenant writes a timestamp comment
//! on every download).

/// Kind of file being normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// `META-INF/MANIFEST.MF`
    Manifest,
    /// `parameters.prop`
    Parameters,
    /// Any other text file
    Plain,
}

/// Normalize `content` into comparable lines
pub fn normalize(content: &str, kind: TextKind) -> Vec<String> {
    content
        .lines()
        .filter(|line| match kind {
            TextKind::Manifest => !line.trim_start().starts_with("Origin"),
            TextKind::Parameters => {
                let trimmed = line.trim_start();
                !(trimmed.starts_with('#') || trimmed.starts_with('!'))
            }
            TextKind::Plain => true,
        })
        .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Whether two file contents are equal after normalization
///
/// Content that is not UTF-8 is compared byte for byte.
pub fn contents_equal(a: &[u8], b: &[u8], kind: TextKind) -> bool {
    match (std::str::from_utf8(a), std::str::from_utf8(b)) {
        (Ok(a), Ok(b)) => normalize(a, kind) == normalize(b, kind),
        _ => a == b,
    }
}
