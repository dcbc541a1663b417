//! ScriptCollectionMap value object
//!
//! Script collections referenced by a flow often carry different ids in
//! different environments. The map rewrites those references so they do not
//! show up as content differences.

use std::str::FromStr;

use crate::error::CpiError;

/// Ordered `from -> to` script collection id pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptCollectionMap {
    pairs: Vec<(String, String)>,
}

impl ScriptCollectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `from -> to` pair
    pub fn with_pair(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.pairs.push((from.into(), to.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Rewrite every reference in `content`
    ///
    /// A reference is an id that forms the complete text content of an XML
    /// element (`>id<`), which is how the process model stores it.
    ///
    /// Each reference is rewritten at most once, so pairs never chain.
    pub fn apply(&self, content: &str) -> String {
        if self.pairs.is_empty() {
            return content.to_string();
        }
        let mut out = String::with_capacity(content.len());
        let mut pieces = content.split('<').peekable();
        while let Some(piece) = pieces.next() {
            let is_last = pieces.peek().is_none();
            match piece.rfind('>') {
                Some(gt) if !is_last => {
                    let (head, text) = piece.split_at(gt + 1);
                    out.push_str(head);
                    out.push_str(self.target_of(text).unwrap_or(text));
                }
                _ => out.push_str(piece),
            }
            if !is_last {
                out.push('<');
            }
        }
        out
    }

    fn target_of(&self, id: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(from, _)| from == id)
            .map(|(_, to)| to.as_str())
    }
}

impl FromStr for ScriptCollectionMap {
    type Err = CpiError;

    /// Parse `"A=B,C=D"`; an empty string is an empty map
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut map = ScriptCollectionMap::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (from, to) = entry
                .split_once('=')
                .map(|(f, t)| (f.trim(), t.trim()))
                .filter(|(f, t)| !f.is_empty() && !t.is_empty())
                .ok_or_else(|| {
                    CpiError::invalid_value("script collection map", entry, "SOURCE=TARGET pairs")
                })?;
            map = map.with_pair(from, to);
        }
        Ok(map)
    }
}
