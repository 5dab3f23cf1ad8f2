//! Counter key derivation.
//!
//! A counter key is the request path, lower-cased, with a single trailing
//! slash removed. `/Foo/` and `/foo` count as the same resource. The root
//! path `/` is left alone.

use std::fmt;

/// Normalized, case-insensitive identifier of a counted resource path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CounterKey(String);

impl CounterKey {
    /// Derive the key for a raw request path.
    pub fn normalize(raw_path: &str) -> Self {
        let mut key = raw_path.to_lowercase();
        if key.len() > 1 && key.ends_with('/') {
            key.pop();
        }
        CounterKey(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CounterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CounterKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::CounterKey;

    fn normalize(raw: &str) -> CounterKey {
        CounterKey::normalize(raw)
    }

    #[test]
    fn case_and_trailing_slash_collapse() {
        assert_eq!(normalize("/Foo/Bar/"), normalize("/foo/bar"));
        assert_eq!(normalize("/README").as_str(), "/readme");
    }

    #[test]
    fn root_is_kept() {
        assert_eq!(normalize("/").as_str(), "/");
    }

    #[test]
    fn only_one_slash_is_trimmed() {
        assert_eq!(normalize("/a//").as_str(), "/a/");
    }

    #[test]
    fn empty_path_stays_empty() {
        assert_eq!(normalize("").as_str(), "");
    }
}
