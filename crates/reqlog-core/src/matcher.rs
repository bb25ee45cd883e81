//! Path exemption matching

use std::collections::HashSet;

/// Check whether `path` is exempt from logging.
///
/// Exact-set membership is tested first, then prefixes in order.
pub fn is_exempt(path: &str, exact: &HashSet<String>, prefixes: &[String]) -> bool {
    if exact.contains(path) {
        return true;
    }
    prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
}

/// Immutable exact/prefix exemption lists, built once from configuration
#[derive(Debug, Clone, Default)]
pub struct ExemptionList {
    exact: HashSet<String>,
    prefixes: Vec<String>,
}

impl ExemptionList {
    pub fn new<E, P>(exact: E, prefixes: P) -> Self
    where
        E: IntoIterator<Item = String>,
        P: IntoIterator<Item = String>,
    {
        Self {
            exact: exact.into_iter().collect(),
            prefixes: prefixes.into_iter().collect(),
        }
    }

    pub fn is_exempt(&self, path: &str) -> bool {
        is_exempt(path, &self.exact, &self.prefixes)
    }

    pub fn exact(&self) -> &HashSet<String> {
        &self.exact
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.prefixes.is_empty()
    }
}
