//! Data namespaces that minted node IRIs are placed in.

use serde::{Deserialize, Serialize};

/// Default base IRI for generated data.
pub const DEFAULT_DATA_BASE: &str = "https://purl.org/nampi/data/";

/// The namespaces new entity IRIs are minted in, derived from one base IRI.
///
/// `aspect/` holds appellations, `person/` persons and `event/` events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataNamespaces {
    base: String,
}

impl DataNamespaces {
    /// Build namespaces under `base`. A trailing `/` or `#` is added if missing.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') && !base.ends_with('#') {
            base.push('/');
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn aspect(&self) -> String {
        format!("{}aspect/", self.base)
    }

    pub fn person(&self) -> String {
        format!("{}person/", self.base)
    }

    pub fn event(&self) -> String {
        format!("{}event/", self.base)
    }

    /// Prefix bindings for serializers, in a stable order.
    pub fn prefixes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("aspect", self.aspect()),
            ("event", self.event()),
            ("person", self.person()),
        ]
    }
}

impl Default for DataNamespaces {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_namespaces() {
        let ns = DataNamespaces::default();
        assert_eq!(ns.person(), "https://purl.org/nampi/data/person/");
        assert_eq!(ns.aspect(), "https://purl.org/nampi/data/aspect/");
        assert_eq!(ns.event(), "https://purl.org/nampi/data/event/");
    }

    #[test]
    fn base_gets_trailing_separator() {
        let ns = DataNamespaces::new("http://example.org/data");
        assert_eq!(ns.base(), "http://example.org/data/");
        assert_eq!(ns.person(), "http://example.org/data/person/");

        let hashed = DataNamespaces::new("http://example.org/data#");
        assert_eq!(hashed.base(), "http://example.org/data#");
    }
}
