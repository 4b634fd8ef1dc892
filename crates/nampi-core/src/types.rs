//! Domain enums shared across the transformer.

use oxigraph::model::NamedNodeRef;
use serde::{Deserialize, Deserializer, Serialize};

use crate::vocab::{core, mona};

/// The kind of an appellation. Unknown kinds fall back to [`AppellationType::GivenName`].
///
/// Deserialization goes through [`AppellationType::from_label`], so it
/// accepts the same loose spellings and never rejects a value.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppellationType {
    Identifier,
    FamilyName,
    #[default]
    GivenName,
    ReligiousName,
}

impl AppellationType {
    /// The ontology type IRI for this appellation kind.
    pub fn type_iri(self) -> NamedNodeRef<'static> {
        match self {
            Self::Identifier => core::IDENTIFIER,
            Self::FamilyName => mona::FAMILY_NAME,
            Self::GivenName => mona::GIVEN_NAME,
            Self::ReligiousName => mona::RELIGIOUS_NAME,
        }
    }

    /// Resolve a free-form label such as `"family name"` or `"RELIGIOUS_NAME"`.
    ///
    /// Matching ignores case and treats spaces, dashes and underscores alike.
    /// Anything unrecognized resolves to the default kind.
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "identifier" | "id" => Self::Identifier,
            "familyname" | "surname" => Self::FamilyName,
            "religiousname" => Self::ReligiousName,
            _ => Self::default(),
        }
    }
}

impl<'de> Deserialize<'de> for AppellationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_given_name() {
        assert_eq!(AppellationType::default(), AppellationType::GivenName);
        assert_eq!(AppellationType::default().type_iri(), mona::GIVEN_NAME);
    }

    #[test]
    fn type_iris() {
        assert_eq!(AppellationType::Identifier.type_iri(), core::IDENTIFIER);
        assert_eq!(AppellationType::FamilyName.type_iri(), mona::FAMILY_NAME);
        assert_eq!(AppellationType::ReligiousName.type_iri(), mona::RELIGIOUS_NAME);
    }

    #[test]
    fn from_label_variants() {
        assert_eq!(AppellationType::from_label("identifier"), AppellationType::Identifier);
        assert_eq!(AppellationType::from_label("Family Name"), AppellationType::FamilyName);
        assert_eq!(
            AppellationType::from_label("RELIGIOUS_NAME"),
            AppellationType::ReligiousName
        );
        assert_eq!(AppellationType::from_label("given-name"), AppellationType::GivenName);
    }

    #[test]
    fn unrecognized_label_falls_back_to_given_name() {
        assert_eq!(AppellationType::from_label("nickname"), AppellationType::GivenName);
        assert_eq!(AppellationType::from_label(""), AppellationType::GivenName);
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&AppellationType::FamilyName).unwrap();
        assert_eq!(json, "\"family_name\"");
    }

    #[test]
    fn deserializes_with_fallback() {
        let parse = |json: &str| serde_json::from_str::<AppellationType>(json).unwrap();
        assert_eq!(parse("\"family_name\""), AppellationType::FamilyName);
        assert_eq!(parse("\"Religious Name\""), AppellationType::ReligiousName);
        assert_eq!(parse("\"nickname\""), AppellationType::GivenName);

        let kind = AppellationType::Identifier;
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(parse(&json), kind);
    }
}
