//! NAMPI ontology IRIs.
//!
//! Downstream consumers of the ontology match on these exact IRIs, so they
//! are fixed constants rather than configuration.

use oxigraph::model::NamedNodeRef;

/// Namespace of the NAMPI core ontology.
pub const CORE_NS: &str = "https://purl.org/nampi/owl/core#";

/// Namespace of the monastic life extension ontology.
pub const MONA_NS: &str = "https://purl.org/nampi/owl/monastic-life#";

/// Namespace of RDF Schema.
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

macro_rules! core_iri {
    ($local:literal) => {
        NamedNodeRef::new_unchecked(concat!("https://purl.org/nampi/owl/core#", $local))
    };
}

macro_rules! mona_iri {
    ($local:literal) => {
        NamedNodeRef::new_unchecked(concat!(
            "https://purl.org/nampi/owl/monastic-life#",
            $local
        ))
    };
}

/// Types and predicates of the core ontology.
pub mod core {
    use super::NamedNodeRef;

    // ── Types ────────────────────────────────────────────────────

    pub const PERSON: NamedNodeRef<'static> = core_iri!("person");
    pub const BIRTH: NamedNodeRef<'static> = core_iri!("birth");
    pub const DATE: NamedNodeRef<'static> = core_iri!("date");
    pub const UNCLEAR_DATE: NamedNodeRef<'static> = core_iri!("unclearDate");
    pub const IDENTIFIER: NamedNodeRef<'static> = core_iri!("identifier");

    // ── Predicates ───────────────────────────────────────────────

    pub const HAS_TEXT: NamedNodeRef<'static> = core_iri!("hasText");
    pub const HAS_APPELLATION: NamedNodeRef<'static> = core_iri!("hasAppellation");
    pub const HAS_DATE_TIME_REPRESENTATION: NamedNodeRef<'static> =
        core_iri!("hasDateTimeRepresentation");
    pub const HAS_EARLIEST_POSSIBLE_DATE_TIME_REPRESENTATION: NamedNodeRef<'static> =
        core_iri!("hasEarliestPossibleDateTimeRepresentation");
    pub const HAS_LATEST_POSSIBLE_DATE_TIME_REPRESENTATION: NamedNodeRef<'static> =
        core_iri!("hasLatestPossibleDateTimeRepresentation");
    pub const STARTS_LIFE_OF: NamedNodeRef<'static> = core_iri!("startsLifeOf");
    pub const TAKES_PLACE_ON: NamedNodeRef<'static> = core_iri!("takesPlaceOn");
}

/// Appellation subtypes of the monastic life extension.
pub mod mona {
    use super::NamedNodeRef;

    pub const FAMILY_NAME: NamedNodeRef<'static> = mona_iri!("familyName");
    pub const GIVEN_NAME: NamedNodeRef<'static> = mona_iri!("givenName");
    pub const RELIGIOUS_NAME: NamedNodeRef<'static> = mona_iri!("religiousName");
}

pub mod rdfs {
    use oxigraph::model::NamedNodeRef;

    pub const LABEL: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#label");
}

#[cfg(test)]
mod tests {
    use super::{core, mona, rdfs, CORE_NS, MONA_NS, RDFS_NS};

    #[test]
    fn core_terms_live_in_core_namespace() {
        for term in [
            core::PERSON,
            core::DATE,
            core::UNCLEAR_DATE,
            core::IDENTIFIER,
            core::HAS_TEXT,
            core::HAS_DATE_TIME_REPRESENTATION,
            core::HAS_EARLIEST_POSSIBLE_DATE_TIME_REPRESENTATION,
            core::HAS_LATEST_POSSIBLE_DATE_TIME_REPRESENTATION,
        ] {
            assert!(term.as_str().starts_with(CORE_NS), "{term}");
        }
    }

    #[test]
    fn appellation_subtypes_live_in_extension_namespace() {
        for term in [mona::FAMILY_NAME, mona::GIVEN_NAME, mona::RELIGIOUS_NAME] {
            assert!(term.as_str().starts_with(MONA_NS), "{term}");
        }
    }

    #[test]
    fn exact_iris() {
        assert_eq!(
            core::UNCLEAR_DATE.as_str(),
            "https://purl.org/nampi/owl/core#unclearDate"
        );
        assert_eq!(
            core::HAS_DATE_TIME_REPRESENTATION.as_str(),
            "https://purl.org/nampi/owl/core#hasDateTimeRepresentation"
        );
        assert_eq!(rdfs::LABEL.as_str(), format!("{RDFS_NS}label"));
    }
}
