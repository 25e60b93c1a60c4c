use rkyv::Deserialize;
use serde::Serialize;
use thiserror::Error;
use verbum_morph::MorphError;
use verbum_parser::ParseError;
use verbum_protocol::{ConjugationRules, InflectionTree, VerbFlags};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[derive(Debug, Error)]
pub enum InflectorError {
    #[error("invalid rule table: {0}")]
    Table(#[from] serde_json::Error),

    #[error("invalid rule archive: {0}")]
    Archive(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Morph(#[from] MorphError),
}

/// One conjugation's rule table, held by the page for repeated lookups.
#[wasm_bindgen]
pub struct Inflector {
    rules: ConjugationRules,
}

#[wasm_bindgen]
impl Inflector {
    /// Takes the rule table as JSON text, e.g. the body of `conjugation-1.json`.
    #[wasm_bindgen(constructor)]
    pub fn new(rules_json: &str) -> Result<Inflector, JsError> {
        Ok(Self::from_json(rules_json)?)
    }

    /// Takes a table compiled by `table-compiler` (loaded via fetch() in JS).
    #[wasm_bindgen(js_name = fromArchive)]
    pub fn from_archive(data: Vec<u8>) -> Result<Inflector, JsError> {
        Ok(Self::from_archive_bytes(&data)?)
    }

    /// Returns the inflection tree as a plain JS object.
    pub fn conjugate(
        &self,
        verb: &str,
        deponent: bool,
        defective: bool,
        translation: Option<String>,
    ) -> Result<JsValue, JsError> {
        let tree = self.conjugate_tree(verb, deponent, defective, translation.as_deref())?;
        let value = tree.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
        Ok(value)
    }
}

impl Inflector {
    pub fn from_json(rules_json: &str) -> Result<Self, InflectorError> {
        Ok(Self { rules: serde_json::from_str(rules_json)? })
    }

    pub fn from_archive_bytes(data: &[u8]) -> Result<Self, InflectorError> {
        // Archives must be aligned before validation
        let mut aligned = rkyv::AlignedVec::with_capacity(data.len());
        aligned.extend_from_slice(data);

        let archived = rkyv::check_archived_root::<ConjugationRules>(&aligned)
            .map_err(|e| InflectorError::Archive(e.to_string()))?;
        let rules = archived
            .deserialize(&mut rkyv::Infallible)
            .map_err(|_| InflectorError::Archive("deserialization failed".to_string()))?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &ConjugationRules {
        &self.rules
    }

    /// Parses the principal parts and glosses, then inflects against the held table.
    pub fn conjugate_tree(
        &self,
        verb: &str,
        deponent: bool,
        defective: bool,
        translation: Option<&str>,
    ) -> Result<InflectionTree, InflectorError> {
        let parts = verbum_parser::parse_principal_parts(verb)?;
        let glosses = translation.map(verbum_parser::parse_glosses);
        let flags = VerbFlags::from_switches(deponent, defective);

        Ok(verbum_morph::inflect(&parts, &self.rules, flags, glosses)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verbum_protocol::{Mood, Number, Person, Voice};

    const TABLE: &str = include_str!("../../../data/conjugation-2.json");

    #[test]
    fn test_conjugate_from_json() {
        let inflector = Inflector::from_json(TABLE).unwrap();
        let tree = inflector.conjugate_tree("moneo, monere, monui, monitus", false, false, Some("warn")).unwrap();

        let present = tree.voice(Voice::Active).and_then(|v| v.tense(Mood::Indicative, "present")).unwrap();
        assert_eq!(present.get(Number::Singular, Person::First), Some("moneo"));
        assert_eq!(tree.meta.translation, Some(vec!["warn".to_string()]));
    }

    #[test]
    fn test_archive_matches_json() {
        let from_json = Inflector::from_json(TABLE).unwrap();
        let bytes = rkyv::to_bytes::<_, 4096>(from_json.rules()).unwrap();

        let from_archive = Inflector::from_archive_bytes(bytes.as_slice()).unwrap();
        assert_eq!(from_archive.rules(), from_json.rules());
    }

    #[test]
    fn test_errors_surface() {
        assert!(matches!(Inflector::from_json("{ broken"), Err(InflectorError::Table(_))));
        assert!(matches!(Inflector::from_archive_bytes(&[1, 2, 3]), Err(InflectorError::Archive(_))));

        let inflector = Inflector::from_json(TABLE).unwrap();
        let err = inflector.conjugate_tree("moneo, monere", false, false, None).unwrap_err();
        assert!(matches!(err, InflectorError::Parse(ParseError::TooFewParts { found: 2 })));
    }

    #[test]
    fn test_deponent_needs_passive() {
        let inflector = Inflector::from_json(
            r#"{"voices": {"active": {"principal_parts": {
                "present_infinitive": "re", "perfect_indicative": "i", "perfect_passive_participle": "us"
            }}}}"#,
        )
        .unwrap();

        let err = inflector.conjugate_tree("moneo, monere, monui, monitus", true, false, None).unwrap_err();
        assert!(matches!(err, InflectorError::Morph(MorphError::MissingPassiveVoice)));
    }
}
