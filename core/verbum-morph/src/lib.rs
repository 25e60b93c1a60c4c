#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod meta;
pub mod paradigm;
pub mod stems;
pub mod transform;

use alloc::string::String;
use alloc::vec::Vec;

use verbum_protocol::{ConjugationRules, InflectionTree, PrincipalParts, VerbFlags, Voice};

use core::fmt;

pub use meta::attach_metadata;
pub use paradigm::{attach, build_paradigm};
pub use stems::{extract_stems, strip_reference};
pub use transform::{suppress_defective_tenses, swap_voices};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MorphError {
    /// The rule table has no `active` voice to take reference endings from.
    MissingActiveVoice,
    /// The `active` voice lacks its `principal_parts` reference endings.
    MissingReferenceEndings,
    /// Deponent requested but the rule table defines no `passive` voice.
    MissingPassiveVoice,
}

impl fmt::Display for MorphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MorphError::MissingActiveVoice => write!(f, "rule table has no active voice"),
            MorphError::MissingReferenceEndings => {
                write!(f, "active voice of the rule table has no principal_parts reference endings")
            }
            MorphError::MissingPassiveVoice => {
                write!(f, "verb is deponent but the rule table has no passive voice to swap with")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MorphError {}

/// Generates the complete paradigm of one verb.
///
/// Stems come from the active voice's reference endings. The defective filter
/// and the deponent swap run after the tree is built, metadata last. Nothing is
/// returned on error.
pub fn inflect(
    parts: &PrincipalParts,
    rules: &ConjugationRules,
    flags: VerbFlags,
    translation: Option<Vec<String>>,
) -> Result<InflectionTree, MorphError> {
    let active = rules.voice(Voice::Active).ok_or(MorphError::MissingActiveVoice)?;
    let endings = active.principal_parts.as_ref().ok_or(MorphError::MissingReferenceEndings)?;

    let stems = extract_stems(parts, endings);
    let mut tree = build_paradigm(&stems, rules);

    if flags.contains(VerbFlags::DEFECTIVE) {
        tree = suppress_defective_tenses(tree);
    }
    if flags.contains(VerbFlags::DEPONENT) {
        tree = swap_voices(tree)?;
    }

    Ok(attach_metadata(tree, translation, flags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use verbum_protocol::{Mood, NonFinite, Number, Person};

    const TABLE: &str = r#"{
        "voices": {
            "active": {
                "principal_parts": { "present_infinitive": "re", "perfect_indicative": "i", "perfect_passive_participle": "us" },
                "moods": {
                    "indicative": {
                        "present": { "sg": ["o", "s", "t"], "pl": ["mus", "tis", "nt"] },
                        "imperfect": { "sg": ["bam", "bas", "bat"], "pl": ["bamus", "batis", "bant"] },
                        "perfect": { "sg": ["vi", "visti", "vit"], "pl": ["vimus", "vistis", "verunt"] }
                    },
                    "subjunctive": {
                        "present": { "sg": ["em", "es", "et"], "pl": ["emus", "etis", "ent"] },
                        "pluperfect": { "sg": ["vissem", "visses", "visset"], "pl": ["vissemus", "vissetis", "vissent"] }
                    },
                    "imperative": {
                        "present": { "2nd": { "sg": "", "pl": "te" } },
                        "future": { "2nd": { "sg": "to", "pl": "tote" }, "3rd": { "sg": "to", "pl": "nto" } }
                    }
                },
                "infinitive": { "present": "re", "perfect": "visse" }
            },
            "passive": {
                "moods": {
                    "indicative": {
                        "present": { "sg": ["or", "ris", "tur"], "pl": ["mur", "mini", "ntur"] }
                    }
                },
                "infinitive": { "present": "ri" }
            }
        }
    }"#;

    fn rules() -> ConjugationRules {
        serde_json::from_str(TABLE).expect("valid table")
    }

    fn amo() -> PrincipalParts {
        PrincipalParts::new(["amo", "amare", "amavi", "amatus"].map(String::from)).expect("valid parts")
    }

    #[test]
    fn test_inflect_plain_verb() {
        let tree = inflect(&amo(), &rules(), VerbFlags::empty(), None).expect("inflects");
        let active = tree.voice(Voice::Active).expect("active");

        let present = active.tense(Mood::Indicative, "present").expect("present");
        assert_eq!(present.get(Number::Singular, Person::Second), Some("amas"));
        assert_eq!(active.non_finite_form(NonFinite::Infinitive, "present"), Some("amare"));
        assert_eq!(active.non_finite_form(NonFinite::Infinitive, "perfect"), Some("amavisse"));
        assert!(!tree.meta.is_deponent);
        assert!(!tree.meta.is_defective);
    }

    #[test]
    fn test_inflect_is_deterministic() {
        let first = inflect(&amo(), &rules(), VerbFlags::all(), Some(vec!["love".to_string()])).expect("inflects");
        let second = inflect(&amo(), &rules(), VerbFlags::all(), Some(vec!["love".to_string()])).expect("inflects");

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).expect("json"),
            serde_json::to_string(&second).expect("json")
        );
    }

    #[test]
    fn test_defective_only_removes_present_system() {
        let full = inflect(&amo(), &rules(), VerbFlags::empty(), None).expect("inflects");
        let defective = inflect(&amo(), &rules(), VerbFlags::DEFECTIVE, None).expect("inflects");

        for voice in [Voice::Active, Voice::Passive] {
            let full = full.voice(voice).expect("voice");
            let defective = defective.voice(voice).expect("voice");

            for mood in [Mood::Indicative, Mood::Subjunctive] {
                for (label, forms) in full.finite(mood).into_iter().flatten() {
                    match label.as_str() {
                        "present" | "imperfect" | "future" => assert!(defective.tense(mood, label).is_none()),
                        _ => assert_eq!(defective.tense(mood, label), Some(forms)),
                    }
                }
            }
            assert_eq!(defective.infinitive, full.infinitive);
        }

        let imperative = defective.voice(Voice::Active).and_then(|v| v.imperative.as_ref()).expect("imperative");
        assert!(imperative.is_empty());
        assert!(defective.meta.is_defective);
    }

    #[test]
    fn test_deponent_swaps_voices() {
        let plain = inflect(&amo(), &rules(), VerbFlags::empty(), None).expect("inflects");
        let deponent = inflect(&amo(), &rules(), VerbFlags::DEPONENT, None).expect("inflects");

        assert_eq!(deponent.voice(Voice::Active), plain.voice(Voice::Passive));
        assert_eq!(deponent.voice(Voice::Passive), plain.voice(Voice::Active));
        assert!(deponent.meta.is_deponent);

        let present = deponent
            .voice(Voice::Active)
            .and_then(|v| v.tense(Mood::Indicative, "present"))
            .expect("present");
        assert_eq!(present.sg[0], "amaor");
    }

    #[test]
    fn test_deponent_without_passive_fails() {
        let mut rules = rules();
        rules.voices.retain(|(v, _)| *v == Voice::Active);

        assert_eq!(inflect(&amo(), &rules, VerbFlags::DEPONENT, None), Err(MorphError::MissingPassiveVoice));
        // Same table is fine without the flag
        assert!(inflect(&amo(), &rules, VerbFlags::empty(), None).is_ok());
    }

    #[test]
    fn test_missing_reference_endings() {
        let mut rules = rules();
        for (_, voice) in rules.voices.iter_mut() {
            voice.principal_parts = None;
        }
        assert_eq!(inflect(&amo(), &rules, VerbFlags::empty(), None), Err(MorphError::MissingReferenceEndings));

        rules.voices.retain(|(v, _)| *v == Voice::Passive);
        assert_eq!(inflect(&amo(), &rules, VerbFlags::empty(), None), Err(MorphError::MissingActiveVoice));
    }

    #[test]
    fn test_translation_metadata() {
        let glosses = vec!["love".to_string(), "loved".to_string(), "loved".to_string()];
        let tree = inflect(&amo(), &rules(), VerbFlags::empty(), Some(glosses)).expect("inflects");

        let json = serde_json::to_value(&tree).expect("json");
        assert_eq!(json["meta"]["translation"], serde_json::json!(["love", "loved", "loved"]));
        assert_eq!(json["meta"]["isDeponent"], false);
        assert_eq!(json["active"]["indicative"]["present"]["sg"][0], "amao");
    }
}
