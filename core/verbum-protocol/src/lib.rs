#![no_std] // Critical for WASM/Embedded compatibility

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod morphology;

#[cfg(feature = "serde")]
pub mod ordered;

// Re-export core types for convenience
pub use ids::ConjugationId;
pub use morphology::*;

pub mod model;
pub use model::*;

pub mod tree;
pub use tree::*;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use rkyv::{to_bytes, from_bytes};

    fn sample_rules() -> ConjugationRules {
        ConjugationRules {
            voices: vec![(
                Voice::Active,
                VoiceRules {
                    principal_parts: Some(ReferenceEndings {
                        present_indicative: Some("o".to_string()),
                        present_infinitive: "re".to_string(),
                        perfect_indicative: "i".to_string(),
                        perfect_passive_participle: "us".to_string(),
                    }),
                    moods: MoodRules {
                        indicative: Some(vec![(
                            "present".to_string(),
                            TenseEndings {
                                stem: Some(StemKind::Present),
                                sg: vec!["o".to_string(), "as".to_string(), "at".to_string()],
                                pl: vec!["amus".to_string(), "atis".to_string(), "ant".to_string()],
                            },
                        )]),
                        subjunctive: None,
                        imperative: Some(vec![(
                            "present".to_string(),
                            ImperativeTense {
                                stem: None,
                                persons: vec![(
                                    Person::Second,
                                    ImperativeEndings { sg: Some(String::new()), pl: Some("te".to_string()) },
                                )],
                            },
                        )]),
                    },
                    infinitive: Some(vec![("present".to_string(), CategoryEnding::Plain("re".to_string()))]),
                    participle: None,
                    gerund: None,
                    supine: Some(vec![(
                        "accusative".to_string(),
                        CategoryEnding::Stemmed { stem: StemKind::PerfectPassiveParticiple, ending: "um".to_string() },
                    )]),
                },
            )],
        }
    }

    #[test]
    fn test_enum_serialization() {
        let original = Person::Third;

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize Person");
        let deserialized: Person = from_bytes(&bytes).expect("Failed to deserialize Person");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_id_serialization() {
        let original = ConjugationId::new(3);

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize ConjugationId");
        let deserialized: ConjugationId = from_bytes(&bytes).expect("Failed to deserialize ConjugationId");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_id_layout() {
        // ConjugationId(u32) should be exactly 4 bytes
        assert_eq!(core::mem::size_of::<ConjugationId>(), 4);
    }

    #[test]
    fn test_rules_archive() {
        // Simulates a table compiled by the table-compiler and loaded back from disk
        let original = sample_rules();

        let bytes = to_bytes::<_, 1024>(&original).expect("Failed to serialize ConjugationRules");
        let deserialized: ConjugationRules = from_bytes(&bytes).expect("Failed to deserialize ConjugationRules");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_person_and_tense_labels() {
        assert_eq!(Person::from_label("2nd"), Some(Person::Second));
        assert_eq!(Person::from_label("4th"), None);
        assert_eq!(Person::Third.index(), 2);

        assert_eq!(Tense::from_label("future_perfect"), Some(Tense::FuturePerfect));
        assert!(Tense::Imperfect.is_present_system());
        assert!(!Tense::Pluperfect.is_present_system());
        assert_eq!(Tense::from_label("aorist"), None);
    }

    #[test]
    fn test_voice_swap_is_involution() {
        for voice in [Voice::Active, Voice::Passive] {
            assert_ne!(voice.swapped(), voice);
            assert_eq!(voice.swapped().swapped(), voice);
        }
    }

    #[test]
    fn test_verb_flags() {
        let flags = VerbFlags::from_switches(true, false);
        assert!(flags.contains(VerbFlags::DEPONENT));
        assert!(!flags.contains(VerbFlags::DEFECTIVE));
        assert_eq!(VerbFlags::from_switches(false, false), VerbFlags::empty());
    }

    #[test]
    fn test_principal_parts_reject_empty() {
        let parts = ["amo", " amare ", "amavi", "amatus"].map(String::from);
        let parts = PrincipalParts::new(parts).expect("valid parts");
        assert_eq!(parts.present_infinitive(), "amare");

        let missing = ["amo", "", "amavi", "amatus"].map(String::from);
        assert!(PrincipalParts::new(missing).is_none());
    }

    #[cfg(feature = "serde")]
    mod json {
        use super::*;

        const TABLE: &str = r#"{
            "voices": {
                "passive": {
                    "moods": { "indicative": { "present": { "sg": ["or", "aris", "atur"], "pl": ["amur", "amini", "antur"] } } }
                },
                "active": {
                    "principal_parts": { "present_infinitive": "re", "perfect_indicative": "i", "perfect_passive_participle": "us" },
                    "moods": {
                        "optative": { "present": { "sg": ["x"] } },
                        "subjunctive": { "present": { "sg": ["em", "es", "et"], "pl": ["emus", "etis", "ent"] }, "imperfect": { "sg": ["rem"] } },
                        "imperative": { "future": { "stem": "infinitive", "3rd": { "sg": "to", "pl": "nto" }, "2nd": { "sg": "to" }, "comment": "ignored" } }
                    },
                    "supine": { "accusative": { "stem": "perfect_passive_participle", "ending": "um" } },
                    "infinitive": { "present": "re" }
                }
            }
        }"#;

        #[test]
        fn test_rules_keep_document_order() {
            let rules: ConjugationRules = serde_json::from_str(TABLE).expect("valid table");

            let voices: alloc::vec::Vec<Voice> = rules.voices.iter().map(|(v, _)| *v).collect();
            assert_eq!(voices, vec![Voice::Passive, Voice::Active]);

            let active = rules.voice(Voice::Active).expect("active voice");
            let tenses: alloc::vec::Vec<&str> =
                active.moods.subjunctive.as_ref().expect("subjunctive").iter().map(|(t, _)| t.as_str()).collect();
            assert_eq!(tenses, vec!["present", "imperfect"]);
            assert!(active.moods.indicative.is_none());
        }

        #[test]
        fn test_imperative_persons_inline() {
            let rules: ConjugationRules = serde_json::from_str(TABLE).expect("valid table");
            let active = rules.voice(Voice::Active).expect("active voice");
            let (label, future) = &active.moods.imperative.as_ref().expect("imperative")[0];

            assert_eq!(label, "future");
            assert_eq!(future.stem, Some(StemKind::Infinitive));
            assert_eq!(future.persons.len(), 2);
            assert_eq!(future.persons[0].0, Person::Third);
            assert_eq!(future.persons[1].1.pl, None);
        }

        #[test]
        fn test_category_endings() {
            let rules: ConjugationRules = serde_json::from_str(TABLE).expect("valid table");
            let active = rules.voice(Voice::Active).expect("active voice");

            let supine = active.non_finite(NonFinite::Supine).expect("supine");
            assert_eq!(supine[0].1.stem(), StemKind::PerfectPassiveParticiple);
            assert_eq!(supine[0].1.ending(), "um");

            let infinitive = active.non_finite(NonFinite::Infinitive).expect("infinitive");
            assert_eq!(infinitive[0].1, CategoryEnding::Plain("re".to_string()));
            assert!(active.non_finite(NonFinite::Gerund).is_none());
        }

        #[test]
        fn test_tree_json_shape() {
            let tree = InflectionTree {
                voices: vec![(
                    Voice::Active,
                    VoiceForms {
                        imperative: Some(vec![(
                            "present".to_string(),
                            vec![(Person::Second, ImperativeForms { sg: Some("ama".to_string()), pl: None })],
                        )]),
                        infinitive: Some(vec![("present".to_string(), "amare".to_string())]),
                        ..VoiceForms::default()
                    },
                )],
                meta: Meta { translation: None, is_deponent: false, is_defective: true },
            };

            let json = serde_json::to_value(&tree).expect("serializable tree");
            assert_eq!(json["active"]["imperative"]["present"]["2nd"]["sg"], "ama");
            assert!(json["active"]["imperative"]["present"]["2nd"].get("pl").is_none());
            assert_eq!(json["active"]["infinitive"]["present"], "amare");
            assert!(json["active"].get("indicative").is_none());
            assert_eq!(json["meta"]["isDefective"], true);
            assert!(json["meta"].get("translation").is_none());
        }
    }
}
