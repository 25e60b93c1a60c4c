use rkyv::{Archive, Deserialize, Serialize};
use crate::morphology::{NonFinite, Person, StemKind, Voice, Mood, Number};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Declarative endings for one conjugation class, keyed by voice.
///
/// Loaded once per run and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct ConjugationRules {
    #[cfg_attr(feature = "serde", serde(with = "crate::ordered"))]
    pub voices: Vec<(Voice, VoiceRules)>,
}

impl ConjugationRules {
    pub fn voice(&self, voice: Voice) -> Option<&VoiceRules> {
        self.voices.iter().find(|(v, _)| *v == voice).map(|(_, rules)| rules)
    }

    pub fn has_voice(&self, voice: Voice) -> bool {
        self.voice(voice).is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct VoiceRules {
    /// Suffixes stripped from the principal parts to obtain stems. Never emitted.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub principal_parts: Option<ReferenceEndings>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub moods: MoodRules,
    #[cfg_attr(feature = "serde", serde(default, with = "crate::ordered::optional", skip_serializing_if = "Option::is_none"))]
    pub infinitive: Option<Vec<(String, CategoryEnding)>>,
    #[cfg_attr(feature = "serde", serde(default, with = "crate::ordered::optional", skip_serializing_if = "Option::is_none"))]
    pub participle: Option<Vec<(String, CategoryEnding)>>,
    #[cfg_attr(feature = "serde", serde(default, with = "crate::ordered::optional", skip_serializing_if = "Option::is_none"))]
    pub gerund: Option<Vec<(String, CategoryEnding)>>,
    #[cfg_attr(feature = "serde", serde(default, with = "crate::ordered::optional", skip_serializing_if = "Option::is_none"))]
    pub supine: Option<Vec<(String, CategoryEnding)>>,
}

impl VoiceRules {
    pub fn non_finite(&self, category: NonFinite) -> Option<&[(String, CategoryEnding)]> {
        let entries = match category {
            NonFinite::Infinitive => &self.infinitive,
            NonFinite::Participle => &self.participle,
            NonFinite::Gerund => &self.gerund,
            NonFinite::Supine => &self.supine,
        };
        entries.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct ReferenceEndings {
    /// Optional: without it the present stem is the first principal part itself.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub present_indicative: Option<String>,
    pub present_infinitive: String,
    pub perfect_indicative: String,
    pub perfect_passive_participle: String,
}

/// Moods the engine understands. Anything else in the document is skipped on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct MoodRules {
    #[cfg_attr(feature = "serde", serde(default, with = "crate::ordered::optional", skip_serializing_if = "Option::is_none"))]
    pub indicative: Option<Vec<(String, TenseEndings)>>,
    #[cfg_attr(feature = "serde", serde(default, with = "crate::ordered::optional", skip_serializing_if = "Option::is_none"))]
    pub subjunctive: Option<Vec<(String, TenseEndings)>>,
    #[cfg_attr(feature = "serde", serde(default, with = "crate::ordered::optional", skip_serializing_if = "Option::is_none"))]
    pub imperative: Option<Vec<(String, ImperativeTense)>>,
}

impl MoodRules {
    /// Tense table of the indicative or subjunctive. `None` for the imperative.
    pub fn finite(&self, mood: Mood) -> Option<&[(String, TenseEndings)]> {
        match mood {
            Mood::Indicative => self.indicative.as_deref(),
            Mood::Subjunctive => self.subjunctive.as_deref(),
            Mood::Imperative => None,
        }
    }
}

/// Endings for one indicative/subjunctive tense, indexed 1st/2nd/3rd person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct TenseEndings {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub stem: Option<StemKind>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sg: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pl: Vec<String>,
}

impl TenseEndings {
    pub fn endings(&self, number: Number) -> &[String] {
        match number {
            Number::Singular => &self.sg,
            Number::Plural => &self.pl,
        }
    }
}

/// One imperative tense: person -> endings, plus an optional stem selector.
///
/// In JSON the persons sit next to the selector:
/// `{"stem": "present", "2nd": {"sg": "a", "pl": "ate"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[archive(check_bytes)]
pub struct ImperativeTense {
    pub stem: Option<StemKind>,
    pub persons: Vec<(Person, ImperativeEndings)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct ImperativeEndings {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub sg: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub pl: Option<String>,
}

impl ImperativeEndings {
    pub fn ending(&self, number: Number) -> Option<&str> {
        match number {
            Number::Singular => self.sg.as_deref(),
            Number::Plural => self.pl.as_deref(),
        }
    }
}

/// Ending of a non-finite form: a bare string hangs off the infinitive stem.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[archive(check_bytes)]
pub enum CategoryEnding {
    Plain(String),
    Stemmed { stem: StemKind, ending: String },
}

impl CategoryEnding {
    pub fn stem(&self) -> StemKind {
        match self {
            CategoryEnding::Plain(_) => StemKind::Infinitive,
            CategoryEnding::Stemmed { stem, .. } => *stem,
        }
    }

    pub fn ending(&self) -> &str {
        match self {
            CategoryEnding::Plain(ending) => ending,
            CategoryEnding::Stemmed { ending, .. } => ending,
        }
    }
}

#[cfg(feature = "serde")]
mod imperative_serde {
    use super::{ImperativeEndings, ImperativeTense};
    use crate::morphology::{Person, StemKind};
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::fmt;
    use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
    use serde::ser::{SerializeMap, Serializer};

    const STEM_KEY: &str = "stem";

    impl serde::Serialize for ImperativeTense {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let len = self.persons.len() + usize::from(self.stem.is_some());
            let mut map = serializer.serialize_map(Some(len))?;
            if let Some(stem) = &self.stem {
                map.serialize_entry(STEM_KEY, stem)?;
            }
            for (person, endings) in &self.persons {
                map.serialize_entry(person, endings)?;
            }
            map.end()
        }
    }

    impl<'de> serde::Deserialize<'de> for ImperativeTense {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(ImperativeTenseVisitor)
        }
    }

    struct ImperativeTenseVisitor;

    impl<'de> Visitor<'de> for ImperativeTenseVisitor {
        type Value = ImperativeTense;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of persons (1st/2nd/3rd) to imperative endings")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut stem: Option<StemKind> = None;
            let mut persons = Vec::new();

            while let Some(key) = access.next_key::<String>()? {
                if key == STEM_KEY {
                    if stem.is_some() {
                        return Err(de::Error::duplicate_field(STEM_KEY));
                    }
                    stem = Some(access.next_value()?);
                } else if let Some(person) = Person::from_label(&key) {
                    let endings: ImperativeEndings = access.next_value()?;
                    persons.push((person, endings));
                } else {
                    // Unrecognised key: skipped like any other unknown rule entry.
                    access.next_value::<IgnoredAny>()?;
                }
            }

            Ok(ImperativeTense { stem, persons })
        }
    }
}

/// The four principal parts, in their fixed, meaningful order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrincipalParts {
    parts: [String; 4],
}

impl PrincipalParts {
    /// Returns `None` if any part is empty after trimming.
    pub fn new(parts: [String; 4]) -> Option<Self> {
        let parts = parts.map(|p| String::from(p.trim()));
        if parts.iter().any(|p| p.is_empty()) {
            return None;
        }
        Some(Self { parts })
    }

    pub fn present_indicative(&self) -> &str {
        &self.parts[0]
    }

    pub fn present_infinitive(&self) -> &str {
        &self.parts[1]
    }

    pub fn perfect_indicative(&self) -> &str {
        &self.parts[2]
    }

    pub fn perfect_passive_participle(&self) -> &str {
        &self.parts[3]
    }

    pub fn as_array(&self) -> &[String; 4] {
        &self.parts
    }
}

/// Stems derived from the principal parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stems {
    pub present: String,
    pub infinitive: String,
    pub perfect: String,
    pub perfect_passive_participle: String,
}

impl Stems {
    pub fn get(&self, kind: StemKind) -> &str {
        match kind {
            StemKind::Present => &self.present,
            StemKind::Infinitive => &self.infinitive,
            StemKind::Perfect => &self.perfect,
            StemKind::PerfectPassiveParticiple => &self.perfect_passive_participle,
        }
    }
}
