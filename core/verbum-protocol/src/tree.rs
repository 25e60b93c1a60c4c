use crate::morphology::{Mood, NonFinite, Number, Person, Voice};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::Serialize as SerdeSerialize;

/// The generated paradigm: voice -> mood -> tense -> forms, plus `meta`.
///
/// Serialises as `{"active": {..}, "passive": {..}, "meta": {..}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InflectionTree {
    pub voices: Vec<(Voice, VoiceForms)>,
    pub meta: Meta,
}

impl InflectionTree {
    pub fn voice(&self, voice: Voice) -> Option<&VoiceForms> {
        self.voices.iter().find(|(v, _)| *v == voice).map(|(_, forms)| forms)
    }

    pub fn has_voice(&self, voice: Voice) -> bool {
        self.voice(voice).is_some()
    }

    /// Every generated form, in emission order.
    pub fn forms(&self) -> impl Iterator<Item = &str> + '_ {
        self.voices.iter().flat_map(|(_, forms)| forms.forms())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct VoiceForms {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", serialize_with = "crate::ordered::optional::serialize"))]
    pub indicative: Option<Vec<(String, FiniteForms)>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", serialize_with = "crate::ordered::optional::serialize"))]
    pub subjunctive: Option<Vec<(String, FiniteForms)>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_imperative"))]
    pub imperative: Option<Vec<(String, Vec<(Person, ImperativeForms)>)>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", serialize_with = "crate::ordered::optional::serialize"))]
    pub infinitive: Option<Vec<(String, String)>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", serialize_with = "crate::ordered::optional::serialize"))]
    pub participle: Option<Vec<(String, String)>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", serialize_with = "crate::ordered::optional::serialize"))]
    pub gerund: Option<Vec<(String, String)>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", serialize_with = "crate::ordered::optional::serialize"))]
    pub supine: Option<Vec<(String, String)>>,
}

impl VoiceForms {
    pub fn finite(&self, mood: Mood) -> Option<&[(String, FiniteForms)]> {
        match mood {
            Mood::Indicative => self.indicative.as_deref(),
            Mood::Subjunctive => self.subjunctive.as_deref(),
            Mood::Imperative => None,
        }
    }

    pub fn tense(&self, mood: Mood, tense: &str) -> Option<&FiniteForms> {
        self.finite(mood)?
            .iter()
            .find(|(label, _)| label == tense)
            .map(|(_, forms)| forms)
    }

    pub fn imperative_tense(&self, tense: &str) -> Option<&[(Person, ImperativeForms)]> {
        self.imperative
            .as_deref()?
            .iter()
            .find(|(label, _)| label == tense)
            .map(|(_, persons)| persons.as_slice())
    }

    pub fn non_finite(&self, category: NonFinite) -> Option<&[(String, String)]> {
        let entries = match category {
            NonFinite::Infinitive => &self.infinitive,
            NonFinite::Participle => &self.participle,
            NonFinite::Gerund => &self.gerund,
            NonFinite::Supine => &self.supine,
        };
        entries.as_deref()
    }

    pub fn non_finite_form(&self, category: NonFinite, label: &str) -> Option<&str> {
        self.non_finite(category)?
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, form)| form.as_str())
    }

    pub fn forms(&self) -> impl Iterator<Item = &str> + '_ {
        let finite = [&self.indicative, &self.subjunctive]
            .into_iter()
            .flatten()
            .flatten()
            .flat_map(|(_, forms)| forms.sg.iter().chain(forms.pl.iter()).map(String::as_str));

        let imperative = self
            .imperative
            .iter()
            .flatten()
            .flat_map(|(_, persons)| persons.iter())
            .flat_map(|(_, forms)| forms.sg.iter().chain(forms.pl.iter()).map(String::as_str));

        let non_finite = [&self.infinitive, &self.participle, &self.gerund, &self.supine]
            .into_iter()
            .flatten()
            .flatten()
            .map(|(_, form)| form.as_str());

        finite.chain(imperative).chain(non_finite)
    }
}

/// Indicative/subjunctive forms of one tense, indexed 1st/2nd/3rd person.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct FiniteForms {
    pub sg: Vec<String>,
    pub pl: Vec<String>,
}

impl FiniteForms {
    pub fn get(&self, number: Number, person: Person) -> Option<&str> {
        let forms = match number {
            Number::Singular => &self.sg,
            Number::Plural => &self.pl,
        };
        forms.get(person.index()).map(String::as_str)
    }
}

/// Imperative forms of one person. A number the rules omit stays absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct ImperativeForms {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub sg: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub pl: Option<String>,
}

impl ImperativeForms {
    pub fn get(&self, number: Number) -> Option<&str> {
        match number {
            Number::Singular => self.sg.as_deref(),
            Number::Plural => self.pl.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Meta {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub translation: Option<Vec<String>>,
    pub is_deponent: bool,
    pub is_defective: bool,
}

/// Imperative tenses as `{tense: {person: {sg, pl}}}`.
#[cfg(feature = "serde")]
fn serialize_imperative<S: serde::Serializer>(
    tenses: &Option<Vec<(String, Vec<(Person, ImperativeForms)>)>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;

    struct Persons<'a>(&'a [(Person, ImperativeForms)]);

    impl serde::Serialize for Persons<'_> {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_map(self.0.iter().map(|(person, forms)| (person, forms)))
        }
    }

    let tenses = tenses.as_deref().unwrap_or_default();
    let mut map = serializer.serialize_map(Some(tenses.len()))?;
    for (tense, persons) in tenses {
        map.serialize_entry(tense, &Persons(persons))?;
    }
    map.end()
}

#[cfg(feature = "serde")]
impl serde::Serialize for InflectionTree {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.voices.len() + 1))?;
        for (voice, forms) in &self.voices {
            map.serialize_entry(voice, forms)?;
        }
        map.serialize_entry("meta", &self.meta)?;
        map.end()
    }
}
