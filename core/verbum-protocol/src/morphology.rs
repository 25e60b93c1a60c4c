use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Voice {
    Active = 0,
    Passive = 1,
}

impl Voice {
    pub const fn label(self) -> &'static str {
        match self {
            Voice::Active => "active",
            Voice::Passive => "passive",
        }
    }

    /// The opposite voice. Deponent verbs are modelled as this relabelling.
    pub const fn swapped(self) -> Self {
        match self {
            Voice::Active => Voice::Passive,
            Voice::Passive => Voice::Active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Mood {
    Indicative = 0,
    Subjunctive = 1,
    Imperative = 2,
}

impl Mood {
    pub const fn label(self) -> &'static str {
        match self {
            Mood::Indicative => "indicative",
            Mood::Subjunctive => "subjunctive",
            Mood::Imperative => "imperative",
        }
    }
}

/// Non-finite categories hung directly off a voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum NonFinite {
    Infinitive = 0,
    Participle = 1,
    Gerund = 2,
    Supine = 3,
}

impl NonFinite {
    pub const ALL: [NonFinite; 4] = [
        NonFinite::Infinitive,
        NonFinite::Participle,
        NonFinite::Gerund,
        NonFinite::Supine,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            NonFinite::Infinitive => "infinitive",
            NonFinite::Participle => "participle",
            NonFinite::Gerund => "gerund",
            NonFinite::Supine => "supine",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Number {
    #[cfg_attr(feature = "serde", serde(rename = "sg"))]
    Singular = 0,
    #[cfg_attr(feature = "serde", serde(rename = "pl"))]
    Plural = 1,
}

impl Number {
    pub const ALL: [Number; 2] = [Number::Singular, Number::Plural];

    pub const fn label(self) -> &'static str {
        match self {
            Number::Singular => "sg",
            Number::Plural => "pl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Person {
    #[cfg_attr(feature = "serde", serde(rename = "1st"))]
    First = 1,
    #[cfg_attr(feature = "serde", serde(rename = "2nd"))]
    Second = 2,
    #[cfg_attr(feature = "serde", serde(rename = "3rd"))]
    Third = 3,
}

impl Person {
    pub const ALL: [Person; 3] = [Person::First, Person::Second, Person::Third];

    pub const fn label(self) -> &'static str {
        match self {
            Person::First => "1st",
            Person::Second => "2nd",
            Person::Third => "3rd",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }

    /// Position of this person inside an `sg`/`pl` ending sequence.
    pub const fn index(self) -> usize {
        self as usize - 1
    }
}

/// Tense labels the engine knows about.
///
/// Rule tables may carry any tense label; unknown labels are passed through
/// untouched and simply never match [`Tense::is_present_system`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Tense {
    Present = 0,
    Imperfect = 1,
    Future = 2,
    Perfect = 3,
    Pluperfect = 4,
    FuturePerfect = 5,
}

impl Tense {
    pub const ALL: [Tense; 6] = [
        Tense::Present,
        Tense::Imperfect,
        Tense::Future,
        Tense::Perfect,
        Tense::Pluperfect,
        Tense::FuturePerfect,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Tense::Present => "present",
            Tense::Imperfect => "imperfect",
            Tense::Future => "future",
            Tense::Perfect => "perfect",
            Tense::Pluperfect => "pluperfect",
            Tense::FuturePerfect => "future_perfect",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    /// Present, imperfect and future: the tenses a defective verb lacks.
    pub const fn is_present_system(self) -> bool {
        matches!(self, Tense::Present | Tense::Imperfect | Tense::Future)
    }
}

/// Which derived stem an ending attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum StemKind {
    /// First principal part minus its reference ending.
    Present = 0,
    /// Second principal part minus its reference ending. Used unless a rule says otherwise.
    #[default]
    Infinitive = 1,
    /// Third principal part minus its reference ending.
    Perfect = 2,
    /// Fourth principal part minus its reference ending.
    PerfectPassiveParticiple = 3,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct VerbFlags: u8 {
        /// Passive morphology, active meaning: voices are swapped.
        const DEPONENT = 1;
        /// Present-system tenses are suppressed.
        const DEFECTIVE = 2;
    }
}

impl VerbFlags {
    pub fn from_switches(deponent: bool, defective: bool) -> Self {
        let mut flags = VerbFlags::empty();
        flags.set(VerbFlags::DEPONENT, deponent);
        flags.set(VerbFlags::DEFECTIVE, defective);
        flags
    }
}
