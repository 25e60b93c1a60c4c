use alloc::string::String;
use alloc::vec::Vec;

use verbum_protocol::{
    CategoryEnding, ConjugationRules, FiniteForms, ImperativeForms, ImperativeTense, InflectionTree, Mood, MoodRules,
    NonFinite, Number, Person, Stems, TenseEndings, VoiceForms, VoiceRules,
};

/// Joins a stem and an ending into a form.
pub fn attach(stem: &str, ending: &str) -> String {
    let mut form = String::with_capacity(stem.len() + ending.len());
    form.push_str(stem);
    form.push_str(ending);
    form
}

/// Builds the full paradigm for every voice the rules define.
///
/// Voices and tenses come out in rule-table order; moods as indicative,
/// subjunctive, imperative and non-finite categories in [`NonFinite::ALL`]
/// order. The returned
/// tree carries default metadata.
pub fn build_paradigm(stems: &Stems, rules: &ConjugationRules) -> InflectionTree {
    let voices = rules
        .voices
        .iter()
        .map(|(voice, voice_rules)| {
            log::debug!("building {} voice", voice.label());
            (*voice, build_voice(stems, voice_rules))
        })
        .collect();

    InflectionTree { voices, meta: Default::default() }
}

fn build_voice(stems: &Stems, rules: &VoiceRules) -> VoiceForms {
    let mut forms = VoiceForms::default();

    forms.indicative = build_finite_mood(stems, &rules.moods, Mood::Indicative);
    forms.subjunctive = build_finite_mood(stems, &rules.moods, Mood::Subjunctive);
    forms.imperative = rules.moods.imperative.as_ref().map(|tenses| {
        tenses
            .iter()
            .map(|(label, tense)| (label.clone(), build_imperative(stems, label, tense)))
            .collect()
    });

    for category in NonFinite::ALL {
        let built = rules.non_finite(category).map(|entries| build_category(stems, entries));
        match category {
            NonFinite::Infinitive => forms.infinitive = built,
            NonFinite::Participle => forms.participle = built,
            NonFinite::Gerund => forms.gerund = built,
            NonFinite::Supine => forms.supine = built,
        }
    }

    forms
}

fn build_finite_mood(stems: &Stems, moods: &MoodRules, mood: Mood) -> Option<Vec<(String, FiniteForms)>> {
    let tenses = moods.finite(mood)?;

    Some(
        tenses
            .iter()
            .map(|(label, endings)| {
                log::trace!("{} {}", mood.label(), label);
                (label.clone(), build_finite_tense(stems, endings))
            })
            .collect(),
    )
}

fn build_finite_tense(stems: &Stems, endings: &TenseEndings) -> FiniteForms {
    let stem = stems.get(endings.stem.unwrap_or_default());
    let inflect = |number: Number| -> Vec<String> {
        endings.endings(number).iter().map(|ending| attach(stem, ending)).collect()
    };

    FiniteForms { sg: inflect(Number::Singular), pl: inflect(Number::Plural) }
}

fn build_imperative(stems: &Stems, label: &str, tense: &ImperativeTense) -> Vec<(Person, ImperativeForms)> {
    log::trace!("imperative {}", label);
    let stem = stems.get(tense.stem.unwrap_or_default());

    tense
        .persons
        .iter()
        .map(|(person, endings)| {
            let forms = ImperativeForms {
                sg: endings.ending(Number::Singular).map(|e| attach(stem, e)),
                pl: endings.ending(Number::Plural).map(|e| attach(stem, e)),
            };
            (*person, forms)
        })
        .collect()
}

fn build_category(stems: &Stems, entries: &[(String, CategoryEnding)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(label, ending)| (label.clone(), attach(stems.get(ending.stem()), ending.ending())))
        .collect()
}
