use alloc::string::String;

use verbum_protocol::{PrincipalParts, ReferenceEndings, Stems};

/// Removes `ending` from the end of `part`. A part that does not end with
/// `ending` comes back unchanged.
pub fn strip_reference<'a>(part: &'a str, ending: &str) -> &'a str {
    part.strip_suffix(ending).unwrap_or(part)
}

/// Derives the working stems from the principal parts and the active voice's
/// reference endings.
pub fn extract_stems(parts: &PrincipalParts, endings: &ReferenceEndings) -> Stems {
    let present = match endings.present_indicative.as_deref() {
        Some(ending) => strip_reference(parts.present_indicative(), ending),
        None => parts.present_indicative(),
    };

    let stems = Stems {
        present: String::from(present),
        infinitive: String::from(strip_reference(parts.present_infinitive(), &endings.present_infinitive)),
        perfect: String::from(strip_reference(parts.perfect_indicative(), &endings.perfect_indicative)),
        perfect_passive_participle: String::from(strip_reference(
            parts.perfect_passive_participle(),
            &endings.perfect_passive_participle,
        )),
    };

    log::debug!(
        "stems: present={:?} infinitive={:?} perfect={:?} ppp={:?}",
        stems.present,
        stems.infinitive,
        stems.perfect,
        stems.perfect_passive_participle
    );

    stems
}
