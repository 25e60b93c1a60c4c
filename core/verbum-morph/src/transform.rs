//! Whole-tree rewrites applied after the paradigm is built.

use core::mem;

use verbum_protocol::{InflectionTree, Tense, Voice};

use crate::MorphError;

fn is_suppressed(label: &str) -> bool {
    Tense::from_label(label).is_some_and(Tense::is_present_system)
}

/// Drops the present, imperfect and future tenses from every mood of every
/// voice. All other tenses and the non-finite categories are left as they are.
pub fn suppress_defective_tenses(mut tree: InflectionTree) -> InflectionTree {
    for (voice, forms) in tree.voices.iter_mut() {
        log::debug!("suppressing present-system tenses in {} voice", voice.label());

        for tenses in [&mut forms.indicative, &mut forms.subjunctive].into_iter().flatten() {
            tenses.retain(|(label, _)| !is_suppressed(label));
        }
        if let Some(tenses) = forms.imperative.as_mut() {
            tenses.retain(|(label, _)| !is_suppressed(label));
        }
    }
    tree
}

/// Exchanges the active and passive subtrees. Each voice keeps its slot, so
/// `active` is still emitted where it was; applying it twice restores the
/// input.
///
/// Fails if either voice is missing.
pub fn swap_voices(mut tree: InflectionTree) -> Result<InflectionTree, MorphError> {
    let slot = |tree: &InflectionTree, voice: Voice| tree.voices.iter().position(|(v, _)| *v == voice);
    let passive = slot(&tree, Voice::Passive).ok_or(MorphError::MissingPassiveVoice)?;
    let active = slot(&tree, Voice::Active).ok_or(MorphError::MissingActiveVoice)?;

    let forms = mem::take(&mut tree.voices[active].1);
    tree.voices[active].1 = mem::replace(&mut tree.voices[passive].1, forms);
    Ok(tree)
}
