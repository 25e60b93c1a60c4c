use alloc::string::String;
use alloc::vec::Vec;

use verbum_protocol::{InflectionTree, Meta, VerbFlags};

/// Records glosses and verb flags on the tree root.
///
/// `translation` is `None` when no gloss list was supplied; an empty list is
/// still recorded.
pub fn attach_metadata(mut tree: InflectionTree, translation: Option<Vec<String>>, flags: VerbFlags) -> InflectionTree {
    tree.meta = Meta {
        translation,
        is_deponent: flags.contains(VerbFlags::DEPONENT),
        is_defective: flags.contains(VerbFlags::DEFECTIVE),
    };
    tree
}
