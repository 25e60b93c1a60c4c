//! Locates and loads the rule table of a conjugation class.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rkyv::{AlignedVec, Deserialize};
use thiserror::Error;
use verbum_protocol::{ConjugationId, ConjugationRules};

const BUILTIN: [(u32, &str); 4] = [
    (1, include_str!("../../../data/conjugation-1.json")),
    (2, include_str!("../../../data/conjugation-2.json")),
    (3, include_str!("../../../data/conjugation-3.json")),
    (4, include_str!("../../../data/conjugation-4.json")),
];

#[derive(Debug, Error)]
pub enum TableError {
    #[error("no rule table for conjugation {conjugation} in {location}")]
    Missing { conjugation: ConjugationId, location: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("rule table {location} is not valid: {source}")]
    Json {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("rule table archive {} failed validation: {message}", .path.display())]
    Archive { path: PathBuf, message: String },
}

/// Where rule tables come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TableSource {
    /// Tables for conjugations 1-4 compiled into the binary.
    #[default]
    Builtin,
    /// A directory of `conjugation-<n>.rkyv` / `conjugation-<n>.json` files.
    Directory(PathBuf),
}

impl TableSource {
    pub fn load(&self, conjugation: ConjugationId) -> Result<ConjugationRules, TableError> {
        match self {
            TableSource::Builtin => load_builtin(conjugation),
            TableSource::Directory(dir) => load_from_dir(dir, conjugation),
        }
    }
}

fn load_builtin(conjugation: ConjugationId) -> Result<ConjugationRules, TableError> {
    let (_, text) = BUILTIN
        .iter()
        .find(|(n, _)| *n == u32::from(conjugation))
        .ok_or_else(|| TableError::Missing { conjugation, location: "built-in tables".to_string() })?;

    log::debug!("using built-in table for conjugation {}", conjugation);
    serde_json::from_str(text).map_err(|source| TableError::Json {
        location: format!("built-in conjugation-{}", conjugation),
        source,
    })
}

fn load_from_dir(dir: &Path, conjugation: ConjugationId) -> Result<ConjugationRules, TableError> {
    let archive = dir.join(format!("conjugation-{}.rkyv", conjugation));
    if archive.is_file() {
        return load_archive(&archive);
    }

    let json = dir.join(format!("conjugation-{}.json", conjugation));
    if json.is_file() {
        return load_json(&json);
    }

    Err(TableError::Missing { conjugation, location: dir.display().to_string() })
}

pub fn load_json(path: &Path) -> Result<ConjugationRules, TableError> {
    log::debug!("reading rule table {}", path.display());
    let text = fs::read_to_string(path).map_err(|source| TableError::Io { path: path.to_path_buf(), source })?;

    serde_json::from_str(&text).map_err(|source| TableError::Json { location: path.display().to_string(), source })
}

/// Loads a table produced by `table-compiler`. The archive is validated before use.
pub fn load_archive(path: &Path) -> Result<ConjugationRules, TableError> {
    log::debug!("reading compiled rule table {}", path.display());
    let bytes = fs::read(path).map_err(|source| TableError::Io { path: path.to_path_buf(), source })?;

    // rkyv needs the archive root aligned; a plain Vec<u8> gives no such guarantee
    let mut aligned = AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(&bytes);

    let archived = rkyv::check_archived_root::<ConjugationRules>(&aligned).map_err(|e| TableError::Archive {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    archived.deserialize(&mut rkyv::Infallible).map_err(|_| TableError::Archive {
        path: path.to_path_buf(),
        message: "could not deserialize archived table".to_string(),
    })
}
