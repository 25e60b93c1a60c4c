use std::path::PathBuf;

use clap::Parser;
use verbum_protocol::{ConjugationId, PrincipalParts};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Generates the full paradigm of a Latin verb from its principal parts")]
pub struct Cli {
    /// Principal parts, comma separated: "amo, amare, amavi, amatus"
    #[arg(long, value_name = "PARTS", value_parser = verbum_parser::parse_principal_parts)]
    pub verb: PrincipalParts,

    /// Conjugation class whose rule table is used
    #[arg(short, long, value_name = "NUM", value_parser = verbum_parser::parse_conjugation)]
    pub conjugation: ConjugationId,

    /// Conjugate as deponent (passive forms, active meaning)
    #[arg(long)]
    pub deponent: bool,

    /// Drop the present, imperfect and future tenses
    #[arg(long)]
    pub defective: bool,

    /// Comma-separated glosses recorded in the output metadata
    #[arg(short, long, value_name = "GLOSSES")]
    pub translation: Option<String>,

    /// `json` (default), `html`, or the path of a program that reads the JSON tree on stdin
    #[arg(short, long, value_name = "PROCESSOR")]
    pub processor: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Directory holding conjugation-<n>.json / .rkyv rule tables; built-in tables otherwise
    #[arg(long, value_name = "DIR", env = "INFLECTOR_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Single-line JSON output
    #[arg(long)]
    pub compact: bool,
}
