use anyhow::Context;
use clap::Parser;
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::AlignedVec;
use std::fs;
use std::path::{Path, PathBuf};
use verbum_protocol::{ConjugationRules, Voice};

/// Archive scratch space; a full rule table is a few kilobytes.
const SCRATCH_SPACE: usize = 4096;

#[derive(Parser)]
#[command(author, version, about = "Compiles JSON conjugation tables to rkyv binaries")]
struct Cli {
    /// Rule tables to compile, e.g. data/conjugation-1.json
    #[arg(required = true, value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Directory receiving one `<name>.rkyv` per input
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    fs::create_dir_all(&cli.out_dir).with_context(|| format!("cannot create {}", cli.out_dir.display()))?;

    for input in &cli.inputs {
        let output = output_path(input, &cli.out_dir)?;
        println!("📖 Reading JSON from {:?}...", input);
        let size = compile_file(input, &output)?;
        println!("✅ {} bytes written to {:?}", size, output);
    }
    Ok(())
}

fn output_path(input: &Path, out_dir: &Path) -> anyhow::Result<PathBuf> {
    let stem = input.file_stem().with_context(|| format!("{} has no file name", input.display()))?;
    Ok(out_dir.join(format!("{}.rkyv", stem.to_string_lossy())))
}

fn compile_file(input: &Path, output: &Path) -> anyhow::Result<usize> {
    let source = fs::read_to_string(input).with_context(|| format!("cannot read {}", input.display()))?;
    let rules: ConjugationRules =
        serde_json::from_str(&source).with_context(|| format!("{} is not a valid rule table", input.display()))?;

    let bytes = compile(&rules).with_context(|| format!("cannot compile {}", input.display()))?;
    fs::write(output, bytes.as_slice()).with_context(|| format!("cannot write {}", output.display()))?;
    Ok(bytes.len())
}

/// Archives a rule table and checks the result validates before handing it back.
fn compile(rules: &ConjugationRules) -> anyhow::Result<AlignedVec> {
    if !rules.has_voice(Voice::Active) {
        anyhow::bail!("table has no active voice");
    }
    let voices: Vec<&str> = rules.voices.iter().map(|(voice, _)| voice.label()).collect();
    println!("⚙️  Compiling voices [{}]...", voices.join(", "));

    let mut serializer = AllocSerializer::<SCRATCH_SPACE>::default();
    serializer
        .serialize_value(rules)
        .map_err(|e| anyhow::anyhow!("rkyv serialization failed: {:?}", e))?;
    let bytes = serializer.into_serializer().into_inner();

    rkyv::check_archived_root::<ConjugationRules>(&bytes)
        .map_err(|e| anyhow::anyhow!("archive failed validation: {}", e))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rkyv::Deserialize;

    const TABLE: &str = include_str!("../../../data/conjugation-1.json");

    #[test]
    fn test_compile_round_trip() {
        let rules: ConjugationRules = serde_json::from_str(TABLE).unwrap();
        let bytes = compile(&rules).unwrap();

        let archived = rkyv::check_archived_root::<ConjugationRules>(&bytes).unwrap();
        let back: ConjugationRules = archived.deserialize(&mut rkyv::Infallible).unwrap();
        assert_eq!(back, rules);
    }

    #[test]
    fn test_rejects_table_without_active_voice() {
        let rules: ConjugationRules = serde_json::from_str(r#"{"voices": {}}"#).unwrap();
        assert!(compile(&rules).is_err());
    }

    #[test]
    fn test_compile_file_names_output_after_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("conjugation-1.json");
        fs::write(&input, TABLE).unwrap();

        let output = output_path(&input, dir.path()).unwrap();
        assert_eq!(output.file_name().unwrap(), "conjugation-1.rkyv");

        let size = compile_file(&input, &output).unwrap();
        assert_eq!(fs::metadata(&output).unwrap().len() as usize, size);
    }

    #[test]
    fn test_output_path_keeps_dotted_names() {
        let out_dir = Path::new("out");
        let output = output_path(Path::new("tables/conjugation-1.v2.json"), out_dir).unwrap();
        assert_eq!(output, out_dir.join("conjugation-1.v2.rkyv"));
    }

    #[test]
    fn test_compile_file_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.json");
        fs::write(&input, "{ not json").unwrap();

        let err = compile_file(&input, &dir.path().join("broken.rkyv")).unwrap_err();
        assert!(format!("{:#}", err).contains("is not a valid rule table"));
    }
}
