pub mod cli;
pub mod processor;
pub mod tables;

use std::fs;

use anyhow::Context;
use verbum_protocol::{InflectionTree, VerbFlags};

pub use cli::Cli;
use tables::TableSource;

impl Cli {
    pub fn table_source(&self) -> TableSource {
        match &self.data_dir {
            Some(dir) => TableSource::Directory(dir.clone()),
            None => TableSource::Builtin,
        }
    }

    pub fn flags(&self) -> VerbFlags {
        VerbFlags::from_switches(self.deponent, self.defective)
    }
}

/// Loads the rule table and generates the tree described by the arguments.
pub fn conjugate(cli: &Cli) -> anyhow::Result<InflectionTree> {
    let rules = cli
        .table_source()
        .load(cli.conjugation)
        .with_context(|| format!("loading rules for conjugation {}", cli.conjugation))?;

    let translation = cli.translation.as_deref().map(verbum_parser::parse_glosses);
    let tree = verbum_morph::inflect(&cli.verb, &rules, cli.flags(), translation)
        .with_context(|| format!("conjugating {}", cli.verb.as_array().join(", ")))?;

    log::info!("generated {} forms", tree.forms().count());
    Ok(tree)
}

/// Runs the whole pipeline and returns the processed output.
pub fn render(cli: &Cli) -> anyhow::Result<String> {
    let tree = conjugate(cli)?;
    let title = cli.verb.as_array().join(", ");
    let processor = processor::select(cli.processor.as_deref(), cli.compact, &title);

    processor.process(&tree).context("post-processing inflections")
}

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let output = render(cli)?;

    match &cli.out {
        Some(path) => {
            fs::write(path, output).with_context(|| format!("writing {}", path.display()))?;
            log::info!("output written to {}", path.display());
        }
        None => print!("{}", output),
    }
    Ok(())
}
