//! Output processors: turn a finished [`InflectionTree`] into the text that
//! is written out.

mod command;
mod html;
mod json;

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;
use verbum_protocol::InflectionTree;

pub use command::CommandProcessor;
pub use html::HtmlProcessor;
pub use json::JsonProcessor;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to serialize inflections: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to run processor {}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("lost the pipe to processor {}", .program.display())]
    Io {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("processor {} exited with {status}: {stderr}", .program.display())]
    Failed { program: PathBuf, status: ExitStatus, stderr: String },

    #[error("processor {} produced output that is not UTF-8", .program.display())]
    Encoding { program: PathBuf },

    #[error("failed to render HTML")]
    Render,
}

/// Receives the complete tree, `meta` included, and renders the final output.
pub trait Processor {
    fn process(&self, tree: &InflectionTree) -> Result<String, ProcessError>;
}

/// Picks a processor from its command-line spelling: `json`, `html`, or a
/// path to an executable. No spelling means JSON.
pub fn select(name: Option<&str>, compact: bool, title: &str) -> Box<dyn Processor> {
    match name {
        None | Some("json") => Box::new(JsonProcessor { pretty: !compact }),
        Some("html") => Box::new(HtmlProcessor::with_title(title)),
        Some(path) => Box::new(CommandProcessor::new(path)),
    }
}
