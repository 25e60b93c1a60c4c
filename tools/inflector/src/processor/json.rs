use verbum_protocol::InflectionTree;

use super::{ProcessError, Processor};

/// Structured dump of the tree, for redirection or programmatic use.
#[derive(Debug, Clone, Copy)]
pub struct JsonProcessor {
    pub pretty: bool,
}

impl Default for JsonProcessor {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Processor for JsonProcessor {
    fn process(&self, tree: &InflectionTree) -> Result<String, ProcessError> {
        let mut out = if self.pretty { serde_json::to_string_pretty(tree)? } else { serde_json::to_string(tree)? };
        out.push('\n');
        Ok(out)
    }
}
