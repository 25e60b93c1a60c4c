use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use verbum_protocol::InflectionTree;

use super::{ProcessError, Processor};

/// Runs an external program with the tree as JSON on stdin and returns
/// whatever it prints on stdout.
#[derive(Debug, Clone)]
pub struct CommandProcessor {
    program: PathBuf,
}

impl CommandProcessor {
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self { program: program.as_ref().to_path_buf() }
    }

    fn io_error(&self, source: io::Error) -> ProcessError {
        ProcessError::Io { program: self.program.clone(), source }
    }
}

impl Processor for CommandProcessor {
    fn process(&self, tree: &InflectionTree) -> Result<String, ProcessError> {
        let payload = serde_json::to_vec(tree)?;
        log::info!("handing {} bytes of inflections to {}", payload.len(), self.program.display());

        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ProcessError::Spawn { program: self.program.clone(), source })?;

        // Fed from its own thread while stdout is drained below; stdin closes when the writer returns
        let stdin = child.stdin.take();
        let writer = thread::spawn(move || match stdin {
            Some(mut stdin) => stdin.write_all(&payload),
            None => Ok(()),
        });

        let output = child.wait_with_output().map_err(|e| self.io_error(e))?;
        let written = writer
            .join()
            .unwrap_or_else(|_| Err(io::Error::new(io::ErrorKind::Other, "stdin writer panicked")));

        if !output.status.success() {
            return Err(ProcessError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        match written {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                log::debug!("{} exited without reading all of its input", self.program.display());
            }
            Err(e) => return Err(self.io_error(e)),
            Ok(()) => {}
        }

        String::from_utf8(output.stdout).map_err(|_| ProcessError::Encoding { program: self.program.clone() })
    }
}
