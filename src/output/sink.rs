use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::foundation::error::{FormError, FormResult};

/// Destination for a finished document.
pub trait DocumentSink {
    /// Persist the complete document. Called at most once per assembly.
    fn write_document(&mut self, bytes: &[u8]) -> FormResult<()>;
}

/// Writes the document to a file, replacing any existing file at that path.
///
/// The handle is flushed and synced before returning and closed on every path. If writing
/// fails part-way, the file contents are unspecified and should be discarded.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSink for FileSink {
    fn write_document(&mut self, bytes: &[u8]) -> FormResult<()> {
        let path = &self.path;
        let io_err = |what: &str, e: std::io::Error| {
            FormError::render(format!("{what} '{}': {e}", path.display()))
        };

        let f = File::create(path).map_err(|e| io_err("create output", e))?;
        let mut w = BufWriter::new(f);
        w.write_all(bytes).map_err(|e| io_err("write output", e))?;
        let f = w
            .into_inner()
            .map_err(|e| io_err("flush output", e.into_error()))?;
        f.sync_all().map_err(|e| io_err("sync output", e))?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "document written");
        Ok(())
    }
}

/// In-memory sink for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySink {
    bytes: Option<Vec<u8>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The captured document, if one was written.
    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }
}

impl DocumentSink for InMemorySink {
    fn write_document(&mut self, bytes: &[u8]) -> FormResult<()> {
        self.bytes = Some(bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/sink.rs"]
mod tests;
