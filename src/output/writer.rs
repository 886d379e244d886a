//! JSON Lines record writer

use crate::error::Result;
use crate::extract::NormalizedRecord;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Destination for normalized records
///
/// Records arrive one at a time in emission order. An error aborts the run.
pub trait RecordSink {
    /// Write a single record
    fn emit(&mut self, record: &NormalizedRecord) -> Result<()>;
}

/// Writes one JSON object per line, flushing after every record
#[derive(Debug)]
pub struct JsonlWriter<W: Write> {
    inner: W,
    written: u64,
}

impl<W: Write> JsonlWriter<W> {
    /// Wrap a writer
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Number of lines written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> RecordSink for JsonlWriter<W> {
    fn emit(&mut self, record: &NormalizedRecord) -> Result<()> {
        // serde_json leaves non-ASCII characters unescaped
        serde_json::to_writer(&mut self.inner, record)?;
        self.inner.write_all(b"\n")?;
        self.inner.flush()?;
        self.written += 1;
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn emit(&mut self, record: &NormalizedRecord) -> Result<()> {
        (**self).emit(record)
    }
}

/// Open the configured output: an append-mode file, or stdout when `None`
pub fn open_output(path: Option<&Path>) -> Result<JsonlWriter<Box<dyn Write + Send>>> {
    let inner: Box<dyn Write + Send> = match path {
        Some(path) => Box::new(OpenOptions::new().create(true).append(true).open(path)?),
        None => Box::new(io::stdout()),
    };
    Ok(JsonlWriter::new(inner))
}
