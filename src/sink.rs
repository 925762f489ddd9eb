//! Destinations for the generated document.

use crate::{DocError, DocResult};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Receives the document one line at a time. A "line" may itself contain
/// newlines; the sink terminates each write with one more.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> DocResult<()>;

    fn blank(&mut self) -> DocResult<()> {
        self.write_line("")
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn write_line(&mut self, line: &str) -> DocResult<()> {
        (**self).write_line(line)
    }
}

/// Collects the document in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The document text exactly as a file sink would have written it.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

impl LineSink for MemorySink {
    fn write_line(&mut self, line: &str) -> DocResult<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

/// Writes the document to disk.
///
/// Output goes to a hidden staging file beside the destination and is only
/// renamed into place by [`FileSink::finish`]. A run that fails part-way
/// leaves the staging file behind and never a truncated destination.
#[derive(Debug)]
pub struct FileSink {
    destination: PathBuf,
    staging: PathBuf,
    writer: BufWriter<File>,
}

impl FileSink {
    pub fn create(destination: &Path) -> DocResult<Self> {
        let file_name = destination
            .file_name()
            .ok_or_else(|| DocError::Sink {
                path: destination.display().to_string(),
                message: "destination has no file name".to_string(),
            })?
            .to_string_lossy();
        let staging = destination.with_file_name(format!(".{}.partial", file_name));

        let file = File::create(&staging).map_err(|e| sink_error(&staging, e))?;
        tracing::debug!("Staging document at {:?}", staging);
        Ok(Self {
            destination: destination.to_path_buf(),
            staging,
            writer: BufWriter::new(file),
        })
    }

    pub fn staging_path(&self) -> &Path {
        &self.staging
    }

    /// Flush the staging file and move it onto the destination.
    pub fn finish(self) -> DocResult<PathBuf> {
        let FileSink {
            destination,
            staging,
            writer,
        } = self;
        let file = writer
            .into_inner()
            .map_err(|e| sink_error(&staging, e.into_error()))?;
        file.sync_all().map_err(|e| sink_error(&staging, e))?;
        drop(file);

        fs::rename(&staging, &destination).map_err(|e| sink_error(&destination, e))?;
        Ok(destination)
    }
}

impl LineSink for FileSink {
    fn write_line(&mut self, line: &str) -> DocResult<()> {
        writeln!(self.writer, "{}", line).map_err(|e| sink_error(&self.staging, e))
    }
}

fn sink_error(path: &Path, error: std::io::Error) -> DocError {
    DocError::Sink {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}
