//! Line ingestion.
//!
//! The device stream is decoded one line at a time. Bytes that are not valid UTF-8 are replaced
//! rather than rejected, trailing whitespace (including `\r`) is dropped, empty lines are
//! skipped, and the device's own `CMD:` echo is suppressed because the dashboard already shows
//! the `> CMD:` echo for the same command.

use crate::classify::markers::DEVICE_COMMAND_ECHO;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open line source {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read from line source: {0}")]
    Read(#[from] io::Error),
}

/// Where lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    Stdin,
    /// A capture file or a character device such as `/dev/ttyACM0`.
    Path(PathBuf),
}

impl SourceSpec {
    pub fn open(&self) -> Result<LineSource<Box<dyn BufRead>>, IngestError> {
        let reader: Box<dyn BufRead> = match self {
            SourceSpec::Stdin => Box::new(io::stdin().lock()),
            SourceSpec::Path(path) => Box::new(open_path(path)?),
        };
        Ok(LineSource::new(reader))
    }

    pub fn describe(&self) -> String {
        match self {
            SourceSpec::Stdin => "stdin".to_string(),
            SourceSpec::Path(path) => path.display().to_string(),
        }
    }
}

fn open_path(path: &Path) -> Result<BufReader<File>, IngestError> {
    let file = File::open(path).map_err(|e| IngestError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(BufReader::new(file))
}

/// Returns the line as the classifier should see it, or `None` when it should be dropped.
pub fn normalize_line(raw: &str) -> Option<&str> {
    let line = raw.trim_end();

    if line.is_empty() || line.starts_with(DEVICE_COMMAND_ECHO) {
        return None;
    }

    Some(line)
}

/// Iterator over normalized lines, in arrival order.
pub struct LineSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = Result<String, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();

            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    let text = String::from_utf8_lossy(&self.buf);
                    if let Some(line) = normalize_line(&text) {
                        return Some(Ok(line.to_string()));
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
