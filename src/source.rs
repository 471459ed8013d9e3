//! Header-keyed CSV reading
//!
//! Rows are exposed as lookups by column header. A header that is missing
//! from the file, or a cell missing from a short row, reads as `None`.

use csv::{Reader, ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{ImportError, Result};

/// Column header to field position. A repeated header maps to its last
/// occurrence.
#[derive(Debug, Default)]
pub struct HeaderIndex(HashMap<String, usize>);

impl HeaderIndex {
    fn from_record(headers: &StringRecord) -> Self {
        let mut index = HashMap::with_capacity(headers.len());
        for (pos, header) in headers.iter().enumerate() {
            index.insert(header.to_string(), pos);
        }
        Self(index)
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.0.get(column).copied()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }
}

/// A single data row.
#[derive(Debug, Clone)]
pub struct Row {
    headers: Arc<HeaderIndex>,
    record: StringRecord,
}

impl Row {
    /// Raw cell text for `column`, or `None` when the column or cell is absent.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.headers.position(column).and_then(|pos| self.record.get(pos))
    }

    /// 1-based line of this row in the source file, when known.
    pub fn line(&self) -> Option<u64> {
        self.record.position().map(|p| p.line())
    }
}

pub struct CsvSource<R> {
    path: PathBuf,
    reader: Reader<R>,
    headers: Arc<HeaderIndex>,
}

impl CsvSource<File> {
    pub fn open(path: &Path) -> Result<Self> {
        let reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| ImportError::csv(path, e))?;
        Self::with_reader(path, reader)
    }
}

impl<R: Read> CsvSource<R> {
    /// Build a source over any reader; `label` names it in errors.
    pub fn from_reader(label: impl Into<PathBuf>, rdr: R) -> Result<Self> {
        let reader = ReaderBuilder::new().flexible(true).from_reader(rdr);
        Self::with_reader(label, reader)
    }

    fn with_reader(label: impl Into<PathBuf>, mut reader: Reader<R>) -> Result<Self> {
        let path = label.into();
        let headers = reader.headers().map_err(|e| ImportError::csv(&path, e))?;
        let headers = Arc::new(HeaderIndex::from_record(headers));
        Ok(Self { path, reader, headers })
    }

    pub fn headers(&self) -> &HeaderIndex {
        &self.headers
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Iterate data rows. Stops at the first malformed record.
    pub fn rows(&mut self) -> impl Iterator<Item = Result<Row>> + '_ {
        let headers = Arc::clone(&self.headers);
        let path = &self.path;
        self.reader.records().map(move |record| {
            record
                .map(|record| Row { headers: Arc::clone(&headers), record })
                .map_err(|e| ImportError::csv(path, e))
        })
    }
}
