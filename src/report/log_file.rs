use crate::error::{ExtFindError, Result};
use crate::scanner::{ExtensionSet, FoundFile};
use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const HEADER_PREFIX: &str = "Search results for ";

/// Flat text list of matched paths: one header line, then one path per line.
pub struct ResultLog {
    path: PathBuf,
    header: String,
}

impl ResultLog {
    pub fn new<P: Into<PathBuf>>(path: P, extensions: &ExtensionSet) -> Self {
        Self {
            path: path.into(),
            header: format!("{}{}:", HEADER_PREFIX, extensions),
        }
    }

    /// Creates or truncates the log and writes every path in order.
    pub fn write(&self, files: &[FoundFile]) -> Result<()> {
        self.write_lines(files).map_err(|source| ExtFindError::LogWrite {
            path: self.path.clone(),
            source,
        })
    }

    fn write_lines(&self, files: &[FoundFile]) -> std::io::Result<()> {
        let mut writer = BufWriter::new(fs::File::create(&self.path)?);

        writeln!(writer, "{}", self.header)?;
        for file in files {
            writeln!(writer, "{}", file.path.display())?;
        }

        // Dropping a BufWriter swallows flush errors
        writer.flush()
    }

    /// Reads a log back as its header line and the listed paths.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<(String, Vec<PathBuf>)> {
        let reader = BufReader::new(fs::File::open(path.as_ref())?);
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => String::new(),
        };

        if !header.starts_with(HEADER_PREFIX) {
            return Err(ExtFindError::Config {
                message: format!("{} is not a search result log", path.as_ref().display()),
            });
        }

        let mut paths = Vec::new();
        for line in lines {
            paths.push(PathBuf::from(line?));
        }

        Ok((header, paths))
    }
}
