use crate::error::ExtFindError;
use crate::scanner::extension::ExtensionSet;
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundFile {
    pub path: PathBuf,
    pub extension: String,
}

impl FoundFile {
    pub fn new(path: PathBuf, extension: String) -> Self {
        Self { path, extension }
    }
}

/// Notifications emitted while roots are walked, in the order they happen.
#[derive(Debug)]
pub enum ScanEvent<'a> {
    RootStarted(&'a Path),
    MissingRoot(&'a Path),
    NotADirectory(&'a Path),
    FileFound(&'a FoundFile),
    WalkError(&'a ExtFindError),
}

pub struct DirectoryScanner {
    extensions: ExtensionSet,
}

impl DirectoryScanner {
    pub fn new(extensions: &ExtensionSet) -> Self {
        Self {
            extensions: extensions.clone(),
        }
    }

    /// Walks every root in order and returns all matches.
    ///
    /// Missing roots, non-directory roots and unreadable entries are reported
    /// through `on_event` and skipped; none of them stop the scan.
    pub fn scan_roots<P, F>(&self, roots: &[P], mut on_event: F) -> Vec<FoundFile>
    where
        P: AsRef<Path>,
        F: FnMut(ScanEvent<'_>),
    {
        let mut found = Vec::new();
        for root in roots {
            self.scan_root(root.as_ref(), &mut found, &mut on_event);
        }
        found
    }

    fn scan_root<F>(&self, root: &Path, found: &mut Vec<FoundFile>, on_event: &mut F)
    where
        F: FnMut(ScanEvent<'_>),
    {
        if !root.exists() {
            debug!("root {} does not exist", root.display());
            on_event(ScanEvent::MissingRoot(root));
            return;
        }

        if !root.is_dir() {
            debug!("root {} is not a directory", root.display());
            on_event(ScanEvent::NotADirectory(root));
            return;
        }

        on_event(ScanEvent::RootStarted(root));

        if self.extensions.is_empty() {
            return;
        }

        let walker = WalkDir::new(root).follow_links(false).into_iter();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    // walkdir skips the unreadable directory and keeps going
                    let error = ExtFindError::from(err);
                    debug!("{}", error);
                    on_event(ScanEvent::WalkError(&error));
                    continue;
                }
            };

            if !is_regular_file(&entry) {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if let Some(ext) = self.extensions.matching_extension(&file_name) {
                let file = FoundFile::new(entry.path().to_path_buf(), ext.to_string());
                on_event(ScanEvent::FileFound(&file));
                found.push(file);
            }
        }
    }
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    // Symlinked files count, symlinked directories are never descended.
    file_type.is_symlink() && entry.path().is_file()
}

#[derive(Debug, Default, Clone)]
pub struct ScanStatistics {
    pub roots_searched: usize,
    pub missing_roots: usize,
    pub walk_errors: usize,
    pub total_files: usize,
    pub files_by_extension: HashMap<String, usize>,
    pub elapsed: Duration,
}

impl ScanStatistics {
    pub fn record(&mut self, event: &ScanEvent<'_>) {
        match event {
            ScanEvent::RootStarted(_) => self.roots_searched += 1,
            ScanEvent::MissingRoot(_) | ScanEvent::NotADirectory(_) => self.missing_roots += 1,
            ScanEvent::WalkError(_) => self.walk_errors += 1,
            ScanEvent::FileFound(_) => {}
        }
    }

    /// Fills in the totals once the walk is over.
    pub fn finish(&mut self, files: &[FoundFile], elapsed: Duration) {
        self.total_files = files.len();
        self.files_by_extension.clear();
        for file in files {
            *self
                .files_by_extension
                .entry(file.extension.clone())
                .or_insert(0) += 1;
        }
        self.elapsed = elapsed;
    }

    pub fn display_summary(&self) -> String {
        let mut summary = format!(
            "Scan Results:\n  Roots searched: {}\n  Total files: {}\n",
            self.roots_searched, self.total_files
        );

        if self.missing_roots > 0 {
            summary.push_str(&format!("  Roots skipped: {}\n", self.missing_roots));
        }

        if self.walk_errors > 0 {
            summary.push_str(&format!("  Unreadable entries: {}\n", self.walk_errors));
        }

        if !self.files_by_extension.is_empty() {
            summary.push_str("  Files by type:\n");
            let mut extensions: Vec<_> = self.files_by_extension.iter().collect();
            extensions.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

            for (ext, count) in extensions {
                summary.push_str(&format!("    {}: {} files\n", ext, count));
            }
        }

        summary.push_str(&format!("  Time taken: {}ms\n", self.elapsed.as_millis()));
        summary
    }
}
