pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, OutputConfig, SearchConfig};
pub use error::{ExtFindError, Result, UserFriendlyError};

// Core functionality re-exports
pub use report::ResultLog;
pub use scanner::{
    DirectoryScanner, ExtensionSet, FoundFile, NormalizedExtension, OneOrMany, ScanEvent,
    ScanStatistics, SearchRequest,
};
pub use ui::{OutputFormatter, OutputMode, ProgressAwareOutput, ProgressManager};

use std::path::{Path, PathBuf};
use std::time::Instant;

/// Main library interface: runs searches and reports them on the console.
pub struct ExtFind {
    config: Config,
    output_formatter: OutputFormatter,
    show_progress: bool,
}

impl ExtFind {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);

        Self {
            config,
            output_formatter,
            show_progress: !quiet && output_mode == OutputMode::Human,
        }
    }

    /// Create an ExtFind instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbosity_level(),
            cli_args.quiet,
        ))
    }

    /// Run the search described by the loaded configuration
    pub fn run(&self) -> Vec<FoundFile> {
        self.run_search(&self.config.search_request())
    }

    /// Walk every root, echo matches as they are found and optionally save them.
    ///
    /// Missing roots, unreadable subdirectories and a failed log write are
    /// reported on the console; the matches found are always returned.
    pub fn run_search(&self, request: &SearchRequest) -> Vec<FoundFile> {
        let start_time = Instant::now();
        let extensions = request.extension_set();

        self.output_formatter.print_banner(&extensions);

        // A finished spinner cannot be restarted, so every search gets its own
        let progress_manager = ProgressManager::new(self.show_progress);
        let scanner = DirectoryScanner::new(&extensions);
        let output = ProgressAwareOutput::new(&self.output_formatter, Some(&progress_manager));
        let mut statistics = ScanStatistics::default();
        let mut found_count = 0;

        let files = scanner.scan_roots(&request.roots, |event| {
            statistics.record(&event);
            match event {
                ScanEvent::RootStarted(root) => {
                    progress_manager.start_root(root);
                    output.debug(&format!("Scanning {}", root.display()));
                }
                ScanEvent::MissingRoot(root) => output.skipped(&ExtFindError::MissingRoot {
                    path: root.to_path_buf(),
                }),
                ScanEvent::NotADirectory(root) => output.skipped(&ExtFindError::NotADirectory {
                    path: root.to_path_buf(),
                }),
                ScanEvent::FileFound(file) => {
                    found_count += 1;
                    progress_manager.set_found(found_count);
                    output.found(file);
                }
                ScanEvent::WalkError(error) => output.skipped(error),
            }
        });

        progress_manager.clear();
        statistics.finish(&files, start_time.elapsed());

        self.output_formatter.print_summary(files.len());
        self.output_formatter.print_statistics(&statistics);
        self.output_formatter.info(&format!(
            "Searched {} root(s) in {}",
            statistics.roots_searched,
            ui::progress::format_duration(statistics.elapsed)
        ));

        if let Some(ref log_path) = request.log_path {
            if !files.is_empty() {
                match save_results(log_path, &extensions, &files) {
                    Ok(()) => self
                        .output_formatter
                        .success(&format!("List saved to: {}", log_path.display())),
                    Err(e) => self.output_formatter.error(&e.user_message()),
                }
            }
        }

        files
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config)?;
        Ok(())
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }
}

/// Write `files` to `log_path` under a header naming `extensions`.
pub fn save_results(log_path: &Path, extensions: &ExtensionSet, files: &[FoundFile]) -> Result<()> {
    ResultLog::new(log_path, extensions).write(files)
}

/// Search `roots` for files ending in any of `extensions` with default console output.
///
/// Both `roots` and `extensions` accept a single value or a list.
pub fn scan<R, E, P>(roots: R, extensions: E, log_path: Option<P>) -> Vec<FoundFile>
where
    R: Into<OneOrMany<PathBuf>>,
    E: Into<OneOrMany<String>>,
    P: Into<PathBuf>,
{
    let request = SearchRequest::new(roots, extensions).with_log_path(log_path);
    ExtFind::new(Config::default(), OutputMode::Human, 0, false).run_search(&request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn quiet_finder() -> ExtFind {
        ExtFind::new(Config::default(), OutputMode::Plain, 0, true)
    }

    fn sample_tree() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.cpp"), "").unwrap();
        fs::write(root.join("b.CPP"), "").unwrap();
        fs::write(root.join("c.txt"), "").unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub").join("d.cpp"), "").unwrap();
        temp_dir
    }

    fn paths(files: &[FoundFile]) -> Vec<PathBuf> {
        files.iter().map(|f| f.path.clone()).collect()
    }

    #[test]
    fn test_end_to_end_example() {
        let tree = sample_tree();
        let request = SearchRequest::new(tree.path(), "cpp");
        let files = quiet_finder().run_search(&request);

        assert_eq!(files.len(), 3);
        let mut names: Vec<_> = files
            .iter()
            .map(|f| f.path.strip_prefix(tree.path()).unwrap().to_path_buf())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.cpp"),
                PathBuf::from("b.CPP"),
                PathBuf::from("sub").join("d.cpp")
            ]
        );
    }

    #[test]
    fn test_scalar_and_sequence_inputs_match() {
        let tree = sample_tree();
        let root = tree.path().to_path_buf();
        let finder = quiet_finder();

        let scalar = finder.run_search(&SearchRequest::new(root.clone(), "CPP"));
        let sequence = finder.run_search(&SearchRequest::new(vec![root], vec![".cpp"]));

        let mut scalar = paths(&scalar);
        let mut sequence = paths(&sequence);
        scalar.sort();
        sequence.sort();
        assert_eq!(scalar, sequence);
    }

    #[test]
    fn test_missing_root_is_not_fatal() {
        let tree = sample_tree();
        let missing = tree.path().join("does-not-exist");
        let request = SearchRequest::new(vec![tree.path().to_path_buf(), missing], "cpp");

        let files = quiet_finder().run_search(&request);
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|f| f.path.starts_with(tree.path())));
    }

    #[test]
    fn test_empty_inputs_yield_empty_results() {
        let tree = sample_tree();
        let finder = quiet_finder();

        let no_extensions = SearchRequest::new(tree.path(), Vec::<String>::new());
        assert!(finder.run_search(&no_extensions).is_empty());

        let no_roots = SearchRequest::new(Vec::<PathBuf>::new(), "cpp");
        assert!(finder.run_search(&no_roots).is_empty());
    }

    #[test]
    fn test_log_file_matches_returned_results() {
        let tree = sample_tree();
        let out_dir = TempDir::new().unwrap();
        let log_path = out_dir.path().join("found.txt");
        let request = SearchRequest::new(tree.path(), "cpp").with_log_path(Some(&log_path));

        let files = quiet_finder().run_search(&request);

        let content = fs::read_to_string(&log_path).unwrap();
        assert_eq!(content.lines().count(), files.len() + 1);
        assert_eq!(content.lines().next(), Some(r#"Search results for [".cpp"]:"#));

        let (_, logged) = ResultLog::read(&log_path).unwrap();
        assert_eq!(logged, paths(&files));
    }

    #[test]
    fn test_no_log_written_for_empty_results() {
        let tree = sample_tree();
        let out_dir = TempDir::new().unwrap();
        let log_path = out_dir.path().join("found.txt");
        let request = SearchRequest::new(tree.path(), "rs").with_log_path(Some(&log_path));

        let files = quiet_finder().run_search(&request);
        assert!(files.is_empty());
        assert!(!log_path.exists());
    }

    #[test]
    fn test_log_failure_keeps_results() {
        let tree = sample_tree();
        let log_path = tree.path().join("missing-dir").join("found.txt");
        let request = SearchRequest::new(tree.path(), "cpp").with_log_path(Some(&log_path));

        let files = quiet_finder().run_search(&request);
        assert_eq!(files.len(), 3);
        assert!(!log_path.exists());
    }

    #[test]
    fn test_repeated_searches_with_spinner() {
        let tree = sample_tree();
        let finder = ExtFind::new(Config::default(), OutputMode::Human, 0, false);
        let request = SearchRequest::new(tree.path(), "cpp");

        let first = finder.run_search(&request);
        let second = finder.run_search(&request);

        assert_eq!(first.len(), 3);
        assert_eq!(paths(&first), paths(&second));
    }

    #[test]
    fn test_run_uses_configured_request() {
        let tree = sample_tree();
        let mut config = Config::default();
        config.search.roots = OneOrMany::One(tree.path().to_path_buf());
        config.search.extensions = OneOrMany::One("txt".to_string());

        let files = ExtFind::new(config, OutputMode::Plain, 0, true).run();
        assert_eq!(paths(&files), vec![tree.path().join("c.txt")]);
    }

    #[test]
    fn test_scan_convenience_function() {
        let tree = sample_tree();
        let files = scan(tree.path(), ["cpp", "txt"], None::<PathBuf>);
        assert_eq!(files.len(), 4);
    }

    #[test]
    fn test_sample_config_generation() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("sample.toml");

        ExtFind::generate_sample_config(&config_path).unwrap();

        let loaded = Config::load_from_file(&config_path).unwrap();
        assert_eq!(loaded.search_request(), Config::default().search_request());
    }
}
