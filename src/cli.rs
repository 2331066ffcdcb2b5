use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "extfind")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "List files by extension across one or more directory trees")]
#[command(
    long_about = "extfind walks each root directory recursively and prints every file whose \
                  name ends with one of the given extensions (case-insensitive). The list can \
                  optionally be saved to a text file."
)]
#[command(after_help = "EXAMPLES:\n  \
    extfind src -e cpp\n  \
    extfind src include -e cpp,h,hpp --output found.txt\n  \
    extfind --config my-search.toml\n  \
    extfind --generate-config")]
pub struct Cli {
    /// Directories to search (defaults to the configured roots)
    pub roots: Vec<PathBuf>,

    /// Extensions to match, with or without the leading dot
    #[arg(short, long = "ext", value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Save the list of found files to this path
    #[arg(short, long, help = "Write the results to a text file")]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for console messages
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (print matches only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (show what would be searched without walking any directory)
    #[arg(long, help = "Show the search that would run without running it")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        let roots = if self.roots.is_empty() {
            None
        } else {
            Some(self.roots.clone())
        };

        CliOverrides::new()
            .with_roots(roots)
            .with_extensions(self.extensions.clone())
            .with_log_file(self.output.clone())
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
