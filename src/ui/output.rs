use crate::error::{ExtFindError, UserFriendlyError};
use crate::scanner::{ExtensionSet, FoundFile, ScanStatistics};
use console::{style, Emoji, Term};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Plain,
}

// Emojis with text fallbacks
static CHECKMARK: Emoji = Emoji("✅ ", "");
static CROSS: Emoji = Emoji("❌ ", "");
static INFO: Emoji = Emoji("ℹ️  ", "");
static WARNING: Emoji = Emoji("⚠️  ", "");

const SEPARATOR_WIDTH: usize = 30;

pub struct OutputFormatter {
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let use_colors = match mode {
            OutputMode::Human => Term::stdout().features().colors_supported() && !quiet,
            OutputMode::Plain => false,
        };

        Self {
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    // Core messaging methods
    pub fn success(&self, message: &str) {
        if self.should_show_message(0) {
            self.print_message(MessageType::Success, message);
        }
    }

    pub fn error(&self, message: &str) {
        self.print_message(MessageType::Error, message);
    }

    pub fn warning(&self, message: &str) {
        if self.should_show_message(0) {
            self.print_message(MessageType::Warning, message);
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(1) {
            self.print_message(MessageType::Info, message);
        }
    }

    pub fn debug(&self, message: &str) {
        if self.should_show_message(2) {
            if self.use_colors {
                println!("  {}", style(message).dim());
            } else {
                println!("  DEBUG: {}", message);
            }
        }
    }

    pub fn print_user_friendly_error(&self, error: &ExtFindError) {
        self.error(&error.user_message());

        if let Some(suggestion) = error.suggestion() {
            if self.use_colors {
                eprintln!("{}{}", INFO, style(format!("Suggestion: {}", suggestion)).cyan());
            } else {
                eprintln!("Suggestion: {}", suggestion);
            }
        }
    }

    // Search lifecycle
    pub fn print_banner(&self, extensions: &ExtensionSet) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            println!("{}", style("--- Starting Search ---").bold());
            println!("Looking for: {}", style(extensions).cyan());
        } else {
            println!("--- Starting Search ---");
            println!("Looking for: {}", extensions);
        }
        self.print_separator();
    }

    /// Matches are always printed, even in quiet mode, so output can be piped.
    pub fn print_found(&self, file: &FoundFile) {
        println!("{}", file.path.display());
    }

    /// Missing roots and unreadable entries share one warning line.
    pub fn print_skipped(&self, reason: &ExtFindError) {
        self.warning(&skipped_line(reason));
    }

    pub fn print_summary(&self, total_files: usize) {
        if self.quiet {
            return;
        }

        self.print_separator();
        if self.use_colors {
            println!("{}", style("Search Complete.").green().bold());
            println!("Total files found: {}", style(total_files).cyan().bold());
        } else {
            println!("Search Complete.");
            println!("Total files found: {}", total_files);
        }
    }

    pub fn print_statistics(&self, stats: &ScanStatistics) {
        for line in stats.display_summary().lines() {
            self.debug(line);
        }
    }

    pub fn print_separator(&self) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            println!("{}", style("-".repeat(SEPARATOR_WIDTH)).dim());
        } else {
            println!("{}", "-".repeat(SEPARATOR_WIDTH));
        }
    }

    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_message(&self, msg_type: MessageType, message: &str) {
        if !self.use_colors {
            match msg_type {
                MessageType::Error => eprintln!("{}", message),
                _ => println!("{}", message),
            }
            return;
        }

        match msg_type {
            MessageType::Success => println!("{}{}", CHECKMARK, style(message).green()),
            MessageType::Error => eprintln!("{}{}", CROSS, style(message).red().bold()),
            MessageType::Warning => println!("{}{}", WARNING, style(message).yellow()),
            MessageType::Info => println!("{}{}", INFO, style(message).cyan()),
        }
    }
}

fn skipped_line(reason: &ExtFindError) -> String {
    format!("[!] Warning: {}", reason.user_message())
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Success,
    Error,
    Warning,
    Info,
}

// Keeps console lines from tearing through an active spinner
pub struct ProgressAwareOutput<'a> {
    formatter: &'a OutputFormatter,
    progress_manager: Option<&'a crate::ui::ProgressManager>,
}

impl<'a> ProgressAwareOutput<'a> {
    pub fn new(
        formatter: &'a OutputFormatter,
        progress_manager: Option<&'a crate::ui::ProgressManager>,
    ) -> Self {
        Self {
            formatter,
            progress_manager,
        }
    }

    pub fn suspend_and_print<F>(&self, f: F)
    where
        F: FnOnce(&OutputFormatter),
    {
        if let Some(pm) = self.progress_manager {
            pm.suspend(|| f(self.formatter));
        } else {
            f(self.formatter);
        }
    }

    pub fn found(&self, file: &FoundFile) {
        self.suspend_and_print(|f| f.print_found(file));
    }

    pub fn skipped(&self, reason: &ExtFindError) {
        self.suspend_and_print(|f| f.print_skipped(reason));
    }

    pub fn debug(&self, message: &str) {
        self.suspend_and_print(|f| f.debug(message));
    }
}
