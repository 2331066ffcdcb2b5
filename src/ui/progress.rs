use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::time::Duration;

pub struct ProgressManager {
    spinner: ProgressBar,
    enabled: bool,
}

impl ProgressManager {
    /// A disabled manager never draws; an enabled one draws to stderr only
    /// when stderr is a terminal.
    pub fn new(enabled: bool) -> Self {
        let spinner = if enabled {
            ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr())
        } else {
            ProgressBar::hidden()
        };

        spinner.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg} [{prefix} found] ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"]),
        );
        spinner.set_prefix("0");

        Self { spinner, enabled }
    }

    pub fn start_root(&self, root: &Path) {
        if !self.enabled {
            return;
        }
        self.spinner.set_message(format!("Scanning {}", root.display()));
        self.spinner.enable_steady_tick(Duration::from_millis(100));
    }

    pub fn set_found(&self, count: usize) {
        if self.enabled {
            self.spinner.set_prefix(count.to_string());
        }
    }

    pub fn suspend<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if self.enabled {
            self.spinner.suspend(f)
        } else {
            f()
        }
    }

    pub fn clear(&self) {
        if self.enabled {
            self.spinner.finish_and_clear();
        }
    }

}

pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}s", secs)
    } else {
        format!("{}ms", duration.as_millis())
    }
}
