use log::debug;

/// Diagnostics go to stderr through `log`; `RUST_LOG` overrides the level.
pub fn init_logger(verbose: u8, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else {
        match verbose {
            0 | 1 => log::LevelFilter::Off,
            2 => log::LevelFilter::Warn,
            _ => log::LevelFilter::Debug,
        }
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // A second init (e.g. from tests) is harmless
    if builder.try_init().is_ok() {
        debug!("Logger initialized with level: {level:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice_does_not_panic() {
        init_logger(3, false);
        init_logger(0, true);
    }
}
