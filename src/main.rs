use clap::Parser;
use extfind::{Cli, ExtFind, ExtFindError, OutputFormatter, OutputMode, UserFriendlyError};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    extfind::logging::init_logger(cli.verbosity_level(), cli.quiet);

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let extfind = match ExtFind::from_cli(&cli) {
        Ok(extfind) => extfind,
        Err(e) => {
            print_startup_error(&e);
            return 1;
        }
    };

    if cli.dry_run {
        return handle_dry_run(&extfind);
    }

    // Missing roots and log failures are reported, never fatal
    extfind.run();
    0
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "extfind.toml".to_string());

    match ExtFind::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  extfind --config {}", config_path);
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(extfind: &ExtFind) -> i32 {
    let formatter = extfind.output_formatter();
    let request = extfind.config().search_request();

    formatter.info("DRY RUN MODE - No directories will be walked");
    println!("Roots:");
    for root in &request.roots {
        let marker = if root.is_dir() { "" } else { " (not found)" };
        println!("  {}{}", root.display(), marker);
    }
    println!("Looking for: {}", request.extension_set());
    match request.log_path {
        Some(ref path) => println!("Log file: {}", path.display()),
        None => println!("Log file: none"),
    }

    0
}

fn print_startup_error(error: &ExtFindError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
