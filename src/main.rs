use clap::Parser;
use small_lambdas::output::run_and_print;
use small_lambdas::utils::logger;
use small_lambdas::{CliConfig, LambdaError, OutputFormat};

fn main() {
    let config = CliConfig::parse();

    match config.format {
        Some(OutputFormat::Json) => logger::init_json_logger(config.verbose),
        _ => logger::init_cli_logger(config.verbose),
    }

    tracing::info!("Starting small-lambdas");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run_and_print(&settings, &mut out) {
        Ok(_) => tracing::info!("All exercises completed"),
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: LambdaError) -> ! {
    tracing::error!(
        "small-lambdas failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
