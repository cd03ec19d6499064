use account_tag_mapper::utils::{logger, validation::Validate};
use account_tag_mapper::{AccountzClient, CliArgs, LocalStorage, MapperEngine, MapperError};

fn report_failure(stage: &str, e: &MapperError, always_exit_zero: bool) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());

    let exit_code = if always_exit_zero { 0 } else { e.exit_code() };
    std::process::exit(exit_code);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliArgs::parse_args();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::debug!("CLI args: {:?}", args);
    let always_exit_zero = args.always_exit_zero;

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => report_failure("Failed to load configuration", &e, always_exit_zero),
    };

    if let Err(e) = config.validate() {
        report_failure("Configuration validation failed", &e, always_exit_zero);
    }

    let client = match AccountzClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => report_failure("Failed to create HTTP client", &e, always_exit_zero),
    };

    let engine = MapperEngine::new(client, LocalStorage::new(), config);

    match engine.run().await {
        Ok(summary) => {
            if summary.accounts_skipped > 0 {
                tracing::warn!(
                    "⚠️ {} accounts were skipped and are missing from {}",
                    summary.accounts_skipped,
                    summary.output_path
                );
            }
            println!("✅ Starlark file generated.");
        }
        Err(e) => report_failure("Error generating account mapping", &e, always_exit_zero),
    }
}
