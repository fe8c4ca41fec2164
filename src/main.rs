use chronoforge::utils::error::{ErrorSeverity, ForgeError};
use chronoforge::utils::{logger, validation::Validate};
use chronoforge::{ChronoForge, CliConfig, ForgeEngine};
use clap::Parser;

fn exit_code(e: &ForgeError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: ForgeError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    // invalid level or format: report through the default logger
    if let Err(e) = config.validate() {
        logger::init_cli_logger(cli.verbose, "info");
        fail(e);
    }

    let json_output = config.json_output();
    if json_output {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("Starting chronoforge");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
        tracing::debug!("Resolved config: {:?}", config);
    }

    let monitor_enabled = config.monitoring_enabled();
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let engine = ForgeEngine::new_with_monitoring(ChronoForge::from_config(&config), monitor_enabled);

    let report = match engine.run() {
        Ok(report) => report,
        Err(e) => fail(e),
    };

    if json_output {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => fail(e),
        }
    } else {
        println!("✅ '{}' ran successfully", report.subject);
    }
}
