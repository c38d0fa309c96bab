use clap::Parser;
use container_smoke::utils::{logger, validation::Validate};
use container_smoke::{CliConfig, DiagnosticEmitter, ProbeConfig, SystemProbe};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _cli = CliConfig::parse();

    logger::init_cli_logger();
    tracing::info!("Starting container smoke test");

    let config = ProbeConfig::default();
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let emitter = DiagnosticEmitter::new(SystemProbe::new(config));
    let result = {
        let mut stdout = std::io::stdout().lock();
        emitter.emit(&mut stdout).await
    };

    match result {
        Ok(lines) => {
            tracing::info!("Smoke test finished ({} lines)", lines);
        }
        Err(e) => {
            tracing::error!(
                "Smoke test failed: {} (Category: {:?}, exit code {})",
                e,
                e.category(),
                e.exit_code()
            );
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
