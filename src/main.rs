use anyhow::Context;
use clap::Parser;
use vaccine_queue::utils::error::ErrorSeverity;
use vaccine_queue::utils::{logger, validation::Validate};
use vaccine_queue::{CliConfig, Menu, SessionState, VaccinationError};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting vaccine-queue");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(err) = run(&config) {
        std::process::exit(report(&err));
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    config
        .validate()
        .context("Configuration validation failed")?;

    let settings = config.load().context("Failed to load configuration")?;
    let date = settings.session_date().context("Invalid session date")?;
    let mut session = SessionState::from_config(&settings).context("Failed to open session")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock());
    menu.run(&mut session, date).context("Session aborted")?;

    tracing::info!(
        "Session closed: {} vaccinated, {} doses left, {} still waiting",
        session.report_total(),
        session.remaining_doses(),
        session.queue_len()
    );

    Ok(())
}

/// Logs the failure and picks the exit code from the underlying error's severity.
fn report(err: &anyhow::Error) -> i32 {
    let Some(e) = err.downcast_ref::<VaccinationError>() else {
        tracing::error!("{:#}", err);
        eprintln!("{:#}", err);
        return 1;
    };

    tracing::error!(
        "{:#} (Category: {:?}, Severity: {:?})",
        err,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_follows_wrapped_error_severity() {
        let io: anyhow::Error = VaccinationError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        ))
        .into();
        assert_eq!(report(&io.context("Session aborted")), 3);

        let config = CliConfig {
            daily_cap: Some(0),
            ..CliConfig::default()
        };
        let err = run(&config).unwrap_err();
        assert!(err.downcast_ref::<VaccinationError>().is_some());
        assert_eq!(report(&err), 1);
    }
}
