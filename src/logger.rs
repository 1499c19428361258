use tracing_subscriber::{EnvFilter, FmtSubscriber};

const LOG_ENV: &str = "STREST_CLOUDWATCH_LOG";

/// Installs the global tracing subscriber. Logs go to stderr so stdout stays
/// free for metric batches.
pub fn init_logging(verbose: bool, no_color: bool) {
    let directive = filter_directive(
        std::env::var(LOG_ENV).ok(),
        std::env::var("RUST_LOG").ok(),
        verbose,
    );
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

/// The crate's own variable wins over `RUST_LOG`; blank values count as unset.
fn filter_directive(crate_log: Option<String>, rust_log: Option<String>, verbose: bool) -> String {
    crate_log
        .filter(|value| !value.trim().is_empty())
        .or_else(|| rust_log.filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| if verbose { "debug" } else { "info" }.to_owned())
}

#[cfg(test)]
mod tests {
    use super::filter_directive;

    #[test]
    fn crate_log_var_wins_over_rust_log() -> Result<(), String> {
        let directive = filter_directive(
            Some("strest_cloudwatch=trace".to_owned()),
            Some("warn".to_owned()),
            false,
        );
        if directive != "strest_cloudwatch=trace" {
            return Err(format!("Unexpected directive: {}", directive));
        }
        Ok(())
    }

    #[test]
    fn rust_log_used_when_crate_log_unset_or_blank() -> Result<(), String> {
        for crate_log in [None, Some("  ".to_owned())] {
            let directive = filter_directive(crate_log, Some("warn".to_owned()), true);
            if directive != "warn" {
                return Err(format!("Unexpected directive: {}", directive));
            }
        }
        Ok(())
    }

    #[test]
    fn verbosity_picks_default_level() -> Result<(), String> {
        let quiet = filter_directive(None, None, false);
        let verbose = filter_directive(None, Some(String::new()), true);
        if quiet != "info" || verbose != "debug" {
            return Err(format!("Unexpected defaults: {} / {}", quiet, verbose));
        }
        Ok(())
    }
}
