use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Install the global subscriber. An unparsable level falls back to `info`
/// and is reported once the subscriber is live.
pub fn setup_logging(level: &str) {
    let (env_filter, rejected) = filter_for(level);
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Some(e) = rejected {
        warn!("Invalid log level {:?}, falling back to info: {}", level, e);
    }
}

fn filter_for(level: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e)),
    }
}
