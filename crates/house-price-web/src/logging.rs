use crate::config::Environment;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Local runs get pretty, colored output with file and line numbers;
/// deployed environments log flattened JSON. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init(env: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,house_price_web=debug"));

    match env {
        Environment::Local => {
            tracing_subscriber::fmt()
                .with_ansi(true)
                .with_env_filter(filter)
                .with_file(true)
                .with_line_number(true)
                .pretty()
                .init();
        }
        Environment::Develop | Environment::Production => {
            tracing_subscriber::fmt()
                .with_ansi(false)
                .with_env_filter(filter)
                .with_file(true)
                .with_line_number(true)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .init();
        }
    }
}
