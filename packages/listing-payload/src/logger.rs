use std::env;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Loads `.env` when present and logs to stderr, leaving stdout to the payload.
pub fn enable_logger() {
    dotenv::dotenv().ok();

    let filter = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
    pretty_env_logger::formatted_builder()
        .parse_filters(&filter)
        .init();
}
