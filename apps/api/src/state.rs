use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The engine itself is stateless; handlers only need the upload and timeout limits.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
