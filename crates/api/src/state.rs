/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; the pool is internally reference-counted. Constructed
/// once at startup and injected into the router; there is no process-global
/// store handle.
#[derive(Clone)]
pub struct AppState {
    /// Database handle, opened once at startup.
    pub pool: rickmorty_db::DbPool,
}
