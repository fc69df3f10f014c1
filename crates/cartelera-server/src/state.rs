use cartelera_core::EventRepository;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
///
/// The repository is constructed explicitly and injected here; there is no
/// process-wide singleton, so tests get a fresh collection per router.
pub struct AppState {
    pub repo: EventRepository,
}
