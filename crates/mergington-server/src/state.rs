use std::sync::Arc;

use mergington_core::directory::ActivityDirectory;
use tokio::sync::RwLock;

/// Shared application state passed to all route handlers.
///
/// The directory sits behind a single `RwLock`: listings take a read guard,
/// and the two roster mutations hold the write guard for the whole
/// check-then-mutate sequence.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<RwLock<ActivityDirectory>>,
}

impl AppState {
    pub fn new(directory: ActivityDirectory) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
        }
    }
}
