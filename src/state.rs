use crate::detect::LanguageDetector;
use crate::store::Store;
use std::sync::Arc;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Cheap to clone: both collaborators sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub detector: Arc<dyn LanguageDetector>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, detector: Arc<dyn LanguageDetector>) -> Self {
        Self { store, detector }
    }
}
