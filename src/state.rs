use std::{path::PathBuf, sync::Arc};

/// Shared handler state. The quotes file is re-read on every request, so
/// there is nothing mutable to guard here.
#[derive(Clone)]
pub struct AppState {
    pub quotes_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(quotes_path: PathBuf) -> Self {
        Self {
            quotes_path: Arc::new(quotes_path),
        }
    }
}
