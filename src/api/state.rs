//! API server state

use std::sync::Arc;

use crate::repository::MachineRepository;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Read-only machine data source
    pub repository: Arc<dyn MachineRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn MachineRepository>) -> Self {
        Self { repository }
    }
}
