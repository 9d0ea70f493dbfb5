use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::SessionStore;

pub struct DeleteSessionUseCase {
    store: Arc<dyn SessionStore>,
}

impl DeleteSessionUseCase {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, key: &str) -> bool {
        let removed = self.store.delete(key);
        debug!(removed, "Session delete");
        removed
    }
}
