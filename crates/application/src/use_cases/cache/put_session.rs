use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::SessionStore;

pub struct PutSessionUseCase {
    store: Arc<dyn SessionStore>,
}

impl PutSessionUseCase {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, value), fields(value_len = value.len()))]
    pub fn execute(&self, key: &str, value: Bytes) {
        self.store.put(key, value);
        debug!(entries = self.store.len(), "Session stored");
    }
}
