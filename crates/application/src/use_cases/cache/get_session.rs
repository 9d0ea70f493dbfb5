use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::SessionStore;

pub struct GetSessionUseCase {
    store: Arc<dyn SessionStore>,
}

impl GetSessionUseCase {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, key: &str) -> Option<Bytes> {
        let value = self.store.get(key);
        debug!(hit = value.is_some(), "Session lookup");
        value
    }
}
