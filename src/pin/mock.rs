//! Mock asset store for orchestration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::UploadError;
use crate::shared::ContentAddress;

use super::AssetStore;

/// Records every stored payload and hands out sequential addresses.
pub(crate) struct MockStore {
    /// (file_name, content_type, bytes) per store call, in order.
    pub stored: Mutex<Vec<(String, String, Vec<u8>)>>,
    /// When set, every call fails with a backend rejection.
    pub fail: bool,
    counter: AtomicUsize,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            stored: Mutex::new(Vec::new()),
            fail: false,
            counter: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }
}

#[async_trait]
impl AssetStore for MockStore {
    async fn store(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        content_type: &str,
    ) -> Result<ContentAddress, UploadError> {
        if self.fail {
            return Err(UploadError::Backend {
                status: 500,
                body: "mock backend failure".to_string(),
            });
        }

        self.stored
            .lock()
            .unwrap()
            .push((file_name.to_string(), content_type.to_string(), bytes));

        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(ContentAddress::new(format!("mock://blob-{n}")))
    }
}
