//! Storage port for uploaded post images.

use async_trait::async_trait;
use std::io;

/// File storage for post images.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::UploadStore`] - local directory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Writes `bytes` under a freshly generated name with the given extension and
    /// returns that name.
    async fn save(&self, extension: &str, bytes: Vec<u8>) -> io::Result<String>;

    /// Removes a stored file.
    async fn remove(&self, filename: &str) -> io::Result<()>;
}
