//! Local-directory image storage.

use async_trait::async_trait;
use std::io;
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

use crate::domain::repositories::ImageStore;

/// Upload directory capability.
///
/// Constructed once at startup by [`UploadStore::init`], which ensures the directory
/// exists, then handed to the post service. Files are named `<uuid-v4>.<ext>`.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    /// Ensures `dir` exists (creating parents as needed) and returns a store rooted there.
    ///
    /// Calling this on an existing directory is a no-op.
    pub async fn init(dir: impl AsRef<Path>) -> io::Result<Self> {
        let root = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&root).await?;
        tracing::info!(dir = %root.display(), "Upload directory ready");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True when the root still exists and is a directory.
    pub async fn is_available(&self) -> bool {
        tokio::fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }

    fn path_for(&self, filename: &str) -> io::Result<PathBuf> {
        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => Ok(self.root.join(name)),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid upload file name: {filename}"),
            )),
        }
    }
}

#[async_trait]
impl ImageStore for UploadStore {
    async fn save(&self, extension: &str, bytes: Vec<u8>) -> io::Result<String> {
        let filename = format!("{}.{}", Uuid::new_v4(), extension);
        let path = self.path_for(&filename)?;

        tokio::fs::write(&path, bytes).await?;
        tracing::debug!(file = %filename, "Stored upload");

        Ok(filename)
    }

    async fn remove(&self, filename: &str) -> io::Result<()> {
        let path = self.path_for(filename)?;
        tokio::fs::remove_file(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("uploads");

        let store = UploadStore::init(&dir).await.unwrap();
        assert!(store.is_available().await);

        let again = UploadStore::init(&dir).await.unwrap();
        assert_eq!(again.root(), dir.as_path());
    }

    #[tokio::test]
    async fn test_save_and_remove() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::init(tmp.path()).await.unwrap();

        let name = store.save("png", vec![1, 2, 3]).await.unwrap();
        assert!(name.ends_with(".png"));
        assert_eq!(name.len(), 36 + 4);

        let written = tokio::fs::read(tmp.path().join(&name)).await.unwrap();
        assert_eq!(written, vec![1, 2, 3]);

        store.remove(&name).await.unwrap();
        assert!(!tmp.path().join(&name).exists());
    }

    #[tokio::test]
    async fn test_generated_names_are_unique() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::init(tmp.path()).await.unwrap();

        let a = store.save("jpg", vec![0]).await.unwrap();
        let b = store.save("jpg", vec![0]).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_remove_missing_file_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::init(tmp.path()).await.unwrap();

        let err = store.remove("absent.png").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::init(tmp.path()).await.unwrap();

        for name in ["../escape.png", "a/b.png", "/etc/passwd", ""] {
            let err = store.remove(name).await.unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{name}");
        }
    }

    #[tokio::test]
    async fn test_unavailable_after_directory_removed() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("gone");
        let store = UploadStore::init(&dir).await.unwrap();

        tokio::fs::remove_dir(&dir).await.unwrap();
        assert!(!store.is_available().await);
    }
}
