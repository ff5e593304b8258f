//! Content-addressed disk cache for encoded MP3 audio.

use std::path::PathBuf;

use tracing::{debug, warn};
use uuid::Uuid;

/// Disk cache of encoded MP3 output, one `<key>.mp3` file per entry.
///
/// Every operation is best-effort: I/O failures are logged and degrade to a
/// miss (get) or a skipped write (put). A broken cache never fails a
/// request. There is no eviction; entries live until removed externally.
#[derive(Debug, Clone)]
pub struct AudioCache {
    dir: PathBuf,
}

impl AudioCache {
    /// Create a cache rooted at `dir`, creating the directory if needed.
    pub async fn new(dir: PathBuf) -> Self {
        if let Err(e) = tokio::fs::create_dir_all(&dir).await {
            warn!(
                dir = %dir.display(),
                error = %e,
                "Failed to create cache directory, caching will be disabled"
            );
        }
        Self { dir }
    }

    /// Path of the cache entry for `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.mp3"))
    }

    /// Look up a cached entry. I/O errors count as a miss.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let path = self.path_for(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                debug!(key, size = bytes.len(), "Audio cache hit");
                Some(bytes)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(key, "Audio cache miss");
                None
            }
            Err(e) => {
                warn!(key, error = %e, "Audio cache read failed");
                None
            }
        }
    }

    /// Store an entry atomically: write to a temp file, then rename over the
    /// final path. Failures are logged and swallowed.
    pub async fn put(&self, key: &str, bytes: &[u8]) {
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.mp3.{}.tmp", Uuid::new_v4()));

        if let Err(e) = tokio::fs::write(&tmp, bytes).await {
            warn!(key, error = %e, "Audio cache write failed");
            return;
        }
        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            warn!(key, error = %e, "Audio cache rename failed");
            let _ = tokio::fs::remove_file(&tmp).await;
            return;
        }
        debug!(key, size = bytes.len(), "Audio cache store");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_put_then_get_roundtrip() {
        let dir = TempDir::new().unwrap();
        let cache = AudioCache::new(dir.path().to_path_buf()).await;

        cache.put("abc123", b"mp3 bytes").await;
        let bytes = cache.get("abc123").await;
        assert_eq!(bytes.as_deref(), Some(&b"mp3 bytes"[..]));
    }

    #[tokio::test]
    async fn test_get_missing_entry() {
        let dir = TempDir::new().unwrap();
        let cache = AudioCache::new(dir.path().to_path_buf()).await;

        assert_eq!(cache.get("nothing-here").await, None);
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_entry() {
        let dir = TempDir::new().unwrap();
        let cache = AudioCache::new(dir.path().to_path_buf()).await;

        cache.put("key", b"first").await;
        cache.put("key", b"second").await;
        assert_eq!(cache.get("key").await.as_deref(), Some(&b"second"[..]));
    }

    #[tokio::test]
    async fn test_entry_layout_is_flat_mp3() {
        let dir = TempDir::new().unwrap();
        let cache = AudioCache::new(dir.path().to_path_buf()).await;

        cache.put("deadbeef", b"x").await;
        assert!(dir.path().join("deadbeef.mp3").is_file());
        assert_eq!(cache.path_for("deadbeef"), dir.path().join("deadbeef.mp3"));

        // No stray temp files after a successful put
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry.file_name().to_string_lossy().ends_with(".tmp")
            })
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn test_unwritable_directory_degrades_to_noop() {
        // Point the cache at a path that cannot be created
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("occupied");
        std::fs::write(&file_path, b"not a directory").unwrap();

        let cache = AudioCache::new(file_path.join("cache")).await;
        cache.put("key", b"bytes").await;
        assert_eq!(cache.get("key").await, None);
    }
}
