use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use crate::error::AssetError;

/// Loads bundled assets by logical name.
pub trait AssetSource: Send + Sync {
    /// # Errors
    ///
    /// Returns `AssetError` when the asset is missing, empty, or unreadable.
    fn load(&self, name: &str) -> Result<Vec<u8>, AssetError>;
}

/// Reads assets from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        // Names are logical: only plain relative paths below the root.
        let plain = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if name.is_empty() || !plain {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl AssetSource for DirAssetSource {
    fn load(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve(name).ok_or_else(|| AssetError::NotFound {
            name: name.to_string(),
        })?;
        match std::fs::read(&path) {
            Ok(bytes) if bytes.is_empty() => Err(AssetError::Empty {
                name: name.to_string(),
            }),
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(AssetError::NotFound {
                name: name.to_string(),
            }),
            Err(source) => Err(AssetError::Io {
                name: name.to_string(),
                source,
            }),
        }
    }
}

/// Fixed in-memory assets, used by tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssets {
    entries: HashMap<String, Vec<u8>>,
}

impl InMemoryAssets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_asset(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.entries.insert(name.into(), bytes.into());
        self
    }
}

impl AssetSource for InMemoryAssets {
    fn load(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        match self.entries.get(name) {
            Some(bytes) if bytes.is_empty() => Err(AssetError::Empty {
                name: name.to_string(),
            }),
            Some(bytes) => Ok(bytes.clone()),
            None => Err(AssetError::NotFound {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("quiz-assets-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn dir_source_reads_existing_file() {
        let dir = temp_dir("read");
        std::fs::write(dir.join("track.mp3"), b"ID3").unwrap();

        let source = DirAssetSource::new(&dir);
        assert_eq!(source.load("track.mp3").unwrap(), b"ID3".to_vec());

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn dir_source_reports_missing_and_empty() {
        let dir = temp_dir("missing");
        std::fs::write(dir.join("empty.mp3"), b"").unwrap();
        let source = DirAssetSource::new(&dir);

        assert!(matches!(
            source.load("nope.mp3"),
            Err(AssetError::NotFound { .. })
        ));
        assert!(matches!(
            source.load("empty.mp3"),
            Err(AssetError::Empty { .. })
        ));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn dir_source_rejects_paths_outside_root() {
        let source = DirAssetSource::new("assets");
        assert!(matches!(
            source.load("../secret.mp3"),
            Err(AssetError::NotFound { .. })
        ));
        assert!(matches!(source.load(""), Err(AssetError::NotFound { .. })));
    }

    #[test]
    fn in_memory_assets_lookup() {
        let assets = InMemoryAssets::new().with_asset("a.mp3", vec![1, 2, 3]);
        assert_eq!(assets.load("a.mp3").unwrap(), vec![1, 2, 3]);
        assert!(matches!(
            assets.load("b.mp3"),
            Err(AssetError::NotFound { .. })
        ));
    }
}
