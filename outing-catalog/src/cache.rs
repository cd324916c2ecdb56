//! Modification-time keyed caching of the item catalog.
//!
//! The portal's content files are edited and republished in place, so the
//! cache re-reads `index.json` only when its modification time changes. A
//! failed reload keeps serving the previous snapshot and logs a warning;
//! readers never see a half-loaded catalog because the snapshot swaps
//! atomically behind an [`Arc`].

use std::sync::{Arc, PoisonError, RwLock};
use std::time::SystemTime;

use camino::{Utf8Path, Utf8PathBuf};
use outing_core::{Catalog, CatalogSource};

use crate::error::CatalogError;
use crate::fs::modified_time;
use crate::loader::load_catalog_file;

#[derive(Clone)]
struct CachedSnapshot {
    modified: SystemTime,
    catalog: Arc<Catalog>,
}

/// A reloading catalog handle keyed on the index file's modification time.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use outing_catalog::CatalogCache;
///
/// let cache = CatalogCache::new(Utf8Path::new("content/index.json"));
/// let catalog = cache.snapshot()?;
/// println!("{} items", catalog.len());
/// # Ok::<(), outing_catalog::CatalogError>(())
/// ```
pub struct CatalogCache {
    index_path: Utf8PathBuf,
    state: RwLock<Option<CachedSnapshot>>,
}

impl CatalogCache {
    /// Create a cache backed by the given index file.
    #[must_use]
    pub fn new(index_path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            index_path: index_path.into(),
            state: RwLock::new(None),
        }
    }

    /// Path of the index file backing this cache.
    #[must_use]
    pub fn index_path(&self) -> &Utf8Path {
        &self.index_path
    }

    /// Return the current catalog, reloading when the index file changed.
    ///
    /// An unchanged modification time returns the cached [`Arc`] without
    /// touching the file contents. When a reload fails after a successful
    /// earlier load, the stale snapshot is returned and a warning logged.
    ///
    /// # Errors
    /// Returns a [`CatalogError`] only when no snapshot has ever been loaded
    /// and the current read attempt fails.
    pub fn snapshot(&self) -> Result<Arc<Catalog>, CatalogError> {
        let modified =
            modified_time(&self.index_path).map_err(|source| CatalogError::Inspect {
                path: self.index_path.clone(),
                source,
            });

        let cached = self
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let modified = match (modified, &cached) {
            (Ok(modified), Some(snapshot)) if snapshot.modified == modified => {
                return Ok(Arc::clone(&snapshot.catalog));
            }
            (Ok(modified), _) => modified,
            (Err(error), Some(snapshot)) => {
                log::warn!("catalog inspect failed, serving stale snapshot: {error}");
                return Ok(Arc::clone(&snapshot.catalog));
            }
            (Err(error), None) => return Err(error),
        };

        match load_catalog_file(&self.index_path) {
            Ok(catalog) => {
                let catalog = Arc::new(catalog);
                let snapshot = CachedSnapshot {
                    modified,
                    catalog: Arc::clone(&catalog),
                };
                *self.state.write().unwrap_or_else(PoisonError::into_inner) = Some(snapshot);
                Ok(catalog)
            }
            Err(error) => {
                let Some(snapshot) = cached else {
                    return Err(error);
                };
                log::warn!("catalog reload failed, serving stale snapshot: {error}");
                Ok(snapshot.catalog)
            }
        }
    }
}

impl CatalogSource for CatalogCache {
    fn catalog(&self) -> Arc<Catalog> {
        self.snapshot().unwrap_or_else(|error| {
            log::warn!("catalog unavailable, serving empty catalog: {error}");
            Arc::new(Catalog::default())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs::File;
    use std::time::Duration;

    fn write_index(path: &Utf8Path, slugs: &[&str]) {
        let items: Vec<serde_json::Value> = slugs
            .iter()
            .map(|slug| serde_json::json!({ "slug": slug, "title": slug }))
            .collect();
        let body = serde_json::json!({ "items": items }).to_string();
        std::fs::write(path.as_std_path(), body).expect("index fixture should write");
    }

    fn bump_mtime(path: &Utf8Path) {
        let file = File::options()
            .write(true)
            .open(path.as_std_path())
            .expect("index file should open for touching");
        let later = SystemTime::now() + Duration::from_secs(5);
        file.set_modified(later).expect("mtime should update");
    }

    fn temp_index() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().expect("temp dir should create");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("index.json"))
            .expect("temp path should be UTF-8");
        (dir, path)
    }

    #[rstest]
    fn unchanged_mtime_returns_the_same_snapshot() {
        let (_guard, path) = temp_index();
        write_index(&path, &["museum-night"]);
        let cache = CatalogCache::new(path);

        let first = cache.snapshot().expect("initial load should succeed");
        let second = cache.snapshot().expect("cached read should succeed");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[rstest]
    fn changed_mtime_reloads_the_file() {
        let (_guard, path) = temp_index();
        write_index(&path, &["museum-night"]);
        let cache = CatalogCache::new(path.clone());
        assert_eq!(cache.snapshot().expect("initial load").len(), 1);

        write_index(&path, &["museum-night", "river-swim"]);
        bump_mtime(&path);
        assert_eq!(cache.snapshot().expect("reload").len(), 2);
    }

    #[rstest]
    fn failed_reload_retains_the_stale_snapshot() {
        let (_guard, path) = temp_index();
        write_index(&path, &["museum-night"]);
        let cache = CatalogCache::new(path.clone());
        let first = cache.snapshot().expect("initial load should succeed");

        std::fs::write(path.as_std_path(), "{broken").expect("corrupt write should succeed");
        bump_mtime(&path);
        let second = cache.snapshot().expect("stale snapshot should be served");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[rstest]
    fn missing_file_without_prior_snapshot_errors() {
        let (_guard, path) = temp_index();
        let cache = CatalogCache::new(path);
        assert!(matches!(
            cache.snapshot(),
            Err(CatalogError::Inspect { .. })
        ));
    }

    #[rstest]
    fn catalog_source_degrades_to_empty() {
        let (_guard, path) = temp_index();
        let cache = CatalogCache::new(path);
        assert!(cache.catalog().is_empty());
    }
}
