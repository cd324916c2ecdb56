//! Catalog loading for the outing recommendation engine.
//!
//! This crate reads the portal's hand-maintained JSON content files and
//! turns them into the typed [`outing_core`] catalog the engine scores. It
//! covers three concerns:
//!
//! - tolerant parsing of `index.json` and `categories.json`, where junk
//!   fields coerce to defaults instead of rejecting the file;
//! - a modification-time keyed [`CatalogCache`] that reloads republished
//!   content and serves the previous snapshot when a reload fails;
//! - the [`AnswerSheet`] a visitor submits, converted into a typed
//!   [`outing_core::Query`].
//!
//! # Examples
//! ```no_run
//! use camino::Utf8Path;
//! use outing_catalog::{AnswerSheet, CatalogCache};
//! use outing_core::recommend;
//!
//! let cache = CatalogCache::new(Utf8Path::new("content/index.json"));
//! let catalog = cache.snapshot()?;
//! let query = AnswerSheet::default().into_query();
//! let ranked = recommend(&catalog, &query, 12);
//! println!("{} suggestions", ranked.len());
//! # Ok::<(), outing_catalog::CatalogError>(())
//! ```

#![forbid(unsafe_code)]

mod answers;
mod cache;
mod error;
mod fs;
mod lenient;
mod loader;
mod records;

pub use answers::AnswerSheet;
pub use cache::CatalogCache;
pub use error::CatalogError;
pub use loader::{
    CATEGORIES_FILE, Category, DEFAULT_CATEGORY_ORDER, INDEX_FILE, load_catalog,
    load_catalog_file, load_categories,
};
