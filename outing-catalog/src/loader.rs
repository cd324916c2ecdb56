//! Loading catalog content from JSON files on disk.

use std::io::Read;

use camino::Utf8Path;
use outing_core::Catalog;
use serde::Deserialize;

use crate::error::CatalogError;
use crate::fs::open_utf8_file;
use crate::lenient::{lenient_string, lenient_u32};
use crate::records::IndexRecord;

/// File name of the item index inside a catalog directory.
pub const INDEX_FILE: &str = "index.json";

/// File name of the category listing inside a catalog directory.
pub const CATEGORIES_FILE: &str = "categories.json";

/// Sort rank assigned to categories that do not state one.
pub const DEFAULT_CATEGORY_ORDER: u32 = 9_999;

/// A browsing category from `categories.json`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    /// URL-safe identifier referenced by items' `main_category`.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Short description shown on the portal.
    pub description: String,
    /// Emoji used as the category's icon.
    pub portal_emoji: String,
    /// Ascending sort rank; lower comes first.
    pub order: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CategoriesRecord {
    categories: Vec<CategoryRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CategoryRecord {
    #[serde(deserialize_with = "lenient_string")]
    slug: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    portal_emoji: Option<String>,
    #[serde(deserialize_with = "lenient_u32")]
    order: Option<u32>,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Self {
            slug: record.slug.unwrap_or_default(),
            title: record.title.unwrap_or_default(),
            description: record.description.unwrap_or_default(),
            portal_emoji: record.portal_emoji.unwrap_or_default(),
            order: record.order.unwrap_or(DEFAULT_CATEGORY_ORDER),
        }
    }
}

/// Load the item catalog from `index.json` inside `dir`.
///
/// # Errors
/// Returns a [`CatalogError`] when the file cannot be opened or parsed, or
/// when a record carries an invalid slug.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use outing_catalog::load_catalog;
///
/// let catalog = load_catalog(Utf8Path::new("content"))?;
/// println!("{} items", catalog.len());
/// # Ok::<(), outing_catalog::CatalogError>(())
/// ```
pub fn load_catalog(dir: &Utf8Path) -> Result<Catalog, CatalogError> {
    load_catalog_file(&dir.join(INDEX_FILE))
}

/// Load the item catalog from an explicit index file path.
///
/// # Errors
/// Returns a [`CatalogError`] when the file cannot be opened or parsed, or
/// when a record carries an invalid slug.
pub fn load_catalog_file(path: &Utf8Path) -> Result<Catalog, CatalogError> {
    let index: IndexRecord = read_json(path)?;
    let items = index
        .items
        .into_iter()
        .map(crate::records::ItemRecord::into_item)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Catalog::new(items))
}

/// Load browsing categories from `categories.json` inside `dir`, sorted by
/// ascending `order`.
///
/// # Errors
/// Returns a [`CatalogError`] when the file cannot be opened or parsed.
pub fn load_categories(dir: &Utf8Path) -> Result<Vec<Category>, CatalogError> {
    let record: CategoriesRecord = read_json(&dir.join(CATEGORIES_FILE))?;
    let mut categories: Vec<Category> = record.categories.into_iter().map(Category::from).collect();
    categories.sort_by_key(|category| category.order);
    Ok(categories)
}

fn read_json<T>(path: &Utf8Path) -> Result<T, CatalogError>
where
    T: serde::de::DeserializeOwned,
{
    let mut file = open_utf8_file(path).map_err(|source| CatalogError::Open {
        path: path.to_owned(),
        source,
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|source| CatalogError::Open {
            path: path.to_owned(),
            source,
        })?;
    serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
        path: path.to_owned(),
        source,
    })
}
