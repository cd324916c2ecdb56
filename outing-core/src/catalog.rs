//! Read-only catalog snapshots and the trait for publishing them.
//!
//! A [`Catalog`] owns its items in source order; that order is load-bearing
//! because the engine breaks score ties by it. Providers hand out complete,
//! immutable snapshots behind an [`Arc`] so concurrent ranking calls never
//! observe a half-updated catalog.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::Item;

/// The full read-only collection of items available to one ranking call.
///
/// # Examples
/// ```
/// use outing_core::{Catalog, Item, Slug};
///
/// let catalog = Catalog::new(vec![
///     Item::new(Slug::new("museum")?, "Museum").with_category("culture"),
///     Item::new(Slug::new("lake-swim")?, "Lake swim").with_category("nature"),
/// ]);
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.find_by_slug("museum").is_some());
/// assert_eq!(catalog.in_category("nature").count(), 1);
/// # Ok::<(), outing_core::SlugError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Construct a catalog from items in source order.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Number of items in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in source order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Iterate over items in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Find an item by its slug.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.slug == *slug)
    }

    /// Iterate over items belonging to the given category, in source order.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Item> {
        self.items
            .iter()
            .filter(move |item| item.main_category == category)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Publishes the latest catalog snapshot.
///
/// Implementations refresh from their backing source as needed but must
/// swap in a fully built snapshot atomically; an unavailable catalog is
/// represented as an empty snapshot, never as an error, matching the
/// engine's "empty catalog yields empty result" contract.
pub trait CatalogSource: Send + Sync {
    /// Return the latest complete snapshot.
    fn catalog(&self) -> Arc<Catalog>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Slug;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> Catalog {
        let slug = |raw: &str| Slug::new(raw).expect("test slug should be valid");
        Catalog::new(vec![
            Item::new(slug("museum"), "Museum").with_category("culture"),
            Item::new(slug("lake-swim"), "Lake swim").with_category("nature"),
            Item::new(slug("forest-walk"), "Forest walk").with_category("nature"),
        ])
    }

    #[rstest]
    fn lookup_by_slug(catalog: Catalog) {
        assert_eq!(
            catalog.find_by_slug("lake-swim").map(|item| item.title.as_str()),
            Some("Lake swim")
        );
        assert!(catalog.find_by_slug("unknown").is_none());
    }

    #[rstest]
    fn category_filter_preserves_source_order(catalog: Catalog) {
        let slugs: Vec<_> = catalog
            .in_category("nature")
            .map(|item| item.slug.as_str())
            .collect();
        assert_eq!(slugs, ["lake-swim", "forest-walk"]);
    }

    #[rstest]
    fn empty_catalog_reports_empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
