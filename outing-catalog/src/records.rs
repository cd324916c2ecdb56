//! Raw serde records for catalog files, before coercion into core types.
//!
//! Field names mirror the JSON content files (`min_minutes`, `max_eur_pp`,
//! `main_category`, ...). Numeric and display fields read leniently; the
//! conversion step applies the documented defaults so the engine never sees
//! a malformed value. One deliberate source quirk is preserved: an explicit
//! `0` in `duration.max_minutes` or `travel_from.max_minutes` counts as
//! "unstated" and takes the default, matching the original portal's
//! truthiness-based reads.

use outing_core::{Cost, CostKind, FULL_DAY_MINUTES, Item, MinutesRange, Slug, Tags};
use serde::Deserialize;

use crate::error::CatalogError;
use crate::lenient::{lenient_string, lenient_strings, lenient_u32};

/// Top-level shape of `index.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct IndexRecord {
    pub(crate) items: Vec<ItemRecord>,
}

/// One raw item entry from `index.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ItemRecord {
    #[serde(deserialize_with = "lenient_string")]
    id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    slug: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    summary: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    main_category: Option<String>,
    #[serde(deserialize_with = "lenient_strings")]
    tags: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_strings")]
    emoji_tags: Option<Vec<String>>,
    duration: Option<RangeRecord>,
    travel_from: Option<RangeRecord>,
    cost: Option<CostRecord>,
    #[serde(deserialize_with = "lenient_string")]
    image: Option<String>,
}

/// Raw minute interval with tolerant bounds.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RangeRecord {
    #[serde(deserialize_with = "lenient_u32")]
    min_minutes: Option<u32>,
    #[serde(deserialize_with = "lenient_u32")]
    max_minutes: Option<u32>,
}

/// Raw cost entry with tolerant amount and kind.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CostRecord {
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    kind: Option<String>,
    #[serde(rename = "max_eur_pp", deserialize_with = "lenient_u32")]
    max_eur_pp: Option<u32>,
    #[serde(deserialize_with = "lenient_string")]
    notes: Option<String>,
}

impl ItemRecord {
    /// Convert the raw record into a typed [`Item`], applying defaults.
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidSlug`] when the slug is missing or
    /// fails validation; every other defect coerces to a default instead.
    pub(crate) fn into_item(self) -> Result<Item, CatalogError> {
        let raw_slug = self.slug.unwrap_or_default();
        let slug = Slug::new(raw_slug.as_str()).map_err(|source| CatalogError::InvalidSlug {
            slug: raw_slug,
            source,
        })?;

        let duration = self.duration.unwrap_or_default();
        let travel = self.travel_from.unwrap_or_default();
        let travel_min = travel.min_minutes.unwrap_or(0);
        let cost = self.cost.unwrap_or_default();

        Ok(Item {
            id: self.id.unwrap_or_else(|| slug.as_str().to_owned()),
            title: self.title.unwrap_or_default(),
            summary: self.summary.unwrap_or_default(),
            main_category: self.main_category.unwrap_or_default(),
            tags: self.tags.map(Tags::from_iter).unwrap_or_default(),
            emoji_tags: self.emoji_tags.unwrap_or_default(),
            duration: MinutesRange::new(
                duration.min_minutes.unwrap_or(0),
                duration
                    .max_minutes
                    .filter(|max| *max != 0)
                    .unwrap_or(FULL_DAY_MINUTES),
            ),
            travel_from: MinutesRange::new(
                travel_min,
                travel
                    .max_minutes
                    .filter(|max| *max != 0)
                    .unwrap_or(travel_min),
            ),
            cost: Cost {
                kind: cost
                    .kind
                    .as_deref()
                    .and_then(|raw| raw.parse::<CostKind>().ok())
                    .unwrap_or_default(),
                max_eur_per_person: cost.max_eur_pp.unwrap_or(0),
                notes: cost.notes.unwrap_or_default(),
            },
            image: self.image,
            slug,
        })
    }
}
