//! Facade crate for the outing recommendation engine.
//!
//! This crate re-exports the core domain types and ranking entry point, and
//! exposes the catalog loading layer behind the `catalog` feature flag.

#![forbid(unsafe_code)]

pub use outing_core::{
    Catalog, CatalogSource, Cost, CostKind, Item, KidAgeGroup, MinutesRange, Mode, Query,
    ScoredItem, Setting, Slug, SlugError, Vibe, recommend,
};

#[cfg(feature = "catalog")]
pub use outing_catalog::{AnswerSheet, CatalogCache, CatalogError, load_catalog, load_categories};
