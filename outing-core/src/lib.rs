//! Core domain types and the ranking engine for the outing portal.
//!
//! The crate models the catalog of experience items ([`Item`], [`Catalog`]),
//! the typed questionnaire answers ([`Query`]), and the pure single-pass
//! ranking function [`recommend`] that turns both into an ordered, explained
//! shortlist of [`ScoredItem`]s.
//!
//! All parsing and coercion of raw source data happens in collaborator
//! crates; everything here assumes well-typed, defaulted inputs and performs
//! no I/O.
//!
//! # Examples
//!
//! ```
//! use outing_core::{recommend, Catalog, Item, MinutesRange, Query, Slug, Vibe};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new(Slug::new("rope-park")?, "Rope park")
//!         .with_tags(["action", "outdoor"])
//!         .with_duration(MinutesRange::new(90, 180)),
//! ]);
//! let query = Query::new().with_time_window(60, 240).with_vibe(Vibe::Action);
//!
//! let ranked = recommend(&catalog, &query, 12);
//! assert_eq!(ranked.len(), 1);
//! # Ok::<(), outing_core::SlugError>(())
//! ```

#![forbid(unsafe_code)]

mod catalog;
mod engine;
mod item;
mod query;
mod slug;

pub use catalog::{Catalog, CatalogSource};
pub use engine::{MAX_REASONS, MAX_RESULTS, ScoredItem, reason, recommend};
pub use item::{Cost, CostKind, FULL_DAY_MINUTES, Item, MinutesRange, Tags};
pub use query::{DEFAULT_MAX_TRAVEL_MINUTES, KidAgeGroup, Mode, Query, Setting, Vibe};
pub use slug::{SLUG_MAX_LEN, SLUG_MIN_LEN, Slug, SlugError};
