//! The ranking engine: one pass of hard filters and additive soft scores.
//!
//! [`recommend`] walks the catalog in source order exactly once. Hard rules
//! drop an item outright; soft rules add to its score and may record a short
//! justification. The rule sequence is fixed because it decides which
//! justifications survive the four-reason cap, and ties in the final sort
//! keep catalog order so repeated calls are bit-identical.
//!
//! The engine is pure: it never mutates the catalog or query, performs no
//! I/O, and holds no state between calls, so it is safe to invoke from any
//! number of threads against a shared snapshot.

use serde::Serialize;

use crate::{Catalog, CostKind, Item, Query, Setting, Vibe};

/// Hard ceiling on the number of results a single call may return.
pub const MAX_RESULTS: usize = 50;

/// Maximum number of justification strings kept per result.
pub const MAX_REASONS: usize = 4;

/// Justification strings attached when a scoring rule fires favourably.
///
/// Kept as constants so callers and tests can match on them verbatim; the
/// serialization layer must pass them through unchanged.
pub mod reason {
    /// The item's duration sits entirely inside the requested window.
    pub const TIME_FITS_VERY_WELL: &str = "time fits very well";
    /// The item's duration merely overlaps the requested window.
    pub const TIME_FITS_IN_GENERAL: &str = "time fits in general";
    /// Short travel for a user who asked to stay close.
    pub const VERY_CLOSE_BY: &str = "very close by";
    /// The item carries the requested indoor/outdoor tag.
    pub const SETTING_FITS: &str = "setting fits (indoor/outdoor)";
    /// The item is explicitly free of charge.
    pub const FREE: &str = "free";
    /// The item's known cost fits under the stated budget.
    pub const BUDGET_FITS: &str = "budget fits";
    /// The item is tagged as suitable for children.
    pub const FAMILY_FRIENDLY: &str = "family-friendly";
    /// The item matches a calm vibe.
    pub const CALM_VIBE_FITS: &str = "calm vibe fits";
    /// The item matches a sporty vibe.
    pub const ACTIVITY_LEVEL_FITS: &str = "activity level fits";
    /// The item matches an action vibe.
    pub const ACTION_VIBE_FITS: &str = "action vibe fits";
    /// Long approach for a user without a car.
    pub const CAR_FREE_EFFORT: &str =
        "getting there without a car/transit plan could be more effort";
}

// Rule weights, in firing order.
const W_TIME_CONTAINED: f64 = 22.0;
const W_TIME_OVERLAP: f64 = 12.0;
const W_TRAVEL_CLOSE: f64 = 12.0;
const W_TRAVEL_OK: f64 = 8.0;
const W_SETTING: f64 = 10.0;
const W_COST_FREE: f64 = 10.0;
const W_COST_UNKNOWN: f64 = 4.0;
const W_COST_IN_BUDGET: f64 = 6.0;
const W_KIDS: f64 = 10.0;
const W_VIBE_STRONG: f64 = 14.0;
const W_VIBE_EASY: f64 = 10.0;
const W_VIBE_ACTION: f64 = 18.0;
const W_VIBE_WEAK: f64 = 4.0;
const W_MOBILITY_PENALTY: f64 = -8.0;
const W_MOBILITY_OK: f64 = 4.0;
const W_RAIN_OK: f64 = 2.0;

/// Always-on tag bonuses applied after the rule sequence.
const TAG_BONUSES: &[(&str, f64)] = &[("photo", 2.5), ("free", 3.0)];

/// Travel threshold under which an item counts as "very close".
const CLOSE_TRAVEL_MINUTES: u32 = 15;
/// Travel ceiling under which the user is considered to want proximity.
const CLOSE_CEILING_MINUTES: u32 = 30;
/// Travel time from which a car-free approach becomes a burden.
const CAR_FREE_BURDEN_MINUTES: u32 = 30;

/// One ranking result: a catalog item with its score and justifications.
///
/// Scores are additive and only comparable within the call that produced
/// them. The borrow ties each result to the catalog snapshot it was ranked
/// against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem<'a> {
    /// Accumulated score, rounded to two decimal places.
    pub score: f64,
    /// Up to [`MAX_REASONS`] justifications in rule-firing order.
    pub reasons: Vec<&'static str>,
    /// The ranked catalog entry.
    pub item: &'a Item,
}

/// Running score and justification list for one item.
#[derive(Debug, Default)]
struct Tally {
    score: f64,
    reasons: Vec<&'static str>,
}

impl Tally {
    #[expect(
        clippy::float_arithmetic,
        reason = "rule weights accumulate additively by design"
    )]
    fn add(&mut self, weight: f64) {
        self.score += weight;
    }

    fn add_with_reason(&mut self, weight: f64, why: &'static str) {
        self.add(weight);
        self.reasons.push(why);
    }

    fn into_scored(mut self, item: &Item) -> ScoredItem<'_> {
        self.reasons.truncate(MAX_REASONS);
        ScoredItem {
            score: round_to_cents(self.score),
            reasons: self.reasons,
            item,
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "scores are rounded to two decimals for stable presentation"
)]
fn round_to_cents(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Rank the catalog against a query and return the top results.
///
/// `limit` is clamped to `1..=`[`MAX_RESULTS`]; out-of-range values are
/// never an error. The result is sorted by score descending with ties kept
/// in catalog order, and an empty or fully filtered catalog yields an empty
/// vector.
///
/// # Examples
/// ```
/// use outing_core::{recommend, Catalog, Item, Query, Slug, Vibe};
///
/// let catalog = Catalog::new(vec![
///     Item::new(Slug::new("rope-park")?, "Rope park").with_tags(["action"]),
///     Item::new(Slug::new("tea-house")?, "Tea house").with_tags(["calm"]),
/// ]);
/// let query = Query::new().with_time_window(0, 0).with_vibe(Vibe::Action);
///
/// let ranked = recommend(&catalog, &query, 10);
/// assert_eq!(ranked.first().map(|r| r.item.slug.as_str()), Some("rope-park"));
/// # Ok::<(), outing_core::SlugError>(())
/// ```
#[must_use]
pub fn recommend<'a>(catalog: &'a Catalog, query: &Query, limit: usize) -> Vec<ScoredItem<'a>> {
    let limit = limit.clamp(1, MAX_RESULTS);
    let mut ranked: Vec<ScoredItem<'a>> = catalog
        .iter()
        .filter_map(|item| score_item(item, query))
        .collect();
    // Stable sort: equal scores keep their catalog order.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

/// Apply the full rule sequence to one item; `None` means a hard filter
/// dropped it.
fn score_item<'a>(item: &'a Item, query: &Query) -> Option<ScoredItem<'a>> {
    let mut tally = Tally::default();
    score_duration(item, query, &mut tally)?;
    score_travel(item, query, &mut tally)?;
    score_setting(item, query, &mut tally)?;
    score_budget(item, query, &mut tally)?;
    score_kids(item, query, &mut tally)?;
    score_vibe(item, query, &mut tally);
    score_mobility(item, query, &mut tally);
    score_bonuses(item, query, &mut tally);
    Some(tally.into_scored(item))
}

/// Hard when a time window is stated: the intervals must overlap. Full
/// containment of the item's interval in the window scores higher than a
/// partial overlap.
fn score_duration(item: &Item, query: &Query, tally: &mut Tally) -> Option<()> {
    if !query.has_time_window() {
        return Some(());
    }
    let window = query.time_window();
    if !item.duration.overlaps(&window) {
        return None;
    }
    if item.duration.contained_in(&window) {
        tally.add_with_reason(W_TIME_CONTAINED, reason::TIME_FITS_VERY_WELL);
    } else {
        tally.add_with_reason(W_TIME_OVERLAP, reason::TIME_FITS_IN_GENERAL);
    }
    Some(())
}

/// Hard on the travel ceiling, soft on proximity.
fn score_travel(item: &Item, query: &Query, tally: &mut Tally) -> Option<()> {
    let travel_min = item.travel_from.min_minutes;
    if travel_min > query.max_travel_minutes {
        return None;
    }
    if travel_min <= CLOSE_TRAVEL_MINUTES && query.max_travel_minutes <= CLOSE_CEILING_MINUTES {
        tally.add_with_reason(W_TRAVEL_CLOSE, reason::VERY_CLOSE_BY);
    } else if travel_min <= query.max_travel_minutes {
        tally.add(W_TRAVEL_OK);
    }
    Some(())
}

/// Hard when a concrete setting is stated: the item must carry the tag.
fn score_setting(item: &Item, query: &Query, tally: &mut Tally) -> Option<()> {
    match query.setting {
        None | Some(Setting::Any) => Some(()),
        Some(setting) => {
            if !item.has_tag(setting.as_str()) {
                return None;
            }
            tally.add_with_reason(W_SETTING, reason::SETTING_FITS);
            Some(())
        }
    }
}

/// Hard when a budget is stated and the item's cost is known to exceed it;
/// otherwise rewards free and in-budget items, mildly rewards unknown cost.
fn score_budget(item: &Item, query: &Query, tally: &mut Tally) -> Option<()> {
    let Some(budget) = query.max_eur_per_person else {
        return Some(());
    };
    let item_eur = item.cost.max_eur_per_person;
    if item_eur > 0 && item_eur > budget {
        return None;
    }
    if item_eur == 0 && item.cost.kind == CostKind::Free {
        tally.add_with_reason(W_COST_FREE, reason::FREE);
    } else if item_eur == 0 {
        tally.add(W_COST_UNKNOWN);
    } else {
        tally.add_with_reason(W_COST_IN_BUDGET, reason::BUDGET_FITS);
    }
    Some(())
}

/// Hard when the user explicitly brings children: the item must be tagged
/// `kids-ok`.
fn score_kids(item: &Item, query: &Query, tally: &mut Tally) -> Option<()> {
    if !query.requires_kids_ok() {
        return Some(());
    }
    if !item.has_tag("kids-ok") {
        return None;
    }
    tally.add_with_reason(W_KIDS, reason::FAMILY_FRIENDLY);
    Some(())
}

/// Soft vibe match on the `calm`/`active`/`action` tags; never filters.
fn score_vibe(item: &Item, query: &Query, tally: &mut Tally) {
    let Some(vibe) = query.vibe else {
        return;
    };
    match vibe {
        Vibe::Calm => {
            if item.has_tag("calm") {
                tally.add_with_reason(W_VIBE_STRONG, reason::CALM_VIBE_FITS);
            } else {
                tally.add(W_VIBE_WEAK);
            }
        }
        Vibe::Easy => {
            if item.has_any_tag(["calm", "active"]) {
                tally.add(W_VIBE_EASY);
            } else {
                tally.add(W_VIBE_WEAK);
            }
        }
        Vibe::Sporty => {
            if item.has_tag("active") {
                tally.add_with_reason(W_VIBE_STRONG, reason::ACTIVITY_LEVEL_FITS);
            } else {
                tally.add(W_VIBE_WEAK);
            }
        }
        Vibe::Action => {
            if item.has_tag("action") {
                tally.add_with_reason(W_VIBE_ACTION, reason::ACTION_VIBE_FITS);
            } else {
                tally.add(W_VIBE_WEAK);
            }
        }
    }
}

/// Soft realism check: a long approach without a car costs points.
fn score_mobility(item: &Item, query: &Query, tally: &mut Tally) {
    if query.modes.is_empty() {
        return;
    }
    if query.prefers_car_free() && item.travel_from.min_minutes >= CAR_FREE_BURDEN_MINUTES {
        tally.add_with_reason(W_MOBILITY_PENALTY, reason::CAR_FREE_EFFORT);
    } else {
        tally.add(W_MOBILITY_OK);
    }
}

/// Always-on niceness bonuses; the rain bonus only applies when the user is
/// not set on being outdoors.
fn score_bonuses(item: &Item, query: &Query, tally: &mut Tally) {
    for (tag, weight) in TAG_BONUSES {
        if item.has_tag(tag) {
            tally.add(*weight);
        }
    }
    let sheltered_ok = matches!(
        query.setting,
        None | Some(Setting::Indoor | Setting::Mixed | Setting::Any)
    );
    if item.has_tag("rain-ok") && sheltered_ok {
        tally.add(W_RAIN_OK);
    }
}
