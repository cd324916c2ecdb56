//! Catalog entries and their ranking-relevant attributes.
//!
//! An [`Item`] is one experience in the catalog. Display fields (title,
//! summary, emoji tags, image) are opaque to ranking; the engine only reads
//! tags, the duration and travel intervals, and the cost record. All numeric
//! fields are plain integers here because coercion of malformed source data
//! happens once at catalog-load time, never inside the engine.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::Slug;

/// Number of minutes in one day; the default upper bound for open intervals.
pub const FULL_DAY_MINUTES: u32 = 1440;

/// Tag tokens attached to an item, membership-only.
pub type Tags = HashSet<String>;

/// A closed interval of minutes.
///
/// Used both for plausible visit durations and for travel times from the
/// reference origin.
///
/// # Examples
/// ```
/// use outing_core::MinutesRange;
///
/// let visit = MinutesRange::new(40, 50);
/// let window = MinutesRange::new(30, 90);
/// assert!(visit.overlaps(&window));
/// assert!(visit.contained_in(&window));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinutesRange {
    /// Lower bound in minutes.
    pub min_minutes: u32,
    /// Upper bound in minutes.
    pub max_minutes: u32,
}

impl MinutesRange {
    /// Construct a range from explicit bounds.
    #[must_use]
    pub const fn new(min_minutes: u32, max_minutes: u32) -> Self {
        Self {
            min_minutes,
            max_minutes,
        }
    }

    /// The widest plausible visit window: zero minutes to a full day.
    #[must_use]
    pub const fn full_day() -> Self {
        Self::new(0, FULL_DAY_MINUTES)
    }

    /// Whether two closed intervals share at least one minute.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        !(self.max_minutes < other.min_minutes || self.min_minutes > other.max_minutes)
    }

    /// Whether this interval sits entirely inside `other`.
    #[must_use]
    pub const fn contained_in(&self, other: &Self) -> bool {
        self.min_minutes >= other.min_minutes && self.max_minutes <= other.max_minutes
    }
}

impl Default for MinutesRange {
    fn default() -> Self {
        Self::full_day()
    }
}

/// How an item charges its visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostKind {
    /// No entry fee at all.
    Free,
    /// A fee always applies.
    Paid,
    /// Partly free, partly paid.
    Mixed,
    /// The source data did not state a cost model.
    #[default]
    Unknown,
}

impl CostKind {
    /// Return the lowercase wire name of the cost kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Paid => "paid",
            Self::Mixed => "mixed",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for CostKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CostKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "paid" => Ok(Self::Paid),
            "mixed" => Ok(Self::Mixed),
            "unknown" => Ok(Self::Unknown),
            other => Err(format!("unknown cost kind '{other}'")),
        }
    }
}

/// Cost attributes of an item.
///
/// `max_eur_per_person` is `0` when the amount is unknown or the item is
/// free; the [`kind`](Cost::kind) field disambiguates the two.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cost {
    /// Charging model declared by the source data.
    #[serde(rename = "type")]
    pub kind: CostKind,
    /// Upper bound in whole euros per person; `0` when unknown or free.
    pub max_eur_per_person: u32,
    /// Free-form pricing notes for display.
    pub notes: String,
}

impl Cost {
    /// A free item with no notes.
    #[must_use]
    pub fn free() -> Self {
        Self {
            kind: CostKind::Free,
            ..Self::default()
        }
    }

    /// A paid item capped at `max_eur_per_person` euros.
    #[must_use]
    pub fn paid(max_eur_per_person: u32) -> Self {
        Self {
            kind: CostKind::Paid,
            max_eur_per_person,
            notes: String::new(),
        }
    }
}

/// One experience in the catalog, immutable during a ranking pass.
///
/// # Examples
/// ```
/// use outing_core::{Item, MinutesRange, Slug};
///
/// let item = Item::new(Slug::new("forest-climb")?, "Forest climbing garden")
///     .with_tags(["outdoor", "active", "kids-ok"])
///     .with_duration(MinutesRange::new(90, 180))
///     .with_travel_from(MinutesRange::new(20, 35));
/// assert!(item.has_tag("kids-ok"));
/// # Ok::<(), outing_core::SlugError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier, usually equal to the slug.
    pub id: String,
    /// URL-safe identifier.
    pub slug: Slug,
    /// Display title.
    pub title: String,
    /// Short display summary.
    pub summary: String,
    /// Key of the single category the item belongs to.
    pub main_category: String,
    /// Membership-only tag tokens driving the soft and hard rules.
    pub tags: Tags,
    /// Ordered display-only emoji list.
    pub emoji_tags: Vec<String>,
    /// Plausible visit duration.
    pub duration: MinutesRange,
    /// Travel time from the reference origin.
    pub travel_from: MinutesRange,
    /// Cost attributes.
    pub cost: Cost,
    /// Optional display image path.
    pub image: Option<String>,
}

impl Item {
    /// Construct an item with the given slug and title; the id defaults to
    /// the slug and every other field to its documented default.
    #[must_use]
    pub fn new(slug: Slug, title: impl Into<String>) -> Self {
        Self {
            id: slug.as_str().to_owned(),
            slug,
            title: title.into(),
            summary: String::new(),
            main_category: String::new(),
            tags: Tags::new(),
            emoji_tags: Vec::new(),
            duration: MinutesRange::full_day(),
            travel_from: MinutesRange::new(0, 0),
            cost: Cost::default(),
            image: None,
        }
    }

    /// Replace the tag set while returning `self` for chaining.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the visit duration while returning `self` for chaining.
    #[must_use]
    pub fn with_duration(mut self, duration: MinutesRange) -> Self {
        self.duration = duration;
        self
    }

    /// Set the travel interval while returning `self` for chaining.
    #[must_use]
    pub fn with_travel_from(mut self, travel_from: MinutesRange) -> Self {
        self.travel_from = travel_from;
        self
    }

    /// Set the cost record while returning `self` for chaining.
    #[must_use]
    pub fn with_cost(mut self, cost: Cost) -> Self {
        self.cost = cost;
        self
    }

    /// Set the category key while returning `self` for chaining.
    #[must_use]
    pub fn with_category(mut self, main_category: impl Into<String>) -> Self {
        self.main_category = main_category.into();
        self
    }

    /// Set the display summary while returning `self` for chaining.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Whether the item carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Whether the item carries at least one of the given tags.
    #[must_use]
    pub fn has_any_tag<'a>(&self, tags: impl IntoIterator<Item = &'a str>) -> bool {
        tags.into_iter().any(|tag| self.tags.contains(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn slug(raw: &str) -> Slug {
        Slug::new(raw).expect("test slug should be valid")
    }

    #[rstest]
    #[case(MinutesRange::new(30, 60), MinutesRange::new(0, 20), false)]
    #[case(MinutesRange::new(30, 60), MinutesRange::new(60, 90), true)]
    #[case(MinutesRange::new(30, 60), MinutesRange::new(0, 30), true)]
    #[case(MinutesRange::new(0, 10), MinutesRange::new(11, 20), false)]
    fn overlap_is_closed_interval(
        #[case] a: MinutesRange,
        #[case] b: MinutesRange,
        #[case] expected: bool,
    ) {
        assert_eq!(a.overlaps(&b), expected);
        assert_eq!(b.overlaps(&a), expected);
    }

    #[rstest]
    #[case(MinutesRange::new(40, 50), MinutesRange::new(30, 90), true)]
    #[case(MinutesRange::new(30, 90), MinutesRange::new(40, 50), false)]
    #[case(MinutesRange::new(30, 90), MinutesRange::new(30, 90), true)]
    fn containment_includes_bounds(
        #[case] inner: MinutesRange,
        #[case] outer: MinutesRange,
        #[case] expected: bool,
    ) {
        assert_eq!(inner.contained_in(&outer), expected);
    }

    #[rstest]
    fn item_defaults_to_full_day_and_no_travel() {
        let item = Item::new(slug("city-walk"), "City walk");
        assert_eq!(item.duration, MinutesRange::full_day());
        assert_eq!(item.travel_from, MinutesRange::new(0, 0));
        assert_eq!(item.cost.kind, CostKind::Unknown);
        assert_eq!(item.id, "city-walk");
    }

    #[rstest]
    fn tag_membership_checks() {
        let item = Item::new(slug("museum"), "Museum").with_tags(["indoor", "calm"]);
        assert!(item.has_tag("indoor"));
        assert!(!item.has_tag("outdoor"));
        assert!(item.has_any_tag(["outdoor", "calm"]));
        assert!(!item.has_any_tag(["outdoor", "action"]));
    }

    #[rstest]
    fn cost_kind_parses_wire_names() {
        assert_eq!("free".parse::<CostKind>(), Ok(CostKind::Free));
        assert_eq!("mixed".parse::<CostKind>(), Ok(CostKind::Mixed));
        assert!("gratis".parse::<CostKind>().is_err());
    }
}
