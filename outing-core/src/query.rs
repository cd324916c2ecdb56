//! Typed, defaulted representation of a user's questionnaire answers.
//!
//! A [`Query`] is built once per ranking call by the boundary layer; the
//! engine never mutates it. Absent answers take the documented defaults
//! rather than being rejected.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::item::FULL_DAY_MINUTES;

/// Default travel ceiling in minutes, effectively unbounded.
pub const DEFAULT_MAX_TRAVEL_MINUTES: u32 = 999;

/// Transport modes the user is willing to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// On foot.
    Walk,
    /// Public transport.
    Public,
    /// Bicycle.
    Bike,
    /// Private car.
    Car,
}

impl Mode {
    /// Return the lowercase wire name of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Public => "public",
            Self::Bike => "bike",
            Self::Car => "car",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "walk" => Ok(Self::Walk),
            "public" => Ok(Self::Public),
            "bike" => Ok(Self::Bike),
            "car" => Ok(Self::Car),
            other => Err(format!("unknown transport mode '{other}'")),
        }
    }
}

/// Age bracket of accompanying children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KidAgeGroup {
    /// Ages zero to five.
    #[serde(rename = "0-5")]
    UpToFive,
    /// Ages six to ten.
    #[serde(rename = "6-10")]
    SixToTen,
    /// Ages eleven and up.
    #[serde(rename = "11+")]
    ElevenPlus,
    /// A mix of ages; treated as no firm constraint.
    #[serde(rename = "mixed")]
    Mixed,
}

impl KidAgeGroup {
    /// Return the wire name of the age bracket.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UpToFive => "0-5",
            Self::SixToTen => "6-10",
            Self::ElevenPlus => "11+",
            Self::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for KidAgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for KidAgeGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0-5" => Ok(Self::UpToFive),
            "6-10" => Ok(Self::SixToTen),
            "11+" => Ok(Self::ElevenPlus),
            "mixed" => Ok(Self::Mixed),
            other => Err(format!("unknown kid age group '{other}'")),
        }
    }
}

/// Desired overall energy level of the outing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    /// Quiet, low-stimulus activities.
    Calm,
    /// Relaxed but not necessarily quiet.
    Easy,
    /// Physically active.
    Sporty,
    /// High-adrenaline.
    Action,
}

impl Vibe {
    /// Return the lowercase wire name of the vibe.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Easy => "easy",
            Self::Sporty => "sporty",
            Self::Action => "action",
        }
    }
}

impl std::fmt::Display for Vibe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Vibe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calm" => Ok(Self::Calm),
            "easy" => Ok(Self::Easy),
            "sporty" => Ok(Self::Sporty),
            "action" => Ok(Self::Action),
            other => Err(format!("unknown vibe '{other}'")),
        }
    }
}

/// Preferred indoor/outdoor setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Setting {
    /// Indoors only.
    Indoor,
    /// Outdoors only.
    Outdoor,
    /// A mix of both.
    Mixed,
    /// No preference; never filters.
    Any,
}

impl Setting {
    /// Return the lowercase wire name of the setting.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Indoor => "indoor",
            Self::Outdoor => "outdoor",
            Self::Mixed => "mixed",
            Self::Any => "any",
        }
    }
}

impl std::fmt::Display for Setting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Setting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "indoor" => Ok(Self::Indoor),
            "outdoor" => Ok(Self::Outdoor),
            "mixed" => Ok(Self::Mixed),
            "any" => Ok(Self::Any),
            other => Err(format!("unknown setting '{other}'")),
        }
    }
}

/// One ranking request's worth of user preferences.
///
/// # Examples
/// ```
/// use outing_core::{Query, Setting, Vibe};
///
/// let query = Query::new()
///     .with_time_window(30, 120)
///     .with_vibe(Vibe::Calm)
///     .with_setting(Setting::Indoor);
/// assert_eq!(query.max_travel_minutes, 999);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Lower bound of the desired visit duration, minutes.
    pub time_min_minutes: u32,
    /// Upper bound of the desired visit duration, minutes.
    pub time_max_minutes: u32,
    /// Ceiling on an item's minimum travel time, minutes.
    pub max_travel_minutes: u32,
    /// Acceptable transport modes; empty means unspecified.
    pub modes: HashSet<Mode>,
    /// Age bracket of accompanying children, if stated.
    pub kid_age_group: Option<KidAgeGroup>,
    /// Whether the user explicitly travels with children.
    pub kids_selected: Option<bool>,
    /// Desired energy level, if stated.
    pub vibe: Option<Vibe>,
    /// Preferred setting, if stated.
    pub setting: Option<Setting>,
    /// Budget ceiling in whole euros per person, if stated.
    pub max_eur_per_person: Option<u32>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            time_min_minutes: 0,
            time_max_minutes: FULL_DAY_MINUTES,
            max_travel_minutes: DEFAULT_MAX_TRAVEL_MINUTES,
            modes: HashSet::new(),
            kid_age_group: None,
            kids_selected: None,
            vibe: None,
            setting: None,
            max_eur_per_person: None,
        }
    }
}

impl Query {
    /// Construct a query with every answer at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the desired visit window while returning `self` for chaining.
    #[must_use]
    pub fn with_time_window(mut self, min_minutes: u32, max_minutes: u32) -> Self {
        self.time_min_minutes = min_minutes;
        self.time_max_minutes = max_minutes;
        self
    }

    /// Set the travel ceiling while returning `self` for chaining.
    #[must_use]
    pub fn with_max_travel(mut self, max_travel_minutes: u32) -> Self {
        self.max_travel_minutes = max_travel_minutes;
        self
    }

    /// Replace the transport modes while returning `self` for chaining.
    #[must_use]
    pub fn with_modes(mut self, modes: impl IntoIterator<Item = Mode>) -> Self {
        self.modes = modes.into_iter().collect();
        self
    }

    /// Set the kid age bracket while returning `self` for chaining.
    #[must_use]
    pub fn with_kid_age_group(mut self, group: KidAgeGroup) -> Self {
        self.kid_age_group = Some(group);
        self
    }

    /// State whether children come along while returning `self` for chaining.
    #[must_use]
    pub fn with_kids_selected(mut self, selected: bool) -> Self {
        self.kids_selected = Some(selected);
        self
    }

    /// Set the vibe while returning `self` for chaining.
    #[must_use]
    pub fn with_vibe(mut self, vibe: Vibe) -> Self {
        self.vibe = Some(vibe);
        self
    }

    /// Set the setting while returning `self` for chaining.
    #[must_use]
    pub fn with_setting(mut self, setting: Setting) -> Self {
        self.setting = Some(setting);
        self
    }

    /// Set the budget ceiling while returning `self` for chaining.
    #[must_use]
    pub fn with_budget(mut self, max_eur_per_person: u32) -> Self {
        self.max_eur_per_person = Some(max_eur_per_person);
        self
    }

    /// Whether the user stated any time constraint at all.
    ///
    /// Mirrors the original portal's truthiness check: only a window of
    /// `0..=0` counts as "no constraint".
    #[must_use]
    pub const fn has_time_window(&self) -> bool {
        self.time_min_minutes != 0 || self.time_max_minutes != 0
    }

    /// The visit window as a [`MinutesRange`](crate::MinutesRange).
    #[must_use]
    pub const fn time_window(&self) -> crate::MinutesRange {
        crate::MinutesRange::new(self.time_min_minutes, self.time_max_minutes)
    }

    /// Whether the user's answers demand a family-friendly item.
    ///
    /// Explicitly ticking "kids" or naming a concrete age bracket (anything
    /// but `mixed`) makes the kids rule a hard filter.
    #[must_use]
    pub fn requires_kids_ok(&self) -> bool {
        self.kids_selected == Some(true)
            || matches!(
                self.kid_age_group,
                Some(group) if group != KidAgeGroup::Mixed
            )
    }

    /// Whether the stated modes suggest travelling without a car.
    #[must_use]
    pub fn prefers_car_free(&self) -> bool {
        self.modes.contains(&Mode::Walk) || self.modes.contains(&Mode::Public)
    }
}
