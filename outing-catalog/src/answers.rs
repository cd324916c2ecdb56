//! The answer sheet a visitor submits from the questionnaire.
//!
//! Answers arrive as loosely typed JSON; every field is optional and junk
//! values fall back to the engine's defaults. As with the item records, an
//! explicit `0` for `time_max` or `max_travel` counts as "unstated" and the
//! default applies, mirroring the portal's truthiness-based reads. A stated
//! budget of `0` is kept, so "0 euros" still means free-only.

use std::collections::HashSet;

use outing_core::{
    DEFAULT_MAX_TRAVEL_MINUTES, FULL_DAY_MINUTES, KidAgeGroup, Mode, Query, Setting, Vibe,
};
use serde::Deserialize;

use crate::lenient::{lenient_bool, lenient_string, lenient_strings, lenient_u32};

/// Raw questionnaire answers, tolerant of missing and malformed fields.
///
/// # Examples
/// ```
/// use outing_catalog::AnswerSheet;
///
/// let sheet: AnswerSheet = serde_json::from_str(
///     r#"{ "time_min": 60, "time_max": 240, "vibe": "calm", "kids": true }"#,
/// )?;
/// let query = sheet.into_query();
/// assert_eq!(query.time_window(), outing_core::MinutesRange::new(60, 240));
/// assert_eq!(query.kids_selected, Some(true));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnswerSheet {
    #[serde(deserialize_with = "lenient_u32")]
    time_min: Option<u32>,
    #[serde(deserialize_with = "lenient_u32")]
    time_max: Option<u32>,
    #[serde(deserialize_with = "lenient_u32")]
    max_travel: Option<u32>,
    #[serde(deserialize_with = "lenient_strings")]
    modes: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_string")]
    kid_age_group: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    kids: Option<bool>,
    #[serde(deserialize_with = "lenient_string")]
    vibe: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    setting: Option<String>,
    #[serde(rename = "max_eur_pp", deserialize_with = "lenient_u32")]
    max_eur_per_person: Option<u32>,
}

impl AnswerSheet {
    /// Convert the raw answers into a typed [`Query`], applying defaults.
    #[must_use]
    pub fn into_query(self) -> Query {
        let modes: HashSet<Mode> = self
            .modes
            .unwrap_or_default()
            .iter()
            .filter_map(|raw| raw.parse().ok())
            .collect();

        Query {
            time_min_minutes: self.time_min.unwrap_or(0),
            time_max_minutes: self
                .time_max
                .filter(|minutes| *minutes != 0)
                .unwrap_or(FULL_DAY_MINUTES),
            max_travel_minutes: self
                .max_travel
                .filter(|minutes| *minutes != 0)
                .unwrap_or(DEFAULT_MAX_TRAVEL_MINUTES),
            modes,
            kid_age_group: parse_or_none::<KidAgeGroup>(self.kid_age_group.as_deref()),
            kids_selected: self.kids,
            vibe: parse_or_none::<Vibe>(self.vibe.as_deref()),
            setting: parse_or_none::<Setting>(self.setting.as_deref()),
            max_eur_per_person: self.max_eur_per_person,
        }
    }
}

fn parse_or_none<T: std::str::FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|value| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use outing_core::MinutesRange;
    use rstest::rstest;
    use serde_json::json;

    fn query_from(value: serde_json::Value) -> Query {
        let sheet: AnswerSheet =
            serde_json::from_value(value).expect("answer sheet should always deserialize");
        sheet.into_query()
    }

    #[rstest]
    fn empty_answers_take_the_defaults() {
        let query = query_from(json!({}));
        assert_eq!(query.time_window(), MinutesRange::new(0, FULL_DAY_MINUTES));
        assert_eq!(query.max_travel_minutes, DEFAULT_MAX_TRAVEL_MINUTES);
        assert!(query.modes.is_empty());
        assert_eq!(query.kids_selected, None);
        assert_eq!(query.max_eur_per_person, None);
    }

    #[rstest]
    fn full_answers_map_onto_the_query() {
        let query = query_from(json!({
            "time_min": 60,
            "time_max": 240,
            "max_travel": 45,
            "modes": ["walk", "public", "hoverboard"],
            "kid_age_group": "6-10",
            "kids": true,
            "vibe": "action",
            "setting": "outdoor",
            "max_eur_pp": 30
        }));

        assert_eq!(query.time_window(), MinutesRange::new(60, 240));
        assert_eq!(query.max_travel_minutes, 45);
        assert_eq!(
            query.modes,
            HashSet::from([Mode::Walk, Mode::Public])
        );
        assert_eq!(query.kid_age_group, Some(KidAgeGroup::SixToTen));
        assert_eq!(query.kids_selected, Some(true));
        assert_eq!(query.vibe, Some(Vibe::Action));
        assert_eq!(query.setting, Some(Setting::Outdoor));
        assert_eq!(query.max_eur_per_person, Some(30));
    }

    #[rstest]
    fn zero_time_and_travel_count_as_unstated() {
        let query = query_from(json!({ "time_max": 0, "max_travel": 0 }));
        assert_eq!(query.time_max_minutes, FULL_DAY_MINUTES);
        assert_eq!(query.max_travel_minutes, DEFAULT_MAX_TRAVEL_MINUTES);
    }

    #[rstest]
    fn zero_budget_is_preserved() {
        let query = query_from(json!({ "max_eur_pp": 0 }));
        assert_eq!(query.max_eur_per_person, Some(0));
    }

    #[rstest]
    fn junk_enum_values_collapse_to_none() {
        let query = query_from(json!({
            "vibe": "thrilling",
            "setting": 7,
            "kid_age_group": "teens",
            "kids": "yes"
        }));
        assert_eq!(query.vibe, None);
        assert_eq!(query.setting, None);
        assert_eq!(query.kid_age_group, None);
        assert_eq!(query.kids_selected, None);
    }
}
