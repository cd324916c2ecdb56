//! URL-safe identifiers for catalog entries.
//!
//! A [`Slug`] is validated once at the boundary so downstream components can
//! treat it as a well-formed, lowercase token. The rules mirror the portal's
//! routing layer: ASCII lowercase letters, digits, and hyphens only, between
//! two and eighty-two characters, and never starting or ending with a hyphen.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum accepted slug length in bytes.
pub const SLUG_MIN_LEN: usize = 2;

/// Maximum accepted slug length in bytes.
pub const SLUG_MAX_LEN: usize = 82;

/// A validated, URL-safe catalog identifier.
///
/// # Examples
/// ```
/// use outing_core::Slug;
///
/// let slug = Slug::new("forest-climb")?;
/// assert_eq!(slug.as_str(), "forest-climb");
/// assert!(Slug::new("Forest Climb").is_err());
/// # Ok::<(), outing_core::SlugError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

/// Errors returned by [`Slug::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    /// The slug was shorter or longer than the accepted range.
    #[error("slug must be between {SLUG_MIN_LEN} and {SLUG_MAX_LEN} characters, got {len}")]
    Length {
        /// Number of bytes in the rejected value.
        len: usize,
    },
    /// The slug contained a character outside `[a-z0-9-]`.
    #[error("slug may only contain lowercase letters, digits, and hyphens, found {found:?}")]
    InvalidCharacter {
        /// First offending character.
        found: char,
    },
    /// The slug started or ended with a hyphen.
    #[error("slug must not start or end with a hyphen")]
    HyphenAtEdge,
}

impl Slug {
    /// Validate and construct a [`Slug`].
    ///
    /// # Errors
    /// Returns [`SlugError`] when the value is out of range, contains a
    /// disallowed character, or sits a hyphen at either edge.
    pub fn new(raw: impl Into<String>) -> Result<Self, SlugError> {
        let raw = raw.into();
        let len = raw.len();
        if !(SLUG_MIN_LEN..=SLUG_MAX_LEN).contains(&len) {
            return Err(SlugError::Length { len });
        }
        if let Some(found) = raw
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(SlugError::InvalidCharacter { found });
        }
        if raw.starts_with('-') || raw.ends_with('-') {
            return Err(SlugError::HyphenAtEdge);
        }
        Ok(Self(raw))
    }

    /// Return the slug as a `&str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("go")]
    #[case("forest-climb")]
    #[case("a1-b2-c3")]
    #[case("00")]
    fn accepts_well_formed_slugs(#[case] raw: &str) {
        let slug = Slug::new(raw).expect("slug should be accepted");
        assert_eq!(slug.as_str(), raw);
    }

    #[rstest]
    #[case("", SlugError::Length { len: 0 })]
    #[case("x", SlugError::Length { len: 1 })]
    #[case("Forest", SlugError::InvalidCharacter { found: 'F' })]
    #[case("forest climb", SlugError::InvalidCharacter { found: ' ' })]
    #[case("café", SlugError::InvalidCharacter { found: 'é' })]
    #[case("-edge", SlugError::HyphenAtEdge)]
    #[case("edge-", SlugError::HyphenAtEdge)]
    fn rejects_malformed_slugs(#[case] raw: &str, #[case] expected: SlugError) {
        assert_eq!(Slug::new(raw).expect_err("slug should be rejected"), expected);
    }

    #[rstest]
    fn rejects_overlong_slug() {
        let raw = "a".repeat(SLUG_MAX_LEN + 1);
        assert!(matches!(Slug::new(raw), Err(SlugError::Length { len: 83 })));
    }

    #[rstest]
    fn accepts_maximum_length_slug() {
        let raw = "a".repeat(SLUG_MAX_LEN);
        assert!(Slug::new(raw).is_ok());
    }

    #[rstest]
    fn serde_round_trips_and_validates() {
        let slug: Slug = serde_json::from_str("\"city-walk\"").expect("valid slug should parse");
        assert_eq!(slug.as_str(), "city-walk");
        assert!(serde_json::from_str::<Slug>("\"-bad\"").is_err());
    }
}
