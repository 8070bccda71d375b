//! Core types for shutterfeed-core.
//!
//! This module defines the fundamental data structures shared across all
//! pipeline layers: the wire-format [`RawItem`], the derived
//! [`PresentationItem`], and the [`SortKey`] accepted by the query surface.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// A wire record as decoded from the feed endpoint. Immutable once decoded.
///
/// The feed carries more fields than these (description, published,
/// author_id); anything not listed here is ignored at decode time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawItem {
    /// Raw author string in the feed's `email ("Display Name")` form.
    pub author: String,
    /// Item title. The feed omits it for untitled uploads.
    #[serde(default)]
    pub title: Option<String>,
    /// Canonical page URL for the item. Also the seed for the avatar color.
    pub link: String,
    /// Capture timestamp, decoded strictly as RFC 3339 / ISO-8601. An
    /// unparseable date fails the decode of the whole response.
    pub date_taken: DateTime<FixedOffset>,
    /// Space-delimited tag string, possibly empty.
    pub tags: String,
    pub media: Media,
}

/// The `media` object of a feed item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Media {
    /// URL of the medium-sized image.
    pub m: String,
}

/// A display-ready record derived from a [`RawItem`].
///
/// Every field is a pure function of the source item; the list of these is
/// recomputed from the raw list whenever it is accessed, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationItem {
    /// Display name extracted from the quoted span of the raw author string.
    /// Empty when the raw string carries no quoted span.
    pub author_name: String,
    /// First two characters of `author_name` (fewer if the name is shorter).
    /// Stored as-is; renderers uppercase for the avatar.
    pub author_initials: String,
    /// Deterministic avatar color, seeded by `link`.
    pub color: Rgb,
    pub link: String,
    /// Tags split from the raw tag string, each carrying a `#` prefix,
    /// in source order.
    pub tags: Vec<String>,
    pub title: Option<String>,
    /// Image URL, passed through from `media.m`.
    pub image_url: String,
    pub date_taken: DateTime<FixedOffset>,
}

/// An RGB color with fractional channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Build from a 24-bit value: R in bits 16–23, G in 8–15, B in 0–7.
    pub fn from_bits(bits: u32) -> Self {
        Self {
            r: ((bits >> 16) & 0xFF) as f32 / 255.0,
            g: ((bits >> 8) & 0xFF) as f32 / 255.0,
            b: (bits & 0xFF) as f32 / 255.0,
        }
    }

    /// `#rrggbb` form, for terminal output.
    pub fn hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }
}

/// Sort order accepted by the query surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Preserve fetch/filter order.
    #[default]
    Default,
    TitleAsc,
    TitleDesc,
    DateAsc,
    DateDesc,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Default => write!(f, "default"),
            SortKey::TitleAsc => write!(f, "title-asc"),
            SortKey::TitleDesc => write!(f, "title-desc"),
            SortKey::DateAsc => write!(f, "date-asc"),
            SortKey::DateDesc => write!(f, "date-desc"),
        }
    }
}

/// Error returned when parsing a [`SortKey`] from a string fails.
#[derive(Debug, thiserror::Error)]
#[error("unknown sort key {0:?} (expected default, title-asc, title-desc, date-asc, or date-desc)")]
pub struct ParseSortKeyError(String);

impl std::str::FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortKey::Default),
            "title-asc" => Ok(SortKey::TitleAsc),
            "title-desc" => Ok(SortKey::TitleDesc),
            "date-asc" => Ok(SortKey::DateAsc),
            "date-desc" => Ok(SortKey::DateDesc),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}
