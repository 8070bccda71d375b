//! Normalizer — derives a [`PresentationItem`] from each [`RawItem`].
//!
//! Every function here is pure and per-item; there is no cross-item state.
//! Malformed input never errors — an author string without a quoted span
//! yields an empty name, an empty tag string yields an empty tag list.

use crate::types::{PresentationItem, RawItem, Rgb};
use regex::Regex;
use std::sync::OnceLock;

/// Multiplier for the avatar color hash; also sizes the overflow guard.
const COLOR_CONSTANT: i64 = 131;
const MAX_SAFE_HASH: i64 = i64::MAX / COLOR_CONSTANT;

fn quoted_span() -> &'static Regex {
    static QUOTED: OnceLock<Regex> = OnceLock::new();
    QUOTED.get_or_init(|| Regex::new(r#""([^"]*)""#).expect("quoted-span pattern must compile"))
}

/// Extract the display name from a raw feed author string.
///
/// The feed formats authors as `nobody@flickr.com ("Display Name")`; the
/// name is the text inside the first pair of double quotes. No quoted span
/// means no name — the empty string, never an error.
pub fn extract_author(raw: &str) -> String {
    quoted_span()
        .captures(raw)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

/// First two characters of the author name, counted by Unicode scalar.
/// Shorter names return what is available. Uppercasing happens at render
/// time, not here.
pub fn author_initials(name: &str) -> String {
    name.chars().take(2).collect()
}

/// Split a space-delimited tag string into `#`-prefixed tags, source order
/// preserved. Empty segments (doubled, leading, or trailing spaces) are
/// dropped, so no tag is ever empty or missing its prefix.
pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(' ')
        .filter(|segment| !segment.is_empty())
        .map(|segment| format!("#{segment}"))
        .collect()
}

/// Deterministic avatar color from a seed string.
///
/// Runs the classic string-hash `h = v + (h << 5) - h` over the Unicode
/// scalars of the seed, dividing `h` by [`COLOR_CONSTANT`] whenever it
/// exceeds `i64::MAX / COLOR_CONSTANT` so no update can overflow. The low
/// 24 bits of `|h|` become the RGB channels. The same seed always yields
/// the same color within this implementation; bit parity with other
/// implementations of the hash is not promised.
pub fn color_for(text: &str) -> Rgb {
    let mut hash: i64 = 0;
    for scalar in text.chars() {
        if hash > MAX_SAFE_HASH {
            hash /= COLOR_CONSTANT;
        }
        hash = scalar as i64 + ((hash << 5) - hash);
    }
    Rgb::from_bits((hash.abs() % (256 * 256 * 256)) as u32)
}

/// Derive the presentation record for one raw item.
pub fn normalize(raw: &RawItem) -> PresentationItem {
    let author_name = extract_author(&raw.author);
    PresentationItem {
        author_initials: author_initials(&author_name),
        color: color_for(&raw.link),
        link: raw.link.clone(),
        tags: parse_tags(&raw.tags),
        title: raw.title.clone(),
        image_url: raw.media.m.clone(),
        date_taken: raw.date_taken,
        author_name,
    }
}
