//! Cache key derivation for search and detail payloads

use crate::domain::place::PlaceId;
use crate::domain::user::UserId;

/// Sentinel for an absent component, distinct from any real value because
/// real components are bracketed.
const ABSENT: &str = "-";

/// Key for a search payload, derived from the exact (name, min_rating)
/// input pair.
///
/// `name` is the already-trimmed filter (absent when empty); `min_rating`
/// is the raw query string, taken verbatim. Different textual spellings of
/// the same number ("4" vs "4.0") therefore cache separately - a known,
/// accepted limitation.
pub fn search_key(name: Option<&str>, min_rating: Option<&str>) -> String {
    format!(
        "place_search:{}:{}",
        component(name),
        component(min_rating)
    )
}

/// Key for a place detail payload, per (place, viewer) pair - the payload
/// depends on the viewer because their own review is moved to the front.
pub fn detail_key(place_id: PlaceId, viewer: UserId) -> String {
    format!("place_detail:{}:{}", place_id, viewer)
}

fn component(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("[{}]", v),
        None => ABSENT.to_string(),
    }
}
