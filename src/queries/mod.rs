pub mod club_queries;
pub mod membership_queries;
pub mod person_queries;

use crate::model::Profile;

/// Case-insensitive fragment match on the display name. Works for either
/// entity kind through the Profile capability.
pub fn name_matches<P: Profile>(entity: &P, fragment: &str) -> bool {
    let fragment = fragment.trim().to_lowercase();
    if fragment.is_empty() {
        return false;
    }
    entity.name().as_str().to_lowercase().contains(&fragment)
}

/// Case-insensitive tag match.
pub fn has_tag<P: Profile>(entity: &P, tag: &str) -> bool {
    let tag = tag.trim();
    entity.tags().iter().any(|t| t.as_str().eq_ignore_ascii_case(tag))
}
