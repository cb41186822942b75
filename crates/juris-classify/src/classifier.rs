use crate::registry::{BY_PREFIX_LENGTH, FIRST_PARTY_PREFIXES};
use juris_core::ConsentCategory;

/// Purpose reported for any cookie the registry cannot place.
pub const UNKNOWN_PURPOSE: &str = "Unknown purpose - requires classification";

/// The result of classifying one cookie name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: ConsentCategory,
    pub purpose: &'static str,
    pub is_first_party: bool,
}

/// Classify a cookie name against the static registry.
///
/// Longest-prefix-first, first match wins. Pure and total: an unmatched
/// name classifies as [`ConsentCategory::Unknown`] rather than failing.
/// First-party status comes from a separate fixed prefix set. Matching is
/// byte-wise over the ASCII names RFC 6265 permits; no locale folding.
pub fn classify(name: &str) -> Classification {
    let is_first_party = FIRST_PARTY_PREFIXES.iter().any(|p| name.starts_with(p));

    for entry in BY_PREFIX_LENGTH.iter() {
        if name.starts_with(entry.prefix) {
            return Classification {
                category: entry.category,
                purpose: entry.purpose,
                is_first_party,
            };
        }
    }

    Classification {
        category: ConsentCategory::Unknown,
        purpose: UNKNOWN_PURPOSE,
        is_first_party: false,
    }
}

/// Filter a set of live cookie names down to those classified into the
/// given category. Supports the store's refused-category deletion.
pub fn names_in_category<'a, I>(names: I, category: ConsentCategory) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter(|name| classify(name).category == category)
        .map(|name| name.to_string())
        .collect()
}
