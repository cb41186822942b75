use juris_core::ConsentCategory;
use once_cell::sync::Lazy;

/// One classification rule: a name prefix mapped to its category and a
/// human-readable purpose.
#[derive(Debug, Clone, Copy)]
pub struct RegistryEntry {
    pub prefix: &'static str,
    pub category: ConsentCategory,
    pub purpose: &'static str,
}

/// The fixed classification registry. Matching is longest-prefix-first, so
/// `juris_cookie_consent` wins over a hypothetical shorter `juris_` rule.
///
/// This is deliberately a closed table, not an extensible rules DSL.
pub const REGISTRY: &[RegistryEntry] = &[
    // First-party application cookies
    RegistryEntry {
        prefix: "juris_cookie_consent",
        category: ConsentCategory::Necessary,
        purpose: "Stores the user's cookie consent decision",
    },
    RegistryEntry {
        prefix: "juris_consent_timestamp",
        category: ConsentCategory::Necessary,
        purpose: "Records when consent was last given",
    },
    RegistryEntry {
        prefix: "juris_preferences",
        category: ConsentCategory::Preferences,
        purpose: "Stores interface preferences such as layout and density",
    },
    // Supabase auth/session cookies
    RegistryEntry {
        prefix: "sb-",
        category: ConsentCategory::Necessary,
        purpose: "Supabase authentication session",
    },
    // Google Analytics family
    RegistryEntry {
        prefix: "_ga",
        category: ConsentCategory::Analytics,
        purpose: "Google Analytics visitor identification",
    },
    RegistryEntry {
        prefix: "_gid",
        category: ConsentCategory::Analytics,
        purpose: "Google Analytics 24-hour session identification",
    },
    RegistryEntry {
        prefix: "_gat",
        category: ConsentCategory::Analytics,
        purpose: "Google Analytics request throttling",
    },
    RegistryEntry {
        prefix: "_gcl_",
        category: ConsentCategory::Analytics,
        purpose: "Google conversion linker",
    },
    // Advertising / marketing vendors
    RegistryEntry {
        prefix: "_fbp",
        category: ConsentCategory::Marketing,
        purpose: "Facebook Pixel browser identification",
    },
    RegistryEntry {
        prefix: "_fbc",
        category: ConsentCategory::Marketing,
        purpose: "Facebook click attribution",
    },
    RegistryEntry {
        prefix: "fr",
        category: ConsentCategory::Marketing,
        purpose: "Facebook ad delivery and measurement",
    },
    RegistryEntry {
        prefix: "ads_",
        category: ConsentCategory::Marketing,
        purpose: "Advertising network targeting",
    },
    RegistryEntry {
        prefix: "doubleclick",
        category: ConsentCategory::Marketing,
        purpose: "DoubleClick ad serving",
    },
    // Interface preference cookies
    RegistryEntry {
        prefix: "theme_",
        category: ConsentCategory::Preferences,
        purpose: "Remembers the selected color theme",
    },
    RegistryEntry {
        prefix: "lang_",
        category: ConsentCategory::Preferences,
        purpose: "Remembers the selected language",
    },
];

/// Prefixes of cookies the application sets itself. Anything else is
/// treated as third-party.
pub const FIRST_PARTY_PREFIXES: &[&str] = &["juris_", "sb-", "theme_", "lang_"];

/// Registry view ordered longest prefix first, so the most specific rule
/// always wins regardless of declaration order above.
pub static BY_PREFIX_LENGTH: Lazy<Vec<&'static RegistryEntry>> = Lazy::new(|| {
    let mut entries: Vec<&'static RegistryEntry> = REGISTRY.iter().collect();
    entries.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));
    entries
});
