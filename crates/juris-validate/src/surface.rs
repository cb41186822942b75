// ---------------------------------------------------------------------------
// UiSurface — what the validator can observe of the surrounding UI
// ---------------------------------------------------------------------------

/// The environment-dependent checks (policy link, preference controls) need
/// visibility into the hosting UI. When no surface is observable — a server
/// or test context — those checks are skipped, not failed.
pub trait UiSurface {
    /// Whether a discoverable link to a cookie/privacy policy exists.
    fn has_policy_link(&self) -> bool;

    /// Whether a discoverable mechanism to change cookie preferences exists.
    fn has_preference_controls(&self) -> bool;
}

/// A fixed-answer surface, for configuration-driven hosts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSurface {
    pub policy_link: bool,
    pub preference_controls: bool,
}

impl UiSurface for StaticSurface {
    fn has_policy_link(&self) -> bool {
        self.policy_link
    }

    fn has_preference_controls(&self) -> bool {
        self.preference_controls
    }
}
