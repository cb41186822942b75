use juris_core::{Timestamp, RENEWAL_PERIOD_DAYS};

/// Renewal window in seconds (365 days).
pub const RENEWAL_PERIOD_SECS: u64 = RENEWAL_PERIOD_DAYS * 86_400;

/// Whether a consent decision recorded at `recorded` needs re-prompting at
/// `now`: true iff the record is absent or strictly older than the renewal
/// window. Pure and total.
///
/// A record timestamped in the future reads as age zero and does not
/// require renewal.
pub fn needs_renewal_at(recorded: Option<Timestamp>, now: Timestamp, period_secs: u64) -> bool {
    match recorded {
        None => true,
        Some(t) => now.seconds_since(&t) > period_secs,
    }
}

/// [`needs_renewal_at`] against the current instant and the standard
/// 365-day window.
pub fn needs_renewal(recorded: Option<Timestamp>) -> bool {
    needs_renewal_at(recorded, Timestamp::now(), RENEWAL_PERIOD_SECS)
}
