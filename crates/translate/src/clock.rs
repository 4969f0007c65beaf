//! Wall-clock access for translators.
//!
//! Session ids and defaulted timestamps are the only non-pure outputs of a
//! translation. Both are read through [`Clock`] so tests can pin them with
//! [`FixedClock`].

use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// `sess_<unix-nanoseconds>`.
    fn session_id(&self) -> String {
        let now = self.now();
        let nanos = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1_000));
        format!("sess_{nanos}")
    }

    /// Current time as RFC 3339 UTC with second precision, e.g. `2025-01-15T10:30:45Z`.
    fn rfc3339(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Clock fixed at the given unix timestamp in seconds.
    ///
    /// Out-of-range values fall back to the unix epoch.
    pub fn from_unix(secs: i64) -> Self {
        Self(DateTime::from_timestamp(secs, 0).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
