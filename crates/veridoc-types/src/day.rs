//! UTC calendar-day bucketing.
//!
//! The day bucket is the aggregation key for [`RecognitionDay`]
//! records: every event instant maps to the instant at 00:00:00 of the
//! same calendar date in UTC. Truncation is deterministic and
//! timezone-fixed, so two events on the same UTC calendar date always
//! land in the same bucket regardless of the caller's local timezone.
//!
//! [`RecognitionDay`]: crate::structs::RecognitionDay

use chrono::{DateTime, NaiveTime, Utc};

/// Truncate an instant to 00:00:00 of its UTC calendar date.
///
/// Idempotent: truncating an already-truncated instant yields the same
/// instant.
pub fn day_floor(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}
