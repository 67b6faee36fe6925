//! Store key patterns.
//!
//! All per-owner data hangs off the owner id; recognition records are
//! global because their ids are unique.
//!
//! # Key Patterns
//!
//! | Pattern | Type | Description |
//! |---------|------|-------------|
//! | `recognition:{id}` | Hash | One recognition record, field per attribute |
//! | `user:{owner}:recognitions` | Zset | Event index: score = event time, member = id |
//! | `user:{owner}:recognitions:day:{day}` | Hash | Day aggregate (`time`, `amount`, `success`, `failed`) |
//! | `user:{owner}:recognitions:days` | Zset | Day index: score = member = day unix time |
//!
//! Day bucket keys use the unix seconds of UTC midnight, both as the
//! hash key suffix and as the day index score/member.

use veridoc_types::{OwnerId, RecognitionId};

/// Key of a single recognition record hash.
pub(crate) fn recognition(id: RecognitionId) -> String {
    format!("recognition:{id}")
}

/// Key of an owner's event index (recognition ids ordered by time).
pub(crate) fn owner_recognitions(owner: OwnerId) -> String {
    format!("user:{owner}:recognitions")
}

/// Key of one owner day-aggregate hash for the given day bucket.
pub(crate) fn owner_recognition_day(owner: OwnerId, day_unix: i64) -> String {
    format!("user:{owner}:recognitions:day:{day_unix}")
}

/// Key of an owner's day index (day buckets ordered by day).
pub(crate) fn owner_recognition_days(owner: OwnerId) -> String {
    format!("user:{owner}:recognitions:days")
}
