//! Core entity structs for the recognition event store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::day::day_floor;
use crate::enums::DocumentType;
use crate::ids::{AppId, DocumentId, RecognitionId, UserId};

/// A single document recognition attempt.
///
/// Recognitions are created once, are write-only after creation, and are
/// never mutated or deleted. The `id` is caller-generated and must be
/// unique; saving two recognitions with the same id is a precondition
/// violation with undefined behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recognition {
    /// Unique identifier, assigned at creation.
    pub id: RecognitionId,
    /// Event instant (seconds resolution).
    pub time: DateTime<Utc>,
    /// Business metric in cents.
    pub amount: i64,
    /// The subject user.
    pub user_id: UserId,
    /// The application that submitted the recognition.
    pub app_id: AppId,
    /// The submitted document.
    pub document_id: DocumentId,
    /// Class of the submitted document.
    pub document_type: DocumentType,
    /// Recognition outcome.
    pub verified: bool,
}

impl Recognition {
    /// The UTC calendar-day bucket this recognition aggregates into.
    pub fn day(&self) -> DateTime<Utc> {
        day_floor(self.time)
    }
}

/// Per-owner, per-UTC-calendar-day running summary of recognitions.
///
/// For a given owner and day, `success + failed` equals the number of
/// recognitions recorded for that owner on that day, and `amount` equals
/// the sum of their amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionDay {
    /// Midnight-truncated UTC timestamp identifying the bucket.
    pub day: DateTime<Utc>,
    /// Running sum of recognition amounts in this bucket.
    pub amount: i64,
    /// Running count of verified recognitions.
    pub success: i64,
    /// Running count of unverified recognitions.
    pub failed: i64,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample_at(time: Option<DateTime<Utc>>) -> Option<Recognition> {
        time.map(|time| Recognition {
            id: RecognitionId::new(),
            time,
            amount: 250,
            user_id: UserId::new(),
            app_id: AppId::new(),
            document_id: DocumentId::new(),
            document_type: DocumentType::Passport,
            verified: true,
        })
    }

    #[test]
    fn recognition_day_matches_floor_of_time() {
        let time = Utc.with_ymd_and_hms(2020, 8, 18, 1, 0, 0).single();
        let recognition = sample_at(time);
        assert_eq!(
            recognition.map(|r| r.day()),
            Utc.with_ymd_and_hms(2020, 8, 18, 0, 0, 0).single()
        );
    }

    #[test]
    fn recognition_roundtrip_serde() {
        let time = Utc.with_ymd_and_hms(2020, 8, 18, 1, 0, 0).single();
        let recognition = sample_at(time);
        let json = recognition
            .as_ref()
            .and_then(|r| serde_json::to_string(r).ok());
        let restored = json
            .as_deref()
            .and_then(|j| serde_json::from_str::<Recognition>(j).ok());
        assert_eq!(restored, recognition);
    }
}
