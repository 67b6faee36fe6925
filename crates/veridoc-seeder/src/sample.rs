//! Fixed sample data for the demonstration run.
//!
//! The sample set covers one owner and two submitting applications over
//! three consecutive UTC days in August 2020, cycling through every
//! document type with alternating outcomes. Amounts are drawn uniformly
//! from the configured range; everything else is fixed so the read-back
//! summaries are predictable.

use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;
use veridoc_types::{
    AppId, DocumentId, DocumentType, OwnerId, Recognition, RecognitionId, UserId,
};

use crate::config::SeedConfig;
use crate::error::SeederError;

/// A freshly generated owner together with its sample recognitions.
pub(crate) struct SampleSet {
    /// Owner all sample recognitions belong to.
    pub(crate) owner: OwnerId,
    /// The sample recognitions, in blueprint order.
    pub(crate) recognitions: Vec<Recognition>,
}

/// Blueprint rows for the first application:
/// (UTC day of August 2020, document type, verified).
const FIRST_APP_ROWS: [(u32, DocumentType, bool); 4] = [
    (17, DocumentType::Passport, false),
    (18, DocumentType::IdCard, true),
    (18, DocumentType::DriverLicense, false),
    (19, DocumentType::ProofOfAddress, true),
];

/// Blueprint rows for the second application.
const SECOND_APP_ROWS: [(u32, DocumentType, bool); 4] = [
    (17, DocumentType::Passport, false),
    (17, DocumentType::IdCard, true),
    (18, DocumentType::DriverLicense, false),
    (18, DocumentType::ProofOfAddress, true),
];

/// Build the sample set for one fresh owner.
///
/// # Errors
///
/// Returns [`SeederError::Sample`] if a blueprint date cannot be
/// represented (which would mean a broken blueprint table).
pub(crate) fn build(config: &SeedConfig) -> Result<SampleSet, SeederError> {
    let owner = OwnerId::new();
    let first_app = AppId::new();
    let second_app = AppId::new();
    let mut rng = rand::rng();

    let mut recognitions =
        Vec::with_capacity(FIRST_APP_ROWS.len().saturating_add(SECOND_APP_ROWS.len()));
    for (app_id, rows) in [(first_app, &FIRST_APP_ROWS), (second_app, &SECOND_APP_ROWS)] {
        for &(day, document_type, verified) in rows {
            recognitions.push(Recognition {
                id: RecognitionId::new(),
                time: sample_time(day)?,
                amount: rng.random_range(config.min_amount..=config.max_amount),
                user_id: UserId::new(),
                app_id,
                document_id: DocumentId::new(),
                document_type,
                verified,
            });
        }
    }

    Ok(SampleSet {
        owner,
        recognitions,
    })
}

/// The sample instant for a given August 2020 day: 01:00:00 UTC.
fn sample_time(day: u32) -> Result<DateTime<Utc>, SeederError> {
    Utc.with_ymd_and_hms(2020, 8, day, 1, 0, 0)
        .single()
        .ok_or_else(|| SeederError::Sample {
            message: format!("invalid sample date: 2020-08-{day}"),
        })
}
