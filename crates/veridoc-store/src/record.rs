//! Record codec between domain entities and flat hash fields.
//!
//! Recognition records and day aggregates are stored as Redis hashes
//! with one string field per attribute. This module is the single
//! encode/decode boundary: key-format concerns stay here, the domain
//! entities stay store-agnostic.
//!
//! Decoding surfaces every missing or unparseable field as
//! [`StoreError::CorruptRecord`], with one exception: the counter
//! fields of a day aggregate (`amount`, `success`, `failed`) are
//! materialized lazily by `HINCRBY`, so an absent counter reads as
//! zero. A counter that is present but not an integer is corrupt.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use veridoc_types::{DocumentType, Recognition, RecognitionDay, RecognitionId};

use crate::error::StoreError;

/// Hash field names shared by the write and read paths.
pub(crate) mod field {
    /// Event instant (unix seconds); on day aggregates, the day bucket.
    pub(crate) const TIME: &str = "time";
    /// Recognition amount in cents; on day aggregates, the running sum.
    pub(crate) const AMOUNT: &str = "amount";
    /// Subject user id.
    pub(crate) const USER_ID: &str = "user_id";
    /// Submitting application id.
    pub(crate) const APP_ID: &str = "app_id";
    /// Submitted document id.
    pub(crate) const DOCUMENT_ID: &str = "document_id";
    /// Document class tag.
    pub(crate) const DOCUMENT_TYPE: &str = "document_type";
    /// Recognition outcome (`true`/`false`).
    pub(crate) const VERIFIED: &str = "verified";
    /// Day-aggregate running count of verified recognitions.
    pub(crate) const SUCCESS: &str = "success";
    /// Day-aggregate running count of unverified recognitions.
    pub(crate) const FAILED: &str = "failed";
}

/// Encode a recognition into its hash field map.
pub(crate) fn encode_recognition(recognition: &Recognition) -> HashMap<&'static str, String> {
    HashMap::from([
        (field::TIME, recognition.time.timestamp().to_string()),
        (field::AMOUNT, recognition.amount.to_string()),
        (field::USER_ID, recognition.user_id.to_string()),
        (field::APP_ID, recognition.app_id.to_string()),
        (field::DOCUMENT_ID, recognition.document_id.to_string()),
        (
            field::DOCUMENT_TYPE,
            document_type_tag(recognition.document_type).to_owned(),
        ),
        (field::VERIFIED, recognition.verified.to_string()),
    ])
}

/// Decode a recognition record read back from the store.
///
/// The id is not stored in the hash; it comes from the key the caller
/// looked up.
pub(crate) fn decode_recognition(
    id: RecognitionId,
    key: &str,
    fields: &HashMap<String, String>,
) -> Result<Recognition, StoreError> {
    Ok(Recognition {
        id,
        time: required_unix_time(key, fields, field::TIME)?,
        amount: required_i64(key, fields, field::AMOUNT)?,
        user_id: required_id(key, fields, field::USER_ID)?,
        app_id: required_id(key, fields, field::APP_ID)?,
        document_id: required_id(key, fields, field::DOCUMENT_ID)?,
        document_type: document_type_from_tag(key, required(key, fields, field::DOCUMENT_TYPE)?)?,
        verified: required_bool(key, fields, field::VERIFIED)?,
    })
}

/// The single idempotent field written on every day-aggregate upsert.
///
/// The counters are bumped separately via `HINCRBY`.
pub(crate) fn encode_day_marker(day_unix: i64) -> HashMap<&'static str, String> {
    HashMap::from([(field::TIME, day_unix.to_string())])
}

/// Decode a day-aggregate record read back from the store.
pub(crate) fn decode_recognition_day(
    key: &str,
    fields: &HashMap<String, String>,
) -> Result<RecognitionDay, StoreError> {
    Ok(RecognitionDay {
        day: required_unix_time(key, fields, field::TIME)?,
        amount: counter_or_zero(key, fields, field::AMOUNT)?,
        success: counter_or_zero(key, fields, field::SUCCESS)?,
        failed: counter_or_zero(key, fields, field::FAILED)?,
    })
}

/// Store-side string tag of a document type.
pub(crate) const fn document_type_tag(document_type: DocumentType) -> &'static str {
    match document_type {
        DocumentType::Passport => "Passport",
        DocumentType::IdCard => "IdCard",
        DocumentType::DriverLicense => "DriverLicense",
        DocumentType::ProofOfAddress => "ProofOfAddress",
    }
}

fn document_type_from_tag(key: &str, tag: &str) -> Result<DocumentType, StoreError> {
    match tag {
        "Passport" => Ok(DocumentType::Passport),
        "IdCard" => Ok(DocumentType::IdCard),
        "DriverLicense" => Ok(DocumentType::DriverLicense),
        "ProofOfAddress" => Ok(DocumentType::ProofOfAddress),
        other => Err(corrupt(key, format!("unknown document type `{other}`"))),
    }
}

fn corrupt(key: &str, reason: String) -> StoreError {
    StoreError::CorruptRecord {
        key: key.to_owned(),
        reason,
    }
}

fn required<'a>(
    key: &str,
    fields: &'a HashMap<String, String>,
    name: &'static str,
) -> Result<&'a str, StoreError> {
    fields
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| corrupt(key, format!("missing field `{name}`")))
}

fn required_i64(
    key: &str,
    fields: &HashMap<String, String>,
    name: &'static str,
) -> Result<i64, StoreError> {
    let raw = required(key, fields, name)?;
    raw.parse()
        .map_err(|e| corrupt(key, format!("field `{name}` is not an integer ({e}): {raw}")))
}

fn required_unix_time(
    key: &str,
    fields: &HashMap<String, String>,
    name: &'static str,
) -> Result<DateTime<Utc>, StoreError> {
    let unix = required_i64(key, fields, name)?;
    DateTime::from_timestamp(unix, 0)
        .ok_or_else(|| corrupt(key, format!("field `{name}` is out of range: {unix}")))
}

fn required_bool(
    key: &str,
    fields: &HashMap<String, String>,
    name: &'static str,
) -> Result<bool, StoreError> {
    match required(key, fields, name)? {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(corrupt(key, format!("field `{name}` is not a boolean: {other}"))),
    }
}

fn required_id<T>(
    key: &str,
    fields: &HashMap<String, String>,
    name: &'static str,
) -> Result<T, StoreError>
where
    T: core::str::FromStr,
    T::Err: core::fmt::Display,
{
    let raw = required(key, fields, name)?;
    raw.parse()
        .map_err(|e| corrupt(key, format!("field `{name}` is not a UUID ({e}): {raw}")))
}

fn counter_or_zero(
    key: &str,
    fields: &HashMap<String, String>,
    name: &'static str,
) -> Result<i64, StoreError> {
    match fields.get(name) {
        None => Ok(0),
        Some(raw) => raw
            .parse()
            .map_err(|e| corrupt(key, format!("field `{name}` is not an integer ({e}): {raw}"))),
    }
}
