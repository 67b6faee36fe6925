//! Recognition event store operations.
//!
//! Persists individual recognition events, maintains the per-owner
//! event and day indexes, keeps per-day aggregates current on every
//! save, and reconstructs all of them from the store on read.

use chrono::{DateTime, Utc};
use veridoc_types::{OwnerId, Recognition, RecognitionDay, RecognitionId, day_floor};

use crate::error::StoreError;
use crate::keys;
use crate::record::{self, field};
use crate::redis::RedisPool;

/// Operations over recognition records and their day aggregates.
pub struct RecognitionStore<'a> {
    pool: &'a RedisPool,
}

impl<'a> RecognitionStore<'a> {
    /// Create a new store bound to a connection handle.
    pub const fn new(pool: &'a RedisPool) -> Self {
        Self { pool }
    }

    /// Persist a recognition and fold it into the owner's indexes and
    /// day aggregate.
    ///
    /// Performs, as one logical unit:
    /// 1. write the full record hash at `recognition:{id}`,
    /// 2. insert the id into the owner's event index scored by event time,
    /// 3. upsert the day aggregate for the event's UTC day bucket
    ///    (idempotent `time` field, atomic `amount` and outcome counter
    ///    increments),
    /// 4. insert the day bucket into the owner's day index if absent.
    ///
    /// The steps are not wrapped in a cross-key transaction: the
    /// aggregate increments are atomic and commute under concurrent
    /// writers, but a day-index entry can become visible before the
    /// event record completes.
    ///
    /// Recognition ids must be caller-generated and unique; saving the
    /// same id twice is a precondition violation with undefined
    /// behavior.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if any store write fails.
    pub async fn save_recognition(
        &self,
        owner: OwnerId,
        recognition: &Recognition,
    ) -> Result<(), StoreError> {
        let record_key = keys::recognition(recognition.id);
        self.pool
            .hash_set_all(&record_key, record::encode_recognition(recognition))
            .await?;

        self.pool
            .sorted_set_insert(
                &keys::owner_recognitions(owner),
                recognition.time.timestamp(),
                &recognition.id.to_string(),
            )
            .await?;

        self.save_recognition_day(owner, recognition).await?;

        tracing::debug!(id = %recognition.id, owner = %owner, "Saved recognition");
        Ok(())
    }

    /// Upsert the day aggregate and day index for one recognition.
    async fn save_recognition_day(
        &self,
        owner: OwnerId,
        recognition: &Recognition,
    ) -> Result<(), StoreError> {
        let day_unix = recognition.day().timestamp();
        let day_key = keys::owner_recognition_day(owner, day_unix);

        self.pool
            .hash_set_all(&day_key, record::encode_day_marker(day_unix))
            .await?;
        self.pool
            .hash_incr_by(&day_key, field::AMOUNT, recognition.amount)
            .await?;
        let outcome = if recognition.verified {
            field::SUCCESS
        } else {
            field::FAILED
        };
        self.pool.hash_incr_by(&day_key, outcome, 1).await?;

        self.pool
            .sorted_set_insert_nx(
                &keys::owner_recognition_days(owner),
                day_unix,
                &day_unix.to_string(),
            )
            .await?;
        Ok(())
    }

    /// Load a single recognition by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record exists for the id.
    /// Returns [`StoreError::CorruptRecord`] if the stored record is
    /// missing fields or cannot be parsed.
    /// Returns [`StoreError::Unavailable`] if the read fails.
    pub async fn load_recognition(&self, id: RecognitionId) -> Result<Recognition, StoreError> {
        let key = keys::recognition(id);
        let fields = self.pool.hash_get_all(&key).await?;
        if fields.is_empty() {
            return Err(StoreError::NotFound(key));
        }
        record::decode_recognition(id, &key, &fields)
    }

    /// Load the day aggregate for one owner and day bucket.
    ///
    /// The instant is floored to its UTC day bucket before lookup, so
    /// any instant within the day addresses the same aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no events were ever recorded
    /// for that owner and day.
    /// Returns [`StoreError::CorruptRecord`] if the stored aggregate
    /// cannot be parsed.
    /// Returns [`StoreError::Unavailable`] if the read fails.
    pub async fn load_recognition_day(
        &self,
        owner: OwnerId,
        day: DateTime<Utc>,
    ) -> Result<RecognitionDay, StoreError> {
        let key = keys::owner_recognition_day(owner, day_floor(day).timestamp());
        let fields = self.pool.hash_get_all(&key).await?;
        if fields.is_empty() {
            return Err(StoreError::NotFound(key));
        }
        record::decode_recognition_day(&key, &fields)
    }

    /// Load all recognitions for an owner, ascending by event time.
    ///
    /// Order is defined by the owner's event index; each entry is
    /// reconstructed via [`Self::load_recognition`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CorruptRecord`] if an index entry is not a
    /// recognition id, and any error [`Self::load_recognition`] returns.
    pub async fn list_recognitions(&self, owner: OwnerId) -> Result<Vec<Recognition>, StoreError> {
        let index_key = keys::owner_recognitions(owner);
        let members = self.pool.sorted_set_members(&index_key).await?;

        let mut recognitions = Vec::with_capacity(members.len());
        for member in &members {
            let id: RecognitionId = member.parse().map_err(|e| StoreError::CorruptRecord {
                key: index_key.clone(),
                reason: format!("index entry is not a recognition id ({e}): {member}"),
            })?;
            recognitions.push(self.load_recognition(id).await?);
        }
        Ok(recognitions)
    }

    /// Load all day aggregates for an owner, ascending by day.
    ///
    /// Order is defined by the owner's day index; each entry is
    /// reconstructed via [`Self::load_recognition_day`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CorruptRecord`] if an index entry is not a
    /// unix timestamp, and any error [`Self::load_recognition_day`]
    /// returns.
    pub async fn list_recognition_days(
        &self,
        owner: OwnerId,
    ) -> Result<Vec<RecognitionDay>, StoreError> {
        let index_key = keys::owner_recognition_days(owner);
        let members = self.pool.sorted_set_members(&index_key).await?;

        let mut days = Vec::with_capacity(members.len());
        for member in &members {
            let unix: i64 = member.parse().map_err(|e| StoreError::CorruptRecord {
                key: index_key.clone(),
                reason: format!("index entry is not a unix timestamp ({e}): {member}"),
            })?;
            let day = DateTime::from_timestamp(unix, 0).ok_or_else(|| {
                StoreError::CorruptRecord {
                    key: index_key.clone(),
                    reason: format!("index entry is out of range: {unix}"),
                }
            })?;
            days.push(self.load_recognition_day(owner, day).await?);
        }
        Ok(days)
    }
}
