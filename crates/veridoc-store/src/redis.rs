//! Redis-compatible store operations.
//!
//! [`RedisPool`] wraps a [`fred::prelude::Client`] and provides the
//! typed primitives the recognition store composes: hash records with
//! atomic per-field increments, and sorted-set indexes with optional
//! insert-only-if-absent semantics. Key patterns are defined in
//! `keys`.

use std::collections::HashMap;

use fred::prelude::*;

use crate::error::StoreError;

/// Connection handle to a Redis-compatible instance.
///
/// Constructed once per process and passed into every store component;
/// there is no global connection state.
#[derive(Clone)]
pub struct RedisPool {
    client: Client,
}

impl RedisPool {
    /// Connect to the store at the given URL.
    ///
    /// The URL should follow the Redis URL scheme:
    /// `redis://host:port` or `redis://host:port/db`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the URL cannot be parsed.
    /// Returns [`StoreError::Unavailable`] if the connection fails.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let config =
            Config::from_url(url).map_err(|e| StoreError::Config(format!("invalid Redis URL: {e}")))?;

        let client = Builder::from_config(config).build()?;
        client.init().await?;

        tracing::info!("Connected to Redis");
        Ok(Self { client })
    }

    /// Write all fields of a hash record at `key` (HSET).
    ///
    /// Existing fields with the same names are overwritten; other
    /// fields are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the write fails.
    pub async fn hash_set_all(
        &self,
        key: &str,
        fields: HashMap<&'static str, String>,
    ) -> Result<(), StoreError> {
        let _: u64 = self.client.hset(key, fields).await?;
        Ok(())
    }

    /// Read all fields of the hash record at `key` (HGETALL).
    ///
    /// A missing key reads as an empty map; callers decide whether that
    /// means "not found".
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the read fails.
    pub async fn hash_get_all(&self, key: &str) -> Result<HashMap<String, String>, StoreError> {
        let fields: HashMap<String, String> = self.client.hgetall(key).await?;
        Ok(fields)
    }

    /// Atomically add `delta` to the integer field `name` of the hash
    /// at `key` (HINCRBY), creating the field at zero if absent.
    ///
    /// Concurrent increments of the same field are safe and commute.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the increment fails.
    pub async fn hash_incr_by(
        &self,
        key: &str,
        name: &'static str,
        delta: i64,
    ) -> Result<i64, StoreError> {
        let value: i64 = self.client.hincrby(key, name, delta).await?;
        Ok(value)
    }

    /// Insert `member` with `score` into the sorted set at `key` (ZADD),
    /// updating the score if the member already exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the write fails.
    pub async fn sorted_set_insert(
        &self,
        key: &str,
        score: i64,
        member: &str,
    ) -> Result<(), StoreError> {
        let _: u64 = self
            .client
            .zadd(key, None, None, false, false, (score_value(score), member))
            .await?;
        Ok(())
    }

    /// Insert `member` with `score` into the sorted set at `key` only
    /// if it is not already present (ZADD NX). Duplicate inserts are
    /// no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the write fails.
    pub async fn sorted_set_insert_nx(
        &self,
        key: &str,
        score: i64,
        member: &str,
    ) -> Result<(), StoreError> {
        let _: u64 = self
            .client
            .zadd(
                key,
                Some(SetOptions::NX),
                None,
                false,
                false,
                (score_value(score), member),
            )
            .await?;
        Ok(())
    }

    /// Read every member of the sorted set at `key` in ascending score
    /// order (ZRANGE 0 -1).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the read fails.
    pub async fn sorted_set_members(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let members: Vec<String> = self
            .client
            .zrange(key, 0_i64, -1_i64, None, false, None, false)
            .await?;
        Ok(members)
    }

    /// Return a reference to the underlying [`Client`].
    pub const fn client(&self) -> &Client {
        &self.client
    }
}

/// Sorted-set scores are IEEE doubles; unix-second timestamps are well
/// within the 53-bit range doubles represent exactly.
#[allow(clippy::cast_precision_loss)]
const fn score_value(score: i64) -> f64 {
    score as f64
}
