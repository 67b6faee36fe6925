//! Redis-backed recognition event store.
//!
//! Persists individual document recognition events and maintains
//! derived per-owner, per-UTC-calendar-day aggregates. The store
//! composes four key families: one hash per recognition record, one
//! hash per day aggregate, and two per-owner sorted-set indexes (event
//! ids by event time, day buckets by day).
//!
//! ```text
//! save_recognition
//!     |
//!     +-- HSET  recognition:{id}                        (full record)
//!     +-- ZADD  user:{owner}:recognitions               (event index)
//!     +-- HSET/HINCRBY user:{owner}:recognitions:day:{day}  (aggregate)
//!     +-- ZADD NX user:{owner}:recognitions:days        (day index)
//! ```
//!
//! # Modules
//!
//! - [`redis`] -- Connection handle and typed store primitives
//! - `keys` -- Key patterns
//! - `record` -- Encode/decode boundary between entities and hashes
//! - [`recognition_store`] -- Save, load, and list operations
//! - [`error`] -- Shared error type

pub mod error;
mod keys;
mod record;
pub mod recognition_store;
pub mod redis;

// Re-export primary types for convenience.
pub use error::StoreError;
pub use recognition_store::RecognitionStore;
pub use redis::RedisPool;
