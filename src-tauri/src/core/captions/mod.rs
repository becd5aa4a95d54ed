//! Caption Track Module
//!
//! Holds the user-authored caption list and answers "what caption is active
//! at time T".
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Caption Track                               │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  models.rs     - CaptionEntry, CaptionTrack, point-in-time query │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The track is append-only: entries are validated at construction, inserted
//! in submission order, and never edited or removed for the lifetime of a
//! session. Overlapping entries are allowed; the query resolves ties by
//! preferring the earliest-inserted match.

mod models;

pub use models::{CaptionEntry, CaptionTrack};
