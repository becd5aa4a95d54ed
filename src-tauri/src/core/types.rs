//! Videocue Core Type Definitions
//!
//! Defines fundamental types used throughout the project.
//! Types crossing the IPC boundary are exported to TypeScript via specta.

use serde::{Deserialize, Serialize};
use specta::Type;

// =============================================================================
// ID Types
// =============================================================================

/// Caption unique identifier (ULID)
pub type CaptionId = String;

// =============================================================================
// Time Types
// =============================================================================

/// Playback time in seconds (floating point, engine precision)
pub type TimeSec = f64;

// =============================================================================
// Media Source
// =============================================================================

/// A media source reference handed to the playback bridge.
///
/// The widget treats the reference as opaque; resolving and decoding it is
/// the playback engine's concern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct MediaSource {
    /// Source URL or engine-specific reference
    pub url: String,
}

impl MediaSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Returns true if the reference is blank (nothing to load)
    pub fn is_blank(&self) -> bool {
        self.url.trim().is_empty()
    }
}
