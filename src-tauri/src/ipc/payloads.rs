//! IPC Payloads
//!
//! DTOs crossing the backend/frontend boundary. All types are exported to
//! TypeScript via specta.

use serde::{Deserialize, Serialize};
use specta::Type;

use crate::core::captions::CaptionEntry;
use crate::core::session::CaptionDraft;
use crate::core::timecode::format_timecode;
use crate::core::TimeSec;
use crate::WidgetSession;

// =============================================================================
// Caption DTOs
// =============================================================================

/// A caption entry as the frontend renders it
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct CaptionDto {
    /// Caption ID
    pub id: String,
    /// Caption text
    pub text: String,
    /// Start time in whole seconds
    pub start_sec: u32,
    /// End time in whole seconds
    pub end_sec: u32,
    /// Start time formatted as "HH:MM:SS"
    pub start_timecode: String,
    /// End time formatted as "HH:MM:SS"
    pub end_timecode: String,
    /// Ready-made list line: `HH:MM:SS - HH:MM:SS: "text"`
    pub label: String,
}

impl From<&CaptionEntry> for CaptionDto {
    fn from(entry: &CaptionEntry) -> Self {
        let start_timecode = format_timecode(entry.start_sec);
        let end_timecode = format_timecode(entry.end_sec);
        let label = format!("{} - {}: \"{}\"", start_timecode, end_timecode, entry.text);

        Self {
            id: entry.id.clone(),
            text: entry.text.clone(),
            start_sec: entry.start_sec,
            end_sec: entry.end_sec,
            start_timecode,
            end_timecode,
            label,
        }
    }
}

/// The caption active at the current playback position.
///
/// `text` is the empty string when no caption matches, matching the widget's
/// display contract.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct ActiveCaptionDto {
    /// ID of the active caption, if any
    pub caption_id: Option<String>,
    /// Active caption text, or empty
    pub text: String,
}

impl From<&WidgetSession> for ActiveCaptionDto {
    fn from(session: &WidgetSession) -> Self {
        let active = session.state.active_caption();
        Self {
            caption_id: active.map(|c| c.id.clone()),
            text: active.map(|c| c.text.clone()).unwrap_or_default(),
        }
    }
}

// =============================================================================
// Session DTOs
// =============================================================================

/// The pending caption form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct DraftDto {
    /// Caption text
    pub text: String,
    /// Start timecode string
    pub start: String,
    /// End timecode string
    pub end: String,
}

impl From<&CaptionDraft> for DraftDto {
    fn from(draft: &CaptionDraft) -> Self {
        Self {
            text: draft.text.clone(),
            start: draft.start.clone(),
            end: draft.end.clone(),
        }
    }
}

/// Snapshot of the widget session for the frontend
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfoDto {
    /// Currently loaded source URL, if any
    pub source_url: Option<String>,
    /// Last reported playback position in seconds
    pub position_sec: TimeSec,
    /// Number of captions on the track
    pub caption_count: usize,
    /// Pending caption form
    pub draft: DraftDto,
}

impl From<&WidgetSession> for SessionInfoDto {
    fn from(session: &WidgetSession) -> Self {
        Self {
            source_url: session.state.source.as_ref().map(|s| s.url.clone()),
            position_sec: session.state.position_sec,
            caption_count: session.state.track.len(),
            draft: DraftDto::from(&session.state.draft),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
