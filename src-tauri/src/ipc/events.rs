//! Tauri Event Emission Module
//!
//! Broadcasts widget state changes to the frontend via Tauri's event system.
//! Events are emitted after successful command execution to keep the UI in
//! sync without a second round trip.

use serde::{Deserialize, Serialize};
use specta::Type;
use tauri::{AppHandle, Emitter};

use crate::core::session::StateChange;
use crate::core::TimeSec;

// =============================================================================
// Event Types
// =============================================================================

/// Event names used for frontend communication
pub mod event_names {
    /// Media source changed (loaded or cleared)
    pub const SOURCE_CHANGED: &str = "source:changed";
    /// Pending caption form changed
    pub const DRAFT_CHANGED: &str = "draft:changed";
    /// A caption was appended to the track
    pub const CAPTION_ADDED: &str = "caption:added";
    /// Playback position report applied
    pub const PLAYBACK_POSITION: &str = "playback:position";
    /// The active caption transitioned
    pub const ACTIVE_CAPTION_CHANGED: &str = "caption:active-changed";
}

// =============================================================================
// Event Payloads
// =============================================================================

/// Source changed event payload
#[derive(Clone, Debug, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct SourceChangedEvent {
    /// New source URL (`None` means cleared)
    pub url: Option<String>,
}

/// Caption added event payload
#[derive(Clone, Debug, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct CaptionAddedEvent {
    /// ID of the appended caption
    pub caption_id: String,
}

/// Playback position event payload
#[derive(Clone, Debug, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackPositionEvent {
    /// Position in seconds
    pub seconds: TimeSec,
}

/// Active caption transition event payload
#[derive(Clone, Debug, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct ActiveCaptionChangedEvent {
    /// ID of the now-active caption, if any
    pub caption_id: Option<String>,
    /// Active caption text, or empty
    pub text: String,
}

// =============================================================================
// Event Emitter
// =============================================================================

/// Event emitter for broadcasting widget state changes
pub struct EventEmitter;

impl EventEmitter {
    /// Emits one event per state change.
    pub fn emit_changes(app: &AppHandle, changes: &[StateChange]) -> Result<(), String> {
        for change in changes {
            match change {
                StateChange::SourceChanged { url } => {
                    let event = SourceChangedEvent { url: url.clone() };
                    app.emit(event_names::SOURCE_CHANGED, &event)
                        .map_err(|e| format!("Failed to emit source changed event: {}", e))?;
                }
                StateChange::DraftChanged => {
                    app.emit(event_names::DRAFT_CHANGED, &())
                        .map_err(|e| format!("Failed to emit draft changed event: {}", e))?;
                }
                StateChange::CaptionAdded { caption_id } => {
                    let event = CaptionAddedEvent {
                        caption_id: caption_id.clone(),
                    };
                    app.emit(event_names::CAPTION_ADDED, &event)
                        .map_err(|e| format!("Failed to emit caption added event: {}", e))?;
                }
                StateChange::PositionChanged { seconds } => {
                    let event = PlaybackPositionEvent { seconds: *seconds };
                    app.emit(event_names::PLAYBACK_POSITION, &event)
                        .map_err(|e| format!("Failed to emit playback position event: {}", e))?;
                }
                StateChange::ActiveCaptionChanged { caption_id, text } => {
                    let event = ActiveCaptionChangedEvent {
                        caption_id: caption_id.clone(),
                        text: text.clone(),
                    };
                    app.emit(event_names::ACTIVE_CAPTION_CHANGED, &event)
                        .map_err(|e| {
                            format!("Failed to emit active caption changed event: {}", e)
                        })?;
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_caption_event_serialization() {
        let event = ActiveCaptionChangedEvent {
            caption_id: Some("cap_01HZ".to_string()),
            text: "Hello".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("captionId"));
        assert!(json.contains("Hello"));
    }

    #[test]
    fn cleared_source_event_serializes_null() {
        let event = SourceChangedEvent { url: None };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("null"));
    }
}
