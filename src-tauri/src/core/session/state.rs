//! Session State Module
//!
//! Implements the widget's state container and its event-application logic.
//! Every operation is a pure transform on the container: on success the
//! state advances and a list of [`StateChange`]s describes what moved; on
//! rejection the state is left untouched and the error is a user-facing
//! notice, never a fatal condition.

use serde::{Deserialize, Serialize};
use specta::Type;
use tracing::debug;

use crate::core::{
    captions::{CaptionEntry, CaptionTrack},
    settings::{OverlapPolicy, WidgetSettings},
    timecode::parse_timecode,
    CaptionId, CoreError, CoreResult, MediaSource, TimeSec,
};

// =============================================================================
// Session Metadata
// =============================================================================

/// Session metadata (transient; discarded with the session)
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMeta {
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
    /// Last modified timestamp (ISO 8601)
    pub modified_at: String,
}

impl SessionMeta {
    pub fn new() -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            created_at: now.clone(),
            modified_at: now,
        }
    }

    /// Updates the modified timestamp
    pub fn touch(&mut self) {
        self.modified_at = chrono::Utc::now().to_rfc3339();
    }
}

impl Default for SessionMeta {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Caption Draft
// =============================================================================

/// The pending caption form: text plus start/end timecode fields.
///
/// Mirrors the three inputs of the authoring UI. Raw strings are kept as
/// typed so the UI can echo them back; they are only parsed at submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct CaptionDraft {
    /// Caption text
    pub text: String,
    /// Start timecode string ("HH:MM:SS")
    pub start: String,
    /// End timecode string ("HH:MM:SS")
    pub end: String,
}

impl CaptionDraft {
    /// Resets all fields to empty.
    pub fn clear(&mut self) {
        self.text.clear();
        self.start.clear();
        self.end.clear();
    }
}

// =============================================================================
// Session Events and State Changes
// =============================================================================

/// Input events the widget reacts to.
///
/// User actions arrive from the UI surface; `PositionReported` arrives from
/// the playback bridge at an engine-determined cadence.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SessionEvent {
    /// The source URL field changed
    SourceEdited { url: String },
    /// The caption text field changed
    DraftTextEdited { text: String },
    /// The start timecode field changed
    DraftStartEdited { timecode: String },
    /// The end timecode field changed
    DraftEndEdited { timecode: String },
    /// The user submitted the pending caption form
    CaptionSubmitted,
    /// The playback engine reported the current position
    PositionReported { seconds: TimeSec },
}

/// State change descriptions returned from event application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StateChange {
    /// The media source changed (`None` means cleared)
    SourceChanged { url: Option<String> },
    /// The pending caption form changed
    DraftChanged,
    /// A caption was appended to the track
    CaptionAdded { caption_id: CaptionId },
    /// The playback position advanced or jumped
    PositionChanged { seconds: TimeSec },
    /// The derived active caption transitioned.
    ///
    /// Never produced by [`SessionState::apply`] itself — the session layer
    /// appends it when the derived query's answer changes between applies.
    ActiveCaptionChanged {
        caption_id: Option<CaptionId>,
        text: String,
    },
}

// =============================================================================
// Session State
// =============================================================================

/// In-memory widget state: source, draft, caption track, playback position.
///
/// Created empty at widget initialization, grows by one caption per
/// successful submission, and is discarded on teardown. Single-threaded by
/// design: callers serialize `apply` invocations on their event loop, so a
/// position report always observes the track as of the most recently
/// completed submission.
#[derive(Clone, Debug)]
pub struct SessionState {
    /// Session metadata
    pub meta: SessionMeta,
    /// Widget configuration (normalized at construction)
    pub settings: WidgetSettings,
    /// Currently loaded media source, if any
    pub source: Option<MediaSource>,
    /// Pending caption form fields
    pub draft: CaptionDraft,
    /// The caption track
    pub track: CaptionTrack,
    /// Last reported playback position in seconds
    pub position_sec: TimeSec,
}

impl SessionState {
    /// Creates a new empty session state.
    pub fn new(mut settings: WidgetSettings) -> Self {
        settings.normalize();
        Self {
            meta: SessionMeta::new(),
            settings,
            source: None,
            draft: CaptionDraft::default(),
            track: CaptionTrack::new(),
            position_sec: 0.0,
        }
    }

    /// Applies a single event to the state.
    ///
    /// On success the returned changes describe every transition that
    /// happened. On failure the state is guaranteed unchanged.
    pub fn apply(&mut self, event: SessionEvent) -> CoreResult<Vec<StateChange>> {
        let changes = match event {
            SessionEvent::SourceEdited { url } => self.apply_source_edited(url)?,
            SessionEvent::DraftTextEdited { text } => {
                self.draft.text = text;
                vec![StateChange::DraftChanged]
            }
            SessionEvent::DraftStartEdited { timecode } => {
                self.draft.start = timecode;
                vec![StateChange::DraftChanged]
            }
            SessionEvent::DraftEndEdited { timecode } => {
                self.draft.end = timecode;
                vec![StateChange::DraftChanged]
            }
            SessionEvent::CaptionSubmitted => self.apply_caption_submitted()?,
            SessionEvent::PositionReported { seconds } => self.apply_position_reported(seconds)?,
        };

        self.meta.touch();
        Ok(changes)
    }

    fn apply_source_edited(&mut self, url: String) -> CoreResult<Vec<StateChange>> {
        let trimmed = url.trim();
        self.source = if trimmed.is_empty() {
            None
        } else {
            Some(MediaSource::new(trimmed))
        };

        Ok(vec![StateChange::SourceChanged {
            url: self.source.as_ref().map(|s| s.url.clone()),
        }])
    }

    fn apply_caption_submitted(&mut self) -> CoreResult<Vec<StateChange>> {
        // Missing-input checks come first so the user is told which field to
        // fill rather than shown a parse error for an empty string.
        if self.draft.text.trim().is_empty() {
            return Err(CoreError::MissingInput("caption text"));
        }
        if self.draft.start.trim().is_empty() {
            return Err(CoreError::MissingInput("start time"));
        }
        if self.draft.end.trim().is_empty() {
            return Err(CoreError::MissingInput("end time"));
        }

        let start_sec = parse_timecode(&self.draft.start)?;
        let end_sec = parse_timecode(&self.draft.end)?;

        let entry = CaptionEntry::new(&self.draft.text, start_sec, end_sec)?;

        if self.settings.behavior.overlap_policy == OverlapPolicy::Reject {
            if let Some(existing) = self.track.find_overlap(&entry) {
                return Err(CoreError::CaptionOverlap {
                    existing_id: existing.id.clone(),
                    new_start: start_sec,
                    new_end: end_sec,
                });
            }
        }

        let caption_id = entry.id.clone();
        debug!(
            caption_id = %caption_id,
            start_sec,
            end_sec,
            track_len = self.track.len() + 1,
            "Caption added"
        );
        self.track.push(entry);

        let mut changes = vec![StateChange::CaptionAdded { caption_id }];
        if self.settings.behavior.clear_draft_on_add {
            self.draft.clear();
            changes.push(StateChange::DraftChanged);
        }

        Ok(changes)
    }

    fn apply_position_reported(&mut self, seconds: TimeSec) -> CoreResult<Vec<StateChange>> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(CoreError::InvalidPosition(seconds));
        }

        self.position_sec = seconds;
        Ok(vec![StateChange::PositionChanged { seconds }])
    }

    // =========================================================================
    // Derived Queries
    // =========================================================================

    /// Returns the caption active at the last reported playback position.
    ///
    /// A plain derived query over `(track, position_sec)` — the caller
    /// decides when to re-invoke it (typically on every position report).
    pub fn active_caption(&self) -> Option<&CaptionEntry> {
        self.track.active_caption_at(self.position_sec)
    }

    /// Returns the active caption's text, or the empty string when no
    /// caption matches. Matches the display contract of the original widget.
    pub fn active_caption_text(&self) -> &str {
        self.active_caption().map(|c| c.text.as_str()).unwrap_or("")
    }

    /// Replaces the widget settings, normalizing host-supplied values.
    pub fn update_settings(&mut self, mut settings: WidgetSettings) {
        settings.normalize();
        self.settings = settings;
        self.meta.touch();
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(WidgetSettings::default())
    }
}

// =============================================================================
// Tests
// =============================================================================
