//! Videocue Core Library
//!
//! An embeddable video-player widget paired with a user-authored caption
//! track: the host supplies a playback engine behind [`core::playback::PlaybackBridge`]
//! and a UI surface; this library owns the caption model, the session state
//! container, and the active-caption query.
//!
//! ## GUI surface
//!
//! The optional `gui` feature compiles a Tauri IPC command/event surface
//! (`ipc` module) for webview frontends. The headless default exposes
//! [`WidgetSession`] directly.

pub mod core;

#[cfg(feature = "gui")]
pub mod ipc;

use crate::core::playback::PlaybackBridge;
use crate::core::session::{SessionEvent, SessionState, StateChange};
use crate::core::settings::WidgetSettings;
use crate::core::{CaptionId, CoreResult, MediaSource, TimeSec};

// =============================================================================
// Widget Session
// =============================================================================

/// One live widget instance: session state plus the playback bridge.
///
/// Hosts funnel UI events and engine position reports through [`apply`]
/// (or the convenience wrappers) on their own event loop; because every
/// transition runs to completion before the next one starts, a position
/// report always observes the caption track as of the most recently
/// completed submission.
///
/// [`apply`]: WidgetSession::apply
pub struct WidgetSession {
    /// Widget state (in-memory, discarded on teardown)
    pub state: SessionState,
    /// The playback engine this session delegates to
    pub bridge: Box<dyn PlaybackBridge>,
    /// Active caption observed by the last transition check
    last_active_id: Option<CaptionId>,
}

impl WidgetSession {
    /// Creates a session with empty state.
    pub fn new(settings: WidgetSettings, bridge: Box<dyn PlaybackBridge>) -> Self {
        Self {
            state: SessionState::new(settings),
            bridge,
            last_active_id: None,
        }
    }

    /// Applies one event, routing source edits through the bridge and
    /// appending an `ActiveCaptionChanged` change whenever the derived
    /// active-caption query flips.
    ///
    /// On rejection neither the state nor the bridge has changed.
    pub fn apply(&mut self, event: SessionEvent) -> CoreResult<Vec<StateChange>> {
        // The bridge sees the source first: if the engine refuses the
        // reference, the widget keeps its previous source.
        if let SessionEvent::SourceEdited { url } = &event {
            let trimmed = url.trim();
            if trimmed.is_empty() {
                self.bridge.unload();
            } else {
                self.bridge.load_source(&MediaSource::new(trimmed))?;
            }
        }

        let mut changes = self.state.apply(event)?;

        // Re-evaluate the derived query after every successful transition:
        // both position reports and submissions can flip the answer.
        if let Some(change) = self.check_active_transition() {
            changes.push(change);
        }

        Ok(changes)
    }

    /// Polls the bridge and applies a position report when one is available.
    ///
    /// Returns no changes while the engine is paused or unloaded.
    pub fn tick(&mut self) -> CoreResult<Vec<StateChange>> {
        match self.bridge.poll_position() {
            Some(seconds) => self.apply(SessionEvent::PositionReported { seconds }),
            None => Ok(vec![]),
        }
    }

    // =========================================================================
    // Convenience Operations
    // =========================================================================

    /// Sets the source URL field (empty clears and unloads).
    pub fn load_source(&mut self, url: &str) -> CoreResult<Vec<StateChange>> {
        self.apply(SessionEvent::SourceEdited {
            url: url.to_string(),
        })
    }

    /// Fills the caption form and submits it in one step.
    ///
    /// On rejection the form keeps the attempted values, exactly as if the
    /// user had typed them and seen the notice.
    pub fn add_caption(
        &mut self,
        text: &str,
        start: &str,
        end: &str,
    ) -> CoreResult<Vec<StateChange>> {
        self.apply(SessionEvent::DraftTextEdited {
            text: text.to_string(),
        })?;
        self.apply(SessionEvent::DraftStartEdited {
            timecode: start.to_string(),
        })?;
        self.apply(SessionEvent::DraftEndEdited {
            timecode: end.to_string(),
        })?;
        self.apply(SessionEvent::CaptionSubmitted)
    }

    /// Applies an engine position report directly.
    pub fn report_position(&mut self, seconds: TimeSec) -> CoreResult<Vec<StateChange>> {
        self.apply(SessionEvent::PositionReported { seconds })
    }

    fn check_active_transition(&mut self) -> Option<StateChange> {
        let active = self.state.active_caption();
        let current_id = active.map(|c| c.id.clone());
        if current_id == self.last_active_id {
            return None;
        }

        let text = active.map(|c| c.text.clone()).unwrap_or_default();
        self.last_active_id = current_id.clone();
        Some(StateChange::ActiveCaptionChanged {
            caption_id: current_id,
            text,
        })
    }
}

// =============================================================================
// Application State (GUI surface)
// =============================================================================

/// Application state shared across all IPC commands.
///
/// Tauri commands arrive on an async runtime, so session access is
/// serialized behind a tokio mutex; within the lock the core stays
/// single-threaded, preserving the serialized-event-queue guarantee.
#[cfg(feature = "gui")]
pub struct AppState {
    /// The widget session driven by the frontend
    pub session: tokio::sync::Mutex<WidgetSession>,
}

#[cfg(feature = "gui")]
impl AppState {
    /// Creates app state around an existing session.
    pub fn new(session: WidgetSession) -> Self {
        Self {
            session: tokio::sync::Mutex::new(session),
        }
    }
}

// =============================================================================
// Logging
// =============================================================================

/// Initializes a `tracing` subscriber from `RUST_LOG`, defaulting to `info`.
///
/// Safe to call more than once; later calls are no-ops. Hosts with their own
/// subscriber simply skip this.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

// =============================================================================
// Tests
// =============================================================================
