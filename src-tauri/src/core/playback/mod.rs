//! Playback Bridge Module
//!
//! The widget never decodes or plays media itself; it consumes a
//! [`PlaybackBridge`] — load a source by reference, and poll for the
//! engine's position reports. Reports only flow while the engine is playing;
//! a paused or unloaded engine reports nothing.
//!
//! Two implementations ship with the crate:
//! - [`ClockBridge`]: a wall-clock simulation engine with play/pause/seek,
//!   used by demos and integration tests as the stand-in for a real player.
//! - [`NullBridge`]: accepts any source and never reports; for hosts that
//!   drive position reports entirely from their own player callbacks.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use tracing::debug;

use crate::core::{CoreError, CoreResult, MediaSource, TimeSec};

// =============================================================================
// Bridge Trait
// =============================================================================

/// The external playback capability the widget delegates to.
///
/// The widget does not control playback (play/pause/seek belong to the
/// engine's own surface) and places no correctness constraint on the report
/// cadence.
pub trait PlaybackBridge: Send + Sync {
    /// Loads a media source by reference.
    ///
    /// On rejection the widget keeps its previous state.
    fn load_source(&mut self, source: &MediaSource) -> CoreResult<()>;

    /// Unloads the current source, stopping position reports.
    fn unload(&mut self);

    /// Polls for a position report.
    ///
    /// Returns `Some(seconds)` while playing, `None` while paused or
    /// unloaded. Reported positions are monotonically non-decreasing during
    /// continuous playback but may jump on seek.
    fn poll_position(&mut self) -> Option<TimeSec>;
}

// =============================================================================
// Null Bridge
// =============================================================================

/// A bridge with no engine behind it: accepts any non-blank source and never
/// reports a position.
#[derive(Debug, Default, Clone)]
pub struct NullBridge;

impl PlaybackBridge for NullBridge {
    fn load_source(&mut self, source: &MediaSource) -> CoreResult<()> {
        if source.is_blank() {
            return Err(CoreError::SourceRejected("blank source reference".into()));
        }
        Ok(())
    }

    fn unload(&mut self) {}

    fn poll_position(&mut self) -> Option<TimeSec> {
        None
    }
}

// =============================================================================
// Clock Bridge
// =============================================================================

#[derive(Debug)]
struct ClockInner {
    source: Option<MediaSource>,
    /// Wall clock instant when playback started/resumed
    started: Option<Instant>,
    /// Position accumulated before the current play stretch
    base_sec: TimeSec,
}

impl ClockInner {
    fn position(&self) -> TimeSec {
        match self.started {
            Some(started) => self.base_sec + started.elapsed().as_secs_f64(),
            None => self.base_sec,
        }
    }
}

/// A wall-clock playback simulation.
///
/// Clones share one engine: the host keeps a clone to drive play/pause/seek
/// while the widget session owns another for source loading and polling.
#[derive(Debug, Clone)]
pub struct ClockBridge {
    inner: Arc<Mutex<ClockInner>>,
}

impl ClockBridge {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ClockInner {
                source: None,
                started: None,
                base_sec: 0.0,
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ClockInner> {
        // A poisoned lock only happens if a panic escaped mid-update; the
        // inner state is still coherent for a simulation clock.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Starts or resumes playback.
    pub fn play(&self) {
        let mut inner = self.lock();
        if inner.source.is_some() && inner.started.is_none() {
            inner.started = Some(Instant::now());
        }
    }

    /// Pauses playback, freezing the position.
    pub fn pause(&self) {
        let mut inner = self.lock();
        if let Some(started) = inner.started.take() {
            inner.base_sec += started.elapsed().as_secs_f64();
        }
    }

    /// Jumps to the given position, preserving the play/pause state.
    pub fn seek(&self, to_sec: TimeSec) {
        let mut inner = self.lock();
        inner.base_sec = to_sec.max(0.0);
        if inner.started.is_some() {
            inner.started = Some(Instant::now());
        }
    }

    /// Returns the current simulated position regardless of play state.
    pub fn position(&self) -> TimeSec {
        self.lock().position()
    }

    /// Returns true while playing.
    pub fn is_playing(&self) -> bool {
        self.lock().started.is_some()
    }
}

impl Default for ClockBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackBridge for ClockBridge {
    fn load_source(&mut self, source: &MediaSource) -> CoreResult<()> {
        if source.is_blank() {
            return Err(CoreError::SourceRejected("blank source reference".into()));
        }

        let mut inner = self.lock();
        debug!(url = %source.url, "Clock bridge loading source");
        inner.source = Some(source.clone());
        inner.started = None;
        inner.base_sec = 0.0;
        Ok(())
    }

    fn unload(&mut self) {
        let mut inner = self.lock();
        inner.source = None;
        inner.started = None;
        inner.base_sec = 0.0;
    }

    fn poll_position(&mut self) -> Option<TimeSec> {
        let inner = self.lock();
        // No reports while paused or unloaded.
        inner.started.map(|_| inner.position())
    }
}

// =============================================================================
// Tests
// =============================================================================
