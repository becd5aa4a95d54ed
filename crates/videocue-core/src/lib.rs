//! Videocue Core (headless)
//!
//! Re-exports the widget engine without any GUI dependency and adds an
//! event broadcasting abstraction for hosts that want push-style updates
//! (the Tauri surface has its own event system; everything else subscribes
//! here).

pub use videocue_lib::core::captions::{CaptionEntry, CaptionTrack};
pub use videocue_lib::core::playback::{ClockBridge, NullBridge, PlaybackBridge};
pub use videocue_lib::core::session::{
    CaptionDraft, SessionEvent, SessionMeta, SessionState, StateChange,
};
pub use videocue_lib::core::settings::{BehaviorSettings, OverlapPolicy, WidgetSettings};
pub use videocue_lib::core::timecode::{format_timecode, parse_timecode};
pub use videocue_lib::core::{CaptionId, CoreError, CoreResult, MediaSource, TimeSec};
pub use videocue_lib::{init_tracing, WidgetSession};

pub mod broadcast;
