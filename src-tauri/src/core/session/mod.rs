//! Widget Session Module
//!
//! The explicit state container behind the widget: source URL, pending
//! caption draft, caption track, and last reported playback position.
//!
//! All state transitions flow through [`SessionState::apply`] as
//! `(state, event) -> changes`, so the whole widget can be unit tested
//! without any rendering environment. The active caption is *not* stored —
//! it is a derived query ([`SessionState::active_caption`]) the caller
//! re-invokes whenever it wants a fresh answer.

mod state;

pub use state::{CaptionDraft, SessionEvent, SessionMeta, SessionState, StateChange};
