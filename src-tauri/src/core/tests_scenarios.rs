//! Cross-module scenario tests: full widget flows driven through the
//! session layer, the way a host event loop would.

use crate::core::playback::{ClockBridge, NullBridge, PlaybackBridge};
use crate::core::session::{SessionEvent, StateChange};
use crate::core::settings::WidgetSettings;
use crate::core::{CoreError, MediaSource};
use crate::WidgetSession;

fn session() -> WidgetSession {
    WidgetSession::new(WidgetSettings::default(), Box::new(NullBridge))
}

#[test]
fn end_to_end_authoring_and_lookup() {
    let mut session = session();

    session
        .load_source("https://example.com/watch?v=abc123")
        .unwrap();
    session
        .add_caption("Hello", "00:00:05", "00:00:10")
        .unwrap();
    assert_eq!(session.state.track.len(), 1);

    session.report_position(7.5).unwrap();
    assert_eq!(session.state.active_caption_text(), "Hello");

    session.report_position(12.0).unwrap();
    assert_eq!(session.state.active_caption_text(), "");
}

#[test]
fn rejected_submissions_never_touch_the_track() {
    let mut session = session();

    assert!(matches!(
        session.add_caption("x", "00:00:10", "00:00:05"),
        Err(CoreError::InvalidInterval(10, 5))
    ));
    assert!(matches!(
        session.add_caption("", "00:00:10", "00:00:20"),
        Err(CoreError::MissingInput("caption text"))
    ));
    assert!(matches!(
        session.add_caption("x", "", "00:00:20"),
        Err(CoreError::MissingInput("start time"))
    ));
    assert!(matches!(
        session.add_caption("x", "00:00:xx", "00:00:20"),
        Err(CoreError::MalformedTimecode(_))
    ));

    assert!(session.state.track.is_empty());
}

#[test]
fn overlapping_entries_resolve_by_insertion_order() {
    let mut session = session();

    session.add_caption("A", "00:00:00", "00:01:40").unwrap();
    session.add_caption("B", "00:00:50", "00:02:30").unwrap();

    session.report_position(75.0).unwrap();
    assert_eq!(session.state.active_caption_text(), "A");
}

#[test]
fn active_caption_transitions_are_reported_once() {
    let mut session = session();
    session.add_caption("Hello", "00:00:05", "00:00:10").unwrap();

    // Entering the interval reports a transition...
    let changes = session.report_position(6.0).unwrap();
    assert!(changes.iter().any(|c| matches!(
        c,
        StateChange::ActiveCaptionChanged { text, .. } if text == "Hello"
    )));

    // ...staying inside it does not...
    let changes = session.report_position(8.0).unwrap();
    assert!(!changes
        .iter()
        .any(|c| matches!(c, StateChange::ActiveCaptionChanged { .. })));

    // ...and leaving it reports the empty transition.
    let changes = session.report_position(11.0).unwrap();
    assert!(changes.iter().any(|c| matches!(
        c,
        StateChange::ActiveCaptionChanged { caption_id: None, text } if text.is_empty()
    )));
}

#[test]
fn adding_a_caption_under_the_playhead_reports_a_transition() {
    let mut session = session();
    session.report_position(7.0).unwrap();

    // The position already sits inside the new interval, so the submission
    // itself flips the derived query.
    let changes = session.add_caption("Late", "00:00:05", "00:00:10").unwrap();
    assert!(changes.iter().any(|c| matches!(
        c,
        StateChange::ActiveCaptionChanged { text, .. } if text == "Late"
    )));
}

#[test]
fn position_reports_observe_the_latest_submission() {
    // Serialized applies: a report after a submission must see the new entry.
    let mut session = session();
    session.report_position(3.0).unwrap();
    session.add_caption("fresh", "00:00:02", "00:00:04").unwrap();

    session.report_position(3.5).unwrap();
    assert_eq!(session.state.active_caption_text(), "fresh");
}

#[test]
fn clock_bridge_drives_the_session_through_ticks() {
    let engine = ClockBridge::new();
    let mut session = WidgetSession::new(WidgetSettings::default(), Box::new(engine.clone()));

    session
        .load_source("https://example.com/watch?v=abc123")
        .unwrap();
    session.add_caption("Intro", "00:00:05", "00:00:10").unwrap();

    // Paused engine: ticking produces nothing.
    assert!(session.tick().unwrap().is_empty());

    engine.seek(7.0);
    engine.play();
    let changes = session.tick().unwrap();
    assert!(changes
        .iter()
        .any(|c| matches!(c, StateChange::PositionChanged { .. })));
    assert_eq!(session.state.active_caption_text(), "Intro");

    engine.seek(20.0);
    session.tick().unwrap();
    assert_eq!(session.state.active_caption_text(), "");
}

#[test]
fn source_rejection_leaves_state_unchanged() {
    struct RefusingBridge;
    impl PlaybackBridge for RefusingBridge {
        fn load_source(&mut self, source: &MediaSource) -> crate::core::CoreResult<()> {
            Err(CoreError::SourceRejected(format!(
                "unsupported reference: {}",
                source.url
            )))
        }
        fn unload(&mut self) {}
        fn poll_position(&mut self) -> Option<f64> {
            None
        }
    }

    let mut session = WidgetSession::new(WidgetSettings::default(), Box::new(RefusingBridge));
    let err = session.load_source("ftp://nope").unwrap_err();
    assert!(matches!(err, CoreError::SourceRejected(_)));
    assert!(session.state.source.is_none());
}

#[test]
fn clearing_the_source_unloads_the_engine() {
    let engine = ClockBridge::new();
    let mut session = WidgetSession::new(WidgetSettings::default(), Box::new(engine.clone()));

    session
        .load_source("https://example.com/watch?v=abc123")
        .unwrap();
    engine.play();
    assert!(engine.is_playing());

    session
        .apply(SessionEvent::SourceEdited { url: String::new() })
        .unwrap();
    assert!(!engine.is_playing());
    assert!(session.state.source.is_none());
}
