//! Widget IPC Commands
//!
//! Tauri commands for the widget surface: source loading, caption
//! authoring, playback position reports, and session queries.
//!
//! Validation failures come back as `Err(String)` with the user-facing
//! message from [`crate::core::CoreError`]; the frontend shows them as
//! notices, never treats them as fatal.

use tauri::{AppHandle, State};

use crate::core::session::SessionEvent;
use crate::core::settings::WidgetSettings;
use crate::core::TimeSec;
use crate::ipc::{
    ActiveCaptionDto, CaptionDto, DraftDto, EventEmitter, SessionInfoDto,
};
use crate::AppState;

/// Set the media source URL (empty clears and unloads)
#[tauri::command]
pub async fn load_source(
    app: AppHandle,
    state: State<'_, AppState>,
    url: String,
) -> Result<SessionInfoDto, String> {
    let mut session = state.session.lock().await;
    let changes = session.load_source(&url).map_err(|e| e.to_ipc_error())?;
    EventEmitter::emit_changes(&app, &changes)?;

    tracing::debug!(loaded = session.state.source.is_some(), "Source updated");
    Ok(SessionInfoDto::from(&*session))
}

/// Replace the pending caption form fields
#[tauri::command]
pub async fn update_draft(
    app: AppHandle,
    state: State<'_, AppState>,
    draft: DraftDto,
) -> Result<DraftDto, String> {
    let mut session = state.session.lock().await;

    let mut changes = Vec::new();
    for event in [
        SessionEvent::DraftTextEdited { text: draft.text },
        SessionEvent::DraftStartEdited {
            timecode: draft.start,
        },
        SessionEvent::DraftEndEdited {
            timecode: draft.end,
        },
    ] {
        changes.extend(session.apply(event).map_err(|e| e.to_ipc_error())?);
    }
    // Field edits coalesce into a single draft notification.
    changes.dedup();
    EventEmitter::emit_changes(&app, &changes)?;

    Ok(DraftDto::from(&session.state.draft))
}

/// Submit the pending caption form
#[tauri::command]
pub async fn add_caption(
    app: AppHandle,
    state: State<'_, AppState>,
) -> Result<CaptionDto, String> {
    let mut session = state.session.lock().await;
    let changes = session
        .apply(SessionEvent::CaptionSubmitted)
        .map_err(|e| e.to_ipc_error())?;
    EventEmitter::emit_changes(&app, &changes)?;

    let caption_id = changes
        .iter()
        .find_map(|c| match c {
            crate::core::session::StateChange::CaptionAdded { caption_id } => {
                Some(caption_id.clone())
            }
            _ => None,
        })
        .ok_or_else(|| "Caption submission produced no entry".to_string())?;

    let entry = session
        .state
        .track
        .get(&caption_id)
        .ok_or_else(|| "Caption not found after submission".to_string())?;
    Ok(CaptionDto::from(entry))
}

/// Apply a playback position report from the frontend player
#[tauri::command]
pub async fn report_position(
    app: AppHandle,
    state: State<'_, AppState>,
    seconds: TimeSec,
) -> Result<ActiveCaptionDto, String> {
    let mut session = state.session.lock().await;
    let changes = session
        .report_position(seconds)
        .map_err(|e| e.to_ipc_error())?;
    EventEmitter::emit_changes(&app, &changes)?;

    Ok(ActiveCaptionDto::from(&*session))
}

/// Get the caption list in submission order
#[tauri::command]
pub async fn get_captions(state: State<'_, AppState>) -> Result<Vec<CaptionDto>, String> {
    let session = state.session.lock().await;
    Ok(session
        .state
        .track
        .entries
        .iter()
        .map(CaptionDto::from)
        .collect())
}

/// Get the caption active at the last reported position
#[tauri::command]
pub async fn get_active_caption(state: State<'_, AppState>) -> Result<ActiveCaptionDto, String> {
    let session = state.session.lock().await;
    Ok(ActiveCaptionDto::from(&*session))
}

/// Get a snapshot of the widget session
#[tauri::command]
pub async fn get_session_info(state: State<'_, AppState>) -> Result<SessionInfoDto, String> {
    let session = state.session.lock().await;
    Ok(SessionInfoDto::from(&*session))
}

/// Get the widget settings
#[tauri::command]
pub async fn get_settings(state: State<'_, AppState>) -> Result<WidgetSettings, String> {
    let session = state.session.lock().await;
    Ok(session.state.settings.clone())
}

/// Replace the widget settings (normalized before use)
#[tauri::command]
pub async fn set_settings(
    state: State<'_, AppState>,
    settings: WidgetSettings,
) -> Result<WidgetSettings, String> {
    let mut session = state.session.lock().await;
    session.state.update_settings(settings);
    Ok(session.state.settings.clone())
}
