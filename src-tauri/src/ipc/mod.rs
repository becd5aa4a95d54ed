//! IPC (Inter-Process Communication) Module
//!
//! Handles communication between the Tauri backend and the webview
//! frontend: the widget's commands, the events it broadcasts, and the DTOs
//! crossing the boundary. Compiled only with the `gui` feature.
//!
//! A host application wires the commands into its builder:
//!
//! ```rust,ignore
//! tauri::Builder::default()
//!     .manage(videocue_lib::AppState::new(session))
//!     .invoke_handler(tauri::generate_handler![
//!         videocue_lib::ipc::load_source,
//!         videocue_lib::ipc::update_draft,
//!         videocue_lib::ipc::add_caption,
//!         videocue_lib::ipc::report_position,
//!         videocue_lib::ipc::get_captions,
//!         videocue_lib::ipc::get_active_caption,
//!         videocue_lib::ipc::get_session_info,
//!         videocue_lib::ipc::get_settings,
//!         videocue_lib::ipc::set_settings,
//!     ])
//! ```

mod commands;
mod events;
mod payloads;

pub use commands::*;
pub use events::*;
pub use payloads::*;
