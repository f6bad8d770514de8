//! EyeNurse - recordatorio de descanso visual
//!
//! Núcleo de hotkeys globales: parseo de combinaciones, registro en el SO
//! ligado a una ventana, despacho de `WM_HOTKEY` y re-registro cuando la
//! ventana se recrea.

pub mod actions;
pub mod config;
pub mod constants;
pub mod error;
pub mod hotkey;
pub mod logging;
pub mod platform;
pub mod pump;
pub mod types;

#[cfg(windows)]
pub mod host;

pub use error::{ConfigError, HotkeyError, HotkeyResult};
pub use hotkey::{Combo, HotkeyManager, Modifiers};
pub use pump::MessagePump;
pub use types::{RawMessage, WindowHandle};
