//! Backend Win32: `RegisterHotKey` / `UnregisterHotKey`

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    RegisterHotKey, UnregisterHotKey, HOT_KEY_MODIFIERS,
};

use super::HotkeyBackend;
use crate::constants::MOD_NOREPEAT;
use crate::error::{HotkeyError, HotkeyResult};
use crate::hotkey::Combo;
use crate::types::WindowHandle;

/// Backend real sobre user32
///
/// Añade `MOD_NOREPEAT` para que mantener pulsada la combinación dispare
/// una sola vez.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Backend;

impl Win32Backend {
    pub fn new() -> Self {
        Self
    }
}

impl HotkeyBackend for Win32Backend {
    fn register(&self, window: WindowHandle, id: i32, combo: Combo) -> HotkeyResult<()> {
        let hwnd: HWND = window.into();
        let modifiers = HOT_KEY_MODIFIERS(combo.modifiers.bits() | MOD_NOREPEAT);

        unsafe { RegisterHotKey(hwnd, id, modifiers, combo.vk) }.map_err(|e| {
            tracing::debug!(id, %combo, %window, error = %e, "RegisterHotKey failed");
            HotkeyError::RegistrationFailed {
                id,
                reason: e.to_string(),
            }
        })
    }

    fn unregister(&self, window: WindowHandle, id: i32) -> HotkeyResult<()> {
        let hwnd: HWND = window.into();

        unsafe { UnregisterHotKey(hwnd, id) }.map_err(|e| {
            tracing::debug!(id, %window, error = %e, "UnregisterHotKey failed");
            HotkeyError::UnregistrationFailed {
                id,
                reason: e.to_string(),
            }
        })
    }
}
