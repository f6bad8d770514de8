//! Acceso al sistema: registro de hotkeys a nivel de SO
//!
//! El gestor solo depende de este trait, así los tests sustituyen las
//! llamadas al sistema por un backend falso.

use crate::error::HotkeyResult;
use crate::hotkey::Combo;
use crate::types::WindowHandle;

#[cfg(windows)]
mod win32;

#[cfg(windows)]
pub use self::win32::Win32Backend;

/// Registro/desregistro de hotkeys globales ligadas a una ventana
///
/// Todas las llamadas pueden fallar: la combinación puede estar ocupada por
/// otro proceso o la ventana puede haber sido destruida.
pub trait HotkeyBackend {
    fn register(&self, window: WindowHandle, id: i32, combo: Combo) -> HotkeyResult<()>;

    fn unregister(&self, window: WindowHandle, id: i32) -> HotkeyResult<()>;
}
