//! Constantes Windows, flags de modificadores e IDs de mensajes
//!
//! Se definen aquí (y no desde el crate `windows`) para que el núcleo de
//! hotkeys compile y se pruebe en cualquier plataforma.

/// Mensaje que Windows envía al pulsar una hotkey registrada
pub const WM_HOTKEY: u32 = 0x0312;

/// Base de mensajes privados de ventana
pub const WM_USER: u32 = 0x0400;

/// Mensaje propio: recrear la ventana anfitriona
pub const WM_USER_RECREATE_WINDOW: u32 = WM_USER + 1;

/// Flags de `RegisterHotKey`
pub const MOD_ALT: u32 = 0x0001;
pub const MOD_CONTROL: u32 = 0x0002;
pub const MOD_SHIFT: u32 = 0x0004;
pub const MOD_WIN: u32 = 0x0008;
pub const MOD_NOREPEAT: u32 = 0x4000;
