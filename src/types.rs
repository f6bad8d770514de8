//! Tipos personalizados y wrappers

/// Handle de ventana opaco
///
/// Es un valor copiable: el gestor de hotkeys nunca posee ni destruye la
/// ventana, y el handle puede quedar inválido entre llamadas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowHandle(isize);

impl WindowHandle {
    pub const NULL: WindowHandle = WindowHandle(0);

    #[inline]
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    /// Obtiene el valor crudo del handle
    #[inline]
    pub const fn raw(&self) -> isize {
        self.0
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[cfg(windows)]
impl From<windows::Win32::Foundation::HWND> for WindowHandle {
    fn from(hwnd: windows::Win32::Foundation::HWND) -> Self {
        Self(hwnd.0 as isize)
    }
}

#[cfg(windows)]
impl From<WindowHandle> for windows::Win32::Foundation::HWND {
    fn from(handle: WindowHandle) -> Self {
        windows::Win32::Foundation::HWND(handle.0 as *mut core::ffi::c_void)
    }
}

/// Copia independiente de plataforma de un mensaje de la cola del thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMessage {
    pub hwnd: WindowHandle,
    pub message: u32,
    pub wparam: usize,
    pub lparam: isize,
}

impl RawMessage {
    pub fn new(hwnd: WindowHandle, message: u32, wparam: usize, lparam: isize) -> Self {
        Self {
            hwnd,
            message,
            wparam,
            lparam,
        }
    }
}

#[cfg(windows)]
impl From<&windows::Win32::UI::WindowsAndMessaging::MSG> for RawMessage {
    fn from(msg: &windows::Win32::UI::WindowsAndMessaging::MSG) -> Self {
        Self {
            hwnd: msg.hwnd.into(),
            message: msg.message,
            wparam: msg.wParam.0,
            lparam: msg.lParam.0,
        }
    }
}
