//! Ventana anfitriona (oculta) que recibe los `WM_HOTKEY`

use windows::core::*;
use windows::Win32::Foundation::*;
use windows::Win32::UI::WindowsAndMessaging::*;

use super::state::HostState;
use crate::constants::WM_USER_RECREATE_WINDOW;
use crate::types::WindowHandle;

const HOST_WINDOW_CLASS: PCWSTR = w!("EyeNurseHotkeyHost");

/// Registra la clase de ventana anfitriona
pub unsafe fn register_window_class(instance: HINSTANCE) -> Result<()> {
    let wc = WNDCLASSEXW {
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        lpfnWndProc: Some(window_proc),
        hInstance: instance,
        lpszClassName: HOST_WINDOW_CLASS,
        ..Default::default()
    };

    if RegisterClassExW(&wc) == 0 {
        return Err(Error::from_win32());
    }

    Ok(())
}

/// Crea la ventana anfitriona
///
/// Es una ventana top-level que nunca se muestra (no message-only), para
/// recibir el broadcast "TaskbarCreated" y `WM_DISPLAYCHANGE`.
pub unsafe fn create_host_window(instance: HINSTANCE) -> Result<HWND> {
    CreateWindowExW(
        WS_EX_TOOLWINDOW,
        HOST_WINDOW_CLASS,
        w!("EyeNurse"),
        WS_POPUP,
        0,
        0,
        0,
        0,
        None,
        None,
        instance,
        None,
    )
}

/// Procedimiento de ventana (maneja mensajes de Windows)
unsafe extern "system" fn window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_DISPLAYCHANGE => {
            request_recreate(hwnd);
            DefWindowProcW(hwnd, msg, wparam, lparam)
        }
        WM_DESTROY => {
            // Solo la ventana actual cierra la aplicación; una ventana
            // sustituida se destruye sin más
            if HostState::window() == Some(WindowHandle::from(hwnd)) {
                PostQuitMessage(0);
            }
            LRESULT(0)
        }
        _ if msg != 0 && msg == HostState::taskbar_created_message() => {
            request_recreate(hwnd);
            LRESULT(0)
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

/// Encola la recreación de la ventana (una sola vez aunque lleguen varios avisos)
unsafe fn request_recreate(hwnd: HWND) {
    if HostState::request_recreate() {
        let window = WindowHandle::from(hwnd);
        tracing::debug!(%window, "Window recreation requested");
        let _ = PostMessageW(hwnd, WM_USER_RECREATE_WINDOW, WPARAM(0), LPARAM(0));
    }
}
