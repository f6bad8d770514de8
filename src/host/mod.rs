//! Anfitrión Windows: ventana, bucle de mensajes y acciones
//!
//! Sustituye a la UI real (bandeja, ventana de cuenta atrás) por lo mínimo
//! que necesita el gestor de hotkeys: una ventana y un bucle de mensajes.

mod state;
mod window;

use std::rc::Rc;

use windows::core::{w, Result};
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    DestroyWindow, PostMessageW, RegisterWindowMessageW, WM_CLOSE,
};

use crate::actions::{bind_actions, HotkeyAction};
use crate::config::Settings;
use crate::constants::WM_USER_RECREATE_WINDOW;
use crate::hotkey::HotkeyManager;
use crate::platform::Win32Backend;
use crate::pump::MessagePump;

pub use state::HostState;
use window::{create_host_window, register_window_class};

/// Arranca el anfitrión y bloquea hasta que se cierra la aplicación
pub fn run(settings: &Settings) -> Result<()> {
    let instance: HINSTANCE = unsafe { GetModuleHandleW(None)? }.into();

    let hwnd = unsafe {
        register_window_class(instance)?;
        HostState::set_taskbar_created_message(RegisterWindowMessageW(w!("TaskbarCreated")));
        create_host_window(instance)?
    };
    HostState::set_window(hwnd.into());

    let pump = Rc::new(MessagePump::new());
    let manager = HotkeyManager::new(Win32Backend::new(), Rc::clone(&pump));
    manager.initialize(hwnd.into());

    let weak = Rc::downgrade(&manager);
    pump.add_filter(move |msg| {
        if msg.message != WM_USER_RECREATE_WINDOW {
            return false;
        }
        if let Some(manager) = weak.upgrade() {
            recreate_window(instance, &manager);
        }
        true
    });

    bind_actions(&manager, &settings.hotkeys, Rc::new(handle_action));
    tracing::info!(hotkeys = manager.len(), "EyeNurse running");

    let result = pump.run();
    manager.unregister_all();
    result
}

/// Sustituye la ventana anfitriona y re-registra las hotkeys en la nueva
///
/// La ventana vieja se destruye después de `initialize`, para que el
/// desregistro aún encuentre un handle válido.
fn recreate_window(instance: HINSTANCE, manager: &HotkeyManager<Win32Backend>) {
    HostState::clear_recreate();

    let new_hwnd = match unsafe { create_host_window(instance) } {
        Ok(hwnd) => hwnd,
        Err(e) => {
            tracing::error!(error = %e, "Could not recreate host window");
            return;
        }
    };

    let old = HostState::window();
    HostState::set_window(new_hwnd.into());
    manager.initialize(new_hwnd.into());

    if let Some(old) = old {
        unsafe {
            let _ = DestroyWindow(HWND::from(old));
        }
    }
}

fn handle_action(action: HotkeyAction) {
    tracing::info!(action = action.name(), "Hotkey action");

    match action {
        HotkeyAction::Pause => HostState::set_paused(true),
        HotkeyAction::Resume | HotkeyAction::Reset => HostState::set_paused(false),
        HotkeyAction::RestNow | HotkeyAction::ShowWindow => {}
        HotkeyAction::Exit => {
            if let Some(window) = HostState::window() {
                unsafe {
                    let _ = PostMessageW(HWND::from(window), WM_CLOSE, WPARAM(0), LPARAM(0));
                }
            }
        }
    }

    tracing::debug!(paused = HostState::is_paused(), "Reminder state");
}
