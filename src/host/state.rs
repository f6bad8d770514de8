//! Estado global del anfitrión
//!
//! El procedimiento de ventana es una función estática que no puede
//! capturar estado local, de ahí los atomics.

use std::sync::atomic::{AtomicBool, AtomicIsize, AtomicU32, Ordering};

use crate::types::WindowHandle;

/// Handle de la ventana anfitriona actual (0 = ninguna)
static HOST_HWND: AtomicIsize = AtomicIsize::new(0);

/// Id del mensaje "TaskbarCreated" (0 = no registrado)
static TASKBAR_CREATED_MSG: AtomicU32 = AtomicU32::new(0);

/// Hay una recreación de ventana pendiente en la cola
static RECREATE_PENDING: AtomicBool = AtomicBool::new(false);

/// Recordatorio en pausa
static PAUSED: AtomicBool = AtomicBool::new(false);

pub struct HostState;

impl HostState {
    /// Obtiene el handle de la ventana anfitriona actual
    pub fn window() -> Option<WindowHandle> {
        let raw = HOST_HWND.load(Ordering::Relaxed);
        (raw != 0).then(|| WindowHandle::from_raw(raw))
    }

    pub fn set_window(window: WindowHandle) {
        HOST_HWND.store(window.raw(), Ordering::Relaxed);
    }

    #[inline]
    pub fn taskbar_created_message() -> u32 {
        TASKBAR_CREATED_MSG.load(Ordering::Relaxed)
    }

    pub fn set_taskbar_created_message(msg: u32) {
        TASKBAR_CREATED_MSG.store(msg, Ordering::Relaxed);
    }

    /// Marca una recreación pendiente; devuelve `false` si ya lo estaba
    pub fn request_recreate() -> bool {
        !RECREATE_PENDING.swap(true, Ordering::Relaxed)
    }

    pub fn clear_recreate() {
        RECREATE_PENDING.store(false, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_paused() -> bool {
        PAUSED.load(Ordering::Relaxed)
    }

    pub fn set_paused(paused: bool) {
        PAUSED.store(paused, Ordering::Relaxed);
    }
}
