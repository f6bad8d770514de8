//! Gestor de hotkeys globales
//!
//! Mantiene la tabla id -> callback, registra las combinaciones contra la
//! ventana actual y las re-registra cuando la ventana se recrea (cambio de
//! pantalla, reinicio de explorer...). Todo ocurre en el thread de UI.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use super::combo::{parse_combo, Combo};
use crate::constants::WM_HOTKEY;
use crate::error::{HotkeyError, HotkeyResult};
use crate::platform::HotkeyBackend;
use crate::pump::MessagePump;
use crate::types::{RawMessage, WindowHandle};

/// Acción sin argumentos asociada a una hotkey
pub type HotkeyCallback = Rc<dyn Fn()>;

/// Hotkey registrada con éxito en el SO
struct Registration {
    combo: Combo,
    callback: HotkeyCallback,
}

#[derive(Default)]
struct ManagerState {
    current: Option<WindowHandle>,
    previous: Option<WindowHandle>,
    registrations: HashMap<i32, Registration>,
    /// Último id asignado; el siguiente es `last_id + 1`
    last_id: i32,
    subscribed: bool,
}

impl ManagerState {
    /// Ids ordenados, para que el orden de (re)registro sea estable
    fn sorted_ids(&self) -> Vec<i32> {
        let mut ids: Vec<i32> = self.registrations.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// Gestor de hotkeys globales ligadas a una ventana
///
/// Se crea una sola instancia explícitamente y se pasa a quien la necesite.
/// Ninguna operación pública falla: los errores del SO acaban en el log.
pub struct HotkeyManager<B: HotkeyBackend> {
    backend: B,
    pump: Rc<MessagePump>,
    state: RefCell<ManagerState>,
    this: Weak<Self>,
}

impl<B: HotkeyBackend + 'static> HotkeyManager<B> {
    pub fn new(backend: B, pump: Rc<MessagePump>) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            backend,
            pump,
            state: RefCell::new(ManagerState::default()),
            this: this.clone(),
        })
    }

    /// Asocia el gestor a una ventana (nueva o recreada)
    ///
    /// Desregistra todo bajo la ventana anterior (puede estar ya destruida),
    /// pasa a la nueva y vuelve a registrar cada combinación con el mismo id
    /// y callback. El filtro de mensajes se engancha solo la primera vez.
    pub fn initialize(&self, window: WindowHandle) {
        let mut state = self.state.borrow_mut();

        if let Some(old) = state.current {
            for id in state.sorted_ids() {
                if let Err(e) = self.backend.unregister(old, id) {
                    tracing::debug!(id, window = %old, error = %e, "Ignoring unregister on old window");
                }
            }
        }

        state.previous = state.current;
        state.current = Some(window);

        if !state.subscribed {
            let this = self.this.clone();
            self.pump.add_filter(move |msg| {
                this.upgrade()
                    .map_or(false, |manager| manager.dispatch(msg))
            });
            state.subscribed = true;
            tracing::debug!("Hotkey message filter attached");
        }

        for id in state.sorted_ids() {
            let combo = state.registrations[&id].combo;
            if let Err(e) = self.backend.register(window, id, combo) {
                tracing::warn!(id, %combo, %window, error = %e, "Dropping hotkey after window change");
                state.registrations.remove(&id);
            }
        }

        tracing::info!(
            %window,
            previous = ?state.previous,
            hotkeys = state.registrations.len(),
            "Hotkey manager bound to window"
        );
    }

    /// Registra una combinación ("Ctrl+Alt+P") con su callback
    ///
    /// Vacía, `None` o sin tecla reconocible: no hace nada. Si el SO rechaza
    /// la combinación se registra en el log y no se guarda nada.
    pub fn register<'a, F>(&self, combo: impl Into<Option<&'a str>>, callback: F)
    where
        F: Fn() + 'static,
    {
        let Some(text) = combo.into() else {
            return;
        };

        let combo = match parse_combo(text) {
            Ok(combo) => combo,
            Err(HotkeyError::Empty) => return,
            Err(e) => {
                tracing::debug!(hotkey = text, error = %e, "Ignoring hotkey");
                return;
            }
        };

        match self.try_register(combo, Rc::new(callback)) {
            Ok(id) => tracing::info!(id, hotkey = text, %combo, "Hotkey registered"),
            Err(e) => tracing::warn!(hotkey = text, %combo, error = %e, "Hotkey not registered"),
        }
    }

    fn try_register(&self, combo: Combo, callback: HotkeyCallback) -> HotkeyResult<i32> {
        let mut state = self.state.borrow_mut();
        let window = state.current.ok_or(HotkeyError::NoWindow)?;

        // El id solo se consume si el SO acepta la combinación
        let id = state.last_id + 1;
        self.backend.register(window, id, combo)?;

        state.last_id = id;
        state.registrations.insert(id, Registration { combo, callback });
        Ok(id)
    }

    /// Desregistra todas las hotkeys y reinicia el contador de ids
    pub fn unregister_all(&self) {
        let mut state = self.state.borrow_mut();

        if let Some(window) = state.current {
            for id in state.sorted_ids() {
                if let Err(e) = self.backend.unregister(window, id) {
                    tracing::debug!(id, %window, error = %e, "Unregister failed");
                }
            }
        }

        if !state.registrations.is_empty() {
            tracing::info!(count = state.registrations.len(), "All hotkeys unregistered");
        }
        state.registrations.clear();
        state.last_id = 0;
    }

    /// Filtro de mensajes: ejecuta el callback de un `WM_HOTKEY` conocido
    ///
    /// Devuelve `true` si el mensaje quedó manejado. Los mensajes dirigidos a
    /// una ventana que ya no es la actual se dejan pasar.
    pub fn dispatch(&self, msg: &RawMessage) -> bool {
        if msg.message != WM_HOTKEY {
            return false;
        }

        let callback = {
            let state = self.state.borrow();
            if !msg.hwnd.is_null() && state.current != Some(msg.hwnd) {
                tracing::debug!(window = %msg.hwnd, "Ignoring WM_HOTKEY for stale window");
                return false;
            }

            let Ok(id) = i32::try_from(msg.wparam) else {
                return false;
            };
            match state.registrations.get(&id) {
                Some(registration) => registration.callback.clone(),
                None => return false,
            }
        };

        // Sin préstamo activo: el callback puede volver a llamar al gestor
        callback();
        true
    }

    pub fn len(&self) -> usize {
        self.state.borrow().registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().registrations.is_empty()
    }

    /// Copia de las hotkeys activas, ordenadas por id
    pub fn registrations(&self) -> Vec<(i32, Combo)> {
        let state = self.state.borrow();
        state
            .sorted_ids()
            .into_iter()
            .map(|id| (id, state.registrations[&id].combo))
            .collect()
    }

    pub fn current_window(&self) -> Option<WindowHandle> {
        self.state.borrow().current
    }

    pub fn previous_window(&self) -> Option<WindowHandle> {
        self.state.borrow().previous
    }

    pub fn is_subscribed(&self) -> bool {
        self.state.borrow().subscribed
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
