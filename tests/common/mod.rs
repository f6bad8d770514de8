//! Backend falso compartido por los tests de integración

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use eye_nurse::hotkey::{Combo, HotkeyManager};
use eye_nurse::platform::HotkeyBackend;
use eye_nurse::{HotkeyError, HotkeyResult, MessagePump, RawMessage, WindowHandle};

pub const WM_HOTKEY: u32 = eye_nurse::constants::WM_HOTKEY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Register {
        window: WindowHandle,
        id: i32,
        combo: Combo,
    },
    Unregister {
        window: WindowHandle,
        id: i32,
    },
}

/// Registra cada llamada y simula la tabla de hotkeys del SO
#[derive(Default)]
pub struct FakeBackend {
    calls: RefCell<Vec<Call>>,
    /// (ventana, id) registrados actualmente
    active: RefCell<HashSet<(WindowHandle, i32)>>,
    /// Combinaciones "ocupadas por otro proceso"
    taken: RefCell<HashSet<Combo>>,
    /// Ventanas destruidas: cualquier llamada contra ellas falla
    destroyed: RefCell<HashSet<WindowHandle>>,
}

impl FakeBackend {
    pub fn take_combo(&self, combo: &str) {
        self.taken.borrow_mut().insert(combo.parse().unwrap());
    }

    pub fn release_combo(&self, combo: &str) {
        let combo: Combo = combo.parse().unwrap();
        self.taken.borrow_mut().remove(&combo);
    }

    pub fn destroy(&self, window: WindowHandle) {
        self.destroyed.borrow_mut().insert(window);
        self.active.borrow_mut().retain(|(w, _)| *w != window);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn active(&self) -> Vec<(WindowHandle, i32)> {
        let mut active: Vec<_> = self.active.borrow().iter().copied().collect();
        active.sort_by_key(|(w, id)| (w.raw(), *id));
        active
    }

    pub fn register_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Register { .. }))
            .count()
    }
}

impl HotkeyBackend for FakeBackend {
    fn register(&self, window: WindowHandle, id: i32, combo: Combo) -> HotkeyResult<()> {
        self.calls
            .borrow_mut()
            .push(Call::Register { window, id, combo });

        if self.destroyed.borrow().contains(&window) {
            return Err(HotkeyError::RegistrationFailed {
                id,
                reason: "invalid window handle".to_string(),
            });
        }
        if self.taken.borrow().contains(&combo) {
            return Err(HotkeyError::RegistrationFailed {
                id,
                reason: "hotkey already registered".to_string(),
            });
        }
        if !self.active.borrow_mut().insert((window, id)) {
            return Err(HotkeyError::RegistrationFailed {
                id,
                reason: "id already in use".to_string(),
            });
        }
        Ok(())
    }

    fn unregister(&self, window: WindowHandle, id: i32) -> HotkeyResult<()> {
        self.calls.borrow_mut().push(Call::Unregister { window, id });

        if self.active.borrow_mut().remove(&(window, id)) {
            Ok(())
        } else {
            Err(HotkeyError::UnregistrationFailed {
                id,
                reason: "hotkey not registered".to_string(),
            })
        }
    }
}

pub fn window(raw: isize) -> WindowHandle {
    WindowHandle::from_raw(raw)
}

pub fn hotkey_message(window: WindowHandle, id: i32) -> RawMessage {
    RawMessage::new(window, WM_HOTKEY, id as usize, 0)
}

pub fn new_manager() -> (Rc<MessagePump>, Rc<HotkeyManager<FakeBackend>>) {
    let pump = Rc::new(MessagePump::new());
    let manager = HotkeyManager::new(FakeBackend::default(), Rc::clone(&pump));
    (pump, manager)
}

/// Contador de invocaciones de un callback
#[derive(Clone, Default)]
pub struct Counter(Rc<RefCell<u32>>);

impl Counter {
    pub fn callback(&self) -> impl Fn() + 'static {
        let count = Rc::clone(&self.0);
        move || *count.borrow_mut() += 1
    }

    pub fn get(&self) -> u32 {
        *self.0.borrow()
    }
}
