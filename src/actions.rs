//! Acciones de la aplicación disparables por hotkey

use std::rc::Rc;

use crate::config::HotkeyBindings;
use crate::hotkey::HotkeyManager;
use crate::platform::HotkeyBackend;

/// Acciones del menú de la bandeja que admiten hotkey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotkeyAction {
    Pause,
    Resume,
    Reset,
    RestNow,
    ShowWindow,
    Exit,
}

impl HotkeyAction {
    pub const ALL: [HotkeyAction; 6] = [
        HotkeyAction::Pause,
        HotkeyAction::Resume,
        HotkeyAction::Reset,
        HotkeyAction::RestNow,
        HotkeyAction::ShowWindow,
        HotkeyAction::Exit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HotkeyAction::Pause => "pause",
            HotkeyAction::Resume => "resume",
            HotkeyAction::Reset => "reset",
            HotkeyAction::RestNow => "rest_now",
            HotkeyAction::ShowWindow => "show_window",
            HotkeyAction::Exit => "exit",
        }
    }
}

/// Registra la hotkey configurada de cada acción
///
/// Las acciones sin combinación (o con una que no se puede registrar) se
/// quedan sin hotkey; el resto no se ve afectado.
pub fn bind_actions<B>(
    manager: &HotkeyManager<B>,
    bindings: &HotkeyBindings,
    handler: Rc<dyn Fn(HotkeyAction)>,
) where
    B: HotkeyBackend + 'static,
{
    for action in HotkeyAction::ALL {
        let handler = Rc::clone(&handler);
        manager.register(bindings.combo_for(action), move || handler(action));
    }
}
