//! Tests de integración del gestor de hotkeys
//!
//! Usan un backend falso en lugar de user32, y mensajes `WM_HOTKEY`
//! sintéticos pasados por el bucle de mensajes.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{hotkey_message, new_manager, window, Call, Counter};
use eye_nurse::{Modifiers, RawMessage, WindowHandle};

#[test]
fn test_register_single_key_with_modifiers() {
    let (_pump, manager) = new_manager();
    manager.initialize(window(1));

    manager.register("Ctrl+Shift+F5", || {});

    let registrations = manager.registrations();
    assert_eq!(registrations.len(), 1);
    let (id, combo) = registrations[0];
    assert_eq!(id, 1);
    assert_eq!(combo.modifiers, Modifiers::CONTROL | Modifiers::SHIFT);
    assert_eq!(combo.vk, 0x74);
    assert_eq!(manager.backend().active(), vec![(window(1), 1)]);
}

#[test]
fn test_keyless_combos_register_nothing() {
    let (_pump, manager) = new_manager();
    manager.initialize(window(1));

    manager.register("", || {});
    manager.register(None::<&str>, || {});
    manager.register("   ", || {});
    manager.register("Ctrl+Alt", || {});
    manager.register("Ctrl+Banana", || {});
    manager.register("Hyper+Meta", || {});

    assert!(manager.is_empty());
    assert_eq!(manager.backend().register_calls(), 0);

    // El contador de ids no avanzó
    manager.register("P", || {});
    assert_eq!(manager.registrations()[0].0, 1);
}

#[test]
fn test_digit_resolves_to_top_row_key() {
    let (_pump, manager) = new_manager();
    manager.initialize(window(1));

    manager.register("5", || {});

    let (_, combo) = manager.registrations()[0];
    assert_eq!(combo.vk, 0x35);
    assert_eq!(combo.modifiers, Modifiers::NONE);
}

#[test]
fn test_same_key_with_different_modifiers() {
    let (pump, manager) = new_manager();
    manager.initialize(window(1));

    let first = Counter::default();
    let second = Counter::default();
    manager.register("Ctrl+Alt+P", first.callback());
    manager.register("P", second.callback());

    let registrations = manager.registrations();
    assert_eq!(registrations.len(), 2);
    let (id1, combo1) = registrations[0];
    let (id2, combo2) = registrations[1];
    assert_ne!(id1, id2);
    assert_eq!(combo1.modifiers.bits(), 0x0003);
    assert_eq!(combo2.modifiers.bits(), 0x0000);
    assert_eq!(combo1.vk, combo2.vk);

    assert!(pump.filter_message(&hotkey_message(window(1), 1)));
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 0);
}

#[test]
fn test_trigger_follows_window_change() {
    let (pump, manager) = new_manager();
    let counter = Counter::default();

    manager.initialize(window(0xA));
    manager.register("Ctrl+Alt+N", counter.callback());

    // Antes de recrear la ventana: dispara bajo A
    assert!(pump.filter_message(&hotkey_message(window(0xA), 1)));
    assert_eq!(counter.get(), 1);

    manager.initialize(window(0xB));

    // Mismo id, mismo callback, ahora bajo B
    assert_eq!(manager.registrations()[0].0, 1);
    assert_eq!(manager.backend().active(), vec![(window(0xB), 1)]);
    assert_eq!(manager.current_window(), Some(window(0xB)));
    assert_eq!(manager.previous_window(), Some(window(0xA)));

    assert!(pump.filter_message(&hotkey_message(window(0xB), 1)));
    assert_eq!(counter.get(), 2);

    // Un mensaje rezagado de la ventana vieja no dispara otra vez
    assert!(!pump.filter_message(&hotkey_message(window(0xA), 1)));
    assert_eq!(counter.get(), 2);
}

#[test]
fn test_window_change_unregisters_old_before_registering_new() {
    let (_pump, manager) = new_manager();
    manager.initialize(window(1));
    manager.register("Ctrl+Alt+P", || {});
    manager.register("Ctrl+Alt+R", || {});
    manager.backend().clear_calls();

    manager.initialize(window(2));

    let calls = manager.backend().calls();
    assert_eq!(calls.len(), 4);
    assert!(matches!(calls[0], Call::Unregister { window: w, id: 1 } if w == window(1)));
    assert!(matches!(calls[1], Call::Unregister { window: w, id: 2 } if w == window(1)));
    assert!(matches!(calls[2], Call::Register { window: w, id: 1, .. } if w == window(2)));
    assert!(matches!(calls[3], Call::Register { window: w, id: 2, .. } if w == window(2)));
}

#[test]
fn test_destroyed_old_window_is_tolerated() {
    let (pump, manager) = new_manager();
    let counter = Counter::default();
    manager.initialize(window(1));
    manager.register("Win+F9", counter.callback());

    // La ventana vieja ya no existe: el desregistro falla en silencio
    manager.backend().destroy(window(1));
    manager.initialize(window(2));

    assert_eq!(manager.len(), 1);
    assert!(pump.filter_message(&hotkey_message(window(2), 1)));
    assert_eq!(counter.get(), 1);
}

#[test]
fn test_failed_reregistration_drops_entry() {
    let (pump, manager) = new_manager();
    manager.initialize(window(1));
    manager.register("Ctrl+Alt+P", || {});
    manager.register("Ctrl+Alt+R", || {});

    // Otro proceso se queda la combinación mientras se recrea la ventana
    manager.backend().take_combo("Ctrl+Alt+P");
    manager.initialize(window(2));

    let ids: Vec<i32> = manager.registrations().iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![2]);
    assert!(!pump.filter_message(&hotkey_message(window(2), 1)));
}

#[test]
fn test_message_filter_is_attached_once() {
    let (pump, manager) = new_manager();
    assert!(!manager.is_subscribed());

    manager.initialize(window(1));
    manager.initialize(window(2));
    manager.initialize(window(3));

    assert!(manager.is_subscribed());
    assert_eq!(pump.filter_count(), 1);

    // Un solo disparo por mensaje
    let counter = Counter::default();
    manager.register("Ctrl+1", counter.callback());
    pump.filter_message(&hotkey_message(window(3), 1));
    assert_eq!(counter.get(), 1);
}

#[test]
fn test_register_before_initialize_is_ignored() {
    let (_pump, manager) = new_manager();

    manager.register("Ctrl+Alt+P", || {});

    assert!(manager.is_empty());
    assert_eq!(manager.backend().register_calls(), 0);
}

#[test]
fn test_os_failure_is_isolated() {
    let (pump, manager) = new_manager();
    manager.initialize(window(1));
    manager.backend().take_combo("Ctrl+Alt+P");

    let counter = Counter::default();
    manager.register("Ctrl+Alt+P", || {});
    manager.register("Ctrl+Alt+R", counter.callback());

    // El fallo no consume id y no afecta al siguiente registro
    assert_eq!(manager.registrations().len(), 1);
    assert_eq!(manager.registrations()[0].0, 1);
    assert!(pump.filter_message(&hotkey_message(window(1), 1)));
    assert_eq!(counter.get(), 1);

    manager.backend().release_combo("Ctrl+Alt+P");
    manager.register("Ctrl+Alt+P", || {});
    assert_eq!(manager.registrations()[1].0, 2);
}

#[test]
fn test_unregister_all_stops_dispatch() {
    let (pump, manager) = new_manager();
    manager.initialize(window(1));
    let counter = Counter::default();
    manager.register("Ctrl+Alt+P", counter.callback());
    manager.register("Ctrl+Alt+R", counter.callback());

    manager.unregister_all();

    assert!(manager.is_empty());
    assert!(manager.backend().active().is_empty());
    assert!(!pump.filter_message(&hotkey_message(window(1), 1)));
    assert!(!pump.filter_message(&hotkey_message(window(1), 2)));
    assert_eq!(counter.get(), 0);
}

#[test]
fn test_unregister_all_is_idempotent_and_resets_ids() {
    let (_pump, manager) = new_manager();
    manager.initialize(window(1));
    manager.register("Ctrl+Alt+P", || {});
    manager.register("Ctrl+Alt+R", || {});

    manager.unregister_all();
    assert!(manager.is_empty());
    manager.unregister_all();
    assert!(manager.is_empty());

    manager.register("Ctrl+Alt+N", || {});
    assert_eq!(manager.registrations()[0].0, 1);
}

#[test]
fn test_unrelated_messages_pass_through() {
    let (pump, manager) = new_manager();
    manager.initialize(window(1));
    let counter = Counter::default();
    manager.register("Ctrl+Alt+P", counter.callback());

    // WM_KEYDOWN con el mismo wparam
    assert!(!pump.filter_message(&RawMessage::new(window(1), 0x0100, 1, 0)));
    // WM_HOTKEY con un id desconocido
    assert!(!pump.filter_message(&hotkey_message(window(1), 42)));
    // IDHOT_SNAPDESKTOP (-2) viene como wparam negativo
    assert!(!pump.filter_message(&RawMessage::new(window(1), 0x0312, usize::MAX - 1, 0)));

    assert_eq!(counter.get(), 0);
}

#[test]
fn test_hotkey_without_window_is_matched_by_id() {
    let (pump, manager) = new_manager();
    manager.initialize(window(1));
    let counter = Counter::default();
    manager.register("Ctrl+Alt+P", counter.callback());

    // Un WM_HOTKEY de la cola del thread llega sin hwnd
    assert!(pump.filter_message(&hotkey_message(WindowHandle::NULL, 1)));
    assert_eq!(counter.get(), 1);

    // Sin hwnd no hay ventana rezagada que descartar: sigue contando el id
    assert!(!pump.filter_message(&hotkey_message(WindowHandle::NULL, 7)));
    manager.initialize(window(2));
    assert!(pump.filter_message(&hotkey_message(WindowHandle::NULL, 1)));
    assert_eq!(counter.get(), 2);
}

#[test]
fn test_callback_can_reenter_manager() {
    let (pump, manager) = new_manager();
    manager.initialize(window(1));

    let weak = Rc::downgrade(&manager);
    let log = Rc::new(RefCell::new(Vec::new()));
    let log_cb = Rc::clone(&log);
    manager.register("Ctrl+Alt+E", move || {
        log_cb.borrow_mut().push("fired");
        if let Some(manager) = weak.upgrade() {
            manager.unregister_all();
        }
    });

    assert!(pump.filter_message(&hotkey_message(window(1), 1)));
    assert_eq!(*log.borrow(), vec!["fired"]);
    assert!(manager.is_empty());
}
