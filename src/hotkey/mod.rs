//! Módulo de hotkeys - parseo de combinaciones y gestor de registros

mod combo;
pub mod keys;
mod manager;

// Re-exports públicos
pub use combo::{parse_combo, Combo, Modifiers};
pub use manager::{HotkeyCallback, HotkeyManager};
