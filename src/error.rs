//! Tipos de error del núcleo de hotkeys y de la configuración

use thiserror::Error;

/// Errores relacionados con hotkeys
///
/// Nunca salen de las operaciones públicas de `HotkeyManager`: el gestor
/// los registra en el log y sigue adelante.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HotkeyError {
    /// Combinación vacía o solo espacios
    #[error("Empty hotkey combination")]
    Empty,

    /// Ningún segmento de la combinación es una tecla reconocida
    #[error("Hotkey '{0}' has no recognized key")]
    MissingKey(String),

    /// Aún no se ha llamado a `initialize`
    #[error("No window handle to bind hotkeys to")]
    NoWindow,

    /// `RegisterHotKey` rechazó la combinación
    #[error("Failed to register hotkey id {id}: {reason}")]
    RegistrationFailed { id: i32, reason: String },

    /// `UnregisterHotKey` falló (p.ej. ventana ya destruida)
    #[error("Failed to unregister hotkey id {id}: {reason}")]
    UnregistrationFailed { id: i32, reason: String },
}

/// Tipo resultado del módulo de hotkeys
pub type HotkeyResult<T> = Result<T, HotkeyError>;

/// Errores al cargar la configuración
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not resolve config path: {0}")]
    ExePath(String),

    #[error("Could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
