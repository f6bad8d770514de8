//! Configuración de la aplicación
//!
//! Se lee de un JSON junto al ejecutable. Solo lectura: las combinaciones
//! se editan a mano o desde la UI web, nunca se escriben desde aquí.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::actions::HotkeyAction;
use crate::error::{ConfigError, ConfigResult};
use crate::hotkey::parse_combo;

/// Valores por defecto de la configuración
pub struct ConfigDefaults;

impl ConfigDefaults {
    pub const PAUSE: &'static str = "Ctrl+Alt+P";
    pub const RESUME: &'static str = "Ctrl+Alt+R";
    pub const RESET: &'static str = "Ctrl+Alt+0";
    pub const REST_NOW: &'static str = "Ctrl+Alt+N";
    pub const SHOW_WINDOW: &'static str = "Ctrl+Alt+E";
    pub const LOG_FILTER: &'static str = "eye_nurse=info,warn";
}

/// Combinación asignada a cada acción (`None` = sin hotkey)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HotkeyBindings {
    pub pause: Option<String>,
    pub resume: Option<String>,
    pub reset: Option<String>,
    pub rest_now: Option<String>,
    pub show_window: Option<String>,
    pub exit: Option<String>,
}

impl Default for HotkeyBindings {
    fn default() -> Self {
        Self {
            pause: Some(ConfigDefaults::PAUSE.to_string()),
            resume: Some(ConfigDefaults::RESUME.to_string()),
            reset: Some(ConfigDefaults::RESET.to_string()),
            rest_now: Some(ConfigDefaults::REST_NOW.to_string()),
            show_window: Some(ConfigDefaults::SHOW_WINDOW.to_string()),
            exit: None,
        }
    }
}

impl HotkeyBindings {
    /// Combinación configurada para una acción
    pub fn combo_for(&self, action: HotkeyAction) -> Option<&str> {
        let combo = match action {
            HotkeyAction::Pause => &self.pause,
            HotkeyAction::Resume => &self.resume,
            HotkeyAction::Reset => &self.reset,
            HotkeyAction::RestNow => &self.rest_now,
            HotkeyAction::ShowWindow => &self.show_window,
            HotkeyAction::Exit => &self.exit,
        };
        combo.as_deref()
    }
}

/// Configuración serializable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub hotkeys: HotkeyBindings,
    pub log_filter: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hotkeys: HotkeyBindings::default(),
            log_filter: ConfigDefaults::LOG_FILTER.to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    /// Valida la configuración
    ///
    /// Combinaciones sin tecla reconocible son válidas (el gestor las ignora),
    /// pero dos acciones no pueden compartir la misma combinación.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid("logFilter no puede estar vacío".to_string()));
        }

        let mut seen = HashMap::new();
        for action in HotkeyAction::ALL {
            let Some(combo) = self.hotkeys.combo_for(action).and_then(|s| parse_combo(s).ok())
            else {
                continue;
            };
            if let Some(other) = seen.insert(combo, action) {
                return Err(ConfigError::Invalid(format!(
                    "{} y {} usan la misma combinación ({})",
                    other.name(),
                    action.name(),
                    combo
                )));
            }
        }

        Ok(())
    }
}

// =============================================================================
// CARGA
// =============================================================================

/// Obtiene la ruta del archivo de configuración
/// El archivo se llama igual que el ejecutable pero con extensión .json
/// Ejemplo: eye-nurse.exe -> eye-nurse.json
pub fn get_config_path() -> ConfigResult<PathBuf> {
    let exe_path = std::env::current_exe()
        .map_err(|e| ConfigError::ExePath(format!("No se pudo obtener la ruta del ejecutable: {}", e)))?;

    let exe_dir = exe_path
        .parent()
        .ok_or_else(|| ConfigError::ExePath("No se pudo obtener el directorio del ejecutable".to_string()))?;

    let config_name = exe_path
        .file_stem()
        .ok_or_else(|| ConfigError::ExePath("No se pudo obtener el nombre del ejecutable".to_string()))?
        .to_string_lossy()
        .to_string()
        + ".json";

    Ok(exe_dir.join(config_name))
}

/// Carga la configuración junto al ejecutable
///
/// Sin archivo se usan los valores por defecto. Un archivo ilegible o
/// inválido es un error; quien llama decide recurrir a los valores por defecto.
pub fn load_config() -> ConfigResult<Settings> {
    load_config_from(&get_config_path()?)
}

/// Carga la configuración desde una ruta concreta
pub fn load_config_from(path: &Path) -> ConfigResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let json = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&json)?;
    settings.validate()?;
    Ok(settings)
}
