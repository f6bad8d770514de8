//! EyeNurse - recordatorio de descanso visual
//!
//! Anfitrión de las hotkeys globales: pausar, reanudar, reiniciar, descansar
//! ahora, mostrar la ventana y salir.

#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(windows)]
fn main() -> windows::core::Result<()> {
    use eye_nurse::config::{load_config, Settings};

    // La configuración se lee antes que el log porque define su filtro
    let (settings, load_error) = match load_config() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    eye_nurse::logging::init_logging(&settings.log_filter, settings.log_file.as_deref());

    if let Some(e) = load_error {
        tracing::warn!(error = %e, "Using default settings");
    }

    let result = eye_nurse::host::run(&settings);
    if let Err(e) = &result {
        tracing::error!(error = %e, "Message loop failed");
    }
    result
}

#[cfg(not(windows))]
fn main() {
    eprintln!("EyeNurse solo funciona en Windows");
    std::process::exit(1);
}
