//! Inicialización del log con tracing

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Inicializa el log
///
/// - Usa `RUST_LOG` si está definida, si no `default_filter`
/// - Escribe en stderr, o en `log_file` si se indica (las builds release no
///   tienen consola)
///
/// Llamarla más de una vez no hace nada.
pub fn init_logging(default_filter: &str, log_file: Option<&Path>) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let file = log_file.and_then(|path| {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("No se pudo abrir el log {}: {}", path.display(), e);
                None
            }
        }
    });

    let result = match file {
        Some(file) => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .with(filter)
            .try_init(),
        None => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .try_init(),
    };

    if result.is_ok() {
        tracing::info!("EyeNurse logging initialized");
    }
}
