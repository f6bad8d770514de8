//! Bucle de mensajes con filtros de thread
//!
//! Cada mensaje de la cola pasa primero por los filtros registrados; si
//! alguno lo marca como manejado no llega al procedimiento de ventana.

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::RawMessage;

/// Filtro de mensajes: devuelve `true` si el mensaje quedó manejado
pub type ThreadFilter = Rc<dyn Fn(&RawMessage) -> bool>;

/// Bucle de mensajes del thread de UI
///
/// No es `Send`: vive y se usa solo en el thread dueño de las ventanas.
#[derive(Default)]
pub struct MessagePump {
    filters: RefCell<Vec<ThreadFilter>>,
}

impl MessagePump {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añade un filtro al final de la cadena
    pub fn add_filter<F>(&self, filter: F)
    where
        F: Fn(&RawMessage) -> bool + 'static,
    {
        self.filters.borrow_mut().push(Rc::new(filter));
    }

    pub fn filter_count(&self) -> usize {
        self.filters.borrow().len()
    }

    /// Pasa un mensaje por los filtros, parando en el primero que lo maneje
    pub fn filter_message(&self, msg: &RawMessage) -> bool {
        // Copia de la lista: un filtro puede añadir filtros mientras corre
        let filters: Vec<ThreadFilter> = self.filters.borrow().clone();
        filters.iter().any(|filter| filter(msg))
    }

    /// Ejecuta el bucle hasta recibir `WM_QUIT`
    #[cfg(windows)]
    pub fn run(&self) -> windows::core::Result<()> {
        use windows::Win32::UI::WindowsAndMessaging::{
            DispatchMessageW, GetMessageW, TranslateMessage, MSG,
        };

        let mut msg = MSG::default();
        loop {
            let ret = unsafe { GetMessageW(&mut msg, None, 0, 0) };
            match ret.0 {
                0 => return Ok(()), // WM_QUIT
                -1 => return Err(windows::core::Error::from_win32()),
                _ => {}
            }

            if self.filter_message(&RawMessage::from(&msg)) {
                continue;
            }

            unsafe {
                let _ = TranslateMessage(&msg);
                let _ = DispatchMessageW(&msg);
            }
        }
    }
}
