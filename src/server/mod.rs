//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto (bind + listen con backlog acotado)
//! 2. Acepta conexiones entrantes, una a la vez
//! 3. Lee y parsea el request HTTP
//! 4. Invoca el handler de la aplicación y escribe la response

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::{RequestHandler, Server};
