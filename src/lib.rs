//! # Tiny Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado directamente sobre sockets TCP,
//! sin framework: un solo hilo, E/S bloqueante, una conexión atendida de
//! principio a fin antes de aceptar la siguiente.
//!
//! ## Arquitectura
//!
//! El crate está dividido en módulos especializados:
//! - `http`: parsing de requests y serialización de responses
//! - `server`: socket de escucha, bucle de accept y ciclo por conexión
//! - `config`: configuración por CLI y variables de entorno
//!
//! La aplicación embebedora aporta la única pieza que falta: una función
//! handler `Request -> Response` que se pasa al construir el servidor.
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use tiny_server::http::Response;
//! use tiny_server::server::Server;
//!
//! let mut server = Server::new(8080, |req| {
//!     match req.path() {
//!         "" => Response::text(200, "text/html", "<h1>Hola</h1>"),
//!         other => Response::text(400, "text/html", &format!("No endpoint found for {}", other)),
//!     }
//! });
//!
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod http;
pub mod server;
