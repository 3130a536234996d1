//! # Módulo HTTP
//!
//! Implementa la parte de protocolo del servidor, sin librerías de alto
//! nivel:
//!
//! - Parsing de requests (request line + cuerpo JSON opcional)
//! - Construcción y serialización de responses
//!
//! ### Formato de Request
//!
//! ```text
//! GET /ruta HTTP/1.1
//! Header-Name: Header-Value
//!
//! { "cuerpo": "JSON opcional" }
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200\r\n
//! Content-Type: text/html\r\n
//! Content-Length: 13\r\n
//! \r\n
//! <h1>Hola</h1>
//! ```

pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses

// Re-exportamos los tipos principales para facilitar su uso
// Esto permite usar `http::Request` en vez de `http::request::Request`
pub use request::{Method, ParseError, Request};
pub use response::{Body, Response};
