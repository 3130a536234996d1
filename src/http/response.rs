//! # Construcción de Respuestas HTTP
//! src/http/response.rs
//!
//! Este módulo representa el resultado del handler y lo convierte en los
//! bytes exactos que van al socket. Es un formateador puro: toda la E/S
//! la hace el servidor de conexiones.
//!
//! ## Formato del wire
//!
//! ```text
//! HTTP/1.1 200\r\n
//! Content-Type: text/html\r\n
//! Content-Length: 2\r\n
//! \r\n
//! hi
//! ```
//!
//! Para cuerpos binarios el bloque de cabeceras lleva el
//! `Content-Length` del payload, pero el payload **no** va en estos
//! bytes: se envía como una segunda escritura directa desde el buffer
//! (texto y binario no se representan uniformemente en un solo string).

/// Cuerpo de una respuesta: exactamente una variante activa
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Cuerpo de texto (HTML, JSON, etc.)
    Text(String),

    /// Cuerpo binario (imágenes, archivos, etc.)
    Binary(Vec<u8>),
}

/// Representa la respuesta que el handler construye por request
///
/// El `content_type` es responsabilidad del caller: esta capa no valida
/// que sea consistente con la variante del cuerpo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Código de estado HTTP (200, 400, etc.)
    status_code: u16,

    /// Valor del header Content-Type
    content_type: String,

    /// Cuerpo de la respuesta
    body: Body,
}

impl Response {
    /// Crea una nueva respuesta
    ///
    /// # Ejemplo
    /// ```
    /// use tiny_server::http::{Body, Response};
    ///
    /// let response = Response::new(200, "text/html", Body::Text("<h1>Hola</h1>".to_string()));
    /// assert_eq!(response.status_code(), 200);
    /// ```
    pub fn new(status_code: u16, content_type: &str, body: Body) -> Self {
        Self {
            status_code,
            content_type: content_type.to_string(),
            body,
        }
    }

    /// Atajo para respuestas de texto
    ///
    /// # Ejemplo
    /// ```
    /// use tiny_server::http::Response;
    ///
    /// let response = Response::text(200, "text/plain", "hola");
    /// assert_eq!(response.body_as_text(), Some("hola"));
    /// ```
    pub fn text(status_code: u16, content_type: &str, body: &str) -> Self {
        Self::new(status_code, content_type, Body::Text(body.to_string()))
    }

    /// Convierte la respuesta a los bytes de la primera escritura
    ///
    /// Genera la status line, `Content-Type`, `Content-Length`, la línea
    /// en blanco separadora y, solo para la variante de texto, el cuerpo
    /// pegado directamente (sin CRLF final). El payload binario queda
    /// fuera a propósito: ver [`Response::binary_data`].
    ///
    /// # Ejemplo
    /// ```
    /// use tiny_server::http::Response;
    ///
    /// let bytes = Response::text(200, "text/html", "hi").to_bytes();
    /// assert_eq!(
    ///     bytes,
    ///     b"HTTP/1.1 200\r\nContent-Type: text/html\r\nContent-Length: 2\r\n\r\nhi"
    /// );
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut response = format!("HTTP/1.1 {}\r\n", self.status_code);
        response.push_str(&format!("Content-Type: {}\r\n", self.content_type));

        match &self.body {
            Body::Text(text) => {
                response.push_str(&format!("Content-Length: {}\r\n", text.len()));
                response.push_str("\r\n");
                response.push_str(text);
            }
            Body::Binary(payload) => {
                response.push_str(&format!("Content-Length: {}\r\n", payload.len()));
                response.push_str("\r\n");
            }
        }

        response.into_bytes()
    }

    /// Obtiene el payload binario para la segunda escritura, si aplica
    pub fn binary_data(&self) -> Option<&[u8]> {
        match &self.body {
            Body::Binary(payload) => Some(payload),
            Body::Text(_) => None,
        }
    }

    /// Obtiene el cuerpo como texto, si la variante activa es de texto
    pub fn body_as_text(&self) -> Option<&str> {
        match &self.body {
            Body::Text(text) => Some(text),
            Body::Binary(_) => None,
        }
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Obtiene el Content-Type de la respuesta
    pub fn content_type(&self) -> &str {
        &self.content_type
    }
}
