//! # Parsing de Requests HTTP
//! src/http/request.rs
//!
//! Este módulo convierte el buffer crudo leído del socket en un `Request`
//! inmutable, o falla con un `ParseError` tipado.
//!
//! ## Formato esperado
//!
//! ```text
//! GET /ruta HTTP/1.1
//! Host: localhost:8080
//!
//! { "opcional": "cuerpo JSON" }
//! ```
//!
//! El framing es deliberadamente simple: la cabecera y el payload se
//! separan en la **primera** línea en blanco (`"\n\n"`). De la request
//! line solo se consumen los dos primeros tokens (método y path); la
//! versión HTTP y las líneas de headers se toleran pero no se usan.

/// Métodos HTTP soportados
///
/// El token del wire es case-insensitive; se almacena canonicalizado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// POST - Enviar datos a un recurso
    POST,

    /// PATCH - Modificación parcial de un recurso
    PATCH,

    /// PUT - Reemplazo completo de un recurso
    PUT,

    /// DELETE - Eliminar un recurso
    DELETE,
}

impl Method {
    /// Parsea un método HTTP desde el token (ya en minúsculas) de la request line
    ///
    /// # Errores
    ///
    /// Retorna error si el método no pertenece al conjunto cerrado
    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "get" => Ok(Method::GET),
            "post" => Ok(Method::POST),
            "patch" => Ok(Method::PATCH),
            "put" => Ok(Method::PUT),
            "delete" => Ok(Method::DELETE),
            _ => Err(ParseError::InvalidMethod(s.to_string())),
        }
    }

    /// Convierte el método a string canónico
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PATCH => "PATCH",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
        }
    }
}

/// Representa un request HTTP parseado
///
/// Se construye una vez por conexión y no se modifica después.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Método HTTP canonicalizado
    method: Method,

    /// Path sin el `/` inicial (el path raíz queda como `""`)
    path: String,

    /// Cuerpo JSON normalizado, si el request traía payload
    body: Option<Vec<u8>>,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// La request line no tiene ningún token
    NoMethodFound,

    /// El primer token no es un método del conjunto cerrado
    InvalidMethod(String),

    /// La request line no tiene segundo token
    NoPathFound,

    /// El payload existe pero no es JSON válido
    InvalidBody(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::NoMethodFound => write!(f, "No method found in request line"),
            ParseError::InvalidMethod(m) => write!(f, "Invalid HTTP method: {}", m),
            ParseError::NoPathFound => write!(f, "No path found in request line"),
            ParseError::InvalidBody(e) => write!(f, "Invalid JSON body: {}", e),
        }
    }
}

impl std::error::Error for ParseError {}

impl Request {
    /// Construye un request directamente, sin pasar por el wire
    ///
    /// Útil para testear handlers sin abrir sockets.
    pub fn new(method: Method, path: &str, body: Option<Vec<u8>>) -> Self {
        Self {
            method,
            path: path.to_string(),
            body,
        }
    }

    /// Parsea un request HTTP desde el buffer crudo del socket
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use tiny_server::http::{Method, Request};
    ///
    /// let request = Request::parse(b"GET /saludo HTTP/1.1\n\n").unwrap();
    ///
    /// assert_eq!(request.method(), Method::GET);
    /// assert_eq!(request.path(), "saludo");
    /// assert!(request.body().is_none());
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        // Decodificar como texto (bytes inválidos se reemplazan, no abortan)
        let text = String::from_utf8_lossy(buffer);
        Self::from_text(&text)
    }

    fn from_text(text: &str) -> Result<Self, ParseError> {
        // 1. Separar cabecera y payload en la primera línea en blanco
        let (head, payload) = match text.split_once("\n\n") {
            Some((head, payload)) => (head, Some(payload)),
            None => (text, None),
        };

        // 2. Tokenizar la request line; solo importan los tokens 0 y 1
        let request_line = head.lines().next().unwrap_or("");
        let mut tokens = request_line.split_whitespace();

        let method = Self::parse_method(tokens.next())?;
        let path = Self::parse_path(tokens.next())?;
        let body = match payload {
            Some(payload) => Self::parse_body(payload)?,
            None => None,
        };

        Ok(Request { method, path, body })
    }

    /// Parsea el token de método (case-insensitive en el wire)
    fn parse_method(token: Option<&str>) -> Result<Method, ParseError> {
        let token = token.ok_or(ParseError::NoMethodFound)?;
        Method::from_str(&token.to_lowercase())
    }

    /// Parsea el token de path, quitando exactamente un `/` inicial
    ///
    /// El path raíz `/` queda representado como string vacío.
    fn parse_path(token: Option<&str>) -> Result<String, ParseError> {
        let token = token.ok_or(ParseError::NoPathFound)?;
        Ok(token.strip_prefix('/').unwrap_or(token).to_string())
    }

    /// Normaliza el payload: parse JSON + re-encode con formato estable
    ///
    /// Un payload de solo whitespace se trata como "sin cuerpo", no como
    /// error. Un payload no-JSON sí es `InvalidBody`: este servidor no
    /// transporta cuerpos que no sean JSON.
    fn parse_body(payload: &str) -> Result<Option<Vec<u8>>, ParseError> {
        let trimmed = payload.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let value: serde_json::Value = serde_json::from_str(trimmed)
            .map_err(|e| ParseError::InvalidBody(e.to_string()))?;
        let normalized = serde_json::to_vec_pretty(&value)
            .map_err(|e| ParseError::InvalidBody(e.to_string()))?;

        Ok(Some(normalized))
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> Method {
        self.method
    }

    /// Obtiene el path del request (sin `/` inicial)
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene el cuerpo JSON normalizado, si existe
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_simple_get() {
        let request = Request::parse(b"GET /hola HTTP/1.1\n\n").unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.path(), "hola");
        assert!(request.body().is_none());
    }

    #[test]
    fn test_parse_root_path_is_empty() {
        let request = Request::parse(b"GET / HTTP/1.1\n\n").unwrap();

        assert_eq!(request.path(), "");
    }

    #[test]
    fn test_parse_all_methods_case_insensitive() {
        let cases = [
            ("GET", Method::GET),
            ("get", Method::GET),
            ("PoSt", Method::POST),
            ("patch", Method::PATCH),
            ("PUT", Method::PUT),
            ("delete", Method::DELETE),
        ];

        for (wire, expected) in cases {
            let raw = format!("{} /ruta HTTP/1.1\n\n", wire);
            let request = Request::parse(raw.as_bytes()).unwrap();
            assert_eq!(request.method(), expected, "método {}", wire);
            assert_eq!(request.path(), "ruta");
        }
    }

    #[test]
    fn test_parse_tolerates_extra_tokens_and_headers() {
        let raw = b"GET /ruta HTTP/1.1 extra tokens\nHost: localhost\nX-Otro: valor\n\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.path(), "ruta");
    }

    #[test]
    fn test_parse_path_without_leading_slash() {
        let request = Request::parse(b"GET ruta HTTP/1.1\n\n").unwrap();

        // Sin `/` inicial el token se conserva tal cual
        assert_eq!(request.path(), "ruta");
    }

    #[test]
    fn test_parse_strips_only_one_slash() {
        let request = Request::parse(b"GET //doble HTTP/1.1\n\n").unwrap();

        assert_eq!(request.path(), "/doble");
    }

    #[test]
    fn test_parse_no_method() {
        let result = Request::parse(b"\n\n");

        assert_eq!(result, Err(ParseError::NoMethodFound));
    }

    #[test]
    fn test_parse_invalid_method() {
        let result = Request::parse(b"BREW /cafe HTTP/1.1\n\n");

        assert_eq!(result, Err(ParseError::InvalidMethod("brew".to_string())));
    }

    #[test]
    fn test_parse_no_path() {
        let result = Request::parse(b"GET\n\n");

        assert_eq!(result, Err(ParseError::NoPathFound));
    }

    #[test]
    fn test_parse_json_body_is_normalized() {
        let request = Request::parse(b"POST /datos HTTP/1.1\n\n{\"a\":1}").unwrap();

        let expected = serde_json::to_vec_pretty(&json!({"a": 1})).unwrap();
        assert_eq!(request.body(), Some(expected.as_slice()));
    }

    #[test]
    fn test_parse_whitespace_payload_is_no_body() {
        let request = Request::parse(b"POST /datos HTTP/1.1\n\n   \n  ").unwrap();

        assert!(request.body().is_none());
    }

    #[test]
    fn test_parse_invalid_json_body() {
        let result = Request::parse(b"POST /datos HTTP/1.1\n\n{not json");

        assert!(matches!(result, Err(ParseError::InvalidBody(_))));
    }

    #[test]
    fn test_parse_no_blank_line_means_no_body() {
        let request = Request::parse(b"GET /ruta HTTP/1.1\nHost: localhost").unwrap();

        assert!(request.body().is_none());
    }

    #[test]
    fn test_getters_match_direct_construction() {
        // Los getters method()/path()/body() deben resolver como métodos
        // de instancia tanto para requests parseados como construidos
        let parsed = Request::parse(b"PUT /recurso HTTP/1.1\n\n").unwrap();
        let built = Request::new(Method::PUT, "recurso", None);

        assert_eq!(parsed, built);
        assert_eq!(parsed.method(), built.method());
        assert_eq!(parsed.path(), built.path());
        assert_eq!(parsed.body(), built.body());
    }

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            ParseError::InvalidMethod("brew".to_string()).to_string(),
            "Invalid HTTP method: brew"
        );
        assert_eq!(
            ParseError::NoPathFound.to_string(),
            "No path found in request line"
        );
    }
}
