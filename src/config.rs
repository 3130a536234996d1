//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración mínima del proceso: el núcleo del servidor solo necesita
//! un puerto TCP; la ruta de la página compilada pertenece al binario de
//! demostración, no al núcleo.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./tiny_server --port 8080 --page ./output/index.html
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 PAGE_PATH=./output/index.html ./tiny_server
//! ```

use clap::Parser;

/// Configuración del servidor HTTP
#[derive(Debug, Clone, Parser)]
#[command(name = "tiny_server")]
#[command(about = "Servidor HTTP/1.1 mínimo sobre sockets TCP crudos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor (bind en 0.0.0.0)
    #[arg(short, long, default_value = "8080", env = "HTTP_PORT")]
    pub port: u16,

    /// Ruta de la página HTML compilada que sirve el binario demo
    #[arg(long, default_value = "./output/index.html", env = "PAGE_PATH")]
    pub page: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (0.0.0.0:puerto)
    ///
    /// # Ejemplo
    /// ```rust
    /// use tiny_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8080,
            page: "./output/index.html".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.page, "./output/index.html");
    }

    #[test]
    fn test_address() {
        let config = Config::default();
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_address_custom_port() {
        let mut config = Config::default();
        config.port = 3000;
        assert_eq!(config.address(), "0.0.0.0:3000");
    }
}
