//! # Tiny Server - Entry Point
//! src/main.rs
//!
//! Binario de demostración: sirve una página HTML ya compilada (la salida
//! del compilador de componentes, que vive fuera de este proceso) en la
//! ruta raíz, y un error 400 para cualquier otra ruta.

use std::fs;

use tiny_server::config::Config;
use tiny_server::http::Response;
use tiny_server::server::Server;

/// Página de respaldo si todavía no existe la salida del compilador
const PLACEHOLDER_PAGE: &str = "<!DOCTYPE html>\n<html><body><h1>tiny_server</h1>\
<p>No compiled page found; serving placeholder.</p></body></html>";

fn main() {
    println!("=================================");
    println!("  Tiny HTTP/1.1 Server");
    println!("=================================\n");

    let config = Config::new();

    println!("[*] Configuración:");
    println!("    Dirección: {}", config.address());
    println!("    Página:    {}", config.page);
    println!();

    // La página se lee una sola vez, al arrancar; el hot-reload es
    // responsabilidad del watcher externo, no de este proceso
    let page = match fs::read_to_string(&config.page) {
        Ok(page) => page,
        Err(e) => {
            eprintln!("[-] No se pudo leer {} ({}), se usa el placeholder", config.page, e);
            PLACEHOLDER_PAGE.to_string()
        }
    };

    let mut server = Server::new(config.port, move |req| match req.path() {
        "" => Response::text(200, "text/html", &page),
        other => Response::text(
            400,
            "text/html",
            &format!("<h1>No endpoint found for {}</h1>", other),
        ),
    });

    // run() bloquea el hilo; solo retorna con error fatal de arranque
    if let Err(e) = server.run() {
        eprintln!("[-] Error fatal: {}", e);
        std::process::exit(1);
    }
}
