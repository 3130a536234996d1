//! # Servidor TCP Bloqueante
//! src/server/tcp.rs
//!
//! Implementación del servidor que posee el socket de escucha y el bucle
//! de accept. Es de un solo hilo y totalmente síncrono: cada conexión se
//! procesa completa (read → parse → handler → write → close) antes de
//! aceptar la siguiente. No hay timeouts en accept/read/write, así que
//! un cliente lento detiene el servidor entero; es un límite explícito
//! del diseño, no un descuido. Cualquier versión concurrente sería una
//! extensión, no algo implícito aquí.

use crate::http::{Request, Response};
use socket2::{Domain, Protocol, Socket, Type};
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};

/// Tamaño del buffer de lectura por conexión
///
/// Se hace una sola lectura, sin bucle: un request más grande que esto
/// llega truncado. Limitación de alcance conocida del diseño original.
const READ_BUFFER_SIZE: usize = 1024;

/// Backlog del socket de escucha
const BACKLOG: i32 = 10;

/// Función handler: el único punto de extensión del servidor
///
/// Mapea un `Request` a una `Response` de forma síncrona. El servidor no
/// asume nada sobre su interior ni captura sus panics.
pub type RequestHandler = Box<dyn Fn(&Request) -> Response + Send>;

/// Servidor HTTP mínimo: una conexión a la vez, E/S bloqueante
pub struct Server {
    port: u16,
    handler: RequestHandler,
    listener: Option<TcpListener>,
}

impl Server {
    /// Crea un servidor con el puerto y el handler de la aplicación
    ///
    /// # Ejemplo
    /// ```
    /// use tiny_server::http::Response;
    /// use tiny_server::server::Server;
    ///
    /// let server = Server::new(8080, |req| {
    ///     Response::text(200, "text/plain", req.path())
    /// });
    /// # let _ = server;
    /// ```
    pub fn new(port: u16, handler: impl Fn(&Request) -> Response + Send + 'static) -> Self {
        Self {
            port,
            handler: Box::new(handler),
            listener: None,
        }
    }

    /// Crea el socket de escucha en `0.0.0.0:<puerto>`
    ///
    /// Configura `SO_REUSEADDR` y un backlog de 10. Cualquier fallo aquí
    /// es fatal de arranque: sin socket de escucha no hay servidor, así
    /// que el error se propaga y el proceso debe terminar (no hay retry
    /// ni puerto alternativo).
    pub fn bind(&mut self) -> io::Result<()> {
        let socket = Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))?;
        socket.set_reuse_address(true)?;

        let address = SocketAddr::from(([0, 0, 0, 0], self.port));
        socket.bind(&address.into())?;
        socket.listen(BACKLOG)?;

        self.listener = Some(socket.into());
        Ok(())
    }

    /// Dirección real del socket de escucha, si ya se hizo `bind`
    ///
    /// Útil para tests que se enlazan al puerto 0 (efímero).
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().and_then(|l| l.local_addr().ok())
    }

    /// Bucle principal: acepta y atiende conexiones indefinidamente
    ///
    /// Un accept fallido se loguea y el bucle continúa: una conexión
    /// fallida nunca tumba el servidor. Los errores de E/S dentro de una
    /// conexión también se quedan en esa conexión.
    pub fn run(&mut self) -> io::Result<()> {
        if self.listener.is_none() {
            self.bind()?;
        }

        println!("[+] Servidor escuchando en el puerto {}", self.port);

        let listener = self.listener.as_ref().unwrap();
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    if let Err(e) = Self::handle_connection(stream, &self.handler) {
                        eprintln!("[-] Error de E/S en la conexión: {}", e);
                    }
                }
                Err(e) => {
                    eprintln!("[-] Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Atiende una conexión completa: read → parse → handler → write
    ///
    /// El stream se cierra (drop) en todos los caminos de salida. En caso
    /// de fallo de parseo el cliente no recibe ningún byte: se loguea el
    /// error y se cierra la conexión en silencio.
    fn handle_connection(mut stream: TcpStream, handler: &RequestHandler) -> io::Result<()> {
        // Lectura única de tamaño fijo, sin bucle de relectura
        let mut buffer = [0u8; READ_BUFFER_SIZE];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            println!("[-] Conexión sin datos, se cierra");
            return Ok(());
        }

        let request = match Request::parse(&buffer[..bytes_read]) {
            Ok(request) => request,
            Err(e) => {
                eprintln!("[-] Request inválido: {}", e);
                return Ok(());
            }
        };

        let response = (handler)(&request);

        // Primera escritura: status line + headers (+ cuerpo de texto)
        stream.write_all(&response.to_bytes())?;

        // Segunda escritura: el payload binario va directo desde el buffer
        if let Some(payload) = response.binary_data() {
            stream.write_all(payload)?;
        }
        stream.flush()?;

        // Log de diagnóstico, no un canal de errores
        if response.status_code() != 200 {
            println!("[-] Respuesta fallida en '{}':", request.path());
            println!("    {:?}", response);
        }

        Ok(())
    }
}
