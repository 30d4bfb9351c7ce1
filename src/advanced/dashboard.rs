//! Report server: serves the generated report directory over plain HTTP.
//!
//! - `GET /` → `index.html`
//! - `GET /<file>` → a figure or the timeline CSV from the report directory
//!
//! One thread per request; the accept loop runs until the process exits.

use std::{
    fs,
    io::{BufRead, BufReader, Write},
    net::{SocketAddr, TcpListener, TcpStream},
    path::{Path, PathBuf},
    thread,
};

use log::{error, info, warn};
use socket2::{Domain, SockAddr, Socket, Type};

use crate::utils::errors::Result;

/// Binds `127.0.0.1:<port>` with address reuse.
pub fn bind_listener(port: u16) -> Result<TcpListener> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let socket = Socket::new(Domain::IPV4, Type::STREAM, None)?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    if let Err(e) = socket.set_reuse_port(true) {
        warn!("SO_REUSEPORT unavailable on port {}: {}", port, e);
    }

    socket.bind(&SockAddr::from(addr))?;
    socket.listen(128)?;
    Ok(socket.into())
}

/// Blocks serving `report_dir` on `port`.
pub fn serve(report_dir: &Path, port: u16) -> Result<()> {
    let listener = bind_listener(port)?;
    info!("Report available at http://127.0.0.1:{}", port);
    serve_listener(listener, report_dir.to_path_buf());
    Ok(())
}

pub fn serve_listener(listener: TcpListener, report_dir: PathBuf) {
    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                let dir = report_dir.clone();
                thread::spawn(move || {
                    if let Err(e) = handle_request(&mut stream, &dir) {
                        warn!("request failed: {}", e);
                    }
                });
            }
            Err(e) => error!("Accept error: {}", e),
        }
    }
    info!("Report server exiting accept loop");
}

fn handle_request(stream: &mut TcpStream, report_dir: &Path) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let (status, content_type, body) = match request_target(&line) {
        Some(target) => match resolve(report_dir, target) {
            Some(path) => match fs::read(&path) {
                Ok(bytes) => ("200 OK", content_type(&path), bytes),
                Err(_) => ("404 Not Found", "text/plain", b"Not found".to_vec()),
            },
            None => ("404 Not Found", "text/plain", b"Not found".to_vec()),
        },
        None => ("400 Bad Request", "text/plain", b"Bad request".to_vec()),
    };

    let header = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        content_type,
        body.len()
    );
    stream.write_all(header.as_bytes())?;
    stream.write_all(&body)?;
    stream.flush()
}

/// Path of a `GET` request line, e.g. `/index.html`.
fn request_target(request_line: &str) -> Option<&str> {
    let mut parts = request_line.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("GET"), Some(target)) => Some(target.split('?').next().unwrap_or(target)),
        _ => None,
    }
}

/// Maps a request path to a file directly inside `report_dir`.
fn resolve(report_dir: &Path, target: &str) -> Option<PathBuf> {
    let name = target.trim_start_matches('/');
    let name = if name.is_empty() { "index.html" } else { name };
    if name.contains('/') || name.contains('\\') || name.starts_with('.') {
        return None;
    }
    Some(report_dir.join(name))
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("csv") => "text/csv",
        _ => "application/octet-stream",
    }
}
