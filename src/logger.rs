//! Logging module
//!
//! One unstructured stream: info lines to stdout, warnings and errors to
//! stderr with a local timestamp prefix.

use crate::config::Config;
use chrono::Local;
use hyper::Method;
use std::net::SocketAddr;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Site server started");
    println!("Listening on: http://{addr}");
    println!("Templates: {}", config.ui.templates_dir);
    println!(
        "Static assets: {} (mounted at {})",
        config.ui.static_dir, config.ui.static_prefix
    );
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("======================================\n");
}

pub fn log_request(method: &Method, path: &str) {
    println!("[{}] {method} {path}", timestamp());
}

pub fn log_error(message: &str) {
    eprintln!("[{}] [ERROR] {message}", timestamp());
}

pub fn log_warning(message: &str) {
    eprintln!("[{}] [WARN] {message}", timestamp());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    log_error(&format!("Failed to serve connection: {err:?}"));
}

pub fn log_bind_failed(addr: &SocketAddr, err: &std::io::Error) {
    log_error(&format!("Failed to bind {addr}: {err}"));
}
