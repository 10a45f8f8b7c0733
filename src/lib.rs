//! filehost - single-connection static file server
//!
//! Serves files from a document root over a minimal HTTP/1.1 subset, one
//! client at a time.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
