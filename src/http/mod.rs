//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one `GET` per connection, only the
//! request line is looked at, and every reply ends with the connection
//! being closed.
//!
//! # Architecture
//!
//! - **`buffer`**: the fixed-capacity I/O buffer shared by every stage of a request
//! - **`connection`**: reads one request, answers it and closes the connection
//! - **`parser`**: validates the request line and extracts the target path
//! - **`response`**: status codes and the byte layout of headers and error replies
//! - **`writer`**: sends response bytes to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Request lifecycle
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← one read of at most capacity - 1 bytes
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Parsing   │ ← `GET /<path> ` or a 400 / 404 reply
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │  Replying   │ ← header + file chunks through the same buffer
//!        └──────┬──────┘
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use filehost::http::{buffer::IoBuffer, connection::Connection};
//! use std::path::Path;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     let mut buffer = IoBuffer::with_capacity(1024);
//!
//!     loop {
//!         let (socket, peer) = listener.accept().await?;
//!         let conn = Connection::new(socket, peer, &mut buffer, Path::new("."));
//!         if let Err(e) = conn.run().await {
//!             eprintln!("Connection error: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod buffer;
pub mod connection;
pub mod mime;
pub mod parser;
pub mod response;
pub mod writer;
