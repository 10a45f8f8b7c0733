//! Static file serving.
//!
//! - **`resolve`**: maps a request target onto the document root
//! - **`dispatcher`**: opens the file and sends the `200 OK` header, or a 404
//! - **`streamer`**: copies the file body to the client through the shared buffer

pub mod dispatcher;
pub mod resolve;
pub mod streamer;

pub use dispatcher::{send_reply, Reply};
pub use resolve::{resolve_path, ResolveError};
