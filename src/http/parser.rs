use crate::http::response::StatusCode;

const REQUEST_PREFIX: &[u8] = b"GET /";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Shorter than `GET /` or not a GET for an absolute target.
    BadRequest,
    /// Request line ends (or the read ends) before the target's space.
    NotFound,
}

impl ParseError {
    pub fn status(&self) -> StatusCode {
        match self {
            ParseError::BadRequest => StatusCode::BadRequest,
            ParseError::NotFound => StatusCode::NotFound,
        }
    }
}

/// A validated GET request. `path` borrows the request bytes and has the
/// leading `/` stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request<'a> {
    pub path: &'a str,
}

/// Parses the request line out of the bytes read from a connection.
///
/// Only `buf` is inspected, so callers pass exactly the bytes received.
/// Scanning starts after `GET /` and stops at the first space (end of the
/// target) or the first `\r` (request line without a version).
pub fn parse_request(buf: &[u8]) -> Result<Request<'_>, ParseError> {
    if !buf.starts_with(REQUEST_PREFIX) {
        return Err(ParseError::BadRequest);
    }

    let rest = &buf[REQUEST_PREFIX.len()..];
    let end = rest
        .iter()
        .position(|b| *b == b' ' || *b == b'\r')
        .ok_or(ParseError::NotFound)?;

    if rest[end] == b'\r' {
        return Err(ParseError::NotFound);
    }

    let path = std::str::from_utf8(&rest[..end]).map_err(|_| ParseError::NotFound)?;
    Ok(Request { path })
}

/// First line of a raw request, for logging.
pub fn request_line(buf: &[u8]) -> String {
    let end = buf
        .windows(2)
        .position(|w| w == b"\r\n")
        .unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}
