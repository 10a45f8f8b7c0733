use std::io::{self, Cursor, Write};

const HTTP_VERSION: &str = "HTTP/1.1";

/// HTTP status codes the server can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use filehost::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
        }
    }

    /// The status actually reported for an error reply. Anything other than
    /// 404 is answered as a bad request.
    pub fn as_error(self) -> StatusCode {
        match self {
            StatusCode::NotFound => StatusCode::NotFound,
            _ => StatusCode::BadRequest,
        }
    }

    /// Plain-text body sent with an error reply.
    pub fn error_body(&self) -> &'static str {
        match self.as_error() {
            StatusCode::NotFound => "File not found",
            _ => "Request is not supported",
        }
    }
}

/// Formats a complete error response into the front of `buf` and returns
/// how many bytes it takes.
pub fn format_error(buf: &mut [u8], status: StatusCode) -> io::Result<usize> {
    let status = status.as_error();
    let mut cursor = Cursor::new(buf);
    write!(
        cursor,
        "{} {} {}\r\nContent-Type: text/plain\r\nConnection: close\r\n\r\n{}\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase(),
        status.error_body()
    )?;
    Ok(cursor.position() as usize)
}

/// Formats the `200 OK` header for a file body into the front of `buf`.
///
/// Returns the offset right after the blank line, where the body may start.
/// Fails with `WriteZero` when the header does not fit.
pub fn format_success_header(
    buf: &mut [u8],
    content_type: &str,
    content_length: u64,
) -> io::Result<usize> {
    let status = StatusCode::Ok;
    let mut cursor = Cursor::new(buf);
    write!(
        cursor,
        "{} {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase(),
        content_type,
        content_length
    )?;
    Ok(cursor.position() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_header_layout() {
        let mut buf = [0u8; 128];
        let n = format_success_header(&mut buf, "text/html", 11).unwrap();
        assert_eq!(
            &buf[..n],
            b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 11\r\n\r\n"
        );
    }

    #[test]
    fn header_that_does_not_fit_is_an_error() {
        let mut buf = [0u8; 16];
        let err = format_success_header(&mut buf, "text/plain", 1).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
    }
}
