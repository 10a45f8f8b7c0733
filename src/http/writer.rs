use std::io;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{format_error, StatusCode};

/// Sends response bytes to the client and counts what went out.
pub struct ResponseWriter<'s, W> {
    stream: &'s mut W,
    written: u64,
}

impl<'s, W> ResponseWriter<'s, W>
where
    W: AsyncWrite + Unpin,
{
    pub fn new(stream: &'s mut W) -> Self {
        Self { stream, written: 0 }
    }

    /// Total bytes handed to the stream so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub async fn send(&mut self, bytes: &[u8]) -> io::Result<()> {
        let mut sent = 0;
        while sent < bytes.len() {
            let n = self.stream.write(&bytes[sent..]).await?;

            if n == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "connection closed while writing",
                ));
            }

            sent += n;
            self.written += n as u64;
        }

        Ok(())
    }

    /// Formats the error reply for `status` into `buf` and sends it.
    pub async fn send_error(&mut self, buf: &mut [u8], status: StatusCode) -> io::Result<()> {
        let n = format_error(buf, status)?;
        self.send(&buf[..n]).await?;
        self.stream.flush().await
    }

    pub async fn flush(&mut self) -> io::Result<()> {
        self.stream.flush().await
    }
}
