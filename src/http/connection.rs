use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::files::{send_reply, Reply};
use crate::http::buffer::IoBuffer;
use crate::http::parser::{parse_request, request_line};
use crate::http::writer::ResponseWriter;

/// One accepted client: a single request is read, answered and the
/// connection is closed.
pub struct Connection<'a, S> {
    stream: S,
    peer: SocketAddr,
    buffer: &'a mut IoBuffer,
    root: &'a Path,
}

impl<'a, S> Connection<'a, S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: SocketAddr, buffer: &'a mut IoBuffer, root: &'a Path) -> Self {
        Self {
            stream,
            peer,
            buffer,
            root,
        }
    }

    /// Answers the connection's one request and closes it.
    ///
    /// Returns `Ok(None)` when the client went away while the reply was being
    /// sent; that is logged here and is not an error for the caller. Read
    /// failures are returned as errors.
    pub async fn run(mut self) -> anyhow::Result<Option<Reply>> {
        let result = self.respond().await;

        // The stream is dropped (and closed) below whatever happened above.
        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(peer = %self.peer, error = %e, "Shutdown failed");
        }

        result
    }

    async fn respond(&mut self) -> anyhow::Result<Option<Reply>> {
        let n = self
            .stream
            .read(self.buffer.request_span())
            .await
            .context("failed to read request")?;

        tracing::info!(
            peer = %self.peer,
            request = %request_line(&self.buffer[..n]),
            "Received request"
        );

        // The target is copied out because the buffer is about to be reused
        // for the response header.
        let parsed = parse_request(&self.buffer[..n]).map(|req| req.path.to_owned());

        let mut writer = ResponseWriter::new(&mut self.stream);
        let sent = match parsed {
            Ok(target) => send_reply(&mut writer, &mut self.buffer[..], self.root, &target).await,
            Err(e) => {
                let status = e.status();
                writer
                    .send_error(&mut self.buffer[..], status)
                    .await
                    .map(|()| Reply {
                        status,
                        body_bytes: 0,
                    })
            }
        };

        let reply = match sent {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(
                    peer = %self.peer,
                    written = writer.written(),
                    error = %e,
                    "Response aborted, closing connection"
                );
                return Ok(None);
            }
        };

        tracing::debug!(
            peer = %self.peer,
            status = reply.status.as_u16(),
            body_bytes = reply.body_bytes,
            written = writer.written(),
            "Response sent"
        );

        Ok(Some(reply))
    }
}
