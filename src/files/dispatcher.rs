use std::io::{self, SeekFrom};
use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncSeekExt, AsyncWrite};

use crate::files::resolve::resolve_path;
use crate::files::streamer::stream_file;
use crate::http::mime::mime_type;
use crate::http::response::{format_success_header, StatusCode};
use crate::http::writer::ResponseWriter;

/// What was sent back for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    /// Body bytes streamed, zero for error replies.
    pub body_bytes: u64,
}

/// Answers a GET for `target` (relative to `root`) with the file's content,
/// or with a 404 when it cannot be served.
///
/// `Content-Length` is the size seen when the file is opened; bytes appended
/// afterwards are still streamed.
pub async fn send_reply<W>(
    writer: &mut ResponseWriter<'_, W>,
    buf: &mut [u8],
    root: &Path,
    target: &str,
) -> io::Result<Reply>
where
    W: AsyncWrite + Unpin,
{
    let path = match resolve_path(root, target) {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!(path = %target, reason = ?e, "Rejected request path");
            return send_not_found(writer, buf).await;
        }
    };

    let Some(mut file) = open_file(&path).await else {
        tracing::debug!(path = %path.display(), "File not found");
        return send_not_found(writer, buf).await;
    };

    let size = file.seek(SeekFrom::End(0)).await?;
    let header_len = format_success_header(buf, mime_type(target), size)?;
    let body_bytes = stream_file(&mut file, writer, buf, header_len).await?;

    Ok(Reply {
        status: StatusCode::Ok,
        body_bytes,
    })
}

/// Opens `path` for reading if it names a regular file.
async fn open_file(path: &Path) -> Option<File> {
    let file = File::open(path).await.ok()?;
    match file.metadata().await {
        Ok(meta) if meta.is_file() => Some(file),
        _ => None,
    }
}

async fn send_not_found<W>(writer: &mut ResponseWriter<'_, W>, buf: &mut [u8]) -> io::Result<Reply>
where
    W: AsyncWrite + Unpin,
{
    writer.send_error(buf, StatusCode::NotFound).await?;
    Ok(Reply {
        status: StatusCode::NotFound,
        body_bytes: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn serve(root: &Path, target: &str) -> (Reply, Vec<u8>) {
        let mut out = Vec::new();
        let mut buf = vec![0u8; 1024];
        let mut writer = ResponseWriter::new(&mut out);
        let reply = send_reply(&mut writer, &mut buf, root, target).await.unwrap();
        (reply, out)
    }

    #[tokio::test]
    async fn serves_existing_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("hello.txt"), b"hi there").unwrap();

        let (reply, out) = serve(dir.path(), "hello.txt").await;
        assert_eq!(reply.status, StatusCode::Ok);
        assert_eq!(reply.body_bytes, 8);
        assert_eq!(
            out,
            b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 8\r\n\r\nhi there"
        );
    }

    #[tokio::test]
    async fn missing_file_is_404() {
        let dir = TempDir::new().unwrap();
        let (reply, out) = serve(dir.path(), "nope.html").await;
        assert_eq!(reply.status, StatusCode::NotFound);
        assert!(out.starts_with(b"HTTP/1.1 404 Not Found\r\n"));
    }

    #[tokio::test]
    async fn directory_is_404() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let (reply, _) = serve(dir.path(), "sub").await;
        assert_eq!(reply.status, StatusCode::NotFound);

        let (reply, _) = serve(dir.path(), "").await;
        assert_eq!(reply.status, StatusCode::NotFound);
    }

    #[tokio::test]
    async fn traversal_is_404() {
        let dir = TempDir::new().unwrap();
        let inner = dir.path().join("www");
        std::fs::create_dir(&inner).unwrap();
        std::fs::write(dir.path().join("secret.txt"), b"s3cret").unwrap();

        let (reply, out) = serve(&inner, "../secret.txt").await;
        assert_eq!(reply.status, StatusCode::NotFound);
        assert!(!out.windows(6).any(|w| w == b"s3cret"));
    }
}
