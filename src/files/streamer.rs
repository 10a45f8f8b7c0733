use std::io::{self, SeekFrom};

use tokio::io::{AsyncRead, AsyncReadExt, AsyncSeek, AsyncSeekExt, AsyncWrite};

use crate::http::writer::ResponseWriter;

/// Streams `file` from its start through `buf`, reusing the buffer for
/// every chunk.
///
/// `buf[..header_len]` holds a header that has not been sent yet; it goes
/// out together with the first chunk, which is read in right behind it.
/// Later chunks use the whole buffer. Streaming stops at the first chunk
/// that comes back shorter than the space it was read into.
///
/// Returns the number of body bytes sent.
pub async fn stream_file<R, W>(
    file: &mut R,
    writer: &mut ResponseWriter<'_, W>,
    buf: &mut [u8],
    header_len: usize,
) -> io::Result<u64>
where
    R: AsyncRead + AsyncSeek + Unpin,
    W: AsyncWrite + Unpin,
{
    file.seek(SeekFrom::Start(0)).await?;

    let mut start = header_len;
    let mut body = 0u64;

    loop {
        let chunk_size = buf.len() - start;
        let n = read_chunk(file, &mut buf[start..]).await?;

        let pending = start + n;
        if pending > 0 {
            writer.send(&buf[..pending]).await?;
        }
        body += n as u64;

        if n < chunk_size {
            break;
        }

        start = 0;
    }

    writer.flush().await?;
    Ok(body)
}

/// Fills `chunk` unless the file ends first.
async fn read_chunk<R>(file: &mut R, chunk: &mut [u8]) -> io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut filled = 0;
    while filled < chunk.len() {
        match file.read(&mut chunk[filled..]).await {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
