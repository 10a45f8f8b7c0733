use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{error, info};

use crate::config::{Config, ServerConfig, StaticConfig};
use crate::http::buffer::IoBuffer;
use crate::http::connection::Connection;

/// Creates the listening socket with `SO_REUSEADDR` and the configured backlog.
pub fn bind(cfg: &ServerConfig) -> anyhow::Result<TcpListener> {
    let addr = cfg.socket_addr()?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()
    } else {
        TcpSocket::new_v6()
    }
    .context("failed to create server socket")?;

    socket
        .set_reuseaddr(true)
        .context("failed to set SO_REUSEADDR")?;
    socket
        .bind(addr)
        .with_context(|| format!("failed to bind {}", addr))?;

    socket
        .listen(cfg.backlog)
        .with_context(|| format!("failed to listen on {}", addr))
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(&cfg.server)?;
    info!(
        backlog = cfg.server.backlog,
        root = %cfg.static_files.root.display(),
        "Listening on {}",
        listener.local_addr()?
    );

    serve(listener, &cfg.static_files).await
}

/// Accepts and answers connections one after another, forever.
///
/// Each connection is finished before the next is accepted, so a single
/// buffer serves all of them. Accept, read and send failures are logged and
/// never end the loop.
pub async fn serve(listener: TcpListener, cfg: &StaticConfig) -> anyhow::Result<()> {
    let mut buffer = IoBuffer::with_capacity(cfg.buffer_size);

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Failed to accept connection: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let conn = Connection::new(socket, peer, &mut buffer, &cfg.root);
        if let Err(e) = conn.run().await {
            error!("Connection error from {}: {:#}", peer, e);
        }
    }
}
