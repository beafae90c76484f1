use std::net::SocketAddr;
use std::sync::Arc;
use log::{debug, error, info, warn};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tokio_shutdown::Shutdown;
use crate::peer::enums::peer_role::PeerRole;
use crate::peer::structs::peer_connection::PeerConnection;
use crate::peer::structs::peer_handle::PeerHandle;
use crate::store::structs::registry::Registry;

/// Binds the peers listener and accepts connections until shutdown.
pub async fn peer_service(addr: SocketAddr, registry: Arc<Registry>, shutdown: Shutdown) -> std::io::Result<JoinHandle<()>>
{
    let listener = TcpListener::bind(addr).await?;
    info!("[PEER] Listening for peers on {} (mode {})", addr, registry.config.peer.mode);

    Ok(tokio::spawn(async move {
        loop {
            tokio::select! {
                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, remote)) => {
                            if let Err(error) = stream.set_nodelay(true) {
                                debug!("[PEER] Unable to set TCP_NODELAY for {remote}: {error}");
                            }
                            spawn_connection(stream, remote.to_string(), registry.clone(), PeerRole::Accept);
                        }
                        Err(error) => error!("[PEER] Accept failed: {error}"),
                    }
                }
                _ = shutdown.handle() => {
                    info!("[BOOT] Shutting down peer listener...");
                    return;
                }
            }
        }
    }))
}

/// Registers a peer for `stream` and starts its reader and writer tasks.
pub fn spawn_connection<S>(stream: S, address: String, registry: Arc<Registry>, role: PeerRole) -> JoinHandle<()>
where
    S: AsyncRead + AsyncWrite + Send + 'static,
{
    let (read_half, write_half) = tokio::io::split(stream);
    let (handle, outbox) = PeerHandle::new(registry.next_peer_id(), address);
    let handle = Arc::new(handle);
    registry.register_peer(handle.clone());

    tokio::spawn(outbox_writer(write_half, outbox, handle.id));
    tokio::spawn(PeerConnection::new(handle, registry, read_half, role).run())
}

/// Drains the outbox into the socket until every sender is gone.
pub async fn outbox_writer<W: AsyncWrite + Unpin>(mut writer: W, mut outbox: UnboundedReceiver<Vec<u8>>, peer_id: u64)
{
    while let Some(bytes) = outbox.recv().await {
        if let Err(error) = writer.write_all(&bytes).await {
            debug!("[PEER] #{peer_id} write failed: {error}");
            return;
        }
    }
    let _ = writer.shutdown().await;
}

/// Dials every configured remote peer once.
pub async fn connect_remote_peers(registry: Arc<Registry>)
{
    for remote in registry.config.peer.remote_peers.clone() {
        match TcpStream::connect(&remote.address).await {
            Ok(stream) => {
                if let Err(error) = stream.set_nodelay(true) {
                    debug!("[PEER] Unable to set TCP_NODELAY for {}: {}", remote.address, error);
                }
                info!("[PEER] Connected to remote peer {} at {}", remote.name, remote.address);
                spawn_connection(stream, remote.address.clone(), registry.clone(), PeerRole::Initiate {
                    remote_name: remote.name.clone(),
                });
            }
            Err(error) => warn!("[PEER] Unable to reach remote peer {} at {}: {}", remote.name, remote.address, error),
        }
    }
}
