use std::sync::Arc;
use std::time::Duration;
use log::{info, warn};
use tokio::io::AsyncRead;
use crate::peer::enums::connection_state::ConnectionState;
use crate::peer::enums::echo_state::EchoState;
use crate::peer::enums::peer_role::PeerRole;
use crate::peer::structs::peer_connection::PeerConnection;
use crate::peer::structs::peer_handle::PeerHandle;
use crate::protocol::protocol::{control_frame, HEARTBEAT};
use crate::protocol::structs::frame_reader::FrameReader;
use crate::stats::enums::stats_event::StatsEvent;
use crate::store::structs::registry::Registry;

impl<R: AsyncRead + Unpin> PeerConnection<R> {
    pub fn new(handle: Arc<PeerHandle>, registry: Arc<Registry>, reader: R, role: PeerRole) -> PeerConnection<R> {
        PeerConnection {
            handle,
            registry,
            reader: FrameReader::new(reader),
            role,
            state: ConnectionState::AwaitingGreeting,
            current_schema: None,
            echo_state: EchoState::Normal,
        }
    }

    /// Handshake, then dispatch until the connection fails.
    pub async fn run(mut self) {
        let handshake = match self.role.clone() {
            PeerRole::Accept => self.accept_handshake().await,
            PeerRole::Initiate { remote_name } => self.initiate_handshake(&remote_name).await,
        };

        match handshake {
            Ok(()) => {
                self.spawn_keepalive();
                if let Err(error) = self.dispatch_loop().await {
                    info!("[PEER] #{} ({}) closed: {}", self.handle.id, self.handle.address, error);
                }
            }
            Err(error) => warn!("[PEER] #{} ({}) handshake failed: {}", self.handle.id, self.handle.address, error),
        }

        self.close();
    }

    fn spawn_keepalive(&self) {
        let interval = self.registry.config.peer.heartbeat_interval;
        if interval == 0 {
            return;
        }
        let handle = self.handle.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(interval));
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if !handle.send(control_frame(HEARTBEAT)) {
                    return;
                }
            }
        });
    }

    /// Marks the peer inactive and drops it from the registry.
    pub fn close(&mut self) {
        let was_active = self.state == ConnectionState::Active;
        self.state = ConnectionState::Closed;
        self.handle.deactivate();
        self.registry.unregister_peer(self.handle.id);
        if was_active {
            self.registry.update_stats(StatsEvent::PeersActive, -1);
        }
    }
}
