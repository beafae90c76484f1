use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use tokio::io::AsyncRead;
use crate::peer::enums::connection_state::ConnectionState;
use crate::peer::enums::peer_error::PeerError;
use crate::peer::structs::peer_connection::PeerConnection;
use crate::protocol::protocol::{
    control_frame, status_line, status_reason, BAD_VERSION, PROTOCOL_ERROR, PROTOCOL_NAME, PROTOCOL_VERSION,
    REMOTE_ID_MISMATCH, SUCCEEDED, SYNCHRONIZATION_REQUEST,
};
use crate::stats::enums::stats_event::StatsEvent;

static GREETING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^HAProxyS\s+(\d+(\.\d+)?)").expect("valid pattern"));
static PEER_INFO: Lazy<Regex> = Lazy::new(|| Regex::new(r".+\s+\d+\s+\d+").expect("valid pattern"));

impl<R: AsyncRead + Unpin> PeerConnection<R> {
    /// Server side: greeting, remote id and peer info, answered with a status line.
    pub async fn accept_handshake(&mut self) -> Result<(), PeerError> {
        self.state = ConnectionState::AwaitingGreeting;
        let greeting = self.reader.read_line().await?;
        let version = match GREETING.captures(&greeting) {
            Some(captures) => captures[1].to_string(),
            None => return self.reject(PROTOCOL_ERROR, format!("malformed greeting {greeting:?}")),
        };
        if version != PROTOCOL_VERSION {
            warn!("[PEER] #{} speaks protocol {}, expected {}", self.handle.id, version, PROTOCOL_VERSION);
            self.handle.send(status_line(BAD_VERSION));
        }

        self.state = ConnectionState::AwaitingRemoteId;
        let remote_id = self.reader.read_line().await?;
        if remote_id != self.registry.config.peer.name {
            return self.reject(REMOTE_ID_MISMATCH, format!("addressed as {remote_id:?}"));
        }

        self.state = ConnectionState::AwaitingPeerInfo;
        let peer_info = self.reader.read_line().await?;
        if !PEER_INFO.is_match(&peer_info) {
            return self.reject(PROTOCOL_ERROR, format!("malformed peer info {peer_info:?}"));
        }

        self.handle.send(status_line(SUCCEEDED));
        self.activate(&peer_info);
        Ok(())
    }

    /// Client side: we send the three handshake lines and expect `200`.
    pub async fn initiate_handshake(&mut self, remote_name: &str) -> Result<(), PeerError> {
        let local_name = self.registry.config.peer.name.clone();
        self.handle.send(format!("{PROTOCOL_NAME} {PROTOCOL_VERSION}\n").into_bytes());
        self.handle.send(format!("{remote_name}\n").into_bytes());
        self.handle.send(format!("{} {} 1\n", local_name, std::process::id()).into_bytes());

        self.state = ConnectionState::AwaitingPeerInfo;
        let status = self.reader.read_line().await?.trim().to_string();
        if status != SUCCEEDED {
            self.registry.update_stats(StatsEvent::HandshakesFailed, 1);
            let reason = status_reason(&status);
            return Err(PeerError::RemoteStatus { status, reason });
        }

        self.activate(remote_name);
        Ok(())
    }

    fn reject(&mut self, status: &'static str, reason: String) -> Result<(), PeerError> {
        self.handle.send(status_line(status));
        self.registry.update_stats(StatsEvent::HandshakesFailed, 1);
        Err(PeerError::Handshake { status, reason })
    }

    fn activate(&mut self, remote: &str) {
        self.state = ConnectionState::Active;
        self.handle.reset_mirror();
        self.registry.update_stats(StatsEvent::PeersActive, 1);
        info!("[PEER] #{} {} ({}) is active", self.handle.id, remote, self.handle.address);
        if self.registry.config.peer.auto_sync {
            self.handle.send(control_frame(SYNCHRONIZATION_REQUEST));
        }
    }
}
