use thiserror::Error;
use crate::protocol::enums::frame_error::FrameError;

#[derive(Error, Debug)]
pub enum PeerError {
    #[error("{0}")]
    Frame(#[from] FrameError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("handshake rejected with {status}: {reason}")]
    Handshake { status: &'static str, reason: String },
    #[error("remote peer answered {status} ({reason})")]
    RemoteStatus { status: String, reason: &'static str },
}
