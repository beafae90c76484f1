use thiserror::Error;
use crate::protocol::enums::codec_error::CodecError;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("connection closed by remote")]
    Closed,
    #[error("socket error: {0}")]
    Io(#[from] std::io::Error),
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
    #[error("declared record length {0} exceeds limit")]
    RecordTooLarge(u64),
}
