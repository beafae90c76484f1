use crate::protocol::varint;

pub const PROTOCOL_NAME: &str = "HAProxyS";
pub const PROTOCOL_VERSION: &str = "2.1";

/// Socket reads are performed in chunks of this size.
pub const READ_CHUNK_SIZE: usize = 512;

/// Upper bound for a single declared record length.
pub const MAX_RECORD_SIZE: u64 = 1024 * 1024;

pub const SUCCEEDED: &str = "200";
pub const TRY_AGAIN: &str = "300";
pub const PROTOCOL_ERROR: &str = "501";
pub const BAD_VERSION: &str = "502";
pub const LOCAL_ID_MISMATCH: &str = "503";
pub const REMOTE_ID_MISMATCH: &str = "504";

/// Meaning of a handshake status code sent by a remote peer.
pub fn status_reason(status: &str) -> &'static str {
    match status {
        SUCCEEDED => "succeeded",
        TRY_AGAIN => "try again later",
        PROTOCOL_ERROR => "protocol error",
        BAD_VERSION => "bad version",
        LOCAL_ID_MISMATCH => "local id mismatch",
        REMOTE_ID_MISMATCH => "remote id mismatch",
        _ => "unknown status",
    }
}

pub const CLASS_CONTROL: u8 = 0;
pub const CLASS_ERROR: u8 = 1;
pub const CLASS_UPDATE: u8 = 10;
pub const CLASS_RESERVED: u8 = 255;

pub const SYNCHRONIZATION_REQUEST: u8 = 0;
pub const SYNCHRONIZATION_FINISHED: u8 = 1;
pub const SYNCHRONIZATION_PARTIAL: u8 = 2;
pub const SYNCHRONIZATION_CONFIRMED: u8 = 3;
pub const HEARTBEAT: u8 = 4;

pub const ERROR_PROTOCOL: u8 = 0;
pub const ERROR_SIZE_LIMIT: u8 = 1;

pub const ENTRY_UPDATE: u8 = 128;
pub const INCREMENTAL_ENTRY_UPDATE: u8 = 129;
pub const STICK_TABLE_DEFINITION: u8 = 130;
pub const STICK_TABLE_SWITCH: u8 = 131;
pub const UPDATE_ACK: u8 = 132;

/// Wraps a payload into `class, type, varint(len), payload`.
pub fn encode_frame(class: u8, message_type: u8, payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(payload.len() + 4);
    frame.push(class);
    frame.push(message_type);
    varint::encode_into(payload.len() as u64, &mut frame);
    frame.extend_from_slice(payload);
    frame
}

pub fn control_frame(message_type: u8) -> Vec<u8> {
    vec![CLASS_CONTROL, message_type]
}

/// A newline terminated status line such as `"200\n"`.
pub fn status_line(code: &str) -> Vec<u8> {
    format!("{code}\n").into_bytes()
}
