use tokio::io::BufReader;

/// Incremental reader pulling protocol lines, bytes and records off a stream.
#[derive(Debug)]
pub struct FrameReader<R> {
    pub(crate) reader: BufReader<R>,
    pub(crate) buffer: Vec<u8>,
    pub(crate) cursor: usize,
}
