use tokio::io::{AsyncRead, AsyncReadExt, BufReader};
use crate::protocol::enums::codec_error::CodecError;
use crate::protocol::enums::frame_error::FrameError;
use crate::protocol::protocol::{MAX_RECORD_SIZE, READ_CHUNK_SIZE};
use crate::protocol::structs::frame_reader::FrameReader;
use crate::protocol::varint;

impl<R: AsyncRead + Unpin> FrameReader<R> {
    pub fn new(reader: R) -> FrameReader<R> {
        FrameReader {
            reader: BufReader::new(reader),
            buffer: Vec::with_capacity(READ_CHUNK_SIZE),
            cursor: 0,
        }
    }

    /// Bytes received but not consumed yet.
    pub fn buffered(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    async fn fill_chunk(&mut self) -> Result<(), FrameError> {
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        let read = self.reader.read(&mut chunk).await?;
        if read == 0 {
            return Err(FrameError::Closed);
        }
        self.buffer.extend_from_slice(&chunk[..read]);
        Ok(())
    }

    /// Reads one `\n` terminated line, the terminator is stripped.
    pub async fn read_line(&mut self) -> Result<String, FrameError> {
        loop {
            if let Some(offset) = self.buffer[self.cursor..].iter().position(|byte| *byte == b'\n') {
                let end = self.cursor + offset;
                let line = String::from_utf8_lossy(&self.buffer[self.cursor..end])
                    .trim_end_matches('\r')
                    .to_string();
                self.cursor = end + 1;
                self.compact();
                return Ok(line);
            }
            self.fill_chunk().await?;
        }
    }

    pub async fn next_byte(&mut self) -> Result<u8, FrameError> {
        if self.cursor >= self.buffer.len() {
            self.compact();
            self.fill_chunk().await?;
        }
        let byte = self.buffer[self.cursor];
        self.cursor += 1;
        Ok(byte)
    }

    /// Reads `varint(length)` followed by `length` payload bytes.
    pub async fn read_record(&mut self) -> Result<Vec<u8>, FrameError> {
        let (consumed, length) = loop {
            match varint::decode(&self.buffer[self.cursor..]) {
                Ok(decoded) => break decoded,
                Err(CodecError::Incomplete) => self.fill_chunk().await?,
                Err(error) => return Err(error.into()),
            }
        };
        if length > MAX_RECORD_SIZE {
            return Err(FrameError::RecordTooLarge(length));
        }

        let length = length as usize;
        while self.buffered() < consumed + length {
            self.fill_chunk().await?;
        }

        let start = self.cursor + consumed;
        let payload = self.buffer[start..start + length].to_vec();
        self.cursor = start + length;
        self.compact();
        Ok(payload)
    }

    /// Drops consumed bytes so the buffer only holds the unread tail.
    pub fn compact(&mut self) {
        if self.cursor == 0 {
            return;
        }
        if self.cursor >= self.buffer.len() {
            self.buffer.clear();
        } else {
            self.buffer.drain(..self.cursor);
        }
        self.cursor = 0;
    }
}
