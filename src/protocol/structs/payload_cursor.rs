use std::io::Cursor;

/// Sequential reader over one record payload.
#[derive(Debug)]
pub struct PayloadCursor<'a> {
    pub(crate) inner: Cursor<&'a [u8]>,
}
