use std::ops::{Deref, DerefMut};

use bytes::BytesMut;

/// The one fixed-capacity region a server uses for request bytes, the
/// outgoing header and file chunks.
///
/// Only one of those uses is live at a time. The region is allocated once
/// by the accept loop and lent to each connection in turn.
pub struct IoBuffer {
    data: BytesMut,
}

impl IoBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: BytesMut::zeroed(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Span a request may be read into; the last byte is never filled.
    pub fn request_span(&mut self) -> &mut [u8] {
        let end = self.capacity().saturating_sub(1);
        &mut self.data[..end]
    }
}

impl Deref for IoBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl DerefMut for IoBuffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
