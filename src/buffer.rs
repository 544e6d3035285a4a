//! Growable buffer the response body is streamed into.

use std::io::{self, Write};

/// Append-only byte buffer that keeps a trailing NUL after every append.
///
/// `len()` reports payload bytes only; the terminator is never counted.
#[derive(Debug)]
pub struct ResponseBuffer {
    data: Vec<u8>,
}

impl Default for ResponseBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self { data: vec![0] }
    }

    /// Appends `chunk` and returns the number of bytes consumed.
    ///
    /// Returns 0 for a non-empty chunk only when the buffer could not grow,
    /// which the caller must treat as an aborted transfer.
    pub fn append(&mut self, chunk: &[u8]) -> usize {
        if let Err(err) = self.data.try_reserve(chunk.len()) {
            tracing::error!(chunk = chunk.len(), held = self.len(), %err, "Not enough memory to buffer response");
            return 0;
        }

        // Overwrite the old terminator, then put a fresh one after the chunk.
        self.data.pop();
        self.data.extend_from_slice(chunk);
        self.data.push(0);
        chunk.len()
    }

    pub fn len(&self) -> usize {
        self.data.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Payload without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len()]
    }

    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data
    }
}

impl Write for ResponseBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let consumed = self.append(buf);
        if consumed == 0 && !buf.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::OutOfMemory,
                "response buffer could not grow",
            ));
        }
        Ok(consumed)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
