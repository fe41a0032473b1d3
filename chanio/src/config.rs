use std::sync::mpsc;

use crate::duplex::ReadWriteCloser;
use crate::reader::Reader;
use crate::writer::WriteCloser;

/// Capacity of a rendezvous channel: every send waits for a receiver.
pub const RENDEZVOUS: usize = 0;

/// Sending end created by [`ChannelConfig`].
pub type PipeWriter = WriteCloser<mpsc::SyncSender<u8>>;

/// Receiving end created by [`ChannelConfig`].
pub type PipeReader = Reader<mpsc::Receiver<u8>>;

/// Combined stream created by [`ChannelConfig::duplex`].
pub type Duplex = ReadWriteCloser<mpsc::SyncSender<u8>, mpsc::Receiver<u8>>;

/// Settings for channels created by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelConfig {
    pub capacity: usize,
}

impl ChannelConfig {
    pub fn new() -> Self {
        Self {
            capacity: RENDEZVOUS,
        }
    }

    /// Number of bytes the channel holds before a send blocks.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Creates a channel and returns its wrapped ends.
    pub fn pipe(&self) -> (PipeWriter, PipeReader) {
        let (tx, rx) = mpsc::sync_channel(self.capacity);
        log::debug!("Created pipe with capacity {}", self.capacity);
        (WriteCloser::new(tx), Reader::new(rx))
    }

    /// Creates a channel and returns both ends behind one handle.
    pub fn duplex(&self) -> Duplex {
        let (writer, reader) = self.pipe();
        ReadWriteCloser::from_parts(writer, reader)
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self::new()
    }
}
