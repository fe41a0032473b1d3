//! Byte queue abstraction.
//!
//! This module provides the `RecvQueue` and `SendQueue` traits that let the
//! stream wrappers work with any channel carrying single bytes.
//!
//! A queue is closed by dropping its sending handle. Once every sender is
//! gone, receivers drain whatever is still queued and then observe closure.
//!
//! # Implementations
//!
//! - `std::sync::mpsc`: `Receiver<u8>`, `SyncSender<u8>`, `Sender<u8>`
//! - `tokio::sync::mpsc`: `Receiver<u8>`, `Sender<u8>`, and the unbounded
//!   variants. The blocking methods of these panic when called from inside
//!   an async runtime; use [`crate::aio`] there.
//! - `&mut Q` for any queue `Q`.

use std::sync::mpsc;

use tokio::sync::mpsc as tokio_mpsc;

use crate::error::{Error, ErrorKind, Result};

/// Why a non-blocking receive returned without a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryRecvError {
    /// Nothing is queued right now, but senders are still alive.
    Empty,

    /// Every sender is gone and the queue is drained.
    Closed,
}

/// Receiving end of a byte queue.
pub trait RecvQueue {
    /// Blocks until a byte is available.
    ///
    /// Returns `None` once the queue is closed and drained.
    fn recv(&mut self) -> Option<u8>;

    /// Takes a byte if one is available right now, without blocking.
    fn try_recv(&mut self) -> core::result::Result<u8, TryRecvError>;
}

/// Sending end of a byte queue.
pub trait SendQueue {
    /// Blocks until the queue accepts `byte`.
    ///
    /// Fails with [`ErrorKind::Closed`] if no receiver is left.
    fn send(&self, byte: u8) -> Result<()>;

    /// Hands `byte` to the queue only if that can happen without blocking.
    ///
    /// Fails with [`ErrorKind::WouldBlock`] when the queue is full and with
    /// [`ErrorKind::Closed`] if no receiver is left.
    fn try_send(&self, byte: u8) -> Result<()>;
}

impl<Q: RecvQueue + ?Sized> RecvQueue for &mut Q {
    fn recv(&mut self) -> Option<u8> {
        (**self).recv()
    }

    fn try_recv(&mut self) -> core::result::Result<u8, TryRecvError> {
        (**self).try_recv()
    }
}

impl<Q: SendQueue + ?Sized> SendQueue for &Q {
    fn send(&self, byte: u8) -> Result<()> {
        (**self).send(byte)
    }

    fn try_send(&self, byte: u8) -> Result<()> {
        (**self).try_send(byte)
    }
}

impl RecvQueue for mpsc::Receiver<u8> {
    fn recv(&mut self) -> Option<u8> {
        mpsc::Receiver::recv(self).ok()
    }

    fn try_recv(&mut self) -> core::result::Result<u8, TryRecvError> {
        mpsc::Receiver::try_recv(self).map_err(|e| match e {
            mpsc::TryRecvError::Empty => TryRecvError::Empty,
            mpsc::TryRecvError::Disconnected => TryRecvError::Closed,
        })
    }
}

impl SendQueue for mpsc::SyncSender<u8> {
    fn send(&self, byte: u8) -> Result<()> {
        mpsc::SyncSender::send(self, byte).map_err(|_| Error::new(ErrorKind::Closed))
    }

    fn try_send(&self, byte: u8) -> Result<()> {
        mpsc::SyncSender::try_send(self, byte).map_err(|e| match e {
            mpsc::TrySendError::Full(_) => Error::new(ErrorKind::WouldBlock),
            mpsc::TrySendError::Disconnected(_) => Error::new(ErrorKind::Closed),
        })
    }
}

// Unbounded: a send never waits, so both flavours are the same call.
impl SendQueue for mpsc::Sender<u8> {
    fn send(&self, byte: u8) -> Result<()> {
        mpsc::Sender::send(self, byte).map_err(|_| Error::new(ErrorKind::Closed))
    }

    fn try_send(&self, byte: u8) -> Result<()> {
        SendQueue::send(self, byte)
    }
}

impl RecvQueue for tokio_mpsc::Receiver<u8> {
    fn recv(&mut self) -> Option<u8> {
        self.blocking_recv()
    }

    fn try_recv(&mut self) -> core::result::Result<u8, TryRecvError> {
        tokio_mpsc::Receiver::try_recv(self).map_err(|e| match e {
            tokio_mpsc::error::TryRecvError::Empty => TryRecvError::Empty,
            tokio_mpsc::error::TryRecvError::Disconnected => TryRecvError::Closed,
        })
    }
}

impl RecvQueue for tokio_mpsc::UnboundedReceiver<u8> {
    fn recv(&mut self) -> Option<u8> {
        self.blocking_recv()
    }

    fn try_recv(&mut self) -> core::result::Result<u8, TryRecvError> {
        tokio_mpsc::UnboundedReceiver::try_recv(self).map_err(|e| match e {
            tokio_mpsc::error::TryRecvError::Empty => TryRecvError::Empty,
            tokio_mpsc::error::TryRecvError::Disconnected => TryRecvError::Closed,
        })
    }
}

impl SendQueue for tokio_mpsc::Sender<u8> {
    fn send(&self, byte: u8) -> Result<()> {
        self.blocking_send(byte)
            .map_err(|_| Error::new(ErrorKind::Closed))
    }

    fn try_send(&self, byte: u8) -> Result<()> {
        tokio_mpsc::Sender::try_send(self, byte).map_err(|e| match e {
            tokio_mpsc::error::TrySendError::Full(_) => Error::new(ErrorKind::WouldBlock),
            tokio_mpsc::error::TrySendError::Closed(_) => Error::new(ErrorKind::Closed),
        })
    }
}

impl SendQueue for tokio_mpsc::UnboundedSender<u8> {
    fn send(&self, byte: u8) -> Result<()> {
        tokio_mpsc::UnboundedSender::send(self, byte).map_err(|_| Error::new(ErrorKind::Closed))
    }

    fn try_send(&self, byte: u8) -> Result<()> {
        SendQueue::send(self, byte)
    }
}
