//! Writable and closable stream over the sending end of a byte queue.

use std::io;

use crate::error::{Error, ErrorKind, Result};
use crate::queue::SendQueue;

/// Sends `buf` one byte at a time, in order, blocking on each byte.
///
/// Returns the number of bytes accepted. An error is only returned when the
/// very first byte is rejected; a rejection later on yields the partial
/// count and the caller sees the error on its next write.
pub(crate) fn write_blocking<Q>(queue: &Q, buf: &[u8]) -> Result<usize>
where
    Q: SendQueue + ?Sized,
{
    for (i, &byte) in buf.iter().enumerate() {
        if let Err(e) = queue.send(byte) {
            if i == 0 {
                return Err(e);
            }
            log::debug!("Queue rejected byte after {} of {} bytes", i, buf.len());
            return Ok(i);
        }
    }
    log::trace!("Wrote {} bytes", buf.len());
    Ok(buf.len())
}

/// Like [`write_blocking`], but stops as soon as the queue is full.
pub(crate) fn write_nonblocking<Q>(queue: &Q, buf: &[u8]) -> Result<usize>
where
    Q: SendQueue + ?Sized,
{
    for (i, &byte) in buf.iter().enumerate() {
        match queue.try_send(byte) {
            Ok(()) => {}
            Err(e) if i == 0 => return Err(e),
            Err(_) => return Ok(i),
        }
    }
    Ok(buf.len())
}

/// Implements [`io::Write`] and `close` on top of a [`SendQueue`].
///
/// `write` blocks until every byte has been accepted by the queue. On a
/// rendezvous queue with no one receiving, that is forever.
///
/// `close` drops the sending handle. Receivers drain the bytes that are
/// still queued and then see end of stream, provided no other clone of the
/// sender is alive.
///
/// Writing after `close`, or closing twice, is a caller bug. It is reported
/// as an error ([`ErrorKind::Closed`] and [`ErrorKind::AlreadyClosed`]),
/// never silently ignored; no locking is added to prevent it.
#[derive(Debug)]
pub struct WriteCloser<S> {
    inner: Option<S>,
}

impl<S> WriteCloser<S> {
    /// Wraps the sending end of a queue.
    pub fn new(inner: S) -> Self {
        WriteCloser { inner: Some(inner) }
    }

    /// Returns true once `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns the sending end, or `None` after `close`.
    pub fn get_ref(&self) -> Option<&S> {
        self.inner.as_ref()
    }

    pub fn into_inner(self) -> Option<S> {
        self.inner
    }

    /// Closes the sending side.
    pub fn close(&mut self) -> Result<()> {
        match self.inner.take() {
            Some(sender) => {
                drop(sender);
                log::debug!("Channel writer closed");
                Ok(())
            }
            None => Err(Error::new(ErrorKind::AlreadyClosed)),
        }
    }
}

impl<S: SendQueue> WriteCloser<S> {
    fn sender(&self) -> Result<&S> {
        self.inner.as_ref().ok_or_else(|| Error::new(ErrorKind::Closed))
    }

    /// Sends as much of `buf` as the queue takes without blocking.
    ///
    /// Fails with [`ErrorKind::WouldBlock`] if not even one byte fits.
    pub fn try_write(&mut self, buf: &[u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        write_nonblocking(self.sender()?, buf)
    }
}

impl<S> From<S> for WriteCloser<S>
where
    S: SendQueue,
{
    fn from(inner: S) -> Self {
        WriteCloser::new(inner)
    }
}

impl<S: SendQueue> io::Write for WriteCloser<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        Ok(write_blocking(self.sender()?, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
