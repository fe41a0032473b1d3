//! Readable stream over the receiving end of a byte queue.

use std::io;

use crate::queue::RecvQueue;

/// Fills `buf` from `queue`, blocking only for the first byte.
///
/// Returns 0 if `buf` is empty or the queue is closed and drained.
/// After the first byte, keeps taking bytes that are already queued and
/// stops at the first miss or when `buf` is full. A close seen during that
/// drain is left for the next call to report.
pub(crate) fn read_coalescing<Q>(queue: &mut Q, buf: &mut [u8]) -> usize
where
    Q: RecvQueue + ?Sized,
{
    if buf.is_empty() {
        return 0;
    }

    match queue.recv() {
        Some(byte) => buf[0] = byte,
        None => {
            log::trace!("Queue closed and drained, end of stream");
            return 0;
        }
    }

    let mut n = 1;
    while n < buf.len() {
        match queue.try_recv() {
            Ok(byte) => {
                buf[n] = byte;
                n += 1;
            }
            Err(_) => break,
        }
    }

    log::trace!("Read {} bytes ({} buffer)", n, buf.len());
    n
}

/// Implements [`io::Read`] on top of a [`RecvQueue`].
///
/// `read` blocks until at least one byte is available, then takes as many
/// more as it can without blocking, or until the buffer is full.
///
/// When the queue is closed, `read` returns `Ok(0)`. Bytes still queued at
/// that point are returned first, and `Ok(0)` comes on the subsequent call.
///
/// A zero-length buffer returns `Ok(0)` immediately without touching the
/// queue.
#[derive(Debug)]
pub struct Reader<R> {
    inner: R,
}

impl<R> Reader<R> {
    /// Wraps the receiving end of a queue.
    pub fn new(inner: R) -> Self {
        Reader { inner }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> From<R> for Reader<R>
where
    R: RecvQueue,
{
    fn from(inner: R) -> Self {
        Reader::new(inner)
    }
}

impl<R: RecvQueue> io::Read for Reader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(read_coalescing(&mut self.inner, buf))
    }
}
