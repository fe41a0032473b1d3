//! Async readable stream over a byte `Stream`.

use core::pin::Pin;
use core::task::{Context, Poll};
use std::io;

use futures::io::AsyncRead;
use futures::stream::{Fuse, FusedStream, Stream, StreamExt};

/// Polls `stream` into `buf`; pending only while no byte has arrived yet.
///
/// Same contract as the blocking reader: an empty buffer or an ended stream
/// gives 0, and after the first byte only bytes that are ready right now are
/// taken.
pub(crate) fn poll_read_coalescing<St>(
    stream: &mut St,
    cx: &mut Context<'_>,
    buf: &mut [u8],
) -> Poll<usize>
where
    St: Stream<Item = u8> + Unpin,
{
    if buf.is_empty() {
        return Poll::Ready(0);
    }

    match stream.poll_next_unpin(cx) {
        Poll::Ready(Some(byte)) => buf[0] = byte,
        Poll::Ready(None) => {
            log::trace!("Stream ended, end of stream");
            return Poll::Ready(0);
        }
        Poll::Pending => return Poll::Pending,
    }

    let mut n = 1;
    while n < buf.len() {
        match stream.poll_next_unpin(cx) {
            Poll::Ready(Some(byte)) => {
                buf[n] = byte;
                n += 1;
            }
            _ => break,
        }
    }

    log::trace!("Read {} bytes ({} buffer)", n, buf.len());
    Poll::Ready(n)
}

/// Implements [`AsyncRead`] on top of a `Stream<Item = u8>`, such as the
/// receiving half of `futures::channel::mpsc`.
///
/// The stream is fused: once it has yielded `None` it is never polled
/// again, and every later read returns `Ok(0)`.
#[derive(Debug)]
pub struct AsyncReader<St> {
    inner: Fuse<St>,
}

impl<St: Stream> AsyncReader<St> {
    pub fn new(inner: St) -> Self {
        AsyncReader {
            inner: inner.fuse(),
        }
    }

    /// Returns true once the stream has ended.
    pub fn is_terminated(&self) -> bool {
        self.inner.is_terminated()
    }
}

impl<St> AsyncReader<St> {
    pub fn get_ref(&self) -> &St {
        self.inner.get_ref()
    }

    pub fn get_mut(&mut self) -> &mut St {
        self.inner.get_mut()
    }

    pub fn into_inner(self) -> St {
        self.inner.into_inner()
    }
}

impl<St> AsyncRead for AsyncReader<St>
where
    St: Stream<Item = u8> + Unpin,
{
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        let this = self.get_mut();
        poll_read_coalescing(&mut this.inner, cx, buf).map(Ok)
    }
}
