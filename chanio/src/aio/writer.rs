//! Async writable and closable stream over a byte `Sink`.

use core::pin::Pin;
use core::task::{Context, Poll};
use std::io;

use futures::io::AsyncWrite;
use futures::sink::{Sink, SinkExt};

use crate::error::{Error, ErrorKind};

fn closed() -> io::Error {
    Error::new(ErrorKind::Closed).into()
}

/// Feeds `buf` into `sink` while it has room.
///
/// Pending only if not a single byte could be handed over. Once some bytes
/// went through, a full or failed sink ends the call with the partial count.
pub(crate) fn poll_write_bytes<Si>(
    sink: &mut Si,
    cx: &mut Context<'_>,
    buf: &[u8],
) -> Poll<io::Result<usize>>
where
    Si: Sink<u8> + Unpin,
{
    let mut n = 0;
    while n < buf.len() {
        match sink.poll_ready_unpin(cx) {
            Poll::Ready(Ok(())) => {}
            Poll::Ready(Err(_)) if n == 0 => return Poll::Ready(Err(closed())),
            Poll::Pending if n == 0 => return Poll::Pending,
            _ => break,
        }
        if sink.start_send_unpin(buf[n]).is_err() {
            if n == 0 {
                return Poll::Ready(Err(closed()));
            }
            break;
        }
        n += 1;
    }

    log::trace!("Wrote {} of {} bytes", n, buf.len());
    Poll::Ready(Ok(n))
}

/// Implements [`AsyncWrite`] on top of a `Sink<u8>`, such as the sending
/// half of `futures::channel::mpsc`.
///
/// `poll_write` returns as soon as the sink stops accepting bytes, so use
/// `write_all` to push a whole buffer. `poll_close` closes the sink; closing
/// again fails with [`ErrorKind::AlreadyClosed`].
#[derive(Debug)]
pub struct AsyncWriteCloser<Si> {
    inner: Option<Si>,
}

impl<Si> AsyncWriteCloser<Si> {
    pub fn new(inner: Si) -> Self {
        AsyncWriteCloser { inner: Some(inner) }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    pub fn into_inner(self) -> Option<Si> {
        self.inner
    }
}

impl<Si> AsyncWrite for AsyncWriteCloser<Si>
where
    Si: Sink<u8> + Unpin,
{
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        if buf.is_empty() {
            return Poll::Ready(Ok(0));
        }
        match self.get_mut().inner.as_mut() {
            Some(sink) => poll_write_bytes(sink, cx, buf),
            None => Poll::Ready(Err(closed())),
        }
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        match self.get_mut().inner.as_mut() {
            Some(sink) => sink.poll_flush_unpin(cx).map_err(|_| closed()),
            None => Poll::Ready(Ok(())),
        }
    }

    fn poll_close(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        let Some(sink) = this.inner.as_mut() else {
            return Poll::Ready(Err(Error::new(ErrorKind::AlreadyClosed).into()));
        };
        let res = futures::ready!(sink.poll_close_unpin(cx));
        this.inner = None;
        log::debug!("Channel writer closed");
        Poll::Ready(res.map_err(|_| closed()))
    }
}
