//! Async adapters for `futures` channels.
//!
//! This module provides the same three roles as the blocking wrappers, but
//! over any `Stream<Item = u8>` and `Sink<u8>` and implementing
//! `futures::io::AsyncRead` / `AsyncWrite`. Use `tokio_util::compat` to hand
//! them to tokio io utilities.

mod reader;
mod writer;

pub use reader::AsyncReader;
pub use writer::AsyncWriteCloser;

use core::pin::Pin;
use core::task::{Context, Poll};
use std::io;

use futures::io::{AsyncRead, AsyncWrite};
use futures::sink::Sink;
use futures::stream::Stream;

/// Both ends of one async byte channel behind a single handle.
#[derive(Debug)]
pub struct AsyncReadWriteCloser<Si, St> {
    writer: AsyncWriteCloser<Si>,
    reader: AsyncReader<St>,
}

impl<Si, St: Stream> AsyncReadWriteCloser<Si, St> {
    pub fn new(sink: Si, stream: St) -> Self {
        Self::from_parts(AsyncWriteCloser::new(sink), AsyncReader::new(stream))
    }
}

impl<Si, St> AsyncReadWriteCloser<Si, St> {
    pub fn from_parts(writer: AsyncWriteCloser<Si>, reader: AsyncReader<St>) -> Self {
        AsyncReadWriteCloser { writer, reader }
    }

    pub fn split(self) -> (AsyncWriteCloser<Si>, AsyncReader<St>) {
        (self.writer, self.reader)
    }

    pub fn is_closed(&self) -> bool {
        self.writer.is_closed()
    }
}

impl<Si, St> AsyncRead for AsyncReadWriteCloser<Si, St>
where
    Si: Unpin,
    St: Stream<Item = u8> + Unpin,
{
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.get_mut().reader).poll_read(cx, buf)
    }
}

impl<Si, St> AsyncWrite for AsyncReadWriteCloser<Si, St>
where
    Si: Sink<u8> + Unpin,
    St: Unpin,
{
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.get_mut().writer).poll_write(cx, buf)
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.get_mut().writer).poll_flush(cx)
    }

    fn poll_close(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.get_mut().writer).poll_close(cx)
    }
}
