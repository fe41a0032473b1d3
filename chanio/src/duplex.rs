//! Combined readable, writable and closable stream.

use std::io;

use crate::error::Result;
use crate::queue::{RecvQueue, SendQueue};
use crate::reader::Reader;
use crate::writer::WriteCloser;

/// Both ends of one byte queue behind a single [`io::Read`] +
/// [`io::Write`] handle.
///
/// Reads and writes go through the same algorithms as [`Reader`] and
/// [`WriteCloser`]. Bytes written here come back out of `read` on the same
/// handle, so on a rendezvous queue a write from the thread that is also
/// the only reader blocks forever.
#[derive(Debug)]
pub struct ReadWriteCloser<S, R> {
    writer: WriteCloser<S>,
    reader: Reader<R>,
}

impl<S, R> ReadWriteCloser<S, R> {
    /// Wraps the sending and receiving end of the same queue.
    pub fn new(sender: S, receiver: R) -> Self {
        Self::from_parts(WriteCloser::new(sender), Reader::new(receiver))
    }

    pub fn from_parts(writer: WriteCloser<S>, reader: Reader<R>) -> Self {
        ReadWriteCloser { writer, reader }
    }

    /// Splits into the write half and the read half.
    pub fn split(self) -> (WriteCloser<S>, Reader<R>) {
        (self.writer, self.reader)
    }

    pub fn is_closed(&self) -> bool {
        self.writer.is_closed()
    }

    /// Closes the write side. Reads keep draining what is queued.
    pub fn close(&mut self) -> Result<()> {
        self.writer.close()
    }
}

impl<S: SendQueue, R> ReadWriteCloser<S, R> {
    pub fn try_write(&mut self, buf: &[u8]) -> Result<usize> {
        self.writer.try_write(buf)
    }
}

impl<S, R: RecvQueue> io::Read for ReadWriteCloser<S, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        io::Read::read(&mut self.reader, buf)
    }
}

impl<S: SendQueue, R> io::Write for ReadWriteCloser<S, R> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut self.writer, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::Write::flush(&mut self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::{Read, Write};
    use std::sync::mpsc;
    use std::thread;

    #[test]
    fn test_round_trip_buffered() {
        let (tx, rx) = mpsc::sync_channel::<u8>(64);
        let mut rw = ReadWriteCloser::new(tx, rx);

        rw.write_all(b"hello, world!").unwrap();
        let mut buf = [0u8; 64];
        let n = rw.read(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"hello, world!");
    }

    #[test]
    fn test_close_then_drain() {
        let (tx, rx) = mpsc::sync_channel::<u8>(8);
        let mut rw = ReadWriteCloser::new(tx, rx);

        rw.write_all(b"abc").unwrap();
        rw.close().unwrap();
        assert!(rw.is_closed());

        let mut buf = [0u8; 2];
        assert_eq!(rw.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf, b"ab");
        assert_eq!(rw.read(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], b'c');
        assert_eq!(rw.read(&mut buf).unwrap(), 0);
        assert_eq!(rw.read(&mut buf).unwrap(), 0);

        assert_eq!(rw.close().unwrap_err().kind(), ErrorKind::AlreadyClosed);
        assert_eq!(
            rw.write(b"x").unwrap_err().kind(),
            io::ErrorKind::BrokenPipe
        );
    }

    #[test]
    fn test_split_across_threads() {
        let (tx, rx) = mpsc::sync_channel::<u8>(0);
        let rw = ReadWriteCloser::new(tx, rx);
        let (mut w, mut r) = rw.split();

        let msg: Vec<u8> = (0..=255).collect();
        let expected = msg.clone();
        let producer = thread::spawn(move || {
            w.write_all(&msg).unwrap();
            w.close().unwrap();
        });

        let mut out = Vec::new();
        r.read_to_end(&mut out).unwrap();
        producer.join().unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_try_write_on_full_queue() {
        let (tx, rx) = mpsc::sync_channel::<u8>(1);
        let mut rw = ReadWriteCloser::new(tx, rx);

        assert_eq!(rw.try_write(b"ab").unwrap(), 1);
        assert_eq!(rw.try_write(b"b").unwrap_err().kind(), ErrorKind::WouldBlock);

        let mut buf = [0u8; 4];
        assert_eq!(rw.read(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], b'a');
    }
}
