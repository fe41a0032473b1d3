//! # chanio - Byte channels as io streams
//!
//! chanio adapts an in-process channel of single bytes to the standard
//! stream traits, so code written against `std::io::Read` / `Write` (or
//! `futures::io`) can consume or produce data that is really flowing
//! through a queue:
//!
//! - **Reader**: `io::Read` over a receiving end. Blocks for the first
//!   byte, then coalesces whatever else is already queued.
//! - **WriteCloser**: `io::Write` over a sending end, plus `close`.
//! - **ReadWriteCloser**: both ends of one channel behind one handle.
//! - **aio**: the same three roles for `Stream` / `Sink` channels.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │              Caller (std::io / futures::io)              │
//! ├─────────────────────────────────────────────────────────┤
//! │                    Stream Wrappers                       │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────┐   │
//! │  │   Reader    │ │ WriteCloser │ │ ReadWriteCloser │   │
//! │  └─────────────┘ └─────────────┘ └─────────────────┘   │
//! ├─────────────────────────────────────────────────────────┤
//! │                    Queue Layer                           │
//! │  ┌─────────────────────────────────────────────────┐   │
//! │  │   RecvQueue / SendQueue (std, tokio mpsc, ...)   │   │
//! │  └─────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The crate never spawns threads or tasks. It only blocks in the calls the
//! caller makes, on the queue the caller hands it.
//!
//! ## Example
//!
//! ```rust
//! use std::io::{Read, Write};
//! use std::thread;
//!
//! let (mut w, mut r) = chanio::pipe(0);
//! let producer = thread::spawn(move || {
//!     w.write_all(b"hello, world!").unwrap();
//!     w.close().unwrap();
//! });
//!
//! let mut out = String::new();
//! r.read_to_string(&mut out).unwrap();
//! producer.join().unwrap();
//! assert_eq!(out, "hello, world!");
//! ```

#![deny(unsafe_code)]

pub mod aio;
pub mod config;
pub mod duplex;
pub mod error;
pub mod queue;
pub mod reader;
pub mod writer;

// Re-export commonly used types
pub use aio::{AsyncReadWriteCloser, AsyncReader, AsyncWriteCloser};
pub use config::{ChannelConfig, Duplex, PipeReader, PipeWriter};
pub use duplex::ReadWriteCloser;
pub use error::{Error, ErrorKind, Result};
pub use queue::{RecvQueue, SendQueue, TryRecvError};
pub use reader::Reader;
pub use writer::WriteCloser;

/// Creates a byte channel holding up to `capacity` bytes and returns its
/// wrapped ends. A capacity of 0 makes every write wait for a reader.
pub fn pipe(capacity: usize) -> (PipeWriter, PipeReader) {
    ChannelConfig::new().with_capacity(capacity).pipe()
}

/// Creates a byte channel and returns both ends behind one handle.
pub fn duplex(capacity: usize) -> Duplex {
    ChannelConfig::new().with_capacity(capacity).duplex()
}
