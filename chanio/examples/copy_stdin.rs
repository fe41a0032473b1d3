//! Copies stdin to stdout through a rendezvous channel.
//!
//! A producer thread reads stdin and writes it into the channel; the main
//! thread reads the channel and writes stdout. Set `RUST_LOG=trace` to see
//! how reads coalesce.
//!
//! Run with: echo hello | cargo run --example copy_stdin

use std::io;
use std::thread;

use log::info;

fn main() -> io::Result<()> {
    env_logger::init();

    let (mut w, mut r) = chanio::pipe(64);

    let producer = thread::spawn(move || -> io::Result<u64> {
        let n = io::copy(&mut io::stdin().lock(), &mut w)?;
        w.close()?;
        Ok(n)
    });

    let copied = io::copy(&mut r, &mut io::stdout().lock())?;
    let sent = producer
        .join()
        .map_err(|_| io::Error::other("producer panicked"))??;

    info!("Sent {} bytes, copied {} bytes", sent, copied);
    Ok(())
}
