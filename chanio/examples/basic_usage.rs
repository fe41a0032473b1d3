//! Basic usage example demonstrating the chanio wrappers.
//!
//! This example shows how to:
//! - Wrap an existing channel as a reader and a writer
//! - Watch a read coalesce queued bytes
//! - Close a writer and observe end of stream
//! - Use the combined stream
//!
//! Run with: cargo run --example basic_usage

use std::io::{Read, Write};
use std::sync::mpsc;
use std::thread;

use chanio::{ChannelConfig, Reader, WriteCloser};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== chanio Basic Usage Example ===\n");

    // Example 1: wrap an existing channel
    println!("1. Wrapping a channel:");
    let (tx, rx) = mpsc::sync_channel::<u8>(0);
    let producer = thread::spawn(move || {
        let mut w = WriteCloser::new(tx);
        w.write_all(b"hello, world!").expect("write failed");
        w.close().expect("close failed");
    });
    let mut text = String::new();
    Reader::new(rx).read_to_string(&mut text).expect("read failed");
    producer.join().expect("producer panicked");
    println!("   Received: {:?}\n", text);

    // Example 2: coalescing
    println!("2. Coalescing reads:");
    let (mut w, mut r) = ChannelConfig::new().with_capacity(8).pipe();
    w.write_all(b"abcdefgh").expect("write failed");
    let mut buf = [0u8; 5];
    let n = r.read(&mut buf).expect("read failed");
    println!("   First read:  {} bytes {:?}", n, &buf[..n]);
    let n = r.read(&mut buf).expect("read failed");
    println!("   Second read: {} bytes {:?}\n", n, &buf[..n]);

    // Example 3: end of stream
    println!("3. End of stream:");
    w.write_all(b"!").expect("write failed");
    w.close().expect("close failed");
    let n = r.read(&mut buf).expect("read failed");
    println!("   Read after close: {} byte(s)", n);
    let n = r.read(&mut buf).expect("read failed");
    println!("   Next read:        {} byte(s) (end of stream)\n", n);

    // Example 4: misuse is reported
    println!("4. Usage errors:");
    match w.write(b"late") {
        Ok(n) => println!("   Write after close: {} bytes?", n),
        Err(e) => println!("   Write after close: {}", e),
    }
    match w.close() {
        Ok(()) => println!("   Second close: ok?"),
        Err(e) => println!("   Second close: {}\n", e),
    }

    // Example 5: combined stream
    println!("5. Combined stream:");
    let mut rw = chanio::duplex(32);
    rw.write_all(b"round trip").expect("write failed");
    rw.close().expect("close failed");
    let mut back = String::new();
    rw.read_to_string(&mut back).expect("read failed");
    println!("   Read back: {:?}", back);

    println!("\n=== Example Complete ===");
}
