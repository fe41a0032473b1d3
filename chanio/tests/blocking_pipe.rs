use std::io::{Read, Write};
use std::thread;

const MESSAGE: &[u8] = b"hello, world!";

#[test]
fn test_pipe_across_threads() {
    let (mut w, mut r) = chanio::pipe(0);
    let producer = thread::spawn(move || {
        w.write_all(MESSAGE).unwrap();
        w.close().unwrap();
    });

    let mut chunks = 0;
    let mut out = Vec::new();
    let mut buf = [0u8; 64];
    loop {
        let n = r.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        chunks += 1;
        out.extend_from_slice(&buf[..n]);
    }
    producer.join().unwrap();

    assert_eq!(out, MESSAGE);
    assert!((1..=MESSAGE.len()).contains(&chunks));
}

#[test]
fn test_io_copy_through_pipe() {
    let (mut w, r) = chanio::pipe(16);
    let data: Vec<u8> = (0..4096).map(|i| (i * 7 % 256) as u8).collect();
    let expected = data.clone();

    let producer = thread::spawn(move || {
        let n = std::io::copy(&mut data.as_slice(), &mut w).unwrap();
        w.close().unwrap();
        n
    });

    let mut source: Box<dyn Read> = Box::new(r);
    let mut out = Vec::new();
    std::io::copy(&mut source, &mut out).unwrap();

    assert_eq!(producer.join().unwrap(), 4096);
    assert_eq!(out, expected);
}

#[test]
fn test_per_sender_order_with_two_writers() {
    let (tx, rx) = std::sync::mpsc::sync_channel::<u8>(0);
    let writers: Vec<_> = [b'a', b'A']
        .into_iter()
        .map(|base| {
            let mut w = chanio::WriteCloser::new(tx.clone());
            thread::spawn(move || {
                let bytes: Vec<u8> = (0..26).map(|i| base + i).collect();
                w.write_all(&bytes).unwrap();
                w.close().unwrap();
            })
        })
        .collect();
    drop(tx);

    let mut out = Vec::new();
    chanio::Reader::new(rx).read_to_end(&mut out).unwrap();
    for h in writers {
        h.join().unwrap();
    }

    let lower: Vec<u8> = out.iter().copied().filter(u8::is_ascii_lowercase).collect();
    let upper: Vec<u8> = out.iter().copied().filter(u8::is_ascii_uppercase).collect();
    assert_eq!(lower, (b'a'..=b'z').collect::<Vec<_>>());
    assert_eq!(upper, (b'A'..=b'Z').collect::<Vec<_>>());
}

#[test]
fn test_duplex_close_then_drain() {
    let mut rw = chanio::duplex(32);
    rw.write_all(MESSAGE).unwrap();
    rw.close().unwrap();

    let mut out = Vec::new();
    let mut buf = [0u8; 5];
    loop {
        match rw.read(&mut buf).unwrap() {
            0 => break,
            n => out.extend_from_slice(&buf[..n]),
        }
    }
    assert_eq!(out, MESSAGE);
    assert_eq!(rw.read(&mut buf).unwrap(), 0);
}
