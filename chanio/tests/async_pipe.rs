use chanio::{AsyncReader, AsyncWriteCloser, Reader, WriteCloser};
use futures::channel::mpsc;
use futures::io::{AsyncReadExt, AsyncWriteExt};
use tokio_util::compat::FuturesAsyncReadCompatExt;

const MESSAGE: &[u8] = b"hello, world!";

#[tokio::test]
async fn test_async_pipe_between_tasks() {
    let (tx, rx) = mpsc::channel::<u8>(0);

    let producer = tokio::spawn(async move {
        let mut w = AsyncWriteCloser::new(tx);
        w.write_all(MESSAGE).await.unwrap();
        w.close().await.unwrap();
    });

    let mut out = Vec::new();
    AsyncReader::new(rx).read_to_end(&mut out).await.unwrap();
    producer.await.unwrap();

    assert_eq!(out, MESSAGE);
}

#[tokio::test]
async fn test_async_reader_through_tokio_compat() {
    let (tx, rx) = mpsc::unbounded::<u8>();
    for &b in MESSAGE {
        tx.unbounded_send(b).unwrap();
    }
    drop(tx);

    let mut r = AsyncReader::new(rx).compat();
    let mut out = String::new();
    tokio::io::AsyncReadExt::read_to_string(&mut r, &mut out)
        .await
        .unwrap();
    assert_eq!(out.as_bytes(), MESSAGE);
}

#[tokio::test]
async fn test_async_reader_over_tokio_receiver() {
    let (tx, mut rx) = tokio::sync::mpsc::channel::<u8>(4);
    let stream = futures::stream::poll_fn(move |cx| rx.poll_recv(cx));

    let producer = tokio::spawn(async move {
        for &b in MESSAGE {
            tx.send(b).await.unwrap();
        }
    });

    let mut out = Vec::new();
    AsyncReader::new(stream).read_to_end(&mut out).await.unwrap();
    producer.await.unwrap();

    assert_eq!(out, MESSAGE);
}

#[tokio::test]
async fn test_blocking_wrappers_over_tokio_queue() {
    let (tx, rx) = tokio::sync::mpsc::channel::<u8>(2);

    let producer = tokio::task::spawn_blocking(move || {
        let mut w = WriteCloser::new(tx);
        std::io::Write::write_all(&mut w, MESSAGE).unwrap();
        w.close().unwrap();
    });
    let consumer = tokio::task::spawn_blocking(move || {
        let mut out = Vec::new();
        std::io::Read::read_to_end(&mut Reader::new(rx), &mut out).unwrap();
        out
    });

    producer.await.unwrap();
    assert_eq!(consumer.await.unwrap(), MESSAGE);
}

#[tokio::test]
async fn test_async_reader_over_iter_stream() {
    let mut r = AsyncReader::new(futures::stream::iter(MESSAGE.iter().copied()));

    let mut first = [0u8; 5];
    assert_eq!(r.read(&mut first).await.unwrap(), 5);
    assert_eq!(&first, b"hello");

    let mut rest = [0u8; 64];
    let n = r.read(&mut rest).await.unwrap();
    assert_eq!(&rest[..n], &MESSAGE[5..]);

    for _ in 0..3 {
        assert_eq!(r.read(&mut rest).await.unwrap(), 0);
    }
    assert!(r.is_terminated());
}
