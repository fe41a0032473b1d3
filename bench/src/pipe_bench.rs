use std::io;
use std::time::Instant;

use chanio::{AsyncReader, AsyncWriteCloser};
use futures::channel::mpsc;
use futures::io::{AsyncReadExt, AsyncWriteExt};
use log::*;
use tokio_util::compat::FuturesAsyncReadCompatExt;

use crate::blocking;

pub(crate) const READ_BUF_SIZE: usize = 16 * 1024;

#[derive(Debug, Clone, Copy)]
pub enum BenchTarget {
    /// std `sync_channel` driven by a producer thread.
    Blocking { capacity: usize },
    /// `futures` mpsc channel driven by a producer task.
    Async { capacity: usize },
    /// Like `Async`, but drained with `tokio::io::copy` through the compat layer.
    TokioCopy { capacity: usize },
}

pub struct PipeBench {
    target: BenchTarget,
    data_size: usize,
}

/// Outcome of one run.
pub(crate) struct Report {
    pub bytes: usize,
    pub reads: usize,
}

impl PipeBench {
    pub fn new(target: BenchTarget, data_size: usize) -> Self {
        Self { target, data_size }
    }

    pub fn target(&self) -> BenchTarget {
        self.target
    }

    pub async fn run(&self) -> io::Result<()> {
        info!("Running {:?}...", self.target);
        let data: Vec<u8> = (0..self.data_size).map(|i| (i % 251) as u8).collect();

        let start = Instant::now();
        let report = match self.target {
            BenchTarget::Blocking { capacity } => {
                let data = data.clone();
                tokio::task::spawn_blocking(move || blocking::run(capacity, data))
                    .await
                    .map_err(io::Error::other)??
            }
            BenchTarget::Async { capacity } => Self::run_async(capacity, data.clone()).await?,
            BenchTarget::TokioCopy { capacity } => {
                Self::run_tokio_copy(capacity, data.clone()).await?
            }
        };
        let elapsed = start.elapsed();

        if report.bytes != data.len() {
            warn!("Received {} of {} bytes", report.bytes, data.len());
        }
        let speed = (report.bytes as f64 / 1024.0 / 1024.0) / elapsed.as_secs_f64();
        info!("=== {:?} Complete ===", self.target);
        info!("Total received: {} KB", report.bytes / 1024);
        if report.reads > 0 {
            info!(
                "Reads: {} (avg {} bytes per read)",
                report.reads,
                report.bytes / report.reads
            );
        }
        info!("Time: {:.2} seconds", elapsed.as_secs_f64());
        info!("Speed: {:.2} MB/s", speed);
        Ok(())
    }

    async fn run_async(capacity: usize, data: Vec<u8>) -> io::Result<Report> {
        let (tx, rx) = mpsc::channel::<u8>(capacity);

        let producer = tokio::spawn(async move {
            let mut writer = AsyncWriteCloser::new(tx);
            writer.write_all(&data).await?;
            writer.close().await
        });

        let mut reader = AsyncReader::new(rx);
        let mut buf = vec![0u8; READ_BUF_SIZE];
        let mut report = Report { bytes: 0, reads: 0 };
        loop {
            let n = reader.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            report.bytes += n;
            report.reads += 1;
        }

        producer.await.map_err(io::Error::other)??;
        Ok(report)
    }

    async fn run_tokio_copy(capacity: usize, data: Vec<u8>) -> io::Result<Report> {
        let (tx, rx) = mpsc::channel::<u8>(capacity);

        let producer = tokio::spawn(async move {
            let mut writer = AsyncWriteCloser::new(tx);
            writer.write_all(&data).await?;
            writer.close().await
        });

        let mut reader = AsyncReader::new(rx).compat();
        let copied = tokio::io::copy(&mut reader, &mut tokio::io::sink()).await?;

        producer.await.map_err(io::Error::other)??;
        debug!("tokio::io::copy moved {} bytes", copied);
        Ok(Report {
            bytes: copied as usize,
            reads: 0,
        })
    }
}
