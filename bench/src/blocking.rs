use std::io::{self, Read, Write};

use chanio::ChannelConfig;

use crate::pipe_bench::{READ_BUF_SIZE, Report};

/// Producer thread writes `data` into a std channel; this thread drains it.
pub(crate) fn run(capacity: usize, data: Vec<u8>) -> io::Result<Report> {
    let (mut writer, mut reader) = ChannelConfig::new().with_capacity(capacity).pipe();

    let producer = std::thread::spawn(move || -> io::Result<()> {
        writer.write_all(&data)?;
        writer.close()?;
        Ok(())
    });

    let mut buf = vec![0u8; READ_BUF_SIZE];
    let mut report = Report { bytes: 0, reads: 0 };
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        report.bytes += n;
        report.reads += 1;
    }

    producer
        .join()
        .map_err(|_| io::Error::other("producer thread panicked"))??;
    Ok(report)
}
