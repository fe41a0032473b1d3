use log::info;

mod blocking;
mod pipe_bench;

use pipe_bench::{BenchTarget, PipeBench};

const DATA_SIZE: usize = 4 * 1024 * 1024; // 4 MB
const DEFAULT_CAPACITY: usize = 4096;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let capacity = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_CAPACITY);
    info!("Pumping {} KB through channels of capacity {}", DATA_SIZE / 1024, capacity);

    let targets = [
        BenchTarget::Blocking { capacity },
        BenchTarget::Blocking { capacity: 0 },
        BenchTarget::Async { capacity },
        BenchTarget::TokioCopy { capacity },
    ];

    for target in targets {
        let bench = PipeBench::new(target, DATA_SIZE);
        if let Err(e) = bench.run().await {
            log::error!("{:?} failed: {}", bench.target(), e);
        }
    }
}
