use std::process::ExitCode;

use common::utils::logging::{init_logging, LogFormat};
use dotenvy::dotenv;
use tracing::{error, info};

fn main() -> ExitCode {
    dotenv().ok();
    // A broken config is reported again, with detail, by server::run.
    let cfg = configs::AppConfig::load_and_validate().ok();
    let format = cfg.as_ref().map(|c| LogFormat::parse(&c.logging.format)).unwrap_or_default();
    init_logging(format);

    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "healthy-body", event = "panic", pid, message = %info, "unhandled panic occurred");
    }));

    // config.toml first, then TOKIO_WORKER_THREADS
    let worker_threads = cfg
        .and_then(|c| c.server.worker_threads)
        .or_else(|| std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()));

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "healthy-body", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(service = "healthy-body", event = "start", pid, version, threads = worker_threads.unwrap_or_default(), "service starting");

    match rt.block_on(server::run()) {
        Ok(()) => {
            info!(service = "healthy-body", event = "stop", pid, "service stopped normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "healthy-body", event = "run_failed", error = %e, "server::run returned error");
            ExitCode::FAILURE
        }
    }
}
