//! TTS driver harness entry point (C1 process wiring, §7).
//!
//! A single long-running server, not a one-shot command: reads commands
//! from stdin until EOF or `QUIT`, writes replies to stdout, and logs to
//! stderr so the command channel stays clean.

use std::io;
use std::sync::Arc;

use clap::Parser;
use drv_backend::{Backend, DriverSettings};
use drv_harness::{dispatch, run_worker, HarnessContext, Outcome};
use drv_mock_backend::MockBackend;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "drv-cli")]
#[command(author, version, about = "TTS driver harness", long_about = None)]
struct Args {
    /// Compiled-in backend to dispatch synthesis calls to.
    #[arg(long, default_value = "mock")]
    backend: String,

    /// Tracing filter directive (e.g. "debug", "drv_harness=trace").
    /// Falls back to `RUST_LOG`, then `"warn"`.
    #[arg(long)]
    log_level: Option<String>,

    /// Startup default for the audio retrieval destination; still
    /// overridable at runtime by `SET AUDIO RETRIEVAL DESTINATION`.
    #[arg(long)]
    audio_retrieval_host: Option<String>,

    /// Startup default for the audio retrieval destination's port.
    #[arg(long)]
    audio_retrieval_port: Option<u16>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match &args.log_level {
        Some(level) => EnvFilter::new(level.clone()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    let backend: Arc<dyn Backend> = match args.backend.as_str() {
        "mock" => Arc::new(MockBackend::new()),
        other => anyhow::bail!("unknown backend {other:?}, only \"mock\" is compiled in"),
    };

    let ctx = Arc::new(HarnessContext::new(Box::new(io::stdout()), backend));

    if let (Some(host), Some(port)) = (&args.audio_retrieval_host, args.audio_retrieval_port) {
        ctx.seed_settings(DriverSettings {
            audio_retrieval_host: host.clone(),
            audio_retrieval_port: port,
        });
    }

    let worker_ctx = Arc::clone(&ctx);
    std::thread::spawn(move || run_worker(worker_ctx));

    tracing::info!(backend = %args.backend, "driver harness starting");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    loop {
        let Some(atoms) = drv_proto::read_command(&mut reader)? else {
            tracing::info!("command channel closed, exiting");
            break;
        };
        match dispatch(&ctx, &atoms, &mut reader)? {
            Outcome::Continue => {}
            Outcome::Quit => break,
        }
    }

    Ok(())
}
