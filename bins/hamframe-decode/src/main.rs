use clap::Parser;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use hamframe_codec::StreamSynchronizer;
use hamframe_codec::io::{ReaderSource, WriterSink};
use hamframe_codec::sync::LogObserver;
use hamframe_config::{CfgDecoder, HamframeConfig, toml_config};
use hamframe_core::debug;

/// Load configuration file
fn load_config_from_toml(cfg_path: &str) -> HamframeConfig {
    match toml_config::from_file(cfg_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration from {}: {}", cfg_path, e);
            std::process::exit(1);
        }
    }
}

/// Command line paths take precedence over the [decoder] section
fn resolve_paths(cfg: &HamframeConfig, args: &Args) -> Option<CfgDecoder> {
    let from_cfg = cfg.decoder.as_ref();
    let input_file = args.input.clone().or_else(|| from_cfg.map(|d| d.input_file.clone()))?;
    let output_file = args.output.clone().or_else(|| from_cfg.map(|d| d.output_file.clone()))?;
    Some(CfgDecoder { input_file, output_file })
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Hamming(8,4) framed stream decoder",
    long_about = "Recovers 12-byte payloads from a raw Hamming(8,4) codeword stream, resynchronizing after corruption"
)]
struct Args {
    /// Config file (required)
    #[arg(help = "TOML config with decoder settings")]
    config: String,

    #[arg(short = 'i', long = "input", help = "Raw stream file, overrides decoder.input_file")]
    input: Option<String>,

    #[arg(short = 'o', long = "output", help = "Payload output file, overrides decoder.output_file")]
    output: Option<String>,
}

fn main() {
    eprintln!("[+] hamframe stream decoder");

    let args = Args::parse();
    let cfg = load_config_from_toml(&args.config);
    let _log_guard = debug::setup_logging_default(cfg.debug_log.clone());

    let Some(paths) = resolve_paths(&cfg, &args) else {
        tracing::error!("no input/output file given, set [decoder] in {} or pass --input/--output", args.config);
        std::process::exit(1);
    };

    let mut source = match ReaderSource::open(&paths.input_file) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("failed to open input {}: {}", paths.input_file, e);
            std::process::exit(1);
        }
    };
    let mut sink = match WriterSink::create(&paths.output_file) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("failed to create output {}: {}", paths.output_file, e);
            std::process::exit(1);
        }
    };
    tracing::info!("decoding {} -> {}", paths.input_file, paths.output_file);

    // Set up Ctrl+C handler for graceful shutdown
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .expect("failed to set Ctrl+C handler");

    let mut sync = StreamSynchronizer::new();
    let mut observer = LogObserver::new();
    match sync.run(&mut source, &mut sink, &mut observer, Some(&*running)) {
        Ok(stats) => {
            tracing::info!("wrote {} payloads to {}", stats.good, paths.output_file);
        }
        Err(e) => {
            tracing::error!("decoding aborted after {} bytes: {}", sync.stats().bytes_in, e);
            std::process::exit(1);
        }
    }
}
