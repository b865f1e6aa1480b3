use clap::Parser;

use std::fs;

use hamframe_codec::channel::ChannelSim;
use hamframe_config::{CfgGenerator, HamframeConfig, toml_config};
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

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "hamframe test stream generator",
    long_about = "Encodes random payloads into Hamming(8,4) frames and passes them through a noisy channel model"
)]
struct Args {
    /// Config file (required)
    #[arg(help = "TOML config with generator settings")]
    config: String,

    #[arg(short = 'n', long = "frames", help = "Number of frames, overrides generator.frame_count")]
    frames: Option<usize>,

    #[arg(short = 's', long = "seed", help = "RNG seed, overrides generator.seed")]
    seed: Option<u64>,
}

fn write_or_exit(path: &str, data: &[u8]) {
    if let Err(e) = fs::write(path, data) {
        tracing::error!("failed to write {}: {}", path, e);
        std::process::exit(1);
    }
}

fn main() {
    eprintln!("[+] hamframe test stream generator");

    let args = Args::parse();
    let cfg = load_config_from_toml(&args.config);
    let _log_guard = debug::setup_logging_default(cfg.debug_log.clone());

    let mut gen_cfg: CfgGenerator = cfg.generator.clone().unwrap_or_default();
    if let Some(n) = args.frames {
        gen_cfg.frame_count = n;
    }
    if let Some(s) = args.seed {
        gen_cfg.seed = s;
    }
    if gen_cfg.frame_count == 0 {
        tracing::error!("frame count must be at least 1");
        std::process::exit(1);
    }

    tracing::info!(
        "generating {} frames, bit_error_p={} byte_drop_p={} seed={}",
        gen_cfg.frame_count,
        gen_cfg.bit_error_p,
        gen_cfg.byte_drop_p,
        gen_cfg.seed
    );

    let mut channel = ChannelSim::new(gen_cfg.bit_error_p, gen_cfg.byte_drop_p, gen_cfg.seed);
    let (payloads, stream) = channel.generate_stream(gen_cfg.frame_count);

    write_or_exit(&gen_cfg.output_file, &stream);
    if let Some(ref payload_file) = gen_cfg.payload_file {
        let flat: Vec<u8> = payloads.iter().flatten().copied().collect();
        write_or_exit(payload_file, &flat);
    }

    let stats = channel.stats();
    tracing::info!(
        "wrote {} bytes to {} ({} bytes dropped, {} bits flipped)",
        stream.len(),
        gen_cfg.output_file,
        stats.bytes_dropped,
        stats.bits_flipped
    );
}
