use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use toml::Value;

use super::decoder_config::{CfgDecoder, CfgGenerator, HamframeConfig};

/// Build `HamframeConfig` from a TOML configuration string
pub fn from_toml_str(toml_str: &str) -> Result<HamframeConfig, Box<dyn std::error::Error>> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    // Various sanity checks
    let expected_config_version = "0.1";
    if !root.config_version.eq(expected_config_version) {
        return Err(format!(
            "Unrecognized config_version: {}, expect {}",
            root.config_version, expected_config_version
        )
        .into());
    }
    if !root.extra.is_empty() {
        return Err(format!("Unrecognized top-level fields: {:?}", sorted_keys(&root.extra)).into());
    }
    if let Some(ref dec) = root.decoder {
        if !dec.extra.is_empty() {
            return Err(format!("Unrecognized fields in decoder: {:?}", sorted_keys(&dec.extra)).into());
        }
    }
    if let Some(ref generator) = root.generator {
        if !generator.extra.is_empty() {
            return Err(format!("Unrecognized fields in generator: {:?}", sorted_keys(&generator.extra)).into());
        }
    }

    let mut cfg = HamframeConfig {
        debug_log: root.debug_log,
        decoder: None,
        generator: None,
    };

    if let Some(dec) = root.decoder {
        cfg.decoder = Some(CfgDecoder {
            input_file: dec.input_file,
            output_file: dec.output_file,
        });
    }

    if let Some(generator) = root.generator {
        let mut gen_cfg = CfgGenerator::default();
        apply_generator_patch(&mut gen_cfg, generator);
        cfg.generator = Some(gen_cfg);
    }

    cfg.validate()?;
    Ok(cfg)
}

/// Build `HamframeConfig` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<HamframeConfig, Box<dyn std::error::Error>> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `HamframeConfig` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<HamframeConfig, Box<dyn std::error::Error>> {
    let f = File::open(path)?;
    let r = BufReader::new(f);
    let cfg = from_reader(r)?;
    Ok(cfg)
}

fn apply_generator_patch(dst: &mut CfgGenerator, src: GeneratorDto) {
    if let Some(v) = src.output_file {
        dst.output_file = v;
    }

    // Option
    dst.payload_file = src.payload_file;

    if let Some(v) = src.frame_count {
        dst.frame_count = v;
    }
    if let Some(v) = src.bit_error_p {
        dst.bit_error_p = v;
    }
    if let Some(v) = src.byte_drop_p {
        dst.byte_drop_p = v;
    }
    if let Some(v) = src.seed {
        dst.seed = v;
    }
}

fn sorted_keys(map: &HashMap<String, Value>) -> Vec<&str> {
    let mut v: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    v.sort_unstable();
    v
}

/// ----------------------- DTOs for input shape -----------------------

#[derive(Deserialize)]
struct TomlConfigRoot {
    config_version: String,
    debug_log: Option<String>,

    #[serde(default)]
    decoder: Option<DecoderDto>,

    #[serde(default)]
    generator: Option<GeneratorDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct DecoderDto {
    pub input_file: String,
    pub output_file: String,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Default, Deserialize)]
struct GeneratorDto {
    pub output_file: Option<String>,
    pub payload_file: Option<String>,
    pub frame_count: Option<usize>,
    pub bit_error_p: Option<f64>,
    pub byte_drop_p: Option<f64>,
    pub seed: Option<u64>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = r#"
        config_version = "0.1"
        debug_log = "hamframe.log"

        [decoder]
        input_file = "bit_error.bin"
        output_file = "decoded.bin"

        [generator]
        output_file = "noisy.bin"
        payload_file = "original.bin"
        frame_count = 500
        bit_error_p = 0.001
        seed = 42
    "#;

    #[test]
    fn test_full_config() {
        let cfg = from_toml_str(FULL_CONFIG).expect("valid config");
        assert_eq!(cfg.debug_log.as_deref(), Some("hamframe.log"));

        let dec = cfg.decoder.expect("decoder section");
        assert_eq!(dec.input_file, "bit_error.bin");
        assert_eq!(dec.output_file, "decoded.bin");

        let generator = cfg.generator.expect("generator section");
        assert_eq!(generator.output_file, "noisy.bin");
        assert_eq!(generator.payload_file.as_deref(), Some("original.bin"));
        assert_eq!(generator.frame_count, 500);
        assert_eq!(generator.bit_error_p, 0.001);
        // Not given, falls back to default
        assert_eq!(generator.byte_drop_p, 0.01);
        assert_eq!(generator.seed, 42);
    }

    #[test]
    fn test_minimal_config() {
        let cfg = from_toml_str("config_version = \"0.1\"").expect("valid config");
        assert!(cfg.debug_log.is_none());
        assert!(cfg.decoder.is_none());
        assert!(cfg.generator.is_none());
    }

    #[test]
    fn test_wrong_version() {
        let err = from_toml_str("config_version = \"0.5\"").unwrap_err();
        assert!(err.to_string().contains("Unrecognized config_version"));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let err = from_toml_str("config_version = \"0.1\"\nfoo = 1").unwrap_err();
        assert!(err.to_string().contains("top-level"));

        let err = from_toml_str(
            "config_version = \"0.1\"\n[decoder]\ninput_file = \"a\"\noutput_file = \"b\"\nwindow = 31",
        )
        .unwrap_err();
        assert!(err.to_string().contains("decoder"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = from_toml_str("config_version = \"0.1\"\n[generator]\nbyte_drop_p = -0.5").unwrap_err();
        assert!(err.to_string().contains("byte_drop_p"));
    }
}
