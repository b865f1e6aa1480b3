/// Decoder input/output configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CfgDecoder {
    /// Raw codeword stream to read
    pub input_file: String,
    /// Destination for decoded payloads, written back to back
    pub output_file: String,
}

/// Test stream generator configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CfgGenerator {
    /// Raw (noisy) codeword stream to write
    pub output_file: String,
    /// Optional file receiving the original payloads, for comparison with decoder output
    pub payload_file: Option<String>,
    pub frame_count: usize,
    /// Per-bit flip probability, applied to bits 7..1 of every byte
    pub bit_error_p: f64,
    /// Per-byte drop probability
    pub byte_drop_p: f64,
    pub seed: u64,
}

impl Default for CfgGenerator {
    fn default() -> Self {
        Self {
            output_file: default_generator_output(),
            payload_file: None,
            frame_count: default_frame_count(),
            bit_error_p: default_error_p(),
            byte_drop_p: default_error_p(),
            seed: 0,
        }
    }
}

#[inline]
fn default_generator_output() -> String {
    "bit_error.bin".to_string()
}

#[inline]
fn default_frame_count() -> usize {
    2000
}

#[inline]
fn default_error_p() -> f64 {
    0.01
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HamframeConfig {
    pub debug_log: Option<String>,

    pub decoder: Option<CfgDecoder>,

    pub generator: Option<CfgGenerator>,
}

impl HamframeConfig {
    /// Validate that all required configuration fields are properly set.
    pub fn validate(&self) -> Result<(), &str> {
        if let Some(ref dec) = self.decoder {
            if dec.input_file.is_empty() {
                return Err("decoder.input_file must not be empty");
            }
            if dec.output_file.is_empty() {
                return Err("decoder.output_file must not be empty");
            }
            if dec.input_file == dec.output_file {
                return Err("decoder.input_file and decoder.output_file must differ");
            }
        }

        if let Some(ref generator) = self.generator {
            if generator.output_file.is_empty() {
                return Err("generator.output_file must not be empty");
            }
            if generator.frame_count == 0 {
                return Err("generator.frame_count must be at least 1");
            }
            if !(0.0..=1.0).contains(&generator.bit_error_p) {
                return Err("generator.bit_error_p must be within [0, 1]");
            }
            if !(0.0..=1.0).contains(&generator.byte_drop_p) {
                return Err("generator.byte_drop_p must be within [0, 1]");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoder_cfg(input: &str, output: &str) -> HamframeConfig {
        HamframeConfig {
            decoder: Some(CfgDecoder {
                input_file: input.to_string(),
                output_file: output.to_string(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_decoder() {
        assert!(decoder_cfg("in.bin", "out.bin").validate().is_ok());
        assert!(decoder_cfg("", "out.bin").validate().is_err());
        assert!(decoder_cfg("same.bin", "same.bin").validate().is_err());
    }

    #[test]
    fn test_validate_generator() {
        let mut cfg = HamframeConfig {
            generator: Some(CfgGenerator::default()),
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());

        if let Some(ref mut generator) = cfg.generator {
            generator.bit_error_p = 1.5;
        }
        assert_eq!(cfg.validate(), Err("generator.bit_error_p must be within [0, 1]"));

        if let Some(ref mut generator) = cfg.generator {
            generator.bit_error_p = 0.0;
            generator.frame_count = 0;
        }
        assert_eq!(cfg.validate(), Err("generator.frame_count must be at least 1"));
    }
}
