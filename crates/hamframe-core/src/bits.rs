/// Returns bit `bit` (0 = LSB) of `byte` as 0 or 1.
#[inline]
pub fn get_bit(byte: u8, bit: u8) -> u8 {
    debug_assert!(bit < 8, "get_bit: bit index {} out of range", bit);
    (byte >> bit) & 1
}

/// Flips bit `bit` (0 = LSB) of `byte`.
#[inline]
pub fn flip_bit(byte: u8, bit: u8) -> u8 {
    debug_assert!(bit < 8, "flip_bit: bit index {} out of range", bit);
    byte ^ (1 << bit)
}

/// XOR of all bytes in `input`. Returns 0 for an empty slice.
pub fn xor_fold(input: &[u8]) -> u8 {
    input.iter().fold(0, |acc, &b| acc ^ b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_bit() {
        let v = 0b1000_0101u8;
        assert_eq!(get_bit(v, 0), 1);
        assert_eq!(get_bit(v, 1), 0);
        assert_eq!(get_bit(v, 2), 1);
        assert_eq!(get_bit(v, 7), 1);
    }

    #[test]
    fn test_flip_bit() {
        assert_eq!(flip_bit(0x00, 3), 0x08);
        assert_eq!(flip_bit(0xFF, 7), 0x7F);
        assert_eq!(flip_bit(flip_bit(0x5A, 4), 4), 0x5A);
    }

    #[test]
    fn test_xor_fold() {
        assert_eq!(xor_fold(&[]), 0);
        assert_eq!(xor_fold(&[0x12; 12]), 0);
        assert_eq!(xor_fold(&[0x01, 0x02, 0x04]), 0x07);
    }
}
