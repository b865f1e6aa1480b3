use hamframe_core::{RawWindow, RAW_FRAME_LEN};

/// Fixed-capacity window over the most recent raw bytes.
/// Holds at most one raw frame worth of codewords.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    buf: RawWindow,
    len: usize,
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl RollingWindow {
    pub fn new() -> Self {
        Self {
            buf: [0u8; RAW_FRAME_LEN],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == RAW_FRAME_LEN
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Appends one byte. Panics if the window is already full.
    pub fn push(&mut self, byte: u8) {
        assert!(!self.is_full(), "RollingWindow::push: window already holds {} bytes", RAW_FRAME_LEN);
        self.buf[self.len] = byte;
        self.len += 1;
    }

    /// Discards the oldest byte, shifting the rest down by one
    pub fn drop_first(&mut self) {
        if self.len == 0 {
            return;
        }
        self.buf.copy_within(1..self.len, 0);
        self.len -= 1;
    }

    /// Discards all bytes, returning how many were held
    pub fn clear(&mut self) -> usize {
        let n = self.len;
        self.len = 0;
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_drop_first() {
        let mut w = RollingWindow::new();
        for b in 0..RAW_FRAME_LEN as u8 {
            w.push(b);
        }
        assert!(w.is_full());
        w.drop_first();
        assert_eq!(w.len(), RAW_FRAME_LEN - 1);
        assert_eq!(w.as_slice()[0], 1);
        assert_eq!(w.as_slice()[RAW_FRAME_LEN - 2], RAW_FRAME_LEN as u8 - 1);
        w.push(0xFF);
        assert_eq!(w.as_slice()[RAW_FRAME_LEN - 1], 0xFF);
    }

    #[test]
    fn test_clear() {
        let mut w = RollingWindow::new();
        w.push(1);
        w.push(2);
        assert_eq!(w.clear(), 2);
        assert!(w.is_empty());
        w.drop_first();
        assert!(w.is_empty());
    }

    #[test]
    #[should_panic(expected = "window already holds")]
    fn test_push_overflow() {
        let mut w = RollingWindow::new();
        for _ in 0..=RAW_FRAME_LEN {
            w.push(0);
        }
    }
}
