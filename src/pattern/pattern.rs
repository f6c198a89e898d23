// Mon Feb 02 2026 - Alex

use crate::pattern::PatternError;
use std::fmt;

/// A byte signature with optional wildcard positions. Bytes and mask are
/// kept side by side; `mask[i] == true` means position `i` must match
/// exactly, `false` is a wildcard. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Pattern {
    bytes: Vec<u8>,
    mask: Vec<bool>,
}

impl Pattern {
    pub fn new(bytes: Vec<u8>, mask: Vec<bool>) -> Self {
        assert_eq!(
            bytes.len(),
            mask.len(),
            "Pattern bytes and mask must have same length"
        );
        Self { bytes, mask }
    }

    /// Strict signature parser: whitespace-separated hex bytes, with `?`
    /// or `??` marking a wildcard. Rejects empty and malformed input.
    pub fn parse(sig: &str) -> Result<Self, PatternError> {
        let mut bytes = Vec::new();
        let mut mask = Vec::new();

        for token in sig.split_whitespace() {
            if token == "?" || token == "??" {
                bytes.push(0);
                mask.push(false);
            } else {
                let byte = u8::from_str_radix(token, 16)
                    .map_err(|_| PatternError::InvalidToken(token.to_string()))?;
                bytes.push(byte);
                mask.push(true);
            }
        }

        if bytes.is_empty() {
            return Err(PatternError::Empty);
        }

        Ok(Self { bytes, mask })
    }

    /// Lenient parser: tokens that are neither hex bytes nor wildcards are
    /// skipped. Prefer `parse` for build-time signature tables.
    pub fn from_hex(hex: &str) -> Self {
        let mut bytes = Vec::new();
        let mut mask = Vec::new();

        for part in hex.split_whitespace() {
            if part == "??" || part == "?" {
                bytes.push(0);
                mask.push(false);
            } else if let Ok(byte) = u8::from_str_radix(part, 16) {
                bytes.push(byte);
                mask.push(true);
            }
        }

        Self { bytes, mask }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mask = vec![true; bytes.len()];
        Self {
            bytes: bytes.to_vec(),
            mask,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte at `index`; `None` for a wildcard position.
    pub fn at(&self, index: usize) -> Option<u8> {
        if self.mask[index] {
            Some(self.bytes[index])
        } else {
            None
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    pub fn significant_byte_count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }

    pub fn wildcard_byte_count(&self) -> usize {
        self.mask.iter().filter(|&&m| !m).count()
    }

    pub fn to_hex_string(&self) -> String {
        self.bytes
            .iter()
            .zip(self.mask.iter())
            .map(|(b, &m)| {
                if m {
                    format!("{:02X}", b)
                } else {
                    "??".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes && self.mask == other.mask
    }
}

impl Eq for Pattern {}

pub struct PatternBuilder {
    bytes: Vec<u8>,
    mask: Vec<bool>,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            mask: Vec::new(),
        }
    }

    pub fn byte(mut self, b: u8) -> Self {
        self.bytes.push(b);
        self.mask.push(true);
        self
    }

    pub fn bytes(mut self, bs: &[u8]) -> Self {
        for &b in bs {
            self.bytes.push(b);
            self.mask.push(true);
        }
        self
    }

    pub fn wildcard(mut self) -> Self {
        self.bytes.push(0);
        self.mask.push(false);
        self
    }

    pub fn wildcards(mut self, count: usize) -> Self {
        for _ in 0..count {
            self.bytes.push(0);
            self.mask.push(false);
        }
        self
    }

    pub fn build(self) -> Pattern {
        Pattern {
            bytes: self.bytes,
            mask: self.mask,
        }
    }
}

impl Default for PatternBuilder {
    fn default() -> Self {
        Self::new()
    }
}
