//! Encoding detection and text file reading.
//!
//! Inputs are decoded before counting so that legacy Japanese encodings
//! (Shift_JIS, EUC-JP) are measured by their characters, not their bytes:
//! - BOM detection (UTF-8, UTF-16 LE/BE)
//! - UTF-8 fast-path with strict validation
//! - Fallback encoding detection using chardetng
//! - Binary file detection

use anyhow::{Context, Result};
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const DEFAULT_SAMPLE_SIZE: usize = 8192;

/// Detect the encoding of raw bytes.
///
/// BOM first, then strict UTF-8, then chardetng.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

/// Detect if a file is binary (not text).
///
/// Null bytes mark a file as binary unless it starts with a UTF-16 BOM; failing
/// that, fewer than 70% printable bytes does. Non-ASCII bytes count as
/// printable so that CJK text in legacy encodings passes. Read failures are
/// returned, not guessed.
pub fn is_binary_file(path: &Path, sample_size: usize) -> Result<bool> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let mut sample = vec![0u8; sample_size];
    let bytes_read = file
        .read(&mut sample)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    sample.truncate(bytes_read);

    if sample.is_empty() {
        return Ok(false);
    }

    if let Some((encoding, _)) = Encoding::for_bom(&sample) {
        if encoding == UTF_16LE || encoding == UTF_16BE {
            return Ok(false);
        }
    }

    if sample.contains(&0) {
        return Ok(true);
    }

    let printable_count = sample
        .iter()
        .filter(|&&b| (32..=126).contains(&b) || b >= 0x80 || b == 9 || b == 10 || b == 13)
        .count();

    Ok((printable_count as f64 / sample.len() as f64) < 0.70)
}

/// Read a text file, decoding it with `encoding` or a detected encoding.
///
/// A BOM always wins over `encoding`, matching `encoding_rs` decode rules.
/// Malformed sequences become U+FFFD.
///
/// # Returns
/// A tuple `(content, encoding_used)`
pub fn read_text_file(path: &Path, encoding: Option<&str>) -> Result<(String, String)> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    decode_bytes(&bytes, encoding)
        .with_context(|| format!("Failed to decode file: {}", path.display()))
}

/// Decode bytes from a file or stdin.
pub fn decode_bytes(bytes: &[u8], encoding: Option<&str>) -> Result<(String, String)> {
    let encoding = match encoding {
        Some(label) => Encoding::for_label(label.trim().as_bytes())
            .with_context(|| format!("Unknown encoding label '{label}'"))?,
        None => detect_encoding(bytes),
    };

    let (decoded, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!("Input contained invalid {} sequences; replaced with U+FFFD", used.name());
    }

    Ok((decoded.into_owned(), used.name().to_lowercase()))
}
