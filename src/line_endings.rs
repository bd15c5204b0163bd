use std::fs;
use std::path::Path;

use encoding::{decode_text, decode_text_lossy};
use error::*;

/// Returns whether every `\n` in `text` is immediately preceded by `\r`.
pub fn has_proper_line_endings(text: &str) -> bool {
    let mut previous = '\0';
    for current in text.chars() {
        if current == '\n' && previous != '\r' {
            return false;
        }
        previous = current;
    }
    true
}

pub fn file_has_proper_line_endings(file: &Path) -> Result<bool> {
    let bytes = fs::read(file).chain_err(|| format!("Unable to read file {}", file.to_string_lossy()))?;
    Ok(has_proper_line_endings(&decode_text_lossy(&bytes)))
}

/// Rewrites every line terminator in `text` as `\r\n`. Lone `\r` is left alone.
pub fn convert_to_crlf(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "\r\n")
}

/// Converts `file` to `\r\n` line endings in place, keeping its encoding.
pub fn fix_line_endings(file: &Path) -> Result<()> {
    let (text, encoding) = {
        let bytes = fs::read(file).chain_err(|| format!("Unable to read file {}", file.to_string_lossy()))?;
        decode_text(&file.to_string_lossy(), &bytes)?
    };
    fs::write(file, encoding.encode(&convert_to_crlf(&text)))
        .chain_err(|| format!("Unable to write file {}", file.to_string_lossy()))?;
    Ok(())
}
