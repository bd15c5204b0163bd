//! Byte-order-mark based text decoding.
//!
//! Files are decoded the way most Windows tooling reads them: a byte order
//! mark selects UTF-8 or UTF-16, anything else is read as UTF-8. The detected
//! encoding is kept so text can be written back exactly as it was found.

use std::char;

use error::*;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16BE_BOM: &[u8] = &[0xFE, 0xFF];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
}

impl TextEncoding {
    pub fn detect(bytes: &[u8]) -> TextEncoding {
        if bytes.starts_with(UTF8_BOM) {
            TextEncoding::Utf8Bom
        } else if bytes.starts_with(UTF16LE_BOM) {
            TextEncoding::Utf16Le
        } else if bytes.starts_with(UTF16BE_BOM) {
            TextEncoding::Utf16Be
        } else {
            TextEncoding::Utf8
        }
    }

    fn bom(self) -> &'static [u8] {
        match self {
            TextEncoding::Utf8 => &[],
            TextEncoding::Utf8Bom => UTF8_BOM,
            TextEncoding::Utf16Le => UTF16LE_BOM,
            TextEncoding::Utf16Be => UTF16BE_BOM,
        }
    }

    fn strip_bom(self, bytes: &[u8]) -> &[u8] {
        if bytes.starts_with(self.bom()) {
            &bytes[self.bom().len()..]
        } else {
            bytes
        }
    }

    fn decode(self, bytes: &[u8]) -> ::std::result::Result<String, String> {
        let body = self.strip_bom(bytes);
        match self {
            TextEncoding::Utf8 | TextEncoding::Utf8Bom => {
                String::from_utf8(body.to_vec()).map_err(|error| error.to_string())
            }
            TextEncoding::Utf16Le => decode_utf16(body, u16::from_le_bytes),
            TextEncoding::Utf16Be => decode_utf16(body, u16::from_be_bytes),
        }
    }

    pub fn encode(self, text: &str) -> Vec<u8> {
        let mut bytes = self.bom().to_vec();
        match self {
            TextEncoding::Utf8 | TextEncoding::Utf8Bom => bytes.extend_from_slice(text.as_bytes()),
            TextEncoding::Utf16Le => {
                for unit in text.encode_utf16() {
                    bytes.extend_from_slice(&unit.to_le_bytes());
                }
            }
            TextEncoding::Utf16Be => {
                for unit in text.encode_utf16() {
                    bytes.extend_from_slice(&unit.to_be_bytes());
                }
            }
        }
        bytes
    }
}

/// Decodes like `decode`, but substitutes U+FFFD for anything malformed.
fn decode_lossy(encoding: TextEncoding, bytes: &[u8]) -> String {
    let body = encoding.strip_bom(bytes);
    let units_from = |from_bytes: fn([u8; 2]) -> u16| {
        let mut text: String = char::decode_utf16(body.chunks(2).filter(|pair| pair.len() == 2)
                .map(|pair| from_bytes([pair[0], pair[1]])))
            .map(|decoded| decoded.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect();
        if body.len() % 2 != 0 {
            text.push(char::REPLACEMENT_CHARACTER);
        }
        text
    };
    match encoding {
        TextEncoding::Utf8 | TextEncoding::Utf8Bom => String::from_utf8_lossy(body).into_owned(),
        TextEncoding::Utf16Le => units_from(u16::from_le_bytes),
        TextEncoding::Utf16Be => units_from(u16::from_be_bytes),
    }
}

fn decode_utf16(body: &[u8], from_bytes: fn([u8; 2]) -> u16) -> ::std::result::Result<String, String> {
    if body.len() % 2 != 0 {
        return Err(format!("UTF-16 text has an odd number of bytes ({})", body.len()));
    }
    let units = body.chunks(2).map(|pair| from_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<::std::result::Result<String, _>>()
        .map_err(|error| error.to_string())
}

/// Decodes `bytes` read from `file`, returning the text and the encoding it was stored in.
pub fn decode_text(file: &str, bytes: &[u8]) -> Result<(String, TextEncoding)> {
    let encoding = TextEncoding::detect(bytes);
    trace!("Detected {:?} for {}", encoding, file);
    match encoding.decode(bytes) {
        Ok(text) => Ok((text, encoding)),
        Err(reason) => bail!(ErrorKind::InvalidText(file.to_string(), reason)),
    }
}

/// Decodes `bytes` for reading only, replacing malformed sequences instead of failing.
///
/// Replacement characters never stand in for `\r` or `\n`, so line ending
/// checks on the result are exact.
pub fn decode_text_lossy(bytes: &[u8]) -> String {
    decode_lossy(TextEncoding::detect(bytes), bytes)
}
