use crate::tag::{Tag, TlvMap};
use thiserror::Error;

/// Width of the tag plus length header, in characters.
const HEADER_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TlvError {
    #[error("malformed TLV at position {position}: {reason}")]
    MalformedTlv { position: usize, reason: &'static str },
    #[error("field out of pattern at position {position}: {found:?}")]
    InvalidFieldFormat { position: usize, found: String },
}

/// Decodes one TLV stream into a [`TlvMap`].
///
/// The whole input must be consumed: a trailing partial header or a value
/// shorter than its declared length is an error. Positions in errors count
/// characters from the start of `data`.
pub fn parse_tlv(data: &str) -> Result<TlvMap, TlvError> {
    let mut fields = TlvMap::new();
    let mut rest = data;
    let mut position = 0;

    while !rest.is_empty() {
        if rest.chars().take(HEADER_LEN).count() < HEADER_LEN {
            return Err(TlvError::MalformedTlv {
                position,
                reason: "incomplete tag or length",
            });
        }

        let tag = two_digits(rest, 0, position)?;
        let length = two_digits(rest, 2, position + 2)? as usize;

        // Header is ASCII once both fields validated, so byte offsets are safe.
        let body = &rest[HEADER_LEN..];
        let value_end = match body.char_indices().nth(length) {
            Some((offset, _)) => offset,
            None if body.chars().count() == length => body.len(),
            None => {
                return Err(TlvError::MalformedTlv {
                    position,
                    reason: "length exceeds data size",
                })
            }
        };

        fields.insert(Tag::new(tag), &body[..value_end]);
        rest = &body[value_end..];
        position += HEADER_LEN + length;
    }

    Ok(fields)
}

/// Reads the two characters at char offset `at` as a decimal number.
fn two_digits(s: &str, at: usize, position: usize) -> Result<u8, TlvError> {
    let field: String = s.chars().skip(at).take(2).collect();
    let bytes = field.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(TlvError::InvalidFieldFormat { position, found: field });
    }
    Ok((bytes[0] - b'0') * 10 + (bytes[1] - b'0'))
}
