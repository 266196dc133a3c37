/// Reasons a byte sequence is not a well-formed UTF-8 code point
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("end of input")]
    EndOfInput,
    #[error("invalid UTF-8 start byte 0x{0:02X}")]
    InvalidStartByte(u8),
    #[error("incomplete UTF-8 sequence")]
    Incomplete,
    #[error("invalid UTF-8 continuation byte")]
    InvalidContinuation,
    #[error("overlong UTF-8 encoding")]
    Overlong,
    #[error("UTF-16 surrogate in UTF-8")]
    Surrogate,
    #[error("codepoint beyond Unicode range")]
    OutOfRange,
}

/// Decode the first code point of `bytes`
///
/// Returns the character and the number of bytes it occupies. Only the bytes
/// of that one code point are inspected.
pub fn decode(bytes: &[u8]) -> Result<(char, usize), DecodeError> {
    let &b1 = bytes.first().ok_or(DecodeError::EndOfInput)?;

    // Sequence length, minimum scalar for that length, and lead byte payload
    let (len, min, lead) = match b1 {
        0x00..=0x7F => return Ok((char::from(b1), 1)),
        0x80..=0xBF => return Err(DecodeError::InvalidStartByte(b1)),
        0xC0..=0xDF => (2, 0x80, u32::from(b1 & 0x1F)),
        0xE0..=0xEF => (3, 0x800, u32::from(b1 & 0x0F)),
        0xF0..=0xF7 => (4, 0x10000, u32::from(b1 & 0x07)),
        0xF8..=0xFF => return Err(DecodeError::InvalidStartByte(b1)),
    };

    let continuation = bytes.get(1..len).ok_or(DecodeError::Incomplete)?;
    let mut cp = lead;
    for &byte in continuation {
        if byte & 0xC0 != 0x80 {
            return Err(DecodeError::InvalidContinuation);
        }
        cp = (cp << 6) | u32::from(byte & 0x3F);
    }

    if cp < min {
        return Err(DecodeError::Overlong);
    }
    if (0xD800..=0xDFFF).contains(&cp) {
        return Err(DecodeError::Surrogate);
    }
    let ch = char::from_u32(cp).ok_or(DecodeError::OutOfRange)?;

    Ok((ch, len))
}
