use thiserror::Error;

/// Prefix prepended to the source key to name the thumbnail
pub const THUMBNAIL_PREFIX: &str = "resized-";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyDecodeError {
    #[error("invalid escape sequence at byte {position}")]
    MalformedEscape { position: usize },
    #[error("decoded key is not valid UTF-8")]
    InvalidUtf8,
    #[error("key is empty")]
    Empty,
}

/// Decode an S3 object key as delivered in event payloads.
///
/// `+` means space and every `%` must be followed by two hex digits.
pub fn decode_key(raw: &str) -> Result<String, KeyDecodeError> {
    let bytes = raw.as_bytes();
    if let Some(position) = bytes.iter().enumerate().position(|(i, b)| {
        *b == b'%'
            && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
    }) {
        return Err(KeyDecodeError::MalformedEscape { position });
    }

    let with_spaces = raw.replace('+', " ");
    let decoded = urlencoding::decode(&with_spaces)
        .map_err(|_| KeyDecodeError::InvalidUtf8)?
        .into_owned();

    if decoded.is_empty() {
        return Err(KeyDecodeError::Empty);
    }

    Ok(decoded)
}

/// Destination key for a decoded source key
pub fn thumbnail_key(source_key: &str) -> String {
    format!("{}{}", THUMBNAIL_PREFIX, source_key)
}
